//! Falling droplet kinematics and ground collision.
//!
//! A droplet accelerates under gravity until it first touches the
//! ground plane, bursts into splash particles, and settles in place.
//! Settled droplets are inert; the owning world removes them.

use bevy::prelude::*;
use rand::Rng;

use crate::constants::{GRAVITY, GROUND_Y};
use crate::particle::Particle;
use crate::splash::emit_splash;

/// Fall speed below which the droplet starts stretching (world units/s).
const DEFORM_SPEED_THRESHOLD: f32 = -1.0;
/// Deformation growth rate while falling fast (per second).
const DEFORM_RATE: f32 = 0.5;
/// Maximum deformation factor.
const DEFORM_MAX: f32 = 0.3;

/// A single falling liquid droplet.
#[derive(Component, Debug, Clone)]
pub struct Droplet {
    /// World-space position of the droplet center.
    pub position: Vec3,
    /// Velocity in world units per second.
    pub velocity: Vec3,
    /// Radius, used for both the collision threshold and render scale.
    pub size: f32,
    /// One-way latch set on first ground contact.
    pub has_collided: bool,
    /// Aerodynamic stretch in [0, 0.3]. Read by the external mesh
    /// shaping layer only; never feeds back into the physics.
    pub deform_factor: f32,
}

impl Droplet {
    pub fn new(position: Vec3, velocity: Vec3, size: f32) -> Self {
        Self {
            position,
            velocity,
            size,
            has_collided: false,
            deform_factor: 0.0,
        }
    }

    /// Advance the droplet by `dt` seconds.
    ///
    /// On the first ground contact this appends splash particles to
    /// `sink` before the collision response zeroes the velocity, so the
    /// emission sees the impact speed. Later calls on a settled droplet
    /// leave it pinned to the ground at rest. Non-positive `dt` is a
    /// no-op.
    pub fn update(&mut self, dt: f32, sink: &mut Vec<Particle>, rng: &mut impl Rng) {
        if dt <= 0.0 {
            return;
        }

        self.velocity.y -= GRAVITY * dt;

        if self.velocity.y < DEFORM_SPEED_THRESHOLD && !self.has_collided {
            self.deform_factor = (self.deform_factor + DEFORM_RATE * dt).min(DEFORM_MAX);
        }

        // Semi-implicit Euler: velocity already carries this tick's gravity.
        self.position += self.velocity * dt;

        if self.position.y - self.size < GROUND_Y {
            self.position.y = GROUND_Y + self.size;

            if !self.has_collided {
                self.has_collided = true;
                emit_splash(self.position, self.velocity.y, sink, rng);
            }

            // Re-applied on every grounded tick; idempotent.
            self.velocity = Vec3::ZERO;
        }
    }

    /// Whether the droplet has reached its terminal settled state and
    /// can be removed by the owning world.
    pub fn is_settled(&self) -> bool {
        self.has_collided
    }
}
