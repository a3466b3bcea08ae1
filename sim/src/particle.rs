//! Short-lived spray particles produced by splash events.

use bevy::prelude::*;

use crate::constants::GRAVITY;

/// Isotropic air drag coefficient (per second).
const DRAG: f32 = 0.3;
/// Transparency of a freshly emitted particle; fades linearly to zero.
const MAX_ALPHA: f32 = 0.9;

/// One spray fragment of a splash.
#[derive(Component, Debug, Clone)]
pub struct Particle {
    /// World-space position.
    pub position: Vec3,
    /// Velocity in world units per second.
    pub velocity: Vec3,
    /// Current radius; shrinks as the particle ages.
    pub size: f32,
    /// Remaining lifetime in seconds.
    pub life: f32,
    /// Lifetime at creation; the normalization denominator for fading.
    pub max_life: f32,
    /// Derived transparency in [0, 0.9].
    pub alpha: f32,
}

impl Particle {
    pub fn new(position: Vec3, velocity: Vec3, size: f32, lifespan: f32) -> Self {
        Self {
            position,
            velocity,
            size,
            life: lifespan,
            max_life: lifespan,
            alpha: MAX_ALPHA,
        }
    }

    /// Advance the particle by `dt` seconds. Returns `true` while the
    /// particle is still alive; the owning world removes it otherwise.
    ///
    /// Position integrates the velocity from before this tick's gravity
    /// is applied, unlike the droplet scheme. The two orderings are
    /// deliberately kept distinct: the rendered motion was tuned
    /// against exactly this sequence. Non-positive `dt` leaves the
    /// particle untouched.
    pub fn update(&mut self, dt: f32) -> bool {
        if dt <= 0.0 {
            return self.life > 0.0;
        }

        self.position += self.velocity * dt;
        self.velocity.y -= GRAVITY * dt;
        self.velocity *= 1.0 - DRAG * dt;

        self.life -= dt;

        let fade = (self.life / self.max_life).max(0.0);
        self.alpha = fade * MAX_ALPHA;
        self.size *= 0.8 + 0.2 * fade;

        self.life > 0.0
    }
}
