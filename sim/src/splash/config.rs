//! Splash simulation configuration.
//!
//! Compile-time tuning parameters for the burst patterns, plus the
//! runtime toggles exposed as a resource.

use bevy::prelude::*;

use crate::constants::{DEFAULT_DROPLET_SIZE, DEFAULT_SPAWN_INTERVAL};

/// Compile-time splash emission tuning.
///
/// These constants shape the two sub-bursts of a splash event. Adjust
/// them at compile time to change the look of an impact.
pub mod constants {
    /// Number of particles in the ring-shaped crown burst.
    pub const CROWN_PARTICLE_COUNT: usize = 60;

    /// Number of particles thrown almost straight up per impact.
    pub const VERTICAL_PARTICLE_COUNT: usize = 10;

    /// Fraction of the vertical impact speed converted into splash energy.
    pub const IMPACT_ENERGY_FACTOR: f32 = 0.2;

    /// Upper bound on splash energy. Very fast impacts would otherwise
    /// produce degenerate particle speeds.
    pub const IMPACT_ENERGY_CAP: f32 = 2.0;

    /// Scale of the Gaussian jitter applied to each crown angle (radians).
    ///
    /// Zero gives a perfectly regular ring; larger values break the
    /// crown up into an irregular spray.
    pub const ANGLE_JITTER_SPREAD: f32 = 0.3;

    /// Location parameter (log-space median) of the log-normal
    /// horizontal speed draw.
    pub const SPEED_MEDIAN_BIAS: f32 = 0.5;

    /// Scale parameter of the log-normal horizontal speed draw.
    ///
    /// Log-normal support is strictly positive, so speeds never need
    /// clamping the way a Gaussian draw would.
    pub const SPEED_SPREAD: f32 = 0.3;

    /// Minimum upward speed of a crown particle (world units/s).
    pub const CROWN_UPWARD_BASE: f32 = 1.0;

    /// Scale of the Gaussian contribution on top of the crown's
    /// upward base speed.
    pub const CROWN_UPWARD_JITTER: f32 = 0.5;

    /// Radial offset of crown particles from the impact point, so the
    /// burst does not originate from a single exact point.
    pub const CROWN_RADIAL_OFFSET: f32 = 0.05;

    /// Particle radius range, sampled uniformly.
    pub const PARTICLE_SIZE_MIN: f32 = 0.02;
    pub const PARTICLE_SIZE_MAX: f32 = 0.06;

    /// Particle lifespan range in seconds, sampled uniformly.
    pub const LIFESPAN_MIN: f32 = 0.5;
    pub const LIFESPAN_MAX: f32 = 2.0;

    /// Speed, size, and lifespan scale of the vertical burst relative
    /// to the crown.
    pub const VERTICAL_BURST_SCALE: f32 = 0.8;

    /// Lateral speed damping of the vertical burst.
    pub const VERTICAL_LATERAL_SCALE: f32 = 0.2;

    /// Minimum upward speed of a vertical burst particle.
    pub const VERTICAL_UPWARD_BASE: f32 = 1.5;
}

/// Runtime simulation configuration resource.
#[derive(Resource, Clone, Debug, Reflect)]
#[reflect(Resource)]
pub struct SplashConfig {
    /// Whether the simulation advances. Disabling pauses every droplet
    /// and particle in place.
    pub enabled: bool,

    /// Seconds between automatic droplet spawns.
    pub spawn_interval: f32,

    /// Radius of automatically spawned droplets.
    pub droplet_size: f32,

    /// Whether to log droplet spawn and splash events at debug level.
    pub log_events: bool,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            spawn_interval: DEFAULT_SPAWN_INTERVAL,
            droplet_size: DEFAULT_DROPLET_SIZE,
            log_events: false,
        }
    }
}
