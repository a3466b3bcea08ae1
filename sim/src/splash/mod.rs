//! Splash emission triggered by droplet ground impacts.
//!
//! One impact produces a crown-shaped ring of spray plus a few
//! near-vertical jets. The emission is stochastic but draws every
//! sample from a caller-supplied RNG, so seeded runs are reproducible.

pub mod config;
pub mod emitter;
pub mod plugin;

pub use config::{SplashConfig, constants};
pub use emitter::emit_splash;
pub use plugin::SplashPlugin;
