//! Core droplet splash simulation.
//!
//! Two entity kinds: falling [`Droplet`]s that burst on first ground
//! contact, and the short-lived spray [`Particle`]s they emit. A
//! [`SplashWorld`] owns both collections and steps them once per frame;
//! [`SplashPlugin`] wires the stepping into a Bevy app. Rendering is
//! not part of this crate — consumers read positions, sizes, and alphas
//! through [`SplashWorld`] accessors or a [`RenderSnapshot`].

pub mod constants;
pub mod droplet;
pub mod particle;
pub mod splash;
pub mod world;

pub use constants::*;
pub use droplet::Droplet;
pub use particle::Particle;
pub use splash::{SplashConfig, SplashPlugin};
pub use world::{RenderSnapshot, SplashWorld};
