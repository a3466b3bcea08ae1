use bevy::prelude::*;

/// Gravitational acceleration, world units per second squared.
pub const GRAVITY: f32 = 9.8;
/// Height of the ground plane.
pub const GROUND_Y: f32 = -2.0;
/// Height at which new droplets appear.
pub const SPAWN_HEIGHT: f32 = 5.0;
/// Droplets spawn with x and z uniform in [-SPAWN_HALF_EXTENT, SPAWN_HALF_EXTENT].
pub const SPAWN_HALF_EXTENT: f32 = 5.0;
/// Initial velocity of a freshly spawned droplet.
pub const SPAWN_VELOCITY: Vec3 = Vec3::ZERO;
/// Default droplet radius.
pub const DEFAULT_DROPLET_SIZE: f32 = 0.3;
/// Default seconds between automatic droplet spawns.
pub const DEFAULT_SPAWN_INTERVAL: f32 = 0.005;
