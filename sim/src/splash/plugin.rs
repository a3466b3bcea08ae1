//! Bevy plugin for the droplet splash simulation.

use bevy::prelude::*;

use super::SplashConfig;
use crate::world::SplashWorld;

/// Plugin that adds the droplet splash simulation to an app.
///
/// This plugin:
/// - Initializes the shared [`SplashWorld`] (unless one was inserted
///   beforehand, e.g. seeded)
/// - Steps the simulation each fixed update
/// - Honors the [`SplashConfig::enabled`] pause gate
pub struct SplashPlugin;

impl Plugin for SplashPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SplashConfig>()
            .init_resource::<SplashWorld>()
            .register_type::<SplashConfig>()
            .add_systems(FixedUpdate, step_splash_simulation);
    }
}

/// System that steps the simulation forward.
///
/// Runs in FixedUpdate so the physics sees a consistent timestep. The
/// renderer reads world state after this schedule, never during it.
fn step_splash_simulation(
    mut world: ResMut<SplashWorld>,
    config: Res<SplashConfig>,
    time: Res<Time<Fixed>>,
) {
    if !config.enabled {
        return;
    }

    world.step(time.delta_secs(), &config);
}
