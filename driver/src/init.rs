use std::time::Duration;

use bevy::prelude::*;
use bevy_app::ScheduleRunnerPlugin;
use bevy_log::{info, LogPlugin};
use sim::{SplashConfig, SplashPlugin, SplashWorld};

use crate::Args;

/// Tick budget for the run; zero means run until interrupted.
#[derive(Resource, Debug, Clone, Copy)]
struct MaxTicks(u64);

/// Number of ticks completed so far.
#[derive(Resource, Debug, Default)]
struct TickCount(u64);

/// How often (in ticks) to log world statistics.
const STATS_LOG_INTERVAL: u64 = 60;

pub fn init(args: Args) {
    let mut app = App::new();
    app.add_plugins(
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
            1.0 / args.tick_rate as f64,
        ))),
    );
    app.add_plugins(LogPlugin::default());

    let world = match args.seed {
        Some(seed) => {
            info!("Seeding simulation with {}", seed);
            SplashWorld::with_seed(seed)
        }
        None => SplashWorld::new(),
    };

    app.insert_resource(world);
    app.insert_resource(SplashConfig {
        spawn_interval: args.spawn_interval,
        droplet_size: args.droplet_size,
        ..default()
    });
    app.insert_resource(MaxTicks(args.max_ticks));
    app.init_resource::<TickCount>();

    app.add_plugins(SplashPlugin);
    app.add_systems(Update, (count_ticks, log_world_stats).chain());

    info!(
        "Starting droplet simulation at {} ticks/s (spawn every {}s)",
        args.tick_rate, args.spawn_interval
    );

    app.run();
}

fn count_ticks(
    mut ticks: ResMut<TickCount>,
    max_ticks: Res<MaxTicks>,
    mut app_exit: EventWriter<AppExit>,
) {
    ticks.0 += 1;
    if max_ticks.0 != 0 && ticks.0 >= max_ticks.0 {
        info!("Reached {} ticks, exiting", max_ticks.0);
        app_exit.write(AppExit::Success);
    }
}

fn log_world_stats(world: Res<SplashWorld>, ticks: Res<TickCount>) {
    if ticks.0 % STATS_LOG_INTERVAL == 0 {
        info!(
            "tick {}: {} droplets falling, {} particles airborne",
            ticks.0,
            world.droplets().len(),
            world.particles().len()
        );
    }
}
