use clap::Parser;
use sim::constants::{DEFAULT_DROPLET_SIZE, DEFAULT_SPAWN_INTERVAL};

mod init;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// RNG seed for a reproducible run; omit for OS entropy.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Seconds between automatic droplet spawns.
    #[arg(long, default_value_t = DEFAULT_SPAWN_INTERVAL)]
    spawn_interval: f32,

    /// Radius of spawned droplets.
    #[arg(long, default_value_t = DEFAULT_DROPLET_SIZE)]
    droplet_size: f32,

    /// Simulation ticks per second.
    #[arg(short, long, default_value_t = 60)]
    tick_rate: u32,

    /// Stop after this many ticks (0 = run until interrupted).
    #[arg(short, long, default_value_t = 0)]
    max_ticks: u64,
}

fn main() {
    let args = Args::parse();

    // Validate tick_rate is within reasonable range
    if args.tick_rate < 1 || args.tick_rate > 1000 {
        eprintln!("Error: tick_rate must be between 1 and 1000 (inclusive).");
        eprintln!("Got: {}", args.tick_rate);
        std::process::exit(1);
    }

    if args.spawn_interval <= 0.0 {
        eprintln!(
            "Error: spawn_interval must be positive. Got: {}",
            args.spawn_interval
        );
        std::process::exit(1);
    }

    if args.droplet_size <= 0.0 {
        eprintln!(
            "Error: droplet_size must be positive. Got: {}",
            args.droplet_size
        );
        std::process::exit(1);
    }

    init::init(args);
}
