use clap::Parser;
use log::{info, warn};
use server::config::{default_presets, load_presets, validate_map_scale};
use server::host::ZoneHost;
use server::rotation::ZoneRotation;
use std::path::PathBuf;
use tokio::time::Duration;

/// Runs a zone rotation against simulated players.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// JSON file with zone presets. Uses the built-in rotation when omitted
    #[clap(short, long)]
    presets: Option<PathBuf>,
    /// Side length of the map image in world units
    #[clap(long, default_value = "2048")]
    map_size: f32,
    /// Unplayable border on each side of the map image
    #[clap(long, default_value = "64")]
    map_border: f32,
    /// Tick rate (updates per second)
    #[clap(short, long, default_value = "10", value_parser = clap::value_parser!(u32).range(1..))]
    tick_rate: u32,
    /// Number of simulated players
    #[clap(short = 'n', long, default_value = "8")]
    players: u32,
    /// Stop after this many ticks. 0 runs until Ctrl+C
    #[clap(long, default_value = "0")]
    ticks: u32,
    /// Seed for player movement
    #[clap(short, long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    let map_scale = validate_map_scale(args.map_size, args.map_border)?;
    let presets = match &args.presets {
        Some(path) => load_presets(path)?,
        None => {
            info!("No preset file given, using the built-in rotation");
            default_presets()
        }
    };
    if presets.is_empty() {
        warn!("Zone rotation is empty");
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Using seed {}", seed);

    let rotation = ZoneRotation::from_presets(&presets, map_scale);
    let mut host = ZoneHost::new(rotation, seed);
    host.spawn_players(args.players);
    host.describe_zones();

    println!("Zone host running at {}Hz", args.tick_rate);
    println!("Set RUST_LOG=info to see zone events, RUST_LOG=debug for per-tick counts");

    host.run(
        Duration::from_secs_f32(1.0 / args.tick_rate as f32),
        args.ticks,
    )
    .await;

    Ok(())
}
