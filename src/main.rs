//! Headless demo: spawn one gated entity, run a few frames, report its state.
use anyhow::Result;
use bevy::prelude::*;
use clap::Parser;
use cube_gate::{init_logging, is_active, Health, HealthGatePlugin};
use log::info;

/// Runs a health-gated entity through a headless Bevy app
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Starting health of the entity
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    health: f32,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 1)]
    frames: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(HealthGatePlugin);
    let entity = app.world_mut().spawn(Health(args.health)).id();

    for _ in 0..args.frames {
        app.update();
    }

    let active = is_active(app.world(), entity)?;
    info!(
        "after {} frame(s) with health {}: entity is {}",
        args.frames,
        args.health,
        if active { "active" } else { "inactive" }
    );
    Ok(())
}
