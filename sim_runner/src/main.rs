//! Headless host for the flyer: drives the 60 Hz clock, feeds touches from an
//! autopilot and prints the end-of-game report.
//!
//! Usage:
//!   cargo run -p sim_runner -- --seed 7 --seconds 90
//!   RUST_LOG=game_core=debug cargo run -p sim_runner -- --idle

mod autopilot;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{Config, Params, Phase, Session, Tuning};
use glam::Vec2;
use tracing::info;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sim-runner")]
#[command(about = "Run a headless flyer session driven by an autopilot")]
struct Args {
    /// Display width in pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f32,

    /// Display height in pixels
    #[arg(long, default_value_t = 600.0)]
    height: f32,

    /// Seed for the session RNG
    #[arg(short, long, default_value_t = 12345)]
    seed: u64,

    /// Simulated seconds before stopping
    #[arg(long, default_value_t = 120.0)]
    seconds: f32,

    /// JSON file with tuning overrides
    #[arg(short, long)]
    tuning: Option<PathBuf>,

    /// Let go after the first touch and never touch again
    #[arg(long)]
    idle: bool,
}

fn load_tuning(path: Option<&PathBuf>) -> Result<Tuning> {
    let Some(path) = path else {
        return Ok(Tuning::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read tuning file: {}", path.display()))?;
    Tuning::from_json(&text).with_context(|| format!("invalid tuning file: {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let tuning = load_tuning(args.tuning.as_ref())?;
    let config = Config::new(args.width, args.height, tuning)
        .context("invalid session configuration")?;

    let centre = Vec2::new(args.width / 2.0, args.height / 2.0);
    let frames = (args.seconds.max(0.0) * Params::FPS).ceil() as u64;
    info!(seed = args.seed, frames, idle = args.idle, "Starting session");

    let mut session = Session::new(config, args.seed);
    session.touch_down(centre);
    let mut holding = true;
    if args.idle {
        session.touch_up(centre);
        holding = false;
    }

    for _ in 0..frames {
        if !args.idle {
            let hold = autopilot::calculate_touch(&session);
            if hold != holding {
                if hold {
                    session.touch_down(centre);
                } else {
                    session.touch_up(centre);
                }
                holding = hold;
            }
        }

        session.advance(Params::FRAME_DT);

        if session.phase() == Phase::GameOver {
            break;
        }
    }

    println!("{}", session.report());
    Ok(())
}
