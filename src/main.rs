//! Coin Runner entry point.
//!
//! Loads `config.ini`, applies command line overrides and either opens the
//! raylib window (feature `window`) or runs the simulation headless for a
//! fixed number of frames.
//!
//! # Running
//!
//! ```sh
//! cargo run --release --features window
//! cargo run --release -- --headless --frames 600 --input-script run.json --dump
//! ```

// Do not create console on Windows
#![cfg_attr(
    all(target_os = "windows", feature = "window"),
    windows_subsystem = "windows"
)]

use std::path::PathBuf;

use clap::Parser;
use log::{error, info, warn};

use coinrunner::game::run_headless;
use coinrunner::input::script::{InputScript, ScriptedSource};
use coinrunner::resources::gameconfig::GameConfig;

/// Coin Runner, a small side-scroller
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file (INI).
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Run without a window.
    #[arg(long)]
    headless: bool,

    /// Display frames to simulate in headless mode.
    #[arg(long, value_name = "N", default_value_t = 600)]
    frames: u64,

    /// Simulated display refresh rate in headless mode.
    #[arg(long, value_name = "HZ")]
    fps: Option<f32>,

    /// Seed for coin placement.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// JSON input script played back in headless mode.
    #[arg(long, value_name = "PATH")]
    input_script: Option<PathBuf>,

    /// Print the final state as JSON after a headless run.
    #[arg(long)]
    dump: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config.clone());
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(seed) = cli.seed {
        config.coins.seed = Some(seed);
    }

    if cli.headless || !cfg!(feature = "window") {
        headless(&cli, &config);
        return;
    }

    #[cfg(feature = "window")]
    coinrunner::window::run(&config);
}

fn headless(cli: &Cli, config: &GameConfig) {
    let script = match &cli.input_script {
        Some(path) => match InputScript::from_path(path) {
            Ok(script) => {
                info!(
                    "Loaded input script {:?} ({} frames)",
                    path,
                    script.total_frames()
                );
                script
            }
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        },
        None => InputScript::default(),
    };
    let mut source = ScriptedSource::new(script);
    let fps = cli.fps.unwrap_or(config.target_fps as f32);

    let sim = run_headless(config, &mut source, cli.frames, fps);

    if cli.dump {
        match serde_json::to_string_pretty(&sim.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(e) => error!("Failed to serialize snapshot: {}", e),
        }
    } else {
        println!("Score: {}", sim.score());
    }
}
