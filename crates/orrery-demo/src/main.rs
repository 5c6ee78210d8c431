//! Headless Orrery runner.
//!
//! Loads `config.ron` (created on first run), applies CLI overrides, then
//! plays a scene for a fixed number of frames and logs what a display would
//! show: season, phase, eclipse shading and the observer's time of day.
//!
//! Run with: `cargo run -p orrery-demo -- --scene lunar-eclipse --frames 600`

mod error;
mod runner;
mod script;

use std::process::ExitCode;

use clap::Parser;
use orrery_config::{CliArgs, Config, default_config_dir};
use tracing::{error, info};

use crate::error::DemoError;
use crate::runner::{Runner, resolve_scene};
use crate::script::Script;

fn run(config: &Config) -> Result<(), DemoError> {
    let scene_config = resolve_scene(&config.scene)?;
    let script = match &config.playback.script {
        Some(path) => Script::load(path)?,
        None => Script::default(),
    };
    let mut runner = Runner::new(scene_config, config.playback.clone(), script)?;
    runner.run()?;
    info!(
        "Final angle {:.1}°",
        runner.scene().state().angle().to_degrees()
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    // Logging is not up yet, so config problems go to stderr.
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config
        .debug
        .log_dir
        .clone()
        .unwrap_or_else(|| config_dir.join("logs"));
    orrery_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    info!("Orrery - config at {}", config_dir.display());

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
