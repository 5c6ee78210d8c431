//! Command-line argument parsing for Orrery.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Headless orbital scene runner")]
pub struct CliArgs {
    /// Built-in scene preset (earth-seasons, season-explorer, earth-day-night,
    /// lunar-eclipse, solar-system).
    #[arg(long)]
    pub scene: Option<String>,

    /// RON scene description; takes precedence over --scene.
    #[arg(long)]
    pub scene_file: Option<PathBuf>,

    /// Number of frames to run.
    #[arg(long)]
    pub frames: Option<u64>,

    /// Seconds per frame.
    #[arg(long)]
    pub frame_time: Option<f64>,

    /// Initial speed multiplier.
    #[arg(long)]
    pub speed: Option<f64>,

    /// Start paused.
    #[arg(long)]
    pub paused: bool,

    /// Log a snapshot every N frames.
    #[arg(long)]
    pub report_every: Option<u64>,

    /// RON command script.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref preset) = args.scene {
            self.scene.preset = preset.clone();
            self.scene.file = None;
        }
        if let Some(ref file) = args.scene_file {
            self.scene.file = Some(file.clone());
        }
        if let Some(frames) = args.frames {
            self.playback.frames = frames;
        }
        if let Some(dt) = args.frame_time {
            self.playback.frame_time = dt;
        }
        if let Some(speed) = args.speed {
            self.playback.speed = speed;
        }
        if args.paused {
            self.playback.start_playing = false;
        }
        if let Some(n) = args.report_every {
            self.playback.report_every = n;
        }
        if let Some(ref script) = args.script {
            self.playback.script = Some(script.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
