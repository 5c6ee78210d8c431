//! Configuration system for Orrery.
//!
//! Provides runtime-configurable settings that persist to disk as RON files.
//! Supports CLI overrides via clap and forward/backward compatible
//! serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE, Config, DebugConfig, PlaybackConfig, SceneSettings, default_config_dir,
};
pub use error::ConfigError;
