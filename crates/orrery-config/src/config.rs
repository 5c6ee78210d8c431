//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Which scene to run.
    pub scene: SceneSettings,
    /// Headless playback settings.
    pub playback: PlaybackConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Scene selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneSettings {
    /// Built-in preset name, used when `file` is unset.
    pub preset: String,
    /// Path to a RON scene description.
    pub file: Option<PathBuf>,
}

/// Headless playback configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Number of presentation frames to run.
    pub frames: u64,
    /// Seconds per presentation frame.
    pub frame_time: f64,
    /// Start playing instead of paused.
    pub start_playing: bool,
    /// Initial speed multiplier.
    pub speed: f64,
    /// Log a snapshot every N frames (0 = only on classification changes).
    pub report_every: u64,
    /// RON list of commands to apply at given frames.
    pub script: Option<PathBuf>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Directory for JSON log files in debug builds.
    pub log_dir: Option<PathBuf>,
}

// --- Default implementations ---

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            preset: "earth-seasons".to_string(),
            file: None,
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            frames: 1200,
            frame_time: 1.0 / 60.0,
            start_playing: true,
            speed: 1.0,
            report_every: 60,
            script: None,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

/// Platform config directory for Orrery, falling back to `./orrery`.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("orrery"))
        .unwrap_or_else(|| PathBuf::from("orrery"))
}

/// File name of the persisted config inside its directory.
pub const CONFIG_FILE: &str = "config.ron";

// --- Load / Save ---

impl Config {
    /// Where the config for `config_dir` lives.
    pub fn path_in(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILE)
    }

    /// Load `config.ron` from `config_dir`. A missing file is replaced by
    /// the defaults, which are written back so users have something to edit.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = Self::path_in(config_dir);
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                let config = ron::from_str(&contents)
                    .map_err(|source| ConfigError::Parse { path: path.clone(), source })?;
                log::info!("Loaded config from {}", path.display());
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let config = Config::default();
                config.save(config_dir)?;
                log::info!("Created default config at {}", path.display());
                Ok(config)
            }
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }

    /// Write pretty RON to `config_dir/config.ron`, creating the directory.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized = ron::ser::to_string_pretty(self, pretty)?;

        let path = Self::path_in(config_dir);
        std::fs::write(&path, serialized).map_err(|source| ConfigError::Write { path, source })
    }
}
