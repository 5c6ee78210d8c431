//! Errors surfaced by the demo runner.

use orrery_config::ConfigError;
use orrery_scene::SceneError;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    /// Failed to read a command script from disk.
    #[error("failed to read script: {0}")]
    ScriptRead(#[source] std::io::Error),

    /// Failed to parse a command script.
    #[error("failed to parse script: {0}")]
    ScriptParse(#[source] ron::error::SpannedError),

    #[error("frame time must be finite and positive, got {0}")]
    InvalidFrameTime(f64),
}
