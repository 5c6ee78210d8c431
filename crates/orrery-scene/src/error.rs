//! Scene error types.

use orrery_kinematics::KinematicsError;

/// Errors raised while loading, validating or driving a scene.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// A kinematic input was out of its domain.
    #[error("invalid kinematics: {0}")]
    Kinematics(#[from] KinematicsError),

    /// No built-in preset has this name.
    #[error("unknown scene preset: {0}")]
    UnknownPreset(String),

    /// The primary body id does not name a body of the scene.
    #[error("primary body {0} is not defined")]
    MissingPrimary(String),

    /// The observer stands on a body the scene does not define.
    #[error("observer body {0} is not defined")]
    MissingObserverBody(String),

    /// `jump_to` named a season the table does not contain.
    #[error("unknown season: {0}")]
    UnknownSeason(String),

    /// A body was selected that carries no info card.
    #[error("body {0} has no info")]
    NoBodyInfo(String),

    /// `jump_to` was used on a scene without a season table.
    #[error("scene {0} has no season table")]
    NoSeasons(String),

    /// Failed to read a scene file from disk.
    #[error("failed to read scene: {0}")]
    ReadError(#[source] std::io::Error),

    /// Failed to write a scene file to disk.
    #[error("failed to write scene: {0}")]
    WriteError(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse scene: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Failed to serialize a scene to RON.
    #[error("failed to serialize scene: {0}")]
    SerializeError(#[source] ron::Error),
}
