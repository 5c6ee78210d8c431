//! Scene configuration structs with RON persistence.

use std::path::Path;

use orrery_kinematics::{Band, ReferenceEntry};
use serde::{Deserialize, Serialize};

use crate::error::SceneError;
use crate::presets;

/// Everything needed to build one visualization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Display name.
    pub name: String,
    /// Bodies in declaration order.
    pub bodies: Vec<BodyConfig>,
    /// Id of the body whose orbital angle is the animation angle.
    pub primary: String,
    /// Angle the primary body starts at and returns to on reset.
    pub initial_angle: f64,
    /// Labelled reference angles for season classification. Empty = none.
    pub seasons: Vec<ReferenceEntry<Season>>,
    /// Angular bands for phase classification (e.g. eclipse stages).
    pub phases: Option<PhaseConfig>,
    /// Derive eclipse shading from the primary angle.
    pub eclipse_shading: bool,
    /// Point on a body whose daylight is reported.
    pub observer: Option<ObserverConfig>,
    /// Multipliers stepped through by `cycle_speed`.
    pub speed_presets: Vec<f64>,
}

/// One body of a scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BodyConfig {
    pub id: String,
    /// Orbital radius in scene units.
    pub orbit_radius: f64,
    /// Orbital angular speed in rad/s at 1x.
    pub angular_speed: f64,
    /// Starting orbital angle in radians.
    pub initial_angle: f64,
    /// Axial tilt in degrees.
    pub axial_tilt_deg: f64,
    /// Spin angular speed in rad/s at 1x.
    pub spin_speed: f64,
    /// Body this one orbits; `None` orbits the origin.
    pub parent: Option<String>,
    /// Descriptive card shown when the body is selected.
    pub info: Option<BodyInfo>,
}

/// Name, blurb and fact list for a body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BodyInfo {
    pub name: String,
    pub description: String,
    pub facts: Vec<String>,
}

/// Descriptive label attached to a season reference angle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Season {
    /// Stable key used by `jump_to`, e.g. `"summer"`.
    pub key: String,
    pub name: String,
    pub description: String,
    pub northern: String,
    pub southern: String,
}

/// Angular phase bands with a fallback label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhaseConfig {
    pub bands: Vec<Band<String>>,
    pub fallback: String,
}

/// Surface point whose time of day is tracked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ObserverConfig {
    pub body: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        presets::earth_seasons()
    }
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            id: String::new(),
            orbit_radius: 0.0,
            angular_speed: 0.0,
            initial_angle: 0.0,
            axial_tilt_deg: 0.0,
            spin_speed: 0.0,
            parent: None,
            info: None,
        }
    }
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            body: "earth".to_string(),
            latitude_deg: 0.0,
            longitude_deg: 0.0,
        }
    }
}

impl SceneConfig {
    /// Built-in scene by name. See [`PRESET_NAMES`](crate::PRESET_NAMES).
    pub fn preset(name: &str) -> Result<Self, SceneError> {
        presets::by_name(name).ok_or_else(|| SceneError::UnknownPreset(name.to_string()))
    }

    /// Fail fast on an invalid configuration.
    pub fn validate(&self) -> Result<(), SceneError> {
        crate::Scene::new(self.clone()).map(|_| ())
    }

    /// Load and validate a scene from a RON file.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let contents = std::fs::read_to_string(path).map_err(SceneError::ReadError)?;
        let config: SceneConfig = ron::from_str(&contents).map_err(SceneError::ParseError)?;
        config.validate()?;
        tracing::info!("Loaded scene {} from {}", config.name, path.display());
        Ok(config)
    }

    /// Write the scene as pretty RON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), SceneError> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(SceneError::WriteError)?;
        }
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(SceneError::SerializeError)?;
        std::fs::write(path, serialized).map_err(SceneError::WriteError)?;
        Ok(())
    }
}
