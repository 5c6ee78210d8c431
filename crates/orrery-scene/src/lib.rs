//! Headless scenes built on the orbital kinematics core.
//!
//! A [`SceneConfig`] describes the bodies and label tables of one
//! visualization (seasons, day/night, lunar eclipse, solar system). A
//! [`Scene`] owns the animation state for it, accepts [`Command`]s from a UI
//! layer and produces a [`Snapshot`] of derived values after each tick.
//! [`FrameClock`] turns variable frame times into fixed simulation steps.

mod clock;
mod config;
mod error;
mod presets;
mod scene;

pub use clock::{FIXED_DT, FrameClock, MAX_FRAME_TIME};
pub use config::{BodyConfig, BodyInfo, ObserverConfig, PhaseConfig, SceneConfig, Season};
pub use error::SceneError;
pub use presets::PRESET_NAMES;
pub use scene::{BodySnapshot, Command, Scene, SelectedBody, Snapshot};
