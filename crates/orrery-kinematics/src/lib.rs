//! Orbital kinematics for educational sky scenes.
//!
//! Everything here is a pure function of an orbital angle: body positions on
//! circular orbits, axial orientation, season and eclipse classification, and
//! surface illumination. Animation state is an explicit value advanced by
//! elapsed time, never a global.

mod angle;
mod classify;
mod eclipse;
mod error;
mod illumination;
mod orbit;
mod state;
mod system;

pub use angle::{advance_angle, circular_distance, wrap_angle};
pub use classify::{Band, BandTable, ReferenceEntry, ReferenceTable, classify};
pub use eclipse::{EclipseShading, is_totality, moon_tint, progress, shadow_intensity};
pub use error::KinematicsError;
pub use illumination::{Daylight, sun_alignment, surface_normal};
pub use orbit::{
    axis_direction, evenly_spaced_angle, position_about, position_of, subsolar_latitude,
};
pub use state::{AnimationState, SpeedCycle, advance};
pub use system::{BodyState, OrbitalSystem};
