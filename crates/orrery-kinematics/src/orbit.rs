//! Circular orbits in a shared orbital plane.
//!
//! The plane is XZ with Y as "up": a body at angle θ on an orbit of radius r
//! sits at `(r cos θ, 0, r sin θ)` relative to whatever it orbits.

use std::f64::consts::TAU;

use glam::{DQuat, DVec3};

use crate::error::{KinematicsError, ensure_finite};

/// Position on a circular orbit of radius `radius` centred on the origin.
pub fn position_of(angle: f64, radius: f64) -> Result<DVec3, KinematicsError> {
    let angle = ensure_finite("angle", angle)?;
    let radius = ensure_finite("orbital radius", radius)?;
    if radius < 0.0 {
        return Err(KinematicsError::NegativeRadius(radius));
    }
    Ok(DVec3::new(radius * angle.cos(), 0.0, radius * angle.sin()))
}

/// Position on a circular orbit around a (possibly moving) parent.
pub fn position_about(center: DVec3, angle: f64, radius: f64) -> Result<DVec3, KinematicsError> {
    Ok(center + position_of(angle, radius)?)
}

/// Direction of a body's spin axis: `+Y` tipped about `+Z` by `tilt` radians.
pub fn axis_direction(tilt: f64) -> DVec3 {
    DQuat::from_rotation_z(tilt) * DVec3::Y
}

/// Latitude (radians) at which the sun stands overhead.
///
/// Angle 0 is the March equinox and π/2 the June solstice, where the subsolar
/// point reaches `+tilt` (the Tropic of Cancer for the Earth).
pub fn subsolar_latitude(angle: f64, tilt: f64) -> f64 {
    tilt * angle.sin()
}

/// Starting angle for the `index`-th of `count` bodies spread evenly around a circle.
pub fn evenly_spaced_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    (index as f64 / count as f64) * TAU
}
