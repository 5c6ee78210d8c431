//! Scalar orbital phase in radians, kept in `[0, 2π)`.

use std::f64::consts::{PI, TAU};

use crate::error::{KinematicsError, ensure_finite};

/// Normalise an angle into `[0, 2π)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `2π`; that case
/// folds back to `0.0` so the half-open range always holds.
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Shortest angular separation between two angles, in `[0, π]`.
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let delta = (wrap_angle(a) - wrap_angle(b)).abs();
    if delta > PI { TAU - delta } else { delta }
}

/// Advance `angle` by `dt * speed` and wrap the result.
///
/// Negative `speed` is retrograde motion and is allowed; negative `dt` is not,
/// and neither is a displacement that overflows.
pub fn advance_angle(angle: f64, dt: f64, speed: f64) -> Result<f64, KinematicsError> {
    let angle = ensure_finite("angle", angle)?;
    let dt = ensure_finite("elapsed time", dt)?;
    let speed = ensure_finite("angular speed", speed)?;
    if dt < 0.0 {
        return Err(KinematicsError::NegativeDelta(dt));
    }
    let displacement = ensure_finite("angular displacement", dt * speed)?;
    Ok(wrap_angle(angle + displacement))
}
