//! Day/night at a point on a spinning, tilted planet.

use std::fmt;

use glam::{DQuat, DVec3};

/// Outward unit normal at `latitude`/`longitude` (radians) on a body that has
/// spun by `spin_angle` about its own axis and whose axis is tilted by `tilt`.
pub fn surface_normal(latitude: f64, longitude: f64, spin_angle: f64, tilt: f64) -> DVec3 {
    let local = DVec3::new(
        latitude.cos() * longitude.cos(),
        latitude.sin(),
        latitude.cos() * longitude.sin(),
    );
    let orientation = DQuat::from_rotation_z(tilt) * DQuat::from_rotation_y(spin_angle);
    (orientation * local).normalize()
}

/// Cosine of the angle between a surface normal and the direction to the sun.
///
/// Coincident body and sun positions give 0.
pub fn sun_alignment(normal: DVec3, body_position: DVec3, sun_position: DVec3) -> f64 {
    let to_sun = (sun_position - body_position).normalize_or_zero();
    normal.normalize_or_zero().dot(to_sun)
}

/// Coarse time of day seen from a surface point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Daylight {
    /// Sun nearly overhead.
    Noon,
    /// Sun well above the horizon but low (morning or afternoon).
    Slanted,
    /// Sun near the horizon (dawn or dusk).
    Twilight,
    Night,
}

impl Daylight {
    /// Classify a [`sun_alignment`] value.
    pub fn from_alignment(alignment: f64) -> Self {
        if alignment > 0.7 {
            Daylight::Noon
        } else if alignment > 0.3 {
            Daylight::Slanted
        } else if alignment > -0.3 {
            Daylight::Twilight
        } else {
            Daylight::Night
        }
    }

    /// Whether the point receives direct sunlight.
    pub fn is_lit(self) -> bool {
        matches!(self, Daylight::Noon | Daylight::Slanted)
    }
}

impl fmt::Display for Daylight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Daylight::Noon => "noon",
            Daylight::Slanted => "morning/afternoon",
            Daylight::Twilight => "dawn/dusk",
            Daylight::Night => "midnight",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_point_facing_sun_is_noon() {
        let earth = DVec3::new(15.0, 0.0, 0.0);
        // Longitude π points the untilted equator at -X, toward the sun at the origin.
        let n = surface_normal(0.0, PI, 0.0, 0.0);
        let a = sun_alignment(n, earth, DVec3::ZERO);
        assert!(a > 0.99, "alignment {a}");
        assert_eq!(Daylight::from_alignment(a), Daylight::Noon);
    }

    #[test]
    fn test_point_facing_away_is_night() {
        let earth = DVec3::new(15.0, 0.0, 0.0);
        let n = surface_normal(0.0, 0.0, 0.0, 0.0);
        let a = sun_alignment(n, earth, DVec3::ZERO);
        assert_eq!(Daylight::from_alignment(a), Daylight::Night);
        assert!(!Daylight::from_alignment(a).is_lit());
    }

    #[test]
    fn test_half_spin_swaps_day_and_night() {
        let earth = DVec3::new(15.0, 0.0, 0.0);
        let day = surface_normal(0.0, PI, 0.0, 0.0);
        let night = surface_normal(0.0, PI, PI, 0.0);
        assert!(sun_alignment(day, earth, DVec3::ZERO) > 0.99);
        assert!(sun_alignment(night, earth, DVec3::ZERO) < -0.99);
    }

    #[test]
    fn test_pole_is_twilight_without_tilt() {
        let earth = DVec3::new(15.0, 0.0, 0.0);
        let n = surface_normal(FRAC_PI_2, 0.0, 1.234, 0.0);
        let a = sun_alignment(n, earth, DVec3::ZERO);
        assert!(a.abs() < 1e-9);
        assert_eq!(Daylight::from_alignment(a), Daylight::Twilight);
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(Daylight::from_alignment(0.8), Daylight::Noon);
        assert_eq!(Daylight::from_alignment(0.5), Daylight::Slanted);
        assert_eq!(Daylight::from_alignment(0.0), Daylight::Twilight);
        assert_eq!(Daylight::from_alignment(-0.5), Daylight::Night);
        assert_eq!(Daylight::Noon.to_string(), "noon");
    }

    #[test]
    fn test_coincident_sun_gives_zero() {
        let n = DVec3::Y;
        assert_eq!(sun_alignment(n, DVec3::ONE, DVec3::ONE), 0.0);
    }
}
