//! Lunar eclipse shading driven by the moon's progress around its orbit.
//!
//! Progress is the moon's angle as a percentage of a full turn. The moon is
//! in the Earth's shadow between 15 % and 85 %, fully shadowed (totality,
//! the "blood moon") between 35 % and 65 %.

use std::f64::consts::TAU;

use glam::Vec3;

use crate::angle::wrap_angle;

const SHADOW_ENTER: f64 = 15.0;
const SHADOW_EXIT: f64 = 85.0;
const TOTALITY_ENTER: f64 = 35.0;
const TOTALITY_EXIT: f64 = 65.0;
/// Fraction of the shadow span spent ramping in (and again ramping out).
const RAMP: f64 = 0.3;

/// Percentage `[0, 100)` of a full orbit completed at `angle`.
pub fn progress(angle: f64) -> f64 {
    wrap_angle(angle) / TAU * 100.0
}

/// How deep in the shadow the moon is, `[0, 1]`.
pub fn shadow_intensity(progress: f64) -> f64 {
    if progress <= SHADOW_ENTER || progress >= SHADOW_EXIT {
        return 0.0;
    }
    let t = (progress - SHADOW_ENTER) / (SHADOW_EXIT - SHADOW_ENTER);
    if t < RAMP {
        t / RAMP
    } else if t > 1.0 - RAMP {
        (1.0 - t) / RAMP
    } else {
        1.0
    }
}

pub fn is_totality(progress: f64) -> bool {
    progress > TOTALITY_ENTER && progress < TOTALITY_EXIT
}

/// Diffuse tint of the moon in linear RGB.
///
/// Grey dimmed by the shadow outside totality, copper red during it.
pub fn moon_tint(progress: f64) -> Vec3 {
    let s = shadow_intensity(progress) as f32;
    if is_totality(progress) {
        Vec3::new(0.6 + s * 0.3, 0.2 - s * 0.1, 0.1 - s * 0.05)
    } else {
        let b = 0.8 - s * 0.6;
        Vec3::new(b, b, b * 0.9)
    }
}

/// Eclipse-derived values for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EclipseShading {
    /// Percentage of the orbit completed.
    pub progress: f64,
    pub shadow_intensity: f64,
    pub totality: bool,
    pub tint: Vec3,
}

impl EclipseShading {
    pub fn at_angle(angle: f64) -> Self {
        let p = progress(angle);
        Self {
            progress: p,
            shadow_intensity: shadow_intensity(p),
            totality: is_totality(p),
            tint: moon_tint(p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_progress_percentage() {
        assert_eq!(progress(0.0), 0.0);
        assert!((progress(PI) - 50.0).abs() < 1e-9);
        assert!((progress(TAU + PI / 2.0) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_shadow_outside_span() {
        for p in [0.0, 10.0, 15.0, 85.0, 99.0] {
            assert_eq!(shadow_intensity(p), 0.0, "progress {p}");
        }
    }

    #[test]
    fn test_shadow_ramps_are_continuous() {
        let mut prev = shadow_intensity(15.0);
        let mut p = 15.0;
        while p < 85.0 {
            p += 0.05;
            let s = shadow_intensity(p);
            assert!((s - prev).abs() < 0.01, "jump at {p}: {prev} -> {s}");
            assert!((0.0..=1.0).contains(&s));
            prev = s;
        }
    }

    #[test]
    fn test_full_shadow_mid_eclipse() {
        assert_eq!(shadow_intensity(50.0), 1.0);
        assert!(is_totality(50.0));
        assert!(!is_totality(35.0));
        assert!(!is_totality(70.0));
    }

    #[test]
    fn test_blood_moon_is_red() {
        let tint = moon_tint(50.0);
        assert!(tint.x > 0.85, "red {}", tint.x);
        assert!(tint.x > tint.y && tint.y > tint.z);
    }

    #[test]
    fn test_uneclipsed_moon_is_grey() {
        let tint = moon_tint(5.0);
        assert!((tint.x - 0.8).abs() < 1e-6);
        assert_eq!(tint.x, tint.y);
        assert!((tint.z - 0.72).abs() < 1e-6);
    }

    #[test]
    fn test_shading_aggregate() {
        let shading = EclipseShading::at_angle(PI);
        assert!(shading.totality);
        assert_eq!(shading.shadow_intensity, 1.0);
        assert!((shading.progress - 50.0).abs() < 1e-9);
    }
}
