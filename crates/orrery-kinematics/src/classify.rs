//! Angle classification: nearest labelled reference angle, or angular bands.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::angle::{circular_distance, wrap_angle};
use crate::error::{KinematicsError, ensure_finite};

/// One labelled reference angle, e.g. the June solstice at π/2.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry<T> {
    /// Canonical angle in radians.
    pub angle: f64,
    pub label: T,
}

/// Ordered, non-empty mapping from canonical angles to labels.
///
/// Declaration order matters: it breaks ties in [`classify`].
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceTable<T> {
    entries: Vec<ReferenceEntry<T>>,
}

impl<T> ReferenceTable<T> {
    /// Build a table, wrapping every angle into `[0, 2π)`.
    pub fn new(entries: Vec<ReferenceEntry<T>>) -> Result<Self, KinematicsError> {
        if entries.is_empty() {
            return Err(KinematicsError::EmptyTable);
        }
        let entries = entries
            .into_iter()
            .map(|e| {
                Ok(ReferenceEntry {
                    angle: wrap_angle(ensure_finite("reference angle", e.angle)?),
                    label: e.label,
                })
            })
            .collect::<Result<Vec<_>, KinematicsError>>()?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ReferenceEntry<T>] {
        &self.entries
    }

    /// First entry whose label satisfies `pred`.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<&ReferenceEntry<T>> {
        self.entries.iter().find(|e| pred(&e.label))
    }
}

/// Label whose reference angle is circular-nearest to `angle`.
///
/// Ties go to the first declared entry: with references at 0 and π/2, an
/// angle of exactly π/4 classifies as the entry at 0. NaN and infinite
/// angles are rejected.
pub fn classify<T>(angle: f64, table: &ReferenceTable<T>) -> Result<&T, KinematicsError> {
    let angle = ensure_finite("angle", angle)?;
    let mut best = &table.entries[0];
    let mut best_distance = circular_distance(angle, best.angle);
    for entry in &table.entries[1..] {
        let d = circular_distance(angle, entry.angle);
        if d < best_distance {
            best = entry;
            best_distance = d;
        }
    }
    Ok(&best.label)
}

/// A half-open angular interval `[start, end)` carrying a label.
///
/// Bounds lie in `[0, 2π]`. When `start > end` the band wraps through zero,
/// so `[1.6π, 0.4π)` covers the angles on either side of 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Band<T> {
    pub start: f64,
    pub end: f64,
    pub label: T,
}

impl<T> Band<T> {
    /// Whether the wrapped `angle` falls inside this band.
    pub fn contains(&self, angle: f64) -> bool {
        let a = wrap_angle(angle);
        if self.start <= self.end {
            self.start <= a && a < self.end
        } else {
            a >= self.start || a < self.end
        }
    }
}

/// Ordered bands with a fallback for angles no band covers.
#[derive(Clone, Debug, PartialEq)]
pub struct BandTable<T> {
    bands: Vec<Band<T>>,
    fallback: T,
}

impl<T> BandTable<T> {
    pub fn new(bands: Vec<Band<T>>, fallback: T) -> Result<Self, KinematicsError> {
        for band in &bands {
            for bound in [band.start, band.end] {
                let bound = ensure_finite("band bound", bound)?;
                if !(0.0..=TAU).contains(&bound) {
                    return Err(KinematicsError::OutOfRange {
                        name: "band bound",
                        value: bound,
                    });
                }
            }
        }
        Ok(Self { bands, fallback })
    }

    pub fn bands(&self) -> &[Band<T>] {
        &self.bands
    }

    /// Label of the first band containing `angle`, else the fallback.
    pub fn label_for(&self, angle: f64) -> Result<&T, KinematicsError> {
        let angle = ensure_finite("angle", angle)?;
        Ok(self
            .bands
            .iter()
            .find(|b| b.contains(angle))
            .map_or(&self.fallback, |b| &b.label))
    }
}
