//! A set of bodies on circular orbits, possibly orbiting each other.

use std::collections::HashSet;

use glam::DVec3;

use crate::angle::{advance_angle, wrap_angle};
use crate::error::{KinematicsError, ensure_finite};
use crate::orbit::{axis_direction, position_about};

/// One body's orbit and spin.
///
/// Fields are only reachable through validating setters, so a body always
/// has a finite, non-negative radius and angles in `[0, 2π)`.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyState {
    id: String,
    orbit_radius: f64,
    angular_speed: f64,
    angle: f64,
    axial_tilt: f64,
    spin_speed: f64,
    spin_angle: f64,
    parent: Option<String>,
}

impl BodyState {
    pub fn new(
        id: impl Into<String>,
        orbit_radius: f64,
        angular_speed: f64,
    ) -> Result<Self, KinematicsError> {
        let orbit_radius = ensure_finite("orbital radius", orbit_radius)?;
        if orbit_radius < 0.0 {
            return Err(KinematicsError::NegativeRadius(orbit_radius));
        }
        Ok(Self {
            id: id.into(),
            orbit_radius,
            angular_speed: ensure_finite("angular speed", angular_speed)?,
            angle: 0.0,
            axial_tilt: 0.0,
            spin_speed: 0.0,
            spin_angle: 0.0,
            parent: None,
        })
    }

    pub fn at_angle(mut self, angle: f64) -> Result<Self, KinematicsError> {
        self.set_angle(angle)?;
        Ok(self)
    }

    pub fn with_tilt(mut self, tilt: f64) -> Result<Self, KinematicsError> {
        self.axial_tilt = ensure_finite("axial tilt", tilt)?;
        Ok(self)
    }

    pub fn with_spin(mut self, spin_speed: f64) -> Result<Self, KinematicsError> {
        self.spin_speed = ensure_finite("spin speed", spin_speed)?;
        Ok(self)
    }

    pub fn orbiting(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Identity, e.g. `"earth"`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Radius of the orbit around the parent (or the origin).
    pub fn orbit_radius(&self) -> f64 {
        self.orbit_radius
    }

    /// Orbital angular speed in rad/s at 1x.
    pub fn angular_speed(&self) -> f64 {
        self.angular_speed
    }

    /// Current orbital angle in `[0, 2π)`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Move the body to `angle` on its orbit.
    pub fn set_angle(&mut self, angle: f64) -> Result<(), KinematicsError> {
        self.angle = wrap_angle(ensure_finite("angle", angle)?);
        Ok(())
    }

    /// Axial tilt in radians.
    pub fn axial_tilt(&self) -> f64 {
        self.axial_tilt
    }

    pub fn spin_speed(&self) -> f64 {
        self.spin_speed
    }

    /// Rotation about the body's own axis in `[0, 2π)`.
    pub fn spin_angle(&self) -> f64 {
        self.spin_angle
    }

    /// Body this one orbits. `None` orbits the origin.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Advance orbit and spin by `dt` seconds at `multiplier` times normal speed.
    /// On error the body is left as it was.
    pub fn tick(&mut self, dt: f64, multiplier: f64) -> Result<(), KinematicsError> {
        let angle = advance_angle(self.angle, dt, self.angular_speed * multiplier)?;
        let spin_angle = advance_angle(self.spin_angle, dt, self.spin_speed * multiplier)?;
        self.angle = angle;
        self.spin_angle = spin_angle;
        Ok(())
    }

    /// Direction of the spin axis.
    pub fn axis(&self) -> DVec3 {
        axis_direction(self.axial_tilt)
    }
}

/// Ordered collection of bodies with validated parent links.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitalSystem {
    bodies: Vec<BodyState>,
}

impl OrbitalSystem {
    /// Build a system. Ids must be unique, parents must exist and parent
    /// chains must terminate.
    pub fn new(bodies: Vec<BodyState>) -> Result<Self, KinematicsError> {
        let mut seen = HashSet::new();
        for body in &bodies {
            if !seen.insert(body.id.as_str()) {
                return Err(KinematicsError::DuplicateBody(body.id.clone()));
            }
        }
        for body in &bodies {
            if let Some(parent) = &body.parent
                && !seen.contains(parent.as_str())
            {
                return Err(KinematicsError::UnknownBody(parent.clone()));
            }
        }
        let system = Self { bodies };
        for body in &system.bodies {
            system.world_position(&body.id)?;
        }
        Ok(system)
    }

    pub fn bodies(&self) -> &[BodyState] {
        &self.bodies
    }

    pub fn body(&self, id: &str) -> Option<&BodyState> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body_mut(&mut self, id: &str) -> Option<&mut BodyState> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Advance every body. Either all bodies move or, on error, none do.
    pub fn tick(&mut self, dt: f64, multiplier: f64) -> Result<(), KinematicsError> {
        let mut next = self.bodies.clone();
        for body in &mut next {
            body.tick(dt, multiplier)?;
        }
        self.bodies = next;
        Ok(())
    }

    /// Position of `id` in the shared frame, following parent links.
    pub fn world_position(&self, id: &str) -> Result<DVec3, KinematicsError> {
        let mut chain = Vec::new();
        let mut current = id;
        loop {
            let body = self
                .body(current)
                .ok_or_else(|| KinematicsError::UnknownBody(current.to_string()))?;
            if chain.len() > self.bodies.len() {
                return Err(KinematicsError::ParentCycle(id.to_string()));
            }
            chain.push(body);
            match &body.parent {
                Some(parent) => current = parent.as_str(),
                None => break,
            }
        }
        chain
            .iter()
            .rev()
            .try_fold(DVec3::ZERO, |center, body| {
                position_about(center, body.angle, body.orbit_radius)
            })
    }

    /// World positions of all bodies in declaration order.
    pub fn positions(&self) -> Result<Vec<(&str, DVec3)>, KinematicsError> {
        self.bodies
            .iter()
            .map(|b| Ok((b.id.as_str(), self.world_position(&b.id)?)))
            .collect()
    }
}
