//! Runtime scene: animation state, bodies and the command interface.

use glam::DVec3;
use orrery_kinematics::{
    AnimationState, BandTable, BodyState, Daylight, EclipseShading, KinematicsError,
    OrbitalSystem, ReferenceTable, SpeedCycle, advance, classify, subsolar_latitude,
    sun_alignment, surface_normal,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{BodyConfig, BodyInfo, SceneConfig, Season};
use crate::error::SceneError;

/// A playback command issued by a UI layer or a script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    Play,
    Pause,
    Toggle,
    /// Return every body to its starting angle and pause.
    Reset,
    /// Set the speed multiplier.
    SetSpeed(f64),
    /// Step to the next speed preset.
    CycleSpeed,
    /// Jump the primary body to a season's reference angle and pause.
    JumpTo(String),
    /// Select a body to show its info card.
    Select(String),
    /// Clear the selection.
    Deselect,
}

/// Per-body values for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySnapshot {
    pub id: String,
    /// Position in the shared frame (the sun sits at the origin).
    pub position: DVec3,
    pub spin_angle: f64,
    /// Spin axis direction.
    pub axis: DVec3,
}

/// Everything a presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Primary orbital angle in `[0, 2π)`.
    pub angle: f64,
    pub playing: bool,
    pub speed_multiplier: f64,
    pub bodies: Vec<BodySnapshot>,
    /// Nearest season, when the scene has a season table.
    pub season: Option<Season>,
    /// Phase band label, when the scene has phase bands.
    pub phase: Option<String>,
    pub eclipse: Option<EclipseShading>,
    /// Latitude of the overhead sun in degrees, for season scenes.
    pub subsolar_latitude_deg: Option<f64>,
    /// Time of day at the observer, when the scene has one.
    pub daylight: Option<Daylight>,
    pub selected: Option<SelectedBody>,
}

/// The selected body, its card and where a camera should focus.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedBody {
    pub id: String,
    pub info: BodyInfo,
    pub position: DVec3,
}

impl Snapshot {
    pub fn body(&self, id: &str) -> Option<&BodySnapshot> {
        self.bodies.iter().find(|b| b.id == id)
    }
}

/// A running visualization.
#[derive(Debug, Clone)]
pub struct Scene {
    config: SceneConfig,
    state: AnimationState,
    system: OrbitalSystem,
    seasons: Option<ReferenceTable<Season>>,
    phases: Option<BandTable<String>>,
    speeds: SpeedCycle,
    primary_speed: f64,
    selected: Option<String>,
}

fn build_body(config: &BodyConfig) -> Result<BodyState, KinematicsError> {
    let body = BodyState::new(config.id.clone(), config.orbit_radius, config.angular_speed)?
        .at_angle(config.initial_angle)?
        .with_tilt(config.axial_tilt_deg.to_radians())?
        .with_spin(config.spin_speed)?;
    Ok(match &config.parent {
        Some(parent) => body.orbiting(parent.clone()),
        None => body,
    })
}

/// Bodies at their configured starting angles, primary moved to `angle`.
fn build_system(config: &SceneConfig, angle: f64) -> Result<(OrbitalSystem, f64), SceneError> {
    let bodies = config
        .bodies
        .iter()
        .map(build_body)
        .collect::<Result<Vec<_>, _>>()?;
    let mut system = OrbitalSystem::new(bodies)?;
    let primary = system
        .body_mut(&config.primary)
        .ok_or_else(|| SceneError::MissingPrimary(config.primary.clone()))?;
    primary.set_angle(angle)?;
    let speed = primary.angular_speed();
    Ok((system, speed))
}

impl Scene {
    /// Validate `config` and build the scene, paused at its initial angle.
    pub fn new(config: SceneConfig) -> Result<Self, SceneError> {
        let state = AnimationState::new(config.initial_angle)?;
        let (system, primary_speed) = build_system(&config, state.angle())?;

        let seasons = if config.seasons.is_empty() {
            None
        } else {
            Some(ReferenceTable::new(config.seasons.clone())?)
        };
        let phases = config
            .phases
            .as_ref()
            .map(|p| BandTable::new(p.bands.clone(), p.fallback.clone()))
            .transpose()?;
        if let Some(observer) = &config.observer {
            if system.body(&observer.body).is_none() {
                return Err(SceneError::MissingObserverBody(observer.body.clone()));
            }
            for (name, value) in [
                ("observer latitude", observer.latitude_deg),
                ("observer longitude", observer.longitude_deg),
            ] {
                if !value.is_finite() {
                    return Err(KinematicsError::NonFinite { name, value }.into());
                }
            }
        }
        let speeds = SpeedCycle::new(config.speed_presets.clone())?;

        debug!(
            "Built scene {} with {} bodies, primary {}",
            config.name,
            system.bodies().len(),
            config.primary
        );
        Ok(Self {
            config,
            state,
            system,
            seasons,
            phases,
            speeds,
            primary_speed,
            selected: None,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn system(&self) -> &OrbitalSystem {
        &self.system
    }

    pub fn play(&mut self) {
        self.state.play();
    }

    pub fn pause(&mut self) {
        self.state.pause();
    }

    pub fn toggle(&mut self) {
        self.state.toggle();
    }

    /// Return all bodies to their starting angles and pause. Speed is kept.
    pub fn reset(&mut self) -> Result<(), SceneError> {
        let mut state = self.state;
        state.reset(self.config.initial_angle)?;
        let (system, _) = build_system(&self.config, state.angle())?;
        self.state = state;
        self.system = system;
        Ok(())
    }

    pub fn set_speed(&mut self, multiplier: f64) -> Result<(), SceneError> {
        self.state.set_speed(multiplier)?;
        Ok(())
    }

    /// Step to the next speed preset and return it.
    pub fn cycle_speed(&mut self) -> Result<f64, SceneError> {
        let next = self.speeds.next_after(self.state.speed_multiplier());
        self.state.set_speed(next)?;
        Ok(next)
    }

    /// Move the primary body to the season with `key` and pause.
    pub fn jump_to(&mut self, key: &str) -> Result<(), SceneError> {
        let seasons = self
            .seasons
            .as_ref()
            .ok_or_else(|| SceneError::NoSeasons(self.config.name.clone()))?;
        let angle = seasons
            .find(|s| s.key == key)
            .map(|e| e.angle)
            .ok_or_else(|| SceneError::UnknownSeason(key.to_string()))?;
        self.state.jump_to(angle)?;
        self.sync_primary()
    }

    /// Info card of body `id`, if it has one.
    pub fn body_info(&self, id: &str) -> Option<&BodyInfo> {
        self.config
            .bodies
            .iter()
            .find(|b| b.id == id)
            .and_then(|b| b.info.as_ref())
    }

    /// Select body `id` and return its info card.
    pub fn select(&mut self, id: &str) -> Result<&BodyInfo, SceneError> {
        if self.system.body(id).is_none() {
            return Err(KinematicsError::UnknownBody(id.to_string()).into());
        }
        let info = self
            .config
            .bodies
            .iter()
            .find(|b| b.id == id)
            .and_then(|b| b.info.as_ref())
            .ok_or_else(|| SceneError::NoBodyInfo(id.to_string()))?;
        self.selected = Some(id.to_string());
        Ok(info)
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Id of the selected body.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Dispatch a [`Command`].
    pub fn apply(&mut self, command: &Command) -> Result<(), SceneError> {
        debug!(?command, "Applying command");
        match command {
            Command::Play => self.play(),
            Command::Pause => self.pause(),
            Command::Toggle => self.toggle(),
            Command::Reset => self.reset()?,
            Command::SetSpeed(v) => self.set_speed(*v)?,
            Command::CycleSpeed => {
                self.cycle_speed()?;
            }
            Command::JumpTo(key) => self.jump_to(key)?,
            Command::Select(id) => {
                self.select(id)?;
            }
            Command::Deselect => self.deselect(),
        }
        Ok(())
    }

    /// Advance the scene by `dt` seconds. Does nothing while paused.
    ///
    /// On error the scene is left exactly as it was.
    pub fn tick(&mut self, dt: f64) -> Result<(), SceneError> {
        if !self.state.is_playing() {
            return Ok(());
        }
        let state = advance(self.state, dt, self.primary_speed)?;
        let mut system = self.system.clone();
        system.tick(dt, state.speed_multiplier())?;
        if let Some(primary) = system.body_mut(&self.config.primary) {
            primary.set_angle(state.angle())?;
        }
        self.state = state;
        self.system = system;
        Ok(())
    }

    fn sync_primary(&mut self) -> Result<(), SceneError> {
        if let Some(primary) = self.system.body_mut(&self.config.primary) {
            primary.set_angle(self.state.angle())?;
        }
        Ok(())
    }

    /// Derived values for the current state.
    pub fn snapshot(&self) -> Result<Snapshot, SceneError> {
        let angle = self.state.angle();
        let bodies = self
            .system
            .bodies()
            .iter()
            .map(|b| {
                Ok(BodySnapshot {
                    id: b.id().to_string(),
                    position: self.system.world_position(b.id())?,
                    spin_angle: b.spin_angle(),
                    axis: b.axis(),
                })
            })
            .collect::<Result<Vec<_>, KinematicsError>>()?;

        let season = self
            .seasons
            .as_ref()
            .map(|t| classify(angle, t).cloned())
            .transpose()?;
        let subsolar_latitude_deg = match (&self.seasons, self.system.body(&self.config.primary)) {
            (Some(_), Some(primary)) => {
                Some(subsolar_latitude(angle, primary.axial_tilt()).to_degrees())
            }
            _ => None,
        };
        let phase = self
            .phases
            .as_ref()
            .map(|t| t.label_for(angle).cloned())
            .transpose()?;
        let eclipse = self
            .config
            .eclipse_shading
            .then(|| EclipseShading::at_angle(angle));
        let daylight = self.daylight()?;
        let selected = match &self.selected {
            Some(id) => {
                let info = self
                    .body_info(id)
                    .ok_or_else(|| SceneError::NoBodyInfo(id.clone()))?;
                Some(SelectedBody {
                    id: id.clone(),
                    info: info.clone(),
                    position: self.system.world_position(id)?,
                })
            }
            None => None,
        };

        Ok(Snapshot {
            angle,
            playing: self.state.is_playing(),
            speed_multiplier: self.state.speed_multiplier(),
            bodies,
            season,
            phase,
            eclipse,
            subsolar_latitude_deg,
            daylight,
            selected,
        })
    }

    fn daylight(&self) -> Result<Option<Daylight>, SceneError> {
        let Some(observer) = &self.config.observer else {
            return Ok(None);
        };
        let body = self
            .system
            .body(&observer.body)
            .ok_or_else(|| SceneError::MissingObserverBody(observer.body.clone()))?;
        let body_position = self.system.world_position(body.id())?;
        let sun_position = match self.system.body("sun") {
            Some(sun) => self.system.world_position(sun.id())?,
            None => DVec3::ZERO,
        };
        let normal = surface_normal(
            observer.latitude_deg.to_radians(),
            observer.longitude_deg.to_radians(),
            body.spin_angle(),
            body.axial_tilt(),
        );
        let alignment = sun_alignment(normal, body_position, sun_position);
        Ok(Some(Daylight::from_alignment(alignment)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    fn scene(name: &str) -> Scene {
        Scene::new(SceneConfig::preset(name).unwrap()).unwrap()
    }

    #[test]
    fn test_starts_paused_at_initial_angle() {
        let s = scene("lunar-eclipse");
        assert!(!s.state().is_playing());
        assert!((s.state().angle() - 0.3 * PI).abs() < 1e-12);
        assert_eq!(s.system().body("moon").unwrap().angle(), s.state().angle());
    }

    #[test]
    fn test_paused_tick_is_a_no_op() {
        let mut s = scene("earth-seasons");
        let before = s.snapshot().unwrap();
        s.tick(5.0).unwrap();
        assert_eq!(s.snapshot().unwrap(), before);
    }

    #[test]
    fn test_tick_moves_earth_along_orbit() {
        let mut s = scene("earth-seasons");
        s.play();
        s.tick(1.0).unwrap();
        assert!((s.state().angle() - 0.3).abs() < 1e-12);
        let earth = s.snapshot().unwrap().body("earth").unwrap().position;
        let expected = DVec3::new(15.0 * 0.3_f64.cos(), 0.0, 15.0 * 0.3_f64.sin());
        assert!((earth - expected).length() < 1e-9);
    }

    #[test]
    fn test_full_orbit_returns_to_start() {
        let mut s = scene("earth-seasons");
        let start = s.snapshot().unwrap().body("earth").unwrap().position;
        s.play();
        s.tick(TAU / 0.3).unwrap();
        let end = s.snapshot().unwrap().body("earth").unwrap().position;
        assert!((end - start).length() < 1e-6, "start {start}, end {end}");
    }

    #[test]
    fn test_quarter_orbit_reaches_summer() {
        let mut s = scene("earth-seasons");
        s.play();
        s.tick(FRAC_PI_2 / 0.3).unwrap();
        let snap = s.snapshot().unwrap();
        assert_eq!(snap.season.unwrap().key, "summer");
        assert!((snap.subsolar_latitude_deg.unwrap() - 23.5).abs() < 1e-6);
    }

    #[test]
    fn test_jump_to_season_pauses() {
        let mut s = scene("earth-seasons");
        s.play();
        s.jump_to("winter").unwrap();
        assert!(!s.state().is_playing());
        assert!((s.state().angle() - 3.0 * FRAC_PI_2).abs() < 1e-12);
        let snap = s.snapshot().unwrap();
        assert_eq!(snap.season.as_ref().unwrap().key, "winter");
        let earth = snap.body("earth").unwrap().position;
        assert!((earth - DVec3::new(0.0, 0.0, -15.0)).length() < 1e-9);
    }

    #[test]
    fn test_jump_errors() {
        let mut s = scene("earth-seasons");
        assert!(matches!(s.jump_to("monsoon"), Err(SceneError::UnknownSeason(_))));
        let mut solar = scene("solar-system");
        assert!(matches!(solar.jump_to("summer"), Err(SceneError::NoSeasons(_))));
    }

    #[test]
    fn test_reset_restores_every_body() {
        let mut s = scene("solar-system");
        let start = s.snapshot().unwrap();
        s.set_speed(5.0).unwrap();
        s.play();
        s.tick(3.0).unwrap();
        assert_ne!(s.snapshot().unwrap().bodies, start.bodies);
        s.reset().unwrap();
        let after = s.snapshot().unwrap();
        assert_eq!(after.bodies, start.bodies);
        assert!(!after.playing);
        assert_eq!(after.speed_multiplier, 5.0);
    }

    #[test]
    fn test_cycle_speed() {
        let mut s = scene("solar-system");
        assert_eq!(s.cycle_speed().unwrap(), 2.0);
        assert_eq!(s.cycle_speed().unwrap(), 5.0);
        assert_eq!(s.cycle_speed().unwrap(), 1.0);
    }

    #[test]
    fn test_apply_commands() {
        let mut s = scene("earth-seasons");
        s.apply(&Command::Play).unwrap();
        assert!(s.state().is_playing());
        s.apply(&Command::Toggle).unwrap();
        assert!(!s.state().is_playing());
        s.apply(&Command::SetSpeed(2.0)).unwrap();
        assert_eq!(s.state().speed_multiplier(), 2.0);
        assert!(s.apply(&Command::SetSpeed(-1.0)).is_err());
        s.apply(&Command::JumpTo("autumn".into())).unwrap();
        assert!((s.state().angle() - PI).abs() < 1e-12);
        s.apply(&Command::Reset).unwrap();
        assert_eq!(s.state().angle(), 0.0);
    }

    #[test]
    fn test_moon_behind_earth_is_total_eclipse() {
        let mut s = scene("lunar-eclipse");
        s.play();
        s.tick(0.7 * PI / 0.6).unwrap();
        let snap = s.snapshot().unwrap();
        assert!((snap.angle - PI).abs() < 1e-9, "angle {}", snap.angle);
        assert_eq!(snap.phase.as_deref(), Some("total eclipse (blood moon)"));
        let eclipse = snap.eclipse.unwrap();
        assert!(eclipse.totality);
        let moon = snap.body("moon").unwrap().position;
        assert!((moon - DVec3::new(-42.0, 0.0, 0.0)).length() < 1e-6, "{moon}");
    }

    #[test]
    fn test_eclipse_starts_unobscured() {
        let s = scene("lunar-eclipse");
        let snap = s.snapshot().unwrap();
        assert_eq!(snap.phase.as_deref(), Some("moon unobscured"));
        assert!(!snap.eclipse.unwrap().totality);
        assert!(snap.season.is_none());
    }

    #[test]
    fn test_day_night_follows_spin() {
        let mut s = scene("earth-day-night");
        assert_eq!(s.snapshot().unwrap().daylight, Some(Daylight::Night));
        s.play();
        s.tick(PI / 0.3).unwrap();
        let snap = s.snapshot().unwrap();
        assert_eq!(snap.daylight, Some(Daylight::Noon));
        let earth = snap.body("earth").unwrap().position;
        assert!((earth - DVec3::new(15.0, 0.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_failed_tick_leaves_scene_untouched() {
        let mut config = SceneConfig::default();
        config.bodies.push(BodyConfig {
            id: "comet".to_string(),
            orbit_radius: 40.0,
            angular_speed: 1e300,
            ..BodyConfig::default()
        });
        let mut s = Scene::new(config).unwrap();
        s.set_speed(1e10).unwrap();
        s.play();
        let before = s.snapshot().unwrap();
        assert!(matches!(
            s.tick(1.0),
            Err(SceneError::Kinematics(KinematicsError::NonFinite { .. }))
        ));
        assert_eq!(s.state().angle(), 0.0);
        assert_eq!(s.system().body("earth").unwrap().angle(), 0.0);
        assert_eq!(s.snapshot().unwrap(), before);
    }

    #[test]
    fn test_select_planet_shows_info() {
        let mut s = scene("solar-system");
        assert_eq!(s.select("saturn").unwrap().name, "Saturn");
        assert_eq!(s.selected(), Some("saturn"));
        let snap = s.snapshot().unwrap();
        let selected = snap.selected.as_ref().unwrap();
        assert_eq!(selected.id, "saturn");
        assert_eq!(selected.info.facts.len(), 4);
        assert_eq!(selected.position, snap.body("saturn").unwrap().position);

        s.apply(&Command::Deselect).unwrap();
        assert!(s.snapshot().unwrap().selected.is_none());
    }

    #[test]
    fn test_select_errors() {
        let mut s = scene("solar-system");
        assert!(matches!(
            s.select("pluto"),
            Err(SceneError::Kinematics(KinematicsError::UnknownBody(_)))
        ));
        let mut seasons = scene("earth-seasons");
        assert!(matches!(
            seasons.apply(&Command::Select("earth".into())),
            Err(SceneError::NoBodyInfo(_))
        ));
        assert_eq!(seasons.selected(), None);
        assert!(seasons.body_info("earth").is_none());
    }

    #[test]
    fn test_missing_primary_rejected() {
        let mut config = SceneConfig::default();
        config.primary = "vulcan".to_string();
        assert!(matches!(
            Scene::new(config),
            Err(SceneError::MissingPrimary(_))
        ));
    }

    #[test]
    fn test_missing_observer_body_rejected() {
        let mut config = SceneConfig::preset("earth-day-night").unwrap();
        config.observer.as_mut().unwrap().body = "mars".to_string();
        assert!(matches!(
            Scene::new(config),
            Err(SceneError::MissingObserverBody(_))
        ));
    }
}
