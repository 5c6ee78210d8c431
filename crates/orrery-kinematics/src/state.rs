//! Animation state: the primary orbital angle plus playback controls.
//!
//! The state is a plain value. UI layers mutate it through the command
//! methods (`play`, `pause`, `reset`, `set_speed`, ...) and the frame loop
//! replaces it with the result of [`advance`].

use crate::angle::{advance_angle, wrap_angle};
use crate::error::{KinematicsError, ensure_finite};

/// Current angle, play/pause flag and speed multiplier of one animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    angle: f64,
    playing: bool,
    speed_multiplier: f64,
}

impl AnimationState {
    /// Create a paused state at `angle` with a 1x multiplier.
    pub fn new(angle: f64) -> Result<Self, KinematicsError> {
        let angle = ensure_finite("angle", angle)?;
        Ok(Self {
            angle: wrap_angle(angle),
            playing: false,
            speed_multiplier: 1.0,
        })
    }

    /// Current angle in `[0, 2π)`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Whether the animation advances on [`advance`].
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Non-negative speed multiplier.
    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    pub fn play(&mut self) {
        log::debug!("play at angle {:.4}", self.angle);
        self.playing = true;
    }

    pub fn pause(&mut self) {
        log::debug!("pause at angle {:.4}", self.angle);
        self.playing = false;
    }

    /// Flip between playing and paused.
    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Return to `initial_angle` and stop. The speed multiplier is kept.
    pub fn reset(&mut self, initial_angle: f64) -> Result<(), KinematicsError> {
        let initial_angle = ensure_finite("angle", initial_angle)?;
        log::debug!("reset to angle {initial_angle:.4}");
        self.angle = wrap_angle(initial_angle);
        self.playing = false;
        Ok(())
    }

    /// Set the speed multiplier. Rejects negative and non-finite values.
    pub fn set_speed(&mut self, multiplier: f64) -> Result<(), KinematicsError> {
        let multiplier = ensure_finite("speed multiplier", multiplier)?;
        if multiplier < 0.0 {
            return Err(KinematicsError::NegativeMultiplier(multiplier));
        }
        log::debug!("speed multiplier {} -> {multiplier}", self.speed_multiplier);
        self.speed_multiplier = multiplier;
        Ok(())
    }

    /// Jump straight to `angle` and pause there.
    pub fn jump_to(&mut self, angle: f64) -> Result<(), KinematicsError> {
        let angle = ensure_finite("angle", angle)?;
        self.angle = wrap_angle(angle);
        self.playing = false;
        Ok(())
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            angle: 0.0,
            playing: false,
            speed_multiplier: 1.0,
        }
    }
}

/// Advance `state` by `dt` seconds of a body moving at `speed` rad/s.
///
/// The effective rate is `speed * state.speed_multiplier()`. A paused state is
/// returned unchanged, and so is any state advanced by a zero `dt`.
pub fn advance(
    state: AnimationState,
    dt: f64,
    speed: f64,
) -> Result<AnimationState, KinematicsError> {
    if !state.playing {
        return Ok(state);
    }
    let angle = advance_angle(state.angle, dt, speed * state.speed_multiplier)?;
    Ok(AnimationState { angle, ..state })
}

/// Ordered speed presets stepped through by a single "faster" control.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeedCycle {
    presets: Vec<f64>,
}

impl SpeedCycle {
    pub fn new(presets: Vec<f64>) -> Result<Self, KinematicsError> {
        if presets.is_empty() {
            return Err(KinematicsError::EmptyTable);
        }
        for &p in &presets {
            ensure_finite("speed preset", p)?;
            if p < 0.0 {
                return Err(KinematicsError::NegativeMultiplier(p));
            }
        }
        Ok(Self { presets })
    }

    pub fn presets(&self) -> &[f64] {
        &self.presets
    }

    /// The preset after `current`, wrapping to the first. A multiplier that is
    /// not one of the presets also restarts at the first.
    pub fn next_after(&self, current: f64) -> f64 {
        match self.presets.iter().position(|&p| p == current) {
            Some(i) => self.presets[(i + 1) % self.presets.len()],
            None => self.presets[0],
        }
    }
}

impl Default for SpeedCycle {
    fn default() -> Self {
        Self {
            presets: vec![1.0, 2.0, 5.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    fn playing(angle: f64) -> AnimationState {
        let mut s = AnimationState::new(angle).unwrap();
        s.play();
        s
    }

    #[test]
    fn test_zero_delta_is_identity() {
        for &angle in &[0.0, 1.0, PI, TAU - 1e-9] {
            let mut s = playing(angle);
            s.set_speed(3.0).unwrap();
            for &speed in &[0.0, 0.3, -2.0, 100.0] {
                assert_eq!(advance(s, 0.0, speed).unwrap(), s);
            }
        }
    }

    #[test]
    fn test_paused_state_does_not_move() {
        let s = AnimationState::new(1.0).unwrap();
        let next = advance(s, 10.0, 0.3).unwrap();
        assert_eq!(next, s);
    }

    #[test]
    fn test_multiplier_scales_rate() {
        let mut s = playing(0.0);
        s.set_speed(2.0).unwrap();
        let next = advance(s, 1.0, 0.3).unwrap();
        assert!((next.angle() - 0.6).abs() < 1e-12, "got {}", next.angle());
    }

    #[test]
    fn test_zero_multiplier_freezes_angle() {
        let mut s = playing(0.5);
        s.set_speed(0.0).unwrap();
        assert_eq!(advance(s, 5.0, 0.3).unwrap().angle(), 0.5);
    }

    #[test]
    fn test_angle_stays_wrapped_over_many_frames() {
        let mut s = playing(0.0);
        for _ in 0..10_000 {
            s = advance(s, 1.0 / 60.0, 0.6).unwrap();
            assert!((0.0..TAU).contains(&s.angle()));
        }
    }

    #[test]
    fn test_overflowing_step_is_rejected() {
        let mut s = playing(1.0);
        s.set_speed(1e300).unwrap();
        assert!(matches!(
            advance(s, 1e10, 0.3),
            Err(KinematicsError::NonFinite { name: "angular displacement", .. })
        ));
    }

    #[test]
    fn test_commands() {
        let mut s = AnimationState::default();
        assert!(!s.is_playing());
        s.toggle();
        assert!(s.is_playing());
        s.toggle();
        assert!(!s.is_playing());

        s.play();
        s.jump_to(FRAC_PI_2).unwrap();
        assert!(!s.is_playing());
        assert_eq!(s.angle(), FRAC_PI_2);

        s.set_speed(5.0).unwrap();
        s.play();
        s.reset(0.3 * PI).unwrap();
        assert!(!s.is_playing());
        assert_eq!(s.speed_multiplier(), 5.0);
        assert!((s.angle() - 0.3 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_set_speed_rejects_negative() {
        let mut s = AnimationState::default();
        assert_eq!(
            s.set_speed(-1.0),
            Err(KinematicsError::NegativeMultiplier(-1.0))
        );
        assert!(s.set_speed(f64::NAN).is_err());
        assert_eq!(s.speed_multiplier(), 1.0);
    }

    #[test]
    fn test_speed_cycle_wraps() {
        let cycle = SpeedCycle::default();
        assert_eq!(cycle.next_after(1.0), 2.0);
        assert_eq!(cycle.next_after(2.0), 5.0);
        assert_eq!(cycle.next_after(5.0), 1.0);
        assert_eq!(cycle.next_after(0.7), 1.0);
    }

    #[test]
    fn test_speed_cycle_validation() {
        assert_eq!(SpeedCycle::new(vec![]), Err(KinematicsError::EmptyTable));
        assert!(SpeedCycle::new(vec![1.0, -2.0]).is_err());
    }
}
