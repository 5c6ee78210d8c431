//! Fixed-timestep frame clock.
//!
//! Decouples scene ticks (fixed 60 Hz) from presentation frames (variable
//! rate) using an accumulator. Frame times are passed in explicitly so a
//! headless driver and a windowed one step scenes identically.

use tracing::warn;

/// Fixed simulation timestep: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Longest frame time accepted before clamping. A stalled frame is dropped
/// as slowdown instead of being caught up with a burst of ticks.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Accumulates frame time and runs fixed-size update steps.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    accumulator: f64,
    total_sim_time: f64,
    frame_count: u64,
    update_count: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one presentation frame lasting `frame_time` seconds.
    ///
    /// `update_fn(FIXED_DT, total_sim_time)` runs zero or more times; the
    /// first error stops the frame and is returned. On success the
    /// interpolation alpha in `[0.0, 1.0)` is returned.
    pub fn frame<E>(
        &mut self,
        frame_time: f64,
        mut update_fn: impl FnMut(f64, f64) -> Result<(), E>,
    ) -> Result<f64, E> {
        let mut frame_time = if frame_time.is_finite() {
            frame_time.max(0.0)
        } else {
            0.0
        };
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }

        self.accumulator += frame_time;
        while self.accumulator >= FIXED_DT {
            update_fn(FIXED_DT, self.total_sim_time)?;
            self.total_sim_time += FIXED_DT;
            self.accumulator -= FIXED_DT;
            self.update_count += 1;
        }
        self.frame_count += 1;
        Ok(self.alpha())
    }

    /// Interpolation alpha between the last two simulation states.
    pub fn alpha(&self) -> f64 {
        if self.accumulator > 0.0 {
            self.accumulator / FIXED_DT
        } else {
            0.0
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Total simulated seconds.
    pub fn total_sim_time(&self) -> f64 {
        self.total_sim_time
    }
}
