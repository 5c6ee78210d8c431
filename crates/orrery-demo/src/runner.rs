//! Headless playback: drives a scene frame by frame and reports snapshots.

use orrery_config::{PlaybackConfig, SceneSettings};
use orrery_scene::{FrameClock, Scene, SceneConfig, Snapshot};
use tracing::{debug, info};

use crate::error::DemoError;
use crate::script::Script;

/// Build the scene description named by `settings`. A scene file wins over
/// the preset name.
pub fn resolve_scene(settings: &SceneSettings) -> Result<SceneConfig, DemoError> {
    let config = match &settings.file {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::preset(&settings.preset)?,
    };
    Ok(config)
}

/// Why a frame was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportReason {
    Periodic,
    SeasonChanged,
    PhaseChanged,
    DaylightChanged,
    SelectionChanged,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub frame: u64,
    pub reasons: Vec<ReportReason>,
    pub snapshot: Snapshot,
}

/// Owns the scene, its clock and the pending script.
pub struct Runner {
    scene: Scene,
    clock: FrameClock,
    script: Script,
    playback: PlaybackConfig,
    last: Snapshot,
}

impl Runner {
    pub fn new(
        scene_config: SceneConfig,
        playback: PlaybackConfig,
        script: Script,
    ) -> Result<Self, DemoError> {
        if !playback.frame_time.is_finite() || playback.frame_time <= 0.0 {
            return Err(DemoError::InvalidFrameTime(playback.frame_time));
        }
        let mut scene = Scene::new(scene_config)?;
        scene.set_speed(playback.speed)?;
        if playback.start_playing {
            scene.play();
        }
        let last = scene.snapshot()?;
        if !script.is_empty() {
            debug!("{} scripted commands pending", script.len());
        }
        Ok(Self {
            scene,
            clock: FrameClock::new(),
            script,
            playback,
            last,
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Apply due commands, run one presentation frame and decide whether
    /// the resulting snapshot is worth reporting.
    pub fn step(&mut self, frame: u64) -> Result<Option<Report>, DemoError> {
        for scripted in self.script.due(frame) {
            self.scene.apply(&scripted.command)?;
        }

        let scene = &mut self.scene;
        self.clock
            .frame(self.playback.frame_time, |dt, _| scene.tick(dt))?;

        let snapshot = self.scene.snapshot()?;
        let mut reasons = Vec::new();
        if self.playback.report_every > 0 && frame % self.playback.report_every == 0 {
            reasons.push(ReportReason::Periodic);
        }
        let season_key = |s: &Snapshot| s.season.as_ref().map(|season| season.key.clone());
        if season_key(&snapshot) != season_key(&self.last) {
            reasons.push(ReportReason::SeasonChanged);
        }
        if snapshot.phase != self.last.phase {
            reasons.push(ReportReason::PhaseChanged);
        }
        if snapshot.daylight != self.last.daylight {
            reasons.push(ReportReason::DaylightChanged);
        }
        let selected_id = |s: &Snapshot| s.selected.as_ref().map(|b| b.id.clone());
        if selected_id(&snapshot) != selected_id(&self.last) {
            reasons.push(ReportReason::SelectionChanged);
        }
        self.last = snapshot.clone();

        Ok((!reasons.is_empty()).then_some(Report {
            frame,
            reasons,
            snapshot,
        }))
    }

    /// Run every configured frame, logging each report. Returns the number
    /// of reports emitted.
    pub fn run(&mut self) -> Result<usize, DemoError> {
        info!(
            "Running {} for {} frames at {:.1}ms per frame",
            self.scene.config().name,
            self.playback.frames,
            self.playback.frame_time * 1000.0
        );
        let mut reports = 0;
        for frame in 0..self.playback.frames {
            if let Some(report) = self.step(frame)? {
                log_report(&report);
                reports += 1;
            }
        }
        info!(
            "Finished: {} frames, {} ticks, {:.2}s simulated, {} reports",
            self.clock.frame_count(),
            self.clock.update_count(),
            self.clock.total_sim_time(),
            reports
        );
        Ok(reports)
    }
}

fn log_report(report: &Report) {
    let snapshot = &report.snapshot;
    info!(
        frame = report.frame,
        reasons = ?report.reasons,
        playing = snapshot.playing,
        speed = snapshot.speed_multiplier,
        "angle {:.1}°",
        snapshot.angle.to_degrees()
    );
    if let Some(season) = &snapshot.season {
        info!(
            "  {}: {} (north: {}, south: {})",
            season.name, season.description, season.northern, season.southern
        );
    }
    if let Some(latitude) = snapshot.subsolar_latitude_deg {
        info!("  Sun overhead at {:.1}°", latitude);
    }
    if let Some(phase) = &snapshot.phase {
        info!("  Phase: {phase}");
    }
    if let Some(eclipse) = &snapshot.eclipse {
        info!(
            "  Eclipse {:.0}% complete, shadow {:.2}{}",
            eclipse.progress,
            eclipse.shadow_intensity,
            if eclipse.totality { ", totality" } else { "" }
        );
    }
    if let Some(daylight) = snapshot.daylight {
        info!("  Observer sees {daylight}");
    }
    if let Some(selected) = &snapshot.selected {
        info!("  {}: {}", selected.info.name, selected.info.description);
        for fact in &selected.info.facts {
            info!("    - {fact}");
        }
    }
    for body in &snapshot.bodies {
        debug!(
            "  {} at ({:.2}, {:.2}, {:.2})",
            body.id,
            body.position.x,
            body.position.y,
            body.position.z
        );
    }
}
