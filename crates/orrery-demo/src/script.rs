//! Frame-indexed command scripts.
//!
//! A script is a RON list of `(frame: N, command: ...)` entries, e.g.
//!
//! ```ron
//! [
//!     (frame: 0, command: Play),
//!     (frame: 120, command: JumpTo("summer")),
//!     (frame: 180, command: SetSpeed(5.0)),
//! ]
//! ```

use std::path::Path;

use orrery_scene::Command;
use serde::{Deserialize, Serialize};

use crate::error::DemoError;

/// A command to apply at the start of `frame`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedCommand {
    pub frame: u64,
    pub command: Command,
}

/// Commands ordered by frame, consumed as playback advances.
#[derive(Debug, Clone, Default)]
pub struct Script {
    commands: Vec<ScriptedCommand>,
    cursor: usize,
}

impl Script {
    /// Entries sharing a frame keep their written order.
    pub fn new(mut commands: Vec<ScriptedCommand>) -> Self {
        commands.sort_by_key(|c| c.frame);
        Self {
            commands,
            cursor: 0,
        }
    }

    pub fn parse(source: &str) -> Result<Self, DemoError> {
        let commands: Vec<ScriptedCommand> =
            ron::from_str(source).map_err(DemoError::ScriptParse)?;
        Ok(Self::new(commands))
    }

    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let source = std::fs::read_to_string(path).map_err(DemoError::ScriptRead)?;
        let script = Self::parse(&source)?;
        tracing::info!(
            "Loaded {} scripted commands from {}",
            script.len(),
            path.display()
        );
        Ok(script)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands not yet consumed whose frame is at or before `frame`.
    pub fn due(&mut self, frame: u64) -> &[ScriptedCommand] {
        let start = self.cursor;
        while self
            .commands
            .get(self.cursor)
            .is_some_and(|c| c.frame <= frame)
        {
            self.cursor += 1;
        }
        &self.commands[start..self.cursor]
    }
}
