//! Headless renderer that reports frames through `log`

use super::{Renderer, Snapshot};
use crate::sim::GamePhase;

/// Logs HUD changes at info level and every frame at trace level
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
    last_hud: Vec<String>,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, snapshot: &Snapshot) {
        self.frames += 1;

        if log::log_enabled!(log::Level::Trace) {
            match snapshot.to_json() {
                Ok(json) => log::trace!("frame {}: {}", self.frames, json),
                Err(e) => log::warn!("Snapshot serialization error: {:?}", e),
            }
        }

        let hud = snapshot.hud_lines();
        if hud != self.last_hud {
            match snapshot.phase {
                GamePhase::Running => log::debug!("{}", hud.join(" | ")),
                GamePhase::GameOver => log::info!("{}", hud.join(" | ")),
            }
            self.last_hud = hud;
        }
    }
}
