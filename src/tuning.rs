//! Game balance values
//!
//! Built in code from `consts`; nothing is read from disk or the environment.

use std::time::Duration;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable parameters for one game instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    // === Board ===
    pub board_width: i32,
    pub board_height: i32,

    // === Bird ===
    /// Spawn position (x stays fixed for the whole run)
    pub bird_start: IVec2,
    pub bird_size: IVec2,

    // === Pipes ===
    pub pipe_size: IVec2,
    /// Gap between the bottom of the upper pipe and the top of the lower pipe
    pub pipe_opening: i32,
    /// Drop pipes once they are fully past the left edge
    pub prune_offscreen: bool,

    // === Physics (per tick) ===
    pub gravity: i32,
    pub flap_velocity: i32,
    pub scroll_velocity: i32,

    // === Timing ===
    pub sim_period: Duration,
    pub spawn_period: Duration,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,

            bird_start: IVec2::new(BIRD_X, BIRD_Y),
            bird_size: IVec2::new(BIRD_WIDTH, BIRD_HEIGHT),

            pipe_size: IVec2::new(PIPE_WIDTH, PIPE_HEIGHT),
            pipe_opening: PIPE_OPENING,
            prune_offscreen: true,

            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            scroll_velocity: SCROLL_VELOCITY,

            sim_period: Duration::from_millis(SIM_TICK_MS),
            spawn_period: Duration::from_millis(SPAWN_TICK_MS),
        }
    }
}

impl Tuning {
    /// Column where new pipes appear (just past the right edge)
    pub fn spawn_x(&self) -> i32 {
        self.board_width
    }

    /// Range of the upper pipe's y: `(-(3H/4), -(H/4)]`
    pub fn upper_pipe_y_range(&self) -> (i32, i32) {
        let h = self.pipe_size.y;
        (-(h / 4) - h / 2, -(h / 4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_board() {
        let tuning = Tuning::default();
        assert_eq!(tuning.bird_start, IVec2::new(45, 320));
        assert_eq!(tuning.pipe_opening, 160);
        assert_eq!(tuning.spawn_x(), 360);
        assert_eq!(tuning.sim_period, Duration::from_millis(16));
        assert_eq!(tuning.upper_pipe_y_range(), (-384, -128));
    }

    #[test]
    fn test_serde_roundtrip() {
        let tuning = Tuning {
            prune_offscreen: false,
            ..Default::default()
        };
        let json = serde_json::to_string(&tuning).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tuning);
    }
}
