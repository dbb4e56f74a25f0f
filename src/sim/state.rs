//! Game state and core simulation types
//!
//! Everything a run needs lives here; the best score across runs does not
//! (see `highscores`).

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Run ended, waiting for a flap to restart
    GameOver,
}

/// The player's bird
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bird {
    /// Top-left corner (x never changes during a run)
    pub pos: IVec2,
    pub size: IVec2,
}

impl Bird {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.bird_start,
            size: tuning.bird_size,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Which half of a pipe pair a segment is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipeRole {
    /// Hangs from above the board, opening below it
    Upper,
    /// Rises from below the board, opening above it
    Lower,
}

/// One pipe segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipe {
    pub pos: IVec2,
    pub size: IVec2,
    pub role: PipeRole,
    /// Score already credited for this segment
    pub passed: bool,
}

impl Pipe {
    pub fn new(role: PipeRole, x: i32, y: i32, tuning: &Tuning) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: tuning.pipe_size,
            role,
            passed: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// x of the trailing (right) edge
    #[inline]
    pub fn trailing_edge(&self) -> i32 {
        self.pos.x + self.size.x
    }
}

/// Run score, counted in half points so every pipe segment adds exactly 0.5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Score {
    halves: u32,
}

impl Score {
    pub const ZERO: Score = Score { halves: 0 };

    pub fn from_halves(halves: u32) -> Self {
        Self { halves }
    }

    /// Credit one passed segment (half a pipe pair)
    pub fn add_half(&mut self) {
        self.halves = self.halves.saturating_add(1);
    }

    pub fn halves(&self) -> u32 {
        self.halves
    }

    /// Whole points (truncated), as displayed and as kept for the best score
    pub fn whole(&self) -> u32 {
        self.halves / 2
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.halves) / 2.0
    }
}

/// Complete game state for one run (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Pipe placement RNG
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub bird: Bird,
    /// Bird vertical velocity (pixels/tick, negative is up)
    pub velocity_y: i32,
    /// Pipe segments in spawn order (upper, lower, upper, lower, ...)
    pub pipes: Vec<Pipe>,
    pub score: Score,
    /// Simulation ticks in the current run
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            bird: Bird::new(&tuning),
            tuning,
            phase: GamePhase::Running,
            velocity_y: 0,
            pipes: Vec::new(),
            score: Score::ZERO,
            time_ticks: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Put the run back to its starting values.
    ///
    /// The RNG keeps advancing so consecutive runs get different pipes.
    pub fn reset(&mut self) {
        self.bird.pos = self.tuning.bird_start;
        self.velocity_y = 0;
        self.pipes.clear();
        self.score = Score::ZERO;
        self.time_ticks = 0;
        self.phase = GamePhase::Running;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_running_at_spawn() {
        let state = GameState::new(7, Tuning::default());
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.bird.rect(), Rect::new(45, 320, 34, 24));
        assert_eq!(state.velocity_y, 0);
        assert!(state.pipes.is_empty());
        assert_eq!(state.score, Score::ZERO);
    }

    #[test]
    fn test_score_halves() {
        let mut score = Score::ZERO;
        score.add_half();
        assert_eq!(score.whole(), 0);
        assert_eq!(score.as_f64(), 0.5);
        score.add_half();
        score.add_half();
        assert_eq!(score.whole(), 1);
        assert_eq!(score.as_f64(), 1.5);
    }

    #[test]
    fn test_reset_restores_start_values() {
        let mut state = GameState::new(7, Tuning::default());
        let tuning = state.tuning.clone();
        state.bird.pos.y = 12;
        state.velocity_y = -9;
        state.pipes.push(Pipe::new(PipeRole::Upper, 100, -200, &tuning));
        state.score = Score::from_halves(5);
        state.phase = GamePhase::GameOver;

        state.reset();

        assert_eq!(state.bird, Bird::new(&tuning));
        assert_eq!(state.velocity_y, 0);
        assert!(state.pipes.is_empty());
        assert_eq!(state.score, Score::ZERO);
        assert_eq!(state.phase, GamePhase::Running);
    }
}
