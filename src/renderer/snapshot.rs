//! Read-only view of the game for one frame

use serde::{Deserialize, Serialize};

use crate::highscores::BestScore;
use crate::sim::{GamePhase, GameState, PipeRole, Rect};

/// A pipe as the renderer needs it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipeSprite {
    pub rect: Rect,
    pub role: PipeRole,
}

/// Numbers shown on the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverSummary {
    pub final_score: u32,
    pub best_score: u32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub board_width: i32,
    pub board_height: i32,
    pub bird: Rect,
    /// Pipes in spawn order
    pub pipes: Vec<PipeSprite>,
    /// Current score, truncated to whole points
    pub score: u32,
    /// Present only when the run is over
    pub game_over: Option<GameOverSummary>,
}

impl Snapshot {
    pub fn capture(state: &GameState, best: &BestScore) -> Self {
        let game_over = match state.phase {
            GamePhase::Running => None,
            GamePhase::GameOver => Some(GameOverSummary {
                final_score: state.score.whole(),
                best_score: best.get(),
            }),
        };

        Self {
            phase: state.phase,
            board_width: state.tuning.board_width,
            board_height: state.tuning.board_height,
            bird: state.bird.rect(),
            pipes: state
                .pipes
                .iter()
                .map(|p| PipeSprite {
                    rect: p.rect(),
                    role: p.role,
                })
                .collect(),
            score: state.score.whole(),
            game_over,
        }
    }

    /// HUD text, top to bottom
    pub fn hud_lines(&self) -> Vec<String> {
        match self.game_over {
            None => vec![format!("Score: {}", self.score)],
            Some(summary) => vec![
                "GAME OVER".to_string(),
                format!("Score: {}", summary.final_score),
                format!("Highest Score: {}", summary.best_score),
            ],
        }
    }

    /// Serialize for a renderer running outside this process
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Pipe, Score};
    use crate::tuning::Tuning;

    #[test]
    fn test_running_snapshot() {
        let mut state = GameState::new(5, Tuning::default());
        let tuning = state.tuning.clone();
        state.pipes.push(Pipe::new(PipeRole::Upper, 200, -300, &tuning));
        state.pipes.push(Pipe::new(PipeRole::Lower, 200, 372, &tuning));
        state.score = Score::from_halves(5);

        let snapshot = Snapshot::capture(&state, &BestScore::new());
        assert_eq!(snapshot.phase, GamePhase::Running);
        assert_eq!(snapshot.bird, Rect::new(45, 320, 34, 24));
        assert_eq!(snapshot.pipes.len(), 2);
        assert_eq!(snapshot.pipes[1].role, PipeRole::Lower);
        assert_eq!(snapshot.pipes[1].rect, Rect::new(200, 372, 64, 512));
        assert_eq!(snapshot.score, 2);
        assert_eq!(snapshot.game_over, None);
        assert_eq!(snapshot.hud_lines(), vec!["Score: 2".to_string()]);
    }

    #[test]
    fn test_game_over_snapshot() {
        let mut state = GameState::new(5, Tuning::default());
        state.score = Score::from_halves(9);
        state.phase = GamePhase::GameOver;
        let mut best = BestScore::new();
        best.record(state.score);

        let snapshot = Snapshot::capture(&state, &best);
        assert_eq!(
            snapshot.game_over,
            Some(GameOverSummary {
                final_score: 4,
                best_score: 4
            })
        );
        assert_eq!(
            snapshot.hud_lines(),
            vec!["GAME OVER", "Score: 4", "Highest Score: 4"]
        );
    }

    #[test]
    fn test_json_handoff() {
        let state = GameState::new(5, Tuning::default());
        let snapshot = Snapshot::capture(&state, &BestScore::new());

        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"phase\":\"Running\""));
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
