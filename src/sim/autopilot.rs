//! Idle/demo mode - a simple AI that decides when to flap
//!
//! Aims for the bottom of the next opening: flap whenever the bird is
//! falling and would sink below it on the next tick.

use super::state::{GameState, PipeRole};

/// Pixels kept between the bird and the lower pipe when aiming
pub const AUTOPILOT_MARGIN: i32 = 12;

/// Whether the autopilot would flap right now
pub fn wants_impulse(state: &GameState) -> bool {
    if !state.is_running() || state.velocity_y < 0 {
        return false;
    }

    let bird = state.bird.rect();
    let tuning = &state.tuning;

    // Lower pipe of the nearest pair the bird has not cleared yet
    let floor = state
        .pipes
        .iter()
        .find(|p| p.role == PipeRole::Lower && p.trailing_edge() >= bird.left())
        .map(|p| p.pos.y - AUTOPILOT_MARGIN)
        .unwrap_or(tuning.board_height * 2 / 3);

    let predicted_bottom = bird.bottom() + state.velocity_y + tuning.gravity;
    predicted_bottom >= floor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{GamePhase, Pipe};
    use crate::tuning::Tuning;

    fn state_with_pair(upper_y: i32) -> GameState {
        let mut state = GameState::new(3, Tuning::default());
        let tuning = state.tuning.clone();
        state.pipes.push(Pipe::new(PipeRole::Upper, 200, upper_y, &tuning));
        state
            .pipes
            .push(Pipe::new(PipeRole::Lower, 200, upper_y + 512 + 160, &tuning));
        state
    }

    #[test]
    fn test_flaps_when_sinking_below_opening() {
        // Opening spans y 112..272, bird sits at 320..344
        let mut state = state_with_pair(-400);
        state.velocity_y = 2;
        assert!(wants_impulse(&state));
    }

    #[test]
    fn test_holds_when_above_opening_floor() {
        // Opening spans y 312..472
        let mut state = state_with_pair(-200);
        state.velocity_y = 1;
        assert!(!wants_impulse(&state));
    }

    #[test]
    fn test_never_flaps_while_rising() {
        let mut state = state_with_pair(-400);
        state.velocity_y = -3;
        assert!(!wants_impulse(&state));
    }

    #[test]
    fn test_ignores_cleared_pipes() {
        let mut state = state_with_pair(-400);
        for pipe in &mut state.pipes {
            pipe.pos.x = -30;
        }
        // Falls back to two thirds of the board (426)
        state.velocity_y = 1;
        assert!(!wants_impulse(&state));
        state.bird.pos.y = 400;
        assert!(wants_impulse(&state));
    }

    #[test]
    fn test_idle_after_game_over() {
        let mut state = state_with_pair(-400);
        state.velocity_y = 5;
        state.phase = GamePhase::GameOver;
        assert!(!wants_impulse(&state));
    }
}
