//! Fixed timestep simulation tick
//!
//! Core game rules: gravity, pipe scroll, scoring, collisions, pipe spawning
//! and the flap/restart input. Timing lives in `clock`; these functions only
//! react to one event at a time.

use rand::Rng;

use super::collision::rects_overlap;
use super::state::{Bird, GamePhase, GameState, Pipe, PipeRole};

/// What a simulation tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Stray tick after game over, nothing changed
    Ignored,
    /// Run continues
    Continued,
    /// This tick ended the run
    Ended,
}

/// What a flap did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpulseOutcome {
    /// Vertical velocity overridden
    Flapped,
    /// Run was over; state reset to a fresh run
    Restarted,
}

/// Apply one tick of gravity to the bird.
///
/// The bird cannot rise above the top of the board; there is no floor.
pub fn integrate_gravity(bird: &mut Bird, velocity_y: &mut i32, gravity: i32) {
    *velocity_y += gravity;
    bird.pos.y = (bird.pos.y + *velocity_y).max(0);
}

/// Advance the game state by one simulation tick
pub fn tick(state: &mut GameState) -> TickOutcome {
    if state.phase == GamePhase::GameOver {
        log::debug!("Ignoring simulation tick after game over");
        return TickOutcome::Ignored;
    }

    state.time_ticks += 1;

    integrate_gravity(&mut state.bird, &mut state.velocity_y, state.tuning.gravity);

    let bird = state.bird.rect();
    let scroll = state.tuning.scroll_velocity;
    let mut crashed = false;

    for pipe in &mut state.pipes {
        pipe.pos.x += scroll;

        if !pipe.passed && bird.left() > pipe.trailing_edge() {
            // Half a point per segment, a full point per pair
            state.score.add_half();
            pipe.passed = true;
        }

        if rects_overlap(&bird, &pipe.rect()) {
            crashed = true;
        }
    }

    if state.tuning.prune_offscreen {
        state.pipes.retain(|p| p.trailing_edge() >= 0);
    }

    let fell_out = bird.top() > state.tuning.board_height;

    log::trace!(
        "tick {}: bird y={} vy={} pipes={} score={}",
        state.time_ticks,
        bird.top(),
        state.velocity_y,
        state.pipes.len(),
        state.score.as_f64()
    );

    if crashed || fell_out {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Run over after {} ticks ({}), score {}",
            state.time_ticks,
            if crashed { "hit a pipe" } else { "fell out" },
            state.score.whole()
        );
        return TickOutcome::Ended;
    }

    TickOutcome::Continued
}

/// Spawn one upper/lower pipe pair at the right edge.
///
/// Returns false (and does nothing) once the run is over.
pub fn spawn_pipes(state: &mut GameState) -> bool {
    if state.phase == GamePhase::GameOver {
        log::debug!("Ignoring spawn tick after game over");
        return false;
    }

    let tuning = &state.tuning;
    let height = tuning.pipe_size.y;
    let x = tuning.spawn_x();

    // Upper pipe hangs between a quarter and three quarters of its height
    // above the board
    let roll: f64 = state.rng.random();
    let upper_y = (-f64::from(height / 4) - roll * f64::from(height / 2)) as i32;
    let lower_y = upper_y + height + tuning.pipe_opening;

    let upper = Pipe::new(PipeRole::Upper, x, upper_y, tuning);
    let lower = Pipe::new(PipeRole::Lower, x, lower_y, tuning);
    state.pipes.push(upper);
    state.pipes.push(lower);

    log::debug!("Spawned pipe pair at x={} (upper y={}, lower y={})", x, upper_y, lower_y);
    true
}

/// Handle a flap input
pub fn impulse(state: &mut GameState) -> ImpulseOutcome {
    match state.phase {
        GamePhase::Running => {
            state.velocity_y = state.tuning.flap_velocity;
            ImpulseOutcome::Flapped
        }
        GamePhase::GameOver => {
            state.reset();
            log::info!("Restarting run");
            ImpulseOutcome::Restarted
        }
    }
}
