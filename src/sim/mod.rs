//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Integer positions, one fixed step per tick
//! - Seeded RNG only
//! - Pipes kept in spawn order
//! - No timing, rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, rects_overlap};
pub use state::{Bird, GamePhase, GameState, Pipe, PipeRole, Score};
pub use tick::{ImpulseOutcome, TickOutcome, impulse, integrate_gravity, spawn_pipes, tick};
