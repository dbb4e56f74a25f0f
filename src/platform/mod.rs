//! Platform boundary
//!
//! The host (window, timers, keyboard) talks to the core only through the
//! events defined here:
//! - Time/ticks arrive as `Event::SimulationTick` / `Event::SpawnTick`
//! - Input arrives as `Event::Impulse`

pub mod queue;

pub use queue::{Event, EventQueue};
