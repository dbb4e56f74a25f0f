//! Ordered event queue consumed by the single-threaded game loop

use std::collections::VecDeque;

use crate::clock::Tick;

/// Every event the core reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Advance physics, scrolling and scoring by one step
    SimulationTick,
    /// Place a new pipe pair at the right edge
    SpawnTick,
    /// Flap (or restart after game over). Carries no payload.
    Impulse,
}

impl From<Tick> for Event {
    fn from(tick: Tick) -> Self {
        match tick {
            Tick::Simulation => Event::SimulationTick,
            Tick::Spawn => Event::SpawnTick,
        }
    }
}

/// FIFO of pending events.
/// Producers push; the game loop pops and handles one at a time.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<Event>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            events: VecDeque::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }

    /// Oldest pending event
    pub fn pop(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
