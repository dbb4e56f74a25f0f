//! Single-threaded game supervisor
//!
//! Owns the run state, the best score and the clock. Every tick and input is
//! handled here, one event at a time, so nothing else ever mutates the game.

use std::time::Duration;

use crate::clock::Clock;
use crate::highscores::BestScore;
use crate::platform::{Event, EventQueue};
use crate::renderer::{Renderer, Snapshot};
use crate::sim::{GamePhase, GameState, ImpulseOutcome, TickOutcome, impulse, spawn_pipes, tick};
use crate::tuning::Tuning;

/// Game instance holding all state
#[derive(Debug)]
pub struct App {
    state: GameState,
    best: BestScore,
    clock: Clock,
    queue: EventQueue,
    /// Latest time seen by `start`/`pump`
    now: Duration,
}

impl App {
    /// Create a game whose tickers are not running yet (see `start`)
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let clock = Clock::new(tuning.sim_period, tuning.spawn_period);
        Self {
            state: GameState::new(seed, tuning),
            best: BestScore::new(),
            clock,
            queue: EventQueue::new(),
            now: Duration::ZERO,
        }
    }

    /// Start both tickers and draw the first frame
    pub fn start(&mut self, now: Duration, renderer: &mut dyn Renderer) {
        self.now = now;
        self.clock.start(now);
        log::info!("Game started with seed: {}", self.state.seed);
        renderer.render(&self.snapshot());
    }

    /// Queue a flap (or restart, after game over)
    pub fn push_impulse(&mut self) {
        self.queue.push(Event::Impulse);
    }

    /// Queue an event from a host that drives its own timers
    pub fn push_event(&mut self, event: Event) {
        self.queue.push(event);
    }

    /// Handle queued events, then every clock firing due at or before `now`.
    ///
    /// Returns the number of simulation ticks that advanced the game.
    pub fn pump(&mut self, now: Duration, renderer: &mut dyn Renderer) -> u32 {
        self.now = self.now.max(now);
        let mut ticks = 0;

        while let Some(event) = self.queue.pop() {
            if self.handle(event, self.now, renderer) {
                ticks += 1;
            }
        }

        // One firing at a time: a tick that ends the run stops the clock
        // before the next firing is looked at.
        while let Some((fired, at)) = self.clock.poll(self.now) {
            if self.handle(fired.into(), at, renderer) {
                ticks += 1;
            }
        }

        ticks
    }

    /// Returns true if a simulation tick advanced the game
    fn handle(&mut self, event: Event, at: Duration, renderer: &mut dyn Renderer) -> bool {
        match event {
            Event::SimulationTick => match tick(&mut self.state) {
                TickOutcome::Ignored => false,
                TickOutcome::Continued => {
                    renderer.render(&self.snapshot());
                    true
                }
                TickOutcome::Ended => {
                    self.clock.stop();
                    self.best.record(self.state.score);
                    renderer.render(&self.snapshot());
                    true
                }
            },
            Event::SpawnTick => {
                spawn_pipes(&mut self.state);
                false
            }
            Event::Impulse => {
                if impulse(&mut self.state) == ImpulseOutcome::Restarted {
                    self.clock.start(at);
                }
                renderer.render(&self.snapshot());
                false
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.best)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn best(&self) -> &BestScore {
        &self.best
    }

    /// Whether the tickers are running
    pub fn is_ticking(&self) -> bool {
        self.clock.is_running()
    }

    /// When the next tick or spawn is due (None after game over)
    pub fn next_due(&self) -> Option<Duration> {
        self.clock.next_due()
    }
}
