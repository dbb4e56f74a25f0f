//! Periodic tickers for the simulation and pipe spawning
//!
//! Time is injected as a monotonic `Duration` since an arbitrary origin, so
//! the clock never reads the wall clock and tests can drive it directly.

use std::time::Duration;

use crate::consts::MAX_CATCH_UP_TICKS;

/// Shortest accepted period (a zero period would fire forever)
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A single periodic event source that can be stopped and restarted
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Duration>,
}

impl Ticker {
    /// Create a stopped ticker
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(MIN_PERIOD),
            next_due: None,
        }
    }

    /// Start (or restart) so the first firing is one period after `now`
    pub fn start(&mut self, now: Duration) {
        self.next_due = Some(now + self.period);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_due(&self) -> Option<Duration> {
        self.next_due
    }

    /// Consume one firing that is due at or before `now`.
    ///
    /// Returns the time the firing was scheduled for. A ticker that has
    /// fallen more than `MAX_CATCH_UP_TICKS` periods behind drops the excess
    /// backlog instead of bursting through it.
    pub fn fire(&mut self, now: Duration) -> Option<Duration> {
        let mut due = self.next_due?;
        if due > now {
            return None;
        }

        let max_backlog = self.period * MAX_CATCH_UP_TICKS;
        if now - due > max_backlog {
            let rebased = now - self.period * (MAX_CATCH_UP_TICKS - 1);
            log::warn!(
                "Ticker fell {:?} behind, skipping to {:?}",
                now - due,
                rebased
            );
            due = rebased;
        }

        self.next_due = Some(due + self.period);
        Some(due)
    }
}

/// Which periodic event fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Simulation,
    Spawn,
}

/// The two game tickers, merged into one time-ordered stream
#[derive(Debug, Clone)]
pub struct Clock {
    simulation: Ticker,
    spawn: Ticker,
}

impl Clock {
    /// Create a stopped clock
    pub fn new(simulation_period: Duration, spawn_period: Duration) -> Self {
        Self {
            simulation: Ticker::new(simulation_period),
            spawn: Ticker::new(spawn_period),
        }
    }

    pub fn start(&mut self, now: Duration) {
        self.simulation.start(now);
        self.spawn.start(now);
    }

    pub fn stop(&mut self) {
        self.simulation.stop();
        self.spawn.stop();
    }

    pub fn is_running(&self) -> bool {
        self.simulation.is_running() || self.spawn.is_running()
    }

    /// Earliest upcoming firing of either ticker
    pub fn next_due(&self) -> Option<Duration> {
        match (self.simulation.next_due(), self.spawn.next_due()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Take the earliest firing due at or before `now`.
    ///
    /// Ties go to the simulation tick.
    pub fn poll(&mut self, now: Duration) -> Option<(Tick, Duration)> {
        let sim_due = self.simulation.next_due().filter(|due| *due <= now);
        let spawn_due = self.spawn.next_due().filter(|due| *due <= now);

        match (sim_due, spawn_due) {
            (Some(sim), Some(spawn)) if spawn < sim => {
                self.spawn.fire(now).map(|at| (Tick::Spawn, at))
            }
            (Some(_), _) => self.simulation.fire(now).map(|at| (Tick::Simulation, at)),
            (None, Some(_)) => self.spawn.fire(now).map(|at| (Tick::Spawn, at)),
            (None, None) => None,
        }
    }
}
