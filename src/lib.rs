//! Flappy core - fixed-tick simulation for a side-scrolling pipe dodger
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `clock`: Simulation and spawn tickers feeding the event stream
//! - `app`: Single-threaded supervisor (event queue, best score, restarts)
//! - `renderer`: Read-only snapshots handed to an external renderer
//! - `tuning`: Data-driven game balance

pub mod app;
pub mod clock;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use app::App;
pub use highscores::BestScore;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Board dimensions
    pub const BOARD_WIDTH: i32 = 360;
    pub const BOARD_HEIGHT: i32 = 640;

    /// Bird defaults - fixed column, starts halfway down
    pub const BIRD_X: i32 = BOARD_WIDTH / 8;
    pub const BIRD_Y: i32 = BOARD_HEIGHT / 2;
    pub const BIRD_WIDTH: i32 = 34;
    pub const BIRD_HEIGHT: i32 = 24;

    /// Pipe defaults
    pub const PIPE_WIDTH: i32 = 64;
    pub const PIPE_HEIGHT: i32 = 512;
    /// Vertical gap between the upper and lower pipe of a pair
    pub const PIPE_OPENING: i32 = BOARD_HEIGHT / 4;

    /// Downward acceleration (pixels/tick²)
    pub const GRAVITY: i32 = 1;
    /// Vertical velocity set by a flap (pixels/tick, negative is up)
    pub const FLAP_VELOCITY: i32 = -9;
    /// Horizontal pipe velocity (pixels/tick)
    pub const SCROLL_VELOCITY: i32 = -4;

    /// Simulation tick period in milliseconds (~60 Hz)
    pub const SIM_TICK_MS: u64 = 1000 / 60;
    /// Pipe spawn period in milliseconds
    pub const SPAWN_TICK_MS: u64 = 1500;

    /// Ticker backlog beyond which missed periods are dropped
    pub const MAX_CATCH_UP_TICKS: u32 = 8;
}
