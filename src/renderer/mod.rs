//! Rendering boundary
//!
//! Drawing pixels and fonts is the host's job. The core hands it an
//! immutable `Snapshot` after every simulation tick and after each flap.

pub mod headless;
pub mod snapshot;

pub use headless::LogRenderer;
pub use snapshot::{GameOverSummary, PipeSprite, Snapshot};

/// Anything that can draw a frame from a snapshot
pub trait Renderer {
    /// Draw one frame. Must not feed back into the game state.
    fn render(&mut self, snapshot: &Snapshot);
}
