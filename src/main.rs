//! Flappy core demo entry point
//!
//! Runs the real-time loop headless on the current thread with the autopilot
//! at the controls. Set `RUST_LOG=debug` (or `trace`) to watch every frame.

use std::thread;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use flappy_core::renderer::LogRenderer;
use flappy_core::sim::{GamePhase, autopilot};
use flappy_core::{App, Tuning};

/// Runs to play before exiting
const DEMO_RUNS: u32 = 3;

fn main() {
    env_logger::init();
    log::info!("Flappy core (headless demo) starting...");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let mut app = App::new(seed, Tuning::default());
    let mut renderer = LogRenderer::new();
    let origin = Instant::now();

    app.start(origin.elapsed(), &mut renderer);

    loop {
        // Sleep until the next tick or spawn is due
        if let Some(due) = app.next_due() {
            let elapsed = origin.elapsed();
            if due > elapsed {
                thread::sleep(due - elapsed);
            }
        }

        let ticks = app.pump(origin.elapsed(), &mut renderer);

        if app.phase() == GamePhase::GameOver {
            if app.best().runs() >= DEMO_RUNS {
                break;
            }
            app.push_impulse();
            app.pump(origin.elapsed(), &mut renderer);
        } else if ticks > 0 && autopilot::wants_impulse(app.state()) {
            app.push_impulse();
        }
    }

    log::info!(
        "Demo finished: {} runs, best score {}, {} frames drawn",
        app.best().runs(),
        app.best().get(),
        renderer.frames()
    );
}
