use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use pong_core::Params;

use crate::game::Game;

/// Shared handle for pointer events. Writes may come from any thread at any
/// rate; only the newest value survives until the driver drains it at the
/// next tick boundary.
#[derive(Clone, Default)]
pub struct PointerInput(Arc<Mutex<Option<f32>>>);

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the desired vertical center for the human paddle.
    pub fn set(&self, target: f32) {
        *self.0.lock().unwrap() = Some(target);
    }

    fn take(&self) -> Option<f32> {
        self.0.lock().unwrap().take()
    }
}

/// Fixed-cadence tick driver.
///
/// Runs observer, simulation step, and opponent update in strict sequence at
/// 60 ticks per second on a dedicated thread. Stopping is the only teardown;
/// each tick is atomic, so nothing needs graceful cancellation.
pub struct Driver {
    running: Arc<AtomicBool>,
    thread: JoinHandle<Game>,
}

impl Driver {
    /// Spawn the tick loop. `on_frame` is the render-adapter seam: it sees
    /// the state of the game at the start of every tick.
    pub fn start<F>(mut game: Game, pointer: PointerInput, mut on_frame: F) -> Self
    where
        F: FnMut(&Game) + Send + 'static,
    {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);

        let thread = thread::spawn(move || {
            let interval = Duration::from_secs(1) / Params::TICK_RATE;
            let mut deadline = Instant::now();

            while flag.load(Ordering::Relaxed) {
                on_frame(&game);

                if let Some(target) = pointer.take() {
                    game.point_to(target);
                }
                if let Some(event) = game.tick() {
                    let score = game.score();
                    log::info!(
                        "{:?} takes the point ({} - {})",
                        event.winner,
                        score.human,
                        score.opponent
                    );
                }

                deadline += interval;
                match deadline.checked_duration_since(Instant::now()) {
                    Some(wait) => thread::sleep(wait),
                    // Fell behind; rebase on the current time rather than
                    // bursting ticks to catch up.
                    None => deadline = Instant::now(),
                }
            }

            game
        });

        Self { running, thread }
    }

    /// Stop the tick loop and hand back the final game state.
    pub fn stop(self) -> Game {
        self.running.store(false, Ordering::Relaxed);
        self.thread.join().expect("driver thread panicked")
    }
}
