mod driver;
mod game;

use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use driver::{Driver, PointerInput};
use game::Game;

/// Headless demo match: a jittery ball-chaser stands in for the pointer
/// adapter, the built-in heuristic drives the other paddle.
fn main() {
    env_logger::init();

    let game = Game::new();
    let pointer = PointerInput::new();

    let input = pointer.clone();
    let mut rng = StdRng::seed_from_u64(7);
    let driver = Driver::start(game, pointer, move |game| {
        // Chase the ball with enough jitter that rallies end eventually.
        let target = game.ball_pos().y + rng.gen_range(-30.0..30.0);
        input.set(target);
    });

    log::info!("match running");
    thread::sleep(Duration::from_secs(20));

    let score = driver.stop().score();
    log::info!(
        "final score: human {} - opponent {}",
        score.human,
        score.opponent
    );
}
