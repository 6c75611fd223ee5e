pub mod components;
pub mod config;
pub mod field;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use field::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the simulation by one fixed tick.
///
/// Applies pending pointer input to the human paddle, integrates the ball,
/// resolves wall and paddle collisions, then checks for a point using the
/// same tick's position. Returns the score event when a point was made.
///
/// The opponent controller is not part of the step; drivers call
/// [`systems::track_ball`] after it, matching the render / simulate /
/// opponent tick order.
pub fn step(
    world: &mut World,
    time: &mut Time,
    field: &Field,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    pointers: &mut PointerQueue,
) -> Option<ScoreEvent> {
    // Clear events at start of tick
    events.clear();

    // 1. Apply the newest pointer target (last-write-wins)
    apply_pointer_input(world, pointers, field, config);

    // 2. Integrate ball motion
    move_ball(world);

    // 3. Resolve wall and paddle collisions
    check_collisions(world, field, config, events);

    // 4. Check scoring (ball fully past a goal line)
    let scored = check_scoring(world, field, config, score, events);

    time.advance();
    scored
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2, speed: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, speed),))
}
