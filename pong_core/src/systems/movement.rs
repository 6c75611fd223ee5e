use hecs::World;

use crate::Ball;

/// Integrate ball motion: velocities are per tick, so no dt scaling.
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
