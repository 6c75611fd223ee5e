use hecs::World;

use crate::{Config, Field, Paddle, PointerQueue, Side};

/// Apply the newest queued pointer target to the human paddle.
///
/// The target is a desired vertical center; the paddle's top edge is
/// clamped so the paddle never leaves the field.
pub fn apply_pointer_input(
    world: &mut World,
    pointers: &mut PointerQueue,
    field: &Field,
    config: &Config,
) {
    if let Some(target) = pointers.take_latest() {
        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.side == Side::Human {
                let y = target - config.paddle_height / 2.0;
                paddle.y = field.clamp_paddle_y(y, config.paddle_height);
            }
        }
    }
}
