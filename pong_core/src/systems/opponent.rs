use hecs::World;

use crate::{Ball, Config, Paddle, Side};

/// Reactive opponent policy: nudge the paddle toward the ball's vertical
/// position by a fixed step, holding still inside a deadzone around it.
/// Runs once per tick, after the simulation step.
///
/// Unlike the human paddle's pointer rule, this applies no boundary clamp;
/// the opponent paddle can be driven past the field edge while it chases a
/// ball hugging a wall.
pub fn track_ball(world: &mut World, config: &Config) {
    let ball_y = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| ball.pos.y)
    };

    if let Some(ball_y) = ball_y {
        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.side == Side::Opponent {
                let center = paddle.center(config.paddle_height);
                if center < ball_y - config.opponent_deadzone {
                    paddle.y += config.opponent_step;
                } else if center > ball_y + config.opponent_deadzone {
                    paddle.y -= config.opponent_step;
                }
            }
        }
    }
}
