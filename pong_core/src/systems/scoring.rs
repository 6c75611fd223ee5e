use hecs::World;

use crate::{Ball, Config, Events, Field, Score, ScoreEvent, Side};

/// Award a point when the ball has fully crossed a goal line, then run the
/// reset protocol. At most one side can score in a tick.
pub fn check_scoring(
    world: &mut World,
    field: &Field,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) -> Option<ScoreEvent> {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let winner = if ball.pos.x - config.ball_radius < 0.0 {
            Side::Opponent
        } else if ball.pos.x + config.ball_radius > field.width {
            Side::Human
        } else {
            continue;
        };

        score.award(winner);
        events.scored = Some(winner);
        ball.reset(field);
        return Some(ScoreEvent { winner });
    }
    None
}
