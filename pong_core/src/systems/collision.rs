use glam::Vec2;
use hecs::World;

use crate::geometry::{self, Aabb};
use crate::{Ball, Config, Events, Field, Paddle, Side};

/// Resolve ball collisions with the horizontal walls and the candidate
/// paddle, updating velocity (never position) in place.
pub fn check_collisions(world: &mut World, field: &Field, config: &Config, events: &mut Events) {
    let ball_data = {
        let mut ball_query = world.query::<&Ball>();
        ball_query
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos, ball.vel, ball.speed))
    };

    let (pos, mut vel, mut speed) = match ball_data {
        Some(data) => data,
        None => return, // No ball in world
    };
    let radius = config.ball_radius;

    // Top/bottom wall bounce. Position is left as-is: the ball may overlap
    // the wall by up to one tick's travel before the negated velocity
    // carries it back out.
    if pos.y - radius < 0.0 || pos.y + radius > field.height {
        vel.y = -vel.y;
        events.ball_hit_wall = true;
    }

    // Only the paddle on the ball's half of the field is a candidate; the
    // ball cannot hit both paddles in one tick.
    let side = if pos.x < field.width / 2.0 {
        Side::Human
    } else {
        Side::Opponent
    };
    let paddle_y = {
        let mut paddle_query = world.query::<&Paddle>();
        paddle_query
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.y)
    };

    if let Some(paddle_y) = paddle_y {
        let rect = Aabb::from_origin_size(
            Vec2::new(config.paddle_x(side, field), paddle_y),
            Vec2::new(config.paddle_width, config.paddle_height),
        );

        if rect.overlaps_ball_box(pos, radius) {
            // Angle-based reflection: the contact offset along the paddle
            // face picks an angle within +/- 45 degrees, and the stored
            // speed scalar sets the new velocity magnitude.
            let contact = geometry::collide_point(pos.y, paddle_y, config.paddle_height);
            let angle = geometry::reflection_angle(contact);

            vel.x = side.direction() * speed * angle.cos();
            vel.y = speed * angle.sin();
            speed += config.speed_increment;

            events.ball_hit_paddle = true;
        }
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.vel = vel;
        ball.speed = speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use std::f32::consts::FRAC_PI_4;

    fn setup_world() -> (World, Field, Config, Events) {
        (World::new(), Field::new(), Config::new(), Events::new())
    }

    fn ball_state(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap()
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, field, config, mut events) = setup_world();
        // Overlapping the top wall, far from both paddles
        create_ball(&mut world, Vec2::new(300.0, 5.0), Vec2::new(5.0, -5.0), 7.0);

        check_collisions(&mut world, &field, &config, &mut events);

        let ball = ball_state(&world);
        assert_eq!(ball.vel.y, 5.0, "vertical velocity is negated");
        assert_eq!(ball.vel.x, 5.0, "horizontal velocity is unchanged");
        assert_eq!(ball.speed, 7.0, "speed is untouched by wall bounces");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, field, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(300.0, 395.0), Vec2::new(5.0, 5.0), 7.0);

        check_collisions(&mut world, &field, &config, &mut events);

        let ball = ball_state(&world);
        assert_eq!(ball.vel.y, -5.0);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_wall_bounce_does_not_clamp_position() {
        let (mut world, field, config, mut events) = setup_world();
        // Already past the wall by half a radius; the position stays there.
        create_ball(&mut world, Vec2::new(300.0, 5.0), Vec2::new(5.0, -5.0), 7.0);

        check_collisions(&mut world, &field, &config, &mut events);

        let ball = ball_state(&world);
        assert_eq!(ball.pos, Vec2::new(300.0, 5.0));
    }

    #[test]
    fn test_head_on_human_paddle_hit_reflects_flat() {
        let (mut world, field, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Human, 150.0);
        // Dead center of the paddle face
        create_ball(&mut world, Vec2::new(5.0, 200.0), Vec2::new(-5.0, 0.0), 7.0);

        check_collisions(&mut world, &field, &config, &mut events);

        let ball = ball_state(&world);
        assert_eq!(ball.vel.x, 7.0, "full speed straight back out");
        assert_eq!(ball.vel.y, 0.0);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_paddle_hit_increments_speed_by_fixed_amount() {
        let (mut world, field, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Human, 150.0);
        create_ball(&mut world, Vec2::new(5.0, 200.0), Vec2::new(-5.0, 0.0), 7.0);

        check_collisions(&mut world, &field, &config, &mut events);

        let ball = ball_state(&world);
        assert_eq!(ball.speed, 7.1);
    }

    #[test]
    fn test_speed_grows_without_ceiling() {
        let (mut world, field, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Human, 150.0);
        create_ball(&mut world, Vec2::new(5.0, 200.0), Vec2::new(-5.0, 0.0), 9000.0);

        check_collisions(&mut world, &field, &config, &mut events);

        let ball = ball_state(&world);
        assert_eq!(ball.speed, 9000.1);
        assert_eq!(ball.vel.x, 9000.0);
    }

    #[test]
    fn test_opponent_paddle_reflects_leftward() {
        let (mut world, field, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Opponent, 150.0);
        create_ball(&mut world, Vec2::new(595.0, 200.0), Vec2::new(5.0, 0.0), 7.0);

        check_collisions(&mut world, &field, &config, &mut events);

        let ball = ball_state(&world);
        assert_eq!(ball.vel.x, -7.0, "opponent-side reflection points left");
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_top_edge_hit_deflects_upward() {
        let (mut world, field, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Human, 150.0);
        // Near the top of the paddle face
        create_ball(&mut world, Vec2::new(5.0, 160.0), Vec2::new(-5.0, 0.0), 7.0);

        check_collisions(&mut world, &field, &config, &mut events);

        let ball = ball_state(&world);
        assert!(ball.vel.y < 0.0, "top-of-paddle contact deflects up");
        assert!(ball.vel.x > 0.0);
    }

    #[test]
    fn test_bottom_edge_hit_deflects_downward() {
        let (mut world, field, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Human, 150.0);
        create_ball(&mut world, Vec2::new(5.0, 240.0), Vec2::new(-5.0, 0.0), 7.0);

        check_collisions(&mut world, &field, &config, &mut events);

        let ball = ball_state(&world);
        assert!(ball.vel.y > 0.0, "bottom-of-paddle contact deflects down");
    }

    #[test]
    fn test_in_range_contact_keeps_angle_within_quarter_pi() {
        let (mut world, field, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Human, 150.0);
        // Extreme in-range contact: ball center level with the paddle top
        create_ball(&mut world, Vec2::new(5.0, 155.0), Vec2::new(-5.0, 0.0), 7.0);

        check_collisions(&mut world, &field, &config, &mut events);

        let ball = ball_state(&world);
        let angle = ball.vel.y.atan2(ball.vel.x);
        assert!(angle.abs() <= FRAC_PI_4 + 1e-6);
    }

    #[test]
    fn test_only_the_near_half_paddle_is_tested() {
        let (mut world, field, config, mut events) = setup_world();
        // Ball on the right half; the human paddle never collides even if
        // geometry would overlap.
        create_paddle(&mut world, Side::Human, 150.0);
        create_ball(&mut world, Vec2::new(595.0, 200.0), Vec2::new(5.0, 0.0), 7.0);

        check_collisions(&mut world, &field, &config, &mut events);

        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, field, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Human, 150.0);

        check_collisions(&mut world, &field, &config, &mut events);

        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }
}
