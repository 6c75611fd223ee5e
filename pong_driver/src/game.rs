use glam::Vec2;
use hecs::World;

use pong_core::systems::track_ball;
use pong_core::{
    create_ball, create_paddle, step, Ball, Config, Events, Field, Paddle, Params, PointerQueue,
    Score, ScoreEvent, Side, Time,
};

/// The complete game state, owned by the driver and mutated only inside a
/// tick.
pub struct Game {
    pub world: World,
    pub time: Time,
    pub field: Field,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pointers: PointerQueue,
}

impl Game {
    pub fn new() -> Self {
        let field = Field::new();
        let config = Config::new();
        let mut world = World::new();

        // Both paddles start vertically centered; the ball serves from the
        // middle toward the lower right.
        let paddle_y = (field.height - config.paddle_height) / 2.0;
        create_paddle(&mut world, Side::Human, paddle_y);
        create_paddle(&mut world, Side::Opponent, paddle_y);
        create_ball(
            &mut world,
            field.center(),
            Vec2::new(Params::SERVE_VX, Params::SERVE_VY),
            Params::SERVE_SPEED,
        );

        Self {
            world,
            time: Time::new(),
            field,
            config,
            score: Score::new(),
            events: Events::new(),
            pointers: PointerQueue::new(),
        }
    }

    /// Queue a pointer target: the desired vertical center for the human
    /// paddle. Read (last-write-wins) by the next tick.
    pub fn point_to(&mut self, target: f32) {
        self.pointers.push_target(target);
    }

    /// One full tick: simulation step, then the opponent controller.
    pub fn tick(&mut self) -> Option<ScoreEvent> {
        let scored = step(
            &mut self.world,
            &mut self.time,
            &self.field,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.pointers,
        );
        track_ball(&mut self.world, &self.config);
        scored
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Ball position, for render observers
    pub fn ball_pos(&self) -> Vec2 {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| ball.pos)
            .unwrap_or_else(|| self.field.center())
    }

    /// Top edge of the paddle defending the given side
    pub fn paddle_y(&self, side: Side) -> f32 {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.y)
            .unwrap_or(0.0)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
