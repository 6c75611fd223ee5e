use crate::components::Side;
use crate::field::Field;
use crate::params::Params;

/// Runtime tuning for a match
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub ball_radius: f32,
    pub speed_increment: f32,
    pub opponent_step: f32,
    pub opponent_deadzone: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            ball_radius: Params::BALL_RADIUS,
            speed_increment: Params::SPEED_INCREMENT,
            opponent_step: Params::OPPONENT_STEP,
            opponent_deadzone: Params::OPPONENT_DEADZONE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left edge of the paddle defending the given side
    pub fn paddle_x(&self, side: Side, field: &Field) -> f32 {
        match side {
            Side::Human => 0.0,
            Side::Opponent => field.width - self.paddle_width,
        }
    }
}
