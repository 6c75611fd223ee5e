use glam::Vec2;

use crate::field::Field;
use crate::params::Params;

/// Which side of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left paddle, positioned by the pointer adapter
    Human,
    /// Right paddle, positioned by the tracking heuristic
    Opponent,
}

impl Side {
    /// Horizontal direction of a ball leaving this paddle
    pub fn direction(self) -> f32 {
        match self {
            Side::Human => 1.0,
            Side::Opponent => -1.0,
        }
    }
}

/// Paddle component - one per side, spawned once at game start
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    /// Top edge, field coordinates
    pub y: f32,
    pub color: &'static str,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self {
            side,
            y,
            color: Params::PADDLE_COLOR,
        }
    }

    /// Vertical center of the paddle face
    pub fn center(&self, height: f32) -> f32 {
        self.y + height / 2.0
    }
}

/// Ball component - the pong ball, a process-lifetime singleton
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    /// Velocity in field units per tick
    pub vel: Vec2,
    /// Magnitude restored into `vel` at every paddle collision. Only equal
    /// to `vel.length()` right after a collision assignment; wall bounces
    /// just negate `vel.y` and leave it alone.
    pub speed: f32,
    pub color: &'static str,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, speed: f32) -> Self {
        Self {
            pos,
            vel,
            speed,
            color: Params::BALL_COLOR,
        }
    }

    /// Reset protocol: recenter the ball and restore the default serve.
    ///
    /// Only the horizontal direction is history-dependent (flipped relative
    /// to the last travel direction, serving right when `vel.x` was zero);
    /// vertical velocity and speed go back to fixed defaults.
    pub fn reset(&mut self, field: &Field) {
        self.pos = field.center();
        self.vel.x = if self.vel.x > 0.0 {
            -Params::SERVE_VX
        } else {
            Params::SERVE_VX
        };
        self.vel.y = Params::SERVE_VY;
        self.speed = Params::SERVE_SPEED;
    }
}
