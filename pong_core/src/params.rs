/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const SERVE_SPEED: f32 = 7.0;
    pub const SERVE_VX: f32 = 5.0;
    pub const SERVE_VY: f32 = 5.0;
    /// Added to the ball's speed scalar on every paddle hit. There is no
    /// ceiling; speed grows for as long as a rally lasts.
    pub const SPEED_INCREMENT: f32 = 0.1;
    /// Reflection angle spans +/- 45 degrees across the paddle face.
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    // Opponent heuristic
    pub const OPPONENT_STEP: f32 = 4.0;
    pub const OPPONENT_DEADZONE: f32 = 20.0;

    // Render-facing color tags
    pub const BALL_COLOR: &'static str = "white";
    pub const PADDLE_COLOR: &'static str = "white";

    // Cadence (ticks per second, fixed-interval)
    pub const TICK_RATE: u32 = 60;
}
