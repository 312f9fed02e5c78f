use glam::Vec2;

/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (pixels, y grows downward)
    pub const ARENA_WIDTH: f32 = 1024.0;
    pub const ARENA_HEIGHT: f32 = 768.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 50.0;
    pub const PADDLE_HEIGHT: f32 = 5.0;
    pub const PADDLE_SPEED: f32 = 1000.0; // units per second
    pub const PADDLE_ONE_BOTTOM_OFFSET: f32 = 80.0; // player 1 sits this far above the bottom edge
    pub const PADDLE_TWO_Y: f32 = 20.0;

    // Ball
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED: f32 = 1000.0;
    pub const BALL_DIRECTION: Vec2 = Vec2::new(0.2, 0.2); // not normalized
    pub const BALL_RESPAWN: Vec2 = Vec2::new(500.0, 100.0);

    // Round
    pub const STARTING_LIVES: u32 = 3;
    pub const SCORE_GUARD_SECS: f32 = 1.0; // top bounces score only after this long in the round
}
