use glam::Vec2;

use crate::map::Aabb;
use crate::params::Params;

/// Which side of the table a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    /// Bottom paddle, arrow keys. Also the single-player paddle.
    One,
    /// Top paddle, Q/D keys.
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// Paddle component - a horizontally moving bat
///
/// The two intent flags are independent: holding both directions at once
/// cancels out to zero net motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub player: Player,
    pub pos: Vec2, // top-left corner
    pub size: Vec2,
    pub speed: f32,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Paddle {
    pub fn new(player: Player, pos: Vec2) -> Self {
        Self {
            player,
            pos,
            size: Vec2::new(Params::PADDLE_WIDTH, Params::PADDLE_HEIGHT),
            speed: Params::PADDLE_SPEED,
            moving_left: false,
            moving_right: false,
        }
    }

    pub fn move_left(&mut self) {
        self.moving_left = true;
    }

    pub fn move_right(&mut self) {
        self.moving_right = true;
    }

    pub fn stop_left(&mut self) {
        self.moving_left = false;
    }

    pub fn stop_right(&mut self) {
        self.moving_right = false;
    }

    /// Advance by `dt` seconds. Never clamps; callers keep the paddle on
    /// the table by clearing intents before calling this.
    pub fn update(&mut self, dt: f32) {
        let dir = f32::from(u8::from(self.moving_right)) - f32::from(u8::from(self.moving_left));
        self.pos.x += self.speed * dt * dir;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // top-left corner
    pub size: Vec2,
    pub speed: f32,
    pub dir: Vec2,     // direction multipliers, sign flipped by rebounds
    pub respawn: Vec2, // where bottom/top crossings send the ball
}

impl Ball {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::splat(Params::BALL_SIZE),
            speed: Params::BALL_SPEED,
            dir: Params::BALL_DIRECTION,
            respawn: Params::BALL_RESPAWN,
        }
    }

    /// Euler step, no clamping and no swept collision.
    pub fn update(&mut self, dt: f32) {
        self.pos += self.dir * self.speed * dt;
    }

    pub fn rebound_sides(&mut self) {
        self.dir.x = -self.dir.x;
    }

    /// Single-player top wall and every paddle hit.
    pub fn rebound_top_or_paddle(&mut self) {
        self.dir.y = -self.dir.y;
    }

    pub fn rebound_bottom(&mut self) {
        self.pos = self.respawn;
        self.dir.y = -self.dir.y;
    }

    /// Two-player top edge, which is a scoring boundary rather than a wall.
    pub fn rebound_top_multiplayer(&mut self) {
        self.pos = self.respawn;
        self.dir.y = -self.dir.y;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn direction(&self) -> Vec2 {
        self.dir
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }
}
