use glam::Vec2;

use crate::components::Player;
use crate::map::GameMap;
use crate::params::Params;

/// How a frame resolves the ball overlapping more than one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddleHitPolicy {
    /// Every overlapping paddle flips the vertical direction. Two hits in
    /// one frame cancel out.
    #[default]
    ReboundEach,
    /// At most one flip per frame, however many paddles overlap.
    ReboundOnce,
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_hit_policy: PaddleHitPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_hit_policy: PaddleHitPolicy::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config for a window of the given size. Degenerate sizes (a
    /// minimised window) fall back to the default arena.
    pub fn with_arena(width: f32, height: f32) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self {
            arena_width: width,
            arena_height: height,
            ..Self::default()
        }
    }

    pub fn with_paddle_hit_policy(mut self, policy: PaddleHitPolicy) -> Self {
        self.paddle_hit_policy = policy;
        self
    }

    pub fn map(&self) -> GameMap {
        GameMap::new(self.arena_width, self.arena_height)
    }

    /// Starting top-left corner for a player's paddle
    pub fn paddle_start(&self, player: Player) -> Vec2 {
        let x = self.arena_width / 2.0;
        match player {
            Player::One => Vec2::new(x, self.arena_height - Params::PADDLE_ONE_BOTTOM_OFFSET),
            Player::Two => Vec2::new(x, Params::PADDLE_TWO_Y),
        }
    }

    /// Where the ball is placed when a round starts: centred horizontally
    /// on the top edge
    pub fn ball_start(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, 0.0)
    }

    /// Where the ball goes when a round ends
    pub fn arena_center(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_start() {
        let config = Config::new();
        assert_eq!(config.paddle_start(Player::One), Vec2::new(512.0, 688.0));
        assert_eq!(config.paddle_start(Player::Two), Vec2::new(512.0, 20.0));
    }

    #[test]
    fn test_config_ball_start() {
        let config = Config::with_arena(800.0, 600.0);
        assert_eq!(config.ball_start(), Vec2::new(400.0, 0.0));
        assert_eq!(config.arena_center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_config_with_arena_rejects_empty_window() {
        let config = Config::with_arena(0.0, 600.0);
        assert_eq!(config.arena_width, Params::ARENA_WIDTH);
        assert_eq!(config.arena_height, Params::ARENA_HEIGHT);
    }

    #[test]
    fn test_config_default_policy_is_legacy() {
        assert_eq!(Config::new().paddle_hit_policy, PaddleHitPolicy::ReboundEach);
        let once = Config::new().with_paddle_hit_policy(PaddleHitPolicy::ReboundOnce);
        assert_eq!(once.paddle_hit_policy, PaddleHitPolicy::ReboundOnce);
    }

    #[test]
    fn test_config_map_matches_arena() {
        let map = Config::with_arena(640.0, 480.0).map();
        assert_eq!(map.width, 640.0);
        assert_eq!(map.height, 480.0);
    }
}
