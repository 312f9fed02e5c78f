use crate::components::Player;
use crate::fsm::GameMode;
use crate::params::Params;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32,      // Delta time for this frame
    pub elapsed: f32, // Seconds since the last life-loss respawn
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, dt: f32) {
        self.dt = dt;
        self.elapsed += dt;
    }

    pub fn reset_elapsed(&mut self) {
        self.elapsed = 0.0;
    }
}

/// Per-player score and lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerStats {
    pub score: u32,
    pub lives: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            score: 0,
            lives: Params::STARTING_LIVES,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Scoreboard {
    players: [PlayerStats; 2],
    high_score: u32, // player 1 only, kept for the lifetime of the process
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self, player: Player) -> PlayerStats {
        self.players[player.index()]
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn award_point(&mut self, player: Player) {
        self.players[player.index()].score += 1;
    }

    /// Take a life away, never going below zero. Returns lives left.
    pub fn lose_life(&mut self, player: Player) -> u32 {
        let stats = &mut self.players[player.index()];
        stats.lives = stats.lives.saturating_sub(1);
        stats.lives
    }

    /// True once any player has run out of lives
    pub fn round_lost(&self) -> bool {
        self.players.iter().any(|p| p.lives < 1)
    }

    /// End the round: fold player 1's score into the high score and put
    /// both players back to a fresh start. Returns whether the high score
    /// moved.
    pub fn reset_round(&mut self) -> bool {
        let score = self.players[Player::One.index()].score;
        let improved = score > self.high_score;
        if improved {
            self.high_score = score;
        }
        self.players = [PlayerStats::default(); 2];
        improved
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameEvents {
    /// Mode change caused by this frame, as (from, to)
    pub transition: Option<(GameMode, GameMode)>,
    pub side_rebound: bool,
    pub top_rebound: bool,
    pub bottom_rebound: bool,
    pub top_multiplayer_rebound: bool,
    pub paddle_hits: u8,
    pub scored: [bool; 2],
    pub lives_lost: [bool; 2],
    pub round_over: bool,
    pub high_score_updated: bool,
    pub quit_requested: bool,
}

impl FrameEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&self, player: Player) -> bool {
        self.scored[player.index()]
    }

    pub fn lost_life(&self, player: Player) -> bool {
        self.lives_lost[player.index()]
    }
}
