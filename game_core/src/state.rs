//! The owned game aggregate and its per-frame entry point

use glam::Vec2;
use hecs::World;
use log::info;

use crate::bridge::FrameView;
use crate::fsm::{GameMode, ModeAction, ModeFsm};
use crate::input::FrameInput;
use crate::systems::{
    apply_paddle_input, move_ball, move_paddles, run_rules, Rule, RuleContext,
    MULTI_PLAYER_RULES, SINGLE_PLAYER_RULES,
};
use crate::{
    create_ball, create_paddle, Ball, Config, FrameEvents, GameMap, Paddle, Player, PlayerStats,
    Scoreboard, Time,
};

const SOLO: &[Player] = &[Player::One];
const VERSUS: &[Player] = &[Player::One, Player::Two];

/// Paddles, ball, scores and mode for one game session
pub struct GameState {
    world: World,
    map: GameMap,
    config: Config,
    fsm: ModeFsm,
    time: Time,
    scoreboard: Scoreboard,
}

impl GameState {
    pub fn new(config: Config) -> Self {
        let mut state = Self {
            world: World::new(),
            map: config.map(),
            config,
            fsm: ModeFsm::new(),
            time: Time::new(),
            scoreboard: Scoreboard::new(),
        };
        let ball_pos = state.config.ball_start();
        state.spawn_entities(ball_pos);
        state
    }

    pub fn mode(&self) -> GameMode {
        self.fsm.mode()
    }

    pub fn stats(&self, player: Player) -> PlayerStats {
        self.scoreboard.stats(player)
    }

    pub fn high_score(&self) -> u32 {
        self.scoreboard.high_score()
    }

    /// Seconds since the last respawn or round reset
    pub fn elapsed(&self) -> f32 {
        self.time.elapsed
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    pub fn paddle(&self, player: Player) -> Option<Paddle> {
        let mut query = self.world.query::<&Paddle>();
        query
            .iter()
            .find(|(_e, p)| p.player == player)
            .map(|(_e, p)| *p)
    }

    pub fn ball(&self) -> Option<Ball> {
        let mut query = self.world.query::<&Ball>();
        query.iter().next().map(|(_e, b)| *b)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct world access, for setting up scenarios
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Advance the game by one frame
    ///
    /// Mode keys are handled first, in the order they were pressed. A
    /// frame that changes mode does no physics. Otherwise the active
    /// mode's paddles and ball move and its rules run; a round that ends
    /// here is reset before returning.
    pub fn apply_frame(&mut self, input: &FrameInput, dt: f32) -> FrameEvents {
        let mut events = FrameEvents::new();
        events.quit_requested = input.quit_requested();

        let from = self.fsm.mode();
        let mut switched = false;
        for &key in &input.pressed {
            let Some(action) = ModeAction::from_key(key) else {
                continue;
            };
            let result = self.fsm.transition(action);
            if result.changed() {
                info!("Mode {:?} -> {:?}", result.from_mode, result.to_mode);
                switched = true;
            }
        }
        if switched {
            let to = self.fsm.mode();
            if from != to {
                events.transition = Some((from, to));
            }
            return events;
        }

        let (active, rules): (&[Player], &[Rule]) = match self.fsm.mode() {
            GameMode::Menu => return events,
            GameMode::SinglePlayer => (SOLO, SINGLE_PLAYER_RULES),
            GameMode::MultiPlayer => (VERSUS, MULTI_PLAYER_RULES),
        };

        apply_paddle_input(&mut self.world, input, &self.map, active);
        self.time.advance(dt);
        move_paddles(&mut self.world, &self.time, active);
        move_ball(&mut self.world, &self.time);

        let mut ctx = RuleContext {
            world: &mut self.world,
            map: &self.map,
            config: &self.config,
            scoreboard: &mut self.scoreboard,
            time: &mut self.time,
            events: &mut events,
            active,
        };
        run_rules(rules, &mut ctx);

        if events.round_over {
            self.end_round(&mut events);
        }
        events
    }

    /// Snapshot of what should be on screen
    pub fn view(&self) -> FrameView {
        FrameView::from_state(self)
    }

    /// Reset stats and go back to Menu. Paddles return to their start
    /// points and the ball to the arena centre with its starting direction.
    fn end_round(&mut self, events: &mut FrameEvents) {
        let score = self.scoreboard.stats(Player::One).score;
        events.high_score_updated = self.scoreboard.reset_round();
        let ball_pos = self.config.arena_center();
        self.spawn_entities(ball_pos);
        self.time.reset_elapsed();

        let result = self.fsm.transition(ModeAction::RoundOver);
        if result.changed() {
            events.transition = Some((result.from_mode, result.to_mode));
        }
        info!(
            "Round over in {:?}: score {}, high score {}",
            result.from_mode,
            score,
            self.scoreboard.high_score()
        );
    }

    /// Clear the world, place both paddles at their start points and the
    /// ball at `ball_pos`
    fn spawn_entities(&mut self, ball_pos: Vec2) {
        self.world.clear();
        for player in Player::ALL {
            create_paddle(&mut self.world, player, self.config.paddle_start(player));
        }
        create_ball(&mut self.world, ball_pos);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
