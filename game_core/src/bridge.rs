//! Seams between the core and the platform: where input comes from, where
//! frames go, and the tick that joins them.

use glam::Vec2;

use crate::fsm::GameMode;
use crate::input::{FrameInput, InputEvent, Key};
use crate::map::Aabb;
use crate::state::GameState;
use crate::{FrameEvents, Player};

/// Menu text, one entry per line
pub const MENU_LINES: [&str; 2] = ["1- Single player mode", "2- Multiplayer mode"];

/// Supplies keyboard and window events
pub trait InputSource {
    /// Discrete events since the last call, oldest first
    fn drain_events(&mut self) -> Vec<InputEvent>;

    /// Whether `key` is currently held down
    fn is_held(&self, key: Key) -> bool;
}

/// Draws one frame
pub trait Renderer {
    type Error;

    fn render(&mut self, view: &FrameView) -> Result<(), Self::Error>;
}

/// Whether the loop should keep going after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

/// What a renderer needs to draw a frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameView {
    pub mode: GameMode,
    pub arena: Vec2,
    /// Paddles taking part in the current mode
    pub paddles: Vec<Aabb>,
    /// Hidden while the menu is up
    pub ball: Option<Aabb>,
    /// HUD lines, top to bottom
    pub hud: Vec<String>,
}

impl FrameView {
    pub fn from_state(state: &GameState) -> Self {
        let mode = state.mode();
        let map = state.map();
        let shown: &[Player] = match mode {
            GameMode::Menu => &[],
            GameMode::SinglePlayer => &[Player::One],
            GameMode::MultiPlayer => &Player::ALL,
        };
        let paddles = shown
            .iter()
            .filter_map(|&player| state.paddle(player))
            .map(|paddle| paddle.bounds())
            .collect();
        let ball = match mode {
            GameMode::Menu => None,
            _ => state.ball().map(|ball| ball.bounds()),
        };

        Self {
            mode,
            arena: Vec2::new(map.width, map.height),
            paddles,
            ball,
            hud: hud_lines(state),
        }
    }

    /// HUD lines joined for a single-line surface such as a window title
    pub fn hud_line(&self) -> String {
        self.hud.join("  ")
    }
}

/// HUD text for the current mode
pub fn hud_lines(state: &GameState) -> Vec<String> {
    match state.mode() {
        GameMode::Menu => MENU_LINES.iter().map(|line| line.to_string()).collect(),
        GameMode::SinglePlayer => {
            let stats = state.stats(Player::One);
            vec![format!(
                "Score:{} Lives:{} High:{}",
                stats.score,
                stats.lives,
                state.high_score()
            )]
        }
        GameMode::MultiPlayer => Player::ALL
            .iter()
            .map(|&player| {
                let stats = state.stats(player);
                format!("Score:{} Lives:{}", stats.score, stats.lives)
            })
            .collect(),
    }
}

/// One pass of the game loop: poll input, advance the game, draw
///
/// A tick that asks to quit is not rendered.
pub fn run_tick<I, R>(
    state: &mut GameState,
    input: &mut I,
    renderer: &mut R,
    dt: f32,
) -> Result<(TickControl, FrameEvents), R::Error>
where
    I: InputSource + ?Sized,
    R: Renderer + ?Sized,
{
    let drained = input.drain_events();
    let held = Key::MOVEMENT
        .into_iter()
        .chain([Key::Escape])
        .filter(|&key| input.is_held(key));
    let frame = FrameInput::from_events(&drained, held);

    let events = state.apply_frame(&frame, dt);
    if events.quit_requested {
        return Ok((TickControl::Exit, events));
    }

    renderer.render(&state.view())?;
    Ok((TickControl::Continue, events))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[test]
    fn test_menu_view_hides_entities() {
        let state = GameState::new(Config::new());
        let view = state.view();

        assert_eq!(view.mode, GameMode::Menu);
        assert!(view.paddles.is_empty());
        assert!(view.ball.is_none());
        assert_eq!(view.hud, vec!["1- Single player mode", "2- Multiplayer mode"]);
        assert_eq!(view.arena, Vec2::new(1024.0, 768.0));
    }

    #[test]
    fn test_single_player_hud() {
        let mut state = GameState::new(Config::new());
        state.apply_frame(&FrameInput::new().press(Key::Digit1), 0.0);
        let view = state.view();

        assert_eq!(view.hud, vec!["Score:0 Lives:3 High:0"]);
        assert_eq!(view.paddles.len(), 1);
        assert!(view.ball.is_some());
    }

    #[test]
    fn test_multi_player_hud() {
        let mut state = GameState::new(Config::new());
        state.apply_frame(&FrameInput::new().press(Key::Digit2), 0.0);
        let view = state.view();

        assert_eq!(view.hud, vec!["Score:0 Lives:3", "Score:0 Lives:3"]);
        assert_eq!(view.paddles.len(), 2);
        assert_eq!(view.hud_line(), "Score:0 Lives:3  Score:0 Lives:3");
    }
}
