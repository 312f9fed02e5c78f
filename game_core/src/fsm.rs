//! Game Mode State Machine
//!
//! Menu, single-player and two-player modes, and the key presses and round
//! results that move between them.

use crate::input::Key;

/// Game modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    Menu,
    SinglePlayer,
    MultiPlayer,
}

/// Actions that trigger mode transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeAction {
    SelectSingle,
    SelectMulti,
    ReturnToMenu,
    RoundOver,
}

impl ModeAction {
    /// Action bound to a key press, if any
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Digit1 => Some(ModeAction::SelectSingle),
            Key::Digit2 => Some(ModeAction::SelectMulti),
            Key::KeyM => Some(ModeAction::ReturnToMenu),
            _ => None,
        }
    }
}

/// Result of a mode transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_mode: GameMode,
    pub to_mode: GameMode,
    pub action: ModeAction,
}

impl TransitionResult {
    /// Transition accepted and landed somewhere new
    pub fn changed(&self) -> bool {
        self.success && self.from_mode != self.to_mode
    }
}

/// Game mode finite state machine
#[derive(Debug, Clone, Default)]
pub struct ModeFsm {
    mode: GameMode,
}

impl ModeFsm {
    pub fn new() -> Self {
        Self {
            mode: GameMode::Menu,
        }
    }

    /// Get current mode
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: ModeAction) -> TransitionResult {
        let from_mode = self.mode;

        if let Some(next_mode) = self.get_next_mode(action) {
            self.mode = next_mode;
            TransitionResult {
                success: true,
                from_mode,
                to_mode: next_mode,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_mode,
                to_mode: from_mode,
                action,
            }
        }
    }

    /// Get next mode for a given action (if valid)
    fn get_next_mode(&self, action: ModeAction) -> Option<GameMode> {
        match (self.mode, action) {
            // From Menu
            (GameMode::Menu, ModeAction::SelectSingle) => Some(GameMode::SinglePlayer),
            (GameMode::Menu, ModeAction::SelectMulti) => Some(GameMode::MultiPlayer),

            // From anywhere
            (_, ModeAction::ReturnToMenu) => Some(GameMode::Menu),

            // From a round in progress
            (GameMode::SinglePlayer | GameMode::MultiPlayer, ModeAction::RoundOver) => {
                Some(GameMode::Menu)
            }

            // Invalid transition
            _ => None,
        }
    }

}
