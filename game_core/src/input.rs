//! Keyboard input as the core sees it
//!
//! Platform layers translate their own key codes into [`Key`] and hand the
//! core one [`FrameInput`] per tick.

use std::collections::HashSet;

use crate::components::Player;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    KeyQ,
    KeyD,
    Digit1,
    Digit2,
    KeyM,
    Escape,
}

impl Key {
    /// Paddle keys, sampled as held state every tick
    pub const MOVEMENT: [Key; 4] = [Key::ArrowLeft, Key::ArrowRight, Key::KeyQ, Key::KeyD];
}

/// Left/right keys driving a player's paddle
pub fn paddle_keys(player: Player) -> (Key, Key) {
    match player {
        Player::One => (Key::ArrowLeft, Key::ArrowRight),
        Player::Two => (Key::KeyQ, Key::KeyD),
    }
}

/// Discrete events drained from the platform once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    WindowClosed,
    KeyPressed(Key),
}

/// Everything the core needs to know about input for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Key presses in arrival order
    pub pressed: Vec<Key>,
    /// Keys held down at the time of sampling
    pub held: HashSet<Key>,
    pub window_closed: bool,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a frame from drained events plus a held-key snapshot
    pub fn from_events(events: &[InputEvent], held: impl IntoIterator<Item = Key>) -> Self {
        let mut input = Self {
            held: held.into_iter().collect(),
            ..Self::default()
        };
        for event in events {
            match *event {
                InputEvent::WindowClosed => input.window_closed = true,
                InputEvent::KeyPressed(key) => input.pressed.push(key),
            }
        }
        input
    }

    pub fn press(mut self, key: Key) -> Self {
        self.pressed.push(key);
        self
    }

    pub fn hold(mut self, key: Key) -> Self {
        self.held.insert(key);
        self
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Window close or Escape, pressed or held
    pub fn quit_requested(&self) -> bool {
        self.window_closed || self.is_held(Key::Escape) || self.pressed.contains(&Key::Escape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_events_keeps_press_order() {
        let events = [
            InputEvent::KeyPressed(Key::Digit1),
            InputEvent::KeyPressed(Key::KeyM),
            InputEvent::KeyPressed(Key::Digit2),
        ];
        let input = FrameInput::from_events(&events, [Key::ArrowLeft]);
        assert_eq!(input.pressed, vec![Key::Digit1, Key::KeyM, Key::Digit2]);
        assert!(input.is_held(Key::ArrowLeft));
        assert!(!input.is_held(Key::ArrowRight));
        assert!(!input.quit_requested());
    }

    #[test]
    fn test_window_closed_requests_quit() {
        let input = FrameInput::from_events(&[InputEvent::WindowClosed], []);
        assert!(input.window_closed);
        assert!(input.quit_requested());
    }

    #[test]
    fn test_escape_requests_quit() {
        assert!(FrameInput::new().press(Key::Escape).quit_requested());
        assert!(FrameInput::new().hold(Key::Escape).quit_requested());
    }

    #[test]
    fn test_paddle_keys() {
        assert_eq!(paddle_keys(Player::One), (Key::ArrowLeft, Key::ArrowRight));
        assert_eq!(paddle_keys(Player::Two), (Key::KeyQ, Key::KeyD));
    }
}
