//! Keyboard input handling
//!
//! Collects winit keyboard and window events between ticks and hands them
//! to the game as an [`InputSource`].

use std::collections::HashMap;

use game_core::{InputEvent, InputSource, Key};
use winit::event::ElementState;
use winit::keyboard::{Key as LogicalKey, KeyCode, NamedKey};

/// Mode and quit keys go by position on the keyboard
pub fn map_physical(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Digit1 | KeyCode::Numpad1 => Some(Key::Digit1),
        KeyCode::Digit2 | KeyCode::Numpad2 => Some(Key::Digit2),
        KeyCode::KeyM => Some(Key::KeyM),
        KeyCode::Escape => Some(Key::Escape),
        _ => None,
    }
}

/// Paddle keys go by the label the active layout gives them
pub fn map_logical(key: &LogicalKey) -> Option<Key> {
    match key {
        LogicalKey::Named(NamedKey::ArrowLeft) => Some(Key::ArrowLeft),
        LogicalKey::Named(NamedKey::ArrowRight) => Some(Key::ArrowRight),
        LogicalKey::Character(c) if c.eq_ignore_ascii_case("q") => Some(Key::KeyQ),
        LogicalKey::Character(c) if c.eq_ignore_ascii_case("d") => Some(Key::KeyD),
        _ => None,
    }
}

pub fn map_key(code: KeyCode, logical: &LogicalKey) -> Option<Key> {
    map_physical(code).or_else(|| map_logical(logical))
}

#[derive(Debug, Default)]
pub struct WindowInput {
    pending: Vec<InputEvent>,
    // Keyed by physical key so a release matches its press even if the
    // logical key changed in between
    held: HashMap<KeyCode, Key>,
}

impl WindowInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key event. Auto-repeat keeps the key held but is not a new
    /// press.
    pub fn handle_key(
        &mut self,
        code: KeyCode,
        logical: &LogicalKey,
        state: ElementState,
        repeat: bool,
    ) {
        match state {
            ElementState::Pressed => {
                let Some(key) = map_key(code, logical) else {
                    return;
                };
                self.held.insert(code, key);
                if !repeat {
                    self.pending.push(InputEvent::KeyPressed(key));
                }
            }
            ElementState::Released => {
                self.held.remove(&code);
            }
        }
    }

    pub fn close_requested(&mut self) {
        self.pending.push(InputEvent::WindowClosed);
    }

    /// Release events are not delivered once the window loses focus
    pub fn focus_lost(&mut self) {
        self.held.clear();
    }
}

impl InputSource for WindowInput {
    fn drain_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }

    fn is_held(&self, key: Key) -> bool {
        self.held.values().any(|&held| held == key)
    }
}
