//! Keyboard input source.
//!
//! Keys are identified by their physical key code names ("ArrowLeft",
//! "Space", "ShiftLeft", ...). Arrows move, space jumps, either shift runs.
//! Any other code is ignored.

use rustc_hash::FxHashSet;

use super::{ControlSample, InputSource};

/// Keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Space,
    ShiftLeft,
    ShiftRight,
}

impl Key {
    /// Parse a physical key code name.
    pub fn from_code(code: &str) -> Option<Key> {
        match code {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "Space" => Some(Key::Space),
            "ShiftLeft" => Some(Key::ShiftLeft),
            "ShiftRight" => Some(Key::ShiftRight),
            _ => None,
        }
    }
}

/// Tracks which game keys are down from key-down/key-up events.
#[derive(Debug, Default, Clone)]
pub struct KeyboardSource {
    down: FxHashSet<Key>,
}

impl KeyboardSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.down.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.down.remove(&key);
    }

    /// Key-down event by code name. Unknown codes are ignored.
    pub fn key_down(&mut self, code: &str) {
        if let Some(key) = Key::from_code(code) {
            self.press(key);
        }
    }

    /// Key-up event by code name. Unknown codes are ignored.
    pub fn key_up(&mut self, code: &str) {
        if let Some(key) = Key::from_code(code) {
            self.release(key);
        }
    }

    /// Set a key's held state directly, for front-ends that poll.
    pub fn set(&mut self, key: Key, down: bool) {
        if down {
            self.press(key);
        } else {
            self.release(key);
        }
    }

    /// Release everything, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.down.clear();
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }
}

impl InputSource for KeyboardSource {
    fn sample(&mut self) -> ControlSample {
        ControlSample {
            left: self.is_down(Key::ArrowLeft),
            right: self.is_down(Key::ArrowRight),
            jump: self.is_down(Key::Space),
            run: self.is_down(Key::ShiftLeft) || self.is_down(Key::ShiftRight),
        }
    }
}
