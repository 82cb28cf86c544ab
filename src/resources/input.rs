//! Per-tick input resource.
//!
//! Input sources (keyboard, touch, joystick, scripts) only report which
//! controls are held. The [`InputState`] resource turns those held states into
//! press edges so the movement system can tell a fresh jump press from
//! a held button.
use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
/// Boolean control state with edge tracking.
pub struct BoolState {
    /// Whether the control is currently held.
    pub active: bool,
    /// Whether the control went down since the edges were last consumed.
    pub just_pressed: bool,
}

impl BoolState {
    /// Record the latest held state.
    ///
    /// Edges accumulate until [`BoolState::consume_edges`] so a press that
    /// arrives on a frame without a simulation tick is not lost.
    pub fn update(&mut self, down: bool) {
        if down && !self.active {
            self.just_pressed = true;
        }
        self.active = down;
    }

    pub fn consume_edges(&mut self) {
        self.just_pressed = false;
    }
}

/// Resource capturing the normalized control state relevant to gameplay.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    pub left: BoolState,
    pub right: BoolState,
    pub jump: BoolState,
    pub run: BoolState,
}

impl InputState {
    /// Any horizontal direction held.
    pub fn horizontal_held(&self) -> bool {
        self.left.active || self.right.active
    }

    /// The snapshot handed to the simulation core this tick.
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            left: self.left.active,
            right: self.right.active,
            jump_edge: self.jump.just_pressed,
            running: self.run.active,
        }
    }

    pub fn consume_edges(&mut self) {
        self.left.consume_edges();
        self.right.consume_edges();
        self.jump.consume_edges();
        self.run.consume_edges();
    }
}

/// Normalized input for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    /// Jump was pressed since the previous tick.
    pub jump_edge: bool,
    pub running: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
    }

    #[test]
    fn test_press_sets_edge_once() {
        let mut bs = BoolState::default();
        bs.update(true);
        assert!(bs.active && bs.just_pressed);
        bs.consume_edges();
        bs.update(true);
        assert!(bs.active);
        assert!(!bs.just_pressed);
    }

    #[test]
    fn test_edge_survives_until_consumed() {
        let mut bs = BoolState::default();
        bs.update(true);
        bs.update(true);
        assert!(bs.just_pressed);
    }

    #[test]
    fn test_release_then_press_is_a_new_edge() {
        let mut bs = BoolState::default();
        bs.update(true);
        bs.consume_edges();
        bs.update(false);
        assert!(!bs.active && !bs.just_pressed);
        bs.update(true);
        assert!(bs.just_pressed);
    }

    #[test]
    fn test_snapshot_maps_jump_edge() {
        let mut input = InputState::default();
        input.right.update(true);
        input.jump.update(true);
        input.run.update(true);
        assert_eq!(
            input.snapshot(),
            InputSnapshot {
                left: false,
                right: true,
                jump_edge: true,
                running: true
            }
        );
        input.consume_edges();
        assert!(!input.snapshot().jump_edge);
        assert!(input.horizontal_held());
    }
}
