//! Input-controlled movement component.
//!
//! [`PlayerController`] holds the tuning the movement system uses to turn the
//! shared [`InputState`](crate::resources::input::InputState) into velocity
//! for the entity it is attached to.

use bevy_ecs::prelude::Component;

use crate::resources::gameconfig::PlayerTuning;

/// Movement tuning for an input-driven side-scroller character.
///
/// All speeds are in world units per tick.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct PlayerController {
    /// Walking target speed.
    pub max_speed: f32,
    /// Factor applied to the target speed while running.
    pub run_multiplier: f32,
    /// Fraction of the gap to the target speed closed each tick.
    pub accel: f32,
    /// Fraction of speed lost each tick without horizontal input.
    pub friction: f32,
    /// Upward speed set when a jump starts.
    pub jump_impulse: f32,
    /// Speeds below this keep the current facing.
    pub facing_deadzone: f32,
}

impl PlayerController {
    pub fn from_tuning(tuning: &PlayerTuning) -> Self {
        Self {
            max_speed: tuning.max_speed,
            run_multiplier: tuning.run_multiplier,
            accel: tuning.accel,
            friction: tuning.friction,
            jump_impulse: tuning.jump_impulse,
            facing_deadzone: tuning.facing_deadzone,
        }
    }
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::from_tuning(&PlayerTuning::default())
    }
}
