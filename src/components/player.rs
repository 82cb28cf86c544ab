//! Player state component.
//!
//! The simulation has exactly one player entity. Its movement flags live in
//! [`Player`], while position, velocity, hitbox, sprite size and animation
//! are split across the other components like any other entity.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Horizontal direction the player sprite looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// `+1` when facing right, `-1` when facing left.
    pub fn sign(self) -> i8 {
        match self {
            Facing::Right => 1,
            Facing::Left => -1,
        }
    }

    /// Facing implied by a horizontal velocity.
    ///
    /// Speeds within `deadzone` keep the previous facing so the sprite does
    /// not flicker while sliding to a stop.
    pub fn from_velocity(vx: f32, deadzone: f32, previous: Facing) -> Facing {
        if vx > deadzone {
            Facing::Right
        } else if vx < -deadzone {
            Facing::Left
        } else {
            previous
        }
    }
}

/// Movement flags of the player entity.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Player {
    pub facing: Facing,
    /// Run modifier held this tick.
    pub running: bool,
    /// Airborne after a jump; cleared on ground contact.
    pub jumping: bool,
}
