//! Viewport size resource.
//!
//! The area the game is played in, in world units. Owned by the front-end,
//! which updates it on resize; the simulation only reads it.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

/// Current viewport dimensions.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
