//! Game state resource.
//!
//! [`GameState`] owns everything the player can collect: the ordered list of
//! active coins and the score. It also carries the ground line, which is
//! derived from the viewport height every tick, and the shared coin spin
//! angle used by renderers.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::components::boxcollider::Aabb;

/// A collectible coin. Its collision box is the full coin rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Coin {
    /// Create a square coin of side `size`.
    pub fn new(x: f32, y: f32, size: f32) -> Self {
        Self {
            x,
            y,
            w: size,
            h: size,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.w, self.h)
    }
}

/// Coins, score and ground line of the running game.
#[derive(Resource, Debug, Clone, Default)]
pub struct GameState {
    /// Y of the ground line; everything stands on it.
    pub ground_y: f32,
    /// Height of the ground strip below the ground line.
    pub ground_thickness: f32,
    /// Active coins in spawn order.
    pub coins: Vec<Coin>,
    /// Rotation of every coin in radians.
    pub coin_angle: f32,
    score: u32,
}

impl GameState {
    /// Empty game for a viewport of the given height.
    pub fn new(viewport_height: f32, ground_thickness: f32) -> Self {
        Self {
            ground_y: viewport_height - ground_thickness,
            ground_thickness,
            ..Default::default()
        }
    }

    /// Move the ground line to match a (possibly resized) viewport.
    pub fn refresh_ground(&mut self, viewport_height: f32) {
        self.ground_y = viewport_height - self.ground_thickness;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Add collected coins to the score. The score never decreases.
    pub fn add_score(&mut self, collected: u32) {
        self.score = self.score.saturating_add(collected);
    }
}
