//! Read-only view of the simulation for renderers and tooling.
//!
//! A [`RenderSnapshot`] is everything a front-end needs to draw one frame.
//! It is plain data and serializes to JSON for the headless `--dump` output.

use serde::Serialize;

use crate::components::animation::AnimationClipId;
use crate::components::boxcollider::Aabb;
use crate::components::player::Facing;
use crate::resources::gamestate::Coin;
use crate::resources::viewport::Viewport;

/// Where and how to draw the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerPose {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub vx: f32,
    pub vy: f32,
    pub facing: Facing,
    pub jumping: bool,
    pub clip: AnimationClipId,
    pub frame_index: usize,
    /// Frames in the clip's sprite sheet, laid out horizontally.
    pub frame_count: usize,
    /// Whether the clip's sprite sheet can be drawn.
    pub clip_ready: bool,
    /// Collision box used against coins, for debug overlays.
    pub hitbox: Aabb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub viewport: Viewport,
    pub ground_y: f32,
    pub player: Option<PlayerPose>,
    pub coins: Vec<Coin>,
    pub score: u32,
    /// Rotation shared by every coin, in radians.
    pub coin_angle: f32,
    pub tick: u64,
}
