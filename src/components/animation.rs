use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// The fixed set of player animation clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationClipId {
    #[default]
    Idle,
    Walk,
    Run,
    Jump,
}

impl AnimationClipId {
    pub const ALL: [AnimationClipId; 4] = [
        AnimationClipId::Idle,
        AnimationClipId::Walk,
        AnimationClipId::Run,
        AnimationClipId::Jump,
    ];

    /// Stable lowercase name, also used as the sprite sheet key.
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationClipId::Idle => "idle",
            AnimationClipId::Walk => "walk",
            AnimationClipId::Run => "run",
            AnimationClipId::Jump => "jump",
        }
    }
}

/// Playback state of an entity's sprite animation.
///
/// `frame_timer` counts ticks since the last frame change. Changing `clip`
/// keeps `frame_index` as it is; the next frame advance wraps it into the new
/// clip's range.
#[derive(Debug, Clone, Copy, Component, PartialEq, Default, Serialize, Deserialize)]
pub struct Animation {
    pub clip: AnimationClipId,
    pub frame_index: usize,
    pub frame_timer: u32,
}

impl Animation {
    pub fn new(clip: AnimationClipId) -> Self {
        Self {
            clip,
            frame_index: 0,
            frame_timer: 0,
        }
    }
}
