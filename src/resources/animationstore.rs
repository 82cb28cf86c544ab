//! Animation clip registry.
//!
//! Holds the immutable definition of every player clip together with a
//! readiness flag set by the front-end once the clip's sprite sheet loaded.
//! A clip that is not ready can still be selected; it just does not advance
//! and is not drawn.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::components::animation::AnimationClipId;

/// Immutable data describing one sprite-sheet animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub id: AnimationClipId,
    /// Number of frames laid out horizontally in the sheet.
    pub frame_count: usize,
    /// Ticks a frame stays on screen before the next one.
    pub frame_interval: u32,
    /// Whether the sprite sheet is available for drawing.
    pub ready: bool,
}

/// Central registry of the player's animation clips.
#[derive(Resource, Debug, Clone)]
pub struct AnimationStore {
    pub clips: FxHashMap<AnimationClipId, AnimationClip>,
}

impl AnimationStore {
    /// The four player clips, all marked ready.
    pub fn new(frame_interval: u32) -> Self {
        let clips = AnimationClipId::ALL
            .into_iter()
            .map(|id| {
                let frame_count = match id {
                    AnimationClipId::Idle => 4,
                    AnimationClipId::Walk => 8,
                    AnimationClipId::Run => 7,
                    AnimationClipId::Jump => 6,
                };
                (
                    id,
                    AnimationClip {
                        id,
                        frame_count,
                        frame_interval,
                        ready: true,
                    },
                )
            })
            .collect();
        Self { clips }
    }

    pub fn get(&self, id: AnimationClipId) -> Option<&AnimationClip> {
        self.clips.get(&id)
    }

    pub fn is_ready(&self, id: AnimationClipId) -> bool {
        self.clips.get(&id).is_some_and(|clip| clip.ready)
    }

    pub fn set_ready(&mut self, id: AnimationClipId, ready: bool) {
        if let Some(clip) = self.clips.get_mut(&id) {
            clip.ready = ready;
        }
    }
}
