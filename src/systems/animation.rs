//! Animation systems.
//!
//! - [`animation_controller`] picks the clip for the player's movement state.
//! - [`animation`] advances the frame of the current clip on a tick timer.
//! - [`coin_spin`] turns the shared coin angle.
//!
//! # Clip selection
//!
//! Evaluated every tick, first match wins:
//!
//! 1. jumping → `jump`
//! 2. a horizontal direction held → `run` while running, else `walk`
//! 3. otherwise → `idle`
//!
//! Switching clips keeps the frame index; the next advance wraps it into the
//! new clip's frame range.
//!
//! # Related
//!
//! - [`crate::components::animation::Animation`] – per-entity playback state
//! - [`crate::resources::animationstore::AnimationStore`] – clip definitions and readiness

use std::f32::consts::TAU;

use bevy_ecs::prelude::*;

use crate::components::animation::{Animation, AnimationClipId};
use crate::components::player::Player;
use crate::resources::animationstore::{AnimationClip, AnimationStore};
use crate::resources::gamestate::GameState;
use crate::resources::input::InputState;

/// Coin rotation per tick, in radians.
pub const COIN_SPIN_PER_TICK: f32 = 0.05;

/// Clip for a movement state.
pub fn select_clip(jumping: bool, horizontal_held: bool, running: bool) -> AnimationClipId {
    if jumping {
        AnimationClipId::Jump
    } else if horizontal_held {
        if running {
            AnimationClipId::Run
        } else {
            AnimationClipId::Walk
        }
    } else {
        AnimationClipId::Idle
    }
}

/// Select the clip of every player entity from its flags and the held input.
pub fn animation_controller(mut query: Query<(&Player, &mut Animation)>, input: Res<InputState>) {
    for (player, mut anim) in query.iter_mut() {
        let clip = select_clip(player.jumping, input.horizontal_held(), player.running);
        if anim.clip != clip {
            anim.clip = clip;
        }
    }
}

/// Count one tick against `clip` and step the frame once the timer passes
/// the clip's interval. Returns true if the frame changed.
pub fn advance_frame(anim: &mut Animation, clip: &AnimationClip) -> bool {
    anim.frame_timer += 1;
    if anim.frame_timer > clip.frame_interval {
        anim.frame_index = (anim.frame_index + 1) % clip.frame_count.max(1);
        anim.frame_timer = 0;
        true
    } else {
        false
    }
}

/// Advance playback of every animation whose sprite sheet is ready.
///
/// Clips without a loaded sheet hold their frame and timer until the sheet
/// becomes ready.
pub fn animation(mut query: Query<&mut Animation>, store: Res<AnimationStore>) {
    for mut anim in query.iter_mut() {
        if let Some(clip) = store.get(anim.clip)
            && clip.ready
        {
            advance_frame(&mut anim, clip);
        }
    }
}

/// Turn all coins a little further.
pub fn coin_spin(mut state: ResMut<GameState>) {
    state.coin_angle = (state.coin_angle + COIN_SPIN_PER_TICK) % TAU;
}
