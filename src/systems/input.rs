//! Input systems.
//!
//! - [`update_input_state`] copies the frame's [`ControlSample`] into
//!   [`InputState`], recording press/release edges.
//! - [`consume_input_edges`] clears those edges at the end of each tick so a
//!   single press starts a single jump even when a frame runs several ticks.
use bevy_ecs::prelude::*;

use crate::input::ControlSample;
use crate::resources::input::InputState;

pub fn update_input_state(sample: Res<ControlSample>, mut input: ResMut<InputState>) {
    input.left.update(sample.left);
    input.right.update(sample.right);
    input.jump.update(sample.jump);
    input.run.update(sample.run);
}

pub fn consume_input_edges(mut input: ResMut<InputState>) {
    input.consume_edges();
}
