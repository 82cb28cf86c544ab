//! Input sources.
//!
//! Every way of controlling the runner (keyboard, on-screen touch buttons, a
//! virtual or physical joystick, a recorded script) implements
//! [`InputSource`] and reports the same [`ControlSample`]: which of the four
//! controls are held right now. Sources never produce edges; the
//! [`update_input_state`](crate::systems::input::update_input_state) system
//! derives them, so any source (or a [`CompositeSource`] of several) can drive
//! the simulation interchangeably.
//!
//! Malformed raw input (unknown keys, non-finite axes, stray touch ids)
//! collapses to "not held".

pub mod joystick;
pub mod keyboard;
pub mod script;
pub mod touch;

use std::ops::BitOr;

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

/// Held state of the four game controls, as reported by a source.
///
/// Also stored as a resource: the latest sample handed to the simulation.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlSample {
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
    #[serde(default)]
    pub jump: bool,
    #[serde(default)]
    pub run: bool,
}

impl ControlSample {
    pub const NONE: ControlSample = ControlSample {
        left: false,
        right: false,
        jump: false,
        run: false,
    };
}

impl BitOr for ControlSample {
    type Output = ControlSample;

    fn bitor(self, rhs: ControlSample) -> ControlSample {
        ControlSample {
            left: self.left || rhs.left,
            right: self.right || rhs.right,
            jump: self.jump || rhs.jump,
            run: self.run || rhs.run,
        }
    }
}

/// Anything that can report the held controls once per display frame.
pub trait InputSource {
    fn sample(&mut self) -> ControlSample;
}

/// Merges several sources; a control is held if any source holds it.
#[derive(Default)]
pub struct CompositeSource {
    sources: Vec<Box<dyn InputSource>>,
}

impl CompositeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: impl InputSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn push(&mut self, source: Box<dyn InputSource>) {
        self.sources.push(source);
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl InputSource for CompositeSource {
    fn sample(&mut self) -> ControlSample {
        self.sources
            .iter_mut()
            .fold(ControlSample::NONE, |acc, source| acc | source.sample())
    }
}
