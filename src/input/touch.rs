//! Touch input source.
//!
//! Four on-screen buttons: left and right in the bottom-left corner, jump and
//! run in the bottom-right corner. Each active touch point is tracked by id
//! and holds at most one button; sliding a finger off a button releases it.
//! Drawing the buttons is left to the front-end; [`TouchLayout`] only decides
//! which button a point hits.

use rustc_hash::FxHashMap;

use super::{ControlSample, InputSource};
use crate::components::boxcollider::Aabb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchButton {
    Left,
    Right,
    Jump,
    Run,
}

/// Button rectangles for a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchLayout {
    pub left: Aabb,
    pub right: Aabb,
    pub jump: Aabb,
    pub run: Aabb,
}

impl TouchLayout {
    /// Square buttons of side `size` with `margin` spacing along the bottom
    /// edge of a `width` x `height` viewport.
    pub fn for_viewport(width: f32, height: f32, size: f32, margin: f32) -> Self {
        let y = height - margin - size;
        Self {
            left: Aabb::new(margin, y, size, size),
            right: Aabb::new(margin * 2.0 + size, y, size, size),
            run: Aabb::new(width - (margin + size) * 2.0, y, size, size),
            jump: Aabb::new(width - margin - size, y, size, size),
        }
    }

    pub fn buttons(&self) -> [(TouchButton, Aabb); 4] {
        [
            (TouchButton::Left, self.left),
            (TouchButton::Right, self.right),
            (TouchButton::Jump, self.jump),
            (TouchButton::Run, self.run),
        ]
    }

    /// The button under a point, if any. Non-finite points hit nothing.
    pub fn button_at(&self, x: f32, y: f32) -> Option<TouchButton> {
        if !(x.is_finite() && y.is_finite()) {
            return None;
        }
        self.buttons()
            .into_iter()
            .find(|(_, rect)| x >= rect.x && x <= rect.right() && y >= rect.y && y <= rect.bottom())
            .map(|(button, _)| button)
    }
}

/// Multi-touch state mapped onto the four buttons.
#[derive(Debug, Clone)]
pub struct TouchSource {
    layout: TouchLayout,
    touches: FxHashMap<u64, TouchButton>,
}

impl TouchSource {
    pub fn new(layout: TouchLayout) -> Self {
        Self {
            layout,
            touches: FxHashMap::default(),
        }
    }

    pub fn layout(&self) -> &TouchLayout {
        &self.layout
    }

    /// Swap the layout after a resize. Active touches keep their buttons
    /// until they move.
    pub fn set_layout(&mut self, layout: TouchLayout) {
        self.layout = layout;
    }

    pub fn touch_start(&mut self, id: u64, x: f32, y: f32) {
        self.touch_move(id, x, y);
    }

    pub fn touch_move(&mut self, id: u64, x: f32, y: f32) {
        match self.layout.button_at(x, y) {
            Some(button) => {
                self.touches.insert(id, button);
            }
            None => {
                self.touches.remove(&id);
            }
        }
    }

    pub fn touch_end(&mut self, id: u64) {
        self.touches.remove(&id);
    }

    /// Replace all touches with the given `(id, x, y)` points, for front-ends
    /// that poll the current touch points each frame.
    pub fn set_points(&mut self, points: impl IntoIterator<Item = (u64, f32, f32)>) {
        self.touches.clear();
        for (id, x, y) in points {
            self.touch_move(id, x, y);
        }
    }

    fn held(&self, button: TouchButton) -> bool {
        self.touches.values().any(|b| *b == button)
    }
}

impl InputSource for TouchSource {
    fn sample(&mut self) -> ControlSample {
        ControlSample {
            left: self.held(TouchButton::Left),
            right: self.held(TouchButton::Right),
            jump: self.held(TouchButton::Jump),
            run: self.held(TouchButton::Run),
        }
    }
}
