use bevy_ecs::prelude::Component;

/// Size of the drawn sprite rectangle in world units.
///
/// The position of the rectangle is the entity's
/// [`MapPosition`](super::mapposition::MapPosition); which sprite sheet and
/// frame gets drawn is decided by the
/// [`Animation`](super::animation::Animation) component.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
