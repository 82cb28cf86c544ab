use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::components::mapposition::MapPosition;
use crate::components::player::Facing;

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap test. Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// True if `other` lies inside `self`, edges included.
    pub fn contains(&self, other: &Aabb) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Collision rectangle placed inside the sprite rectangle.
///
/// The offsets are measured from the sprite's top-left corner while the
/// entity faces right. Facing left mirrors the box horizontally so it stays
/// on the same part of the flipped sprite.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub width: f32,
    pub height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl BoxCollider {
    /// Create a BoxCollider with given size and no offset
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Modify BoxCollider with given offset
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_offset(mut self, offset_x: f32, offset_y: f32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    /// Hitbox sized as a fraction of the sprite, standing on the sprite's
    /// bottom edge and shifted a sixth of the free width towards the back.
    ///
    /// Ratios outside `(0, 1]` are clamped so the box always fits the sprite.
    pub fn from_sprite_ratios(
        sprite_width: f32,
        sprite_height: f32,
        width_ratio: f32,
        height_ratio: f32,
    ) -> Self {
        let width = sprite_width * width_ratio.clamp(f32::EPSILON, 1.0);
        let height = sprite_height * height_ratio.clamp(f32::EPSILON, 1.0);
        Self {
            width,
            height,
            offset_x: (sprite_width - width) / 6.0,
            offset_y: sprite_height - height,
        }
    }

    /// Whether the box lies fully inside a sprite of the given size.
    pub fn fits_within(&self, sprite_width: f32, sprite_height: f32) -> bool {
        self.offset_x >= 0.0
            && self.offset_y >= 0.0
            && self.offset_x + self.width <= sprite_width
            && self.offset_y + self.height <= sprite_height
    }

    /// World-space hitbox for an entity at `position`.
    pub fn aabb(&self, position: MapPosition, sprite_width: f32, facing: Facing) -> Aabb {
        let x = match facing {
            Facing::Right => position.x + self.offset_x,
            Facing::Left => position.x + (sprite_width - self.offset_x - self.width),
        };
        Aabb::new(x, position.y + self.offset_y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_is_strict() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let touching = Aabb::new(10.0, 0.0, 10.0, 10.0);
        let below = Aabb::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&touching));
        assert!(!a.overlaps(&below));
        assert!(a.overlaps(&Aabb::new(9.9, 9.9, 1.0, 1.0)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Aabb::new(90.0, 90.0, 20.0, 20.0);
        let b = Aabb::new(100.0, 100.0, 32.0, 32.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_contains_includes_edges() {
        let outer = Aabb::new(0.0, 0.0, 128.0, 128.0);
        assert!(outer.contains(&Aabb::new(0.0, 64.0, 128.0, 64.0)));
        assert!(!outer.contains(&Aabb::new(-1.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_from_sprite_ratios_matches_player_defaults() {
        let c = BoxCollider::from_sprite_ratios(128.0, 128.0, 0.3, 0.5);
        assert!((c.width - 38.4).abs() < 1e-4);
        assert_eq!(c.height, 64.0);
        assert!((c.offset_x - (128.0 - 38.4) / 6.0).abs() < 1e-4);
        assert_eq!(c.offset_y, 64.0);
        assert!(c.fits_within(128.0, 128.0));
    }

    #[test]
    fn test_from_sprite_ratios_clamps_oversized_ratios() {
        let c = BoxCollider::from_sprite_ratios(100.0, 50.0, 1.5, 2.0);
        assert_eq!(c.width, 100.0);
        assert_eq!(c.height, 50.0);
        assert!(c.fits_within(100.0, 50.0));
    }

    #[test]
    fn test_aabb_mirrors_with_facing() {
        let c = BoxCollider::new(20.0, 40.0).with_offset(10.0, 60.0);
        let pos = MapPosition::new(100.0, 0.0);

        let right = c.aabb(pos, 100.0, Facing::Right);
        assert_eq!(right, Aabb::new(110.0, 60.0, 20.0, 40.0));

        let left = c.aabb(pos, 100.0, Facing::Left);
        // 100 + (100 - 10 - 20)
        assert_eq!(left, Aabb::new(170.0, 60.0, 20.0, 40.0));
    }

    #[test]
    fn test_hitbox_inside_sprite_for_both_facings() {
        let c = BoxCollider::from_sprite_ratios(128.0, 128.0, 0.3, 0.5);
        let pos = MapPosition::new(50.0, 200.0);
        let sprite = Aabb::new(pos.x, pos.y, 128.0, 128.0);
        assert!(sprite.contains(&c.aabb(pos, 128.0, Facing::Right)));
        assert!(sprite.contains(&c.aabb(pos, 128.0, Facing::Left)));
    }
}
