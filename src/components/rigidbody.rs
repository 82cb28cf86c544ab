//! Kinematic body component.
//!
//! The [`RigidBody`] stores the per-tick velocity of an entity and the
//! constant downward acceleration applied to it. Units are world units per
//! tick (and per tick squared for gravity), tuned for the 60 Hz reference
//! tick rate of the fixed-step loop.

use bevy_ecs::prelude::Component;

/// Kinematic body storing velocity and gravity.
///
/// Intended to be updated by the movement system, which integrates
/// [`MapPosition`](super::mapposition::MapPosition) from it once per tick.
///
/// # Fields
/// - `vx` - Horizontal velocity in units per tick
/// - `vy` - Vertical velocity in units per tick, positive is down
/// - `gravity` - Added to `vy` every tick
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct RigidBody {
    pub vx: f32,
    pub vy: f32,
    pub gravity: f32,
}

impl RigidBody {
    /// Create a body at rest with the given gravity.
    pub fn new(gravity: f32) -> Self {
        Self {
            vx: 0.0,
            vy: 0.0,
            gravity,
        }
    }

    /// Set the velocity of the body.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.vx = vx;
        self.vy = vy;
        self
    }

    /// Stop all vertical motion.
    pub fn land(&mut self) {
        self.vy = 0.0;
    }

    /// Stop all horizontal motion.
    pub fn stop_horizontal(&mut self) {
        self.vx = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_at_rest() {
        let rb = RigidBody::new(1.0);
        assert_eq!(rb.vx, 0.0);
        assert_eq!(rb.vy, 0.0);
        assert_eq!(rb.gravity, 1.0);
    }

    #[test]
    fn test_land_and_stop() {
        let mut rb = RigidBody::new(1.0).with_velocity(3.0, -7.0);
        rb.land();
        assert_eq!(rb.vy, 0.0);
        assert_eq!(rb.vx, 3.0);
        rb.stop_horizontal();
        assert_eq!(rb.vx, 0.0);
    }
}
