//! Player movement system.
//!
//! Runs once per fixed tick and turns the tick's
//! [`InputSnapshot`](crate::resources::input::InputSnapshot) into a new
//! position and velocity. Order within a tick:
//!
//! 1. Start a jump on a fresh jump press while grounded
//! 2. Gravity, vertical integration and the ground clamp
//! 3. Horizontal easing towards the target speed, friction without input
//! 4. Facing from the resulting velocity
//! 5. Keep the hitbox inside the viewport
//!
//! All steps are plain arithmetic on the components, so the same inputs
//! always reproduce the same trajectory.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::inputcontrolled::PlayerController;
use crate::components::mapposition::MapPosition;
use crate::components::player::{Facing, Player};
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::resources::gamestate::GameState;
use crate::resources::input::{InputSnapshot, InputState};
use crate::resources::viewport::Viewport;

/// Advance every input-controlled body by one tick.
pub fn player_movement(
    mut query: Query<(
        &mut MapPosition,
        &mut RigidBody,
        &mut Player,
        &PlayerController,
        &BoxCollider,
        &Sprite,
    )>,
    input: Res<InputState>,
    state: Res<GameState>,
    viewport: Res<Viewport>,
) {
    let snapshot = input.snapshot();
    for (mut position, mut body, mut player, controller, collider, sprite) in query.iter_mut() {
        player.running = snapshot.running;
        try_jump(&mut body, &mut player, controller, snapshot.jump_edge);
        apply_gravity(&mut position, &mut body, &mut player, state.ground_y, sprite.height);
        apply_horizontal(&mut position, &mut body, controller, &snapshot);
        player.facing = Facing::from_velocity(body.vx, controller.facing_deadzone, player.facing);
        let hitbox = collider.aabb(*position, sprite.width, player.facing);
        clamp_to_viewport(&mut position, &mut body, hitbox.x, hitbox.w, viewport.width);
    }
}

/// Start a jump if jump was just pressed and the player is grounded.
///
/// Returns true if the impulse was applied.
pub fn try_jump(
    body: &mut RigidBody,
    player: &mut Player,
    controller: &PlayerController,
    jump_edge: bool,
) -> bool {
    if !jump_edge || player.jumping {
        return false;
    }
    body.vy = -controller.jump_impulse;
    player.jumping = true;
    true
}

/// Apply gravity, move vertically and stand the body on the ground line.
pub fn apply_gravity(
    position: &mut MapPosition,
    body: &mut RigidBody,
    player: &mut Player,
    ground_y: f32,
    sprite_height: f32,
) {
    body.vy += body.gravity;
    position.y += body.vy;

    let floor = ground_y - sprite_height;
    if position.y >= floor {
        position.y = floor;
        body.land();
        player.jumping = false;
    }
}

/// Ease horizontal velocity towards the input's target speed and move.
pub fn apply_horizontal(
    position: &mut MapPosition,
    body: &mut RigidBody,
    controller: &PlayerController,
    input: &InputSnapshot,
) {
    let mut target = 0.0;
    if input.left {
        target = -controller.max_speed;
    }
    if input.right {
        target = controller.max_speed;
    }
    if input.running {
        target *= controller.run_multiplier;
    }

    body.vx += (target - body.vx) * controller.accel;

    if !input.left && !input.right {
        body.vx *= 1.0 - controller.friction;
    }

    position.x += body.vx;
}

/// Push the body back so its hitbox (left edge `hitbox_x`, width
/// `hitbox_width`) stays within `[0, viewport_width]`. Hitting an edge stops
/// horizontal motion.
pub fn clamp_to_viewport(
    position: &mut MapPosition,
    body: &mut RigidBody,
    hitbox_x: f32,
    hitbox_width: f32,
    viewport_width: f32,
) {
    if hitbox_x < 0.0 {
        position.x -= hitbox_x;
        body.stop_horizontal();
    }
    if hitbox_x + hitbox_width > viewport_width {
        position.x -= hitbox_x + hitbox_width - viewport_width;
        body.stop_horizontal();
    }
}
