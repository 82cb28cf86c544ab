//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world. The player is the only entity; coins are plain data owned
//! by [`GameState`](crate::resources::gamestate::GameState).
//!
//! Submodules overview:
//! - [`animation`] – clip identifiers and per-entity playback state
//! - [`boxcollider`] – hitbox placed inside the sprite plus the shared [`boxcollider::Aabb`]
//! - [`inputcontrolled`] – movement tuning for input-driven entities
//! - [`mapposition`] – world-space position of the sprite's top-left corner
//! - [`player`] – player flags and facing
//! - [`rigidbody`] – per-tick velocity and gravity
//! - [`sprite`] – size of the drawn sprite rectangle

pub mod animation;
pub mod boxcollider;
pub mod inputcontrolled;
pub mod mapposition;
pub mod player;
pub mod rigidbody;
pub mod sprite;
