//! Coin Runner library.
//!
//! The simulation core of a 2D side-scroller: a player that walks, runs and
//! jumps over a ground line while collecting coins that spawn on a timer.
//! Components, resources, systems and events run on `bevy_ecs`;
//! [`game::Simulation`] drives them and hands out [`snapshot::RenderSnapshot`]s
//! for whatever front-end draws the game.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod input;
pub mod resources;
pub mod snapshot;
pub mod systems;
#[cfg(feature = "window")]
pub mod window;
