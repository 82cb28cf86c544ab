//! Event types and observers used by the game.
//!
//! Events provide a decoupled way for systems to announce what happened
//! without knowing who listens.
//!
//! Submodules:
//! - [`collision`] – coin collection notifications emitted by the collision system
pub mod collision;
