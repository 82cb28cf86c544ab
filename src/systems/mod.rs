//! Game systems.
//!
//! This module groups all ECS systems that advance the simulation. Frame
//! systems run once per display frame; tick systems run once per fixed tick
//! (see [`crate::game::Simulation`] for the schedules).
//!
//! Submodules overview
//! - [`animation`] – select the player clip, advance frames, spin coins
//! - [`coinspawner`] – spawn coins on a wall-clock interval
//! - [`collision`] – collect coins overlapping the player hitbox
//! - [`gamestate`] – keep the ground line in step with the viewport
//! - [`input`] – turn the frame's control sample into edges and consume them
//! - [`movement`] – jump, gravity, horizontal easing and screen clamping
//! - [`time`] – update frame time and count ticks

pub mod animation;
pub mod coinspawner;
pub mod collision;
pub mod gamestate;
pub mod input;
pub mod movement;
pub mod time;
