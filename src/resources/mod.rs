//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `animationstore` – player clip definitions and sprite sheet readiness
//! - `coinspawner` – wall-clock spawn timer and coin placement RNG
//! - `gameconfig` – INI-backed configuration and tuning
//! - `gamestate` – active coins, score, ground line and coin spin
//! - `input` – per-tick normalized control state with edge tracking
//! - `viewport` – current play area size
//! - `worldtime` – frame time and the fixed-timestep accumulator
pub mod animationstore;
pub mod coinspawner;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod viewport;
pub mod worldtime;
