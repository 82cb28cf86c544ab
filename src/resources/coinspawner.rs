//! Coin spawner resource.
//!
//! A wall-clock interval timer plus the random source used to place coins.
//! The timer is driven by frame time, not by simulation ticks, so the spawn
//! rate does not depend on the tick rate.

use bevy_ecs::prelude::Resource;

use crate::resources::gameconfig::CoinTuning;
use crate::resources::gamestate::Coin;

#[derive(Resource, Debug)]
pub struct CoinSpawner {
    /// Seconds between spawns.
    pub interval: f32,
    /// Seconds since the last spawn.
    pub elapsed: f32,
    pub coin_size: f32,
    /// Spawn band above the ground line.
    pub min_height: f32,
    pub max_height: f32,
    /// Skip spawns while this many coins are active. `None` never skips.
    pub max_active: Option<usize>,
    rng: fastrand::Rng,
}

impl CoinSpawner {
    pub fn new(tuning: &CoinTuning) -> Self {
        let rng = match tuning.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self {
            interval: tuning.spawn_interval_ms as f32 / 1000.0,
            elapsed: 0.0,
            coin_size: tuning.size,
            min_height: tuning.min_height,
            max_height: tuning.max_height,
            max_active: tuning.max_active,
            rng,
        }
    }

    /// Advance the timer by `dt` seconds and report whether a spawn is due.
    ///
    /// At most one spawn fires per call. Whole intervals missed during a
    /// long frame are dropped, keeping only the remainder.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !(dt.is_finite() && dt > 0.0) || self.interval <= 0.0 {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed < self.interval {
            return false;
        }
        self.elapsed %= self.interval;
        true
    }

    /// Place one coin for a viewport of `viewport_width` with ground at
    /// `ground_y`.
    ///
    /// x is uniform in `[0, viewport_width - size)` and the coin's top sits
    /// between `min_height` and `max_height` above the ground line.
    pub fn roll_coin(&mut self, viewport_width: f32, ground_y: f32) -> Coin {
        let span_x = (viewport_width - self.coin_size).max(0.0);
        let x = self.rng.f32() * span_x;
        let offset = self.rng.f32() * (self.max_height - self.min_height) + self.min_height;
        Coin::new(x, ground_y - offset, self.coin_size)
    }

    /// Whether another coin fits under the active cap.
    pub fn has_room(&self, active: usize) -> bool {
        self.max_active.is_none_or(|max| active < max)
    }
}
