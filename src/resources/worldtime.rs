//! Simulation clock resources.
//!
//! [`WorldTime`] tracks wall-clock frame time as reported by the front-end.
//! [`FixedTimestep`] converts that time into a whole number of fixed-length
//! simulation ticks so physics tuned for the 60 Hz reference rate behaves the
//! same on any display refresh rate.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    /// Seconds of the current display frame.
    pub delta: f32,
    /// Fixed simulation ticks run so far.
    pub tick_count: u64,
}

/// Ticks to run for one display frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPlan {
    pub ticks: u32,
    /// Seconds of backlog thrown away because the per-frame cap was hit.
    pub dropped: f32,
}

/// Fixed-timestep accumulator.
#[derive(Resource, Clone, Copy, Debug)]
pub struct FixedTimestep {
    /// Length of one tick in seconds.
    pub step: f32,
    /// Unsimulated time carried to the next frame, always below `step`.
    pub accumulator: f32,
    /// Cap on ticks per frame so a long stall cannot snowball.
    pub max_steps: u32,
}

impl FixedTimestep {
    pub fn new(tick_rate: u32, max_steps: u32) -> Self {
        Self {
            step: 1.0 / tick_rate.max(1) as f32,
            accumulator: 0.0,
            max_steps: max_steps.max(1),
        }
    }

    /// Add a frame's worth of time and take out the whole ticks it covers.
    ///
    /// Negative or non-finite frame times count as zero.
    pub fn plan(&mut self, dt: f32) -> StepPlan {
        if dt.is_finite() && dt > 0.0 {
            self.accumulator += dt;
        }

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_steps {
            self.accumulator -= self.step;
            ticks += 1;
        }

        let mut dropped = 0.0;
        if self.accumulator >= self.step {
            dropped = self.accumulator;
            self.accumulator = 0.0;
        }

        StepPlan { ticks, dropped }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_step_runs_one_tick() {
        let mut ts = FixedTimestep::new(60, 5);
        let plan = ts.plan(1.0 / 60.0);
        assert_eq!(plan.ticks, 1);
        assert_eq!(plan.dropped, 0.0);
        assert_eq!(ts.accumulator, 0.0);
    }

    #[test]
    fn test_high_refresh_rate_accumulates() {
        // 120 Hz display, 60 Hz simulation: one tick every other frame.
        let mut ts = FixedTimestep::new(60, 5);
        let ticks: u32 = (0..120).map(|_| ts.plan(1.0 / 120.0).ticks).sum();
        assert!((59..=60).contains(&ticks));
    }

    #[test]
    fn test_low_refresh_rate_runs_several_ticks() {
        let mut ts = FixedTimestep::new(60, 5);
        let plan = ts.plan(1.0 / 30.0 + 1e-4);
        assert_eq!(plan.ticks, 2);
    }

    #[test]
    fn test_backlog_over_cap_is_dropped() {
        let mut ts = FixedTimestep::new(60, 5);
        let plan = ts.plan(1.0);
        assert_eq!(plan.ticks, 5);
        assert!(plan.dropped > 0.0);
        assert_eq!(ts.accumulator, 0.0);
    }

    #[test]
    fn test_bad_frame_times_are_ignored() {
        let mut ts = FixedTimestep::new(60, 5);
        assert_eq!(ts.plan(-1.0).ticks, 0);
        assert_eq!(ts.plan(f32::NAN).ticks, 0);
        assert_eq!(ts.plan(f32::INFINITY).ticks, 0);
        assert_eq!(ts.accumulator, 0.0);
    }

    #[test]
    fn test_zero_rate_and_cap_are_clamped() {
        let ts = FixedTimestep::new(0, 0);
        assert_eq!(ts.step, 1.0);
        assert_eq!(ts.max_steps, 1);
    }
}
