//! Time update systems.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per display frame and counts fixed ticks.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Record the frame delta on the `WorldTime` resource.
///
/// Non-finite or negative deltas count as zero.
pub fn update_world_time(world: &mut World, dt: f32) {
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    world.resource_mut::<WorldTime>().delta = dt;
}

/// Count one fixed tick.
pub fn count_tick(mut time: ResMut<WorldTime>) {
    time.tick_count += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_world_time_records_delta() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        update_world_time(&mut world, 0.2);
        assert!((world.resource::<WorldTime>().delta - 0.2).abs() < 1e-6);
        update_world_time(&mut world, 0.05);
        assert!((world.resource::<WorldTime>().delta - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_update_world_time_ignores_bad_delta() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        update_world_time(&mut world, f32::NAN);
        assert_eq!(world.resource::<WorldTime>().delta, 0.0);
        update_world_time(&mut world, -1.0);
        assert_eq!(world.resource::<WorldTime>().delta, 0.0);
    }

    #[test]
    fn test_count_tick() {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        let mut schedule = Schedule::default();
        schedule.add_systems(count_tick);
        schedule.run(&mut world);
        schedule.run(&mut world);
        assert_eq!(world.resource::<WorldTime>().tick_count, 2);
    }
}
