//! Keeps the ground line in step with the viewport.
use bevy_ecs::prelude::*;

use crate::resources::gamestate::GameState;
use crate::resources::viewport::Viewport;

/// Recompute the ground line from the current viewport height.
pub fn update_ground_level(viewport: Res<Viewport>, mut state: ResMut<GameState>) {
    let ground_y = viewport.height - state.ground_thickness;
    if state.ground_y != ground_y {
        state.refresh_ground(viewport.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_tracks_resize() {
        let mut world = World::new();
        world.insert_resource(Viewport::new(800.0, 600.0));
        world.insert_resource(GameState::new(600.0, 64.0));

        let mut schedule = Schedule::default();
        schedule.add_systems(update_ground_level);
        schedule.run(&mut world);
        assert_eq!(world.resource::<GameState>().ground_y, 536.0);

        world.resource_mut::<Viewport>().height = 400.0;
        schedule.run(&mut world);
        assert_eq!(world.resource::<GameState>().ground_y, 336.0);
    }
}
