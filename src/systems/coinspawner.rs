//! Coin spawner system.
//!
//! Runs once per display frame, not per tick: the
//! [`CoinSpawner`](crate::resources::coinspawner::CoinSpawner) timer consumes
//! wall-clock frame time from [`WorldTime`] and an elapsed interval appends
//! one coin to [`GameState`]. A stalled frame yields a single coin, not a
//! burst.

use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::coinspawner::CoinSpawner;
use crate::resources::gamestate::{Coin, GameState};
use crate::resources::viewport::Viewport;
use crate::resources::worldtime::WorldTime;

/// Append one coin unless the active cap is reached.
pub fn spawn_coin(
    spawner: &mut CoinSpawner,
    state: &mut GameState,
    viewport_width: f32,
) -> Option<Coin> {
    if !spawner.has_room(state.coins.len()) {
        debug!(
            "Coin spawn skipped, {} coins already active",
            state.coins.len()
        );
        return None;
    }
    let coin = spawner.roll_coin(viewport_width, state.ground_y);
    state.coins.push(coin);
    debug!(
        "Spawned coin at ({:.1}, {:.1}), {} active",
        coin.x,
        coin.y,
        state.coins.len()
    );
    Some(coin)
}

pub fn coin_spawner(
    time: Res<WorldTime>,
    mut spawner: ResMut<CoinSpawner>,
    mut state: ResMut<GameState>,
    viewport: Res<Viewport>,
) {
    if spawner.tick(time.delta) {
        spawn_coin(&mut spawner, &mut state, viewport.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::gameconfig::CoinTuning;

    fn spawner(max_active: Option<usize>) -> CoinSpawner {
        CoinSpawner::new(&CoinTuning {
            seed: Some(3),
            max_active,
            ..CoinTuning::default()
        })
    }

    #[test]
    fn test_spawn_coin_appends_exactly_one() {
        let mut spawner = spawner(None);
        let mut state = GameState::new(720.0, 64.0);
        let coin = spawn_coin(&mut spawner, &mut state, 1280.0).unwrap();
        assert_eq!(state.coins, vec![coin]);
        assert!(coin.y >= state.ground_y - 150.0 && coin.y <= state.ground_y - 50.0);
        assert!(coin.x >= 0.0 && coin.x <= 1280.0 - 32.0);
    }

    #[test]
    fn test_spawn_coin_respects_cap() {
        let mut spawner = spawner(Some(2));
        let mut state = GameState::new(720.0, 64.0);
        assert!(spawn_coin(&mut spawner, &mut state, 1280.0).is_some());
        assert!(spawn_coin(&mut spawner, &mut state, 1280.0).is_some());
        assert!(spawn_coin(&mut spawner, &mut state, 1280.0).is_none());
        assert_eq!(state.coins.len(), 2);
    }

    #[test]
    fn test_system_spawns_on_wall_clock_interval() {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta: 2.5,
            ..WorldTime::default()
        });
        world.insert_resource(spawner(None));
        world.insert_resource(GameState::new(720.0, 64.0));
        world.insert_resource(Viewport::new(1280.0, 720.0));

        let mut schedule = Schedule::default();
        schedule.add_systems(coin_spawner);

        schedule.run(&mut world);
        assert!(world.resource::<GameState>().coins.is_empty());
        schedule.run(&mut world);
        assert_eq!(world.resource::<GameState>().coins.len(), 1);
        schedule.run(&mut world);
        schedule.run(&mut world);
        assert_eq!(world.resource::<GameState>().coins.len(), 2);
    }
}
