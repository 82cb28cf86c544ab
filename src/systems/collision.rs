//! Coin collision system.
//!
//! Runs once per tick after movement. Tests the player's hitbox (not the full
//! sprite rectangle) against every active coin, removes the coins it
//! overlaps, adds them to the score and triggers a
//! [`CoinCollectedEvent`](crate::events::collision::CoinCollectedEvent) for
//! each. Every overlapping coin is collected in the same tick.

use bevy_ecs::prelude::*;
use smallvec::SmallVec;

use crate::components::boxcollider::{Aabb, BoxCollider};
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::events::collision::CoinCollectedEvent;
use crate::resources::gamestate::{Coin, GameState};

/// Remove and return every coin overlapping `hitbox`, keeping the order of
/// the remaining coins.
///
/// Collected coins are gone from `coins`, so calling this again with the same
/// hitbox returns nothing.
pub fn collect_coins(hitbox: &Aabb, coins: &mut Vec<Coin>) -> SmallVec<[Coin; 4]> {
    let mut collected = SmallVec::new();
    coins.retain(|coin| {
        if hitbox.overlaps(&coin.aabb()) {
            collected.push(*coin);
            false
        } else {
            true
        }
    });
    collected
}

pub fn coin_collision(
    query: Query<(&MapPosition, &BoxCollider, &Sprite, &Player)>,
    mut state: ResMut<GameState>,
    mut commands: Commands,
) {
    for (position, collider, sprite, player) in query.iter() {
        let hitbox = collider.aabb(*position, sprite.width, player.facing);
        let collected = collect_coins(&hitbox, &mut state.coins);
        for coin in collected {
            state.add_score(1);
            commands.trigger(CoinCollectedEvent {
                coin,
                score: state.score(),
            });
        }
    }
}
