//! Coin collection event and its default observer.
//!
//! The collision system triggers one [`CoinCollectedEvent`] per coin removed
//! from [`GameState`](crate::resources::gamestate::GameState). Observers can
//! subscribe to react in a decoupled manner (sound, particles, HUD updates).
//! Score bookkeeping already happened by the time the event fires.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::resources::gamestate::Coin;

/// Fired after the player's hitbox collected a coin.
#[derive(Event, Debug, Clone, Copy)]
pub struct CoinCollectedEvent {
    /// The coin as it was when collected.
    pub coin: Coin,
    /// Score after this coin was counted.
    pub score: u32,
}

/// Global observer that logs each collected coin.
pub fn observe_coin_collected(trigger: On<CoinCollectedEvent>) {
    let event = trigger.event();
    log::debug!(
        "Coin collected at ({:.1}, {:.1}), score {}",
        event.coin.x,
        event.coin.y,
        event.score
    );
}
