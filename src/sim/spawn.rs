//! Item spawner
//!
//! One item per spawn interval, dropped by a randomly chosen chicken.

use rand::Rng;

use super::state::{FallingItem, GameEvent, GameState, PowerupKind};
use crate::consts::SPAWN_DROP;

/// Accumulate `dt` into the spawn timer and drop an item once the interval
/// is reached. The timer restarts from zero rather than carrying the
/// overshoot, so a long stall yields a single item, not a burst.
pub fn update_spawner(state: &mut GameState, dt: f32) {
    state.spawn_timer += dt;
    if state.spawn_timer >= state.tuning.spawn_interval {
        spawn_item(state);
        state.spawn_timer = 0.0;
    }
}

/// Drop one item below a random chicken
pub fn spawn_item(state: &mut GameState) {
    if state.chickens.is_empty() {
        return;
    }

    let source = state.rng.random_range(0..state.chickens.len());
    let pos = state.chickens[source].pos;

    let roll = state.rng.random_range(0..100u32);
    let kind = state.tuning.spawn_table.pick(roll);

    // Slow motion at spawn time is baked into the item's own speed
    let multiplier = if state.powerups.is_active(PowerupKind::SlowMotion) {
        state.tuning.slow_factor
    } else {
        1.0
    };
    let jitter = state.rng.random::<f32>() * state.tuning.item_speed_jitter;
    let speed = (state.tuning.item_base_speed + jitter) * multiplier;

    let id = state.next_entity_id();
    state.items.push(FallingItem {
        id,
        pos: pos - glam::Vec2::new(0.0, SPAWN_DROP),
        kind,
        speed,
        active: true,
    });
    state.events.push(GameEvent::ItemSpawned { kind });
    log::trace!("Spawned {:?} at ({:.0}, {:.0}) speed {:.2}", kind, pos.x, pos.y - SPAWN_DROP, speed);
}
