//! Basket/item collision and scoring
//!
//! Items are resolved once per tick, after motion: an item is either caught,
//! lost off the bottom of the field, or left alone. Catching is checked
//! first, so an item can never be both.

use glam::Vec2;

use super::state::{Basket, GameEvent, GameState, ItemEffect, ItemKind, PowerupKind};
use crate::consts::{EXIT_Y, ITEM_HALF_HEIGHT};

/// Outcome of resolving a single item this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Survives,
    Caught,
    Exited,
}

/// True if an item centered at `pos` lands in the basket.
///
/// The item's bottom edge has to be inside the basket's vertical span and its
/// center inside the horizontal span; both ranges are inclusive.
pub fn item_hits_basket(pos: Vec2, basket: &Basket, width: f32) -> bool {
    let item_bottom = pos.y - ITEM_HALF_HEIGHT;
    item_bottom <= basket.top()
        && item_bottom >= basket.bottom()
        && pos.x >= basket.left(width)
        && pos.x <= basket.right(width)
}

/// Classify an item against the basket and the bottom edge
pub fn classify(pos: Vec2, basket: &Basket, width: f32) -> Resolution {
    if item_hits_basket(pos, basket, width) {
        Resolution::Caught
    } else if pos.y < EXIT_Y {
        Resolution::Exited
    } else {
        Resolution::Survives
    }
}

/// Apply a caught item's effect. Returns the score change actually applied.
pub fn apply_catch(state: &mut GameState, kind: ItemKind) -> i64 {
    match kind.effect() {
        ItemEffect::Points(points) => {
            let before = state.score;
            state.score = if points >= 0 {
                state.score.saturating_add(points as u64)
            } else {
                state.score.saturating_sub(points.unsigned_abs())
            };
            state.score as i64 - before as i64
        }
        ItemEffect::EnlargeBasket => {
            state
                .powerups
                .activate(PowerupKind::EnlargeBasket, state.tuning.powerup_secs);
            log::debug!("Basket enlarged for {}s", state.tuning.powerup_secs);
            0
        }
        ItemEffect::SlowMotion => {
            state
                .powerups
                .activate(PowerupKind::SlowMotion, state.tuning.powerup_secs);
            log::debug!("Slow motion for {}s", state.tuning.powerup_secs);
            0
        }
        ItemEffect::ExtraTime => {
            state.remaining_time += state.tuning.extra_time_secs;
            0
        }
    }
}

/// Resolve every item in flight: score the caught ones, drop the lost ones.
///
/// Effects apply as soon as an item is caught, so an EnlargeBasket widens the
/// basket for the items resolved after it in the same pass.
pub fn resolve_items(state: &mut GameState) {
    for i in 0..state.items.len() {
        let (pos, kind) = (state.items[i].pos, state.items[i].kind);
        match classify(pos, &state.basket, state.basket_width()) {
            Resolution::Survives => {}
            Resolution::Caught => {
                state.items[i].active = false;
                let score_delta = apply_catch(state, kind);
                state.events.push(GameEvent::ItemCaught { kind, score_delta });
            }
            Resolution::Exited => {
                state.items[i].active = false;
                state.events.push(GameEvent::ItemMissed { kind });
            }
        }
    }
    state.items.retain(|item| item.active);
}
