//! Per-frame simulation tick
//!
//! The driver calls [`tick`] once per frame with the measured elapsed time.
//! Nothing happens outside Playing.

use super::collision::resolve_items;
use super::control::end_round;
use super::motion::{fall_items, move_chickens};
use super::powerup::update_powerups;
use super::spawn::update_spawner;
use super::state::{GamePhase, GameState};
use crate::consts::ITEM_HALF_HEIGHT;

/// Continuous input folded into the next tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Target basket x (from mouse position)
    pub basket_target: Option<f32>,
    /// Idle/demo mode - the computer steers the basket
    pub idle_mode: bool,
}

/// Advance the game state by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    if state.phase != GamePhase::Playing {
        return;
    }

    let dt = dt.max(0.0);
    state.time_ticks += 1;

    if let Some(target) = input.basket_target {
        state.set_basket_x(target);
    }
    if input.idle_mode {
        steer_basket(state);
    }

    // Countdown first: once the clock is out, nothing else moves
    state.remaining_time = (state.remaining_time - dt).max(0.0);
    if state.remaining_time <= 0.0 {
        end_round(state);
        return;
    }

    update_spawner(state, dt);

    move_chickens(&mut state.chickens);
    let multiplier = state.speed_multiplier();
    fall_items(&mut state.items, multiplier);

    resolve_items(state);

    update_powerups(state, dt);

    // The width may have changed this tick
    state.clamp_basket();
}

/// Where the autopilot wants the basket to be, if anywhere
fn autopilot_target(state: &GameState) -> Option<f32> {
    let width = state.basket_width();
    let basket = &state.basket;
    let catchable = |pos_y: f32| pos_y - ITEM_HALF_HEIGHT >= basket.bottom();

    // Lowest good item that can still be caught
    let good = state
        .items
        .iter()
        .filter(|item| !item.kind.is_hazard() && catchable(item.pos.y))
        .min_by(|a, b| a.pos.y.total_cmp(&b.pos.y));
    if let Some(item) = good {
        return Some(item.pos.x);
    }

    // Nothing worth catching: step out from under the lowest poop
    state
        .items
        .iter()
        .filter(|item| item.kind.is_hazard() && catchable(item.pos.y))
        .filter(|item| (item.pos.x - basket.x).abs() <= width / 2.0)
        .min_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|poop| {
            if poop.pos.x >= basket.x {
                poop.pos.x - width
            } else {
                poop.pos.x + width
            }
        })
}

/// Move the basket toward the autopilot target at keyboard speed
fn steer_basket(state: &mut GameState) {
    if let Some(target) = autopilot_target(state) {
        let speed = state.basket.speed;
        let step = (target - state.basket.x).clamp(-speed, speed);
        state.set_basket_x(state.basket.x + step);
    }
}
