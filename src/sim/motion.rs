//! Per-tick motion of chickens and falling items
//!
//! Speeds are in field units per tick, not per second: the driver runs at a
//! fixed cadence and motion is stepped once per tick.

use super::state::{Chicken, FallingItem};
use crate::consts::{CHICKEN_INSET, FIELD_WIDTH};

/// Walk every chicken one step. A chicken that ends up at or past the inset
/// turns around; it is not pulled back inside, so it may overshoot the bound
/// by up to one step.
pub fn move_chickens(chickens: &mut [Chicken]) {
    for chicken in chickens {
        chicken.pos.x += chicken.speed * chicken.direction;
        if chicken.pos.x <= CHICKEN_INSET || chicken.pos.x >= FIELD_WIDTH - CHICKEN_INSET {
            chicken.direction = -chicken.direction;
        }
    }
}

/// Drop every item by its own speed times the global multiplier
pub fn fall_items(items: &mut [FallingItem], multiplier: f32) {
    for item in items {
        item.pos.y -= item.speed * multiplier;
    }
}
