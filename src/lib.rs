//! Catch The Eggs - a single-screen basket-and-chicken arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, scoring, powerups)
//! - `platform`: Terminal/native collaborators (frame clock, input mapping, render sink)
//! - `settings`: Driver preferences loaded from JSON
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{ConfigError, Settings};
pub use tuning::{SpawnTable, Tuning, TuningError};

/// Play-field geometry. The field uses a y-up coordinate system with the
/// origin at the bottom-left corner.
pub mod consts {
    /// Target driver cadence (~60 Hz)
    pub const TARGET_DT: f32 = 0.016;

    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Basket rests on a fixed row near the bottom of the field
    pub const BASKET_Y: f32 = 50.0;
    pub const BASKET_HEIGHT: f32 = 20.0;

    /// Chickens walk along the bamboo stick this far below the top edge
    pub const CHICKEN_ROW_OFFSET: f32 = 80.0;
    /// Chickens turn around once they come this close to a side edge
    pub const CHICKEN_INSET: f32 = 70.0;

    /// Items drop this far below the chicken that laid them
    pub const SPAWN_DROP: f32 = 20.0;
    /// Distance from an item's center to its bottom edge
    pub const ITEM_HALF_HEIGHT: f32 = 12.0;
    /// Items below this line have left the field
    pub const EXIT_Y: f32 = -20.0;
}

/// Clamp a basket center so the whole basket stays inside the field.
#[inline]
pub fn clamp_basket_x(x: f32, width: f32) -> f32 {
    let half = width / 2.0;
    x.clamp(half, (consts::FIELD_WIDTH - half).max(half))
}

/// Hash a base seed and run counter into a fresh run seed.
#[inline]
pub fn mix_seed(seed: u64, run: u64) -> u64 {
    seed.wrapping_add(run.wrapping_mul(2654435761))
        .rotate_left(17)
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_basket_x() {
        assert_eq!(clamp_basket_x(-50.0, 80.0), 40.0);
        assert_eq!(clamp_basket_x(900.0, 80.0), 760.0);
        assert_eq!(clamp_basket_x(400.0, 120.0), 400.0);
        assert_eq!(clamp_basket_x(790.0, 120.0), 740.0);
    }

    #[test]
    fn test_mix_seed_varies_by_run() {
        assert_ne!(mix_seed(42, 0), mix_seed(42, 1));
        assert_eq!(mix_seed(42, 3), mix_seed(42, 3));
    }
}
