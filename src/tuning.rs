//! Data-driven game balance
//!
//! Every number a designer might want to tweak lives here. Field geometry is
//! fixed and lives in [`crate::consts`] instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::FIELD_WIDTH;
use crate::sim::ItemKind;

/// Invalid balance values
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("spawn weights add up to {0}, more than 100")]
    SpawnWeightsOverflow(u64),
    #[error("{0} must be a finite number")]
    NotFinite(&'static str),
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),
    #[error("{0} must not be negative")]
    Negative(&'static str),
    #[error("basket width {0} does not fit in the field")]
    BasketTooWide(f32),
    #[error("enlarged basket width {enlarged} is narrower than the basket width {base}")]
    EnlargedNarrower { base: f32, enlarged: f32 },
    #[error("chicken speed range {min}..{max} is empty or too wide")]
    EmptySpeedRange { min: f32, max: f32 },
    #[error("slow motion factor {0} must be in (0, 1]")]
    SlowFactorOutOfRange(f32),
}

/// Percent chances for each item kind. Whatever is left of 100 goes to
/// normal eggs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnTable {
    pub golden: u32,
    pub blue: u32,
    pub poop: u32,
    pub enlarge_basket: u32,
    pub slow_motion: u32,
    pub extra_time: u32,
}

impl Default for SpawnTable {
    fn default() -> Self {
        Self {
            golden: 5,
            blue: 10,
            poop: 10,
            enlarge_basket: 5,
            slow_motion: 5,
            extra_time: 5,
        }
    }
}

impl SpawnTable {
    /// Sum of all non-normal weights
    pub fn special_total(&self) -> u64 {
        [
            self.golden,
            self.blue,
            self.poop,
            self.enlarge_basket,
            self.slow_motion,
            self.extra_time,
        ]
        .into_iter()
        .map(u64::from)
        .sum()
    }

    /// Chance of a plain egg
    pub fn normal(&self) -> u32 {
        100u64.saturating_sub(self.special_total()) as u32
    }

    /// Map a roll in `0..100` to an item kind.
    ///
    /// Bands are laid out in a fixed order: golden, blue, poop, enlarge,
    /// slow motion, extra time, then normal for the remainder.
    pub fn pick(&self, roll: u32) -> ItemKind {
        let bands = [
            (self.golden, ItemKind::Golden),
            (self.blue, ItemKind::Blue),
            (self.poop, ItemKind::Poop),
            (self.enlarge_basket, ItemKind::EnlargeBasket),
            (self.slow_motion, ItemKind::SlowMotion),
            (self.extra_time, ItemKind::ExtraTime),
        ];

        let mut upper = 0u32;
        for (weight, kind) in bands {
            upper = upper.saturating_add(weight);
            if roll < upper {
                return kind;
            }
        }
        ItemKind::Normal
    }
}

/// Game balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Length of a round (seconds)
    pub session_secs: f32,
    /// Time between spawns (seconds)
    pub spawn_interval: f32,
    /// Duration of enlarge/slow powerups (seconds)
    pub powerup_secs: f32,
    /// Time added by an extra-time pickup (seconds)
    pub extra_time_secs: f32,
    /// Fall speed multiplier while slow motion is active
    pub slow_factor: f32,
    /// Basket width without powerups
    pub basket_width: f32,
    /// Basket width while enlarged
    pub enlarged_basket_width: f32,
    /// Distance moved per keyboard step
    pub basket_speed: f32,
    /// Number of chickens on the stick
    pub chicken_count: u32,
    /// Chicken speed is drawn from `chicken_speed_min..chicken_speed_max`
    pub chicken_speed_min: f32,
    pub chicken_speed_max: f32,
    /// Base fall speed (units per tick) before jitter
    pub item_base_speed: f32,
    /// Jitter added on top of the base speed, drawn from `0..item_speed_jitter`
    pub item_speed_jitter: f32,
    pub spawn_table: SpawnTable,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            session_secs: 60.0,
            spawn_interval: 1.0,
            powerup_secs: 5.0,
            extra_time_secs: 10.0,
            slow_factor: 0.5,
            basket_width: 80.0,
            enlarged_basket_width: 120.0,
            basket_speed: 8.0,
            chicken_count: 1,
            chicken_speed_min: 3.0,
            chicken_speed_max: 5.0,
            item_base_speed: 2.0,
            item_speed_jitter: 1.0,
            spawn_table: SpawnTable::default(),
        }
    }
}

impl Tuning {
    /// Check that the values describe a playable game
    pub fn validate(&self) -> Result<(), TuningError> {
        let total = self.spawn_table.special_total();
        if total > 100 {
            return Err(TuningError::SpawnWeightsOverflow(total));
        }

        let values = [
            ("session_secs", self.session_secs),
            ("spawn_interval", self.spawn_interval),
            ("powerup_secs", self.powerup_secs),
            ("extra_time_secs", self.extra_time_secs),
            ("slow_factor", self.slow_factor),
            ("basket_width", self.basket_width),
            ("enlarged_basket_width", self.enlarged_basket_width),
            ("basket_speed", self.basket_speed),
            ("chicken_speed_min", self.chicken_speed_min),
            ("chicken_speed_max", self.chicken_speed_max),
            ("item_base_speed", self.item_base_speed),
            ("item_speed_jitter", self.item_speed_jitter),
        ];
        for (name, value) in values {
            if !value.is_finite() {
                return Err(TuningError::NotFinite(name));
            }
        }

        let positive = [
            ("session_secs", self.session_secs),
            ("spawn_interval", self.spawn_interval),
            ("powerup_secs", self.powerup_secs),
            ("basket_width", self.basket_width),
            ("basket_speed", self.basket_speed),
            ("chicken_speed_min", self.chicken_speed_min),
            ("item_base_speed", self.item_base_speed),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(TuningError::NotPositive(name));
            }
        }
        if self.chicken_count == 0 {
            return Err(TuningError::NotPositive("chicken_count"));
        }

        for (name, value) in [
            ("extra_time_secs", self.extra_time_secs),
            ("item_speed_jitter", self.item_speed_jitter),
        ] {
            if value < 0.0 {
                return Err(TuningError::Negative(name));
            }
        }

        for width in [self.basket_width, self.enlarged_basket_width] {
            if width > FIELD_WIDTH {
                return Err(TuningError::BasketTooWide(width));
            }
        }
        if self.enlarged_basket_width < self.basket_width {
            return Err(TuningError::EnlargedNarrower {
                base: self.basket_width,
                enlarged: self.enlarged_basket_width,
            });
        }

        // `random_range` scales the span up by 1 / (1 - EPSILON); that must stay finite
        let span = self.chicken_speed_max - self.chicken_speed_min;
        if span <= 0.0 || !(span / (1.0 - f32::EPSILON)).is_finite() {
            return Err(TuningError::EmptySpeedRange {
                min: self.chicken_speed_min,
                max: self.chicken_speed_max,
            });
        }

        if self.slow_factor <= 0.0 || self.slow_factor > 1.0 {
            return Err(TuningError::SlowFactorOutOfRange(self.slow_factor));
        }

        Ok(())
    }
}
