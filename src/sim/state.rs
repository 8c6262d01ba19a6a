//! Game state and core simulation types
//!
//! Everything the tick routine owns between invocations lives here. There are
//! no globals: drivers hold a `GameState` and pass it to `tick` and
//! `handle_signal` explicitly.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::powerup::PowerupTimers;
use crate::consts::*;
use crate::tuning::Tuning;
use crate::{clamp_basket_x, mix_seed};

/// Top-level session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for start
    #[default]
    Menu,
    /// Active gameplay, the clock is running
    Playing,
    /// Gameplay frozen
    Paused,
    /// Clock ran out
    GameOver,
}

/// What falls out of a chicken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Normal,
    Blue,
    Golden,
    Poop,
    EnlargeBasket,
    SlowMotion,
    ExtraTime,
}

/// What catching an item does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEffect {
    /// Add (or subtract) points; the score never drops below zero
    Points(i64),
    /// Widen the basket for the powerup duration
    EnlargeBasket,
    /// Halve fall speed for the powerup duration
    SlowMotion,
    /// Add seconds to the clock
    ExtraTime,
}

impl ItemKind {
    pub const ALL: [ItemKind; 7] = [
        ItemKind::Normal,
        ItemKind::Blue,
        ItemKind::Golden,
        ItemKind::Poop,
        ItemKind::EnlargeBasket,
        ItemKind::SlowMotion,
        ItemKind::ExtraTime,
    ];

    /// Effect table
    pub fn effect(self) -> ItemEffect {
        match self {
            ItemKind::Normal => ItemEffect::Points(1),
            ItemKind::Blue => ItemEffect::Points(5),
            ItemKind::Golden => ItemEffect::Points(10),
            ItemKind::Poop => ItemEffect::Points(-10),
            ItemKind::EnlargeBasket => ItemEffect::EnlargeBasket,
            ItemKind::SlowMotion => ItemEffect::SlowMotion,
            ItemKind::ExtraTime => ItemEffect::ExtraTime,
        }
    }

    /// Items the player should avoid
    pub fn is_hazard(self) -> bool {
        self == ItemKind::Poop
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Normal => "Normal",
            ItemKind::Blue => "Blue",
            ItemKind::Golden => "Golden",
            ItemKind::Poop => "Poop",
            ItemKind::EnlargeBasket => "EnlargeBasket",
            ItemKind::SlowMotion => "SlowMotion",
            ItemKind::ExtraTime => "ExtraTime",
        }
    }
}

/// Timed powerups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerupKind {
    EnlargeBasket,
    SlowMotion,
}

/// Something that happened during the last tick (for audio/HUD feedback)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    ItemSpawned { kind: ItemKind },
    ItemCaught { kind: ItemKind, score_delta: i64 },
    ItemMissed { kind: ItemKind },
    PowerupExpired { kind: PowerupKind },
    GameOver { score: u64, new_high_score: bool },
}

/// The player's basket. Its width is not stored: it follows from the
/// enlarge timer, see [`GameState::basket_width`].
#[derive(Debug, Clone, PartialEq)]
pub struct Basket {
    /// Horizontal center
    pub x: f32,
    /// Bottom edge
    pub y: f32,
    pub height: f32,
    /// Distance per keyboard step
    pub speed: f32,
}

impl Basket {
    pub fn new(speed: f32) -> Self {
        Self {
            x: FIELD_WIDTH / 2.0,
            y: BASKET_Y,
            height: BASKET_HEIGHT,
            speed,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn left(&self, width: f32) -> f32 {
        self.x - width / 2.0
    }

    #[inline]
    pub fn right(&self, width: f32) -> f32 {
        self.x + width / 2.0
    }
}

/// A chicken pacing along the stick
#[derive(Debug, Clone, PartialEq)]
pub struct Chicken {
    pub pos: Vec2,
    /// Units per tick
    pub speed: f32,
    /// +1.0 walking right, -1.0 walking left
    pub direction: f32,
}

/// An egg, a dropping or a powerup box on its way down
#[derive(Debug, Clone, PartialEq)]
pub struct FallingItem {
    pub id: u32,
    pub pos: Vec2,
    pub kind: ItemKind,
    /// Fall speed fixed at spawn time (units per tick)
    pub speed: f32,
    /// Cleared once the item is caught or leaves the field
    pub active: bool,
}

/// Complete game state (deterministic given the base seed and inputs)
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Base seed the run seeds are derived from
    pub seed: u64,
    /// Seed of the current run; the RNG is reseeded from it on reset
    pub run_seed: u64,
    /// Number of runs started so far
    pub runs: u64,
    /// Balance values
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Score of the current run
    pub score: u64,
    /// Best score this process has seen
    pub high_score: u64,
    /// Whether the last finished run beat the previous high score
    pub new_high_score: bool,
    /// Seconds left on the clock
    pub remaining_time: f32,
    /// Ticks simulated while playing
    pub time_ticks: u64,
    /// Seconds accumulated toward the next spawn
    pub spawn_timer: f32,
    pub basket: Basket,
    pub chickens: Vec<Chicken>,
    /// Items in flight (unordered)
    pub items: Vec<FallingItem>,
    pub powerups: PowerupTimers,
    /// Events produced by the last tick
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed and default balance
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game state sitting on the menu
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let run_seed = mix_seed(seed, 0);
        let mut state = Self {
            seed,
            run_seed,
            runs: 0,
            basket: Basket::new(tuning.basket_speed),
            remaining_time: tuning.session_secs,
            tuning,
            phase: GamePhase::Menu,
            score: 0,
            high_score: 0,
            new_high_score: false,
            time_ticks: 0,
            spawn_timer: 0.0,
            chickens: Vec::new(),
            items: Vec::new(),
            powerups: PowerupTimers::default(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(run_seed),
            next_id: 1,
        };

        // Chickens are on the stick even on the title screen
        state.reset();

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Advance to a fresh run seed and reset. Called on every transition
    /// into Playing from Menu or GameOver.
    pub fn begin_run(&mut self) {
        self.runs += 1;
        self.run_seed = mix_seed(self.seed, self.runs);
        self.reset();
    }

    /// Full reset of the round. Depends only on the run seed, the tuning and
    /// the high score, so calling it twice in a row changes nothing.
    pub fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.run_seed);
        self.score = 0;
        self.new_high_score = false;
        self.remaining_time = self.tuning.session_secs;
        self.time_ticks = 0;
        self.items.clear();
        self.basket = Basket::new(self.tuning.basket_speed);
        self.spawn_timer = 0.0;
        self.powerups = PowerupTimers::default();
        self.next_id = 1;

        let quarter = FIELD_WIDTH / 4.0;
        let (min_speed, max_speed) = (self.tuning.chicken_speed_min, self.tuning.chicken_speed_max);
        self.chickens.clear();
        for i in 0..self.tuning.chicken_count {
            let speed = if min_speed < max_speed {
                self.rng.random_range(min_speed..max_speed)
            } else {
                min_speed
            };
            self.chickens.push(Chicken {
                // Spread evenly; extra chickens pile up at the right inset
                pos: Vec2::new(
                    (quarter * (i + 1) as f32).min(FIELD_WIDTH - CHICKEN_INSET),
                    FIELD_HEIGHT - CHICKEN_ROW_OFFSET,
                ),
                speed,
                direction: if i % 2 == 0 { 1.0 } else { -1.0 },
            });
        }
    }

    /// Current basket width, derived from the enlarge timer
    pub fn basket_width(&self) -> f32 {
        self.powerups.basket_width(&self.tuning)
    }

    /// Fall speed multiplier applied to every item this tick
    pub fn speed_multiplier(&self) -> f32 {
        self.powerups.speed_multiplier(&self.tuning)
    }

    /// Move the basket center to `x`, clamped to the field
    pub fn set_basket_x(&mut self, x: f32) {
        self.basket.x = clamp_basket_x(x, self.basket_width());
    }

    /// Re-apply the field bounds after a width change
    pub fn clamp_basket(&mut self) {
        self.set_basket_x(self.basket.x);
    }
}
