//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Time only enters through the `dt` passed to `tick`
//! - No rendering or platform dependencies

pub mod collision;
pub mod control;
pub mod motion;
pub mod powerup;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Resolution, item_hits_basket};
pub use control::{Signal, SignalOutcome, handle_signal};
pub use powerup::PowerupTimers;
pub use snapshot::{BasketView, ChickenView, FrameSnapshot, ItemView, PowerupView};
pub use state::{
    Basket, Chicken, FallingItem, GameEvent, GamePhase, GameState, ItemEffect, ItemKind,
    PowerupKind,
};
pub use tick::{TickInput, tick};
