//! Read-only view of the game for renderers
//!
//! Renderers poll [`GameState::snapshot`] once per frame. The core never
//! calls into rendering.

use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState, ItemKind, PowerupKind};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasketView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChickenView {
    pub x: f32,
    pub y: f32,
    pub direction: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemView {
    pub x: f32,
    pub y: f32,
    pub kind: ItemKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerupView {
    pub kind: PowerupKind,
    pub remaining: f32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub high_score: u64,
    pub new_high_score: bool,
    pub remaining_time: f32,
    pub basket: BasketView,
    pub chickens: Vec<ChickenView>,
    pub items: Vec<ItemView>,
    pub powerups: Vec<PowerupView>,
}

impl GameState {
    /// Capture the render surface
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            phase: self.phase,
            score: self.score,
            high_score: self.high_score,
            new_high_score: self.new_high_score,
            remaining_time: self.remaining_time,
            basket: BasketView {
                x: self.basket.x,
                y: self.basket.y,
                width: self.basket_width(),
                height: self.basket.height,
            },
            chickens: self
                .chickens
                .iter()
                .map(|c| ChickenView {
                    x: c.pos.x,
                    y: c.pos.y,
                    direction: c.direction,
                })
                .collect(),
            items: self
                .items
                .iter()
                .filter(|item| item.active)
                .map(|item| ItemView {
                    x: item.pos.x,
                    y: item.pos.y,
                    kind: item.kind,
                })
                .collect(),
            powerups: self
                .powerups
                .active()
                .map(|(kind, remaining)| PowerupView { kind, remaining })
                .collect(),
        }
    }
}
