//! Timed powerups
//!
//! Each timer counts down in seconds; zero means inactive. Nothing is ever
//! reverted by hand: the basket width and the fall speed multiplier are read
//! off the timers whenever they are needed.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameState, PowerupKind};
use crate::tuning::Tuning;

/// Remaining seconds for each timed powerup
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PowerupTimers {
    pub enlarge_basket: f32,
    pub slow_motion: f32,
}

impl PowerupTimers {
    /// Restart a powerup at full duration. Pickups never stack: a second
    /// pickup simply resets the timer.
    pub fn activate(&mut self, kind: PowerupKind, duration: f32) {
        match kind {
            PowerupKind::EnlargeBasket => self.enlarge_basket = duration,
            PowerupKind::SlowMotion => self.slow_motion = duration,
        }
    }

    pub fn remaining(&self, kind: PowerupKind) -> f32 {
        match kind {
            PowerupKind::EnlargeBasket => self.enlarge_basket,
            PowerupKind::SlowMotion => self.slow_motion,
        }
    }

    pub fn is_active(&self, kind: PowerupKind) -> bool {
        self.remaining(kind) > 0.0
    }

    /// Active powerups with their remaining seconds
    pub fn active(&self) -> impl Iterator<Item = (PowerupKind, f32)> + '_ {
        [PowerupKind::EnlargeBasket, PowerupKind::SlowMotion]
            .into_iter()
            .filter(|&kind| self.is_active(kind))
            .map(|kind| (kind, self.remaining(kind)))
    }

    /// Count every active timer down by `dt`. Returns the powerups that ran
    /// out during this call; each expiry is reported exactly once.
    pub fn countdown(&mut self, dt: f32) -> Vec<PowerupKind> {
        let mut expired = Vec::new();
        for (kind, timer) in [
            (PowerupKind::EnlargeBasket, &mut self.enlarge_basket),
            (PowerupKind::SlowMotion, &mut self.slow_motion),
        ] {
            if *timer > 0.0 {
                *timer -= dt;
                if *timer <= 0.0 {
                    *timer = 0.0;
                    expired.push(kind);
                }
            }
        }
        expired
    }

    /// Basket width implied by the enlarge timer
    pub fn basket_width(&self, tuning: &Tuning) -> f32 {
        if self.is_active(PowerupKind::EnlargeBasket) {
            tuning.enlarged_basket_width
        } else {
            tuning.basket_width
        }
    }

    /// Fall speed multiplier implied by the slow-motion timer
    pub fn speed_multiplier(&self, tuning: &Tuning) -> f32 {
        if self.is_active(PowerupKind::SlowMotion) {
            tuning.slow_factor
        } else {
            1.0
        }
    }
}

/// Advance powerup timers by one tick
pub fn update_powerups(state: &mut GameState, dt: f32) {
    for kind in state.powerups.countdown(dt) {
        log::debug!("{:?} expired", kind);
        state.events.push(GameEvent::PowerupExpired { kind });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_resets_instead_of_stacking() {
        let mut timers = PowerupTimers::default();
        timers.activate(PowerupKind::SlowMotion, 5.0);
        timers.countdown(2.0);
        assert_eq!(timers.slow_motion, 3.0);

        timers.activate(PowerupKind::SlowMotion, 5.0);
        assert_eq!(timers.slow_motion, 5.0);
    }

    #[test]
    fn test_countdown_reports_expiry_once() {
        let mut timers = PowerupTimers::default();
        timers.activate(PowerupKind::EnlargeBasket, 1.0);

        assert!(timers.countdown(0.5).is_empty());
        assert_eq!(timers.countdown(0.5), vec![PowerupKind::EnlargeBasket]);
        assert_eq!(timers.enlarge_basket, 0.0);
        assert!(timers.countdown(0.5).is_empty());
    }

    #[test]
    fn test_timers_are_independent() {
        let mut timers = PowerupTimers::default();
        timers.activate(PowerupKind::EnlargeBasket, 1.0);
        timers.activate(PowerupKind::SlowMotion, 3.0);

        assert_eq!(timers.countdown(1.5), vec![PowerupKind::EnlargeBasket]);
        assert!(timers.is_active(PowerupKind::SlowMotion));
        assert_eq!(timers.active().count(), 1);
    }

    #[test]
    fn test_derived_width_and_multiplier() {
        let tuning = Tuning::default();
        let mut timers = PowerupTimers::default();
        assert_eq!(timers.basket_width(&tuning), 80.0);
        assert_eq!(timers.speed_multiplier(&tuning), 1.0);

        timers.activate(PowerupKind::EnlargeBasket, 5.0);
        timers.activate(PowerupKind::SlowMotion, 5.0);
        assert_eq!(timers.basket_width(&tuning), 120.0);
        assert_eq!(timers.speed_multiplier(&tuning), 0.5);
    }

    #[test]
    fn test_update_powerups_emits_events() {
        let mut state = GameState::new(1);
        state.powerups.activate(PowerupKind::SlowMotion, 0.1);
        update_powerups(&mut state, 0.2);
        assert_eq!(
            state.events,
            vec![GameEvent::PowerupExpired { kind: PowerupKind::SlowMotion }]
        );
    }
}
