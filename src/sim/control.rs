//! Session state machine
//!
//! Input signals are applied synchronously, as soon as the driver receives
//! them. A signal that makes no sense in the current phase is ignored, not
//! reported as an error.

use super::state::{GameEvent, GamePhase, GameState};

/// Discrete and positional input from the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    Start,
    Pause,
    Resume,
    Restart,
    ToMenu,
    Quit,
    /// Put the basket center at this field x
    SetBasket(f32),
    /// Step the basket left (negative) or right (positive) by `amount`
    MoveBasket { direction: f32, amount: f32 },
}

/// What the driver has to do after a signal was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalOutcome {
    /// Not valid in the current phase; nothing changed
    Ignored,
    /// State changed, nothing else to do
    Applied,
    /// Gameplay (re)starts now: the driver must restart its frame clock so
    /// the next tick does not see the time spent outside Playing
    ResetClock,
    /// The player asked to exit
    Quit,
}

/// Apply one input signal
pub fn handle_signal(state: &mut GameState, signal: Signal) -> SignalOutcome {
    use GamePhase::*;

    match (signal, state.phase) {
        (Signal::Quit, _) => SignalOutcome::Quit,

        (Signal::Start, Menu) | (Signal::Restart, GameOver) => {
            state.begin_run();
            enter(state, Playing);
            SignalOutcome::ResetClock
        }

        (Signal::Pause, Playing) => {
            enter(state, Paused);
            SignalOutcome::Applied
        }

        (Signal::Resume, Paused) => {
            enter(state, Playing);
            SignalOutcome::ResetClock
        }

        (Signal::ToMenu, Paused | GameOver) => {
            enter(state, Menu);
            SignalOutcome::Applied
        }

        (Signal::SetBasket(x), Playing) => {
            state.set_basket_x(x);
            SignalOutcome::Applied
        }

        (Signal::MoveBasket { direction, amount }, Playing) => {
            // f32::signum maps 0.0 to 1.0, so a zero direction is handled apart
            let step = if direction == 0.0 {
                0.0
            } else {
                direction.signum() * amount.abs()
            };
            state.set_basket_x(state.basket.x + step);
            SignalOutcome::Applied
        }

        _ => SignalOutcome::Ignored,
    }
}

/// Playing → GameOver once the clock hits zero. The high score only ever
/// goes up.
pub(crate) fn end_round(state: &mut GameState) {
    state.new_high_score = state.score > state.high_score;
    if state.new_high_score {
        state.high_score = state.score;
    }
    enter(state, GamePhase::GameOver);
    state.events.push(GameEvent::GameOver {
        score: state.score,
        new_high_score: state.new_high_score,
    });
    log::info!(
        "Game over: score {} (high score {}{})",
        state.score,
        state.high_score,
        if state.new_high_score { ", new!" } else { "" }
    );
}

fn enter(state: &mut GameState, phase: GamePhase) {
    log::info!("{:?} -> {:?}", state.phase, phase);
    state.phase = phase;
}
