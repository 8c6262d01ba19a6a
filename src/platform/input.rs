//! Terminal input mapping
//!
//! Turns crossterm events into simulation signals. Keys:
//! S start, P pause/resume, R restart, M menu, Esc/Q quit,
//! arrows or A/D move the basket, mouse movement places it.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

use crate::consts::FIELD_WIDTH;
use crate::sim::{GamePhase, Signal};

/// Maps terminal events to signals for a play field drawn `cols` wide
#[derive(Debug, Clone)]
pub struct InputMapper {
    /// Basket step per key press (field units)
    pub basket_step: f32,
    /// Width of the drawn field in terminal columns
    pub cols: u16,
}

impl InputMapper {
    pub fn new(basket_step: f32, cols: u16) -> Self {
        Self { basket_step, cols }
    }

    /// Field x at the center of a terminal column
    pub fn column_to_x(&self, column: u16) -> f32 {
        let cols = self.cols.max(1) as f32;
        (column as f32 + 0.5) * FIELD_WIDTH / cols
    }

    /// Translate one event. `phase` decides whether P pauses or resumes.
    pub fn map_event(&self, event: &Event, phase: GamePhase) -> Option<Signal> {
        match event {
            Event::Key(key) => self.map_key(key, phase),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                    Some(Signal::SetBasket(self.column_to_x(mouse.column)))
                }
                _ => None,
            },
            _ => None,
        }
    }

    fn map_key(&self, key: &KeyEvent, phase: GamePhase) -> Option<Signal> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        let step = |direction: f32| Signal::MoveBasket {
            direction,
            amount: self.basket_step,
        };

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Signal::Quit)
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Signal::Quit),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(Signal::Start),
            KeyCode::Char('p') | KeyCode::Char('P') => match phase {
                GamePhase::Playing => Some(Signal::Pause),
                GamePhase::Paused => Some(Signal::Resume),
                _ => None,
            },
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Signal::Restart),
            KeyCode::Char('m') | KeyCode::Char('M') => Some(Signal::ToMenu),
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(step(-1.0)),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(step(1.0)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{MouseButton, MouseEvent};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_pause_key_toggles_by_phase() {
        let mapper = InputMapper::new(8.0, 80);
        let p = key(KeyCode::Char('p'));
        assert_eq!(mapper.map_event(&p, GamePhase::Playing), Some(Signal::Pause));
        assert_eq!(mapper.map_event(&p, GamePhase::Paused), Some(Signal::Resume));
        assert_eq!(mapper.map_event(&p, GamePhase::Menu), None);
    }

    #[test]
    fn test_control_keys() {
        let mapper = InputMapper::new(8.0, 80);
        let phase = GamePhase::Menu;
        assert_eq!(mapper.map_event(&key(KeyCode::Char('S')), phase), Some(Signal::Start));
        assert_eq!(mapper.map_event(&key(KeyCode::Char('r')), phase), Some(Signal::Restart));
        assert_eq!(mapper.map_event(&key(KeyCode::Char('m')), phase), Some(Signal::ToMenu));
        assert_eq!(mapper.map_event(&key(KeyCode::Esc), phase), Some(Signal::Quit));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(mapper.map_event(&ctrl_c, phase), Some(Signal::Quit));
        assert_eq!(mapper.map_event(&key(KeyCode::Char('x')), phase), None);
    }

    #[test]
    fn test_arrow_keys_step_basket() {
        let mapper = InputMapper::new(8.0, 80);
        assert_eq!(
            mapper.map_event(&key(KeyCode::Left), GamePhase::Playing),
            Some(Signal::MoveBasket { direction: -1.0, amount: 8.0 })
        );
        assert_eq!(
            mapper.map_event(&key(KeyCode::Char('d')), GamePhase::Playing),
            Some(Signal::MoveBasket { direction: 1.0, amount: 8.0 })
        );
    }

    #[test]
    fn test_release_is_ignored() {
        let mapper = InputMapper::new(8.0, 80);
        let mut release = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(mapper.map_event(&Event::Key(release), GamePhase::Playing), None);
    }

    #[test]
    fn test_mouse_sets_basket() {
        let mapper = InputMapper::new(8.0, 80);
        let moved = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 40,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(mapper.map_event(&moved, GamePhase::Playing), Some(Signal::SetBasket(405.0)));

        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 40,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(mapper.map_event(&click, GamePhase::Playing), None);
    }
}
