//! Terminal render sink
//!
//! Draws a [`FrameSnapshot`] onto a character grid. The field is y-up with
//! the origin at the bottom-left; terminal rows grow downward, so rows are
//! flipped. Row 0 is reserved for the HUD.

use std::io::Write;

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::{QueueableCommand, cursor};

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::sim::{FrameSnapshot, GamePhase, ItemKind, PowerupKind};

/// One character cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub color: Color,
}

impl Cell {
    const BLANK: Cell = Cell {
        ch: ' ',
        color: Color::Reset,
    };
}

/// A composed frame, ready to be flushed to the terminal
#[derive(Debug, Clone)]
pub struct Frame {
    pub cols: u16,
    pub rows: u16,
    cells: Vec<Cell>,
}

impl Frame {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::BLANK; cols as usize * rows as usize],
        }
    }

    pub fn get(&self, col: u16, row: u16) -> Option<Cell> {
        if col < self.cols && row < self.rows {
            Some(self.cells[row as usize * self.cols as usize + col as usize])
        } else {
            None
        }
    }

    pub fn put(&mut self, col: i32, row: i32, ch: char, color: Color) {
        if col >= 0 && row >= 0 && (col as u16) < self.cols && (row as u16) < self.rows {
            let idx = row as usize * self.cols as usize + col as usize;
            self.cells[idx] = Cell { ch, color };
        }
    }

    pub fn text(&mut self, col: i32, row: i32, text: &str, color: Color) {
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i as i32, row, ch, color);
        }
    }

    /// Write text centered on a row
    pub fn centered(&mut self, row: i32, text: &str, color: Color) {
        let col = (self.cols as i32 - text.chars().count() as i32) / 2;
        self.text(col.max(0), row, text, color);
    }

    /// Plain text of a row (for tests and logging)
    pub fn row_text(&self, row: u16) -> String {
        (0..self.cols)
            .filter_map(|col| self.get(col, row))
            .map(|cell| cell.ch)
            .collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        (0..self.rows).any(|row| self.row_text(row).contains(needle))
    }

    /// Queue the whole frame, one color run at a time
    pub fn draw<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for row in 0..self.rows {
            out.queue(cursor::MoveTo(0, row))?;
            let mut run = String::new();
            let mut run_color = Color::Reset;
            for col in 0..self.cols {
                let cell = self.cells[row as usize * self.cols as usize + col as usize];
                if cell.color != run_color && !run.is_empty() {
                    out.queue(SetForegroundColor(run_color))?;
                    out.queue(Print(&run))?;
                    run.clear();
                }
                run_color = cell.color;
                run.push(cell.ch);
            }
            out.queue(SetForegroundColor(run_color))?;
            out.queue(Print(&run))?;
        }
        out.queue(ResetColor)?;
        out.flush()
    }
}

/// Field x to terminal column
fn to_col(x: f32, cols: u16) -> i32 {
    (x * cols as f32 / FIELD_WIDTH).floor() as i32
}

/// Field y to terminal row (row 0 is the HUD)
fn to_row(y: f32, rows: u16) -> i32 {
    let field_rows = rows.saturating_sub(1).max(1) as f32;
    let row = ((FIELD_HEIGHT - y) / FIELD_HEIGHT * field_rows).floor() as i32;
    1 + row.clamp(0, field_rows as i32 - 1)
}

fn item_glyph(kind: ItemKind) -> (char, Color) {
    match kind {
        ItemKind::Normal => ('o', Color::White),
        ItemKind::Blue => ('o', Color::Blue),
        ItemKind::Golden => ('O', Color::Yellow),
        ItemKind::Poop => ('*', Color::DarkYellow),
        ItemKind::EnlargeBasket => ('+', Color::Green),
        ItemKind::SlowMotion => ('S', Color::Magenta),
        ItemKind::ExtraTime => ('T', Color::Red),
    }
}

/// Compose one frame from a snapshot
pub fn compose_frame(snap: &FrameSnapshot, cols: u16, rows: u16) -> Frame {
    let mut frame = Frame::new(cols, rows);

    match snap.phase {
        GamePhase::Menu => draw_menu(&mut frame, snap),
        GamePhase::Playing | GamePhase::Paused => {
            draw_field(&mut frame, snap);
            draw_hud(&mut frame, snap);
            if snap.phase == GamePhase::Paused {
                let mid = rows as i32 / 2;
                frame.centered(mid - 1, "PAUSED", Color::Yellow);
                frame.centered(mid + 1, "Press 'P' to Resume", Color::White);
                frame.centered(mid + 2, "Press 'M' for Menu", Color::White);
            }
        }
        GamePhase::GameOver => draw_game_over(&mut frame, snap),
    }

    frame
}

fn draw_field(frame: &mut Frame, snap: &FrameSnapshot) {
    let (cols, rows) = (frame.cols, frame.rows);

    // Bamboo stick the chickens walk on
    if let Some(chicken) = snap.chickens.first() {
        let row = to_row(chicken.y, rows) + 1;
        for col in to_col(50.0, cols)..to_col(FIELD_WIDTH - 50.0, cols) {
            frame.put(col, row, '=', Color::DarkGreen);
        }
    }

    for chicken in &snap.chickens {
        let row = to_row(chicken.y, rows);
        let col = to_col(chicken.x, cols);
        let glyph = if chicken.direction >= 0.0 { '>' } else { '<' };
        frame.put(col, row, '@', Color::White);
        frame.put(col + chicken.direction.signum() as i32, row, glyph, Color::Yellow);
    }

    for item in &snap.items {
        let (ch, color) = item_glyph(item.kind);
        frame.put(to_col(item.x, cols), to_row(item.y, rows), ch, color);
    }

    let basket = &snap.basket;
    let row = to_row(basket.y + basket.height / 2.0, rows);
    let left = to_col(basket.x - basket.width / 2.0, cols);
    let right = to_col(basket.x + basket.width / 2.0, cols).max(left + 1);
    for col in left..=right {
        let ch = if col == left {
            '\\'
        } else if col == right {
            '/'
        } else {
            '_'
        };
        frame.put(col, row, ch, Color::DarkYellow);
    }
}

fn draw_hud(frame: &mut Frame, snap: &FrameSnapshot) {
    let score = format!("Score: {}", snap.score);
    frame.text(0, 0, &score, Color::White);

    let mut col = score.len() as i32 + 2;
    for powerup in &snap.powerups {
        let (label, color) = match powerup.kind {
            PowerupKind::EnlargeBasket => ("Large Basket", Color::Green),
            PowerupKind::SlowMotion => ("Slow Motion", Color::Magenta),
        };
        let text = format!("{}: {:.1}s", label, powerup.remaining);
        frame.text(col, 0, &text, color);
        col += text.len() as i32 + 2;
    }

    let time = format!("Time: {:.1}", snap.remaining_time);
    frame.text(frame.cols as i32 - time.len() as i32, 0, &time, Color::White);
}

fn draw_menu(frame: &mut Frame, snap: &FrameSnapshot) {
    let mid = frame.rows as i32 / 2;
    frame.centered(mid - 5, "CATCH THE EGGS", Color::Cyan);
    frame.centered(mid - 3, &format!("High Score: {}", snap.high_score), Color::Yellow);
    frame.centered(mid - 1, "Press 'S' to Start Game", Color::White);
    frame.centered(mid, "Press 'ESC' to Exit", Color::White);
    frame.centered(mid + 2, "Arrow Keys or Mouse - Move Basket", Color::DarkYellow);
    frame.centered(mid + 3, "P - Pause/Resume Game", Color::DarkYellow);
    frame.centered(
        mid + 5,
        "o egg +1  o blue +5  O golden +10  * poop -10",
        Color::DarkGrey,
    );
    frame.centered(
        mid + 6,
        "+ large basket  S slow motion  T extra time",
        Color::DarkGrey,
    );
}

fn draw_game_over(frame: &mut Frame, snap: &FrameSnapshot) {
    let mid = frame.rows as i32 / 2;
    frame.centered(mid - 3, "GAME OVER!", Color::Red);
    frame.centered(mid - 1, &format!("Final Score: {}", snap.score), Color::White);
    if snap.new_high_score {
        frame.centered(mid, "NEW HIGH SCORE!", Color::Yellow);
    }
    frame.centered(mid + 2, "Press 'R' to Play Again", Color::White);
    frame.centered(mid + 3, "Press 'M' for Menu", Color::White);
}
