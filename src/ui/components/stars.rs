//! Star rating widgets.
//!
//! [`star_line`] is the read-only display: a pure function of a numeric
//! rating. [`StarPicker`] is the interactive variant; the only state it
//! owns is the transient mouse-hover position, which clears when the
//! pointer leaves its cells.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    Frame,
};

use crate::ui::theme::{COLOR_STAR_EMPTY, COLOR_STAR_FILLED};

pub const STAR_COUNT: u8 = 5;

const STAR_FILLED: &str = "★";
const STAR_EMPTY: &str = "☆";

/// Each star glyph is rendered with one trailing space.
const CELL_WIDTH: u16 = 2;

/// Read-only star display. Rounds to the nearest integer; clamping is
/// implicit in rendering five fixed positions.
pub fn star_line(value: f64) -> Line<'static> {
    let rounded = value.round() as i64;
    let spans: Vec<Span<'static>> = (1..=STAR_COUNT as i64)
        .map(|i| {
            if i <= rounded {
                Span::styled(
                    format!("{} ", STAR_FILLED),
                    Style::default().fg(COLOR_STAR_FILLED),
                )
            } else {
                Span::styled(
                    format!("{} ", STAR_EMPTY),
                    Style::default().fg(COLOR_STAR_EMPTY),
                )
            }
        })
        .collect();
    Line::from(spans)
}

/// Count of filled positions [`star_line`] would draw, exposed for tests.
pub fn filled_count(value: f64) -> u8 {
    (value.round() as i64).clamp(0, STAR_COUNT as i64) as u8
}

/// Interactive star picker.
///
/// Reports a chosen 1–5 on click; holds only its own hover state. The area
/// it was last drawn into is recorded at render time for mouse hit-testing.
#[derive(Debug, Clone, Default)]
pub struct StarPicker {
    hover: Option<u8>,
    area: Option<Rect>,
}

impl StarPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hover(&self) -> Option<u8> {
        self.hover
    }

    /// Record where the picker was drawn this frame.
    pub fn set_area(&mut self, area: Rect) {
        self.area = Some(area);
    }

    /// Which star (1–5) the given screen cell falls on, if any.
    fn star_at(&self, column: u16, row: u16) -> Option<u8> {
        let area = self.area?;
        if row != area.y || column < area.x {
            return None;
        }
        let offset = (column - area.x) / CELL_WIDTH;
        if offset < STAR_COUNT as u16 && column < area.x + STAR_COUNT as u16 * CELL_WIDTH {
            Some(offset as u8 + 1)
        } else {
            None
        }
    }

    /// Update hover from a pointer position. Returns true when the hover
    /// state changed (caller marks the frame dirty).
    pub fn pointer_moved(&mut self, column: u16, row: u16) -> bool {
        let next = self.star_at(column, row);
        if next != self.hover {
            self.hover = next;
            true
        } else {
            false
        }
    }

    /// A click at the given cell; `Some(1..=5)` when a star was chosen.
    pub fn click(&self, column: u16, row: u16) -> Option<u8> {
        self.star_at(column, row)
    }

    /// Build the picker's line for the current committed value. Hover
    /// previews override the committed value, as in the read-only display.
    pub fn line(&self, committed: u8) -> Line<'static> {
        star_line(f64::from(self.hover.unwrap_or(committed)))
    }
}

/// Render the picker and record its hit area.
pub fn render_star_picker(frame: &mut Frame, area: Rect, picker: &mut StarPicker, committed: u8) {
    picker.set_area(area);
    frame.render_widget(
        ratatui::widgets::Paragraph::new(picker.line(committed)),
        area,
    );
}
