//! Labelled input field.
//!
//! Renders a label, a bordered single-line box around an
//! [`InputBox`](crate::widgets::InputBox)'s content, and an optional inline
//! error underneath. Supports password masking.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR};
use crate::widgets::InputBox;

/// Configuration for one rendered field.
pub struct InputFieldConfig<'a> {
    pub label: &'a str,
    pub input: &'a InputBox,
    pub focused: bool,
    pub is_password: bool,
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, input: &'a InputBox) -> Self {
        Self {
            label,
            input,
            focused: false,
            is_password: false,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn password(mut self, is_password: bool) -> Self {
        self.is_password = is_password;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Rows a field occupies: label + bordered box.
pub const INPUT_FIELD_HEIGHT: u16 = 4;

/// Render one field. The area should be [`INPUT_FIELD_HEIGHT`] rows tall.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) {
    let label_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let label_area = Rect {
        height: 1,
        ..area
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(config.label, label_style))),
        label_area,
    );

    let box_area = Rect {
        y: area.y + 1,
        height: 3,
        ..area
    };
    let border_color = if config.focused {
        Color::White
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let value = config.input.content();
    let mut display = if config.is_password {
        "\u{2022}".repeat(value.chars().count())
    } else if value.is_empty() {
        config.placeholder.unwrap_or_default().to_string()
    } else {
        value.to_string()
    };
    let text_style = if value.is_empty() {
        Style::default().fg(COLOR_DIM)
    } else {
        Style::default().fg(Color::White)
    };
    if config.focused {
        display.push('\u{2588}');
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(display, text_style))).block(block),
        box_area,
    );
}

/// Render an inline error line (shared by the Auth and Style-detail
/// screens' error slots).
pub fn render_error_line(frame: &mut Frame, area: Rect, error: &str) {
    let line = Line::from(vec![
        Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
        Span::styled(error.to_string(), Style::default().fg(COLOR_ERROR)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
