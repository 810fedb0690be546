//! Color constants for the UI.

use ratatui::style::Color;

/// Primary border color.
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Dim text for secondary information.
pub const COLOR_DIM: Color = Color::DarkGray;

/// Header / title text.
pub const COLOR_HEADER: Color = Color::White;

/// Highlight for the selected gallery card.
pub const COLOR_SELECTED: Color = Color::LightCyan;

/// Inline error text.
pub const COLOR_ERROR: Color = Color::Red;

/// Filled star glyphs (amber).
pub const COLOR_STAR_FILLED: Color = Color::Rgb(245, 158, 11);

/// Empty star glyphs.
pub const COLOR_STAR_EMPTY: Color = Color::Rgb(90, 90, 90);
