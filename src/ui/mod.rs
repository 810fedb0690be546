//! UI rendering.
//!
//! One renderer per screen; [`render`] dispatches on the app's current
//! screen. Renderers read from the [`App`] state bag and draw — the only
//! state written during a render is the star picker's hit area.

mod auth;
mod gallery;
mod style_detail;

pub mod components;
pub mod theme;

use ratatui::Frame;

use crate::app::{App, Screen};
use auth::render_auth_screen;
use gallery::render_gallery_screen;
use style_detail::render_detail_screen;

/// Render the UI based on the current screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    match app.screen {
        Screen::Auth => render_auth_screen(frame, app),
        Screen::Gallery => render_gallery_screen(frame, app),
        Screen::StyleDetail => render_detail_screen(frame, app),
    }
}
