//! Gallery screen: one card per style, scrolled to keep the selection
//! visible.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_SELECTED};

/// Rows per card: borders plus description and image URL.
const CARD_HEIGHT: u16 = 4;

pub fn render_gallery_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let [header_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header_area, app);
    render_cards(frame, list_area, app);

    frame.render_widget(
        Paragraph::new("[↑/↓] Select  [Enter] View  [Ctrl+L] Logout  [Ctrl+C] Quit")
            .style(Style::default().fg(COLOR_DIM)),
        footer_area,
    );
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let email = app
        .user
        .as_ref()
        .map(|u| u.display_email().to_string())
        .unwrap_or_default();
    let line = Line::from(vec![
        Span::styled(" Lookbook ", Style::default().fg(COLOR_HEADER)),
        Span::styled("· style gallery", Style::default().fg(COLOR_DIM)),
        Span::raw("  "),
        Span::styled(email, Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_cards(frame: &mut Frame, area: Rect, app: &App) {
    if app.styles.is_empty() {
        frame.render_widget(
            Paragraph::new("No styles to show yet.").style(Style::default().fg(COLOR_DIM)),
            area,
        );
        return;
    }

    // Window the list so the selected card is always on screen.
    let visible = (area.height / CARD_HEIGHT).max(1) as usize;
    let first = if app.gallery_index >= visible {
        app.gallery_index + 1 - visible
    } else {
        0
    };

    for (row, (index, style)) in app
        .styles
        .iter()
        .enumerate()
        .skip(first)
        .take(visible)
        .enumerate()
    {
        let card_area = Rect::new(
            area.x,
            area.y + row as u16 * CARD_HEIGHT,
            area.width,
            CARD_HEIGHT,
        );
        let selected = index == app.gallery_index;
        let border_style = if selected {
            Style::default().fg(COLOR_SELECTED)
        } else {
            Style::default().fg(COLOR_BORDER)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Span::styled(
                format!(" {} ", style.name),
                Style::default().fg(COLOR_HEADER),
            ));
        let body = vec![
            Line::from(style.description.clone()),
            Line::from(Span::styled(
                style.image_url.clone(),
                Style::default().fg(COLOR_DIM),
            )),
        ];
        frame.render_widget(Paragraph::new(body).block(block), card_area);
    }
}
