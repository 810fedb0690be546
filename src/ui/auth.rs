//! Auth screen: sign-up / sign-in form plus the federated entry point.

use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, AuthField, AuthMode};
use crate::ui::components::{render_error_line, render_input_field, InputFieldConfig};
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

pub fn render_auth_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(outer, area);

    let inner = area.inner(Margin::new(2, 1));

    // Centered column, capped so the form doesn't sprawl on wide terminals.
    let width = inner.width.min(48);
    let x = inner.x + (inner.width.saturating_sub(width)) / 2;

    let title_area = Rect::new(x, inner.y + 1, width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("Lookbook — {}", app.auth_mode.label()),
            Style::default().fg(COLOR_HEADER),
        )))
        .alignment(Alignment::Center),
        title_area,
    );

    let email_area = Rect::new(x, inner.y + 3, width, 4);
    render_input_field(
        frame,
        email_area,
        &InputFieldConfig::new("Email", &app.email)
            .focused(app.auth_focus == AuthField::Email)
            .placeholder("you@example.com"),
    );

    let password_area = Rect::new(x, inner.y + 7, width, 4);
    render_input_field(
        frame,
        password_area,
        &InputFieldConfig::new("Password", &app.password)
            .focused(app.auth_focus == AuthField::Password)
            .password(true),
    );

    let mut y = inner.y + 12;
    if let Some(error) = &app.error {
        render_error_line(frame, Rect::new(x, y, width, 1), error);
        y += 2;
    }

    if let Some(url) = &app.federated_url {
        let pending = Paragraph::new(format!("Complete sign-in in your browser:\n{}", url))
            .style(Style::default().fg(COLOR_DIM))
            .wrap(Wrap { trim: true });
        frame.render_widget(pending, Rect::new(x, y, width, 3));
        y += 4;
    }

    let other_mode = app.auth_mode.toggled();
    let hints = vec![
        Line::from(format!("[Enter] {}", app.auth_mode.label())),
        Line::from("[Ctrl+G] Continue with Google".to_string()),
        Line::from(format!(
            "[Ctrl+T] {}  [Tab] Switch field  [Ctrl+C] Quit",
            match other_mode {
                AuthMode::SignUp => "Need an account? Sign Up",
                AuthMode::SignIn => "Already have an account? Login",
            }
        )),
    ];
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(COLOR_DIM)),
        Rect::new(x, y, width, 3),
    );
}
