//! Style-detail screen: the selected style, its average rating, the review
//! form, and the review list.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::components::{
    render_error_line, render_input_field, render_star_picker, star_line, InputFieldConfig,
};
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

pub fn render_detail_screen(frame: &mut Frame, app: &mut App) {
    // Invariant upheld by the controller; render nothing in the window
    // between a stray event and the next transition.
    let Some(style) = app.selected.clone() else {
        return;
    };

    let area = frame.area();
    let [back_area, header_area, rating_area, form_area, reviews_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Length(9),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new("[Esc] Back  [Ctrl+L] Logout  [Ctrl+C] Quit")
            .style(Style::default().fg(COLOR_DIM)),
        back_area,
    );

    let header = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", style.name),
            Style::default().fg(COLOR_HEADER),
        ));
    let header_body = vec![
        Line::from(style.description.clone()),
        Line::from(Span::styled(
            style.image_url.clone(),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(header_body).block(header), header_area);

    render_average(frame, rating_area, app.avg_rating);
    render_form(frame, form_area, app);
    render_reviews(frame, reviews_area, app);
}

fn render_average(frame: &mut Frame, area: Rect, avg_rating: f64) {
    let mut line = star_line(avg_rating);
    let label = if avg_rating > 0.0 {
        format!(" {:.2}", avg_rating)
    } else {
        " No ratings yet".to_string()
    };
    line.push_span(Span::styled(label, Style::default().fg(COLOR_DIM)));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_form(frame: &mut Frame, area: Rect, app: &mut App) {
    if app.user.is_none() {
        frame.render_widget(
            Paragraph::new("Please sign in to post a review.")
                .style(Style::default().fg(COLOR_DIM)),
            area,
        );
        return;
    }

    let picker_area = Rect::new(area.x, area.y, area.width.min(10), 1);
    let committed = app.draft_rating;
    render_star_picker(frame, picker_area, &mut app.star_picker, committed);

    let comment_area = Rect::new(area.x, area.y + 1, area.width, 4);
    render_input_field(
        frame,
        comment_area,
        &InputFieldConfig::new("Write review...", &app.comment).focused(true),
    );

    let hint_area = Rect::new(area.x, area.y + 5, area.width, 1);
    let hint = if app.submit_in_flight {
        "Submitting..."
    } else {
        "[←/→ or click] Rating  [Enter] Submit"
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(COLOR_DIM)),
        hint_area,
    );

    if let Some(error) = &app.error {
        render_error_line(frame, Rect::new(area.x, area.y + 7, area.width, 1), error);
    }
}

fn render_reviews(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(" Reviews ", Style::default().fg(COLOR_HEADER)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.reviews.is_empty() {
        frame.render_widget(
            Paragraph::new("No reviews yet").style(Style::default().fg(COLOR_DIM)),
            inner,
        );
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for review in &app.reviews {
        let mut head = Line::from(vec![Span::styled(
            format!("{}  ", review.author()),
            Style::default().fg(COLOR_HEADER),
        )]);
        for span in star_line(f64::from(review.rating)).spans {
            head.push_span(span);
        }
        lines.push(head);
        lines.push(Line::from(review.comment.clone()));
        lines.push(Line::from(Span::styled(
            review
                .created_at
                .with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            Style::default().fg(COLOR_DIM),
        )));
        lines.push(Line::default());
    }
    frame.render_widget(Paragraph::new(lines), inner);
}
