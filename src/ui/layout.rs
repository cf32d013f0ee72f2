//! Layout components (content area, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        " House Price ",
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    if app.state.form.has_errors() {
        spans.push(Span::styled(" ● ", Style::default().fg(Color::Red)));
    } else {
        spans.push(Span::styled(" ● ", Style::default().fg(Color::Green)));
    }

    match &app.status_message {
        Some(msg) => spans.push(Span::styled(msg, Style::default().fg(Color::White))),
        None => spans.push(Span::styled(
            "Tab: next field | Enter/^S: predict | Esc: quit",
            Style::default().fg(Color::Gray),
        )),
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);
}
