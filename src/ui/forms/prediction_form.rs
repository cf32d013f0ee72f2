//! Prediction form rendering with action panel and result

use super::field_renderer::{draw_field_group, draw_help_text, FIELD_GROUP_HEIGHT};
use crate::app::App;
use crate::state::{Form, FormButton};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the prediction form with action sidebar and result panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Form
            Constraint::Length(4), // Result
        ])
        .split(main_chunks[0]);

    draw_form(frame, left_chunks[0], app);
    draw_result(frame, left_chunks[1], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Draw the form fields
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let border_color = if form.is_buttons_row_active() {
        Color::DarkGray
    } else {
        Color::Cyan
    };

    let block = Block::default()
        .title(" Estimate Price ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_GROUP_HEIGHT), // Location
            Constraint::Length(FIELD_GROUP_HEIGHT), // BHK
            Constraint::Length(FIELD_GROUP_HEIGHT), // Bathrooms
            Constraint::Length(FIELD_GROUP_HEIGHT), // Total Sqft
            Constraint::Min(0),                     // spacer
            Constraint::Length(1),                  // Help
        ])
        .margin(1)
        .split(area);

    for (index, chunk) in chunks[..4].iter().enumerate() {
        if let Some(field) = form.get_field(index) {
            draw_field_group(frame, *chunk, field, form.active_field() == index);
        }
    }

    let hints: &[(&str, &str)] = if form.is_location_active() {
        &[("←/→", "location"), ("Tab", "next"), ("^S", "predict")]
    } else if form.is_buttons_row_active() {
        &[("↑/↓", "select"), ("Enter", "press"), ("Tab", "next")]
    } else {
        &[("Enter", "predict"), ("Tab", "next"), ("^U", "clear")]
    };
    draw_help_text(frame, chunks[5], hints);
}

/// Draw the latest prediction, or a hint when there is none
fn draw_result(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Result ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = match &app.state.prediction {
        Some(prediction) => {
            let listing = &prediction.listing;
            vec![
                Line::from(vec![
                    Span::raw("Estimated price: "),
                    Span::styled(
                        prediction.display_price(),
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!(
                        "{} BHK · {} bath · {} sqft · {}",
                        listing.bhk, listing.bath, listing.total_sqft, listing.location
                    ),
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        }
        None => vec![Line::from(Span::styled(
            "Fill in the form and press Enter to predict.",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let is_focused = form.is_buttons_row_active();

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Predict (primary)
            Constraint::Length(BUTTON_HEIGHT), // Reset
            Constraint::Min(0),                // remaining space
        ])
        .split(inner_area);

    for (chunk, button) in button_chunks.iter().zip(FormButton::ALL) {
        let accent = match button {
            FormButton::Predict => Some(Color::Green),
            FormButton::Reset => None,
        };
        render_action_button(
            frame,
            *chunk,
            button.label(),
            is_focused && form.selected_button == button,
            true,
            accent,
        );
    }
}
