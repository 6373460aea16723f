//! Login and create-account form views

use super::layout::centered_rect;
use crate::app::App;
use crate::state::{Form, FormField};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows per field: a bordered input box plus its error line
const FIELD_HEIGHT: u16 = 4;
const FORM_WIDTH: u16 = 52;

/// Draw the login form
pub fn draw_login(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.login_form;
    // 2 fields + alert line + button + borders
    let height = 2 * FIELD_HEIGHT + 1 + 3 + 2;
    let form_area = centered_rect(FORM_WIDTH, height, area);

    let block = Block::default()
        .title(" Log In ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT), // email
            Constraint::Length(FIELD_HEIGHT), // password
            Constraint::Length(1),            // form alert
            Constraint::Length(3),            // submit button
        ])
        .split(inner);

    draw_field(frame, chunks[0], &form.email, form.active_field() == 0);
    draw_field(frame, chunks[1], &form.password, form.active_field() == 1);
    draw_form_alert(frame, chunks[2], form.form_error.as_deref());
    draw_submit_button(frame, chunks[3], "Log In", form.submitting);
}

/// Draw the create-account form
pub fn draw_create_account(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.create_account_form;
    // 4 fields + alert line + button + borders
    let height = 4 * FIELD_HEIGHT + 1 + 3 + 2;
    let form_area = centered_rect(FORM_WIDTH, height, area);

    let block = Block::default()
        .title(" Create Account ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT), // email
            Constraint::Length(FIELD_HEIGHT), // password
            Constraint::Length(FIELD_HEIGHT), // confirm
            Constraint::Length(FIELD_HEIGHT), // role
            Constraint::Length(1),            // form alert
            Constraint::Length(3),            // submit button
        ])
        .split(inner);

    for index in 0..form.field_count() {
        if let Some(field) = form.get_field(index) {
            draw_field(frame, chunks[index], field, form.active_field() == index);
        }
    }
    draw_form_alert(frame, chunks[4], form.form_error.as_deref());
    draw_submit_button(frame, chunks[5], "Create Account", form.submitting);
}

/// Draw one form field: a bordered input box with its error line beneath
fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };
    let content = Paragraph::new(Line::from(vec![
        Span::raw(field.display_value()),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]))
    .block(
        Block::default()
            .title(format!(" {} ", field.label))
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(content, chunks[0]);

    // Field-level error, shown near its input
    if let Some(error) = &field.error {
        let message = Paragraph::new(Line::from(Span::styled(
            format!("✗ {error}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(message, chunks[1]);
    }
}

/// Draw the form-level alert slot (application/transport failures)
fn draw_form_alert(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let alert = Paragraph::new(Line::from(Span::styled(
            format!("⚠ {message}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(alert, area);
    }
}

/// Draw the submit control, disabled while a submission is in flight
fn draw_submit_button(frame: &mut Frame, area: Rect, label: &str, submitting: bool) {
    let (text, style) = if submitting {
        (
            "Submitting...".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            label.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    };

    let button = Paragraph::new(Line::from(Span::styled(text, style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(button, area);
}
