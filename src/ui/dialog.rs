//! Modal error dialog

use super::layout::centered_rect;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    let area = frame.area();
    let width = 60u16.min(area.width.saturating_sub(4)).max(20);
    // message body height at the chosen width, plus title, hint, and borders
    let inner_width = width.saturating_sub(4) as usize;
    let message_lines: u16 = error_message
        .lines()
        .map(|line| (line.chars().count().max(1)).div_ceil(inner_width.max(1)) as u16)
        .sum();
    let height = (message_lines + 6).min(area.height);

    let dialog_area = centered_rect(width, height, area);
    frame.render_widget(Clear, dialog_area);

    let hint = Line::from(vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" or "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to dismiss"),
    ]);

    let mut content = vec![Line::from(""), Line::from(error_message.to_string())];
    content.push(Line::from(""));
    content.push(hint);

    let dialog = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Error ")
                .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .style(Style::default().bg(Color::Black)),
        );
    frame.render_widget(dialog, dialog_area);
}
