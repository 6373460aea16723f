//! Podcast catalog list view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Draw the podcast catalog
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Podcasts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.state.podcasts.is_empty() {
        let content = Paragraph::new("No podcasts found.\nPress 'r' to refresh.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    let items: Vec<ListItem> = app
        .state
        .podcasts
        .iter()
        .enumerate()
        .map(|(idx, podcast)| {
            let is_selected = idx == app.state.selected_index;
            let prefix = if is_selected { "▸ " } else { "  " };

            let title_style = if is_selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let rating = format!("★ {:.1}", podcast.rating);
            let lines = vec![
                Line::from(vec![
                    Span::raw(prefix),
                    Span::styled(podcast.title.clone(), title_style),
                    Span::raw("  "),
                    Span::styled(
                        format!("[{}]", podcast.category),
                        Style::default().fg(Color::Magenta),
                    ),
                    Span::raw("  "),
                    Span::styled(rating, Style::default().fg(Color::Yellow)),
                ]),
                Line::from(Span::styled(
                    format!("  {}", podcast.description),
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(block);
    let mut list_state = ListState::default().with_selected(Some(app.state.selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}
