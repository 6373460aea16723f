//! Podcast detail and episode list view

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Draw the episodes view for the currently opened podcast
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // podcast detail
            Constraint::Min(0),    // episode list
        ])
        .split(area);

    draw_podcast_detail(frame, chunks[0], app);
    draw_episode_list(frame, chunks[1], app);
}

fn draw_podcast_detail(frame: &mut Frame, area: Rect, app: &App) {
    let Some(podcast) = &app.state.current_podcast else {
        let content = Paragraph::new("No podcast selected.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(content, area);
        return;
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                podcast.title.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", podcast.category),
                Style::default().fg(Color::Magenta),
            ),
            Span::raw("  "),
            Span::styled(
                format!("★ {:.1}", podcast.rating),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(Span::styled(
            format!("art: {}", podcast.thumbnail_url),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(podcast.description.clone()),
    ];

    let content = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Podcast ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(content, area);
}

fn draw_episode_list(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" Episodes ({}) ", app.state.episodes.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.state.episodes.is_empty() {
        let content = Paragraph::new("No episodes yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    let items: Vec<ListItem> = app
        .state
        .episodes
        .iter()
        .enumerate()
        .map(|(idx, episode)| {
            let is_selected = idx == app.state.selected_index;
            let prefix = if is_selected { "▸ " } else { "  " };

            let mut header = vec![
                Span::raw(prefix),
                Span::styled(
                    episode.title.clone(),
                    if is_selected {
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    },
                ),
            ];
            if let Some(created_at) = episode.created_at {
                header.push(Span::raw("  "));
                header.push(Span::styled(
                    created_at.format("%Y-%m-%d").to_string(),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            let lines = vec![
                Line::from(header),
                Line::from(Span::styled(
                    format!("  {}", episode.description),
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
