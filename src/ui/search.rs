//! Header with logo and search box

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::Theme;
use crate::app::{App, InputMode};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16), // Logo
            Constraint::Min(1),     // Search box
        ])
        .split(area);

    let logo = Paragraph::new(Line::from(vec![
        Span::styled(
            "SHOW",
            ratatui::style::Style::default()
                .fg(Theme::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "SCOUT",
            ratatui::style::Style::default()
                .fg(Theme::SECONDARY)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border()),
    );
    frame.render_widget(logo, header_chunks[0]);

    let editing = app.input_mode == InputMode::Editing;
    let search_text = search_line(app);

    let mut title = vec![Span::styled(" SEARCH ", Theme::title())];
    if let Some(msg) = app.search.loading.message() {
        title.push(Span::styled(format!("⟳ {} ", msg), Theme::loading()));
    }

    let search_box = Paragraph::new(search_text)
        .style(if editing {
            Theme::input().fg(Theme::PRIMARY)
        } else {
            Theme::input()
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(if editing {
                    Theme::border_focused()
                } else {
                    Theme::border()
                })
                .title(Line::from(title)),
        );
    frame.render_widget(search_box, header_chunks[1]);
}

/// Text of the search box, with a cursor bar while editing
pub fn search_line(app: &App) -> String {
    let query = &app.search.query;
    if app.input_mode == InputMode::Editing {
        let cursor = app.search.cursor.min(query.len());
        let (before, after) = query.split_at(cursor);
        format!("⌕ {}│{}", before, after)
    } else if query.is_empty() {
        "⌕ Type / to search for a show...".to_string()
    } else {
        format!("⌕ {}", query)
    }
}
