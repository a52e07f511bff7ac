//! Terminal UI components
//!
//! Draws the [`Document`] produced by the renderers: the search box on top,
//! show cards on the left and, while episodes are showing, the episode list
//! on the right.

pub mod episodes;
pub mod search;
pub mod shows;
pub mod theme;

pub use theme::Theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use crate::app::{App, AppState, InputMode};
use crate::display::{Document, EpisodesArea};

/// Draw the whole screen
pub fn draw(frame: &mut Frame, app: &mut App, doc: &Document) {
    let area = frame.area();

    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(ratatui::style::Style::default().bg(Theme::BACKGROUND)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    search::render(frame, chunks[0], app);
    render_content(frame, chunks[1], app, doc);
    render_status_bar(frame, chunks[2], app);
}

fn render_content(frame: &mut Frame, area: Rect, app: &mut App, doc: &Document) {
    if app.state == AppState::ShowingEpisodes && doc.episodes_visible() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);
        shows::render(frame, columns[0], app, doc);
        episodes::render(frame, columns[1], app, doc);
    } else {
        shows::render(frame, area, app, doc);
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mode_indicator = match app.input_mode {
        InputMode::Normal => Span::styled(
            " BROWSE ",
            ratatui::style::Style::default()
                .fg(Theme::BACKGROUND)
                .bg(Theme::PRIMARY),
        ),
        InputMode::Editing => Span::styled(
            " SEARCH ",
            ratatui::style::Style::default()
                .fg(Theme::BACKGROUND)
                .bg(Theme::SECONDARY),
        ),
    };

    let bindings: &[(&str, &str)] = match app.input_mode {
        InputMode::Normal => &[
            ("q", "quit"),
            ("/", "search"),
            ("↑↓", "select"),
            ("↵", "episodes"),
            ("PgUp/PgDn", "scroll episodes"),
        ],
        InputMode::Editing => &[("↵", "submit"), ("ESC", "cancel")],
    };

    let mut spans = vec![mode_indicator];
    spans.extend(help_spans(bindings));
    frame.render_widget(Paragraph::new(Line::from(spans)).style(Theme::status_bar()), area);
}

/// " key:action " pairs with the key highlighted
fn help_spans(bindings: &[(&str, &str)]) -> Vec<Span<'static>> {
    bindings
        .iter()
        .flat_map(|&(key, action)| {
            [
                Span::styled(format!(" {}", key), Theme::keybind()),
                Span::styled(format!(":{} ", action), Theme::dimmed()),
            ]
        })
        .collect()
}

/// Strip markup from a summary for terminal display
pub fn plain_text(html: &str) -> String {
    nanohtml2text::html2text(html).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_spans_style_keys() {
        let spans = help_spans(&[("q", "quit"), ("/", "search")]);
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0].content, " q");
        assert_eq!(spans[0].style, Theme::keybind());
        assert_eq!(spans[1].content, ":quit ");
        assert_eq!(spans[3].content, ":search ");
    }

    #[test]
    fn test_plain_text_strips_tags() {
        assert_eq!(plain_text("<p>A bold move</p>"), "A bold move");
        assert_eq!(plain_text(""), "");
    }
}
