//! Show list panel
//!
//! Names of the rendered show cards, with the selected card's summary below.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::{plain_text, Theme};
use crate::app::App;
use crate::display::{Document, ShowCard};
use crate::models::PLACEHOLDER_ID;

pub fn render(frame: &mut Frame, area: Rect, app: &mut App, doc: &Document) {
    let cards = doc.shows();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(format!(" SHOWS ({}) ", cards.len()), Theme::title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if cards.is_empty() {
        let empty = Paragraph::new(if app.search.loading.is_loading() {
            "⟳ Searching..."
        } else {
            "Press / and type the name of a show"
        })
        .style(Theme::dimmed())
        .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(7)])
        .split(inner);

    let list_height = chunks[0].height as usize;
    app.show_list.scroll_into_view(list_height);

    let items: Vec<ListItem> = cards
        .iter()
        .enumerate()
        .skip(app.show_list.offset)
        .take(list_height)
        .map(|(i, card)| show_row(card, i == app.show_list.selected))
        .collect();
    frame.render_widget(List::new(items).style(Theme::text()), chunks[0]);

    if let Some(card) = cards.get(app.show_list.selected) {
        render_summary(frame, chunks[1], card);
    }
}

fn show_row(card: &ShowCard, is_selected: bool) -> ListItem<'static> {
    let marker = if is_selected { "▸ " } else { "  " };
    let name_style = if card.show_id == PLACEHOLDER_ID {
        Theme::missing()
    } else if is_selected {
        Theme::highlighted()
    } else {
        Theme::text()
    };

    ListItem::new(Line::from(vec![
        Span::styled(marker, Theme::title()),
        Span::styled(card.name.clone(), name_style),
        Span::styled(format!("  #{}", card.show_id), Theme::dimmed()),
    ]))
}

fn render_summary(frame: &mut Frame, area: Rect, card: &ShowCard) {
    let summary = plain_text(&card.summary);
    let mut lines: Vec<Line> = if summary.is_empty() {
        vec![Line::from(Span::styled("No summary available", Theme::dimmed()))]
    } else {
        summary
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| Line::from(Span::styled(l.to_string(), Theme::text())))
            .collect()
    };
    lines.push(Line::from(Span::styled(card.image.clone(), Theme::dimmed())));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Theme::border())
                .title(Span::styled(" SUMMARY ", Theme::title())),
        );
    frame.render_widget(paragraph, area);
}
