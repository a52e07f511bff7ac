//! Episode list panel

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use super::Theme;
use crate::app::App;
use crate::display::{Document, EpisodeItem};
use crate::models::PLACEHOLDER_ID;

pub fn render(frame: &mut Frame, area: Rect, app: &mut App, doc: &Document) {
    let items = doc.episodes();

    let title = match app.active_show {
        Some(id) => format!(" EPISODES #{} ({}) ", id, items.len()),
        None => format!(" EPISODES ({}) ", items.len()),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_focused())
        .title(Span::styled(title, Theme::title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.episodes_loading.is_loading() {
        let loading = Paragraph::new("⟳ Fetching episodes...")
            .style(Theme::loading())
            .alignment(Alignment::Center);
        frame.render_widget(loading, inner);
        return;
    }

    let height = inner.height as usize;
    app.episode_list.scroll_into_view(height);

    let rows: Vec<ListItem> = items
        .iter()
        .enumerate()
        .skip(app.episode_list.offset)
        .take(height)
        .map(|(i, item)| episode_row(item, i == app.episode_list.selected))
        .collect();
    frame.render_widget(List::new(rows).style(Theme::text()), inner);
}

fn episode_row(item: &EpisodeItem, is_selected: bool) -> ListItem<'static> {
    let name_style = if item.episode_id == PLACEHOLDER_ID {
        Theme::missing()
    } else if is_selected {
        Theme::highlighted()
    } else {
        Theme::text()
    };

    ListItem::new(Line::from(vec![
        Span::styled(
            format!("S{:02}E{:02} ", item.season, item.number),
            Theme::episode_code(),
        ),
        Span::styled(item.name.clone(), name_style),
        Span::styled(
            format!(" (season {}, number {})", item.season, item.number),
            Theme::dimmed(),
        ),
    ]))
}
