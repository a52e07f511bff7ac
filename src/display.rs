//! Presentation surface
//!
//! The renderers only ever clear, append, show and hide. [`ShowsArea`] and
//! [`EpisodesArea`] capture exactly that, and [`Document`] is the in-memory
//! surface used by the terminal UI, the `page` command and the tests.

use serde::Serialize;

/// A rendered show card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowCard {
    pub show_id: i64,
    pub name: String,
    pub summary: String,
    pub image: String,
    /// HTML for the document surface
    pub markup: String,
}

/// A rendered episode line item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpisodeItem {
    pub episode_id: i64,
    pub name: String,
    pub season: i64,
    pub number: i64,
    /// HTML for the document surface
    pub markup: String,
}

/// Target for the show list
pub trait ShowsArea {
    fn clear_shows(&mut self);
    fn append_show(&mut self, card: ShowCard);
}

/// Target for the episode list and its visibility toggle
pub trait EpisodesArea {
    fn clear_episodes(&mut self);
    fn append_episode(&mut self, item: EpisodeItem);
    fn show_episodes(&mut self);
    fn hide_episodes(&mut self);
    fn episodes_visible(&self) -> bool;
}

/// In-memory document holding both display areas
///
/// The episode area starts hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    shows: Vec<ShowCard>,
    episodes: Vec<EpisodeItem>,
    episodes_visible: bool,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shows(&self) -> &[ShowCard] {
        &self.shows
    }

    pub fn episodes(&self) -> &[EpisodeItem] {
        &self.episodes
    }

    /// Render a standalone HTML page with the search form and both areas
    pub fn to_html(&self, query: &str) -> String {
        let shows: String = self.shows.iter().map(|c| c.markup.as_str()).collect();
        let episodes: String = self.episodes.iter().map(|i| i.markup.as_str()).collect();
        let episodes_style = if self.episodes_visible {
            ""
        } else {
            r#" style="display: none""#
        };

        format!(
            r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8">
  <title>TV Maze</title>
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@4.6.2/dist/css/bootstrap.min.css">
</head>
<body>
  <div class="container">
    <h1>TV Maze</h1>
    <form class="form-inline" id="search-form">
      <input class="form-control" id="search-query" value="{query}">
      <button class="btn btn-primary">Go!</button>
    </form>
    <div class="row mt-3" id="shows-list">{shows}</div>
    <section id="episodes-area"{episodes_style}>
      <h2>Episodes</h2>
      <ul id="episodes-list">{episodes}</ul>
    </section>
  </div>
</body>
</html>
"#,
            query = escape_html(query),
            shows = shows,
            episodes_style = episodes_style,
            episodes = episodes,
        )
    }
}

impl ShowsArea for Document {
    fn clear_shows(&mut self) {
        self.shows.clear();
    }

    fn append_show(&mut self, card: ShowCard) {
        self.shows.push(card);
    }
}

impl EpisodesArea for Document {
    fn clear_episodes(&mut self) {
        self.episodes.clear();
    }

    fn append_episode(&mut self, item: EpisodeItem) {
        self.episodes.push(item);
    }

    fn show_episodes(&mut self) {
        self.episodes_visible = true;
    }

    fn hide_episodes(&mut self) {
        self.episodes_visible = false;
    }

    fn episodes_visible(&self) -> bool {
        self.episodes_visible
    }
}

/// Escape text for interpolation into HTML content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
