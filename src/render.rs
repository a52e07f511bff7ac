//! Show and episode renderers
//!
//! Both renderers fully replace the prior content of their area. Activation
//! of a show card is not wired here: [`render_shows`] hands back one
//! [`EpisodeAction`] per card and the controller dispatches them.

use crate::display::{escape_html, EpisodeItem, EpisodesArea, ShowCard, ShowsArea};
use crate::models::{EpisodeSummary, ShowSummary};

/// "View episodes" action attached to a rendered show card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeAction {
    pub show_id: i64,
}

/// Replace the show list with one card per show
pub fn render_shows<A: ShowsArea + ?Sized>(shows: &[ShowSummary], area: &mut A) -> Vec<EpisodeAction> {
    area.clear_shows();

    let mut actions = Vec::with_capacity(shows.len());
    for show in shows {
        area.append_show(ShowCard {
            show_id: show.id,
            name: show.name.clone(),
            summary: show.summary.clone(),
            image: show.image.clone(),
            markup: show_card_markup(show),
        });
        actions.push(EpisodeAction { show_id: show.id });
    }
    actions
}

/// Replace the episode list with one line item per episode
pub fn render_episodes<A: EpisodesArea + ?Sized>(episodes: &[EpisodeSummary], area: &mut A) {
    area.clear_episodes();

    for episode in episodes {
        area.append_episode(EpisodeItem {
            episode_id: episode.id,
            name: episode.name.clone(),
            season: episode.season,
            number: episode.number,
            markup: episode_item_markup(episode),
        });
    }
}

// The summary is already HTML from the directory service and goes in as is.
fn show_card_markup(show: &ShowSummary) -> String {
    format!(
        r#"<div class="col-md-6 col-lg-3 Show" data-show-id="{id}">
  <div class="card" data-show-id="{id}">
    <img src="{image}" class="card-img-top" alt="{name}">
    <div class="card-body">
      <h5 class="card-title">{name}</h5>
      <div class="card-text limit-text">
        {summary}
      </div>
      <a id="show_{id}" class="btn btn-primary text-white" href="">Episodes</a>
    </div>
  </div>
</div>
"#,
        id = show.id,
        image = escape_html(&show.image),
        name = escape_html(&show.name),
        summary = show.summary,
    )
}

fn episode_item_markup(episode: &EpisodeSummary) -> String {
    format!(
        r#"<li id="episode_{}">{} (season {}, number {})</li>"#,
        episode.id,
        escape_html(&episode.name),
        episode.season,
        episode.number
    )
}
