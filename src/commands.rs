//! CLI Command Handlers
//!
//! Each handler takes CLI args, the shared client and Output, returns ExitCode.

use std::fmt::Write as _;

use crate::api::TvMazeClient;
use crate::app::App;
use crate::cli::{EpisodesCmd, ExitCode, Output, PageCmd, SearchCmd};
use crate::config::Config;
use crate::display::Document;
use crate::models::{EpisodeSummary, ShowSummary};
use crate::ui::plain_text;

// =============================================================================
// Search Command
// =============================================================================

pub async fn search_cmd(cmd: SearchCmd, client: &TvMazeClient, config: &Config, output: &Output) -> ExitCode {
    if cmd.query.is_empty() {
        return output.error("Search query must not be empty", ExitCode::InvalidArgs);
    }
    if cmd.limit == Some(0) {
        return output.error("--limit must be at least 1", ExitCode::InvalidArgs);
    }

    output.info(format!("Searching for: {}", cmd.query));

    let mut shows = if cmd.strict {
        match client.try_search_shows(&cmd.query).await {
            Ok(shows) => shows,
            Err(e) => return output.error(format!("Search failed: {}", e), ExitCode::NetworkError),
        }
    } else {
        client.search_shows(&cmd.query).await
    };

    shows.truncate(cmd.limit.unwrap_or_else(|| config.result_limit()));
    if shows.iter().all(ShowSummary::is_placeholder) {
        output.info("No shows found");
    }

    if let Err(e) = output.print(&shows, |shows| format_shows(shows)) {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}

// =============================================================================
// Episodes Command
// =============================================================================

pub async fn episodes_cmd(cmd: EpisodesCmd, client: &TvMazeClient, output: &Output) -> ExitCode {
    output.info(format!("Fetching episodes for show #{}", cmd.show_id));

    let episodes = if cmd.strict {
        match client.try_get_episodes(cmd.show_id).await {
            Ok(episodes) => episodes,
            Err(e) => {
                return output.error(format!("Episode fetch failed: {}", e), ExitCode::NetworkError)
            }
        }
    } else {
        client.get_episodes(cmd.show_id).await
    };

    let episodes = filter_season(episodes, cmd.show_id, cmd.season);
    if episodes.iter().all(EpisodeSummary::is_placeholder) {
        output.info("No episodes found");
    }

    if let Err(e) = output.print(&episodes, |episodes| format_episodes(episodes)) {
        return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
    }
    ExitCode::Success
}

/// Keep only episodes of `season`; an emptied list collapses to the placeholder
pub fn filter_season(
    mut episodes: Vec<EpisodeSummary>,
    show_id: i64,
    season: Option<i64>,
) -> Vec<EpisodeSummary> {
    if let Some(season) = season {
        episodes.retain(|e| e.season == season);
    }
    if episodes.is_empty() {
        episodes.push(EpisodeSummary::placeholder(show_id));
    }
    episodes
}

// =============================================================================
// Page Command
// =============================================================================

/// Drive the controller exactly as the interactive page would, then dump
/// the document as HTML.
pub async fn page_cmd(cmd: PageCmd, client: &TvMazeClient, output: &Output) -> ExitCode {
    if cmd.query.is_empty() {
        return output.error("Search query must not be empty", ExitCode::InvalidArgs);
    }

    let mut app = App::new();
    let mut doc = Document::new();

    output.info(format!("Searching for: {}", cmd.query));
    app.search(client, &mut doc, &cmd.query).await;

    let show_id = if cmd.first {
        app.actions.first().map(|a| a.show_id)
    } else {
        cmd.episodes
    };

    if let Some(show_id) = show_id {
        output.info(format!("Fetching episodes for show #{}", show_id));
        if !app.open_episodes(client, &mut doc, show_id).await {
            return output.error(
                format!("Show #{} is not among the search results", show_id),
                ExitCode::InvalidArgs,
            );
        }
    }

    let html = doc.to_html(&cmd.query);
    match cmd.output {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, html) {
                return output.error(format!("Failed to write {}: {}", path.display(), e), ExitCode::Error);
            }
            output.info(format!("Wrote {}", path.display()));
        }
        None => println!("{}", html),
    }
    ExitCode::Success
}

// =============================================================================
// Text Formatting
// =============================================================================

/// One block per show: name and id, then the plain-text summary
pub fn format_shows(shows: &[ShowSummary]) -> String {
    let mut out = String::new();
    for show in shows {
        let _ = writeln!(out, "{:>7}  {}", show.id, show.name);
        let summary = plain_text(&show.summary);
        if !summary.is_empty() {
            let _ = writeln!(out, "         {}", summary);
        }
    }
    out.trim_end().to_string()
}

/// One line per episode: code, name, season and number
pub fn format_episodes(episodes: &[EpisodeSummary]) -> String {
    episodes
        .iter()
        .map(|e| format!("{}  {}", e.code(), e))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_shows_strips_markup() {
        let shows = vec![ShowSummary {
            id: 975,
            name: "Batman".into(),
            summary: "<p>The Caped Crusader</p>".into(),
            image: "img.jpg".into(),
        }];
        let text = format_shows(&shows);
        assert!(text.contains("975  Batman"));
        assert!(text.contains("The Caped Crusader"));
        assert!(!text.contains("<p>"));
    }

    fn episode(id: i64, season: i64) -> EpisodeSummary {
        EpisodeSummary {
            id,
            season,
            number: id,
            ..EpisodeSummary::placeholder(975)
        }
    }

    #[test]
    fn test_filter_season_keeps_matching() {
        let episodes = vec![episode(1, 1), episode(2, 2), episode(3, 2)];
        let kept = filter_season(episodes, 975, Some(2));
        assert_eq!(kept.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_filter_season_no_match_gives_placeholder() {
        let kept = filter_season(vec![episode(1, 1)], 975, Some(9));
        assert_eq!(kept, vec![EpisodeSummary::placeholder(975)]);
    }

    #[test]
    fn test_filter_season_without_season_is_noop() {
        let episodes = vec![episode(1, 1), episode(2, 2)];
        assert_eq!(filter_season(episodes.clone(), 975, None), episodes);
    }

    #[test]
    fn test_format_episodes_placeholder() {
        let text = format_episodes(&[EpisodeSummary::placeholder(1)]);
        assert_eq!(text, "S00E00  invalid episode (season 0, number 0)");
    }
}
