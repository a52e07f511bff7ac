//! Data structures shared across ShowScout
//!
//! Organized by domain:
//! - **Shows**: search results from the TVmaze directory
//! - **Episodes**: episode lists scoped to a single show
//! - **Placeholder**: the sentinel record rendered whenever a fetch fails

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Placeholder Values
// =============================================================================

/// Identifier carried by every placeholder record
pub const PLACEHOLDER_ID: i64 = -1;

/// Name shown in place of a real show or episode name
pub const PLACEHOLDER_NAME: &str = "invalid episode";

/// Text shown where a summary would normally appear
pub const PLACEHOLDER_SUMMARY: &str =
    "You may have entered an invalid search term and/or no results were found";

/// Image used when a record carries no usable image link
pub const DEFAULT_IMAGE: &str = "https://tinyurl.com/tv-missing";

// =============================================================================
// Image Links
// =============================================================================

/// Image links attached to show and episode records
///
/// TVmaze sends `{"medium": "...", "original": "..."}` or `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageLinks {
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub original: Option<String>,
}

// =============================================================================
// Shows
// =============================================================================

/// A show as rendered in the show list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowSummary {
    pub id: i64,
    pub name: String,
    /// May contain HTML markup
    pub summary: String,
    /// Always non-empty: either a real image URL or [`DEFAULT_IMAGE`]
    pub image: String,
}

impl ShowSummary {
    /// Show-shaped projection of the placeholder record
    pub fn placeholder() -> Self {
        Self {
            id: PLACEHOLDER_ID,
            name: PLACEHOLDER_NAME.to_string(),
            summary: PLACEHOLDER_SUMMARY.to_string(),
            image: DEFAULT_IMAGE.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.id == PLACEHOLDER_ID
    }
}

impl fmt::Display for ShowSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [#{}]", self.name, self.id)
    }
}

// =============================================================================
// Episodes
// =============================================================================

/// An episode as rendered in the episode list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeSummary {
    pub id: i64,
    /// The show this episode was requested for
    pub show_id: i64,
    pub name: String,
    pub season: i64,
    pub number: i64,
    pub summary: String,
    pub image: String,
}

impl EpisodeSummary {
    /// Episode-shaped placeholder, scoped to the requested show
    ///
    /// Pass [`PLACEHOLDER_ID`] for the free-standing sentinel.
    pub fn placeholder(show_id: i64) -> Self {
        Self {
            id: PLACEHOLDER_ID,
            show_id,
            name: PLACEHOLDER_NAME.to_string(),
            season: 0,
            number: 0,
            summary: PLACEHOLDER_SUMMARY.to_string(),
            image: DEFAULT_IMAGE.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.id == PLACEHOLDER_ID
    }

    /// Short code like "S01E05"
    pub fn code(&self) -> String {
        format!("S{:02}E{:02}", self.season, self.number)
    }
}

impl fmt::Display for EpisodeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (season {}, number {})",
            self.name, self.season, self.number
        )
    }
}
