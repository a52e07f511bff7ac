//! Image selection for show and episode records
//!
//! First match wins: medium, then original, then the fallback.
//! Empty links count as absent.

use crate::models::ImageLinks;

/// Pick a display image URL for a record
pub fn resolve_image(image: Option<&ImageLinks>, fallback: &str) -> String {
    let Some(links) = image else {
        return fallback.to_string();
    };

    non_empty(links.medium.as_deref())
        .or_else(|| non_empty(links.original.as_deref()))
        .unwrap_or(fallback)
        .to_string()
}

fn non_empty(link: Option<&str>) -> Option<&str> {
    link.filter(|s| !s.is_empty())
}
