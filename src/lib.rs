//! ShowScout - search the TVmaze show directory and browse episode lists
//!
//! A query goes to the show search, the results are rendered as show cards,
//! and activating a card fetches and renders that show's episodes.
//!
//! # Modules
//!
//! - `models` - Show and episode records, placeholder values
//! - `image` - Image URL selection with fallback
//! - `api` - TVmaze client
//! - `display` - Presentation surface (show and episode areas)
//! - `render` - Show card and episode line renderers
//! - `app` - Interaction controller and request sequencing
//! - `ui` - Terminal drawing
//! - `cli` / `commands` - Scriptable command line
//! - `config` - Config file and overrides

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod image;
pub mod models;
pub mod render;
pub mod ui;

// Re-export commonly used types
pub use api::{TvMazeClient, TvMazeError};
pub use app::{App, AppState, Request, Response};
pub use config::Config;
pub use display::{Document, EpisodesArea, ShowsArea};
pub use image::resolve_image;
pub use models::{EpisodeSummary, ImageLinks, ShowSummary};
pub use render::{render_episodes, render_shows, EpisodeAction};
