//! API clients for external services
//!
//! - TVmaze: show search and episode lists

pub mod tvmaze;

pub use tvmaze::{TvMazeClient, TvMazeError};
