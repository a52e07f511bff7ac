//! Integration tests for ShowScout
//!
//! Tests are organized by component:
//! - tvmaze_test: TVmaze client tests (search, episodes, placeholders)
//! - app_test: End-to-end flow tests (Search -> Show cards -> Episodes)
//! - cli_test: Command handlers and exit codes
//! - ui_test: Terminal drawing tests

// Note: Each test file is a separate integration test crate
// Tests are run individually by cargo, not via mod.rs
