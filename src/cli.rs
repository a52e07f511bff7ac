//! CLI - Command Line Interface for ShowScout
//!
//! Every TUI action is scriptable. Output is JSON when `--json` is given or
//! stdout is not a terminal.
//!
//! # Examples
//!
//! ```bash
//! showscout search "batman" --json
//! showscout episodes 975
//! showscout page "batman" --first > batman.html
//! ```

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Remote fetch failed (only reported with --strict)
    NetworkError = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// ShowScout - search the TVmaze show directory and browse episodes
///
/// Run without arguments to launch the interactive TUI.
#[derive(Parser, Debug)]
#[command(
    name = "showscout",
    version,
    about = "Search the TVmaze show directory and browse episode lists",
    long_about = "Search TV shows by name and drill into their episode lists.\n\n\
                  Run without arguments to launch the interactive TUI.\n\
                  Use subcommands for scripting.",
    after_help = "EXAMPLES:\n\
                  showscout                          Launch interactive TUI\n\
                  showscout search \"batman\"          Search for shows\n\
                  showscout episodes 975             List episodes of a show\n\
                  showscout page batman --first      Render an HTML page"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Override the TVmaze API base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search for shows by name
    #[command(visible_alias = "s")]
    Search(SearchCmd),

    /// List the episodes of a show
    #[command(visible_alias = "e")]
    Episodes(EpisodesCmd),

    /// Render search results (and optionally episodes) as an HTML page
    #[command(visible_alias = "p")]
    Page(PageCmd),
}

/// Search for shows by query
#[derive(Args, Debug)]
pub struct SearchCmd {
    /// Search query (show name, keywords)
    #[arg(required = true)]
    pub query: String,

    /// Maximum number of results (defaults to config value)
    #[arg(long, short = 'l')]
    pub limit: Option<usize>,

    /// Fail with a network error instead of printing the placeholder
    #[arg(long)]
    pub strict: bool,
}

/// List episodes for a show id
#[derive(Args, Debug)]
pub struct EpisodesCmd {
    /// TVmaze show id (from `search` output)
    #[arg(required = true, allow_negative_numbers = true)]
    pub show_id: i64,

    /// Only list episodes of this season
    #[arg(long, short = 's')]
    pub season: Option<i64>,

    /// Fail with a network error instead of printing the placeholder
    #[arg(long)]
    pub strict: bool,
}

/// Render a standalone HTML page
#[derive(Args, Debug)]
pub struct PageCmd {
    /// Search query
    #[arg(required = true)]
    pub query: String,

    /// Also open the episodes of this show id (must be among the results)
    #[arg(long, short = 'e', allow_negative_numbers = true, conflicts_with = "first")]
    pub episodes: Option<i64>,

    /// Also open the episodes of the first result
    #[arg(long)]
    pub first: bool,

    /// Write the page to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }
}

impl JsonOutput<()> {
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> Self {
        Self {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

/// Output formatter honoring --json and --quiet
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data, as JSON or as the given human-readable lines
    pub fn print<T: Serialize>(&self, data: &T, human: impl FnOnce(&T) -> String) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(&JsonOutput::success(data))?);
        } else {
            println!("{}", human(data));
        }
        Ok(())
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            if let Ok(json) = serde_json::to_string_pretty(&JsonOutput::error_msg(&msg, code)) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet and JSON mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_is_tui_mode() {
        let cli = Cli::parse_from(["showscout"]);
        assert!(!cli.is_cli_mode());
    }

    #[test]
    fn test_search_command() {
        let cli = Cli::parse_from(["showscout", "search", "batman", "-l", "3"]);
        let Some(Command::Search(cmd)) = cli.command else {
            panic!("Expected Search command");
        };
        assert_eq!(cmd.query, "batman");
        assert_eq!(cmd.limit, Some(3));
        assert!(!cmd.strict);
    }

    #[test]
    fn test_episodes_accepts_negative_id() {
        let cli = Cli::parse_from(["showscout", "episodes", "-1"]);
        let Some(Command::Episodes(cmd)) = cli.command else {
            panic!("Expected Episodes command");
        };
        assert_eq!(cmd.show_id, -1);
    }

    #[test]
    fn test_page_flags_conflict() {
        let result = Cli::try_parse_from(["showscout", "page", "x", "--first", "--episodes", "5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "showscout",
            "--json",
            "--quiet",
            "--base-url",
            "http://localhost:8080",
            "episodes",
            "975",
        ]);
        assert!(cli.json);
        assert!(cli.quiet);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn test_json_error_shape() {
        let out = JsonOutput::error_msg("boom", ExitCode::NetworkError);
        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(value["error"], "boom");
        assert_eq!(value["exit_code"], 3);
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_json_success_omits_exit_code() {
        let value = serde_json::to_value(JsonOutput::success(vec![1, 2])).unwrap();
        assert_eq!(value["data"], serde_json::json!([1, 2]));
        assert!(value.get("exit_code").is_none());
    }
}
