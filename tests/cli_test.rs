//! CLI Command Tests
//!
//! Command handlers against a mocked TVmaze API. Covers exit codes,
//! strict mode and the HTML page output.

use clap::Parser;
use mockito::{Matcher, Server};
use showscout::cli::{Cli, Command, EpisodesCmd, ExitCode, Output, PageCmd, SearchCmd};
use showscout::commands;
use showscout::{Config, TvMazeClient};

const OUTPUT: Output = Output {
    json: true,
    quiet: true,
};

fn search_body() -> &'static str {
    r#"[
        {"score": 0.9, "show": {"id": 975, "name": "Batman", "summary": "<p>Holy camp.</p>", "image": null}},
        {"score": 0.5, "show": {"id": 1855, "name": "Batman Beyond", "summary": null, "image": null}}
    ]"#
}

fn search(query: &str) -> SearchCmd {
    SearchCmd {
        query: query.to_string(),
        limit: None,
        strict: false,
    }
}

fn page(query: &str) -> PageCmd {
    PageCmd {
        query: query.to_string(),
        episodes: None,
        first: false,
        output: None,
    }
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_empty_query_is_invalid() {
    let client = TvMazeClient::with_base_url("http://127.0.0.1:1");
    let code = commands::search_cmd(search(""), &client, &Config::default(), &OUTPUT).await;
    assert_eq!(code, ExitCode::InvalidArgs);
}

#[tokio::test]
async fn test_search_zero_limit_is_invalid() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/search/shows")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let cli = Cli::parse_from(["showscout", "search", "batman", "--limit", "0"]);
    let Some(Command::Search(cmd)) = cli.command else {
        panic!("Expected Search command");
    };

    let client = TvMazeClient::with_base_url(server.url());
    let code = commands::search_cmd(cmd, &client, &Config::default(), &OUTPUT).await;

    assert_eq!(code, ExitCode::InvalidArgs);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_failure_prints_placeholder_by_default() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/search/shows")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let client = TvMazeClient::with_base_url(server.url());
    let code = commands::search_cmd(search("batman"), &client, &Config::default(), &OUTPUT).await;

    assert_eq!(code, ExitCode::Success);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_failure_with_strict_is_network_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/search/shows")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let client = TvMazeClient::with_base_url(server.url());
    let mut cmd = search("batman");
    cmd.strict = true;
    let code = commands::search_cmd(cmd, &client, &Config::default(), &OUTPUT).await;

    assert_eq!(code, ExitCode::NetworkError);
}

// =============================================================================
// Episodes
// =============================================================================

#[tokio::test]
async fn test_episodes_strict_not_found() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/shows/424242/episodes")
        .with_status(404)
        .create_async()
        .await;

    let client = TvMazeClient::with_base_url(server.url());
    let cmd = EpisodesCmd {
        show_id: 424242,
        season: None,
        strict: true,
    };
    assert_eq!(
        commands::episodes_cmd(cmd, &client, &OUTPUT).await,
        ExitCode::NetworkError
    );
}

#[tokio::test]
async fn test_episodes_parsed_from_args() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/shows/975/episodes")
        .with_status(200)
        .with_body(r#"[{"id": 1, "name": "Pilot", "season": 1, "number": 1}]"#)
        .create_async()
        .await;

    let cli = Cli::parse_from(["showscout", "--json", "episodes", "975", "--season", "1"]);
    let Some(Command::Episodes(cmd)) = cli.command else {
        panic!("Expected Episodes command");
    };

    let client = TvMazeClient::with_base_url(server.url());
    assert_eq!(
        commands::episodes_cmd(cmd, &client, &OUTPUT).await,
        ExitCode::Success
    );
    mock.assert_async().await;
}

// =============================================================================
// Page
// =============================================================================

#[tokio::test]
async fn test_page_rejects_show_not_in_results() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/search/shows")
        .match_query(Matcher::UrlEncoded("q".into(), "batman".into()))
        .with_status(200)
        .with_body(search_body())
        .create_async()
        .await;

    let client = TvMazeClient::with_base_url(server.url());
    let mut cmd = page("batman");
    cmd.episodes = Some(1);
    assert_eq!(
        commands::page_cmd(cmd, &client, &OUTPUT).await,
        ExitCode::InvalidArgs
    );
}

#[tokio::test]
async fn test_page_first_writes_html_file() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/search/shows")
        .match_query(Matcher::UrlEncoded("q".into(), "batman".into()))
        .with_status(200)
        .with_body(search_body())
        .create_async()
        .await;
    let episodes = server
        .mock("GET", "/shows/975/episodes")
        .with_status(200)
        .with_body(r#"[{"id": 67453, "name": "Hi Diddle Riddle", "season": 1, "number": 1}]"#)
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("batman.html");

    let client = TvMazeClient::with_base_url(server.url());
    let mut cmd = page("batman");
    cmd.first = true;
    cmd.output = Some(path.clone());
    assert_eq!(commands::page_cmd(cmd, &client, &OUTPUT).await, ExitCode::Success);
    episodes.assert_async().await;

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains(r#"id="show_975""#));
    assert!(html.contains(r#"id="show_1855""#));
    assert!(html.contains("Hi Diddle Riddle (season 1, number 1)"));
    assert!(html.contains(r#"<section id="episodes-area">"#));
}
