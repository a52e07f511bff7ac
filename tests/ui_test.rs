//! Terminal UI drawing tests
//!
//! Draws into ratatui's TestBackend and checks what ends up on screen.

use ratatui::{backend::TestBackend, Terminal};
use showscout::app::{App, Request, Response};
use showscout::display::Document;
use showscout::models::{EpisodeSummary, ShowSummary};
use showscout::ui::{self, Theme};

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn draw(app: &mut App, doc: &Document, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::draw(frame, app, doc)).unwrap();
    buffer_text(&terminal)
}

fn show(id: i64, name: &str) -> ShowSummary {
    ShowSummary {
        id,
        name: name.to_string(),
        summary: format!("<p>About {}.</p>", name),
        image: "https://static.tvmaze.com/m.jpg".to_string(),
    }
}

fn searched(doc: &mut Document, shows: Vec<ShowSummary>) -> App {
    let mut app = App::new();
    app.search.set_query("batman");
    let Some(Request::Search { seq, .. }) = app.submit_search(doc) else {
        panic!("expected search request");
    };
    assert!(app.apply(Response::Shows { seq, shows }, doc));
    app
}

#[test]
fn test_initial_screen() {
    let mut app = App::new();
    let doc = Document::new();
    let screen = draw(&mut app, &doc, 80, 24);

    assert!(screen.contains("SHOWSCOUT"));
    assert!(screen.contains("SHOWS (0)"));
    assert!(screen.contains("Type / to search"));
    assert!(!screen.contains("EPISODES"));
}

#[test]
fn test_show_list_with_plain_summary() {
    let mut doc = Document::new();
    let mut app = searched(&mut doc, vec![show(975, "Batman"), show(1855, "Batman Beyond")]);
    let screen = draw(&mut app, &doc, 100, 30);

    assert!(screen.contains("SHOWS (2)"));
    assert!(screen.contains("Batman  #975"));
    assert!(screen.contains("Batman Beyond  #1855"));
    assert!(screen.contains("About Batman."));
    assert!(!screen.contains("<p>"));
}

#[test]
fn test_episode_panel_appears_after_activation() {
    let mut doc = Document::new();
    let mut app = searched(&mut doc, vec![show(975, "Batman")]);

    let Some(Request::Episodes { seq, show_id }) = app.activate_selected() else {
        panic!("expected episodes request");
    };
    let mut episode = EpisodeSummary::placeholder(show_id);
    episode.id = 1;
    episode.name = "Hi Diddle Riddle".into();
    episode.season = 1;
    episode.number = 1;
    assert!(app.apply(Response::Episodes { seq, episodes: vec![episode] }, &mut doc));

    let screen = draw(&mut app, &doc, 120, 30);
    assert!(screen.contains("EPISODES #975 (1)"));
    assert!(screen.contains("S01E01 Hi Diddle Riddle"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let mut doc = Document::new();
    let mut app = searched(&mut doc, (1..50).map(|i| show(i, "Show")).collect());
    app.show_list.last();
    let screen = draw(&mut app, &doc, 20, 8);
    assert!(!screen.is_empty());
}

#[test]
fn test_placeholder_row_uses_missing_style() {
    let mut doc = Document::new();
    let mut app = searched(&mut doc, vec![ShowSummary::placeholder()]);
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|frame| ui::draw(frame, &mut app, &doc)).unwrap();

    let buffer = terminal.backend().buffer();
    let name = "invalid episode  #-1";
    let (x, y) = (0..buffer.area.height)
        .find_map(|y| {
            let row: Vec<&str> = (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect();
            (0..row.len())
                .find(|&x| row[x..].concat().starts_with(name))
                .map(|x| (x as u16, y))
        })
        .expect("placeholder row on screen");

    assert_eq!(buffer[(x, y)].fg, Theme::MISSING);
}
