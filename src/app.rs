//! App state and interaction controller
//!
//! Owns the two-state machine (`Idle` / `ShowingEpisodes`), the search input,
//! the episode actions registered by the show renderer, and the request
//! sequence numbers that keep a slow response from overwriting a newer one.
//!
//! Fetches are described as [`Request`] values so the caller decides how to
//! run them: awaited inline (CLI, tests) or spawned (TUI). Results come back
//! as [`Response`] values and go through [`App::apply`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::api::TvMazeClient;
use crate::display::{EpisodesArea, ShowsArea};
use crate::models::{EpisodeSummary, ShowSummary};
use crate::render::{render_episodes, render_shows, EpisodeAction};

// =============================================================================
// App State Enum
// =============================================================================

/// Observable controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Episode area hidden
    #[default]
    Idle,
    /// Episode area visible
    ShowingEpisodes,
}

// =============================================================================
// Input Mode
// =============================================================================

/// Current input mode for keyboard handling
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Text input mode (search box focused)
    Editing,
}

// =============================================================================
// Loading State
// =============================================================================

/// Loading state for async operations
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadingState {
    #[default]
    Idle,
    /// Loading with optional message
    Loading(Option<String>),
}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            LoadingState::Loading(Some(msg)) => Some(msg),
            _ => None,
        }
    }
}

// =============================================================================
// Selection State
// =============================================================================

/// Selection state for list views
#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// Currently selected index
    pub selected: usize,
    /// Scroll offset for viewport
    pub offset: usize,
    /// Total number of items
    pub len: usize,
}

impl ListState {
    pub fn new(len: usize) -> Self {
        Self {
            selected: 0,
            offset: 0,
            len,
        }
    }

    /// Move selection up
    pub fn up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            if self.selected < self.offset {
                self.offset = self.selected;
            }
        }
    }

    /// Move selection down
    pub fn down(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    /// Move selection up by a page
    pub fn page_up(&mut self, page_size: usize) {
        self.selected = self.selected.saturating_sub(page_size);
        if self.selected < self.offset {
            self.offset = self.selected;
        }
    }

    /// Move selection down by a page
    pub fn page_down(&mut self, page_size: usize) {
        if self.len > 0 {
            self.selected = (self.selected + page_size).min(self.len - 1);
        }
    }

    /// Jump to first item
    pub fn first(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    /// Jump to last item
    pub fn last(&mut self) {
        if self.len > 0 {
            self.selected = self.len - 1;
        }
    }

    /// Update offset to keep selected item visible
    pub fn scroll_into_view(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + visible_height {
            self.offset = self.selected - visible_height + 1;
        }
    }

    /// Replace the list length and go back to the top
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.selected = 0;
        self.offset = 0;
    }
}

// =============================================================================
// Search Input
// =============================================================================

/// Search box state
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Search query
    pub query: String,
    /// Cursor position in query (byte offset, always on a char boundary)
    pub cursor: usize,
    pub loading: LoadingState,
}

impl SearchState {
    /// Replace the query and put the cursor at the end
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.cursor = self.query.len();
    }

    /// Insert character at cursor
    pub fn insert(&mut self, c: char) {
        self.query.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if let Some(c) = self.query[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
            self.query.remove(self.cursor);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.query.len() {
            self.query.remove(self.cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        if let Some(c) = self.query[..self.cursor].chars().next_back() {
            self.cursor -= c.len_utf8();
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(c) = self.query[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.query.len();
    }
}

// =============================================================================
// Requests
// =============================================================================

/// Independent request slots; each has its own sequence counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Search,
    Episodes,
}

/// Issues monotonically increasing sequence numbers per slot
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    search: u64,
    episodes: u64,
}

impl RequestTracker {
    /// Issue the next sequence number for `slot`
    pub fn issue(&mut self, slot: Slot) -> u64 {
        let counter = self.counter_mut(slot);
        *counter += 1;
        *counter
    }

    /// Whether `seq` is the latest issued for `slot`
    pub fn is_current(&self, slot: Slot, seq: u64) -> bool {
        let latest = match slot {
            Slot::Search => self.search,
            Slot::Episodes => self.episodes,
        };
        seq == latest
    }

    fn counter_mut(&mut self, slot: Slot) -> &mut u64 {
        match slot {
            Slot::Search => &mut self.search,
            Slot::Episodes => &mut self.episodes,
        }
    }
}

/// A fetch the controller wants performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Search { seq: u64, query: String },
    Episodes { seq: u64, show_id: i64 },
}

/// Result of a [`Request`], tagged with the same sequence number
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Shows { seq: u64, shows: Vec<ShowSummary> },
    Episodes { seq: u64, episodes: Vec<EpisodeSummary> },
}

/// Perform a request against the directory service
///
/// Never fails: the client substitutes placeholders on error.
pub async fn execute(client: &TvMazeClient, request: Request) -> Response {
    match request {
        Request::Search { seq, query } => {
            debug!(seq, %query, "executing search");
            let shows = client.search_shows(&query).await;
            Response::Shows { seq, shows }
        }
        Request::Episodes { seq, show_id } => {
            debug!(seq, show_id, "executing episode fetch");
            let episodes = client.get_episodes(show_id).await;
            Response::Episodes { seq, episodes }
        }
    }
}

// =============================================================================
// Main Application State
// =============================================================================

/// Interaction controller
#[derive(Debug, Default)]
pub struct App {
    pub state: AppState,
    pub running: bool,
    pub input_mode: InputMode,
    pub search: SearchState,
    /// One action per rendered show card, in display order
    pub actions: Vec<EpisodeAction>,
    /// Selection over the rendered show cards
    pub show_list: ListState,
    /// Scroll position in the episode panel
    pub episode_list: ListState,
    pub episodes_loading: LoadingState,
    /// Show whose episodes were requested last
    pub active_show: Option<i64>,
    tracker: RequestTracker,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            ..Self::default()
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Focus search input
    pub fn focus_search(&mut self) {
        self.input_mode = InputMode::Editing;
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Submit the current query
    ///
    /// An empty query is a no-op. Otherwise the episode area is hidden, any
    /// in-flight episode request is invalidated and a search is issued.
    pub fn submit_search<D: EpisodesArea + ?Sized>(&mut self, doc: &mut D) -> Option<Request> {
        if self.search.query.is_empty() {
            return None;
        }

        doc.hide_episodes();
        self.state = AppState::Idle;
        self.active_show = None;
        self.episodes_loading = LoadingState::Idle;
        self.tracker.issue(Slot::Episodes);

        let seq = self.tracker.issue(Slot::Search);
        self.search.loading = LoadingState::Loading(Some("Searching...".into()));
        debug!(seq, query = %self.search.query, "search submitted");

        Some(Request::Search {
            seq,
            query: self.search.query.clone(),
        })
    }

    /// Activate the episode action of a rendered show
    ///
    /// Returns `None` when no rendered card carries `show_id`.
    pub fn activate_episodes(&mut self, show_id: i64) -> Option<Request> {
        if !self.actions.iter().any(|a| a.show_id == show_id) {
            debug!(show_id, "no rendered show with this id");
            return None;
        }

        let seq = self.tracker.issue(Slot::Episodes);
        self.active_show = Some(show_id);
        self.episodes_loading = LoadingState::Loading(Some("Fetching episodes...".into()));
        debug!(seq, show_id, "episodes requested");

        Some(Request::Episodes { seq, show_id })
    }

    /// Activate the episode action of the selected show card
    pub fn activate_selected(&mut self) -> Option<Request> {
        let action = *self.actions.get(self.show_list.selected)?;
        self.activate_episodes(action.show_id)
    }

    /// Apply a response to the document
    ///
    /// Responses older than the latest request for their slot are dropped
    /// and `false` is returned.
    pub fn apply<D>(&mut self, response: Response, doc: &mut D) -> bool
    where
        D: ShowsArea + EpisodesArea + ?Sized,
    {
        match response {
            Response::Shows { seq, shows } => {
                if !self.tracker.is_current(Slot::Search, seq) {
                    debug!(seq, "discarding stale search response");
                    return false;
                }
                self.actions = render_shows(&shows, doc);
                self.show_list.reset(self.actions.len());
                self.search.loading = LoadingState::Idle;
                true
            }
            Response::Episodes { seq, episodes } => {
                if !self.tracker.is_current(Slot::Episodes, seq) {
                    debug!(seq, "discarding stale episodes response");
                    return false;
                }
                render_episodes(&episodes, doc);
                doc.show_episodes();
                self.state = AppState::ShowingEpisodes;
                self.episode_list.reset(episodes.len());
                self.episodes_loading = LoadingState::Idle;
                true
            }
        }
    }

    /// Run a full search cycle: submit, fetch, render
    ///
    /// Returns `false` for an empty query.
    pub async fn search<D>(&mut self, client: &TvMazeClient, doc: &mut D, query: &str) -> bool
    where
        D: ShowsArea + EpisodesArea + ?Sized,
    {
        self.search.set_query(query);
        let Some(request) = self.submit_search(doc) else {
            return false;
        };
        let response = execute(client, request).await;
        self.apply(response, doc)
    }

    /// Run a full episode cycle for a rendered show: fetch, render, reveal
    pub async fn open_episodes<D>(&mut self, client: &TvMazeClient, doc: &mut D, show_id: i64) -> bool
    where
        D: ShowsArea + EpisodesArea + ?Sized,
    {
        let Some(request) = self.activate_episodes(show_id) else {
            return false;
        };
        let response = execute(client, request).await;
        self.apply(response, doc)
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle keyboard event, returning a request to run if one was issued
    pub fn handle_key<D: EpisodesArea + ?Sized>(&mut self, key: KeyEvent, doc: &mut D) -> Option<Request> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return None;
        }

        if self.input_mode == InputMode::Editing {
            self.handle_editing_key(key, doc)
        } else {
            self.handle_normal_key(key)
        }
    }

    /// Handle keys in editing (text input) mode
    fn handle_editing_key<D: EpisodesArea + ?Sized>(&mut self, key: KeyEvent, doc: &mut D) -> Option<Request> {
        match key.code {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                return self.submit_search(doc);
            }
            KeyCode::Char(c) => self.search.insert(c),
            KeyCode::Backspace => self.search.backspace(),
            KeyCode::Delete => self.search.delete(),
            KeyCode::Left => self.search.cursor_left(),
            KeyCode::Right => self.search.cursor_right(),
            KeyCode::Home => self.search.cursor_home(),
            KeyCode::End => self.search.cursor_end(),
            _ => {}
        }
        None
    }

    /// Handle keys in normal navigation mode
    fn handle_normal_key(&mut self, key: KeyEvent) -> Option<Request> {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('/') | KeyCode::Char('s') => self.focus_search(),
            KeyCode::Up | KeyCode::Char('k') => self.show_list.up(),
            KeyCode::Down | KeyCode::Char('j') => self.show_list.down(),
            KeyCode::Home => self.show_list.first(),
            KeyCode::End => self.show_list.last(),
            KeyCode::PageUp => self.episode_list.page_up(10),
            KeyCode::PageDown => self.episode_list.page_down(10),
            KeyCode::Enter | KeyCode::Char('e') => return self.activate_selected(),
            _ => {}
        }
        None
    }
}

// =============================================================================
// Tests
// =============================================================================
