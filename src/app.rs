use anyhow::Result;
use futures::future::try_join_all;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::catalog::CATALOG;
use crate::models::{MovieSummary, SearchState};
use crate::omdb::{FetchError, OmdbApi, OmdbClient};
use crate::sort;
use crate::view::{self, Grid};

/// Where the search lifecycle currently stands. `Error` keeps the
/// message that the display surfaces as the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error(String),
}

/// Fetches one page of enriched results: the search step, then a detail
/// lookup per hit, run as one concurrent batch that is awaited
/// collectively. The batch is all-or-nothing: any failed lookup fails
/// the page and every other detail result is abandoned. The total comes
/// from the search step, not the details.
pub async fn fetch_page(
    api: &dyn OmdbApi,
    query: &str,
    page: u32,
) -> Result<(Vec<MovieSummary>, u32), FetchError> {
    let found = api.search_movies(query, page).await?;
    let lookups = found.hits.iter().map(|hit| api.fetch_detail(&hit.imdb_id));
    let movies = try_join_all(lookups).await?;
    Ok((movies, found.total_results))
}

/// Owns all mutable search state. Completions carry the token handed
/// out when their request began; a completion whose token has been
/// superseded is discarded, so under rapid repeated triggers only the
/// latest request ever writes state.
pub struct Controller {
    api: Arc<dyn OmdbApi>,
    pub state: SearchState,
    pub phase: Phase,
    sort_token: String,
    last_issued: u64,
}

impl Controller {
    pub fn new(api: Arc<dyn OmdbApi>) -> Self {
        Self {
            api,
            state: SearchState::default(),
            phase: Phase::Idle,
            sort_token: "default".to_string(),
            last_issued: 0,
        }
    }

    /// Starts a request: moves to `Loading` (both navigation directions
    /// unusable until completion) and returns the token the completion
    /// must present.
    pub fn begin_request(&mut self) -> u64 {
        self.last_issued += 1;
        self.phase = Phase::Loading;
        self.last_issued
    }

    /// Applies a completed fetch. Returns false when the token is stale
    /// and the completion was dropped.
    pub fn apply_result(
        &mut self,
        token: u64,
        query: String,
        page: u32,
        outcome: Result<(Vec<MovieSummary>, u32), FetchError>,
    ) -> bool {
        if token != self.last_issued {
            debug!(token, latest = self.last_issued, "discarding stale completion");
            return false;
        }
        match outcome {
            Ok((movies, total_results)) => {
                info!(
                    query = %query,
                    page,
                    total_results,
                    returned = movies.len(),
                    "search page fetched"
                );
                self.state = SearchState {
                    query,
                    page,
                    total_results,
                    movies,
                };
                self.phase = Phase::Success;
            }
            Err(e) => {
                warn!(query = %query, page, "search failed: {e}");
                self.state = SearchState {
                    query,
                    ..SearchState::default()
                };
                self.phase = Phase::Error(e.to_string());
            }
        }
        true
    }

    async fn request(&mut self, query: String, page: u32) {
        let token = self.begin_request();
        let outcome = fetch_page(self.api.as_ref(), &query, page).await;
        self.apply_result(token, query, page, outcome);
    }

    pub async fn search(&mut self, query: &str) {
        self.request(query.to_string(), 1).await;
    }

    pub async fn next_page(&mut self) {
        if !self.can_next() {
            return;
        }
        let query = self.state.query.clone();
        let page = self.state.page + 1;
        self.request(query, page).await;
    }

    pub async fn prev_page(&mut self) {
        if !self.can_prev() {
            return;
        }
        let query = self.state.query.clone();
        let page = self.state.page - 1;
        self.request(query, page).await;
    }

    /// Remembered across fetches; reapplied to whatever list is current.
    pub fn set_sort(&mut self, token: &str) {
        self.sort_token = token.to_string();
    }

    pub fn can_prev(&self) -> bool {
        self.phase == Phase::Success && self.state.has_prev()
    }

    pub fn can_next(&self) -> bool {
        self.phase == Phase::Success && self.state.has_next()
    }

    /// Rebuilds the display surface from current state. After a failure
    /// this is an empty grid with a zero count and the error as status.
    pub fn grid(&self) -> Grid {
        let sorted = sort::sort_movies(&self.sort_token, &self.state.movies);
        let status = match &self.phase {
            Phase::Error(message) => Some(message.clone()),
            Phase::Loading => Some("Loading...".to_string()),
            Phase::Idle | Phase::Success => None,
        };
        let page = match self.phase {
            Phase::Success => self.state.page,
            _ => 1,
        };
        view::movie_grid(
            &sorted,
            self.state.total_results,
            page,
            self.state.total_pages(),
            status,
            self.can_prev(),
            self.can_next(),
        )
    }
}

/// One console command. Anything unrecognized renders a usage hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Next,
    Prev,
    Sort(String),
    Catalog,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        match (word, rest) {
            ("search", q) if !q.is_empty() => Some(Self::Search(q.to_string())),
            ("next", "") => Some(Self::Next),
            ("prev", "") => Some(Self::Prev),
            ("sort", mode) if !mode.is_empty() => Some(Self::Sort(mode.to_string())),
            ("catalog", "") => Some(Self::Catalog),
            ("help", "") => Some(Self::Help),
            ("quit", "") | ("exit", "") => Some(Self::Quit),
            _ => None,
        }
    }
}

const USAGE: &str = "commands: search <query> | next | prev | sort <az|za|newest|oldest> | catalog | help | quit";

fn catalog_text(sort_token: &str) -> String {
    let sorted = sort::sort_catalog(sort_token, &CATALOG);
    view::render_grid(&view::catalog_grid(&sorted))
}

/// Interactive console front end over the controller. The loop is
/// strictly serial: a command's fetch completes before the next line is
/// read, so the token guard never fires here; it protects any front end
/// that overlaps triggers.
pub async fn run_console() -> Result<()> {
    let api: Arc<dyn OmdbApi> = Arc::new(OmdbClient::from_env()?);
    let mut controller = Controller::new(api);
    // The default selector value is the identity ordering, so the
    // catalog first appears in its defined insertion order.
    let mut sort_token = "default".to_string();
    print!("{}", catalog_text(&sort_token));
    println!("{USAGE}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Some(Command::Search(query)) => {
                controller.search(&query).await;
                print!("{}", view::render_grid(&controller.grid()));
            }
            Some(Command::Next) => {
                controller.next_page().await;
                print!("{}", view::render_grid(&controller.grid()));
            }
            Some(Command::Prev) => {
                controller.prev_page().await;
                print!("{}", view::render_grid(&controller.grid()));
            }
            Some(Command::Sort(mode)) => {
                sort_token = mode.clone();
                controller.set_sort(&mode);
                if controller.phase == Phase::Idle {
                    print!("{}", catalog_text(&sort_token));
                } else {
                    print!("{}", view::render_grid(&controller.grid()));
                }
            }
            Some(Command::Catalog) => {
                print!("{}", catalog_text(&sort_token));
            }
            Some(Command::Help) => println!("{USAGE}"),
            Some(Command::Quit) => break,
            None => {
                if !line.trim().is_empty() {
                    println!("{USAGE}");
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_with_query() {
        assert_eq!(
            Command::parse("search fast cars"),
            Some(Command::Search("fast cars".to_string()))
        );
    }

    #[test]
    fn parses_bare_commands() {
        assert_eq!(Command::parse("next"), Some(Command::Next));
        assert_eq!(Command::parse(" prev "), Some(Command::Prev));
        assert_eq!(Command::parse("catalog"), Some(Command::Catalog));
        assert_eq!(Command::parse("quit"), Some(Command::Quit));
    }

    #[test]
    fn rejects_search_without_query_and_junk() {
        assert_eq!(Command::parse("search"), None);
        assert_eq!(Command::parse("nonsense"), None);
        assert_eq!(Command::parse("next extra"), None);
    }

    #[test]
    fn parses_sort_token_verbatim() {
        assert_eq!(
            Command::parse("sort newest"),
            Some(Command::Sort("newest".to_string()))
        );
    }
}
