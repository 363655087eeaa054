use crate::catalog::CatalogEntry;
use crate::models::MovieSummary;

/// Display orderings recognized by the sort selector. Any other token
/// leaves the list in fetch/storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    TitleAsc,
    TitleDesc,
    Newest,
    Oldest,
}

impl SortMode {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "az" => Some(Self::TitleAsc),
            "za" => Some(Self::TitleDesc),
            "newest" => Some(Self::Newest),
            "oldest" => Some(Self::Oldest),
            _ => None,
        }
    }
}

/// Leading ASCII digit run of a free-text year; "2017–2019" gives 2017,
/// anything without a leading run (e.g. "N/A") gives 0.
pub fn lenient_year(year: &str) -> i32 {
    let digits: String = year
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

fn title_key(title: &str) -> String {
    title.to_lowercase()
}

/// Non-destructive sort of remote results. `za` is defined as the exact
/// reverse of the `az` ordering for the same input, ties included, so it
/// is produced by reversing rather than by an independent comparison.
/// `newest`/`oldest` keep equal-year entries in their incoming order.
pub fn sort_movies(token: &str, movies: &[MovieSummary]) -> Vec<MovieSummary> {
    let mut sorted = movies.to_vec();
    match SortMode::parse(token) {
        Some(SortMode::TitleAsc) => {
            sorted.sort_by(|a, b| title_key(&a.title).cmp(&title_key(&b.title)));
        }
        Some(SortMode::TitleDesc) => {
            sorted.sort_by(|a, b| title_key(&a.title).cmp(&title_key(&b.title)));
            sorted.reverse();
        }
        Some(SortMode::Newest) => {
            sorted.sort_by(|a, b| lenient_year(&b.year).cmp(&lenient_year(&a.year)));
        }
        Some(SortMode::Oldest) => {
            sorted.sort_by(|a, b| lenient_year(&a.year).cmp(&lenient_year(&b.year)));
        }
        None => {}
    }
    sorted
}

/// Non-destructive sort of the static catalog. Unlike the remote
/// variant, `newest`/`oldest` order by the full release date, which
/// separates entries that share a year.
pub fn sort_catalog(token: &str, entries: &[CatalogEntry]) -> Vec<CatalogEntry> {
    let mut sorted = entries.to_vec();
    match SortMode::parse(token) {
        Some(SortMode::TitleAsc) => {
            sorted.sort_by(|a, b| title_key(a.title).cmp(&title_key(b.title)));
        }
        Some(SortMode::TitleDesc) => {
            sorted.sort_by(|a, b| title_key(a.title).cmp(&title_key(b.title)));
            sorted.reverse();
        }
        Some(SortMode::Newest) => {
            sorted.sort_by(|a, b| b.released.cmp(&a.released));
        }
        Some(SortMode::Oldest) => {
            sorted.sort_by(|a, b| a.released.cmp(&b.released));
        }
        None => {}
    }
    sorted
}
