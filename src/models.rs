use serde::{Deserialize, Serialize};

/// Number of results per page in the remote source's search contract.
pub const PAGE_SIZE: u32 = 10;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MovieSummary {
    pub title: String,
    /// Free text as reported by the source; may be a range like "2017–2019".
    pub year: String,
    pub poster: Option<String>,
    pub plot: Option<String>,
    pub rated: Option<String>,
    pub runtime: Option<String>,
    pub genre: Option<String>,
    pub imdb_id: String,
}

/// Current search context: replaced wholesale on every successful page
/// fetch, cleared on failure.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub query: String,
    /// 1-based.
    pub page: u32,
    /// Total across all pages, as reported by the search step.
    pub total_results: u32,
    pub movies: Vec<MovieSummary>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            total_results: 0,
            movies: Vec::new(),
        }
    }
}

impl SearchState {
    /// Floored at one page when the total is zero or unknown.
    pub fn total_pages(&self) -> u32 {
        self.total_results.div_ceil(PAGE_SIZE).max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(page: u32, total_results: u32) -> SearchState {
        SearchState {
            query: "fast".to_string(),
            page,
            total_results,
            movies: Vec::new(),
        }
    }

    #[test]
    fn twenty_three_results_make_three_pages() {
        assert_eq!(state(1, 23).total_pages(), 3);
    }

    #[test]
    fn exact_multiple_does_not_add_a_page() {
        assert_eq!(state(1, 30).total_pages(), 3);
    }

    #[test]
    fn zero_total_floors_at_one_page() {
        assert_eq!(state(1, 0).total_pages(), 1);
    }

    #[test]
    fn first_page_disables_prev_and_enables_next() {
        let s = state(1, 23);
        assert!(!s.has_prev());
        assert!(s.has_next());
    }

    #[test]
    fn last_page_enables_prev_and_disables_next() {
        let s = state(3, 23);
        assert!(s.has_prev());
        assert!(!s.has_next());
    }
}
