use crate::catalog::{self, CatalogEntry};
use crate::models::MovieSummary;

/// Rendered in place of an optional field the source did not provide.
pub const FIELD_PLACEHOLDER: &str = "N/A";
/// Rendered in place of a missing poster reference.
pub const POSTER_PLACEHOLDER: &str = "[no poster]";

/// One card of the grid. Pure data; the renderer below and any other
/// front end consume it as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub badge: String,
    pub year_label: String,
    pub title: String,
    pub body: String,
    pub meta: [(String, String); 2],
    pub poster: String,
}

/// The whole display surface, rebuilt from scratch on every call: cards
/// in list order, the count and page readouts, an optional status line,
/// and the enablement of the two navigation controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub cards: Vec<Card>,
    pub count_readout: String,
    pub page_readout: String,
    pub status: Option<String>,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

fn or_placeholder(value: &Option<String>) -> String {
    value
        .clone()
        .unwrap_or_else(|| FIELD_PLACEHOLDER.to_string())
}

pub fn movie_card(movie: &MovieSummary) -> Card {
    Card {
        badge: or_placeholder(&movie.genre),
        year_label: movie.year.clone(),
        title: movie.title.clone(),
        body: or_placeholder(&movie.plot),
        meta: [
            ("Rated".to_string(), or_placeholder(&movie.rated)),
            ("Runtime".to_string(), or_placeholder(&movie.runtime)),
        ],
        poster: movie
            .poster
            .clone()
            .unwrap_or_else(|| POSTER_PLACEHOLDER.to_string()),
    }
}

pub fn catalog_card(entry: &CatalogEntry) -> Card {
    Card {
        badge: entry.genre.to_string(),
        year_label: entry.year.to_string(),
        title: entry.title.to_string(),
        body: entry.tagline.to_string(),
        meta: [
            ("Released".to_string(), catalog::format_release_date(entry.released)),
            ("Genre".to_string(), entry.genre.to_string()),
        ],
        poster: entry.poster.to_string(),
    }
}

/// Grid for a page of remote results. The count readout shows the
/// remote-reported total, which can differ from the page's card count.
pub fn movie_grid(
    movies: &[MovieSummary],
    total_results: u32,
    page: u32,
    total_pages: u32,
    status: Option<String>,
    prev_enabled: bool,
    next_enabled: bool,
) -> Grid {
    Grid {
        cards: movies.iter().map(movie_card).collect(),
        count_readout: total_results.to_string(),
        page_readout: format!("{page} / {total_pages}"),
        status,
        prev_enabled,
        next_enabled,
    }
}

/// Grid for the static catalog: one page, count equals list length,
/// navigation inapplicable.
pub fn catalog_grid(entries: &[CatalogEntry]) -> Grid {
    Grid {
        cards: entries.iter().map(catalog_card).collect(),
        count_readout: entries.len().to_string(),
        page_readout: "1 / 1".to_string(),
        status: None,
        prev_enabled: false,
        next_enabled: false,
    }
}

fn enablement(enabled: bool) -> &'static str {
    if enabled {
        "enabled"
    } else {
        "disabled"
    }
}

/// Plain-text serialization of a grid for the console front end.
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::new();
    if let Some(status) = &grid.status {
        out.push_str(&format!("! {status}\n"));
    }
    out.push_str(&format!(
        "{} result(s) | page {}\n",
        grid.count_readout, grid.page_readout
    ));
    for card in &grid.cards {
        out.push_str(&format!(
            "[{}] {} ({})\n",
            card.badge, card.title, card.year_label
        ));
        out.push_str(&format!("    poster: {}\n", card.poster));
        out.push_str(&format!("    {}\n", card.body));
        let [(k1, v1), (k2, v2)] = &card.meta;
        out.push_str(&format!("    {k1}: {v1} | {k2}: {v2}\n"));
    }
    out.push_str(&format!(
        "prev: {} | next: {}\n",
        enablement(grid.prev_enabled),
        enablement(grid.next_enabled)
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    fn sparse_movie() -> MovieSummary {
        MovieSummary {
            title: "Obscure Film".to_string(),
            year: "N/A".to_string(),
            poster: None,
            plot: None,
            rated: None,
            runtime: None,
            genre: None,
            imdb_id: "tt0000001".to_string(),
        }
    }

    #[test]
    fn missing_fields_render_placeholders_not_blanks() {
        let card = movie_card(&sparse_movie());
        assert_eq!(card.badge, FIELD_PLACEHOLDER);
        assert_eq!(card.body, FIELD_PLACEHOLDER);
        assert_eq!(card.meta[0].1, FIELD_PLACEHOLDER);
        assert_eq!(card.meta[1].1, FIELD_PLACEHOLDER);
        assert_eq!(card.poster, POSTER_PLACEHOLDER);
        let text = render_grid(&movie_grid(
            &[sparse_movie()],
            1,
            1,
            1,
            None,
            false,
            false,
        ));
        assert!(!text.contains("undefined"));
    }

    #[test]
    fn count_readout_shows_remote_total_not_page_length() {
        let grid = movie_grid(&[sparse_movie()], 23, 2, 3, None, true, true);
        assert_eq!(grid.cards.len(), 1);
        assert_eq!(grid.count_readout, "23");
        assert_eq!(grid.page_readout, "2 / 3");
    }

    #[test]
    fn grid_building_is_idempotent() {
        let movies = vec![sparse_movie(), sparse_movie()];
        let first = movie_grid(&movies, 2, 1, 1, None, false, false);
        let second = movie_grid(&movies, 2, 1, 1, None, false, false);
        assert_eq!(first, second);
        assert_eq!(render_grid(&first), render_grid(&second));
    }

    #[test]
    fn catalog_grid_counts_its_entries() {
        let grid = catalog_grid(&CATALOG);
        assert_eq!(grid.cards.len(), 11);
        assert_eq!(grid.count_readout, "11");
        assert!(!grid.prev_enabled);
        assert!(!grid.next_enabled);
    }

    #[test]
    fn catalog_card_formats_release_meta() {
        let card = catalog_card(&CATALOG[0]);
        assert_eq!(card.title, "The Fast and the Furious");
        assert_eq!(card.meta[0], ("Released".to_string(), "Jun 22, 2001".to_string()));
    }
}
