use chrono::NaiveDate;
use once_cell::sync::Lazy;

/// One entry of the built-in catalog. Defined once at load time and
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub title: &'static str,
    pub year: i32,
    pub released: NaiveDate,
    pub tagline: &'static str,
    pub genre: &'static str,
    pub poster: &'static str,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("catalog dates are literal and valid")
}

pub static CATALOG: Lazy<Vec<CatalogEntry>> = Lazy::new(|| {
    vec![
        CatalogEntry {
            title: "The Fast and the Furious",
            year: 2001,
            released: date(2001, 6, 22),
            tagline: "An undercover cop infiltrates the street racing scene.",
            genre: "Action",
            poster: "assets/posters/fast1-2001.jpg",
        },
        CatalogEntry {
            title: "2 Fast 2 Furious",
            year: 2003,
            released: date(2003, 6, 6),
            tagline: "Miami. Fast cars. Bigger stakes.",
            genre: "Action",
            poster: "assets/posters/fast2-2003.jpg",
        },
        CatalogEntry {
            title: "The Fast and the Furious: Tokyo Drift",
            year: 2006,
            released: date(2006, 6, 16),
            tagline: "A new world of drifting in Tokyo.",
            genre: "Action",
            poster: "assets/posters/fast3-2006.jpg",
        },
        CatalogEntry {
            title: "Fast & Furious",
            year: 2009,
            released: date(2009, 4, 3),
            tagline: "Back to LA. Back to the crew.",
            genre: "Action",
            poster: "assets/posters/fast4-2009.jpg",
        },
        CatalogEntry {
            title: "Fast Five",
            year: 2011,
            released: date(2011, 4, 29),
            tagline: "The crew pulls a massive heist in Rio.",
            genre: "Action",
            poster: "assets/posters/fast5-2011.jpg",
        },
        CatalogEntry {
            title: "Fast & Furious 6",
            year: 2013,
            released: date(2013, 5, 24),
            tagline: "A global mission brings the team back together.",
            genre: "Action",
            poster: "assets/posters/fast6-2013.jpg",
        },
        CatalogEntry {
            title: "Furious 7",
            year: 2015,
            released: date(2015, 4, 3),
            tagline: "One last ride against a dangerous new threat.",
            genre: "Action",
            poster: "assets/posters/fast7-2015.jpg",
        },
        CatalogEntry {
            title: "The Fate of the Furious",
            year: 2017,
            released: date(2017, 4, 14),
            tagline: "Loyalty is tested when Dom goes rogue.",
            genre: "Action",
            poster: "assets/posters/fast8-2017.jpg",
        },
        CatalogEntry {
            title: "Fast & Furious Presents: Hobbs & Shaw",
            year: 2019,
            released: date(2019, 8, 2),
            tagline: "Two rivals team up to stop a global threat.",
            genre: "Action",
            poster: "assets/posters/hobbs-shaw-2019.jpg",
        },
        CatalogEntry {
            title: "F9: The Fast Saga",
            year: 2021,
            released: date(2021, 6, 25),
            tagline: "Family faces the past, and a new enemy.",
            genre: "Action",
            poster: "assets/posters/f9-2021.jpg",
        },
        CatalogEntry {
            title: "Fast X",
            year: 2023,
            released: date(2023, 5, 19),
            tagline: "A new villain targets the family's legacy.",
            genre: "Action",
            poster: "assets/posters/fastx-2023.jpg",
        },
    ]
});

/// Short human-readable form, e.g. "Jun 22, 2001".
pub fn format_release_date(released: NaiveDate) -> String {
    released.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_holds_eleven_entries() {
        assert_eq!(CATALOG.len(), 11);
    }

    #[test]
    fn catalog_is_in_release_order() {
        let mut releases: Vec<NaiveDate> = CATALOG.iter().map(|e| e.released).collect();
        let original = releases.clone();
        releases.sort();
        assert_eq!(releases, original);
    }

    #[test]
    fn release_date_formats_short() {
        assert_eq!(format_release_date(date(2001, 6, 22)), "Jun 22, 2001");
        assert_eq!(format_release_date(date(2019, 8, 2)), "Aug 2, 2019");
    }
}
