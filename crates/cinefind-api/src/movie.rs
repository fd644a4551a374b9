//! Provider-neutral movie records.

/// Number of items a provider returns per search page.
pub const PAGE_SIZE: u32 = 10;

/// A single entry of a search result page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultItem {
    /// IMDb identifier (e.g. `tt0468569`).
    pub id: String,
    /// Title.
    pub title: String,
    /// Release year (may be a range for series, e.g. `2008–2013`).
    pub year: String,
    /// Media type (`movie`, `series`, `episode`, `game`).
    pub media_type: String,
    /// Poster image URL.
    pub poster_url: Option<String>,
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    /// Items on this page, in provider order.
    pub items: Vec<SearchResultItem>,
    /// Total number of results across all pages.
    pub total_results: u32,
}

impl SearchPage {
    /// Returns whether another page exists after `page`.
    #[must_use]
    pub fn has_more(&self, page: u32) -> bool {
        has_more(page, self.total_results)
    }
}

/// Returns whether results beyond `page` exist for `total_results` hits.
#[must_use]
pub fn has_more(page: u32, total_results: u32) -> bool {
    u64::from(page).saturating_mul(u64::from(PAGE_SIZE)) < u64::from(total_results)
}

/// A third-party rating (e.g. Rotten Tomatoes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    /// Rating source name.
    pub source: String,
    /// Rating value as reported (e.g. `94%`).
    pub value: String,
}

/// Full detail record for a single title.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MovieDetail {
    /// IMDb identifier.
    pub id: String,
    /// Title.
    pub title: String,
    /// Release year.
    pub year: String,
    /// Media type.
    pub media_type: String,
    /// Poster image URL.
    pub poster_url: Option<String>,
    /// IMDb rating out of 10 (e.g. `9.0`).
    pub rating: Option<String>,
    /// Runtime (e.g. `152 min`).
    pub runtime: Option<String>,
    /// Genres in provider order.
    pub genres: Vec<String>,
    /// Director(s).
    pub director: Option<String>,
    /// Main cast.
    pub cast: Option<String>,
    /// Plot summary.
    pub plot: Option<String>,
    /// Release date (e.g. `18 Jul 2008`).
    pub release_date: Option<String>,
    /// Box office gross.
    pub box_office: Option<String>,
    /// IMDb vote count as reported (e.g. `2,558,416`).
    pub vote_count: Option<String>,
    /// Awards summary.
    pub awards: Option<String>,
    /// Certificate (e.g. `PG-13`).
    pub rated: Option<String>,
    /// Writer(s).
    pub writer: Option<String>,
    /// Spoken languages.
    pub language: Option<String>,
    /// Production countries.
    pub country: Option<String>,
    /// Metascore.
    pub metascore: Option<String>,
    /// Production company.
    pub production: Option<String>,
    /// DVD release date.
    pub dvd: Option<String>,
    /// Official website.
    pub website: Option<String>,
    /// Third-party ratings.
    pub ratings: Vec<Rating>,
}

/// Splits a comma separated genre list (`"Action, Crime, Drama"`).
#[must_use]
pub fn split_genres(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_has_more_boundaries() {
        // Arrange & Act & Assert
        assert!(has_more(1, 11));
        assert!(!has_more(1, 10));
        assert!(!has_more(1, 3));
        assert!(has_more(2, 21));
        assert!(!has_more(3, 21));
        assert!(!has_more(1, 0));
    }

    #[test]
    fn test_has_more_matches_page_formula() {
        for total in 0..=45u32 {
            for page in 1..=6u32 {
                assert_eq!(has_more(page, total), page * PAGE_SIZE < total);
            }
        }
    }

    #[test]
    fn test_has_more_large_page_does_not_wrap() {
        // Arrange & Act & Assert
        assert!(!has_more(u32::MAX, u32::MAX));
    }

    #[test]
    fn test_split_genres() {
        // Arrange & Act
        let genres = split_genres("Action, Crime, Drama");

        // Assert
        assert_eq!(genres, vec!["Action", "Crime", "Drama"]);
    }

    #[test]
    fn test_split_genres_empty() {
        // Arrange & Act & Assert
        assert!(split_genres("").is_empty());
        assert!(split_genres(" , ").is_empty());
    }
}
