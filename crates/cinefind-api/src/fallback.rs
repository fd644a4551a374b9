//! Built-in dataset served when no OMDb API key is configured.

use anyhow::Result;

use crate::movie::{MovieDetail, Rating, SearchPage, SearchResultItem};
use crate::provider::LocalMovieProvider;

/// Poster used by every fallback record.
const DEMO_POSTER: &str = "https://images.pexels.com/photos/7991579/pexels-photo-7991579.jpeg?auto=compress&cs=tinysrgb&w=300&h=450&fit=crop";

/// Identifier of the one fully populated fallback record.
const DARK_KNIGHT_ID: &str = "tt0468569";

/// Offline movie provider.
///
/// Every query yields the same three titles on page 1 and nothing after.
/// Lookups return "The Dark Knight" for `tt0468569` and a generic demo
/// record for any other identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackProvider;

impl FallbackProvider {
    /// Creates the provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// The fixed search results.
    #[must_use]
    pub fn search_items() -> Vec<SearchResultItem> {
        [
            (
                "The Dark Knight",
                "2008",
                DARK_KNIGHT_ID,
                "https://images.pexels.com/photos/7991579/pexels-photo-7991579.jpeg?auto=compress&cs=tinysrgb&w=300&h=450&fit=crop",
            ),
            (
                "Inception",
                "2010",
                "tt1375666",
                "https://images.pexels.com/photos/7991678/pexels-photo-7991678.jpeg?auto=compress&cs=tinysrgb&w=300&h=450&fit=crop",
            ),
            (
                "Interstellar",
                "2014",
                "tt0816692",
                "https://images.pexels.com/photos/7991580/pexels-photo-7991580.jpeg?auto=compress&cs=tinysrgb&w=300&h=450&fit=crop",
            ),
        ]
        .into_iter()
        .map(|(title, year, id, poster)| SearchResultItem {
            id: String::from(id),
            title: String::from(title),
            year: String::from(year),
            media_type: String::from("movie"),
            poster_url: Some(String::from(poster)),
        })
        .collect()
    }

    /// The fully populated "The Dark Knight" record.
    #[must_use]
    pub fn dark_knight() -> MovieDetail {
        let s = |v: &str| Some(String::from(v));
        MovieDetail {
            id: String::from(DARK_KNIGHT_ID),
            title: String::from("The Dark Knight"),
            year: String::from("2008"),
            media_type: String::from("movie"),
            poster_url: s(DEMO_POSTER),
            rating: s("9.0"),
            runtime: s("152 min"),
            genres: vec![
                String::from("Action"),
                String::from("Crime"),
                String::from("Drama"),
            ],
            director: s("Christopher Nolan"),
            cast: s("Christian Bale, Heath Ledger, Aaron Eckhart"),
            plot: s(
                "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice.",
            ),
            release_date: s("18 Jul 2008"),
            box_office: s("$534,858,444"),
            vote_count: s("2,558,416"),
            awards: s("Won 2 Oscars. 159 wins & 163 nominations total"),
            rated: s("PG-13"),
            writer: s("Jonathan Nolan, Christopher Nolan, David S. Goyer"),
            language: s("English, Mandarin"),
            country: s("United States, United Kingdom"),
            metascore: s("84"),
            production: s("Warner Bros. Pictures"),
            dvd: s("09 Dec 2008"),
            website: None,
            ratings: [
                ("Internet Movie Database", "9.0/10"),
                ("Rotten Tomatoes", "94%"),
                ("Metacritic", "84/100"),
            ]
            .into_iter()
            .map(|(source, value)| Rating {
                source: String::from(source),
                value: String::from(value),
            })
            .collect(),
        }
    }

    /// The generic record returned for unknown identifiers.
    #[must_use]
    pub fn demo_movie(id: &str) -> MovieDetail {
        let s = |v: &str| Some(String::from(v));
        MovieDetail {
            id: String::from(id),
            title: String::from("Demo Movie"),
            year: String::from("2023"),
            media_type: String::from("movie"),
            poster_url: s(DEMO_POSTER),
            rating: s("8.5"),
            genres: vec![String::from("Demo")],
            director: s("Demo Director"),
            cast: s("Demo Actor 1, Demo Actor 2"),
            plot: s(
                "This is a demo movie for testing purposes. Configure an OMDb API key to get real movie data.",
            ),
            ..MovieDetail::default()
        }
    }
}

impl LocalMovieProvider for FallbackProvider {
    async fn search(&self, query: &str, page: u32) -> Result<Option<SearchPage>> {
        tracing::debug!(query, page, "serving fallback search results");
        if page > 1 {
            return Ok(None);
        }
        let items = Self::search_items();
        let total_results = u32::try_from(items.len())?;
        Ok(Some(SearchPage {
            items,
            total_results,
        }))
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<MovieDetail>> {
        tracing::debug!(id, "serving fallback movie detail");
        if id == DARK_KNIGHT_ID {
            Ok(Some(Self::dark_knight()))
        } else {
            Ok(Some(Self::demo_movie(id)))
        }
    }
}
