//! OMDb API response types and their conversion into movie records.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::movie::{MovieDetail, Rating, SearchPage, SearchResultItem, split_genres};

/// Placeholder OMDb uses for missing values.
const NOT_AVAILABLE: &str = "N/A";

/// Returns `true` when an OMDb `Response` flag reports success.
fn is_true(flag: &str) -> bool {
    flag.eq_ignore_ascii_case("true")
}

/// Drops OMDb's `"N/A"` and empty placeholders.
fn available(value: Option<String>) -> Option<String> {
    value.filter(|v| {
        let v = v.trim();
        !v.is_empty() && v != NOT_AVAILABLE
    })
}

// --- Error ---

/// Body returned alongside `Response: "False"` (also on HTTP 401).
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbErrorResponse {
    /// `"False"`.
    #[serde(rename = "Response")]
    pub response: String,
    /// Error message (e.g. `Invalid API key!`).
    #[serde(rename = "Error")]
    pub error: String,
}

// --- Search ---

/// Response from a `?s=` search request.
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchResponse {
    /// `"True"` or `"False"`.
    #[serde(rename = "Response")]
    pub response: String,
    /// Results on this page.
    #[serde(rename = "Search", default)]
    pub search: Vec<OmdbSearchItem>,
    /// Total number of results, as a decimal string.
    #[serde(rename = "totalResults")]
    pub total_results: Option<String>,
    /// Error message when `response` is `"False"`.
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

/// A single search result.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbSearchItem {
    /// Title.
    pub title: String,
    /// Year.
    pub year: String,
    /// IMDb identifier.
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    /// `movie`, `series`, `episode` or `game`.
    #[serde(rename = "Type")]
    pub media_type: String,
    /// Poster URL or `"N/A"`.
    pub poster: Option<String>,
}

impl OmdbSearchResponse {
    /// Converts into a [`SearchPage`]; `None` when OMDb reported no match.
    ///
    /// # Errors
    ///
    /// Returns an error if `totalResults` is not a number.
    pub fn into_page(self) -> Result<Option<SearchPage>> {
        if !is_true(&self.response) {
            tracing::debug!(error = ?self.error, "OMDb search returned no match");
            return Ok(None);
        }

        let raw_total = self.total_results.unwrap_or_default();
        let total_results = if raw_total.trim().is_empty() {
            0
        } else {
            raw_total
                .trim()
                .parse::<u32>()
                .with_context(|| format!("invalid totalResults: {raw_total}"))?
        };

        let items = self
            .search
            .into_iter()
            .map(|item| SearchResultItem {
                id: item.imdb_id,
                title: item.title,
                year: item.year,
                media_type: item.media_type,
                poster_url: available(item.poster),
            })
            .collect();

        Ok(Some(SearchPage {
            items,
            total_results,
        }))
    }
}

// --- Detail ---

/// Response from an `?i=` detail request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OmdbDetailResponse {
    /// `"True"` or `"False"`.
    pub response: String,
    /// Error message when `response` is `"False"`.
    pub error: Option<String>,
    /// Title.
    pub title: Option<String>,
    /// Year.
    pub year: Option<String>,
    /// Certificate.
    pub rated: Option<String>,
    /// Release date.
    pub released: Option<String>,
    /// Runtime.
    pub runtime: Option<String>,
    /// Comma separated genres.
    pub genre: Option<String>,
    /// Director(s).
    pub director: Option<String>,
    /// Writer(s).
    pub writer: Option<String>,
    /// Main cast.
    pub actors: Option<String>,
    /// Plot.
    pub plot: Option<String>,
    /// Languages.
    pub language: Option<String>,
    /// Countries.
    pub country: Option<String>,
    /// Awards.
    pub awards: Option<String>,
    /// Poster URL.
    pub poster: Option<String>,
    /// Third-party ratings.
    pub ratings: Vec<OmdbRating>,
    /// Metascore.
    pub metascore: Option<String>,
    /// IMDb rating.
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    /// IMDb votes.
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: Option<String>,
    /// IMDb identifier.
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    /// Media type.
    #[serde(rename = "Type")]
    pub media_type: Option<String>,
    /// DVD release date.
    #[serde(rename = "DVD")]
    pub dvd: Option<String>,
    /// Box office.
    pub box_office: Option<String>,
    /// Production company.
    pub production: Option<String>,
    /// Website.
    pub website: Option<String>,
}

/// A single entry of the `Ratings` array.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbRating {
    /// Source (e.g. `Rotten Tomatoes`).
    pub source: String,
    /// Value (e.g. `94%`).
    pub value: String,
}

impl OmdbDetailResponse {
    /// Converts into a [`MovieDetail`]; `None` when OMDb reported no match.
    ///
    /// `requested_id` fills in the identifier when the body omits it.
    #[must_use]
    pub fn into_detail(self, requested_id: &str) -> Option<MovieDetail> {
        if !is_true(&self.response) {
            tracing::debug!(id = requested_id, error = ?self.error, "OMDb lookup returned no match");
            return None;
        }

        let genres = available(self.genre)
            .map(|g| split_genres(&g))
            .unwrap_or_default();

        Some(MovieDetail {
            id: available(self.imdb_id).unwrap_or_else(|| String::from(requested_id)),
            title: self.title.unwrap_or_default(),
            year: available(self.year).unwrap_or_default(),
            media_type: available(self.media_type).unwrap_or_else(|| String::from("movie")),
            poster_url: available(self.poster),
            rating: available(self.imdb_rating),
            runtime: available(self.runtime),
            genres,
            director: available(self.director),
            cast: available(self.actors),
            plot: available(self.plot),
            release_date: available(self.released),
            box_office: available(self.box_office),
            vote_count: available(self.imdb_votes),
            awards: available(self.awards),
            rated: available(self.rated),
            writer: available(self.writer),
            language: available(self.language),
            country: available(self.country),
            metascore: available(self.metascore),
            production: available(self.production),
            dvd: available(self.dvd),
            website: available(self.website),
            ratings: self
                .ratings
                .into_iter()
                .map(|r| Rating {
                    source: r.source,
                    value: r.value,
                })
                .collect(),
        })
    }
}
