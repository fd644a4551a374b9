//! `MovieProvider` trait definition and runtime provider selection.
#![allow(clippy::future_not_send)]

use anyhow::Result;

use crate::fallback::FallbackProvider;
use crate::movie::{MovieDetail, SearchPage};
use crate::omdb::OmdbClient;

/// Movie metadata source.
///
/// `Ok(None)` means the provider answered but found nothing; `Err` is a
/// transport or decoding failure. Uses `trait_variant::make` to generate a
/// `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(MovieProvider: Send)]
pub trait LocalMovieProvider {
    /// Searches titles by free text. `page` is 1-based.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or response decoding fails.
    async fn search(&self, query: &str, page: u32) -> Result<Option<SearchPage>>;

    /// Fetches the full record for an IMDb identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or response decoding fails.
    async fn get_by_id(&self, id: &str) -> Result<Option<MovieDetail>>;
}

/// Provider chosen once at startup from configuration.
#[derive(Debug)]
pub enum AnyProvider {
    /// Live OMDb API.
    Omdb(OmdbClient),
    /// Built-in offline dataset.
    Fallback(FallbackProvider),
}

impl AnyProvider {
    /// Returns `true` when serving the offline dataset.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    /// Short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Omdb(_) => "omdb",
            Self::Fallback(_) => "fallback",
        }
    }
}

impl LocalMovieProvider for AnyProvider {
    async fn search(&self, query: &str, page: u32) -> Result<Option<SearchPage>> {
        match self {
            Self::Omdb(client) => client.search(query, page).await,
            Self::Fallback(provider) => provider.search(query, page).await,
        }
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<MovieDetail>> {
        match self {
            Self::Omdb(client) => client.get_by_id(id).await,
            Self::Fallback(provider) => provider.get_by_id(id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[tokio::test]
    async fn test_fallback_variant_delegates() {
        // Arrange
        let provider = AnyProvider::Fallback(FallbackProvider::new());

        // Act
        let detail = provider.get_by_id("tt0468569").await.unwrap().unwrap();

        // Assert
        assert!(provider.is_fallback());
        assert_eq!(provider.name(), "fallback");
        assert_eq!(detail.title, "The Dark Knight");
    }

    #[test]
    fn test_omdb_variant_name() {
        // Arrange
        let client = OmdbClient::builder()
            .api_key("k")
            .user_agent("test/0.0.0")
            .build()
            .unwrap();

        // Act
        let provider = AnyProvider::Omdb(client);

        // Assert
        assert!(!provider.is_fallback());
        assert_eq!(provider.name(), "omdb");
    }
}
