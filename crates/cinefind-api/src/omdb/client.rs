//! `OmdbClient` - OMDb API client implementation.

use anyhow::{Context, Result, bail};
use reqwest::Client;
use tracing::instrument;
use url::Url;

use super::types::{OmdbDetailResponse, OmdbErrorResponse, OmdbSearchResponse};
use crate::movie::{MovieDetail, SearchPage};
use crate::provider::LocalMovieProvider;

/// Default base URL for the OMDb API.
pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// OMDb API client.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct OmdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// API key sent as the `apikey` query parameter.
    api_key: String,
}

/// Builder for `OmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct OmdbClientBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    user_agent: Option<String>,
}

impl OmdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            user_agent: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_key` is not set.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<OmdbClient> {
        let api_key = self.api_key.context("api_key is required")?;
        let user_agent = self.user_agent.context("user_agent is required")?;

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(OmdbClient {
            http_client,
            base_url,
            api_key,
        })
    }
}

impl OmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> OmdbClientBuilder {
        OmdbClientBuilder::new()
    }

    /// Sends a GET request to the base URL with `apikey` plus `query`.
    #[instrument(skip_all)]
    async fn get_json<T: serde::de::DeserializeOwned>(&self, query: &[(&str, String)]) -> Result<T> {
        let request = self
            .http_client
            .get(self.base_url.clone())
            .query(&[("apikey", self.api_key.as_str())])
            .query(query)
            .build()
            .context("failed to build OMDb request")?;

        // The full URL carries the API key, so only the search params are logged.
        tracing::debug!(base_url = %self.base_url, params = ?query, "OMDb API request");

        let result = self.http_client.execute(request).await;
        let response = result.context("OMDb request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<failed to read body>"));
            if let Ok(error_response) = serde_json::from_str::<OmdbErrorResponse>(&body) {
                bail!(
                    "OMDb API error (HTTP {}): {}",
                    status,
                    error_response.error
                );
            }
            bail!("OMDb API error (HTTP {status}): {body}");
        }

        let body = response
            .text()
            .await
            .context("failed to read OMDb response body")?;
        let raw_result: std::result::Result<T, _> = serde_json::from_str(&body);
        let parsed = raw_result.context("failed to decode OMDb JSON response")?;
        Ok(parsed)
    }
}

impl LocalMovieProvider for OmdbClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str, page: u32) -> Result<Option<SearchPage>> {
        let params = [("s", String::from(query)), ("page", page.to_string())];
        let response: OmdbSearchResponse = self.get_json(&params).await?;
        response.into_page()
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> Result<Option<MovieDetail>> {
        let params = [("i", String::from(id)), ("plot", String::from("full"))];
        let response: OmdbDetailResponse = self.get_json(&params).await?;
        Ok(response.into_detail(id))
    }
}
