//! OMDb API client module.
//!
//! Handles HTTP requests to the OMDb `?s=` search and `?i=` lookup
//! endpoints and converts the flattened JSON into movie records.

mod client;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use client::{DEFAULT_BASE_URL, OmdbClient, OmdbClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use types::{OmdbDetailResponse, OmdbSearchResponse};
