//! Application configuration module.
//!
//! Manages the TOML config file holding the OMDb credential, the API base
//! URL and the top-rated catalog, and resolves where that file lives.

#[allow(clippy::module_inception)]
mod config;

#[allow(clippy::module_name_repetitions)]
pub use config::{AppConfig, CatalogConfig, OmdbConfig};
