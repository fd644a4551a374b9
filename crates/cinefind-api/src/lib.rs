//! Movie lookup library for cinefind.
//!
//! Provides the OMDb API client, an offline fallback dataset and the search
//! session workflow built on top of them.

/// Built-in offline dataset.
pub mod fallback;

/// Provider-neutral movie records.
pub mod movie;

/// OMDb API client.
pub mod omdb;

/// Provider trait and runtime provider selection.
pub mod provider;

/// Search session workflow.
pub mod session;
