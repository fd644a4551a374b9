//! Failures of user-initiated actions.

use thiserror::Error;

/// Why a `MovieClient` action did not produce its result.
///
/// Every variant has already been reported to the presenter as a notice by
/// the time it is returned.
#[derive(Debug, Error)]
pub enum ActionError {
    /// Input was empty after trimming; no request was made.
    #[error("{message}")]
    Validation {
        /// Message shown to the user.
        message: &'static str,
    },

    /// An exact identifier lookup found nothing.
    #[error("no movie found for id {id}")]
    NotFound {
        /// Requested identifier.
        id: String,
    },

    /// A search yielded no results.
    #[error("no results for \"{query}\"")]
    NoResults {
        /// Query that was searched.
        query: String,
    },

    /// Transport or decoding failure reported by the provider.
    #[error("provider request failed: {0:#}")]
    Provider(anyhow::Error),

    /// Random discovery could not produce a movie.
    #[error("discovery failed: {reason}")]
    Discovery {
        /// What came back empty.
        reason: &'static str,
    },
}
