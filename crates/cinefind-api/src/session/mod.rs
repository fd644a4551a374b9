//! Search session workflow: state, presenter seam and the `MovieClient`.

mod client;
mod error;
mod presenter;
mod state;

pub use client::{
    CATALOG_SIZE, DEFAULT_TOP_RATED, DISCOVER_KEYWORDS, LoadMoreOutcome, MovieClient,
    SearchOutcome,
};
pub use error::ActionError;
pub use presenter::{Notice, NoticeLevel, Presenter};
pub use state::{Phase, SearchMode, SessionState};
