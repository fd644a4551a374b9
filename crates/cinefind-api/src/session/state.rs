//! Session state owned by `MovieClient`.

use std::fmt;

/// How the active query was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Search by title.
    Title,
    /// Search by keywords.
    Keyword,
}

impl SearchMode {
    /// Capitalised label used in result headings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Keyword => "Keyword",
        }
    }

    /// Validation message for an empty query in this mode.
    #[must_use]
    pub const fn empty_query_message(self) -> &'static str {
        match self {
            Self::Title => "Please enter a movie title",
            Self::Keyword => "Please enter keywords",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Query context of the current search session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Trimmed query of the active search, empty when idle.
    pub query: String,
    /// Mode of the active search.
    pub mode: Option<SearchMode>,
    /// 1-based page of the most recently requested results.
    pub page: u32,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            query: String::new(),
            mode: None,
            page: 1,
        }
    }
}

impl SessionState {
    /// Returns whether a search is active (i.e. "load more" makes sense).
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    /// Starts a new search on page 1.
    pub(crate) fn begin(&mut self, query: &str, mode: SearchMode) {
        self.query = String::from(query);
        self.mode = Some(mode);
        self.page = 1;
    }

    /// Returns to the initial state.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Position in the search workflow.
///
/// ```text
/// Idle -> Searching -> Displaying | Empty | Errored
/// Displaying -> LoadingMore -> Displaying | Exhausted
/// any -> Idle (clear_results)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No search has been issued or results were cleared.
    #[default]
    Idle,
    /// First page request in flight.
    Searching,
    /// Results are shown.
    Displaying,
    /// The last search found nothing.
    Empty,
    /// The last search failed.
    Errored,
    /// A follow-up page request is in flight.
    LoadingMore,
    /// All pages have been loaded.
    Exhausted,
}
