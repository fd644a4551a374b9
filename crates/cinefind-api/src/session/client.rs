//! `MovieClient` - search, pagination and detail-view workflow.

use futures::future::join_all;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::instrument;

use super::error::ActionError;
use super::presenter::{LoadingGuard, Notice, Presenter};
use super::state::{Phase, SearchMode, SessionState};
use crate::movie::{MovieDetail, has_more};
use crate::provider::LocalMovieProvider;

/// Number of catalog cards populated by [`MovieClient::load_top_rated`].
pub const CATALOG_SIZE: usize = 8;

/// Vocabulary `discover_random` draws its search keyword from.
pub const DISCOVER_KEYWORDS: &[&str] = &[
    "batman",
    "love",
    "war",
    "space",
    "comedy",
    "horror",
    "action",
    "drama",
    "thriller",
    "adventure",
    "fantasy",
    "mystery",
    "crime",
];

/// Keyword used if [`DISCOVER_KEYWORDS`] is ever emptied.
const DEFAULT_DISCOVER_KEYWORD: &str = "movie";

/// Default top-rated catalog (IMDb identifiers).
pub const DEFAULT_TOP_RATED: &[&str] = &[
    "tt0111161",
    "tt0068646",
    "tt0071562",
    "tt0468569",
    "tt0050083",
    "tt0108052",
    "tt0167260",
    "tt0110912",
    "tt0060196",
    "tt0137523",
    "tt0120737",
    "tt0109830",
    "tt0080684",
    "tt1375666",
    "tt0167261",
];

const EMPTY_ID_MESSAGE: &str = "Please enter an IMDb ID";

/// Result of a successful first-page search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Total results reported by the provider.
    pub total_results: u32,
    /// Items rendered from the first page.
    pub shown: usize,
    /// Whether "load more" is visible.
    pub has_more: bool,
}

/// Result of [`MovieClient::load_more`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMoreOutcome {
    /// No active search, or "load more" is hidden; nothing happened.
    Idle,
    /// A page was appended and more remain.
    Appended {
        /// Page that was loaded.
        page: u32,
        /// Items appended.
        added: usize,
    },
    /// The last page has been reached.
    Exhausted {
        /// Page that was requested.
        page: u32,
        /// Items appended from that page.
        added: usize,
    },
}

/// Owns the search session and drives a provider and a presenter.
#[derive(Debug)]
pub struct MovieClient<P, R> {
    provider: P,
    presenter: R,
    session: SessionState,
    phase: Phase,
    rng: StdRng,
    top_rated: Vec<String>,
    load_more_visible: bool,
}

impl<P: LocalMovieProvider, R: Presenter> MovieClient<P, R> {
    /// Creates a client with an OS-seeded random source and the default
    /// top-rated catalog.
    pub fn new(provider: P, presenter: R) -> Self {
        Self {
            provider,
            presenter,
            session: SessionState::default(),
            phase: Phase::Idle,
            rng: StdRng::from_os_rng(),
            top_rated: DEFAULT_TOP_RATED.iter().map(|id| String::from(*id)).collect(),
            load_more_visible: false,
        }
    }

    /// Replaces the random source used by [`Self::discover_random`].
    #[must_use]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Replaces the top-rated catalog identifiers.
    #[must_use]
    pub fn with_top_rated(mut self, ids: Vec<String>) -> Self {
        self.top_rated = ids;
        self
    }

    /// Current session state.
    pub const fn session(&self) -> &SessionState {
        &self.session
    }

    /// Current workflow phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// The presenter.
    pub const fn presenter(&self) -> &R {
        &self.presenter
    }

    /// The provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Starts a new title search.
    ///
    /// # Errors
    ///
    /// `Validation` for blank input, `NoResults` or `Provider` from the search.
    #[instrument(skip(self))]
    pub async fn search_by_title(&mut self, query: &str) -> Result<SearchOutcome, ActionError> {
        self.start_search(query, SearchMode::Title).await
    }

    /// Starts a new keyword search.
    ///
    /// # Errors
    ///
    /// `Validation` for blank input, `NoResults` or `Provider` from the search.
    #[instrument(skip(self))]
    pub async fn search_by_keyword(&mut self, query: &str) -> Result<SearchOutcome, ActionError> {
        self.start_search(query, SearchMode::Keyword).await
    }

    /// Looks up a single title by IMDb identifier and opens its detail view.
    ///
    /// Does not touch the search session.
    ///
    /// # Errors
    ///
    /// `Validation` for blank input, `NotFound` or `Provider` from the lookup.
    #[instrument(skip(self))]
    pub async fn search_by_id(&self, id: &str) -> Result<MovieDetail, ActionError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(self.reject(EMPTY_ID_MESSAGE));
        }

        let result = {
            let _loading = LoadingGuard::new(&self.presenter);
            self.provider.get_by_id(id).await
        };

        match result {
            Ok(Some(detail)) => {
                self.presenter.show_detail(&detail);
                Ok(detail)
            }
            Ok(None) => {
                self.presenter
                    .notify(&Notice::error("Movie not found with this IMDb ID"));
                Err(ActionError::NotFound {
                    id: String::from(id),
                })
            }
            Err(err) => {
                tracing::warn!(id, error = %format!("{err:#}"), "detail lookup failed");
                self.presenter
                    .notify(&Notice::error("Error fetching movie details"));
                Err(ActionError::Provider(err))
            }
        }
    }

    /// Opens the detail view for a result card.
    ///
    /// # Errors
    ///
    /// `NotFound` or `Provider` from the lookup.
    #[instrument(skip(self))]
    pub async fn show_details(&self, id: &str) -> Result<MovieDetail, ActionError> {
        let result = {
            let _loading = LoadingGuard::new(&self.presenter);
            self.provider.get_by_id(id).await
        };

        match result {
            Ok(Some(detail)) => {
                self.presenter.show_detail(&detail);
                Ok(detail)
            }
            Ok(None) => {
                self.presenter
                    .notify(&Notice::error("Error loading movie details"));
                Err(ActionError::NotFound {
                    id: String::from(id),
                })
            }
            Err(err) => {
                tracing::warn!(id, error = %format!("{err:#}"), "detail lookup failed");
                self.presenter
                    .notify(&Notice::error("Error loading movie details"));
                Err(ActionError::Provider(err))
            }
        }
    }

    /// Fetches and appends the next page of the active search.
    ///
    /// A no-op returning [`LoadMoreOutcome::Idle`] when no search is active
    /// or "load more" is hidden (last page shown, or exhausted).
    ///
    /// # Errors
    ///
    /// `Provider` if the page request fails. The page counter keeps its
    /// incremented value.
    #[instrument(skip(self))]
    pub async fn load_more(&mut self) -> Result<LoadMoreOutcome, ActionError> {
        if !self.session.is_active() {
            tracing::debug!("load more ignored: no active search");
            return Ok(LoadMoreOutcome::Idle);
        }
        if !self.load_more_visible {
            tracing::debug!(page = self.session.page, "load more ignored: no further pages");
            return Ok(LoadMoreOutcome::Idle);
        }

        self.session.page = self.session.page.saturating_add(1);
        let page = self.session.page;
        self.phase = Phase::LoadingMore;

        let result = {
            let _loading = LoadingGuard::new(&self.presenter);
            self.provider.search(&self.session.query, page).await
        };

        match result {
            Ok(Some(results)) if !results.items.is_empty() => {
                let added = results.items.len();
                self.presenter.append_results(&results.items);
                tracing::debug!(page, added, total = results.total_results, "page appended");
                if results.has_more(page) {
                    self.set_load_more(true);
                    self.phase = Phase::Displaying;
                    Ok(LoadMoreOutcome::Appended { page, added })
                } else {
                    self.finish_exhausted();
                    Ok(LoadMoreOutcome::Exhausted { page, added })
                }
            }
            Ok(_) => {
                self.finish_exhausted();
                Ok(LoadMoreOutcome::Exhausted { page, added: 0 })
            }
            Err(err) => {
                tracing::warn!(page, error = %format!("{err:#}"), "load more failed");
                self.presenter
                    .notify(&Notice::error("Error loading more results"));
                self.phase = Phase::Displaying;
                Err(ActionError::Provider(err))
            }
        }
    }

    /// Picks a random keyword, then a random hit, and opens its detail view.
    ///
    /// # Errors
    ///
    /// `Discovery` if the keyword search or the detail lookup comes back
    /// empty, `Provider` on transport failure.
    #[instrument(skip(self))]
    pub async fn discover_random(&mut self) -> Result<MovieDetail, ActionError> {
        let keyword = DISCOVER_KEYWORDS
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(DEFAULT_DISCOVER_KEYWORD);
        tracing::debug!(keyword, "discovering random movie");

        let _loading = LoadingGuard::new(&self.presenter);

        let results = match self.provider.search(keyword, 1).await {
            Ok(results) => results,
            Err(err) => {
                tracing::warn!(keyword, error = %format!("{err:#}"), "discovery search failed");
                self.presenter.notify(&Notice::error("Error discovering movie"));
                return Err(ActionError::Provider(err));
            }
        };

        let Some(pick) = results
            .as_ref()
            .and_then(|page| page.items.choose(&mut self.rng))
        else {
            self.presenter
                .notify(&Notice::error("Could not discover a movie right now"));
            return Err(ActionError::Discovery {
                reason: "keyword search returned no results",
            });
        };

        match self.provider.get_by_id(&pick.id).await {
            Ok(Some(detail)) => {
                self.presenter.show_detail(&detail);
                self.presenter
                    .notify(&Notice::success("Discovered a random movie for you!"));
                Ok(detail)
            }
            Ok(None) => {
                self.presenter
                    .notify(&Notice::error("Error loading movie details"));
                Err(ActionError::Discovery {
                    reason: "detail lookup returned no data",
                })
            }
            Err(err) => {
                tracing::warn!(id = %pick.id, error = %format!("{err:#}"), "discovery lookup failed");
                self.presenter.notify(&Notice::error("Error discovering movie"));
                Err(ActionError::Provider(err))
            }
        }
    }

    /// Populates the top-rated catalog.
    ///
    /// Fetches the first [`CATALOG_SIZE`] identifiers concurrently, waits for
    /// all of them, drops failures and misses, and renders the rest in
    /// catalog order. Returns the number of cards rendered.
    #[instrument(skip(self))]
    pub async fn load_top_rated(&self) -> usize {
        let ids: Vec<&str> = self
            .top_rated
            .iter()
            .take(CATALOG_SIZE)
            .map(String::as_str)
            .collect();
        self.presenter.render_catalog_placeholders(ids.len());

        let results = join_all(ids.iter().map(|id| self.provider.get_by_id(id))).await;

        let movies: Vec<MovieDetail> = ids
            .iter()
            .zip(results)
            .filter_map(|(id, result)| match result {
                Ok(Some(detail)) => Some(detail),
                Ok(None) => {
                    tracing::debug!(id, "catalog entry not found");
                    None
                }
                Err(err) => {
                    tracing::warn!(id, error = %format!("{err:#}"), "catalog entry failed");
                    None
                }
            })
            .collect();

        tracing::info!(
            requested = ids.len(),
            loaded = movies.len(),
            "top rated catalog loaded"
        );

        if movies.is_empty() {
            self.presenter
                .render_catalog_unavailable("Unable to load top rated movies");
        } else {
            self.presenter.render_catalog(&movies);
        }
        movies.len()
    }

    /// Resets the session and empties the result area. Idempotent.
    pub fn clear_results(&mut self) {
        self.reset_results();
        self.phase = Phase::Idle;
    }

    /// Validates, resets the session to page 1 and runs the search.
    async fn start_search(
        &mut self,
        query: &str,
        mode: SearchMode,
    ) -> Result<SearchOutcome, ActionError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(self.reject(mode.empty_query_message()));
        }

        self.session.begin(query, mode);
        self.perform_search(mode).await
    }

    /// Requests the session's current page and renders it as a fresh list.
    async fn perform_search(&mut self, mode: SearchMode) -> Result<SearchOutcome, ActionError> {
        let page = self.session.page;
        self.phase = Phase::Searching;

        let result = {
            let _loading = LoadingGuard::new(&self.presenter);
            self.provider.search(&self.session.query, page).await
        };

        match result {
            Ok(Some(results)) if !results.items.is_empty() => {
                let more = has_more(page, results.total_results);
                let heading = format!("{mode} Results for \"{}\"", self.session.query);
                self.presenter.render_results(&heading, &results.items);
                self.set_load_more(more);
                self.presenter.notify(&Notice::success(format!(
                    "Found {} results",
                    results.total_results
                )));
                self.phase = Phase::Displaying;
                Ok(SearchOutcome {
                    total_results: results.total_results,
                    shown: results.items.len(),
                    has_more: more,
                })
            }
            Ok(_) => {
                let query = self.session.query.clone();
                self.presenter.notify(&Notice::error("No movies found"));
                self.reset_results();
                self.phase = Phase::Empty;
                Err(ActionError::NoResults { query })
            }
            Err(err) => {
                tracing::warn!(
                    query = %self.session.query,
                    page,
                    error = %format!("{err:#}"),
                    "search failed"
                );
                self.presenter
                    .notify(&Notice::error("Error searching for movies"));
                self.reset_results();
                self.phase = Phase::Errored;
                Err(ActionError::Provider(err))
            }
        }
    }

    /// Hides "load more" and reports that the last page was reached.
    fn finish_exhausted(&mut self) {
        self.set_load_more(false);
        self.presenter
            .notify(&Notice::warning("No more results to load"));
        self.phase = Phase::Exhausted;
    }

    /// Clears rendered results and the session without touching the phase.
    fn reset_results(&mut self) {
        self.presenter.clear_results();
        self.set_load_more(false);
        self.session.reset();
    }

    /// Tracks and shows "load more" visibility.
    fn set_load_more(&mut self, visible: bool) {
        self.load_more_visible = visible;
        self.presenter.set_load_more_visible(visible);
    }

    /// Reports a validation failure without contacting the provider.
    fn reject(&self, message: &'static str) -> ActionError {
        self.presenter.notify(&Notice::error(message));
        ActionError::Validation { message }
    }
}
