//! Rendering sink consumed by `MovieClient`.

use crate::movie::{MovieDetail, SearchResultItem};

/// Severity of a user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// The action succeeded.
    Success,
    /// Informational, e.g. the last page was reached.
    Warning,
    /// The action failed.
    Error,
}

/// A short message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Text.
    pub message: String,
}

impl Notice {
    /// Creates a success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// Creates a warning notice.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    /// Creates an error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Presentation layer for search results, details and notifications.
///
/// Methods take `&self`; implementations that record state use interior
/// mutability.
pub trait Presenter {
    /// Shows the busy indicator.
    fn show_loading(&self);

    /// Hides the busy indicator.
    fn hide_loading(&self);

    /// Replaces the result area with `items` under `heading`.
    fn render_results(&self, heading: &str, items: &[SearchResultItem]);

    /// Appends `items` to the result area.
    fn append_results(&self, items: &[SearchResultItem]);

    /// Shows or hides the "load more" affordance.
    fn set_load_more_visible(&self, visible: bool);

    /// Empties and hides the result area.
    fn clear_results(&self);

    /// Opens the detail view.
    fn show_detail(&self, detail: &MovieDetail);

    /// Shows `count` placeholder cards while the catalog loads.
    fn render_catalog_placeholders(&self, count: usize);

    /// Replaces the catalog placeholders with `movies`.
    fn render_catalog(&self, movies: &[MovieDetail]);

    /// Replaces the catalog placeholders with `message`.
    fn render_catalog_unavailable(&self, message: &str);

    /// Shows a notification.
    fn notify(&self, notice: &Notice);
}

/// Shows the loading indicator until dropped.
pub(crate) struct LoadingGuard<'a, R: Presenter + ?Sized> {
    presenter: &'a R,
}

impl<'a, R: Presenter + ?Sized> LoadingGuard<'a, R> {
    /// Shows the indicator and returns the guard that hides it.
    pub(crate) fn new(presenter: &'a R) -> Self {
        presenter.show_loading();
        Self { presenter }
    }
}

impl<R: Presenter + ?Sized> Drop for LoadingGuard<'_, R> {
    fn drop(&mut self) {
        self.presenter.hide_loading();
    }
}
