//! `Presenter` that writes results to the terminal through `tracing`.

use cinefind_api::movie::{MovieDetail, SearchResultItem};
use cinefind_api::session::{Notice, NoticeLevel, Presenter};

/// Terminal presenter. Every line goes out as a `tracing` event.
#[derive(Debug, Default)]
pub struct TerminalPresenter;

/// Formats one result row.
fn result_line(item: &SearchResultItem) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        item.id, item.year, item.media_type, item.title
    )
}

/// Formats the detail view, skipping fields the provider did not fill.
pub fn detail_lines(detail: &MovieDetail) -> Vec<String> {
    let mut lines = vec![format!("{} ({})", detail.title, detail.year)];

    let fields: [(&str, Option<&str>); 17] = [
        ("IMDb", Some(detail.id.as_str())),
        ("Type", Some(detail.media_type.as_str())),
        ("Rating", detail.rating.as_deref()),
        ("Votes", detail.vote_count.as_deref()),
        ("Rated", detail.rated.as_deref()),
        ("Runtime", detail.runtime.as_deref()),
        ("Released", detail.release_date.as_deref()),
        ("Director", detail.director.as_deref()),
        ("Writer", detail.writer.as_deref()),
        ("Cast", detail.cast.as_deref()),
        ("Language", detail.language.as_deref()),
        ("Country", detail.country.as_deref()),
        ("Box office", detail.box_office.as_deref()),
        ("Awards", detail.awards.as_deref()),
        ("Metascore", detail.metascore.as_deref()),
        ("Production", detail.production.as_deref()),
        ("Poster", detail.poster_url.as_deref()),
    ];
    lines.extend(
        fields
            .iter()
            .filter_map(|(label, value)| value.map(|v| format!("{label}:\t{v}"))),
    );

    if !detail.genres.is_empty() {
        lines.push(format!("Genres:\t{}", detail.genres.join(", ")));
    }
    for rating in &detail.ratings {
        lines.push(format!("  {}:\t{}", rating.source, rating.value));
    }
    if let Some(plot) = &detail.plot {
        lines.push(format!("Plot:\t{plot}"));
    }
    lines
}

/// Formats one catalog card.
fn catalog_line(rank: usize, movie: &MovieDetail) -> String {
    format!(
        "{rank}.\t{}\t{} ({})\t{}",
        movie.id,
        movie.title,
        movie.year,
        movie.rating.as_deref().unwrap_or("-")
    )
}

impl Presenter for TerminalPresenter {
    fn show_loading(&self) {
        tracing::debug!("loading");
    }

    fn hide_loading(&self) {
        tracing::debug!("loaded");
    }

    fn render_results(&self, heading: &str, items: &[SearchResultItem]) {
        tracing::info!("{heading}");
        tracing::info!("ID\t\tYear\tType\tTitle");
        for item in items {
            tracing::info!("{}", result_line(item));
        }
    }

    fn append_results(&self, items: &[SearchResultItem]) {
        for item in items {
            tracing::info!("{}", result_line(item));
        }
    }

    fn set_load_more_visible(&self, visible: bool) {
        if visible {
            tracing::info!("More results available");
        }
    }

    fn clear_results(&self) {
        tracing::debug!("results cleared");
    }

    fn show_detail(&self, detail: &MovieDetail) {
        for line in detail_lines(detail) {
            tracing::info!("{line}");
        }
    }

    fn render_catalog_placeholders(&self, count: usize) {
        tracing::info!("Loading {count} top rated movies...");
    }

    fn render_catalog(&self, movies: &[MovieDetail]) {
        tracing::info!("Top Rated Movies");
        for (index, movie) in movies.iter().enumerate() {
            tracing::info!("{}", catalog_line(index.saturating_add(1), movie));
        }
    }

    fn render_catalog_unavailable(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn notify(&self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Success => tracing::info!("{}", notice.message),
            NoticeLevel::Warning => tracing::warn!("{}", notice.message),
            NoticeLevel::Error => tracing::error!("{}", notice.message),
        }
    }
}
