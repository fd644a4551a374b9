//! cinefind - movie lookup CLI backed by the OMDb API.

/// Application configuration (TOML).
mod config;
/// Terminal presenter.
mod presenter;
/// Interactive shell.
mod shell;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::AppConfig;
use crate::presenter::TerminalPresenter;
use crate::shell::{log_action_error, run_shell};
use cinefind_api::fallback::FallbackProvider;
use cinefind_api::omdb::OmdbClient;
use cinefind_api::provider::AnyProvider;
use cinefind_api::session::{LoadMoreOutcome, MovieClient};

/// Environment variable that overrides the configured API key.
const API_KEY_ENV: &str = "OMDB_API_KEY";

/// Client type used by every subcommand.
type CliClient = MovieClient<AnyProvider, TerminalPresenter>;

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Search movies by title.
    Title(SearchArgs),
    /// Search movies by keywords.
    Keyword(SearchArgs),
    /// Look up a single title by IMDb ID.
    Id(IdArgs),
    /// Show a random movie.
    Discover,
    /// Show the top rated catalog.
    TopRated,
    /// Start an interactive session.
    Shell,
    /// Manage the config file.
    Config(ConfigCommand),
}

/// Arguments for the `title` and `keyword` subcommands.
#[derive(clap::Args)]
struct SearchArgs {
    /// Search query (e.g. "batman").
    query: String,
    /// Number of result pages to show.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=100))]
    pages: u32,
}

/// Arguments for the `id` subcommand.
#[derive(clap::Args)]
struct IdArgs {
    /// IMDb identifier (e.g. "tt0468569").
    imdb_id: String,
}

/// Arguments for the `config` subcommand.
#[derive(clap::Args)]
struct ConfigCommand {
    /// Config subcommand to run.
    #[command(subcommand)]
    command: ConfigSubcommands,
}

/// Available config subcommands.
#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Store the OMDb API key in the config file.
    SetKey(SetKeyArgs),
    /// Print the config file path.
    Path,
}

/// Arguments for the `config set-key` subcommand.
#[derive(clap::Args)]
struct SetKeyArgs {
    /// OMDb API key.
    key: String,
}

/// Picks the OMDb client when a usable key is configured, otherwise the
/// built-in dataset.
///
/// # Errors
///
/// Returns an error if the configured base URL is invalid or the HTTP
/// client fails to build.
#[instrument(skip_all)]
fn build_provider(config: &AppConfig) -> Result<AnyProvider> {
    let Some(api_key) = config.api_key(std::env::var(API_KEY_ENV).ok()) else {
        return Ok(AnyProvider::Fallback(FallbackProvider::new()));
    };

    let mut builder = OmdbClient::builder().api_key(api_key).user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(base_url) = config.base_url()? {
        builder = builder.base_url(base_url);
    }
    let client = builder.build().context("failed to build OMDb client")?;
    Ok(AnyProvider::Omdb(client))
}

/// Loads config and builds the session client.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or the provider fails to build.
#[instrument(skip_all)]
fn build_client(dir: Option<&PathBuf>) -> Result<CliClient> {
    let path = AppConfig::path(dir.map(PathBuf::as_path))?;
    let config = AppConfig::load(&path)?;
    let provider = build_provider(&config)?;
    if provider.is_fallback() {
        tracing::warn!("No OMDb API key configured, using the built-in demo dataset");
    }
    tracing::debug!(
        provider = provider.name(),
        fallback = provider.is_fallback(),
        config = %path.display(),
        "client ready"
    );
    Ok(MovieClient::new(provider, TerminalPresenter).with_top_rated(config.top_rated()))
}

/// Runs the `title` and `keyword` subcommands.
///
/// Follows "load more" until `--pages` pages are shown or results run out.
///
/// # Errors
///
/// Returns an error if the client fails to build.
#[instrument(skip_all)]
async fn run_search(args: &SearchArgs, by_keyword: bool, dir: Option<&PathBuf>) -> Result<()> {
    let mut client = build_client(dir)?;

    let result = if by_keyword {
        client.search_by_keyword(&args.query).await
    } else {
        client.search_by_title(&args.query).await
    };
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(err) => {
            log_action_error(&err);
            return Ok(());
        }
    };

    if !outcome.has_more {
        return Ok(());
    }
    for _ in 1..args.pages {
        match client.load_more().await {
            Ok(LoadMoreOutcome::Appended { .. }) => {}
            Ok(_) => break,
            Err(err) => {
                log_action_error(&err);
                break;
            }
        }
    }

    Ok(())
}

/// Runs the `id` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build.
#[instrument(skip_all)]
async fn run_id(args: &IdArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_client(dir)?;
    if let Err(err) = client.search_by_id(&args.imdb_id).await {
        log_action_error(&err);
    }
    Ok(())
}

/// Runs the `discover` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build.
#[instrument(skip_all)]
async fn run_discover(dir: Option<&PathBuf>) -> Result<()> {
    let mut client = build_client(dir)?;
    if let Err(err) = client.discover_random().await {
        log_action_error(&err);
    }
    Ok(())
}

/// Runs the `top-rated` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build.
#[instrument(skip_all)]
async fn run_top_rated(dir: Option<&PathBuf>) -> Result<()> {
    let client = build_client(dir)?;
    let loaded = client.load_top_rated().await;
    tracing::debug!(loaded, "catalog finished");
    Ok(())
}

/// Runs the `shell` subcommand on stdin.
///
/// # Errors
///
/// Returns an error if the client fails to build or stdin cannot be read.
#[instrument(skip_all)]
async fn run_interactive(dir: Option<&PathBuf>) -> Result<()> {
    let mut client = build_client(dir)?;
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    run_shell(&mut client, stdin).await
}

/// Runs the `config set-key` subcommand.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded or saved.
#[instrument(skip_all)]
fn run_config_set_key(args: &SetKeyArgs, dir: Option<&PathBuf>) -> Result<()> {
    let path = AppConfig::path(dir.map(PathBuf::as_path))?;
    let mut config = AppConfig::load(&path)?;
    config.omdb.api_key = Some(String::from(args.key.trim()));
    config.save(&path)?;
    tracing::info!("Saved API key to {}", path.display());
    Ok(())
}

/// Runs the `config path` subcommand.
///
/// # Errors
///
/// Returns an error if the config path cannot be resolved.
fn run_config_path(dir: Option<&PathBuf>) -> Result<()> {
    let path = AppConfig::path(dir.map(PathBuf::as_path))?;
    tracing::info!("{}", path.display());
    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    let dir = cli.dir.as_ref();
    match cli.command {
        Commands::Title(args) => run_search(&args, false, dir).await,
        Commands::Keyword(args) => run_search(&args, true, dir).await,
        Commands::Id(args) => run_id(&args, dir).await,
        Commands::Discover => run_discover(dir).await,
        Commands::TopRated => run_top_rated(dir).await,
        Commands::Shell => run_interactive(dir).await,
        Commands::Config(cmd) => match cmd.command {
            ConfigSubcommands::SetKey(args) => run_config_set_key(&args, dir),
            ConfigSubcommands::Path => run_config_path(dir),
        },
    }
}
