//! Interactive shell: one `MovieClient` driven by line commands.

use std::io::Write;

use anyhow::{Context, Result};
use cinefind_api::provider::LocalMovieProvider;
use cinefind_api::session::{ActionError, MovieClient, Presenter};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// `title <QUERY>`
    Title(String),
    /// `keyword <QUERY>`
    Keyword(String),
    /// `id <IMDB_ID>`
    Id(String),
    /// `open <IMDB_ID>`
    Open(String),
    /// `more`
    More,
    /// `discover`
    Discover,
    /// `top`
    Top,
    /// `clear`
    Clear,
    /// `help`
    Help,
    /// `quit` / `exit`
    Quit,
    /// Blank line.
    Empty,
    /// A known command used without its required argument.
    Usage(&'static str),
    /// Anything else.
    Unknown(String),
}

/// Parses one input line.
///
/// A missing search argument becomes an empty query so the client reports
/// its own validation message.
pub fn parse_command(line: &str) -> ShellCommand {
    let line = line.trim();
    let (head, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(head, rest)| (head, rest.trim()));

    match head.to_ascii_lowercase().as_str() {
        "" => ShellCommand::Empty,
        "title" | "t" => ShellCommand::Title(String::from(rest)),
        "keyword" | "k" => ShellCommand::Keyword(String::from(rest)),
        "id" => ShellCommand::Id(String::from(rest)),
        "open" | "o" if rest.is_empty() => ShellCommand::Usage("open <IMDB_ID>"),
        "open" | "o" => ShellCommand::Open(String::from(rest)),
        "more" | "m" => ShellCommand::More,
        "discover" | "d" => ShellCommand::Discover,
        "top" => ShellCommand::Top,
        "clear" => ShellCommand::Clear,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        _ => ShellCommand::Unknown(String::from(head)),
    }
}

/// Logs the command summary.
fn log_help() {
    tracing::info!("Commands:");
    tracing::info!("  title <QUERY>     search by title");
    tracing::info!("  keyword <QUERY>   search by keywords");
    tracing::info!("  id <IMDB_ID>      look up one title");
    tracing::info!("  open <IMDB_ID>    show details for a listed result");
    tracing::info!("  more              load the next page");
    tracing::info!("  discover          show a random movie");
    tracing::info!("  top               show the top rated catalog");
    tracing::info!("  clear             clear the current results");
    tracing::info!("  help              show this help");
    tracing::info!("  quit              leave the shell");
}

/// Records a failed action. The presenter has already shown the notice.
pub fn log_action_error(err: &ActionError) {
    tracing::debug!(error = %err, "action failed");
}

/// Runs one command. Returns `false` when the shell should stop.
pub async fn execute<P, R>(client: &mut MovieClient<P, R>, command: ShellCommand) -> bool
where
    P: LocalMovieProvider,
    R: Presenter,
{
    match command {
        ShellCommand::Title(query) => {
            if let Err(err) = client.search_by_title(&query).await {
                log_action_error(&err);
            }
        }
        ShellCommand::Keyword(query) => {
            if let Err(err) = client.search_by_keyword(&query).await {
                log_action_error(&err);
            }
        }
        ShellCommand::Id(id) => {
            if let Err(err) = client.search_by_id(&id).await {
                log_action_error(&err);
            }
        }
        ShellCommand::Open(id) => {
            if let Err(err) = client.show_details(&id).await {
                log_action_error(&err);
            }
        }
        ShellCommand::More => match client.load_more().await {
            Ok(outcome) => tracing::debug!(?outcome, "load more finished"),
            Err(err) => log_action_error(&err),
        },
        ShellCommand::Discover => {
            if let Err(err) = client.discover_random().await {
                log_action_error(&err);
            }
        }
        ShellCommand::Top => {
            client.load_top_rated().await;
        }
        ShellCommand::Clear => {
            client.clear_results();
            tracing::info!("Results cleared");
        }
        ShellCommand::Help => log_help(),
        ShellCommand::Quit => return false,
        ShellCommand::Empty => {}
        ShellCommand::Usage(usage) => tracing::warn!("Usage: {usage}"),
        ShellCommand::Unknown(head) => {
            tracing::warn!("Unknown command: {head} (type `help` for a list)");
        }
    }
    true
}

/// Reads commands from `input` until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or flushing the prompt fails.
#[allow(clippy::print_stdout)]
pub async fn run_shell<P, R>(
    client: &mut MovieClient<P, R>,
    input: impl AsyncBufRead + Unpin,
) -> Result<()>
where
    P: LocalMovieProvider,
    R: Presenter,
{
    tracing::info!("Type `help` for commands, `quit` to leave.");
    let mut lines = input.lines();
    loop {
        print!("cinefind> ");
        std::io::stdout().flush().context("failed to flush prompt")?;

        let Some(line) = lines.next_line().await.context("failed to read command")? else {
            println!();
            break;
        };
        if !execute(client, parse_command(&line)).await {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use cinefind_api::fallback::FallbackProvider;
    use cinefind_api::session::Phase;

    use super::*;
    use crate::presenter::TerminalPresenter;

    #[test]
    fn test_parse_search_commands() {
        // Arrange & Act & Assert
        assert_eq!(
            parse_command("title  the dark knight "),
            ShellCommand::Title(String::from("the dark knight"))
        );
        assert_eq!(
            parse_command("K space opera"),
            ShellCommand::Keyword(String::from("space opera"))
        );
        assert_eq!(
            parse_command("id tt0468569"),
            ShellCommand::Id(String::from("tt0468569"))
        );
    }

    #[test]
    fn test_parse_search_without_argument_keeps_empty_query() {
        // Arrange & Act & Assert
        assert_eq!(parse_command("title"), ShellCommand::Title(String::new()));
        assert_eq!(parse_command("id   "), ShellCommand::Id(String::new()));
    }

    #[test]
    fn test_parse_open_requires_id() {
        // Arrange & Act & Assert
        assert_eq!(parse_command("open"), ShellCommand::Usage("open <IMDB_ID>"));
        assert_eq!(
            parse_command("open tt1375666"),
            ShellCommand::Open(String::from("tt1375666"))
        );
    }

    #[test]
    fn test_parse_simple_commands() {
        // Arrange & Act & Assert
        assert_eq!(parse_command("more"), ShellCommand::More);
        assert_eq!(parse_command("discover"), ShellCommand::Discover);
        assert_eq!(parse_command("top"), ShellCommand::Top);
        assert_eq!(parse_command("clear"), ShellCommand::Clear);
        assert_eq!(parse_command("help"), ShellCommand::Help);
        assert_eq!(parse_command("EXIT"), ShellCommand::Quit);
        assert_eq!(parse_command("   "), ShellCommand::Empty);
        assert_eq!(
            parse_command("frobnicate now"),
            ShellCommand::Unknown(String::from("frobnicate"))
        );
    }

    #[tokio::test]
    async fn test_execute_drives_session() {
        // Arrange
        let mut client = MovieClient::new(FallbackProvider::new(), TerminalPresenter);

        // Act
        let keep_going = execute(&mut client, parse_command("title batman")).await;

        // Assert
        assert!(keep_going);
        assert_eq!(client.session().query, "batman");
        assert_eq!(client.phase(), Phase::Displaying);
    }

    #[tokio::test]
    async fn test_execute_quit_stops() {
        // Arrange
        let mut client = MovieClient::new(FallbackProvider::new(), TerminalPresenter);

        // Act & Assert
        assert!(!execute(&mut client, ShellCommand::Quit).await);
    }

    #[tokio::test]
    async fn test_run_shell_until_quit() {
        // Arrange
        let mut client = MovieClient::new(FallbackProvider::new(), TerminalPresenter);
        let input = "keyword space\nmore\nclear\nquit\ntitle never-run\n".as_bytes();

        // Act
        run_shell(&mut client, input).await.unwrap();

        // Assert
        assert!(!client.session().is_active());
        assert_eq!(client.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn test_run_shell_stops_at_end_of_input() {
        // Arrange
        let mut client = MovieClient::new(FallbackProvider::new(), TerminalPresenter);
        let input = tokio::io::BufReader::new("title batman".as_bytes());

        // Act
        run_shell(&mut client, input).await.unwrap();

        // Assert
        assert_eq!(client.session().query, "batman");
        assert_eq!(client.phase(), Phase::Displaying);
    }
}
