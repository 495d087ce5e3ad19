//! Implementation of `scout session`.
//!
//! Reads one line per keystroke-equivalent from stdin and prints the render feed after
//! every transition. Lines starting with `:` are palette commands; anything else
//! replaces the query.

use std::{
    io::{self, BufRead},
    process::ExitCode,
};

use scout_session::{Command, NavigationEvent, SearchSession};

use crate::cli::{
    args::SessionCommand,
    context::CommandContext,
    output::{print_feed, print_navigation},
};

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    /// Apply a palette command.
    Command(Command),
    /// End the session.
    Quit,
    /// Unrecognized or malformed command.
    Invalid(String),
}

/// Runs the interactive palette until `:quit` or end of input.
pub fn run(ctx: &mut CommandContext, cmd: &SessionCommand) -> ExitCode {
    let engine = match ctx.engine(None) {
        Ok(engine) => engine,
        Err(code) => return code,
    };

    let json = cmd.json;
    let recording = ctx.config.recent.enabled && !cmd.no_recent;
    let mut session = SearchSession::new(engine)
        .with_recording(recording)
        .with_navigator(Box::new(move |event: &NavigationEvent| {
            print_navigation(event, json);
        }));

    if recording {
        match ctx.recent_store() {
            Ok(store) => {
                session = session.with_recent_store(Box::new(store), ctx.config.recent.capacity);
            }
            Err(e) => tracing::warn!(error = %e, "recent queries will not be saved"),
        }
    }

    session.open();
    print_feed(&session.render(), json);

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("error: failed to read input: {e}");
                return ExitCode::FAILURE;
            }
        };

        match parse_input(&line) {
            Input::Quit => break,
            Input::Invalid(message) => eprintln!("warning: {message}"),
            Input::Command(command) => {
                session.dispatch(command);
                print_feed(&session.render(), json);
            }
        }
    }

    ExitCode::SUCCESS
}

/// Parses an input line into a palette command.
fn parse_input(line: &str) -> Input {
    let line = line.trim_end_matches('\r');
    let Some(rest) = line.strip_prefix(':') else {
        return Input::Command(Command::SetQuery(line.to_string()));
    };

    let mut words = rest.split_whitespace();
    let Some(name) = words.next() else {
        return Input::Invalid("empty command".to_string());
    };

    match name {
        "next" | "n" => Input::Command(Command::NavigateNext),
        "prev" | "previous" | "p" => Input::Command(Command::NavigatePrevious),
        "confirm" | "enter" => Input::Command(Command::Confirm),
        "open" => Input::Command(Command::Open),
        "close" | "esc" => Input::Command(Command::Close),
        "quit" | "q" => Input::Quit,
        "pick" => match words.next().and_then(|n| n.parse::<usize>().ok()) {
            Some(n) if n > 0 => Input::Command(Command::ConfirmAt(n - 1)),
            _ => Input::Invalid("usage: :pick N (1-based result number)".to_string()),
        },
        other => Input::Invalid(format!("unknown command ':{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_lines_set_query() {
        assert_eq!(
            parse_input("lead scorer"),
            Input::Command(Command::SetQuery("lead scorer".to_string()))
        );
        assert_eq!(
            parse_input(""),
            Input::Command(Command::SetQuery(String::new()))
        );
        assert_eq!(
            parse_input("acme\r"),
            Input::Command(Command::SetQuery("acme".to_string()))
        );
    }

    #[test]
    fn test_navigation_commands() {
        assert_eq!(parse_input(":next"), Input::Command(Command::NavigateNext));
        assert_eq!(parse_input(":prev"), Input::Command(Command::NavigatePrevious));
        assert_eq!(parse_input(":confirm"), Input::Command(Command::Confirm));
        assert_eq!(parse_input(":open"), Input::Command(Command::Open));
        assert_eq!(parse_input(":close"), Input::Command(Command::Close));
        assert_eq!(parse_input(":quit"), Input::Quit);
    }

    #[test]
    fn test_pick_is_one_based() {
        assert_eq!(parse_input(":pick 1"), Input::Command(Command::ConfirmAt(0)));
        assert_eq!(parse_input(":pick 3"), Input::Command(Command::ConfirmAt(2)));
        assert!(matches!(parse_input(":pick 0"), Input::Invalid(_)));
        assert!(matches!(parse_input(":pick"), Input::Invalid(_)));
        assert!(matches!(parse_input(":pick two"), Input::Invalid(_)));
    }

    #[test]
    fn test_unknown_commands() {
        assert!(matches!(parse_input(":"), Input::Invalid(_)));
        assert!(matches!(parse_input(":jump"), Input::Invalid(_)));
    }
}
