//! Diagnostic logging for the CLI.
//!
//! Library crates emit `tracing` events; the binary installs a `fmt` subscriber on
//! stderr so stdout stays clean for results and JSON.

use std::{env, io};

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "SCOUT_LOG";

/// Filter directive for a `-v` count when `SCOUT_LOG` is unset.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber.
///
/// `SCOUT_LOG` wins over `-v` so a specific filter can be set from the environment.
pub fn init(verbose: u8) {
    let filter = env::var(LOG_ENV)
        .ok()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbose)));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .without_time(),
        )
        .try_init();

    if let Err(e) = result {
        eprintln!("warning: logging unavailable: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "debug");
        assert_eq!(default_directive(2), "trace");
        assert_eq!(default_directive(9), "trace");
    }
}
