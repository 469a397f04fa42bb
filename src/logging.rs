//! Tracing setup for the CLI
//!
//! `RUST_LOG` wins when set; otherwise the `-v` count picks the crate's level.
//! Logs go to stderr so they never mix with JSON on stdout.

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter directive for a given verbosity
#[must_use]
pub fn default_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("anagram_index={level}")
}

/// Install the global subscriber; a second call only warns
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(default_directive(0), "anagram_index=warn");
        assert_eq!(default_directive(1), "anagram_index=info");
        assert_eq!(default_directive(2), "anagram_index=debug");
        assert_eq!(default_directive(7), "anagram_index=trace");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(0);
        init(3);
    }
}
