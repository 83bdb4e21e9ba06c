#![forbid(unsafe_code)]

//! Tracing subscriber setup for the showcase binary.
//!
//! The filter comes from `FKIT_LOG`, then `RUST_LOG`, then defaults to
//! `info`. Output goes to stderr so rendered frames on stdout stay clean.

use std::env;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub const LOG_FILTER_VAR: &str = "FKIT_LOG";
const FALLBACK_FILTER_VAR: &str = "RUST_LOG";
const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    #[must_use]
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(format: LogFormat) -> Result<(), LoggingError> {
    let filter = build_filter(&filter_directive_with(&env_get));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    let result = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|e| LoggingError::Install(e.to_string()))
}

fn env_get(name: &str) -> Option<String> {
    env::var(name).ok()
}

/// First non-empty directive from `FKIT_LOG`, `RUST_LOG`, or the default.
fn filter_directive_with<F: Fn(&str) -> Option<String>>(get: &F) -> String {
    [LOG_FILTER_VAR, FALLBACK_FILTER_VAR]
        .into_iter()
        .filter_map(get)
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Parse `directive`, falling back to the default on malformed input.
fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|err| {
        eprintln!("ignoring invalid log filter {directive:?}: {err}");
        EnvFilter::new(DEFAULT_FILTER)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn fkit_log_wins_over_rust_log() {
        let get = env_from(&[("FKIT_LOG", "debug"), ("RUST_LOG", "warn")]);
        assert_eq!(filter_directive_with(&get), "debug");
    }

    #[test]
    fn rust_log_used_when_fkit_log_blank() {
        let get = env_from(&[("FKIT_LOG", "  "), ("RUST_LOG", "fkit::changes=info")]);
        assert_eq!(filter_directive_with(&get), "fkit::changes=info");
    }

    #[test]
    fn defaults_to_info() {
        let get = env_from(&[]);
        assert_eq!(filter_directive_with(&get), "info");
    }

    #[test]
    fn json_flag_selects_format() {
        assert_eq!(LogFormat::from_json_flag(true), LogFormat::Json);
        assert_eq!(LogFormat::from_json_flag(false), LogFormat::Text);
    }

    #[test]
    fn malformed_directive_falls_back() {
        let filter = build_filter("fkit=notalevel");
        assert_eq!(filter.to_string(), "info");
    }
}
