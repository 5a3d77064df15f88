//! Tracing subscriber setup shared by the kbase binaries.
//!
//! The filter comes from the `KBASE_LOG` environment variable when set,
//! otherwise from the configured level.

use kbase_core::error::{KbaseError, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable overriding the configured log filter.
pub const LOG_ENV_VAR: &str = "KBASE_LOG";

/// Where formatted log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Appends to a file; used by the REPL so logs stay out of the chat.
    File(PathBuf),
}

/// Builds the filter from `KBASE_LOG`, falling back to `default_level` when
/// the variable is unset or blank.
///
/// # Errors
///
/// Returns `KbaseError::Config` when `KBASE_LOG` is set but does not parse,
/// or when `default_level` is used and does not parse.
pub fn resolve_filter(default_level: &str) -> Result<EnvFilter> {
    let from_env = std::env::var(LOG_ENV_VAR).ok();
    filter_from(from_env.as_deref(), default_level)
}

fn filter_from(from_env: Option<&str>, default_level: &str) -> Result<EnvFilter> {
    match from_env.map(str::trim).filter(|v| !v.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives).map_err(|e| {
            KbaseError::config(format!("Invalid {LOG_ENV_VAR} filter '{directives}': {e}"))
        }),
        None => EnvFilter::try_new(default_level)
            .map_err(|e| KbaseError::config(format!("Invalid log filter '{default_level}': {e}"))),
    }
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the filter is invalid, the log file cannot be opened,
/// or a global subscriber is already installed.
pub fn init_logging(default_level: &str, target: LogTarget) -> Result<()> {
    let filter = resolve_filter(default_level)?;
    let registry = tracing_subscriber::registry().with(filter);

    let installed = match target {
        LogTarget::Stderr => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            registry
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(true),
                )
                .try_init()
        }
    };

    installed.map_err(|e| KbaseError::internal(format!("Failed to install tracing subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_filter_accepts_levels_and_directives() {
        assert!(resolve_filter("debug").is_ok());
        assert!(resolve_filter("info,kbase_application=trace").is_ok());
    }

    #[test]
    fn test_env_directives_override_default() {
        let filter = filter_from(Some("kbase_application=debug"), "info").unwrap();
        assert!(filter.to_string().contains("kbase_application=debug"));
    }

    #[test]
    fn test_blank_env_uses_default() {
        let filter = filter_from(Some("  "), "warn").unwrap();
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn test_malformed_env_is_reported() {
        let err = filter_from(Some("kbase=notalevel"), "info").unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("KBASE_LOG"));
    }
}
