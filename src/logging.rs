//! Diagnostic logging for the terminal runner.
//!
//! The terminal is in raw mode on the alternate screen while the app runs, so
//! logs cannot go to stdout/stderr. They go to a file, and only when
//! `FLASHY_LOG_PATH` is set. Otherwise no subscriber is installed and the
//! `tracing` macros in the library crates are no-ops.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "flashy=info,flashy_adapter=info,flashy_store=info,flashy_core=info";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub path: Option<PathBuf>,
    pub filter: Option<String>,
}

impl LogConfig {
    /// Create from environment variables.
    ///
    /// - `FLASHY_LOG_PATH`: log file (appended to); unset disables logging
    /// - `FLASHY_LOG`: `EnvFilter` directives
    pub fn from_env() -> Self {
        use std::env;

        Self::from_vars(env::var("FLASHY_LOG_PATH").ok(), env::var("FLASHY_LOG").ok())
    }

    /// Build from raw variable values. Blank counts as unset.
    pub fn from_vars(path: Option<String>, filter: Option<String>) -> Self {
        let non_empty = |value: Option<String>| {
            value
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        Self {
            path: non_empty(path).map(PathBuf::from),
            filter: non_empty(filter),
        }
    }

    /// Install the global subscriber. Returns false when logging is disabled.
    pub fn init(&self) -> Result<bool> {
        let Some(path) = &self.path else {
            return Ok(false);
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;

        let filter = match &self.filter {
            Some(directives) => EnvFilter::try_new(directives)
                .with_context(|| format!("invalid FLASHY_LOG filter `{directives}`"))?,
            None => EnvFilter::new(DEFAULT_FILTER),
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(true)
                    .with_thread_ids(false)
                    .compact(),
            )
            .try_init()
            .context("installing log subscriber")?;

        Ok(true)
    }
}
