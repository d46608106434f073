//! Tracing subscriber setup for the `dark-guard` binary.
//!
//! Filter priority, highest first:
//!
//! 1. `DARK_GUARD_LOG` (per-target directives, e.g. `dark_guard::engine=debug,warn`)
//! 2. `RUST_LOG`
//! 3. CLI flags (`-q` error, default warn, `-v` info, `-vv` debug)
//!
//! The library only emits events; installing a subscriber is left to `main`.

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Project-specific filter variable.
pub const LOG_ENV_VAR: &str = "DARK_GUARD_LOG";

const TARGET_PREFIX: &str = "dark_guard";

/// Verbosity level derived from CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// `-q`: only errors.
    Quiet,
    /// Warnings and above.
    Normal,
    /// `-v`: run-level progress (`info`).
    Verbose,
    /// `-vv` and beyond: per-entry detail (`debug`).
    Debug,
}

impl Verbosity {
    /// A `-v` count wins over `-q`.
    #[must_use]
    pub const fn from_flags(verbose: u8, quiet: bool) -> Self {
        match verbose {
            0 if quiet => Self::Quiet,
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    #[must_use]
    pub const fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
        }
    }
}

/// Install the global stderr subscriber.
///
/// Call once, before config loading, so loader events are captured. A
/// second call is a no-op.
pub fn init_subscriber(verbosity: Verbosity, use_ansi: bool) {
    let filter = build_env_filter(verbosity);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi)
        .with_target(true)
        .without_time();

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer.compact())
        .try_init();

    if result.is_err() {
        tracing::debug!(target: "dark_guard::logging", "subscriber already installed");
    }
}

fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
    // An unparseable project filter falls through rather than failing the run.
    if let Ok(directives) = std::env::var(LOG_ENV_VAR)
        && let Ok(filter) = EnvFilter::try_new(&directives)
    {
        return filter;
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    EnvFilter::try_new(default_directive(verbosity))
        .unwrap_or_else(|_| EnvFilter::new(verbosity.default_level().as_str()))
}

/// Dependencies stay at `warn` unless debugging; our own targets follow
/// the requested level.
fn default_directive(verbosity: Verbosity) -> String {
    let level = verbosity.default_level();
    match verbosity {
        Verbosity::Quiet | Verbosity::Normal => level.to_string(),
        Verbosity::Verbose | Verbosity::Debug => {
            format!("{},{TARGET_PREFIX}={level}", Level::WARN)
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
