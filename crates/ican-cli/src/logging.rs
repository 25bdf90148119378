//! Diagnostic logging via `tracing` and `tracing-subscriber`.
//!
//! Logs always go to stderr so they never interleave with results on stdout.
//! The `ICAN_LOG` environment variable takes an [`EnvFilter`] directive and
//! overrides the level picked from `--quiet` / `--verbose`.
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable read for an explicit filter directive.
pub const LOG_ENV: &str = "ICAN_LOG";

/// Configuration for the global subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Level applied to this workspace's crates when `ICAN_LOG` is unset.
    pub level: Level,
    /// Whether to use ANSI colors.
    pub with_ansi: bool,
}

impl LogConfig {
    /// Picks the level from the global CLI flags.
    ///
    /// - `--quiet`: errors only
    /// - default: warnings
    /// - `--verbose`: debug
    pub fn from_flags(quiet: bool, verbose: bool, with_ansi: bool) -> Self {
        let level = if quiet {
            Level::ERROR
        } else if verbose {
            Level::DEBUG
        } else {
            Level::WARN
        };
        Self { level, with_ansi }
    }

    fn default_directive(&self) -> String {
        let level = self.level.as_str().to_lowercase();
        // Target prefixes: `ican` is the binary crate, `ican_core` the library.
        format!("warn,ican={level},ican_core={level}")
    }
}

/// Installs the global subscriber.
///
/// A second call is a no-op; the first subscriber stays installed.
pub fn init_logging(config: &LogConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(false)
        .without_time();

    if tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_logs_errors_only() {
        assert_eq!(LogConfig::from_flags(true, false, false).level, Level::ERROR);
    }

    #[test]
    fn default_logs_warnings() {
        assert_eq!(LogConfig::from_flags(false, false, false).level, Level::WARN);
    }

    #[test]
    fn verbose_logs_debug() {
        assert_eq!(LogConfig::from_flags(false, true, true).level, Level::DEBUG);
    }

    #[test]
    fn default_directive_names_workspace_crates() {
        let directive = LogConfig::from_flags(false, true, false).default_directive();
        assert_eq!(directive, "warn,ican=debug,ican_core=debug");
    }

    #[test]
    fn init_twice_does_not_panic() {
        let config = LogConfig::from_flags(false, false, false);
        init_logging(&config);
        init_logging(&config);
    }
}
