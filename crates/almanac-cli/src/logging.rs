//! Logging setup for the almanac tools
//!
//! Diagnostics go through `tracing` to stderr; answers are printed to stdout
//! by the binaries themselves.
//!
//! # Log Levels
//!
//! - `warn` (default): problems only
//! - `info` (`-v`): answers and input sizes
//! - `debug` (`-vv`): per-stage working set sizes
//! - `trace` (`-vvv`): every range fragment

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for logging behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Level applied to this workspace's crates.
    pub level: Level,
    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_timestamps: false,
            with_target: false,
        }
    }
}

impl LogConfig {
    /// Create a `LogConfig` from the `-v` count.
    ///
    /// At trace level (`-vvv`) each line also carries a timestamp and the
    /// emitting module.
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        let detailed = level == Level::TRACE;
        Self {
            level,
            with_timestamps: detailed,
            with_target: detailed,
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Call once at startup. `RUST_LOG` overrides the configured level.
pub fn init_logging(config: &LogConfig) {
    let layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(config.with_target);

    let registry = tracing_subscriber::registry().with(build_env_filter(config.level));
    if config.with_timestamps {
        registry.with(layer).init();
    } else {
        registry.with(layer.without_time()).init();
    }
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG`.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

/// Our crates at `level`, everything else at warn.
fn default_directives(level: Level) -> String {
    let level = level.as_str().to_lowercase();
    format!("warn,almanac_pipeline={level},almanac_cli={level},almanac_solve={level},almanac_trace={level}")
}
