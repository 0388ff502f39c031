//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for the CLI
//! - Pick the filter from `--log-level`, then `RUST_LOG`, then a default
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Logs go to stderr so stdout stays clean for resolved output

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither a flag nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "shapes_config=info";

/// Build the filter: explicit level wins, then the environment, then the default.
pub fn build_filter(level: Option<&str>) -> EnvFilter {
    if let Some(level) = level {
        match EnvFilter::try_new(level) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("Ignoring invalid log level '{}': {}", level, e),
        }
    }

    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into())
}

/// Install the global subscriber. Call once, at startup.
pub fn init_logging(level: Option<&str>) {
    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
