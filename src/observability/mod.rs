//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! loader / resolver:
//!     → tracing events (info on load, warn on every fallback, debug on omitted fields)
//!     → logging.rs subscriber (stderr)
//! ```
//!
//! # Design Decisions
//! - The library only emits events; installing a subscriber is the host's call
//! - Every event about a field carries its `path` (e.g. `window.msaa_level`)

pub mod logging;
