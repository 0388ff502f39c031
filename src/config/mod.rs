//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & parse)
//!     → raw.rs (classify every key: absent / present / wrong type / malformed)
//!     → validation.rs (defaults, range checks, required fields)
//!     → ResolvedConfig (validated, immutable)
//!     → shared via Arc with the renderer and UI layer
//! ```
//!
//! # Design Decisions
//! - Config is immutable once resolved; there is no reload
//! - Optional fields fall back to defaults instead of failing
//! - Parsing never applies policy; only the resolver decides what invalid means

pub mod loader;
pub mod raw;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_config_or_default, parse_config, ConfigError};
pub use raw::{Field, RawConfig};
pub use schema::{ColorsConfig, MsaaLevel, ResolvedConfig, ShapeConfig, SharedConfig, WindowConfig};
pub use validation::resolve;
