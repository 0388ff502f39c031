//! Shape editor configuration library.
//!
//! Reads the editor's TOML settings document and resolves it into an
//! immutable [`ResolvedConfig`] for the host application.

pub mod color;
pub mod config;
pub mod observability;

pub use color::Rgb;
pub use config::schema::ResolvedConfig;
pub use config::{load_config, resolve, ConfigError};
