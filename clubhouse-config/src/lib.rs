//! Configuration library for Clubhouse.
//!
//! Settings are composed from built-in defaults, an optional
//! `clubhouse.toml`, and the process environment (after loading `.env`), in
//! that order of precedence. Guard rails reject combinations that are unsafe
//! outside development and collect softer issues as [`ConfigWarnings`].

#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod sources;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader};
pub use models::{
    Config, ConfigMetadata, CorsConfig, DirectoryConfig, ServerConfig,
    StaticAssetsConfig,
};
pub use sources::{EnvConfig, FileConfig};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
