//! Reactor thermal-hydraulics configuration loading and validation.
//!
//! This crate provides:
//! - The typed `ReactorConfig` parameter record
//! - YAML/JSON loading and saving with exact round-trips
//! - Physical-range and safety-margin validation
//! - Config path resolution (explicit → env → XDG → system)
//! - Config snapshots for reproducible runs

pub mod error;
pub mod loader;
pub mod model;
pub mod resolve;
pub mod snapshot;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use loader::{load, save, Format};
pub use model::ReactorConfig;
pub use resolve::{resolve_config, ConfigSource, ResolvedPath};
pub use snapshot::ConfigSnapshot;
pub use validate::{validate, validate_strict, Diagnostic, Severity, ValidationReport};
