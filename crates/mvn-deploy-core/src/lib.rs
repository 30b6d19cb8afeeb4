//! Core types and configuration for mvn-deploy.
//!
//! This crate defines the `.mvnconfig.json` schema ([`MavenConfig`]), the
//! project manifest ([`Manifest`]), placeholder resolution into a
//! [`ResolvedConfig`], snapshot versioning, and shared error types.

pub mod config;
pub mod error;
pub mod manifest;
pub mod version;

pub use config::{
    DEFAULT_CONFIG_FILE, FileEncoding, MavenConfig, Packaging, RepositoryEntry, ResolvedConfig,
};
pub use error::{Error, Result};
pub use manifest::{MANIFEST_FILE, Manifest};
