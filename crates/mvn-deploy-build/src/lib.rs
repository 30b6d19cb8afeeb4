//! Archive assembly for mvn-deploy.
//!
//! # Pipeline
//!
//! ```text
//! mvn-deploy install / deploy
//!   1. Configure ── MavenConfig::configure(&Manifest) → ResolvedConfig
//!   2. Package   ── build_archive() → <buildDir>/<finalName>.<type>
//!                   (or existing_artifact() for --file)
//!   3. Maven     ── mvn -B install:install-file | deploy:deploy-file
//! ```
//!
//! # Entry selection
//!
//! - Every regular file below `buildDir`, in file-name order
//! - Directories produce no entries of their own
//! - The output archive path is skipped (exact match, not prefix)
//! - Optional `META-INF/MANIFEST.MF` when `manifestEntry` is set and the
//!   build directory does not provide one
//!
//! Binary files are copied byte-for-byte; text files are decoded with
//! `fileEncoding` and stored as UTF-8.

pub mod archive;
pub mod content;

pub use archive::{ArchiveError, build_archive, existing_artifact};
