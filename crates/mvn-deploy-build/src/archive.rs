use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use mvn_deploy_core::{Manifest, ResolvedConfig};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::content::Content;

/// Entry name of the JAR manifest.
pub const JAR_MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";

/// Packages the build directory into `<buildDir>/<finalName>.<type>`.
///
/// Every regular file below `buildDir` becomes an entry named by its
/// forward-slash relative path. The output file itself is skipped so a
/// previous archive is never packaged into the new one. Entries are
/// DEFLATE-compressed with fixed timestamps and permissions, in file-name
/// order, so identical inputs yield identical archives.
///
/// The archive is assembled in memory and then written over any existing
/// file at the output path.
pub fn build_archive(config: &ResolvedConfig, manifest: &Manifest) -> Result<PathBuf, ArchiveError> {
    let build_dir = &config.build_dir;
    if !build_dir.is_dir() {
        return Err(ArchiveError::MissingBuildDir(build_dir.clone()));
    }

    let output = config.archive_path();
    let (bytes, entries) = assemble(config, manifest, &output)?;

    std::fs::write(&output, bytes).map_err(|e| ArchiveError::Write {
        path: output.clone(),
        source: e,
    })?;

    tracing::info!(path = %output.display(), entries, "archive written");
    Ok(output)
}

/// Use a caller-supplied archive instead of packaging.
///
/// # Errors
///
/// Returns [`ArchiveError::FileNotFound`] unless `path` is an existing regular file.
pub fn existing_artifact(path: &Path) -> Result<PathBuf, ArchiveError> {
    if path.is_file() {
        Ok(path.to_path_buf())
    } else {
        Err(ArchiveError::FileNotFound(path.to_path_buf()))
    }
}

fn assemble(
    config: &ResolvedConfig,
    manifest: &Manifest,
    output: &Path,
) -> Result<(Vec<u8>, usize), ArchiveError> {
    let build_dir = &config.build_dir;
    let options = entry_options();
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let mut entries = 0usize;

    if config.manifest_entry && !build_dir.join(JAR_MANIFEST_PATH).is_file() {
        writer.start_file(JAR_MANIFEST_PATH, options)?;
        writer
            .write_all(jar_manifest(manifest).as_bytes())
            .map_err(zip::result::ZipError::from)?;
        entries += 1;
    }

    for entry in WalkDir::new(build_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| ArchiveError::Walk {
            path: build_dir.clone(),
            source: e,
        })?;

        let file_type = entry.file_type();
        if file_type.is_symlink() {
            tracing::warn!(path = %entry.path().display(), "skipping symlink, links are not followed");
            continue;
        }
        if !file_type.is_file() {
            continue;
        }

        let path = entry.path();
        if path == output {
            tracing::debug!(path = %path.display(), "skipping output archive");
            continue;
        }

        let name = entry_name(build_dir, path)?;
        let bytes = std::fs::read(path).map_err(|e| ArchiveError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let content = Content::classify(bytes, config.file_encoding);
        tracing::debug!(entry = %name, binary = content.is_binary(), "adding entry");

        writer.start_file(name, options)?;
        writer
            .write_all(&content.into_bytes())
            .map_err(zip::result::ZipError::from)?;
        entries += 1;
    }

    let cursor = writer.finish()?;
    Ok((cursor.into_inner(), entries))
}

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(0o644)
}

/// Relative path of `path` below `root`, joined with `/` on every platform.
fn entry_name(root: &Path, path: &Path) -> Result<String, ArchiveError> {
    let relative = path
        .strip_prefix(root)
        .map_err(|e| ArchiveError::OutsideBuildDir {
            path: path.to_path_buf(),
            source: e,
        })?;

    let parts = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| ArchiveError::NonUnicodePath(path.to_path_buf()))?;

    Ok(parts.join("/"))
}

fn jar_manifest(manifest: &Manifest) -> String {
    format!(
        "Manifest-Version: 1.0\r\n\
         Created-By: mvn-deploy {tool_version}\r\n\
         Implementation-Title: {name}\r\n\
         Implementation-Version: {version}\r\n\
         \r\n",
        tool_version = env!("CARGO_PKG_VERSION"),
        name = manifest.name,
        version = manifest.version,
    )
}

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("build directory {0} does not exist — run your build first or set \"buildDir\"")]
    MissingBuildDir(PathBuf),

    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to walk build directory {path}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write archive {path}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("path {0} is not valid UTF-8 and cannot be stored in the archive")]
    NonUnicodePath(PathBuf),

    #[error("{path} is outside the build directory")]
    OutsideBuildDir {
        path: PathBuf,
        source: std::path::StripPrefixError,
    },

    #[error("failed to compress archive")]
    Zip {
        #[from]
        source: zip::result::ZipError,
    },
}
