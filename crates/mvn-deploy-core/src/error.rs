use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // ── Configuration file ──
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    // ── Manifest ──
    #[error("failed to read manifest {path}")]
    ManifestLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse manifest at {path}")]
    ManifestParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    // ── Validation ──
    #[error("groupId is required — set \"groupId\" in the config file")]
    MissingGroupId,

    #[error("repository entry #{index} is invalid: {reason}")]
    InvalidRepository { index: usize, reason: &'static str },

    #[error("no repositories configured — add at least one {{ \"id\", \"url\" }} entry to \"repositories\"")]
    NoRepositories,

    #[error(
        "repository '{id}' is not configured; known repositories: {}",
        format_ids(available)
    )]
    UnknownRepository { id: String, available: Vec<String> },

    #[error("manifest version '{version}' is not a valid semantic version")]
    InvalidVersion {
        version: String,
        source: semver::Error,
    },

    #[error("manifest version '{version}' cannot be bumped: patch number is at its maximum")]
    VersionOverflow { version: String },
}

fn format_ids(ids: &[String]) -> String {
    if ids.is_empty() {
        "(none)".to_owned()
    } else {
        ids.join(", ")
    }
}
