use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::manifest::Manifest;

/// Default location of the configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".mvnconfig.json";

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}]+)\}").expect("placeholder pattern is valid"));

/// `.mvnconfig.json` configuration, as written by the user.
///
/// Keys the user omits take their built-in default. String values may contain
/// `{field}` placeholders that are resolved against the [`Manifest`] by
/// [`MavenConfig::configure`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MavenConfig {
    /// Maven group id (required)
    #[serde(default)]
    pub group_id: Option<String>,
    /// Maven artifact id (defaults to the manifest name)
    #[serde(default = "default_artifact_id")]
    pub artifact_id: String,
    /// Optional artifact classifier
    #[serde(default)]
    pub classifier: Option<String>,
    /// Directory whose contents become the archive
    #[serde(default = "default_build_dir")]
    pub build_dir: String,
    /// Archive file name without extension
    #[serde(default = "default_final_name")]
    pub final_name: String,
    /// Archive type, also passed as `-Dpackaging`
    #[serde(default, rename = "type")]
    pub packaging: Packaging,
    /// Encoding used to read text files from the build directory
    #[serde(default)]
    pub file_encoding: FileEncoding,
    /// Passed as `-DgeneratePom` when set
    #[serde(default)]
    pub generate_pom: Option<bool>,
    /// Passed as `-DpomFile` when set
    #[serde(default)]
    pub pom_file: Option<String>,
    /// Deployment targets for `deploy`
    #[serde(default)]
    pub repositories: Vec<RepositoryEntry>,
    /// Write `META-INF/MANIFEST.MF` into the archive
    #[serde(default)]
    pub manifest_entry: bool,
}

/// A named remote Maven repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryEntry {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Packaging {
    #[default]
    War,
    Jar,
    Ear,
}

impl Packaging {
    /// File extension and `-Dpackaging` value.
    pub fn extension(self) -> &'static str {
        match self {
            Self::War => "war",
            Self::Jar => "jar",
            Self::Ear => "ear",
        }
    }
}

impl fmt::Display for Packaging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileEncoding {
    #[default]
    #[serde(rename = "utf-8", alias = "utf8", alias = "UTF-8", alias = "UTF8")]
    Utf8,
    #[serde(
        rename = "latin1",
        alias = "iso-8859-1",
        alias = "ISO-8859-1",
        alias = "binary"
    )]
    Latin1,
    #[serde(rename = "ascii", alias = "ASCII", alias = "us-ascii")]
    Ascii,
}

impl Default for MavenConfig {
    fn default() -> Self {
        Self {
            group_id: None,
            artifact_id: default_artifact_id(),
            classifier: None,
            build_dir: default_build_dir(),
            final_name: default_final_name(),
            packaging: Packaging::default(),
            file_encoding: FileEncoding::default(),
            generate_pom: None,
            pom_file: None,
            repositories: Vec::new(),
            manifest_entry: false,
        }
    }
}

impl MavenConfig {
    /// Load the configuration file at `path`.
    pub fn load(path: &Path) -> crate::Result<Self> {
        tracing::debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(path).map_err(|e| crate::Error::ConfigLoad {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| crate::Error::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Validate the configuration and resolve placeholders against `manifest`.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingGroupId`](crate::Error::MissingGroupId) if `groupId` is absent or blank
    /// - [`Error::InvalidRepository`](crate::Error::InvalidRepository) if a repository has a blank `id` or `url`
    pub fn configure(&self, manifest: &Manifest) -> crate::Result<ResolvedConfig> {
        let group_id = self
            .group_id
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .ok_or(crate::Error::MissingGroupId)?;

        for (index, repo) in self.repositories.iter().enumerate() {
            if repo.id.trim().is_empty() {
                return Err(crate::Error::InvalidRepository {
                    index,
                    reason: "\"id\" must not be empty",
                });
            }
            if repo.url.trim().is_empty() {
                return Err(crate::Error::InvalidRepository {
                    index,
                    reason: "\"url\" must not be empty",
                });
            }
        }

        let resolve = |value: &str| substitute(value, manifest);

        let resolved = ResolvedConfig {
            group_id: resolve(group_id),
            artifact_id: resolve(&self.artifact_id),
            classifier: self.classifier.as_deref().map(resolve),
            build_dir: PathBuf::from(resolve(&self.build_dir)),
            final_name: resolve(&self.final_name),
            packaging: self.packaging,
            file_encoding: self.file_encoding,
            generate_pom: self.generate_pom,
            pom_file: self.pom_file.as_deref().map(resolve),
            repositories: self.repositories.clone(),
            manifest_entry: self.manifest_entry,
            version: manifest.version.clone(),
        };

        tracing::debug!(
            group_id = %resolved.group_id,
            artifact_id = %resolved.artifact_id,
            version = %resolved.version,
            archive = %resolved.archive_path().display(),
            "configuration resolved"
        );

        Ok(resolved)
    }
}

/// Configuration with placeholders resolved against one manifest snapshot.
///
/// Built by [`MavenConfig::configure`] and passed explicitly to every
/// packaging and Maven operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub group_id: String,
    pub artifact_id: String,
    pub classifier: Option<String>,
    pub build_dir: PathBuf,
    pub final_name: String,
    pub packaging: Packaging,
    pub file_encoding: FileEncoding,
    pub generate_pom: Option<bool>,
    pub pom_file: Option<String>,
    pub repositories: Vec<RepositoryEntry>,
    pub manifest_entry: bool,
    /// Manifest version at the time of resolution
    pub version: String,
}

impl ResolvedConfig {
    /// `<finalName>.<type>`
    pub fn archive_file_name(&self) -> String {
        format!("{}.{}", self.final_name, self.packaging.extension())
    }

    /// `<buildDir>/<finalName>.<type>`
    pub fn archive_path(&self) -> PathBuf {
        self.build_dir.join(self.archive_file_name())
    }

    /// Ensure at least one deployment repository is configured.
    pub fn require_repositories(&self) -> crate::Result<&[RepositoryEntry]> {
        if self.repositories.is_empty() {
            return Err(crate::Error::NoRepositories);
        }
        Ok(&self.repositories)
    }

    /// Find the repository whose id is exactly `id`.
    ///
    /// # Errors
    ///
    /// - [`Error::NoRepositories`](crate::Error::NoRepositories) if the list is empty
    /// - [`Error::UnknownRepository`](crate::Error::UnknownRepository) if no entry matches
    pub fn repository(&self, id: &str) -> crate::Result<&RepositoryEntry> {
        let repos = self.require_repositories()?;
        repos
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| crate::Error::UnknownRepository {
                id: id.to_owned(),
                available: repos.iter().map(|r| r.id.clone()).collect(),
            })
    }
}

/// Replace every `{field}` in `template` with the matching manifest field.
///
/// Placeholders naming a field the manifest does not have are left verbatim.
///
/// # Examples
///
/// ```
/// use mvn_deploy_core::{Manifest, config::substitute};
///
/// let manifest = Manifest::new("app", "1.2.3");
/// assert_eq!(substitute("{name}-{version}", &manifest), "app-1.2.3");
/// assert_eq!(substitute("{name}-{nope}", &manifest), "app-{nope}");
/// ```
pub fn substitute(template: &str, manifest: &Manifest) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            manifest
                .field(&caps[1])
                .unwrap_or_else(|| caps[0].to_owned())
        })
        .into_owned()
}

fn default_artifact_id() -> String {
    "{name}".to_owned()
}

fn default_build_dir() -> String {
    "dist".to_owned()
}

fn default_final_name() -> String {
    "{name}".to_owned()
}
