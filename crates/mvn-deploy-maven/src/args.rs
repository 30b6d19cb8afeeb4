//! Maven command-line construction for `install:install-file` and
//! `deploy:deploy-file`.
//!
//! Properties are emitted as `-Dkey=value` in a fixed order:
//! `packaging, file, groupId, artifactId, classifier, version, generatePom,
//! pomFile[, repositoryId, url]`. Properties without a value are left out.

use std::path::Path;

use mvn_deploy_core::version::snapshot_version;
use mvn_deploy_core::{RepositoryEntry, ResolvedConfig};

/// Run Maven non-interactively.
pub const BATCH_MODE: &str = "-B";
pub const INSTALL_GOAL: &str = "install:install-file";
pub const DEPLOY_GOAL: &str = "deploy:deploy-file";

type Property = (&'static str, Option<String>);

/// Arguments for installing `archive` into the local repository.
///
/// Local installs always use the snapshot version.
pub fn install_file_args(
    config: &ResolvedConfig,
    archive: &Path,
) -> mvn_deploy_core::Result<Vec<String>> {
    let version = snapshot_version(&config.version)?;
    Ok(command(INSTALL_GOAL, artifact_properties(config, archive, version)))
}

/// Arguments for deploying `archive` to `repository`.
///
/// With `snapshot` the version is bumped and suffixed with `-SNAPSHOT`;
/// otherwise the manifest version is used unmodified.
pub fn deploy_file_args(
    config: &ResolvedConfig,
    repository: &RepositoryEntry,
    snapshot: bool,
    archive: &Path,
) -> mvn_deploy_core::Result<Vec<String>> {
    let version = if snapshot {
        snapshot_version(&config.version)?
    } else {
        config.version.clone()
    };

    let mut properties = artifact_properties(config, archive, version);
    properties.push(("repositoryId", Some(repository.id.clone())));
    properties.push(("url", Some(repository.url.clone())));

    Ok(command(DEPLOY_GOAL, properties))
}

fn artifact_properties(config: &ResolvedConfig, archive: &Path, version: String) -> Vec<Property> {
    vec![
        ("packaging", Some(config.packaging.to_string())),
        ("file", Some(display_path(archive))),
        ("groupId", Some(config.group_id.clone())),
        ("artifactId", Some(config.artifact_id.clone())),
        ("classifier", config.classifier.clone()),
        ("version", Some(version)),
        ("generatePom", config.generate_pom.map(|g| g.to_string())),
        ("pomFile", config.pom_file.clone()),
    ]
}

fn command(goal: &str, properties: Vec<Property>) -> Vec<String> {
    let mut args = vec![BATCH_MODE.to_owned(), goal.to_owned()];
    args.extend(
        properties
            .into_iter()
            .filter_map(|(key, value)| value.filter(|v| !v.is_empty()).map(|v| (key, v)))
            .map(|(key, value)| format!("-D{key}={value}")),
    );
    args
}

fn display_path(path: &Path) -> String {
    let rendered = path.to_string_lossy();
    if cfg!(windows) {
        rendered.replace('\\', "/")
    } else {
        rendered.into_owned()
    }
}
