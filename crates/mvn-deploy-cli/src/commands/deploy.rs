use mvn_deploy_maven::MavenClient;
use std::path::Path;

use super::{GlobalOptions, Project, report};

/// Package (unless `file` is given) and run `deploy:deploy-file`.
///
/// The repository is resolved before anything is packaged, so a missing or
/// unknown repository leaves the build directory untouched.
pub async fn deploy(
    options: &GlobalOptions,
    repository_id: &str,
    snapshot: bool,
    file: Option<&Path>,
) -> anyhow::Result<()> {
    let project = Project::load(options)?;
    let repository = project.config.repository(repository_id)?;
    tracing::debug!(id = %repository.id, url = %repository.url, snapshot, "deploy target");

    let archive = project.artifact(file)?;

    let client = MavenClient::new();
    let output = client
        .deploy_file(&project.config, repository, snapshot, &archive)
        .await?;

    report(&output, options.verbose);
    Ok(())
}
