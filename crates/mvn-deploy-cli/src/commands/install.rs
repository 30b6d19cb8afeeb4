use mvn_deploy_maven::MavenClient;
use std::path::Path;

use super::{GlobalOptions, Project, report};

/// Package (unless `file` is given) and run `install:install-file`.
pub async fn install(options: &GlobalOptions, file: Option<&Path>) -> anyhow::Result<()> {
    let project = Project::load(options)?;
    let archive = project.artifact(file)?;

    let client = MavenClient::new();
    let output = client.install_file(&project.config, &archive).await?;

    report(&output, options.verbose);
    Ok(())
}
