use mvn_deploy_build::build_archive;

use super::{GlobalOptions, Project};

pub fn package(options: &GlobalOptions) -> anyhow::Result<()> {
    let project = Project::load(options)?;
    let archive = build_archive(&project.config, &project.manifest)?;

    println!("Packaged {}", archive.display());
    Ok(())
}
