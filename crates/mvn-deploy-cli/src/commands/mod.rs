mod deploy;
mod install;
mod package;

use std::path::{Path, PathBuf};

use mvn_deploy_build::{build_archive, existing_artifact};
use mvn_deploy_core::{Manifest, MavenConfig, ResolvedConfig};
use mvn_deploy_maven::ToolOutput;

pub use deploy::deploy;
pub use install::install;
pub use package::package;

/// Options shared by every subcommand.
pub struct GlobalOptions {
    pub config: PathBuf,
    pub verbose: bool,
}

/// The manifest of the working directory and the configuration resolved against it.
pub(crate) struct Project {
    pub manifest: Manifest,
    pub config: ResolvedConfig,
}

impl Project {
    /// Read `package.json` and the config file afresh and resolve placeholders.
    pub(crate) fn load(options: &GlobalOptions) -> anyhow::Result<Self> {
        let manifest = Manifest::load(Path::new("."))?;
        let config = MavenConfig::load(&options.config)?.configure(&manifest)?;
        Ok(Self { manifest, config })
    }

    /// Use `file` when given, otherwise package the build directory.
    pub(crate) fn artifact(&self, file: Option<&Path>) -> anyhow::Result<PathBuf> {
        match file {
            Some(path) => {
                tracing::debug!(path = %path.display(), "using explicit archive, skipping package");
                Ok(existing_artifact(path)?)
            }
            None => Ok(build_archive(&self.config, &self.manifest)?),
        }
    }
}

/// Print the outcome of a successful Maven run.
pub(crate) fn report(output: &ToolOutput, verbose: bool) {
    if verbose {
        print!("{}", output.stdout);
        eprint!("{}", output.stderr);
    } else {
        println!("done");
    }
}
