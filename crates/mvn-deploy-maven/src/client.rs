use std::path::Path;

use mvn_deploy_core::{RepositoryEntry, ResolvedConfig};

use crate::args;
use crate::executor::{MavenExecutor, RealExecutor};
use crate::mvn::{MVN, MavenError, ToolOutput};

/// Maven operations client, parameterized over the executor for testability.
pub struct MavenClient<E: MavenExecutor = RealExecutor> {
    executor: E,
}

impl MavenClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for MavenClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: MavenExecutor> MavenClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    // ── install:install-file ──

    /// Install `archive` into the local Maven repository as a snapshot.
    pub async fn install_file(
        &self,
        config: &ResolvedConfig,
        archive: &Path,
    ) -> Result<ToolOutput, InstallError> {
        let args = args::install_file_args(config, archive)
            .map_err(|e| InstallError::Config { source: e })?;

        self.run(&args)
            .await
            .map_err(|e| InstallError::Install { source: e })
    }

    // ── deploy:deploy-file ──

    /// Deploy `archive` to `repository`, as resolved by
    /// [`ResolvedConfig::repository`].
    pub async fn deploy_file(
        &self,
        config: &ResolvedConfig,
        repository: &RepositoryEntry,
        snapshot: bool,
        archive: &Path,
    ) -> Result<ToolOutput, DeployError> {
        let args = args::deploy_file_args(config, repository, snapshot, archive)
            .map_err(|e| DeployError::Config { source: e })?;

        self.run(&args)
            .await
            .map_err(|e| DeployError::Deploy { source: e })
    }

    async fn run(&self, args: &[String]) -> Result<ToolOutput, MavenError> {
        tracing::info!(command = %format!("{MVN} {}", args.join(" ")), "executing command");
        let output = self.executor.exec(args).await?;
        tracing::debug!(
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "maven finished"
        );
        Ok(output)
    }
}

// ── Error types ──

#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("cannot install")]
    Config { source: mvn_deploy_core::Error },

    #[error("maven install failed")]
    Install { source: MavenError },
}

#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error("cannot deploy")]
    Config { source: mvn_deploy_core::Error },

    #[error("maven deploy failed")]
    Deploy { source: MavenError },
}
