use crate::mvn::{MVN, MavenError, ToolOutput};

/// Abstraction over Maven CLI execution for testability.
///
/// Production code uses [`RealExecutor`], tests use mockall-generated mocks.
#[allow(async_fn_in_trait)]
pub trait MavenExecutor: Send + Sync {
    /// Run `mvn` with `args`, capturing stdout and stderr.
    async fn exec(&self, args: &[String]) -> Result<ToolOutput, MavenError>;
}

/// Real Maven CLI executor.
pub struct RealExecutor;

impl MavenExecutor for RealExecutor {
    async fn exec(&self, args: &[String]) -> Result<ToolOutput, MavenError> {
        use std::process::Stdio;

        let output = tokio::process::Command::new(MVN)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(MavenError::from_spawn)?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if output.status.success() {
            Ok(ToolOutput { stdout, stderr })
        } else {
            Err(MavenError::CommandFailed {
                args: args.to_vec(),
                code: output.status.code(),
                stdout,
                stderr,
            })
        }
    }
}
