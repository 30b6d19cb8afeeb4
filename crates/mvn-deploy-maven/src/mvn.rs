/// Name of the Maven launcher looked up on `PATH`.
pub const MVN: &str = if cfg!(windows) { "mvn.cmd" } else { "mvn" };

/// Output captured from a Maven run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug, thiserror::Error)]
pub enum MavenError {
    #[error("{} command not found — is Maven installed and on your PATH?", MVN)]
    NotFound { source: std::io::Error },

    #[error("failed to start {}", MVN)]
    Spawn { source: std::io::Error },

    #[error(
        "{} {} failed ({})\n{}",
        MVN,
        args.join(" "),
        describe_exit(*code),
        captured(stdout, stderr)
    )]
    CommandFailed {
        args: Vec<String>,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

impl MavenError {
    /// Classify an error returned while spawning the process.
    pub fn from_spawn(source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { source }
        } else {
            Self::Spawn { source }
        }
    }
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_owned(),
    }
}

fn captured(stdout: &str, stderr: &str) -> String {
    [stdout.trim_end(), stderr.trim_end()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
