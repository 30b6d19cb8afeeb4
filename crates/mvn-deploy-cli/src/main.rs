mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mvn_deploy_core::DEFAULT_CONFIG_FILE;

#[derive(Parser)]
#[command(
    name = "mvn-deploy",
    about = "Package a build directory as a WAR/JAR and install or deploy it with Maven"
)]
#[command(version)]
struct Cli {
    /// Path of the config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Print Maven output and debug logs
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build <buildDir>/<finalName>.<type> from the build directory
    Package,
    /// Package and install into the local Maven repository as a snapshot
    Install {
        /// Install this archive instead of packaging
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Package and deploy to a configured repository
    Deploy {
        /// Repository id from the config file
        repository_id: String,
        /// Deploy as <major>.<minor>.<patch+1>-SNAPSHOT
        #[arg(long, short = 's')]
        snapshot: bool,
        /// Deploy this archive instead of packaging
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = commands::GlobalOptions {
        config: cli.config,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Package => commands::package(&options)?,
        Commands::Install { file } => commands::install(&options, file.as_deref()).await?,
        Commands::Deploy {
            repository_id,
            snapshot,
            file,
        } => commands::deploy(&options, &repository_id, snapshot, file.as_deref()).await?,
    }

    Ok(())
}
