//! Maven command construction and execution for mvn-deploy.
//!
//! [`args`] turns a [`ResolvedConfig`](mvn_deploy_core::ResolvedConfig) and an
//! archive path into `mvn` arguments; [`MavenClient`] runs them through a
//! [`MavenExecutor`].

pub mod args;
pub mod client;
pub mod executor;
pub mod mvn;

pub use client::{DeployError, InstallError, MavenClient};
pub use executor::{MavenExecutor, RealExecutor};
pub use mvn::{MavenError, ToolOutput};
