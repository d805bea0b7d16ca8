//! Commands that run against a populated [`Suite`](crossmake_lib::Suite).

mod build;
mod clean;
mod platforms;

use crossmake_lib::{Platform, PlatformError, TargetError};
use thiserror::Error;

use crate::config::ConfigError;

pub use build::{BuildOptions, cmd_build};
pub use clean::cmd_clean;
pub use platforms::cmd_platforms;

/// Exit code for arguments or configuration that could not be parsed.
pub const EXIT_USAGE: i32 = 1;

/// Exit code for failures while executing targets.
pub const EXIT_EXECUTION: i32 = 2;

/// Failure of a command, carrying the process exit code it maps to.
#[derive(Debug, Error)]
pub enum CommandError {
  #[error(transparent)]
  InvalidPlatform(#[from] PlatformError),

  #[error(transparent)]
  Config(#[from] ConfigError),

  #[error("platform {0} is not supported")]
  Unsupported(Platform),

  #[error(transparent)]
  Execution(#[from] TargetError),

  #[error(transparent)]
  Other(#[from] anyhow::Error),
}

impl CommandError {
  pub fn exit_code(&self) -> i32 {
    match self {
      CommandError::InvalidPlatform(_) | CommandError::Config(_) => EXIT_USAGE,
      CommandError::Unsupported(_) | CommandError::Execution(_) | CommandError::Other(_) => EXIT_EXECUTION,
    }
  }
}
