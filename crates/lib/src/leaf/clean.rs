//! Clean targets remove build artifacts.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::platform::Platform;
use crate::suite::Suite;
use crate::target::{NamedTarget, OutputTarget, Target, TargetError, TargetFuture};

/// Prefix of every clean target's name.
pub const CLEAN_TARGET_PREFIX: &str = "clean_";

/// Removes a single file. A file that does not exist is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanTarget {
  /// The file to remove.
  pub filename: PathBuf,
  /// The platform the file was built for, if known.
  pub platform: Option<Platform>,
}

impl CleanTarget {
  pub fn new(filename: impl Into<PathBuf>) -> Self {
    Self {
      filename: filename.into(),
      platform: None,
    }
  }

  pub fn for_platform(filename: impl Into<PathBuf>, platform: Platform) -> Self {
    Self {
      filename: filename.into(),
      platform: Some(platform),
    }
  }
}

impl Target for CleanTarget {
  fn execute(self: Arc<Self>, _suite: Suite) -> TargetFuture {
    Box::pin(async move {
      match tokio::fs::remove_file(&self.filename).await {
        Ok(()) => {
          info!(file = %self.filename.display(), "removed artifact");
          Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
          debug!(file = %self.filename.display(), "artifact already absent");
          Ok(())
        }
        Err(e) => Err(e.into()),
      }
    })
  }
}

impl NamedTarget for CleanTarget {
  /// `clean_` followed by the platform if present, the file name otherwise.
  fn name(&self) -> String {
    match &self.platform {
      Some(platform) => format!("{}{}", CLEAN_TARGET_PREFIX, platform),
      None => format!("{}{}", CLEAN_TARGET_PREFIX, self.filename.display()),
    }
  }
}

/// Create clean targets for the outputs of `targets`.
///
/// # Errors
///
/// Fails on the first target whose output name cannot be computed.
pub fn make_clean_targets<'a, T, I>(targets: I) -> Result<Vec<CleanTarget>, TargetError>
where
  T: OutputTarget + ?Sized + 'a,
  I: IntoIterator<Item = &'a T>,
{
  targets
    .into_iter()
    .map(|target| Ok(CleanTarget::new(target.output_name()?)))
    .collect()
}
