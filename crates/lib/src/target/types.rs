//! Error types for target execution.
//!
//! [`TargetError`] is what any unit of work yields on failure. [`MultiError`]
//! is the aggregate composites return when several sub-targets failed.

use std::fmt;

use thiserror::Error;

use crate::name::TemplateError;
use crate::platform::PlatformError;

/// Errors that can occur while executing a target.
#[derive(Debug, Error)]
pub enum TargetError {
  /// The target's platform failed to parse or is not supported by the suite.
  #[error(transparent)]
  Platform(#[from] PlatformError),

  /// The artifact name template could not be rendered.
  #[error("invalid name template: {0}")]
  Template(#[from] TemplateError),

  /// No target is registered under the requested name.
  #[error("target \"{0}\" could not be found")]
  NotFound(String),

  /// One or more sub-targets of a composite failed.
  #[error(transparent)]
  Multiple(#[from] MultiError),

  /// An external command exited unsuccessfully.
  #[error("command failed with exit code {code:?}: {cmd}")]
  CmdFailed { cmd: String, code: Option<i32> },

  /// I/O error while spawning a process or touching the filesystem.
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  /// A sub-target of a parallel composite panicked.
  #[error("target panicked: {0}")]
  Panicked(String),

  /// Failure reported by a caller-defined target.
  #[error(transparent)]
  External(Box<dyn std::error::Error + Send + Sync>),
}

impl TargetError {
  /// Wrap an arbitrary error from a caller-defined target.
  pub fn external(err: impl std::error::Error + Send + Sync + 'static) -> Self {
    TargetError::External(Box::new(err))
  }

  /// Returns true if this error means the requested target was not
  /// registered, as opposed to a target that ran and failed.
  pub fn is_not_found(&self) -> bool {
    matches!(self, TargetError::NotFound(_))
  }
}

/// Multiple errors collected while executing one composite target.
///
/// Never empty: composites return `Ok(())` instead of an empty aggregate.
#[derive(Debug, Error)]
pub struct MultiError {
  errors: Vec<TargetError>,
}

impl MultiError {
  /// Turn collected errors into a result, `Ok(())` when there are none.
  pub(crate) fn into_result(errors: Vec<TargetError>) -> Result<(), TargetError> {
    if errors.is_empty() {
      Ok(())
    } else {
      Err(TargetError::Multiple(MultiError { errors }))
    }
  }

  /// The contained errors, in the order the composite observed them.
  pub fn errors(&self) -> &[TargetError] {
    &self.errors
  }

  pub fn into_errors(self) -> Vec<TargetError> {
    self.errors
  }

  pub fn len(&self) -> usize {
    self.errors.len()
  }

  pub fn is_empty(&self) -> bool {
    self.errors.is_empty()
  }
}

impl fmt::Display for MultiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "multiple errors occurred:")?;
    for (i, err) in self.errors.iter().enumerate() {
      if i > 0 {
        writeln!(f)?;
      }
      write!(f, "{}", err)?;
    }
    Ok(())
  }
}
