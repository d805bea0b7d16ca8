//! Version identifiers derived from version control.

use std::fmt;
use std::path::Path;

use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// Errors that can occur while querying version control.
#[derive(Debug, Error)]
pub enum VersionError {
  #[error("failed to run git: {0}")]
  Spawn(#[from] std::io::Error),

  #[error("git describe failed with exit code {code:?}: {stderr}")]
  Git { code: Option<i32>, stderr: String },

  #[error("git describe returned no version")]
  Empty,
}

/// A human readable version of the product being built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Version {
  /// A tag that parses as a semantic version (a leading `v` is allowed).
  Semantic { tag: String, version: semver::Version },

  /// Anything else, typically a short commit hash.
  Revision(String),
}

impl Version {
  /// Classify a version string.
  pub fn parse(text: &str) -> Self {
    let text = text.trim();
    let bare = text.strip_prefix('v').unwrap_or(text);

    match semver::Version::parse(bare) {
      Ok(version) => Version::Semantic {
        tag: text.to_string(),
        version,
      },
      Err(_) => Version::Revision(text.to_string()),
    }
  }

  /// The semantic version, if this is a semantic tag.
  pub fn semver(&self) -> Option<&semver::Version> {
    match self {
      Version::Semantic { version, .. } => Some(version),
      Version::Revision(_) => None,
    }
  }

  /// Version of the git repository at `path`.
  ///
  /// This is the nearest tag if there is one, otherwise the short commit
  /// hash (`git describe --tags --always`).
  pub async fn from_git(path: impl AsRef<Path>) -> Result<Self, VersionError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "describing git version");

    let output = Command::new("git")
      .args(["describe", "--tags", "--always"])
      .current_dir(path)
      .output()
      .await?;

    if !output.status.success() {
      return Err(VersionError::Git {
        code: output.status.code(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
      });
    }

    let described = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if described.is_empty() {
      return Err(VersionError::Empty);
    }

    Ok(Self::parse(&described))
  }
}

impl From<&str> for Version {
  fn from(text: &str) -> Self {
    Self::parse(text)
  }
}

impl fmt::Display for Version {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Version::Semantic { tag, .. } => write!(f, "{}", tag),
      Version::Revision(rev) => write!(f, "{}", rev),
    }
  }
}
