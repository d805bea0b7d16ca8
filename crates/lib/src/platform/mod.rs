//! Target platforms: operating system and architecture identifiers, the
//! catalog of supported combinations, and platform sets.
//!
//! A [`Platform`] is identified by its `(os, arch)` pair only. The output file
//! extension is descriptive metadata owned by the catalog, which is why
//! [`Platform::parse`] always hands back the catalog entry rather than a
//! freshly built value.

pub mod arch;
pub mod catalog;
pub mod os;

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;
use thiserror::Error;

pub use arch::Arch;
pub use catalog::*;
pub use os::Os;

/// Identifier that resolves to the host OS or architecture.
pub const NATIVE: &str = "native";

/// Which half of a platform failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
  Os,
  Arch,
}

impl fmt::Display for IdentifierKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      IdentifierKind::Os => write!(f, "OS"),
      IdentifierKind::Arch => write!(f, "architecture"),
    }
  }
}

/// Errors that can occur while parsing or checking platforms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
  /// The text is not a known OS or architecture identifier.
  #[error("invalid {kind} \"{value}\"")]
  UnrecognizedIdentifier { kind: IdentifierKind, value: String },

  /// Both identifiers are valid but the combination is not offered.
  #[error("platform {os}_{arch} is not supported")]
  UnsupportedPlatform { os: Os, arch: Arch },
}

/// A build platform: operating system, architecture and the extension of
/// executables produced for it.
///
/// Equality and hashing only consider `os` and `arch`.
#[derive(Debug, Clone, Copy, Eq, Serialize)]
pub struct Platform {
  pub os: Os,
  pub arch: Arch,
  pub extension: &'static str,
}

impl Platform {
  /// Create a platform without an executable extension.
  pub const fn new(os: Os, arch: Arch) -> Self {
    Self {
      os,
      arch,
      extension: "",
    }
  }

  /// Create a platform whose executables carry `extension` (e.g. `".exe"`).
  pub const fn with_extension(os: Os, arch: Arch, extension: &'static str) -> Self {
    Self { os, arch, extension }
  }

  /// The host platform, if the host OS and architecture are both known.
  ///
  /// Note the result is looked up in the catalog, so it carries the catalog's
  /// extension.
  pub fn current() -> Option<Self> {
    let wanted = Self::new(Os::current()?, Arch::current()?);
    Some(supported().iter().find(|p| **p == wanted).copied().unwrap_or(wanted))
  }

  /// Parse an OS and architecture and look the pair up in the supported
  /// catalog.
  ///
  /// # Errors
  ///
  /// - `UnrecognizedIdentifier` if either text is not a known identifier
  /// - `UnsupportedPlatform` if the pair is valid but not in the catalog
  pub fn parse(os_text: &str, arch_text: &str) -> Result<Self, PlatformError> {
    let os = Os::parse(os_text)?;
    let arch = Arch::parse(arch_text)?;

    PlatformSet::supported()
      .contains(&Self::new(os, arch))
      .copied()
      .ok_or(PlatformError::UnsupportedPlatform { os, arch })
  }
}

impl PartialEq for Platform {
  fn eq(&self, other: &Self) -> bool {
    self.os == other.os && self.arch == other.arch
  }
}

impl Hash for Platform {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.os.hash(state);
    self.arch.hash(state);
  }
}

impl fmt::Display for Platform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}_{}", self.os, self.arch)
  }
}

/// Parse a platform against the supported catalog.
///
/// Shorthand for [`Platform::parse`].
pub fn parse_platform(os_text: &str, arch_text: &str) -> Result<Platform, PlatformError> {
  Platform::parse(os_text, arch_text)
}

/// An ordered collection of platforms.
///
/// Used both for the catalog a suite accepts and for the platforms a caller
/// asks for. Duplicates are not removed; lookups return the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformSet(Vec<Platform>);

impl PlatformSet {
  pub fn new(platforms: Vec<Platform>) -> Self {
    Self(platforms)
  }

  /// All platforms supported by the toolchain.
  pub fn supported() -> Self {
    Self(supported().to_vec())
  }

  /// Returns the stored platform equal to `platform`, if any.
  ///
  /// The stored instance is returned so callers pick up its extension.
  pub fn contains(&self, platform: &Platform) -> Option<&Platform> {
    self.0.iter().find(|p| *p == platform)
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Platform> {
    self.0.iter()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn as_slice(&self) -> &[Platform] {
    &self.0
  }
}

impl From<Vec<Platform>> for PlatformSet {
  fn from(platforms: Vec<Platform>) -> Self {
    Self(platforms)
  }
}

impl From<&[Platform]> for PlatformSet {
  fn from(platforms: &[Platform]) -> Self {
    Self(platforms.to_vec())
  }
}

impl FromIterator<Platform> for PlatformSet {
  fn from_iter<I: IntoIterator<Item = Platform>>(iter: I) -> Self {
    Self(iter.into_iter().collect())
  }
}

impl<'a> IntoIterator for &'a PlatformSet {
  type Item = &'a Platform;
  type IntoIter = std::slice::Iter<'a, Platform>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}
