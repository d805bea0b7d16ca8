use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::{IdentifierKind, NATIVE, PlatformError};

/// CPU architectures the compiler toolchain can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
  Arm,
  Arm64,
  #[serde(rename = "386")]
  X86,
  Amd64,
  Ppc64,
  Ppc64le,
  Mips,
  Mipsle,
  Mips64,
  Mips64le,
}

impl Arch {
  /// Every known architecture, in catalog order.
  pub const ALL: [Arch; 10] = [
    Arch::Arm,
    Arch::Arm64,
    Arch::X86,
    Arch::Amd64,
    Arch::Ppc64,
    Arch::Ppc64le,
    Arch::Mips,
    Arch::Mipsle,
    Arch::Mips64,
    Arch::Mips64le,
  ];

  /// Detect the CPU architecture this process runs on.
  ///
  /// Returns `None` if the host architecture has no toolchain identifier.
  pub fn current() -> Option<Self> {
    let little_endian = cfg!(target_endian = "little");
    match std::env::consts::ARCH {
      "arm" => Some(Self::Arm),
      "aarch64" => Some(Self::Arm64),
      "x86" => Some(Self::X86),
      "x86_64" => Some(Self::Amd64),
      "powerpc64" if little_endian => Some(Self::Ppc64le),
      "powerpc64" => Some(Self::Ppc64),
      "mips" if little_endian => Some(Self::Mipsle),
      "mips" => Some(Self::Mips),
      "mips64" if little_endian => Some(Self::Mips64le),
      "mips64" => Some(Self::Mips64),
      _ => None,
    }
  }

  /// Returns the lowercase identifier used by the toolchain (e.g. `GOARCH`)
  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::Arm => "arm",
      Self::Arm64 => "arm64",
      Self::X86 => "386",
      Self::Amd64 => "amd64",
      Self::Ppc64 => "ppc64",
      Self::Ppc64le => "ppc64le",
      Self::Mips => "mips",
      Self::Mipsle => "mipsle",
      Self::Mips64 => "mips64",
      Self::Mips64le => "mips64le",
    }
  }

  /// Parse an architecture identifier, ignoring case.
  ///
  /// `"native"` resolves to the host architecture.
  pub fn parse(text: &str) -> Result<Self, PlatformError> {
    let text = text.to_lowercase();

    if text == NATIVE {
      return Self::current().ok_or_else(|| PlatformError::UnrecognizedIdentifier {
        kind: IdentifierKind::Arch,
        value: std::env::consts::ARCH.to_string(),
      });
    }

    Self::ALL
      .into_iter()
      .find(|arch| arch.as_str() == text)
      .ok_or(PlatformError::UnrecognizedIdentifier {
        kind: IdentifierKind::Arch,
        value: text,
      })
  }
}

impl FromStr for Arch {
  type Err = PlatformError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

impl fmt::Display for Arch {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
