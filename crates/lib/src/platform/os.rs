use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::{IdentifierKind, NATIVE, PlatformError};

/// Operating systems the compiler toolchain can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
  Android,
  Darwin,
  Dragonfly,
  FreeBsd,
  Linux,
  NetBsd,
  OpenBsd,
  Plan9,
  Solaris,
  Windows,
}

impl Os {
  /// Every known operating system, in catalog order.
  pub const ALL: [Os; 10] = [
    Os::Android,
    Os::Darwin,
    Os::Dragonfly,
    Os::FreeBsd,
    Os::Linux,
    Os::NetBsd,
    Os::OpenBsd,
    Os::Plan9,
    Os::Solaris,
    Os::Windows,
  ];

  /// Detect the operating system this process runs on.
  ///
  /// Returns `None` if the host OS has no toolchain identifier.
  pub fn current() -> Option<Self> {
    match std::env::consts::OS {
      "android" => Some(Self::Android),
      "macos" => Some(Self::Darwin),
      "dragonfly" => Some(Self::Dragonfly),
      "freebsd" => Some(Self::FreeBsd),
      "linux" => Some(Self::Linux),
      "netbsd" => Some(Self::NetBsd),
      "openbsd" => Some(Self::OpenBsd),
      "solaris" | "illumos" => Some(Self::Solaris),
      "windows" => Some(Self::Windows),
      _ => None,
    }
  }

  /// Returns the lowercase identifier used by the toolchain (e.g. `GOOS`)
  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::Android => "android",
      Self::Darwin => "darwin",
      Self::Dragonfly => "dragonfly",
      Self::FreeBsd => "freebsd",
      Self::Linux => "linux",
      Self::NetBsd => "netbsd",
      Self::OpenBsd => "openbsd",
      Self::Plan9 => "plan9",
      Self::Solaris => "solaris",
      Self::Windows => "windows",
    }
  }

  /// Parse an OS identifier, ignoring case.
  ///
  /// `"native"` resolves to the host operating system.
  pub fn parse(text: &str) -> Result<Self, PlatformError> {
    let text = text.to_lowercase();

    if text == NATIVE {
      return Self::current().ok_or_else(|| PlatformError::UnrecognizedIdentifier {
        kind: IdentifierKind::Os,
        value: std::env::consts::OS.to_string(),
      });
    }

    Self::ALL
      .into_iter()
      .find(|os| os.as_str() == text)
      .ok_or(PlatformError::UnrecognizedIdentifier {
        kind: IdentifierKind::Os,
        value: text,
      })
  }
}

impl FromStr for Os {
  type Err = PlatformError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

impl fmt::Display for Os {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
