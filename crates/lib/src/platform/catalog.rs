//! The fixed catalog of platforms the toolchain can build for.

use super::{Arch, Os, Platform};

pub const ANDROID_ARM: Platform = Platform::new(Os::Android, Arch::Arm);
pub const DARWIN_386: Platform = Platform::new(Os::Darwin, Arch::X86);
pub const DARWIN_AMD64: Platform = Platform::new(Os::Darwin, Arch::Amd64);
pub const DARWIN_ARM: Platform = Platform::new(Os::Darwin, Arch::Arm);
pub const DARWIN_ARM64: Platform = Platform::new(Os::Darwin, Arch::Arm64);
pub const DRAGONFLY_AMD64: Platform = Platform::new(Os::Dragonfly, Arch::Amd64);
pub const FREEBSD_386: Platform = Platform::new(Os::FreeBsd, Arch::X86);
pub const FREEBSD_AMD64: Platform = Platform::new(Os::FreeBsd, Arch::Amd64);
pub const FREEBSD_ARM: Platform = Platform::new(Os::FreeBsd, Arch::Arm);
pub const LINUX_386: Platform = Platform::new(Os::Linux, Arch::X86);
pub const LINUX_AMD64: Platform = Platform::new(Os::Linux, Arch::Amd64);
pub const LINUX_ARM: Platform = Platform::new(Os::Linux, Arch::Arm);
pub const LINUX_ARM64: Platform = Platform::new(Os::Linux, Arch::Arm64);
pub const LINUX_PPC64: Platform = Platform::new(Os::Linux, Arch::Ppc64);
pub const LINUX_PPC64LE: Platform = Platform::new(Os::Linux, Arch::Ppc64le);
pub const LINUX_MIPS: Platform = Platform::new(Os::Linux, Arch::Mips);
pub const LINUX_MIPSLE: Platform = Platform::new(Os::Linux, Arch::Mipsle);
pub const LINUX_MIPS64: Platform = Platform::new(Os::Linux, Arch::Mips64);
pub const LINUX_MIPS64LE: Platform = Platform::new(Os::Linux, Arch::Mips64le);
pub const NETBSD_386: Platform = Platform::new(Os::NetBsd, Arch::X86);
pub const NETBSD_AMD64: Platform = Platform::new(Os::NetBsd, Arch::Amd64);
pub const NETBSD_ARM: Platform = Platform::new(Os::NetBsd, Arch::Arm);
pub const OPENBSD_386: Platform = Platform::new(Os::OpenBsd, Arch::X86);
pub const OPENBSD_AMD64: Platform = Platform::new(Os::OpenBsd, Arch::Amd64);
pub const OPENBSD_ARM: Platform = Platform::new(Os::OpenBsd, Arch::Arm);
pub const PLAN9_386: Platform = Platform::new(Os::Plan9, Arch::X86);
pub const PLAN9_AMD64: Platform = Platform::new(Os::Plan9, Arch::Amd64);
pub const SOLARIS_AMD64: Platform = Platform::new(Os::Solaris, Arch::Amd64);
pub const WINDOWS_386: Platform = Platform::with_extension(Os::Windows, Arch::X86, ".exe");
pub const WINDOWS_AMD64: Platform = Platform::with_extension(Os::Windows, Arch::Amd64, ".exe");

static SUPPORTED_PLATFORMS: [Platform; 30] = [
  ANDROID_ARM,
  DARWIN_386,
  DARWIN_AMD64,
  DARWIN_ARM,
  DARWIN_ARM64,
  DRAGONFLY_AMD64,
  FREEBSD_386,
  FREEBSD_AMD64,
  FREEBSD_ARM,
  LINUX_386,
  LINUX_AMD64,
  LINUX_ARM,
  LINUX_ARM64,
  LINUX_PPC64,
  LINUX_PPC64LE,
  LINUX_MIPS,
  LINUX_MIPSLE,
  LINUX_MIPS64,
  LINUX_MIPS64LE,
  NETBSD_386,
  NETBSD_AMD64,
  NETBSD_ARM,
  OPENBSD_386,
  OPENBSD_AMD64,
  OPENBSD_ARM,
  PLAN9_386,
  PLAN9_AMD64,
  SOLARIS_AMD64,
  WINDOWS_386,
  WINDOWS_AMD64,
];

/// Every platform the toolchain supports, in catalog order.
pub fn supported() -> &'static [Platform] {
  &SUPPORTED_PLATFORMS
}
