//! Leaf targets that perform the actual side effects: compiling an
//! executable and removing it again, plus the version lookup feeding the
//! compiler.

pub mod clean;
pub mod compile;
pub mod version;

pub use clean::{CLEAN_TARGET_PREFIX, CleanTarget, make_clean_targets};
pub use compile::{BUILD_TARGET_PREFIX, CompileTarget, OutputSink, Toolchain};
pub use version::{Version, VersionError};
