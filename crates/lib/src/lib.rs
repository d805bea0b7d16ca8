//! crossmake-lib: programmable cross-platform build orchestration
//!
//! This crate provides the pieces a build script composes:
//! - `Platform`: an (OS, architecture) pair checked against a fixed catalog
//! - `Target`: a unit of work, optionally named or producing an artifact
//! - `Parallel` / `Sequential`: composites that aggregate failures
//! - `Suite`: the registry of named targets and the execution context
//! - `CompileTarget` / `CleanTarget`: leaves that build and remove executables

pub mod leaf;
pub mod name;
pub mod platform;
pub mod suite;
pub mod target;
pub mod util;

pub use leaf::{CleanTarget, CompileTarget, Toolchain, Version};
pub use name::NameTemplate;
pub use platform::{Arch, Os, Platform, PlatformError, PlatformSet};
pub use suite::Suite;
pub use target::{MultiError, NamedTarget, OutputTarget, Target, TargetError, concatenate, parallelize};
