//! Units of work ("targets") and the composites that combine them.
//!
//! A [`Target`] is anything that can be executed against a [`Suite`]. Two
//! narrower capabilities extend it:
//! - [`NamedTarget`]: has a stable name, required for registration
//! - [`OutputTarget`]: knows the file name of the artifact it produces
//!
//! Targets are shared as `Arc<dyn Target>` so composites can hand each child
//! to its own task.

pub mod composite;
pub mod types;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::suite::Suite;

pub use composite::{Parallel, Sequential, concatenate, parallelize};
pub use types::{MultiError, TargetError};

/// Future returned by [`Target::execute`].
pub type TargetFuture = Pin<Box<dyn Future<Output = Result<(), TargetError>> + Send + 'static>>;

/// A unit of work that can be executed in the context of a suite.
///
/// Executing a target again must be safe and yield the same class of
/// outcome. Nothing is retried automatically.
pub trait Target: Send + Sync + 'static {
  /// Run the target. The returned future owns everything it needs.
  fn execute(self: Arc<Self>, suite: Suite) -> TargetFuture;
}

/// A target with a stable name, used as its registry key.
pub trait NamedTarget: Target {
  fn name(&self) -> String;
}

/// A target that knows the name of the file it produces.
pub trait OutputTarget: Target {
  /// The artifact file name.
  ///
  /// Fails if the name cannot be computed (e.g. a malformed template).
  fn output_name(&self) -> Result<String, TargetError>;
}
