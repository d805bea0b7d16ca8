//! The build suite: platform catalog, target registry and execution context.
//!
//! Targets are registered during setup and looked up by name later. The
//! suite is a cheap handle; clones share the catalog and registry, and a
//! registration after cloning never affects executions already holding a
//! clone.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::leaf::{BUILD_TARGET_PREFIX, CLEAN_TARGET_PREFIX};
use crate::platform::{Platform, PlatformError, PlatformSet};
use crate::target::{NamedTarget, Target, TargetError};

/// The build suite of a product.
#[derive(Clone)]
pub struct Suite {
  platforms: Arc<PlatformSet>,
  targets: Arc<HashMap<String, Arc<dyn Target>>>,
}

impl Suite {
  /// Create a suite accepting the given platforms.
  pub fn new(supported_platforms: PlatformSet) -> Self {
    Self {
      platforms: Arc::new(supported_platforms),
      targets: Arc::new(HashMap::new()),
    }
  }

  /// Platforms this suite builds for.
  pub fn supported_platforms(&self) -> &PlatformSet {
    &self.platforms
  }

  /// Check that `platform` is in the suite's catalog.
  pub fn check_platform(&self, platform: &Platform) -> Result<(), PlatformError> {
    match self.platforms.contains(platform) {
      Some(_) => Ok(()),
      None => Err(PlatformError::UnsupportedPlatform {
        os: platform.os,
        arch: platform.arch,
      }),
    }
  }

  /// Run `target` in the context of this suite and return its result.
  pub async fn execute(&self, target: Arc<dyn Target>) -> Result<(), TargetError> {
    target.execute(self.clone()).await
  }

  /// Register a named target, replacing any target already registered
  /// under the same name.
  pub fn register<T: NamedTarget>(&mut self, target: Arc<T>) {
    self.register_dyn(target);
  }

  /// Register a type-erased named target.
  pub fn register_dyn(&mut self, target: Arc<dyn NamedTarget>) {
    let name = target.name();
    debug!(name = %name, "registering target");
    let target: Arc<dyn Target> = target;
    Arc::make_mut(&mut self.targets).insert(name, target);
  }

  /// Register several named targets of one type.
  pub fn register_all<T: NamedTarget>(&mut self, targets: impl IntoIterator<Item = Arc<T>>) {
    for target in targets {
      self.register(target);
    }
  }

  /// Register several named targets of mixed types.
  pub fn register_all_dyn(&mut self, targets: impl IntoIterator<Item = Arc<dyn NamedTarget>>) {
    for target in targets {
      self.register_dyn(target);
    }
  }

  /// Returns the target registered under `name`.
  pub fn lookup(&self, name: &str) -> Option<Arc<dyn Target>> {
    self.targets.get(name).cloned()
  }

  /// Returns every target whose name starts with `prefix`, in no particular
  /// order.
  pub fn lookup_by_prefix(&self, prefix: &str) -> Vec<Arc<dyn Target>> {
    self
      .targets
      .iter()
      .filter(|(name, _)| name.starts_with(prefix))
      .map(|(_, target)| target.clone())
      .collect()
  }

  /// All registered compile targets.
  pub fn lookup_build_targets(&self) -> Vec<Arc<dyn Target>> {
    self.lookup_by_prefix(BUILD_TARGET_PREFIX)
  }

  /// All registered clean targets.
  pub fn lookup_clean_targets(&self) -> Vec<Arc<dyn Target>> {
    self.lookup_by_prefix(CLEAN_TARGET_PREFIX)
  }

  /// Names of all registered targets, sorted.
  pub fn target_names(&self) -> Vec<String> {
    let mut names: Vec<_> = self.targets.keys().cloned().collect();
    names.sort();
    names
  }

  /// Execute the target registered under `name`.
  ///
  /// Use [`TargetError::is_not_found`] to tell a missing target apart from
  /// one that ran and failed.
  pub async fn execute_named(&self, name: &str) -> Result<(), TargetError> {
    let target = self
      .lookup(name)
      .ok_or_else(|| TargetError::NotFound(name.to_string()))?;
    self.execute(target).await
  }
}

impl fmt::Debug for Suite {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Suite")
      .field("platforms", &self.platforms)
      .field("targets", &self.target_names())
      .finish()
  }
}
