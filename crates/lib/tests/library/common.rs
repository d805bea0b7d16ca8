//! Shared helpers for library integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crossmake_lib::suite::Suite;
use crossmake_lib::target::{NamedTarget, Target, TargetError, TargetFuture};

/// A named target that counts its runs and optionally fails.
pub struct Counting {
  name: String,
  fail: bool,
  runs: Arc<AtomicUsize>,
}

impl Counting {
  pub fn ok(name: &str) -> Arc<Self> {
    Arc::new(Self {
      name: name.to_string(),
      fail: false,
      runs: Arc::default(),
    })
  }

  pub fn failing(name: &str) -> Arc<Self> {
    Arc::new(Self {
      name: name.to_string(),
      fail: true,
      runs: Arc::default(),
    })
  }

  pub fn runs(&self) -> usize {
    self.runs.load(Ordering::SeqCst)
  }
}

impl Target for Counting {
  fn execute(self: Arc<Self>, _suite: Suite) -> TargetFuture {
    Box::pin(async move {
      self.runs.fetch_add(1, Ordering::SeqCst);
      if self.fail {
        Err(TargetError::CmdFailed {
          cmd: self.name.clone(),
          code: Some(1),
        })
      } else {
        Ok(())
      }
    })
  }
}

impl NamedTarget for Counting {
  fn name(&self) -> String {
    self.name.clone()
  }
}
