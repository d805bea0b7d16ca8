//! Test utilities for crossmake-lib.
//!
//! Scripted targets that record how often and in which order they ran.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::suite::Suite;
use crate::target::{NamedTarget, Target, TargetError, TargetFuture};

/// Global start counter, so start order is comparable across targets.
static SEQUENCE: AtomicUsize = AtomicUsize::new(1);

/// Shared view of a scripted target's executions.
#[derive(Debug, Clone, Default)]
pub struct Probe {
  runs: Arc<AtomicUsize>,
  started: Arc<AtomicUsize>,
}

impl Probe {
  /// How many times the target executed.
  pub fn runs(&self) -> usize {
    self.runs.load(Ordering::SeqCst)
  }

  /// Sequence number of the most recent start, 0 if never started.
  pub fn last_started(&self) -> usize {
    self.started.load(Ordering::SeqCst)
  }
}

enum Outcome {
  Succeed,
  Fail(String),
  Panic,
}

/// A target whose outcome is fixed up front.
pub struct ScriptedTarget {
  name: String,
  outcome: Outcome,
  probe: Probe,
}

impl Target for ScriptedTarget {
  fn execute(self: Arc<Self>, _suite: Suite) -> TargetFuture {
    Box::pin(async move {
      self
        .probe
        .started
        .store(SEQUENCE.fetch_add(1, Ordering::SeqCst), Ordering::SeqCst);
      self.probe.runs.fetch_add(1, Ordering::SeqCst);

      match &self.outcome {
        Outcome::Succeed => Ok(()),
        Outcome::Fail(cmd) => Err(TargetError::CmdFailed {
          cmd: cmd.clone(),
          code: Some(1),
        }),
        Outcome::Panic => panic!("scripted panic"),
      }
    })
  }
}

impl NamedTarget for ScriptedTarget {
  fn name(&self) -> String {
    self.name.clone()
  }
}

fn scripted(name: &str, outcome: Outcome) -> (Arc<ScriptedTarget>, Probe) {
  let probe = Probe::default();
  let target = Arc::new(ScriptedTarget {
    name: name.to_string(),
    outcome,
    probe: probe.clone(),
  });
  (target, probe)
}

/// A target that always succeeds.
pub fn succeeding() -> (Arc<dyn Target>, Probe) {
  let (target, probe) = scripted("ok", Outcome::Succeed);
  let target: Arc<dyn Target> = target;
  (target, probe)
}

/// A target that fails with `CmdFailed { cmd, .. }`.
pub fn failing(cmd: &str) -> (Arc<dyn Target>, Probe) {
  let (target, probe) = scripted(cmd, Outcome::Fail(cmd.to_string()));
  let target: Arc<dyn Target> = target;
  (target, probe)
}

/// A target that panics when executed.
pub fn panicking() -> Arc<dyn Target> {
  scripted("panic", Outcome::Panic).0
}

/// A named target for registry tests; fails with `fail_cmd` if given.
pub fn named(name: &str, fail_cmd: Option<&str>) -> (Arc<ScriptedTarget>, Probe) {
  let outcome = match fail_cmd {
    Some(cmd) => Outcome::Fail(cmd.to_string()),
    None => Outcome::Succeed,
  };
  scripted(name, outcome)
}
