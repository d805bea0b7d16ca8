//! Composite targets: run a collection of targets concurrently or in order.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, error, warn};

use crate::suite::Suite;

use super::types::{MultiError, TargetError};
use super::{Target, TargetFuture};

/// Targets executed concurrently, one task per target.
///
/// Every sub-target runs to completion; there is no cancellation when one
/// fails. Failures are collected in the order they complete.
pub struct Parallel {
  targets: Vec<Arc<dyn Target>>,
}

impl Parallel {
  pub fn new(targets: Vec<Arc<dyn Target>>) -> Self {
    Self { targets }
  }

  pub fn targets(&self) -> &[Arc<dyn Target>] {
    &self.targets
  }
}

impl Target for Parallel {
  fn execute(self: Arc<Self>, suite: Suite) -> TargetFuture {
    Box::pin(async move {
      let mut join_set = JoinSet::new();

      for target in &self.targets {
        join_set.spawn(target.clone().execute(suite.clone()));
      }

      debug!(count = self.targets.len(), "spawned parallel targets");

      // Drain every spawned task so no outcome is lost
      let mut errors = Vec::new();
      while let Some(joined) = join_set.join_next().await {
        match joined {
          Ok(Ok(())) => {}
          Ok(Err(e)) => {
            warn!(error = %e, "parallel target failed");
            errors.push(e);
          }
          Err(e) => {
            error!(error = %e, "parallel target panicked");
            errors.push(TargetError::Panicked(e.to_string()));
          }
        }
      }

      MultiError::into_result(errors)
    })
  }
}

/// Targets executed one after another in the order given.
///
/// With `abort_on_first_error` the first failure is returned as-is and the
/// remaining targets are skipped. Otherwise all targets run and failures are
/// collected in submission order.
pub struct Sequential {
  targets: Vec<Arc<dyn Target>>,
  abort_on_first_error: bool,
}

impl Sequential {
  pub fn new(abort_on_first_error: bool, targets: Vec<Arc<dyn Target>>) -> Self {
    Self {
      targets,
      abort_on_first_error,
    }
  }

  pub fn targets(&self) -> &[Arc<dyn Target>] {
    &self.targets
  }

  pub fn aborts_on_first_error(&self) -> bool {
    self.abort_on_first_error
  }
}

impl Target for Sequential {
  fn execute(self: Arc<Self>, suite: Suite) -> TargetFuture {
    Box::pin(async move {
      let mut errors = Vec::new();

      for (index, target) in self.targets.iter().enumerate() {
        if let Err(e) = target.clone().execute(suite.clone()).await {
          if self.abort_on_first_error {
            debug!(index, remaining = self.targets.len() - index - 1, "aborting sequence");
            return Err(e);
          }
          warn!(index, error = %e, "sequential target failed");
          errors.push(e);
        }
      }

      MultiError::into_result(errors)
    })
  }
}

/// Combine targets to be executed in parallel.
pub fn parallelize(targets: impl IntoIterator<Item = Arc<dyn Target>>) -> Arc<dyn Target> {
  Arc::new(Parallel::new(targets.into_iter().collect()))
}

/// Combine targets to be executed sequentially.
///
/// If `abort_on_first_error` is false every target runs and all failures are
/// returned together.
pub fn concatenate(abort_on_first_error: bool, targets: impl IntoIterator<Item = Arc<dyn Target>>) -> Arc<dyn Target> {
  Arc::new(Sequential::new(abort_on_first_error, targets.into_iter().collect()))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::platform::PlatformSet;
  use crate::util::testutil::{Probe, failing, panicking, succeeding};

  fn suite() -> Suite {
    Suite::new(PlatformSet::supported())
  }

  fn cmd_of(err: &TargetError) -> &str {
    match err {
      TargetError::CmdFailed { cmd, .. } => cmd,
      other => panic!("unexpected error {:?}", other),
    }
  }

  #[tokio::test]
  async fn parallel_all_succeed() {
    let (a, probe_a) = succeeding();
    let (b, probe_b) = succeeding();

    suite().execute(parallelize(vec![a, b])).await.unwrap();

    assert_eq!(probe_a.runs(), 1);
    assert_eq!(probe_b.runs(), 1);
  }

  #[tokio::test]
  async fn parallel_collects_every_failure() {
    let (ok, ok_probe) = succeeding();
    let (f1, _) = failing("one");
    let (f2, _) = failing("two");
    let (f3, _) = failing("three");

    let err = suite().execute(parallelize(vec![f1, ok, f2, f3])).await.unwrap_err();

    assert_eq!(ok_probe.runs(), 1);
    let TargetError::Multiple(multi) = err else {
      panic!("expected aggregate");
    };
    let mut cmds: Vec<_> = multi.errors().iter().map(cmd_of).collect();
    cmds.sort();
    assert_eq!(cmds, vec!["one", "three", "two"]);
  }

  #[tokio::test]
  async fn parallel_empty_succeeds() {
    suite().execute(parallelize(Vec::new())).await.unwrap();
  }

  #[tokio::test]
  async fn parallel_runs_every_target_when_all_fail() {
    let targets_and_probes: Vec<_> = (0..16).map(|i| failing(&format!("t{i}"))).collect();
    let probes: Vec<Probe> = targets_and_probes.iter().map(|(_, p)| p.clone()).collect();
    let targets = targets_and_probes.into_iter().map(|(t, _)| t);

    let err = suite().execute(parallelize(targets)).await.unwrap_err();

    let TargetError::Multiple(multi) = err else {
      panic!("expected aggregate");
    };
    assert_eq!(multi.len(), 16);
    assert!(probes.iter().all(|p| p.runs() == 1));
  }

  #[tokio::test]
  async fn parallel_reports_panicking_target() {
    let (ok, _) = succeeding();

    let err = suite().execute(parallelize(vec![ok, panicking()])).await.unwrap_err();

    let TargetError::Multiple(multi) = err else {
      panic!("expected aggregate");
    };
    assert_eq!(multi.len(), 1);
    assert!(matches!(multi.errors()[0], TargetError::Panicked(_)));
  }

  #[tokio::test]
  async fn sequential_abort_stops_at_first_failure() {
    let (first, p1) = succeeding();
    let (second, p2) = failing("second");
    let (third, p3) = succeeding();

    let err = suite()
      .execute(concatenate(true, vec![first, second, third]))
      .await
      .unwrap_err();

    // Returned unwrapped, not as an aggregate
    assert_eq!(cmd_of(&err), "second");
    assert_eq!((p1.runs(), p2.runs(), p3.runs()), (1, 1, 0));
  }

  #[tokio::test]
  async fn sequential_continue_collects_in_order() {
    let (first, p1) = failing("first");
    let (second, p2) = succeeding();
    let (third, p3) = failing("third");

    let err = suite()
      .execute(concatenate(false, vec![first, second, third]))
      .await
      .unwrap_err();

    assert_eq!((p1.runs(), p2.runs(), p3.runs()), (1, 1, 1));
    let TargetError::Multiple(multi) = err else {
      panic!("expected aggregate");
    };
    let cmds: Vec<_> = multi.errors().iter().map(cmd_of).collect();
    assert_eq!(cmds, vec!["first", "third"]);
  }

  #[tokio::test]
  async fn sequential_runs_in_submission_order() {
    let (a, pa) = succeeding();
    let (b, pb) = succeeding();
    let (c, pc) = succeeding();

    suite().execute(concatenate(true, vec![a, b, c])).await.unwrap();

    assert!(pa.last_started() < pb.last_started());
    assert!(pb.last_started() < pc.last_started());
  }

  #[tokio::test]
  async fn sequential_without_failures_succeeds() {
    let (a, _) = succeeding();
    suite().execute(concatenate(false, vec![a])).await.unwrap();
    suite().execute(concatenate(false, Vec::new())).await.unwrap();
  }

  #[tokio::test]
  async fn nested_composites() {
    let (a, pa) = succeeding();
    let (b, pb) = failing("inner");
    let (c, pc) = succeeding();
    let (d, pd) = succeeding();

    let per_platform = vec![concatenate(true, vec![a, b]), concatenate(true, vec![c, d])];
    let err = suite().execute(parallelize(per_platform)).await.unwrap_err();

    assert_eq!((pa.runs(), pb.runs(), pc.runs(), pd.runs()), (1, 1, 1, 1));
    let TargetError::Multiple(multi) = err else {
      panic!("expected aggregate");
    };
    assert_eq!(multi.len(), 1);
    assert_eq!(cmd_of(&multi.errors()[0]), "inner");
  }

  #[tokio::test]
  async fn composites_can_be_executed_again() {
    let (a, pa) = failing("again");
    let target = concatenate(false, vec![a]);

    assert!(suite().execute(target.clone()).await.is_err());
    assert!(suite().execute(target).await.is_err());
    assert_eq!(pa.runs(), 2);
  }
}
