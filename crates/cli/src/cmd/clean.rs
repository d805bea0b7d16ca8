//! Implementation of the `crossmake clean` command.

use crossmake_lib::{Suite, concatenate, parallelize};
use tracing::debug;

use super::CommandError;
use crate::output::print_success;

/// Execute the clean command.
///
/// Runs every registered clean target. Failures of individual targets do not
/// stop the others.
pub async fn cmd_clean(suite: &Suite, parallel: bool) -> Result<(), CommandError> {
  let targets = suite.lookup_clean_targets();
  let count = targets.len();
  debug!(count, parallel, "cleaning");

  let clean = if parallel {
    parallelize(targets)
  } else {
    concatenate(false, targets)
  };
  suite.execute(clean).await?;

  print_success(&format!("Cleaned {} artifact(s)", count));
  Ok(())
}
