//! Implementation of the `crossmake build` command.

use crossmake_lib::leaf::BUILD_TARGET_PREFIX;
use crossmake_lib::{Platform, Suite, concatenate, parallelize};
use tracing::debug;

use super::CommandError;
use crate::output::print_success;

/// What `build` should compile.
#[derive(Debug, Clone)]
pub struct BuildOptions {
  /// Target OS; `native` means the host.
  pub os: String,
  /// Target architecture; `native` means the host.
  pub arch: String,
  /// Build every registered platform instead of a single one.
  pub release: bool,
  /// Run release builds concurrently.
  pub parallel: bool,
}

/// Execute the build command.
///
/// A single-platform build runs the `build_{os}_{arch}` target. The pair must
/// be in the supported catalog; a cataloged pair without a registered target
/// is reported separately. A release build runs every registered build
/// target, one after another or all at once, and reports every failure.
pub async fn cmd_build(suite: &Suite, options: &BuildOptions) -> Result<(), CommandError> {
  if options.release {
    let targets = suite.lookup_build_targets();
    let count = targets.len();
    debug!(count, parallel = options.parallel, "release build");

    let release = if options.parallel {
      parallelize(targets)
    } else {
      concatenate(false, targets)
    };
    suite.execute(release).await?;

    print_success(&format!("Built {} platform(s)", count));
    return Ok(());
  }

  let platform = Platform::parse(&options.os, &options.arch)?;
  let name = format!("{}{}", BUILD_TARGET_PREFIX, platform);

  match suite.execute_named(&name).await {
    Ok(()) => {
      print_success(&format!("Built {}", platform));
      Ok(())
    }
    Err(e) if e.is_not_found() => Err(CommandError::Unsupported(platform)),
    Err(e) => Err(e.into()),
  }
}
