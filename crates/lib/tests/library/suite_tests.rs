use std::collections::HashSet;
use std::sync::Arc;

use crossmake_lib::leaf::{CleanTarget, CompileTarget};
use crossmake_lib::name::NameTemplate;
use crossmake_lib::platform::{LINUX_AMD64, PlatformSet, WINDOWS_AMD64};
use crossmake_lib::suite::Suite;
use crossmake_lib::target::{Target, TargetError, concatenate, parallelize};
use tempfile::TempDir;

use super::common::Counting;

fn suite() -> Suite {
  Suite::new(PlatformSet::new(vec![LINUX_AMD64, WINDOWS_AMD64]))
}

#[tokio::test]
async fn prefix_lookup_returns_matching_targets() {
  let mut suite = suite();
  let build_linux = Counting::ok("build_linux_amd64");
  let build_windows = Counting::ok("build_windows_amd64");
  let clean_linux = Counting::ok("clean_linux_amd64");
  suite.register_all([build_linux.clone(), build_windows.clone(), clean_linux.clone()]);

  let builds = suite.lookup_by_prefix("build_");
  assert_eq!(builds.len(), 2);

  suite.execute(parallelize(builds)).await.unwrap();

  assert_eq!(build_linux.runs(), 1);
  assert_eq!(build_windows.runs(), 1);
  assert_eq!(clean_linux.runs(), 0);
}

#[tokio::test]
async fn named_execution_distinguishes_missing_from_failed() {
  let mut suite = suite();
  suite.register(Counting::failing("build_linux_amd64"));

  let missing = suite.execute_named("build_plan9_amd64").await.unwrap_err();
  let failed = suite.execute_named("build_linux_amd64").await.unwrap_err();

  assert!(missing.is_not_found());
  assert!(!failed.is_not_found());
}

#[tokio::test]
async fn composite_of_all_builds_aggregates_failures() {
  let mut suite = suite();
  suite.register_all([
    Counting::failing("build_a"),
    Counting::ok("build_b"),
    Counting::failing("build_c"),
  ]);

  let err = suite
    .execute(concatenate(false, suite.lookup_build_targets()))
    .await
    .unwrap_err();

  let TargetError::Multiple(multi) = err else {
    panic!("expected aggregate, got {err:?}");
  };
  let failed: HashSet<_> = multi.errors().iter().map(|e| e.to_string()).collect();
  assert_eq!(failed.len(), 2);
  assert!(failed.iter().any(|m| m.ends_with("build_a")));
  assert!(failed.iter().any(|m| m.ends_with("build_c")));
}

#[tokio::test]
async fn parallel_clean_removes_registered_artifacts() {
  let temp_dir = TempDir::new().unwrap();
  let template = NameTemplate::with_default_postfix(&temp_dir.path().join("app").display().to_string());
  let base = CompileTarget::new(template, LINUX_AMD64);

  let mut suite = suite();
  for target in base.for_platforms(suite.supported_platforms()) {
    let artifact = temp_dir.path().join(target.clean_target().unwrap().filename);
    std::fs::write(&artifact, b"binary").unwrap();
    suite.register(Arc::new(target.clean_target().unwrap()));
    suite.register(Arc::new(target));
  }
  // One artifact that was never built
  suite.register(Arc::new(CleanTarget::new(temp_dir.path().join("missing"))));

  assert_eq!(suite.lookup_clean_targets().len(), 3);
  suite.execute(parallelize(suite.lookup_clean_targets())).await.unwrap();

  assert!(!temp_dir.path().join("app_linux-amd64").exists());
  assert!(!temp_dir.path().join("app_windows-amd64.exe").exists());
}

#[tokio::test]
async fn build_then_package_per_platform() {
  let suite = suite();
  let compile_linux = Counting::ok("compile_linux");
  let package_linux = Counting::ok("package_linux");
  let compile_windows = Counting::failing("compile_windows");
  let package_windows = Counting::ok("package_windows");

  let linux: Vec<Arc<dyn Target>> = vec![compile_linux.clone(), package_linux.clone()];
  let windows: Vec<Arc<dyn Target>> = vec![compile_windows.clone(), package_windows.clone()];
  let release = parallelize(vec![concatenate(true, linux), concatenate(true, windows)]);

  let err = suite.execute(release).await.unwrap_err();

  assert_eq!(package_linux.runs(), 1);
  assert_eq!(compile_windows.runs(), 1);
  assert_eq!(package_windows.runs(), 0);
  assert!(err.to_string().starts_with("multiple errors occurred:\n"));
}
