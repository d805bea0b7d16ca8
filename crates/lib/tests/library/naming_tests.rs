use std::sync::Arc;

use crossmake_lib::leaf::{CompileTarget, make_clean_targets};
use crossmake_lib::name::NameTemplate;
use crossmake_lib::platform::{self, Arch, Os, Platform, PlatformSet};
use crossmake_lib::target::{NamedTarget, OutputTarget};

#[test]
fn default_template_end_to_end() {
  let template = NameTemplate::with_default_postfix("app");

  let linux = Platform::parse("linux", "amd64").unwrap();
  let windows = Platform::parse("windows", "amd64").unwrap();

  assert_eq!(template.render(&linux).unwrap(), "app_linux-amd64");
  assert_eq!(template.render(&windows).unwrap(), "app_windows-amd64.exe");
}

#[test]
fn caller_supplied_platform_gets_catalog_extension_through_parse() {
  // A hand-built platform has no extension, the parsed one does
  let approximate = Platform::new(Os::Windows, Arch::X86);
  let canonical = Platform::parse("windows", "386").unwrap();

  assert_eq!(approximate, canonical);
  assert_eq!(canonical.extension, ".exe");

  let template = NameTemplate::with_default_postfix("tool");
  assert_eq!(template.render(&approximate).unwrap(), "tool_windows-386");
  assert_eq!(template.render(&canonical).unwrap(), "tool_windows-386.exe");
}

#[test]
fn every_supported_platform_yields_a_unique_build_name() {
  let base = CompileTarget::new(NameTemplate::with_default_postfix("app"), platform::LINUX_AMD64);
  let targets = base.for_platforms(&PlatformSet::supported());

  let mut names: Vec<_> = targets.iter().map(|t| t.name()).collect();
  names.sort();
  names.dedup();
  assert_eq!(names.len(), platform::supported().len());

  let outputs: Vec<_> = targets.iter().map(|t| t.output_name().unwrap()).collect();
  assert!(outputs.contains(&"app_plan9-386".to_string()));
  assert!(outputs.contains(&"app_windows-amd64.exe".to_string()));
}

#[test]
fn clean_targets_work_through_trait_objects() {
  let targets: Vec<Arc<CompileTarget>> = vec![
    Arc::new(CompileTarget::new(NameTemplate::with_default_postfix("a"), platform::LINUX_ARM)),
    Arc::new(CompileTarget::new(NameTemplate::with_default_postfix("b"), platform::DARWIN_ARM64)),
  ];

  let cleans = make_clean_targets(targets.iter().map(|t| t.as_ref())).unwrap();

  let files: Vec<_> = cleans.iter().map(|c| c.filename.display().to_string()).collect();
  assert_eq!(files, vec!["a_linux-arm", "b_darwin-arm64"]);
}
