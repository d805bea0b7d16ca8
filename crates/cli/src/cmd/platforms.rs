//! Implementation of the `crossmake platforms` command.

use crossmake_lib::leaf::BUILD_TARGET_PREFIX;
use crossmake_lib::{Platform, Suite};
use serde::Serialize;

use super::CommandError;
use crate::output::{print_info, print_json, symbols};

#[derive(Serialize)]
struct PlatformEntry {
  name: String,
  #[serde(flatten)]
  platform: Platform,
  registered: bool,
}

fn entries(suite: &Suite) -> Vec<PlatformEntry> {
  suite
    .supported_platforms()
    .iter()
    .map(|platform| PlatformEntry {
      name: platform.to_string(),
      platform: *platform,
      registered: suite.lookup(&format!("{}{}", BUILD_TARGET_PREFIX, platform)).is_some(),
    })
    .collect()
}

/// List the platforms the suite accepts, marking the ones with a build target.
pub fn cmd_platforms(suite: &Suite, json: bool) -> Result<(), CommandError> {
  let entries = entries(suite);

  if json {
    print_json(&entries)?;
    return Ok(());
  }

  print_info(&format!("{} supported platform(s)", entries.len()));
  for entry in &entries {
    let marker = if entry.registered { symbols::SUCCESS } else { symbols::MINUS };
    let platform = &entry.platform;
    println!("  {} {}/{}{}", marker, platform.os, platform.arch, platform.extension);
  }
  Ok(())
}
