//! Compile targets invoke the compiler for one platform.
//!
//! The compiler runs with the process environment plus the toolchain's OS
//! and architecture variables set to the target platform, following the
//! cross-compilation convention of toolchains like `go build`.

use std::process::Stdio;
use std::sync::{Arc, Mutex};

use tokio::process::Command;
use tracing::{debug, info};

use crate::leaf::clean::CleanTarget;
use crate::leaf::version::Version;
use crate::name::NameTemplate;
use crate::platform::{Platform, PlatformSet};
use crate::suite::Suite;
use crate::target::{NamedTarget, OutputTarget, Target, TargetError, TargetFuture};
use crate::util::env::{EnvMap, process_env, with_env};

/// Prefix of every compile target's name.
pub const BUILD_TARGET_PREFIX: &str = "build_";

/// How the compiler is invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
  /// Compiler executable.
  pub program: String,
  /// Arguments placed before any flags, e.g. `["build"]`.
  pub build_args: Vec<String>,
  /// Environment variable selecting the target OS.
  pub os_var: String,
  /// Environment variable selecting the target architecture.
  pub arch_var: String,
}

impl Default for Toolchain {
  fn default() -> Self {
    Self {
      program: "go".to_string(),
      build_args: vec!["build".to_string()],
      os_var: "GOOS".to_string(),
      arch_var: "GOARCH".to_string(),
    }
  }
}

/// Where a compiler output stream goes.
#[derive(Debug, Clone, Default)]
pub enum OutputSink {
  /// This process's own stream.
  #[default]
  Inherit,
  /// Discarded.
  Null,
  /// Appended to a shared buffer.
  Capture(Arc<Mutex<Vec<u8>>>),
}

impl OutputSink {
  /// A capturing sink and the buffer it fills.
  pub fn capture() -> (Self, Arc<Mutex<Vec<u8>>>) {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    (OutputSink::Capture(buffer.clone()), buffer)
  }

  fn stdio(&self) -> Stdio {
    match self {
      OutputSink::Inherit => Stdio::inherit(),
      OutputSink::Null => Stdio::null(),
      OutputSink::Capture(_) => Stdio::piped(),
    }
  }

  fn collect(&self, bytes: &[u8]) {
    if let OutputSink::Capture(buffer) = self {
      let mut buffer = buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
      buffer.extend_from_slice(bytes);
    }
  }
}

/// Builds the executable for one platform.
#[derive(Debug, Clone)]
pub struct CompileTarget {
  /// Template of the executable's file name, rendered with the platform.
  pub name_template: NameTemplate,
  pub platform: Platform,
  pub version: Option<Version>,
  /// Fully qualified variable receiving the version, e.g. `main.version`.
  pub version_variable: Option<String>,
  /// Extra flags passed to the compiler before the output flag.
  pub build_flags: Vec<String>,
  pub toolchain: Toolchain,
  pub stdout: OutputSink,
  pub stderr: OutputSink,
}

impl CompileTarget {
  pub fn new(name_template: NameTemplate, platform: Platform) -> Self {
    Self {
      name_template,
      platform,
      version: None,
      version_variable: None,
      build_flags: Vec::new(),
      toolchain: Toolchain::default(),
      stdout: OutputSink::default(),
      stderr: OutputSink::default(),
    }
  }

  pub fn with_version(mut self, version: Version) -> Self {
    self.version = Some(version);
    self
  }

  pub fn with_version_variable(mut self, variable: &str) -> Self {
    self.version_variable = Some(variable.to_string());
    self
  }

  pub fn with_build_flags(mut self, flags: Vec<String>) -> Self {
    self.build_flags = flags;
    self
  }

  pub fn with_toolchain(mut self, toolchain: Toolchain) -> Self {
    self.toolchain = toolchain;
    self
  }

  pub fn with_stdout(mut self, sink: OutputSink) -> Self {
    self.stdout = sink;
    self
  }

  pub fn with_stderr(mut self, sink: OutputSink) -> Self {
    self.stderr = sink;
    self
  }

  /// A copy of this target building for `platform`.
  pub fn for_platform(&self, platform: Platform) -> Self {
    let mut target = self.clone();
    target.platform = platform;
    target
  }

  /// One copy of this target per platform in `platforms`.
  pub fn for_platforms(&self, platforms: &PlatformSet) -> Vec<Self> {
    platforms.iter().map(|p| self.for_platform(*p)).collect()
  }

  /// A clean target removing this target's executable.
  pub fn clean_target(&self) -> Result<CleanTarget, TargetError> {
    Ok(CleanTarget::for_platform(self.output_name()?, self.platform))
  }

  /// Compiler arguments producing `output_name`.
  pub fn command_args(&self, output_name: &str) -> Vec<String> {
    let mut args = self.toolchain.build_args.clone();

    if let (Some(variable), Some(version)) = (&self.version_variable, &self.version) {
      args.push(format!("-ldflags=-X {}={}", variable, version));
    }

    args.extend(self.build_flags.iter().cloned());
    args.push("-o".to_string());
    args.push(output_name.to_string());
    args
  }

  /// `base` with the toolchain's OS and architecture variables set.
  pub fn command_env(&self, base: &EnvMap) -> EnvMap {
    let env = with_env(base, &self.toolchain.os_var, self.platform.os.as_str());
    with_env(&env, &self.toolchain.arch_var, self.platform.arch.as_str())
  }
}

impl Target for CompileTarget {
  fn execute(self: Arc<Self>, suite: Suite) -> TargetFuture {
    Box::pin(async move {
      suite.check_platform(&self.platform)?;

      let output_name = self.output_name()?;
      let args = self.command_args(&output_name);
      let env = self.command_env(&process_env());

      info!(artifact = %output_name, platform = %self.platform, "building binary");

      let mut command = Command::new(&self.toolchain.program);
      command
        .args(&args)
        .env_clear()
        .envs(&env)
        .stdin(Stdio::null())
        .stdout(self.stdout.stdio())
        .stderr(self.stderr.stdio());

      debug!(program = %self.toolchain.program, args = ?args, "spawning compiler");

      let output = command.output().await?;
      self.stdout.collect(&output.stdout);
      self.stderr.collect(&output.stderr);

      if !output.status.success() {
        return Err(TargetError::CmdFailed {
          cmd: format!("{} {}", self.toolchain.program, args.join(" ")),
          code: output.status.code(),
        });
      }

      Ok(())
    })
  }
}

impl NamedTarget for CompileTarget {
  fn name(&self) -> String {
    format!("{}{}", BUILD_TARGET_PREFIX, self.platform)
  }
}

impl OutputTarget for CompileTarget {
  fn output_name(&self) -> Result<String, TargetError> {
    Ok(self.name_template.render(&self.platform)?)
  }
}
