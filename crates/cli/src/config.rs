//! Project configuration loaded from `crossmake.toml`.
//!
//! Every field is optional. A missing file is the same as an empty one: the
//! artifact is named after the project directory and every supported
//! platform is built with the `go` toolchain.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crossmake_lib::name::{DEFAULT_POSTFIX, TemplateError};
use crossmake_lib::{
  CompileTarget, NameTemplate, NamedTarget, Platform, PlatformError, PlatformSet, Suite, TargetError, Toolchain,
  Version,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "crossmake.toml";

/// Base name used when neither the config nor the project directory gives one.
const FALLBACK_NAME: &str = "app";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse {path}: {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: toml::de::Error,
  },

  #[error("platform entry \"{0}\" is not of the form os/arch")]
  PlatformEntry(String),

  #[error(transparent)]
  Platform(#[from] PlatformError),

  #[error("invalid name template: {0}")]
  Template(#[from] TemplateError),

  #[error(transparent)]
  Target(#[from] TargetError),
}

/// Overrides for how the compiler is invoked.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolchainConfig {
  pub program: Option<String>,
  pub build_args: Option<Vec<String>>,
  pub os_var: Option<String>,
  pub arch_var: Option<String>,
}

impl ToolchainConfig {
  fn to_toolchain(&self) -> Toolchain {
    let default = Toolchain::default();
    Toolchain {
      program: self.program.clone().unwrap_or(default.program),
      build_args: self.build_args.clone().unwrap_or(default.build_args),
      os_var: self.os_var.clone().unwrap_or(default.os_var),
      arch_var: self.arch_var.clone().unwrap_or(default.arch_var),
    }
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
  /// Base artifact name.
  pub name: Option<String>,
  /// Platforms to build, as `os/arch`.
  pub platforms: Option<Vec<String>>,
  /// Variable the version is linked into, e.g. `main.version`.
  pub version_variable: Option<String>,
  /// Extra compiler flags.
  pub build_flags: Vec<String>,
  /// Postfix template appended to the base name.
  pub name_template: Option<String>,
  pub toolchain: ToolchainConfig,
}

impl ProjectConfig {
  /// Load the config at `path`, or the default config if it does not exist.
  pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
    if !path.exists() {
      debug!(path = %path.display(), "no config file, using defaults");
      return Ok(Self::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    Self::parse(&content).map_err(|source| ConfigError::Parse {
      path: path.to_path_buf(),
      source,
    })
  }

  pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
    toml::from_str(content)
  }

  /// The configured base name, or the name of `project_dir`.
  pub fn base_name(&self, project_dir: &Path) -> String {
    if let Some(name) = &self.name {
      return name.clone();
    }

    std::fs::canonicalize(project_dir)
      .ok()
      .and_then(|dir| dir.file_name().map(|n| n.to_string_lossy().into_owned()))
      .unwrap_or_else(|| FALLBACK_NAME.to_string())
  }

  /// The platforms to build. Each entry must be in the supported catalog.
  pub fn platform_set(&self) -> Result<PlatformSet, ConfigError> {
    let Some(entries) = &self.platforms else {
      return Ok(PlatformSet::supported());
    };

    entries
      .iter()
      .map(|entry| {
        let (os, arch) = entry
          .split_once('/')
          .ok_or_else(|| ConfigError::PlatformEntry(entry.clone()))?;
        Ok(Platform::parse(os.trim(), arch.trim())?)
      })
      .collect()
  }

  /// The artifact name template for the project in `project_dir`.
  pub fn name_template(&self, project_dir: &Path) -> Result<NameTemplate, ConfigError> {
    let postfix = self.name_template.as_deref().unwrap_or(DEFAULT_POSTFIX);
    let template = NameTemplate::with_postfix(&self.base_name(project_dir), postfix);
    template.validate()?;
    Ok(template)
  }

  /// The compile target every per-platform target is copied from.
  ///
  /// `platform` is only a placeholder; it is replaced on expansion.
  pub fn base_target(
    &self,
    project_dir: &Path,
    platform: Platform,
    version: Option<Version>,
  ) -> Result<CompileTarget, ConfigError> {
    let mut target = CompileTarget::new(self.name_template(project_dir)?, platform)
      .with_build_flags(self.build_flags.clone())
      .with_toolchain(self.toolchain.to_toolchain());

    if let Some(variable) = &self.version_variable {
      target = target.with_version_variable(variable);
    }
    if let Some(version) = version {
      target = target.with_version(version);
    }
    Ok(target)
  }

  /// Build a suite with a build and a clean target per configured platform.
  ///
  /// The default artifact name and the version both come from `project_dir`.
  /// The version is only looked up when a version variable is configured; a
  /// failed lookup builds without one.
  pub async fn suite(&self, project_dir: &Path) -> Result<Suite, ConfigError> {
    let platforms = self.platform_set()?;

    let version = match &self.version_variable {
      Some(_) => match Version::from_git(project_dir).await {
        Ok(version) => Some(version),
        Err(e) => {
          warn!(error = %e, "could not determine version, building without one");
          None
        }
      },
      None => None,
    };

    let mut suite = Suite::new(platforms.clone());
    let Some(first) = platforms.iter().next() else {
      return Ok(suite);
    };

    let base = self.base_target(project_dir, *first, version)?;
    let mut targets: Vec<Arc<dyn NamedTarget>> = Vec::new();
    for target in base.for_platforms(&platforms) {
      targets.push(Arc::new(target.clean_target()?));
      targets.push(Arc::new(target));
    }
    suite.register_all_dyn(targets);

    debug!(targets = ?suite.target_names(), "suite populated");
    Ok(suite)
  }
}
