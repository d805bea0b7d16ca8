//! Argument parsing and dispatch.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use crossmake_lib::Suite;
use tracing_subscriber::EnvFilter;

use crate::cmd::{BuildOptions, CommandError, cmd_build, cmd_clean, cmd_platforms};
use crate::config::CONFIG_FILE;

/// crossmake - cross-platform build orchestration
#[derive(Parser, Debug)]
#[command(name = "crossmake")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
  /// Run independent targets concurrently
  #[arg(short, long, global = true)]
  pub parallel: bool,

  /// Enable verbose output
  #[arg(short, long, global = true)]
  pub verbose: bool,

  /// Path to the project configuration
  #[arg(long, global = true, default_value = CONFIG_FILE)]
  pub config: PathBuf,

  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Build an executable for one platform, or for all with --release
  Build {
    /// Target operating system
    #[arg(long, default_value = crossmake_lib::platform::NATIVE)]
    os: String,

    /// Target architecture
    #[arg(long, default_value = crossmake_lib::platform::NATIVE)]
    arch: String,

    /// Build every configured platform
    #[arg(long)]
    release: bool,
  },

  /// Remove built executables
  Clean,

  /// List supported platforms
  Platforms {
    /// Output as JSON
    #[arg(long)]
    json: bool,
  },
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects debug output.
pub fn init_tracing(verbose: bool) {
  let default = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

/// Run a parsed command against `suite`.
pub async fn run(suite: &Suite, cli: &Cli) -> Result<(), CommandError> {
  match &cli.command {
    Commands::Build { os, arch, release } => {
      let options = BuildOptions {
        os: os.clone(),
        arch: arch.clone(),
        release: *release,
        parallel: cli.parallel,
      };
      cmd_build(suite, &options).await
    }
    Commands::Clean => cmd_clean(suite, cli.parallel).await,
    Commands::Platforms { json } => cmd_platforms(suite, *json),
  }
}
