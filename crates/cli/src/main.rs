use std::path::Path;

use anyhow::Context;
use clap::Parser;
use crossmake_cli::app::{Cli, init_tracing, run};
use crossmake_cli::cmd::{CommandError, EXIT_USAGE};
use crossmake_cli::config::ProjectConfig;
use crossmake_cli::output::print_error;

fn main() {
  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(e) => {
      // --help and --version also arrive here
      let code = if e.use_stderr() { EXIT_USAGE } else { 0 };
      let _ = e.print();
      std::process::exit(code);
    }
  };
  init_tracing(cli.verbose);

  if let Err(e) = execute(&cli) {
    print_error(&e.to_string());
    std::process::exit(e.exit_code());
  }
}

fn execute(cli: &Cli) -> Result<(), CommandError> {
  let config = ProjectConfig::load_or_default(&cli.config)?;
  let project_dir = match cli.config.parent() {
    Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
    _ => Path::new(".").to_path_buf(),
  };

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  rt.block_on(async {
    let suite = config.suite(&project_dir).await?;
    run(&suite, cli).await
  })
}
