//! Check that every path listed in `registry.json` exists.
//!
//! Usage:
//!   validate-registry
//!   validate-registry --root /path/to/repo
//!   validate-registry --registry catalogs/registry.json
//!
//! Exit status: 0 when every path exists, 1 when any are missing, 2 when the
//! registry is absent or not valid JSON, 64 on a command-line usage error.

use anyhow::{Context, Result};
use clap::Parser;
use registry_validator::{
    Outcome, default_registry_path, exit_code_for, find_repo_root, logging, report,
    run_validation,
};
use std::io::{self, Write};
use std::path::PathBuf;

// Kept apart from the 0/1/2 validation statuses (EX_USAGE from sysexits.h).
const USAGE_EXIT_CODE: i32 = 64;

#[derive(Parser, Debug)]
#[command(name = "validate-registry")]
#[command(about = "Validate that all registry.json component paths exist")]
#[command(
    after_help = "Without --root, the repository root is the first directory holding registry.json, \
                  searched in order: $REGISTRY_ROOT, the executable's directory and its ancestors, \
                  the build-time REGISTRY_ROOT_HINT, the current directory and its ancestors."
)]
struct Cli {
    /// Repository root; overrides the search described below.
    #[arg(long)]
    root: Option<PathBuf>,
    /// Registry file, relative to the root unless absolute.
    #[arg(long)]
    registry: Option<PathBuf>,
}

fn main() {
    logging::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            std::process::exit(USAGE_EXIT_CODE);
        }
        Err(err) => err.exit(),
    };

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(Outcome::RegistryUnusable.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let repo_root = match cli.root {
        Some(root) => root,
        None => find_repo_root().context("locating repository root")?,
    };
    let registry_path = match cli.registry {
        Some(path) => repo_root.join(path),
        None => default_registry_path(&repo_root),
    };

    let outcome = run_validation(&repo_root, &registry_path);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &outcome {
        Ok(result) => {
            report::write_parsed(&mut out).context("writing report")?;
            report::write_result(&mut out, result).context("writing report")?;
        }
        Err(err) => report::write_error(&mut out, err).context("writing registry error")?,
    }
    out.flush().context("flushing stdout")?;

    Ok(exit_code_for(&outcome))
}
