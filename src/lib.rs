pub mod error;
pub mod logging;
pub mod registry;
pub mod report;
pub mod validate;

pub use error::RegistryError;
pub use registry::{
    Category, DEFAULT_REGISTRY_PATH, Entry, Registry, UNKNOWN_LABEL, load_registry_from_path,
};
pub use validate::{MissingEntry, Outcome, ValidationResult, exit_code_for, validate};

use anyhow::{Context, Result};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::debug;

const ROOT_ENV: &str = "REGISTRY_ROOT";

/// Registry location for a given repository root.
pub fn default_registry_path(repo_root: &Path) -> PathBuf {
    repo_root.join(DEFAULT_REGISTRY_PATH)
}

/// Load the registry at `registry_path` and check it against `repo_root`.
pub fn run_validation(
    repo_root: &Path,
    registry_path: &Path,
) -> Result<ValidationResult, RegistryError> {
    let registry = load_registry_from_path(registry_path)?;
    Ok(validate(repo_root, &registry))
}

fn is_repo_root(candidate: &Path) -> bool {
    candidate.join(DEFAULT_REGISTRY_PATH).is_file()
}

fn repo_root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.exists() || !is_repo_root(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_repo_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the repository root that holds `registry.json`.
///
/// Order: `REGISTRY_ROOT`, the executable's directory and its ancestors, the
/// build-time `REGISTRY_ROOT_HINT`, then the current directory and its
/// ancestors. When nothing matches, the current directory is returned so the
/// caller reports the registry as missing there.
pub fn find_repo_root() -> Result<PathBuf> {
    if let Ok(env_root) = env::var(ROOT_ENV) {
        if let Some(root) = repo_root_from_hint(&env_root) {
            return Ok(root);
        }
        debug!(hint = %env_root, "{ROOT_ENV} does not contain {DEFAULT_REGISTRY_PATH}; ignoring");
    }

    let cwd = env::current_dir().context("reading current directory")?;
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    Ok(resolve_repo_root(
        exe_dir.as_deref(),
        option_env!("REGISTRY_ROOT_HINT"),
        &cwd,
    ))
}

fn resolve_repo_root(exe_dir: Option<&Path>, hint: Option<&str>, cwd: &Path) -> PathBuf {
    exe_dir
        .and_then(search_upwards)
        .or_else(|| hint.and_then(repo_root_from_hint))
        .or_else(|| search_upwards(cwd))
        .unwrap_or_else(|| {
            debug!(cwd = %cwd.display(), "no registry found upwards; using current directory");
            cwd.to_path_buf()
        })
}
