#![allow(dead_code)]

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

// Throwaway repository with a registry.json at its root. The directory is
// removed when the fixture drops.
pub struct TempRegistryRepo {
    dir: TempDir,
}

impl TempRegistryRepo {
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().context("failed to allocate temp repo")?;
        Ok(Self { dir })
    }

    pub fn with_registry(registry: &Value) -> Result<Self> {
        let repo = Self::new()?;
        repo.write_registry(registry)?;
        Ok(repo)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn registry_path(&self) -> PathBuf {
        self.root().join("registry.json")
    }

    pub fn write_registry(&self, registry: &Value) -> Result<()> {
        let text = serde_json::to_string_pretty(registry)?;
        self.write_registry_text(&text)
    }

    pub fn write_registry_text(&self, text: &str) -> Result<()> {
        fs::write(self.registry_path(), text)
            .with_context(|| format!("failed to write {}", self.registry_path().display()))
    }

    pub fn touch(&self, rel: &str) -> Result<PathBuf> {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, "")
            .with_context(|| format!("failed to create fixture {}", path.display()))?;
        Ok(path)
    }
}

pub fn validator_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_validate-registry"))
}

// Runs the validator against `root` with logging silenced so stderr only
// carries real failures.
pub fn run_validator(root: &Path) -> Result<Output> {
    let mut cmd = Command::new(validator_binary());
    cmd.arg("--root").arg(root).env_remove("RUST_LOG");
    cmd.output().context("failed to execute validate-registry")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn missing_list(stdout: &str) -> Vec<String> {
    stdout
        .split("Missing files:\n")
        .nth(1)
        .map(|tail| {
            tail.lines()
                .filter_map(|line| line.strip_prefix("  - "))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
