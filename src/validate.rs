//! Path existence checks over a loaded registry.
//!
//! `validate` is pure apart from filesystem reads: it never prints and never
//! exits. The binary turns the returned `ValidationResult` (or a
//! `RegistryError`) into console output and an exit status via `Outcome`.

use crate::error::RegistryError;
use crate::registry::Registry;
use std::path::Path;
use tracing::{debug, info};

/// A registry entry whose path does not exist under the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingEntry {
    pub category: String,
    pub id: String,
    pub name: String,
    pub path: String,
}

/// Totals for one validation pass. `missing` is in encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub total: usize,
    pub missing: Vec<MissingEntry>,
}

impl ValidationResult {
    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    /// Entries whose path exists. Never underflows, even for a hand-built
    /// result with more missing records than `total`.
    pub fn valid(&self) -> usize {
        self.total.saturating_sub(self.missing.len())
    }

    pub fn is_success(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn outcome(&self) -> Outcome {
        if self.is_success() {
            Outcome::Valid
        } else {
            Outcome::MissingPaths
        }
    }
}

/// Overall run outcome and its process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Valid,
    MissingPaths,
    RegistryUnusable,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Valid => 0,
            Outcome::MissingPaths => 1,
            Outcome::RegistryUnusable => 2,
        }
    }
}

impl From<&RegistryError> for Outcome {
    fn from(_: &RegistryError) -> Self {
        Outcome::RegistryUnusable
    }
}

/// Exit status for a finished load-and-validate run.
pub fn exit_code_for(result: &Result<ValidationResult, RegistryError>) -> i32 {
    match result {
        Ok(result) => result.outcome().exit_code(),
        Err(err) => Outcome::from(err).exit_code(),
    }
}

/// Check every entry with a path against `root`.
///
/// Entries without a path are neither counted nor reported. Paths are joined
/// onto `root`, so absolute entry paths are checked as-is. Directories count as
/// present.
pub fn validate(root: &Path, registry: &Registry) -> ValidationResult {
    let mut result = ValidationResult::default();

    for category in registry.categories() {
        for entry in &category.entries {
            let Some(rel) = entry.path() else {
                continue;
            };
            result.total += 1;
            let resolved = root.join(rel);
            if resolved.exists() {
                debug!(category = %category.name, id = %entry.id, path = rel, "present");
                continue;
            }
            debug!(category = %category.name, id = %entry.id, path = rel, "missing");
            result.missing.push(MissingEntry {
                category: category.name.clone(),
                id: entry.id.clone(),
                name: entry.name.clone(),
                path: rel.to_string(),
            });
        }
    }

    info!(
        total = result.total,
        missing = result.missing_count(),
        "validated registry paths"
    );
    result
}
