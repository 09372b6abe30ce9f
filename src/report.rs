//! Console rendering for validation runs.
//!
//! Everything here writes to a caller-supplied `io::Write` so tests can
//! capture the exact text the binary prints on stdout.

use crate::error::RegistryError;
use crate::validate::ValidationResult;
use std::io::{self, Write};

const BANNER_WIDTH: usize = 60;

/// Confirmation printed once the registry parsed cleanly.
pub fn write_parsed<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "✅ Registry file is valid JSON")
}

/// Per-entry lines, summary banner, and the pass/fail verdict.
pub fn write_result<W: Write>(out: &mut W, result: &ValidationResult) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Validating component paths...")?;
    for missing in &result.missing {
        writeln!(out, "✗ Missing: {} -> {}", missing.id, missing.path)?;
    }

    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Validation Summary")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "{:<24}{}", "Total paths checked:", result.total)?;
    writeln!(out, "{:<24}{}", "Valid paths:", result.valid())?;
    writeln!(out, "{:<24}{}", "Missing paths:", result.missing_count())?;

    writeln!(out)?;
    if result.is_success() {
        writeln!(out, "✅ All registry paths are valid!")?;
        return Ok(());
    }

    writeln!(out, "❌ Registry validation failed!")?;
    writeln!(out)?;
    writeln!(out, "Missing files:")?;
    for missing in &result.missing {
        writeln!(out, "  - {}/{}: {}", missing.category, missing.id, missing.path)?;
    }
    Ok(())
}

/// Single diagnostic line for a registry that could not be used.
pub fn write_error<W: Write>(out: &mut W, err: &RegistryError) -> io::Result<()> {
    writeln!(out, "❌ {err}")
}
