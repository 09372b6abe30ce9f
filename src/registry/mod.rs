//! Component registry wiring.
//!
//! This module wraps the `registry.json` manifest at the repository root so the
//! validator can work from a typed snapshot instead of poking at raw JSON.
//! Shape tolerance (non-array categories, non-object entries, missing `id` or
//! `name`) is resolved once while loading; callers only ever see `Registry`,
//! `Category`, and `Entry`.

pub mod model;

pub use model::{Category, Entry, Registry, UNKNOWN_LABEL, load_registry_from_path};

/// Default registry location, relative to the repository root.
pub const DEFAULT_REGISTRY_PATH: &str = "registry.json";
