use crate::error::RegistryError;
use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

/// Placeholder for entries that omit `id` or `name`.
pub const UNKNOWN_LABEL: &str = "unknown";

/// One component record inside a category list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entry {
    #[serde(default = "unknown_label", deserialize_with = "label")]
    pub id: String,
    #[serde(default = "unknown_label", deserialize_with = "label")]
    pub name: String,
    /// Repository-relative file path. Entries without one are never checked.
    #[serde(default, deserialize_with = "optional_path")]
    pub path: Option<String>,
}

impl Entry {
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

/// A named group of entries, kept in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub entries: Vec<Entry>,
}

/// Parsed `registry.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
struct RawRegistry {
    #[serde(default)]
    components: Map<String, Value>,
}

impl Registry {
    /// Parse registry text. `path` is only used to label errors.
    pub fn from_json_str(text: &str, path: &Path) -> Result<Self, RegistryError> {
        let document: Value = serde_json::from_str(text).map_err(|source| RegistryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_document(document, path)
    }

    /// Build a registry from an already-parsed document. Anything other than a
    /// top-level object is rejected as a parse error.
    fn from_document(document: Value, path: &Path) -> Result<Self, RegistryError> {
        let parse_error = |source: serde_json::Error| RegistryError::Parse {
            path: path.to_path_buf(),
            source,
        };
        if !document.is_object() {
            return Err(parse_error(serde_json::Error::invalid_type(
                unexpected(&document),
                &"a JSON object with a `components` map",
            )));
        }
        let raw: RawRegistry = serde_json::from_value(document).map_err(parse_error)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawRegistry) -> Self {
        let mut categories = Vec::with_capacity(raw.components.len());
        for (name, value) in raw.components {
            let Value::Array(items) = value else {
                debug!(category = %name, "skipping category that is not a list");
                continue;
            };
            let entries = items
                .into_iter()
                .enumerate()
                .filter_map(|(idx, item)| parse_entry(&name, idx, item))
                .collect();
            categories.push(Category { name, entries });
        }
        Self { categories }
    }

    /// Array-valued categories in the order they appear in the file.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Number of entries that carry a path and will be checked.
    pub fn checkable_entries(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|category| &category.entries)
            .filter(|entry| entry.path.is_some())
            .count()
    }
}

fn parse_entry(category: &str, idx: usize, item: Value) -> Option<Entry> {
    if !item.is_object() {
        debug!(category, index = idx, "skipping entry that is not an object");
        return None;
    }
    match serde_json::from_value::<Entry>(item) {
        Ok(entry) => {
            if entry.path.is_none() {
                debug!(category, id = %entry.id, "entry has no path; not checked");
            }
            Some(entry)
        }
        Err(err) => {
            debug!(category, index = idx, error = %err, "skipping unreadable entry");
            None
        }
    }
}

/// Load and parse the registry at `path`.
///
/// The file handle is dropped before this returns, whether or not parsing
/// succeeded.
pub fn load_registry_from_path(path: &Path) -> Result<Registry, RegistryError> {
    if !path.exists() {
        return Err(RegistryError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|source| RegistryError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Value =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            if source.is_io() {
                // from_reader only wraps genuine read failures as io errors
                RegistryError::Read {
                    path: path.to_path_buf(),
                    source: source.into(),
                }
            } else {
                RegistryError::Parse {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

    let registry = Registry::from_document(document, path)?;
    info!(
        path = %path.display(),
        categories = registry.categories.len(),
        entries = registry.checkable_entries(),
        "loaded registry"
    );
    Ok(registry)
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => match (n.as_u64(), n.as_i64(), n.as_f64()) {
            (Some(u), _, _) => Unexpected::Unsigned(u),
            (_, Some(i), _) => Unexpected::Signed(i),
            (_, _, Some(f)) => Unexpected::Float(f),
            _ => Unexpected::Other("number"),
        },
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

fn unknown_label() -> String {
    UNKNOWN_LABEL.to_string()
}

fn label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => unknown_label(),
        other => other.to_string(),
    })
}

fn optional_path<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}
