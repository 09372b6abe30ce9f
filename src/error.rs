//! Fatal registry failures.
//!
//! Every variant aborts the run before any path is checked; the binary maps
//! them all to exit status 2. Missing component files are not errors and live
//! in `ValidationResult` instead.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Registry file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Unable to read registry file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Registry file is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_path() {
        let err = RegistryError::NotFound {
            path: PathBuf::from("/repo/registry.json"),
        };
        assert_eq!(
            err.to_string(),
            "Registry file not found: /repo/registry.json"
        );
    }

    #[test]
    fn parse_message_carries_parser_diagnostic() {
        let source = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let diagnostic = source.to_string();
        let err = RegistryError::Parse {
            path: PathBuf::from("registry.json"),
            source,
        };
        let message = err.to_string();
        assert!(message.starts_with("Registry file is not valid JSON: "));
        assert!(message.ends_with(&diagnostic), "message was: {message}");
    }
}
