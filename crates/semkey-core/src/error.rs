//! # Error Types
//!
//! Rule evaluation never fails: malformed input degrades to "no result".
//! The only fallible operations in the workspace are loading a document
//! and loading a ruleset, and their errors use `thiserror` for derive-based
//! `Display` and `Error` implementations.

use thiserror::Error;

/// Error while loading an API document from disk or from text.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The document file could not be read.
    #[error("cannot read document '{path}': {source}")]
    Read {
        /// Path to the document that failed to load.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON.
    #[error("invalid JSON in '{origin}': {source}")]
    InvalidJson {
        /// File path or other description of where the text came from.
        origin: String,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The document is not valid YAML.
    #[error("invalid YAML in '{origin}': {source}")]
    InvalidYaml {
        /// File path or other description of where the text came from.
        origin: String,
        /// Underlying parse error.
        #[source]
        source: serde_yaml::Error,
    },

    /// The document parsed, but its root is not a mapping.
    #[error("document root of '{origin}' must be a mapping, found {found}")]
    NotAMapping {
        /// File path or other description of where the text came from.
        origin: String,
        /// JSON type name of the root value.
        found: &'static str,
    },
}
