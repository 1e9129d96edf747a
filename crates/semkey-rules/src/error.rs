//! # Ruleset Errors

use thiserror::Error;

/// Error while loading a ruleset configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The ruleset file could not be read.
    #[error("cannot read ruleset '{path}': {source}")]
    Read {
        /// Path to the ruleset file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The ruleset is not valid YAML or does not match the expected shape.
    #[error("invalid ruleset '{origin}': {source}")]
    Invalid {
        /// File path or other description of where the text came from.
        origin: String,
        /// Underlying parse error.
        #[source]
        source: serde_yaml::Error,
    },

    /// The ruleset names a rule that does not exist.
    #[error("unknown rule '{id}' in ruleset (known rules: {known})")]
    UnknownRule {
        /// The unrecognized identifier.
        id: String,
        /// Comma-separated list of valid identifiers.
        known: String,
    },
}
