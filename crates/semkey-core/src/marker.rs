//! # Semantic Markers
//!
//! A schema declares that it represents a stable identifier type by owning
//! one of two annotation keys. Only presence matters: `null` and `false`
//! still count as declared.

use serde_json::{Map, Value};

/// Preferred marker key.
pub const SEMANTIC_MARKER: &str = "x-semantic-type";

/// Transitional alias, accepted with equal weight.
pub const LEGACY_MARKER: &str = "x-semantic-key";

/// True iff the mapping directly owns `x-semantic-type` or `x-semantic-key`.
pub fn has_marker(schema: &Map<String, Value>) -> bool {
    schema.contains_key(SEMANTIC_MARKER) || schema.contains_key(LEGACY_MARKER)
}
