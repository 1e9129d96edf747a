//! # Violation Records

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::JsonPath;

/// A single finding produced by a rule evaluator.
///
/// Violations are values, not errors. A rule that finds nothing returns an
/// empty list; a rule that cannot apply to its input also returns an empty
/// list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Human-readable description naming the offending element and the fix.
    pub message: String,
    /// Location of the offending node. `None` lets the host fall back to the
    /// path of the node it handed to the rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<JsonPath>,
}

impl Violation {
    /// A violation without its own path.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
        }
    }

    /// A violation at an explicit location.
    pub fn at(message: impl Into<String>, path: JsonPath) -> Self {
        Self {
            message: message.into(),
            path: Some(path),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) if !path.is_empty() => write!(f, "{path}: {}", self.message),
            _ => write!(f, "(root): {}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_path() {
        let v = Violation::at(
            "Property 'userKey' must use $ref",
            JsonPath::root().key("properties").key("userKey"),
        );
        assert_eq!(v.to_string(), "properties/userKey: Property 'userKey' must use $ref");
    }

    #[test]
    fn display_without_path() {
        let v = Violation::new("missing");
        assert!(v.to_string().contains("(root)"));
    }

    #[test]
    fn path_omitted_from_json_when_absent() {
        let json = serde_json::to_value(Violation::new("x")).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "x" }));
    }
}
