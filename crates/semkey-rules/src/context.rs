//! # Evaluation Context
//!
//! What a host engine supplies alongside each target node: the node's path
//! within the document and, optionally, the document itself and a view of
//! it with local references already dereferenced.

use serde::Deserialize;
use serde_json::Value;

use semkey_core::{ExceptionSet, JsonPath};

/// Options recognized by every rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RuleOptions {
    /// Names the rule must not flag. Absent means no exceptions.
    #[serde(default)]
    pub exceptions: ExceptionSet,
}

impl RuleOptions {
    /// Options with the given exceptions.
    pub fn with_exceptions(exceptions: ExceptionSet) -> Self {
        Self { exceptions }
    }

    /// Read options from a raw options object such as `{"exceptions": "fooKey"}`.
    ///
    /// Unknown keys and non-object input are ignored.
    pub fn from_value(raw: &Value) -> Self {
        Self {
            exceptions: ExceptionSet::normalize(raw.get("exceptions")),
        }
    }
}

/// Per-invocation context from the host engine.
#[derive(Debug, Clone, Default)]
pub struct RuleContext<'a> {
    /// Path of the target node within the document.
    pub path: JsonPath,
    /// The raw document root, as parsed.
    pub document: Option<&'a Value>,
    /// The document with local references already dereferenced, if the host has one.
    pub resolved: Option<&'a Value>,
}

impl<'a> RuleContext<'a> {
    /// Context carrying only a path.
    pub fn at(path: JsonPath) -> Self {
        Self {
            path,
            document: None,
            resolved: None,
        }
    }

    /// Attach the raw document root.
    pub fn with_document(mut self, document: &'a Value) -> Self {
        self.document = Some(document);
        self
    }

    /// Attach a resolved document view.
    pub fn with_resolved(mut self, resolved: &'a Value) -> Self {
        self.resolved = Some(resolved);
        self
    }

    /// The root lookups should use: the resolved view when present,
    /// otherwise the raw document.
    pub fn lookup_root(&self) -> Option<&'a Value> {
        self.resolved.or(self.document)
    }
}
