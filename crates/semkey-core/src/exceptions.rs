//! # Exception Sets
//!
//! Every rule accepts an `exceptions` option naming identifiers it must
//! leave alone. Rulesets written by hand supply it in three shapes, and all
//! of them normalize to one [`ExceptionSet`] before any matching runs:
//!
//! | Shape | Example | Members |
//! |---|---|---|
//! | string | `"fooKey barKey"` | whitespace-separated words |
//! | array | `["fooKey", "barKey"]` | every string element |
//! | mapping | `{fooKey: true, bazKey: false}` | keys whose value is truthy |
//!
//! Anything else (absent, `null`, a number, a boolean) is the empty set.
//! Membership is exact and case-sensitive.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Exact-match set of exempted names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExceptionSet(BTreeSet<String>);

impl ExceptionSet {
    /// The empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Normalize a raw `exceptions` option value of any accepted shape.
    pub fn normalize(raw: Option<&Value>) -> Self {
        let names = match raw {
            Some(Value::String(s)) => s.split_whitespace().map(str::to_string).collect(),
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
            Some(Value::Object(map)) => map
                .iter()
                .filter(|(_, v)| is_truthy(v))
                .map(|(k, _)| k.clone())
                .collect(),
            _ => BTreeSet::new(),
        };
        Self(names)
    }

    /// Returns true if `name` is exempted.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Number of exempted names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing is exempted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exempted names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ExceptionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'de> Deserialize<'de> for ExceptionSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::normalize(Some(&raw)))
    }
}

/// Truthiness as document authors expect it: `false`, `null`, `0`, and
/// `""` are unset; everything else is set.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
