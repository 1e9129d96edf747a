//! # Deep Key Properties
//!
//! Any property named like `userKey` (lowercase start, `Key` suffix) found
//! anywhere under the target must point at a semantic key schema with
//! `$ref`. An inline `type: string` is reported even when it carries a
//! marker: the marker belongs on the shared component, not on each use.

use serde_json::Value;

use semkey_core::{is_lower_key_property, Violation};

use crate::context::{RuleContext, RuleOptions};
use crate::walker::walk_key_properties;

/// Walk `target` from `ctx.path` and report every inline key property.
pub fn check_key_properties_deep(
    target: &Value,
    options: &RuleOptions,
    ctx: &RuleContext<'_>,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    walk_key_properties(
        target,
        &ctx.path,
        is_lower_key_property,
        &options.exceptions,
        |path, name| {
            violations.push(Violation::at(
                format!(
                    "Property '{name}' must use $ref to a semantic key schema (x-semantic-type or x-semantic-key), not an inline primitive string."
                ),
                path,
            ));
        },
    );
    if !violations.is_empty() {
        tracing::debug!(path = %ctx.path, count = violations.len(), "inline key properties found");
    }
    violations
}
