//! # Key Schema Declarations
//!
//! A reusable schema named `*Key` under `components.schemas` is what other
//! rules steer `$ref`s towards, so it must declare its semantic identity
//! with `x-semantic-type` (or the transitional `x-semantic-key`).
//!
//! Applicability is decided purely from the context path: at least three
//! segments, with `schemas` second to last. The schema name is the last
//! segment. No reference is followed.

use serde_json::Value;

use semkey_core::{has_marker, is_key_suffix, PathSegment, Violation};

use crate::context::{RuleContext, RuleOptions};

/// Check one schema value visited at `ctx.path`.
pub fn check_key_schemas_semantic_type(
    target: &Value,
    options: &RuleOptions,
    ctx: &RuleContext<'_>,
) -> Vec<Violation> {
    let path = &ctx.path;
    if path.len() < 3 {
        return Vec::new();
    }
    if path.from_end(1).and_then(PathSegment::as_key) != Some("schemas") {
        return Vec::new();
    }
    let Some(name) = path.last().and_then(PathSegment::as_key) else {
        return Vec::new();
    };
    if !is_key_suffix(name) || options.exceptions.contains(name) {
        return Vec::new();
    }

    match target.as_object() {
        Some(schema) if !has_marker(schema) => vec![Violation::at(
            format!("Schema '{name}' must declare x-semantic-type (or transitional x-semantic-key)."),
            path.clone(),
        )],
        _ => Vec::new(),
    }
}
