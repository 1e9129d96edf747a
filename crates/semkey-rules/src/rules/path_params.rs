//! # Key Path Parameters
//!
//! A path parameter named `*Key` identifies a resource, so its schema must
//! either `$ref` a semantic key schema (checked on its own by
//! [`check_key_schemas_semantic_type`](super::check_key_schemas_semantic_type))
//! or be an inline `type: string` carrying `x-semantic-type` or
//! `x-semantic-key`. A `$ref` that is `null`, `false`, `0`, or `""` does
//! not count as a reference; the schema is then judged by its other keys.

use serde_json::Value;

use semkey_core::{is_key_suffix, SchemaNode, Violation};

use crate::context::{RuleContext, RuleOptions};

/// Check one parameter object `{name, in, schema?}`.
///
/// Produces at most one violation. Parameters without a name, not in the
/// path, not named `*Key`, or excepted produce none.
pub fn check_key_path_params(
    target: &Value,
    options: &RuleOptions,
    ctx: &RuleContext<'_>,
) -> Vec<Violation> {
    let Some(param) = target.as_object() else {
        return Vec::new();
    };
    let Some(name) = param.get("name").and_then(Value::as_str).filter(|n| !n.is_empty()) else {
        tracing::trace!(path = %ctx.path, "parameter without a name; not applicable");
        return Vec::new();
    };
    let in_path = param.get("in").and_then(Value::as_str) == Some("path");
    if !in_path || !is_key_suffix(name) || options.exceptions.contains(name) {
        return Vec::new();
    }

    let Some(schema) = param.get("schema").filter(|s| !s.is_null()) else {
        return vec![Violation::new(format!(
            "Path parameter '{name}' must reference a semantic key schema via $ref or inline semantic marker."
        ))];
    };

    let acceptable = match SchemaNode::classify(schema) {
        SchemaNode::Ref(reference) if reference.is_set() => true,
        SchemaNode::Ref(reference) => {
            let own = reference.siblings();
            own.is_string() && own.has_marker()
        }
        SchemaNode::Composite(obj) | SchemaNode::Inline(obj) => obj.is_string() && obj.has_marker(),
        SchemaNode::NotSchema(_) => false,
    };
    if acceptable {
        return Vec::new();
    }

    vec![Violation::new(format!(
        "Path parameter '{name}' must be a $ref to a semantic key schema or inline with type: string and x-semantic-type (or x-semantic-key)."
    ))]
}
