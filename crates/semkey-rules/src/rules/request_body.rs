//! # Request Body additionalProperties
//!
//! When a request body schema is a local `$ref`, the referenced component
//! must say explicitly whether extra properties are allowed. Any value
//! counts, including `false` and a schema object; only absence is reported.
//!
//! The check is one level deep. `allOf` / `oneOf` members of the referenced
//! schema are not inspected, and a referenced schema that is itself a
//! `$ref` is judged by its own keys.

use serde_json::Value;

use semkey_core::{RefNode, SchemaNode, Violation};

use crate::context::{RuleContext, RuleOptions};
use crate::resolver::{parse_local_schema_ref, resolve_local_schema};

const ADDITIONAL_PROPERTIES: &str = "additionalProperties";

/// Check one request-body media-type schema.
///
/// Non-objects, objects without `$ref`, and refs not shaped
/// `#/components/schemas/<Name>` produce no result.
pub fn check_request_body_additional_properties(
    target: &Value,
    _options: &RuleOptions,
    ctx: &RuleContext<'_>,
) -> Vec<Violation> {
    let SchemaNode::Ref(reference) = SchemaNode::classify(target) else {
        return Vec::new();
    };
    let Some(name) = local_schema_name(&reference, ctx) else {
        return Vec::new();
    };

    let declares = match resolve_local_schema(ctx, name).map(SchemaNode::classify) {
        Some(SchemaNode::Ref(nested)) => nested.owns(ADDITIONAL_PROPERTIES),
        Some(node) => match node.declared() {
            Some(schema) => schema.owns(ADDITIONAL_PROPERTIES),
            None => return not_found(name),
        },
        None => return not_found(name),
    };
    if declares {
        return Vec::new();
    }
    vec![Violation::new(format!(
        "Referenced schema '{name}' used in a request body must explicitly declare additionalProperties (boolean or schema)."
    ))]
}

fn not_found(name: &str) -> Vec<Violation> {
    vec![Violation::new(format!(
        "Referenced schema '{name}' not found under components.schemas."
    ))]
}

fn local_schema_name<'a>(reference: &RefNode<'a>, ctx: &RuleContext<'_>) -> Option<&'a str> {
    let pointer = reference.pointer()?;
    let name = parse_local_schema_ref(pointer);
    if name.is_none() {
        tracing::debug!(path = %ctx.path, pointer, "non-local $ref ignored");
    }
    name
}
