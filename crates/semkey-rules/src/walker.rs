//! # Schema Graph Walker
//!
//! Depth-first descent through a schema's `properties`, `allOf`, `oneOf`,
//! `anyOf` and `items`, reporting every key-named property whose schema is
//! an inline `type: string`.
//!
//! ## Traversal Rules
//!
//! - A property is reported when its name satisfies the caller's predicate,
//!   it is not excepted, and its schema is an object without `$ref` whose
//!   `type` is `"string"`.
//! - Every property schema is descended into whether or not it was
//!   reported, so key-named properties are found at any depth.
//! - A `$ref` node is a leaf. The schema it points to is checked on its own
//!   when the host visits it under `components.schemas`.
//! - Nodes are tracked by identity for the duration of one walk; a node
//!   reached a second time is skipped.
//!
//! Visit order is document order: a node's properties, then `allOf`,
//! `oneOf`, `anyOf` elements, then `items`.

use std::collections::HashSet;

use serde_json::Value;

use semkey_core::{ExceptionSet, JsonPath, SchemaNode, SchemaObject};

/// Walk `node`, calling `on_match(property_path, property_name)` for every
/// key-named inline string property.
///
/// `path` is the location of `node` itself; reported paths extend it with
/// `properties / <name>`, `<keyword> / <index>`, and `items` segments.
pub fn walk_key_properties<P, F>(
    node: &Value,
    path: &JsonPath,
    is_key_name: P,
    exceptions: &ExceptionSet,
    on_match: F,
) where
    P: Fn(&str) -> bool,
    F: FnMut(JsonPath, &str),
{
    let mut walker = Walker {
        is_key_name,
        exceptions,
        on_match,
        visited: HashSet::new(),
    };
    walker.visit(node, path);
}

struct Walker<'e, P, F> {
    is_key_name: P,
    exceptions: &'e ExceptionSet,
    on_match: F,
    visited: HashSet<*const Value>,
}

impl<P, F> Walker<'_, P, F>
where
    P: Fn(&str) -> bool,
    F: FnMut(JsonPath, &str),
{
    fn visit(&mut self, node: &Value, path: &JsonPath) {
        let schema = match SchemaNode::classify(node) {
            SchemaNode::Composite(obj) => obj,
            SchemaNode::Inline(_) | SchemaNode::Ref(_) | SchemaNode::NotSchema(_) => return,
        };
        if !self.visited.insert(node as *const Value) {
            tracing::trace!(path = %path, "node already visited in this walk; skipping");
            return;
        }

        self.visit_properties(schema, path);

        for (keyword, subschemas) in schema.compositions() {
            let keyword_path = path.key(keyword);
            for (i, subschema) in subschemas.iter().enumerate() {
                self.visit(subschema, &keyword_path.index(i));
            }
        }

        if let Some(items) = schema.items() {
            self.visit(items, &path.key("items"));
        }
    }

    fn visit_properties(&mut self, schema: SchemaObject<'_>, path: &JsonPath) {
        let Some(properties) = schema.properties() else {
            return;
        };
        let properties_path = path.key("properties");
        for (name, child) in properties {
            let child_path = properties_path.key(name.as_str());
            if self.is_reportable(name, child) {
                (self.on_match)(child_path.clone(), name.as_str());
            }
            self.visit(child, &child_path);
        }
    }

    fn is_reportable(&self, name: &str, child: &Value) -> bool {
        (self.is_key_name)(name)
            && !self.exceptions.contains(name)
            && SchemaNode::classify(child)
                .declared()
                .is_some_and(|obj| obj.is_string())
    }
}
