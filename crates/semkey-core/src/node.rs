//! # Schema Node View
//!
//! Rules receive arbitrary JSON. Instead of probing for fields ad hoc at
//! every call site, a value is classified once into a [`SchemaNode`] and the
//! rules match on it exhaustively:
//!
//! - [`SchemaNode::Ref`]: an object owning `$ref`. A traversal leaf: the
//!   referenced schema is checked on its own when the host visits it.
//! - [`SchemaNode::Composite`]: an object owning `properties`, `allOf`,
//!   `oneOf`, `anyOf`, or `items`.
//! - [`SchemaNode::Inline`]: any other object.
//! - [`SchemaNode::NotSchema`]: anything that is not an object.
//!
//! Classification looks at key ownership only. The shape of the nested
//! values is checked by the accessors, which return `None` or nothing for
//! malformed content rather than failing.

use serde_json::{Map, Value};

use crate::exceptions::is_truthy;
use crate::marker;

/// Composition keywords whose value is an ordered sequence of subschemas.
pub const COMPOSITION_KEYWORDS: [&str; 3] = ["allOf", "oneOf", "anyOf"];

const REF_KEY: &str = "$ref";
const PROPERTIES_KEY: &str = "properties";
const ITEMS_KEY: &str = "items";

/// Tagged view over one JSON value in a schema position.
#[derive(Debug, Clone, Copy)]
pub enum SchemaNode<'a> {
    /// Object owning `$ref`.
    Ref(RefNode<'a>),
    /// Object owning at least one traversable keyword.
    Composite(SchemaObject<'a>),
    /// Object with no `$ref` and no traversable keyword.
    Inline(SchemaObject<'a>),
    /// Not an object.
    NotSchema(&'a Value),
}

impl<'a> SchemaNode<'a> {
    /// Classify a value.
    pub fn classify(value: &'a Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::NotSchema(value);
        };
        if map.contains_key(REF_KEY) {
            return Self::Ref(RefNode { map });
        }
        let object = SchemaObject { map };
        let traversable = map.contains_key(PROPERTIES_KEY)
            || map.contains_key(ITEMS_KEY)
            || COMPOSITION_KEYWORDS.iter().any(|k| map.contains_key(*k));
        if traversable {
            Self::Composite(object)
        } else {
            Self::Inline(object)
        }
    }

    /// The schema object behind a `Composite` or `Inline` node.
    pub fn declared(&self) -> Option<SchemaObject<'a>> {
        match self {
            Self::Composite(obj) | Self::Inline(obj) => Some(*obj),
            Self::Ref(_) | Self::NotSchema(_) => None,
        }
    }
}

/// An object owning `$ref`.
#[derive(Debug, Clone, Copy)]
pub struct RefNode<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> RefNode<'a> {
    /// The `$ref` pointer, when it is a string.
    pub fn pointer(&self) -> Option<&'a str> {
        self.map.get(REF_KEY).and_then(Value::as_str)
    }

    /// True unless `$ref` is `null`, `false`, `0`, or `""`.
    pub fn is_set(&self) -> bool {
        self.map.get(REF_KEY).is_some_and(is_truthy)
    }

    /// True if the object directly owns `key`, whatever its value.
    pub fn owns(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// The object's own keywords, `$ref` included, as a schema object.
    pub fn siblings(&self) -> SchemaObject<'a> {
        SchemaObject { map: self.map }
    }
}

/// Keyword view of an object in a schema position.
#[derive(Debug, Clone, Copy)]
pub struct SchemaObject<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> SchemaObject<'a> {
    /// True if the object directly owns `key`, whatever its value.
    pub fn owns(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// The `type` keyword, when it is a single string.
    pub fn schema_type(&self) -> Option<&'a str> {
        self.map.get("type").and_then(Value::as_str)
    }

    /// True iff `type` is exactly `"string"`.
    pub fn is_string(&self) -> bool {
        self.schema_type() == Some("string")
    }

    /// True iff the object owns a semantic marker.
    pub fn has_marker(&self) -> bool {
        marker::has_marker(self.map)
    }

    /// The `properties` mapping, when it is a mapping.
    pub fn properties(&self) -> Option<&'a Map<String, Value>> {
        self.map.get(PROPERTIES_KEY).and_then(Value::as_object)
    }

    /// `(keyword, subschemas)` for each composition keyword holding a sequence,
    /// in `allOf`, `oneOf`, `anyOf` order.
    pub fn compositions(&self) -> impl Iterator<Item = (&'static str, &'a [Value])> + 'a {
        let map = self.map;
        COMPOSITION_KEYWORDS.into_iter().filter_map(move |keyword| {
            map.get(keyword)
                .and_then(Value::as_array)
                .map(|items| (keyword, items.as_slice()))
        })
    }

    /// The `items` subschema, unless absent or `null`.
    pub fn items(&self) -> Option<&'a Value> {
        self.map.get(ITEMS_KEY).filter(|v| !v.is_null())
    }
}
