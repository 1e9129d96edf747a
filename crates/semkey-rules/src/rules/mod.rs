//! # Rule Registry
//!
//! [`RuleKind`] names each evaluator with a stable identifier used in
//! rulesets and reports, and dispatches to the matching free function.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use semkey_core::Violation;

use crate::context::{RuleContext, RuleOptions};

mod deep_properties;
mod path_params;
mod request_body;
mod schema_declarations;

pub use deep_properties::check_key_properties_deep;
pub use path_params::check_key_path_params;
pub use request_body::check_request_body_additional_properties;
pub use schema_declarations::check_key_schemas_semantic_type;

/// The four key convention rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKind {
    /// `*Key` path parameters must use a `$ref` or a marked inline string.
    KeyPathParams,
    /// Nested `[a-z]*Key` properties must not be inline strings.
    KeyPropertiesDeep,
    /// `components.schemas.*Key` must declare a semantic marker.
    KeySchemasSemanticType,
    /// Request body `$ref` targets must declare `additionalProperties`.
    RequestBodyAdditionalProperties,
}

impl RuleKind {
    /// Every rule, in reporting order.
    pub const ALL: [RuleKind; 4] = [
        RuleKind::KeyPathParams,
        RuleKind::KeyPropertiesDeep,
        RuleKind::KeySchemasSemanticType,
        RuleKind::RequestBodyAdditionalProperties,
    ];

    /// Stable identifier used in rulesets and reports.
    pub fn id(self) -> &'static str {
        match self {
            Self::KeyPathParams => "key-path-params",
            Self::KeyPropertiesDeep => "key-properties-deep",
            Self::KeySchemasSemanticType => "key-schemas-semantic-type",
            Self::RequestBodyAdditionalProperties => "request-body-additional-properties",
        }
    }

    /// One-line description for listings.
    pub fn description(self) -> &'static str {
        match self {
            Self::KeyPathParams => {
                "Path parameters named *Key must $ref a semantic key schema or inline a marked string"
            }
            Self::KeyPropertiesDeep => {
                "Properties named [a-z]*Key must $ref a semantic key schema, not inline type: string"
            }
            Self::KeySchemasSemanticType => {
                "Schemas under components.schemas named *Key must declare x-semantic-type"
            }
            Self::RequestBodyAdditionalProperties => {
                "Request body $ref targets must declare additionalProperties explicitly"
            }
        }
    }

    /// Run this rule against one target node.
    pub fn evaluate(
        self,
        target: &Value,
        options: &RuleOptions,
        ctx: &RuleContext<'_>,
    ) -> Vec<Violation> {
        match self {
            Self::KeyPathParams => check_key_path_params(target, options, ctx),
            Self::KeyPropertiesDeep => check_key_properties_deep(target, options, ctx),
            Self::KeySchemasSemanticType => check_key_schemas_semantic_type(target, options, ctx),
            Self::RequestBodyAdditionalProperties => {
                check_request_body_additional_properties(target, options, ctx)
            }
        }
    }

    /// Comma-separated list of every identifier.
    pub fn known_ids() -> String {
        Self::ALL
            .iter()
            .map(|k| k.id())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for RuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.id() == s)
            .ok_or_else(|| format!("unknown rule '{s}' (known rules: {})", Self::known_ids()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_str() {
        for kind in RuleKind::ALL {
            assert_eq!(kind.id().parse::<RuleKind>().unwrap(), kind);
        }
    }

    #[test]
    fn serde_uses_the_same_ids() {
        for kind in RuleKind::ALL {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, kind.id());
        }
    }

    #[test]
    fn unknown_id_lists_known_ones() {
        let err = "key-everything".parse::<RuleKind>().unwrap_err();
        assert!(err.contains("key-path-params"));
        assert!(err.contains("request-body-additional-properties"));
    }
}
