//! # semkey-rules — Key Convention Rule Evaluators
//!
//! Four independent evaluators, each answering one governance question
//! about a node a host engine hands it:
//!
//! | Rule | Question |
//! |---|---|
//! | [`RuleKind::KeyPathParams`] | Does a `*Key` path parameter use a `$ref` or a marked inline string schema? |
//! | [`RuleKind::KeyPropertiesDeep`] | Is any nested `[a-z]*Key` property an inline `type: string` instead of a `$ref`? |
//! | [`RuleKind::KeySchemasSemanticType`] | Does every `components.schemas.*Key` declare a semantic marker? |
//! | [`RuleKind::RequestBodyAdditionalProperties`] | Does a request body's referenced schema declare `additionalProperties`? |
//!
//! ## Host Contract
//!
//! Every evaluator is a free function of `(target, options, context)` and
//! returns freshly built [`Violation`]s. An empty vector means "no result":
//! either nothing was wrong or the rule did not apply. Malformed input never
//! raises an error, so one bad node cannot abort a review of a whole
//! document.
//!
//! Evaluators hold no state between calls and only read their inputs, so a
//! host may run them over many nodes or documents in any order, on any
//! number of threads.
//!
//! ## Shared Machinery
//!
//! - [`walker`]: recursive descent through `properties`, `allOf`, `oneOf`,
//!   `anyOf` and `items`, stopping at every `$ref`.
//! - [`resolver`]: lookup of `#/components/schemas/<Name>` in the resolved
//!   view or the raw document.
//! - [`ruleset`]: per-rule severity and options loaded from YAML.
//!
//! [`Violation`]: semkey_core::Violation

pub mod context;
pub mod error;
pub mod resolver;
pub mod rules;
pub mod ruleset;
pub mod walker;

// Re-export primary types for ergonomic imports.
pub use context::{RuleContext, RuleOptions};
pub use error::ConfigError;
pub use resolver::{parse_local_schema_ref, resolve_local_schema};
pub use rules::{
    check_key_path_params, check_key_properties_deep, check_key_schemas_semantic_type,
    check_request_body_additional_properties, RuleKind,
};
pub use ruleset::{RuleConfig, Ruleset, Severity};
pub use walker::walk_key_properties;
