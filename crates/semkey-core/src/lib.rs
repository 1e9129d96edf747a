//! # semkey-core — Foundational Types for semkey
//!
//! semkey enforces one naming convention over OpenAPI / JSON Schema
//! documents: every property, path parameter, or component schema whose
//! name ends in `Key` must carry a semantic-type marker, either directly
//! or through a `$ref` to a schema that carries one.
//!
//! This crate holds the pieces every rule shares:
//!
//! - [`JsonPath`] / [`PathSegment`]: the ordered location of a node,
//!   mirroring the document's own nesting.
//! - [`Violation`]: a report unit. An empty list means "nothing found",
//!   never "not checked".
//! - [`ExceptionSet`]: exact-match name exemptions, normalized from a
//!   whitespace-delimited string, an array, or a truthy-valued mapping.
//! - [`SchemaNode`]: a tagged view over a JSON value: `$ref`, composite,
//!   inline, or not a schema at all.
//! - [`naming`] and [`marker`]: the two `Key` name patterns and the
//!   `x-semantic-type` / `x-semantic-key` marker test.
//! - [`document`]: loading a JSON or YAML document into a `serde_json::Value`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `semkey-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Nothing here mutates a document; every type is a transient view or a
//!   freshly built value.

pub mod document;
pub mod error;
pub mod exceptions;
pub mod marker;
pub mod naming;
pub mod node;
pub mod path;
pub mod violation;

// Re-export primary types for ergonomic imports.
pub use document::{load_document, parse_document, DocumentFormat};
pub use error::DocumentError;
pub use exceptions::ExceptionSet;
pub use marker::{has_marker, LEGACY_MARKER, SEMANTIC_MARKER};
pub use naming::{is_key_suffix, is_lower_key_property};
pub use node::{RefNode, SchemaNode, SchemaObject, COMPOSITION_KEYWORDS};
pub use path::{JsonPath, PathSegment};
pub use violation::Violation;
