//! # Local Reference Resolver
//!
//! Bounded, single-step lookup of `#/components/schemas/<Name>` pointers.
//! Nothing else is followed: external files, URLs, other JSON pointer
//! shapes, and references inside the target are all out of reach. The
//! host's resolved view is preferred when it has one, since that is where
//! load-time dereferencing has already happened.

use serde_json::Value;

use crate::context::RuleContext;

const LOCAL_SCHEMA_PREFIX: &str = "#/components/schemas/";

/// Extract `<Name>` from a `#/components/schemas/<Name>` pointer.
///
/// The name is everything after the prefix and must be non-empty. Any
/// other pointer shape, including external and relative-file refs,
/// yields `None`.
pub fn parse_local_schema_ref(pointer: &str) -> Option<&str> {
    pointer
        .strip_prefix(LOCAL_SCHEMA_PREFIX)
        .filter(|name| !name.is_empty())
}

/// Look up `components.schemas.<name>` under the context's lookup root.
///
/// Returns `None` when the root, `components`, `schemas`, or the entry is
/// missing. The entry is returned as-is, whatever its type.
pub fn resolve_local_schema<'a>(ctx: &RuleContext<'a>, name: &str) -> Option<&'a Value> {
    let Some(root) = ctx.lookup_root() else {
        tracing::debug!(schema = name, "no document root available for reference lookup");
        return None;
    };
    root.get("components")?.get("schemas")?.get(name)
}
