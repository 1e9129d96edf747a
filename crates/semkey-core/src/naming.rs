//! # Key Naming Conventions
//!
//! Two patterns decide whether a name denotes a key identifier. They are
//! separate contracts and must not be merged:
//!
//! - [`is_key_suffix`]: the name ends with `Key`. Used for path parameter
//!   names and `components.schemas` entry names, where schema names are
//!   conventionally PascalCase (`OrderKey`).
//! - [`is_lower_key_property`]: the name starts with a lowercase letter and
//!   ends with `Key`. Used for property names found during deep traversal,
//!   so `PrimaryKey`-style type names nested as properties are not flagged.

const KEY_SUFFIX: &str = "Key";

/// True iff `name` ends with the literal characters `Key`.
pub fn is_key_suffix(name: &str) -> bool {
    name.ends_with(KEY_SUFFIX)
}

/// True iff `name` starts with a lowercase ASCII letter and ends with `Key`.
///
/// The leading character and the suffix may not overlap: `"Key"` and
/// `"key"` do not qualify, `"aKey"` does.
pub fn is_lower_key_property(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => chars.as_str().ends_with(KEY_SUFFIX),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_pattern_ignores_case_of_first_char() {
        assert!(is_key_suffix("orderKey"));
        assert!(is_key_suffix("OrderKey"));
        assert!(is_key_suffix("Key"));
        assert!(!is_key_suffix("orderkey"));
        assert!(!is_key_suffix("orderKeys"));
        assert!(!is_key_suffix(""));
    }

    #[test]
    fn lower_pattern_requires_lowercase_start() {
        assert!(is_lower_key_property("userKey"));
        assert!(is_lower_key_property("aKey"));
        assert!(!is_lower_key_property("UserKey"));
        assert!(!is_lower_key_property("Key"));
        assert!(!is_lower_key_property("key"));
        assert!(!is_lower_key_property("_userKey"));
        assert!(!is_lower_key_property("userKeyId"));
        assert!(!is_lower_key_property(""));
    }
}
