// codegen/src/utils.rs

use std::sync::OnceLock;

use regex::Regex;

/// Reserved words that cannot appear as bare property names in generated code.
///
/// TypeScript accepts most reserved words as property keys; these are kept
/// quoted so the output reads unambiguously.
const RESERVED_PROPERTY_NAMES: &[&str] = &["__proto__", "constructor"];

fn identifier_regex() -> &'static Regex {
    static IDENTIFIER: OnceLock<Regex> = OnceLock::new();
    IDENTIFIER.get_or_init(|| {
        Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern is valid")
    })
}

/// Whether `name` is a plain identifier in the target language
pub fn is_identifier(name: &str) -> bool { identifier_regex().is_match(name) }

/// Render `name` as an object/interface property key.
///
/// Plain identifiers are emitted as-is; anything else becomes a quoted string.
///
/// # Examples
/// ```
/// use typegen_codegen::utils::property_key;
/// assert_eq!(property_key("createdAt"), "createdAt");
/// assert_eq!(property_key("first-name"), "\"first-name\"");
/// ```
pub fn property_key(name: &str) -> String {
    if is_identifier(name) && !RESERVED_PROPERTY_NAMES.contains(&name) {
        name.to_string()
    } else {
        string_literal(name)
    }
}

/// Render `value` as a double-quoted string literal
pub fn string_literal(value: &str) -> String {
    // JSON string syntax is a subset of the target's string literal syntax
    serde_json::Value::String(value.to_string()).to_string()
}

/// Apply field modifiers to a base type.
///
/// Nullability is applied first, then the sequence modifier wraps the
/// (possibly nullable) element type.
///
/// # Examples
/// ```
/// use typegen_codegen::utils::field_type_expr;
/// assert_eq!(field_type_expr("string", true, false), "string");
/// assert_eq!(field_type_expr("string", false, false), "string | null");
/// assert_eq!(field_type_expr("string", true, true), "string[]");
/// assert_eq!(field_type_expr("string", false, true), "(string | null)[]");
/// ```
pub fn field_type_expr(base: &str, required: bool, list: bool) -> String {
    match (required, list) {
        (true, false) => base.to_string(),
        (false, false) => format!("{base} | null"),
        (true, true) => format!("{base}[]"),
        (false, true) => format!("({base} | null)[]"),
    }
}
