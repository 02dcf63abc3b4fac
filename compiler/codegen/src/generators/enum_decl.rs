//! Enum declaration generator
//!
//! The target has no closed enumeration construct that is both enumerable at
//! runtime and exhaustive at compile time, so each enum becomes two exports
//! sharing its name: a frozen value table mapping every value to itself, and
//! a type alias for the union of that table's values.

use ir::EnumType;

use super::doc_comment::format_optional_jsdoc;
use crate::utils::{property_key, string_literal};

/// Translate an enum into a value table and a derived union type.
pub fn translate_enum(enum_type: &EnumType) -> String {
    let name = &enum_type.name;
    let mut out = format_optional_jsdoc(enum_type.documentation.as_deref(), "");

    if enum_type.values.is_empty() {
        out.push_str(&format!("export const {name} = {{}} as const;\n"));
    } else {
        out.push_str(&format!("export const {name} = {{\n"));
        for value in enum_type.value_names() {
            out.push_str(&format!("  {}: {},\n", property_key(value), string_literal(value)));
        }
        out.push_str("} as const;\n");
    }
    out.push_str(&format!("export type {name} = (typeof {name})[keyof typeof {name}];\n"));

    tracing::debug!(enum_name = %name, values = enum_type.values.len(), "translated enum");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_enum() {
        let out = translate_enum(&EnumType::new("Role", ["ADMIN", "MEMBER"]));
        assert_eq!(
            out,
            "export const Role = {\n  ADMIN: \"ADMIN\",\n  MEMBER: \"MEMBER\",\n} as const;\n\
             export type Role = (typeof Role)[keyof typeof Role];\n"
        );
    }

    #[test]
    fn test_translate_enum_keeps_value_order() {
        let out = translate_enum(&EnumType::new("Size", ["SMALL", "LARGE", "MEDIUM"]));
        let small = out.find("SMALL:").expect("SMALL present");
        let large = out.find("LARGE:").expect("LARGE present");
        let medium = out.find("MEDIUM:").expect("MEDIUM present");
        assert!(small < large && large < medium);
    }

    #[test]
    fn test_translate_enum_without_values() {
        let out = translate_enum(&EnumType::new("Nothing", Vec::<String>::new()));
        assert_eq!(
            out,
            "export const Nothing = {} as const;\n\
             export type Nothing = (typeof Nothing)[keyof typeof Nothing];\n"
        );
    }

    #[test]
    fn test_translate_enum_documentation() {
        let mut enum_type = EnumType::new("Role", ["ADMIN"]);
        enum_type.documentation = Some("Access level".to_string());

        let out = translate_enum(&enum_type);
        assert!(out.starts_with("/** Access level */\nexport const Role = {\n"));
    }
}
