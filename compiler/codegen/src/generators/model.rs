//! Model declaration generator
//!
//! Translates a data model [`Model`] into an exported interface declaration.
//! Only scalar and enum fields are rendered; relation and unsupported fields
//! have no counterpart in the generated interface and are skipped.

use ir::Model;
use types::TypeAdapter;

use super::doc_comment::format_optional_jsdoc;
use crate::utils::{field_type_expr, property_key};
use crate::{CodegenError, Result};

const INDENT: &str = "  ";

/// Translate a model into an `export interface` declaration.
///
/// # Errors
/// Returns [`CodegenError::UnmappedType`] if a scalar field declares a type the
/// adapter cannot map.
pub fn translate_model(model: &Model, adapter: &dyn TypeAdapter) -> Result<String> {
    let mut out = format_optional_jsdoc(model.documentation.as_deref(), "");

    let mut body = String::new();
    for field in model.emittable_fields() {
        let base = adapter.map_field_type(field).map_err(|source| CodegenError::UnmappedType {
            model: model.name.clone(),
            field: field.name.clone(),
            source,
        })?;

        body.push_str(&format_optional_jsdoc(field.documentation.as_deref(), INDENT));
        body.push_str(&format!(
            "{INDENT}{}: {};\n",
            property_key(&field.name),
            field_type_expr(&base, field.is_required, field.is_list)
        ));
    }

    if body.is_empty() {
        out.push_str(&format!("export interface {} {{}}\n", model.name));
    } else {
        out.push_str(&format!("export interface {} {{\n{body}}}\n", model.name));
    }

    tracing::debug!(model = %model.name, "translated model");
    Ok(out)
}
