//! Type Adapter Trait for Target-Language Type Mapping
//!
//! This module defines the `TypeAdapter` trait that lets each target language
//! define how data model field types are named in generated code. This keeps
//! the declaration emitter language-agnostic in the same way the data model
//! is host-agnostic.

use ir::{Field, FieldKind};

use crate::UnmappedTypeError;

/// Trait for target-language type adapters.
///
/// An adapter resolves the base type name of a field; modifiers such as
/// nullability and sequences are applied by the emitter.
///
/// ## Usage
///
/// ```rust
/// use types::type_adapter::TypeAdapter;
/// use types::UnmappedTypeError;
///
/// struct ShoutingAdapter;
///
/// impl TypeAdapter for ShoutingAdapter {
///     fn target_name(&self) -> &str { "shouting" }
///
///     fn file_extension(&self) -> &str { "txt" }
///
///     fn map_scalar(&self, source_type: &str) -> Result<String, UnmappedTypeError> {
///         Ok(source_type.to_uppercase())
///     }
/// }
///
/// assert_eq!(ShoutingAdapter.map_scalar("Int").unwrap(), "INT");
/// ```
pub trait TypeAdapter: Send + Sync {
    /// Target language name for logging and debugging purposes.
    fn target_name(&self) -> &str;

    /// Extension of generated files, without the leading dot.
    fn file_extension(&self) -> &str;

    /// Map a source scalar type name to a target type name.
    ///
    /// # Errors
    /// Returns [`UnmappedTypeError`] when the source type is not part of the
    /// adapter's vocabulary.
    fn map_scalar(&self, source_type: &str) -> Result<String, UnmappedTypeError>;

    /// Resolve the base target type of a field.
    ///
    /// Enum-kind fields reuse the enum's own name verbatim; every other field
    /// goes through [`TypeAdapter::map_scalar`].
    fn map_field_type(&self, field: &Field) -> Result<String, UnmappedTypeError> {
        match field.kind {
            FieldKind::Enum => Ok(field.type_.clone()),
            _ => self.map_scalar(&field.type_),
        }
    }
}
