//! This module contains the declaration generators.
//!
//! Each generator turns one kind of data model entity into target-language
//! source text. Generators are pure: they return text and never touch the
//! filesystem.

/// JSDoc generator: **`doc_comment`**
///
/// Produces JSDoc blocks from the documentation attached to models, fields
/// and enums.
pub mod doc_comment;

/// Enum value table + union type generator
pub mod enum_decl;
pub use enum_decl::translate_enum;

/// Interface generator for models
pub mod model;
pub use model::translate_model;
