//! TypeScript type adapter
//!
//! This module implements the `TypeAdapter` trait for TypeScript output. The
//! scalar vocabulary comes from an injected [`TypeMap`], defaulting to
//! [`TypeMap::typescript`].

use crate::type_adapter::TypeAdapter;
use crate::{TypeMap, UnmappedTypeError};

/// TypeScript type adapter implementation.
#[derive(Debug, Clone)]
pub struct TypeScriptAdapter {
    type_map: TypeMap,
}

impl TypeScriptAdapter {
    /// Create an adapter with the default TypeScript mappings
    pub fn new() -> Self { Self { type_map: TypeMap::typescript() } }

    /// Create an adapter using the given type map
    pub fn with_type_map(type_map: TypeMap) -> Self { Self { type_map } }

    /// The type map backing this adapter
    pub fn type_map(&self) -> &TypeMap { &self.type_map }
}

impl Default for TypeScriptAdapter {
    fn default() -> Self { Self::new() }
}

impl TypeAdapter for TypeScriptAdapter {
    fn target_name(&self) -> &str { "typescript" }

    fn file_extension(&self) -> &str { "ts" }

    fn map_scalar(&self, source_type: &str) -> Result<String, UnmappedTypeError> {
        self.type_map.map_type(source_type).map(str::to_string)
    }
}
