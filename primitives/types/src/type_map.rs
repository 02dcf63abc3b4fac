//! Scalar type lookup table
//!
//! A [`TypeMap`] maps source scalar type names (as declared in the data model)
//! to target-language type names. Lookups of names missing from the table fail
//! with [`UnmappedTypeError`] instead of falling back to a placeholder type, so
//! schema drift surfaces when generating rather than when compiling the output.

use std::collections::BTreeMap;

use thiserror::Error;

/// Default source → TypeScript scalar mappings.
///
/// Ordered the way the host documents its scalar types: text, flags, numbers,
/// then temporal and opaque values.
pub const DEFAULT_TYPESCRIPT_MAPPINGS: &[(&str, &str)] = &[
    ("String", "string"),
    ("Boolean", "boolean"),
    ("Int", "number"),
    ("Float", "number"),
    ("BigInt", "bigint"),
    ("Decimal", "number"),
    ("DateTime", "Date"),
    ("Json", "unknown"),
    ("Bytes", "Uint8Array"),
];

/// A source scalar type name that has no entry in the type map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unmapped scalar type '{type_name}'. Add it to the [type_map] table of the configuration.")]
pub struct UnmappedTypeError {
    /// The source type name that could not be mapped
    pub type_name: String,
}

impl UnmappedTypeError {
    /// Create an error for the given source type name
    pub fn new(type_name: impl Into<String>) -> Self { Self { type_name: type_name.into() } }
}

/// Lookup table from source scalar type names to target type names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeMap {
    entries: BTreeMap<String, String>,
}

impl TypeMap {
    /// Create an empty type map
    pub fn empty() -> Self { Self::default() }

    /// Create a type map holding the default TypeScript mappings
    pub fn typescript() -> Self {
        DEFAULT_TYPESCRIPT_MAPPINGS
            .iter()
            .map(|(source, target)| (source.to_string(), target.to_string()))
            .collect()
    }

    /// Add or replace a single mapping
    pub fn insert(&mut self, source: impl Into<String>, target: impl Into<String>) {
        self.entries.insert(source.into(), target.into());
    }

    /// Apply overrides on top of the current mappings.
    ///
    /// Entries in `overrides` replace existing mappings with the same source
    /// name and add new source names to the vocabulary.
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (source, target) in overrides {
            self.insert(source, target);
        }
        self
    }

    /// Map a source scalar type name to its target type name
    pub fn map_type(&self, source_type: &str) -> Result<&str, UnmappedTypeError> {
        self.entries
            .get(source_type)
            .map(String::as_str)
            .ok_or_else(|| UnmappedTypeError::new(source_type))
    }

    /// Whether the source type name is part of the vocabulary
    pub fn contains(&self, source_type: &str) -> bool { self.entries.contains_key(source_type) }

    /// Number of mapped source types
    pub fn len(&self) -> usize { self.entries.len() }

    /// Whether the map holds no entries
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Iterate over `(source, target)` pairs in source-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(s, t)| (s.as_str(), t.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TypeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::empty().with_overrides(iter)
    }
}
