#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Core Type System for the Declaration Emitter
//!
//! This crate defines how source scalar type names from the data model are
//! mapped onto target-language type names. The mapping itself is a plain
//! lookup table ([`TypeMap`]); target languages plug in through the
//! [`TypeAdapter`] trait so the emitter stays independent of any one language.

/// Target-language type adapters.
///
/// This module contains implementations of the `TypeAdapter` trait. Each
/// adapter owns a type map and knows how target types are named.
pub mod adapters;
/// Type adapter trait for target-language type mapping.
pub mod type_adapter;
/// Source-to-target scalar type lookup table.
pub mod type_map;

pub use adapters::TypeScriptAdapter;
pub use type_adapter::TypeAdapter;
pub use type_map::{TypeMap, UnmappedTypeError};
