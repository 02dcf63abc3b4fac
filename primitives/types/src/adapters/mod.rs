//! Target-language type adapters
//!
//! This module contains implementations of the `TypeAdapter` trait for the
//! languages the emitter can target.

pub mod typescript;

pub use typescript::TypeScriptAdapter;
