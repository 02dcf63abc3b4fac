#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Typegen Intermediate Representation (IR)
//!
//! This crate defines the data-model structures handed to the generator by the
//! host ORM pipeline: models with their fields, and enums with their values.
//! The IR is read-only input for code generation and mirrors the JSON layout of
//! the host's data model document.

pub mod data_model;

// Re-export the main data model types for convenience
pub use data_model::*;
