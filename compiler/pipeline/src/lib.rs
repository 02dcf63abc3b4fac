#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! High-level pipeline that turns a data model document into a formatted
//! TypeScript declarations file.
//!
//! ## Module Organization
//!
//! - `generation_context` - Output directory, type adapter and formatter for a run
//! - `orchestration` - Main pipeline entry points (`generate`, `generate_from_file`)

use std::path::PathBuf;

use thiserror::Error;

/// Convenient result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur while running the generation pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Generic message-based error.
    #[error("{0}")]
    Message(String),
    /// The data model document could not be read or parsed.
    #[error("Failed to load data model from {}: {source}", path.display())]
    Input {
        /// Document path
        path: PathBuf,
        /// Underlying read or parse error
        #[source]
        source: ir::IrError,
    },
    /// Error propagated from the codegen crate.
    #[error(transparent)]
    Codegen(#[from] codegen::CodegenError),
    /// Error propagated from the config crate.
    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

impl From<codegen::FormatError> for PipelineError {
    fn from(err: codegen::FormatError) -> Self { PipelineError::Codegen(err.into()) }
}

// Module declarations
pub mod generation_context;
pub mod orchestration;

pub use generation_context::{GenerationContext, GenerationContextBuilder};
pub use orchestration::{generate, generate_from_file, load_document, GenerationReport};
