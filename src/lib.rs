// SPDX-License-Identifier: CC0-1.0

//! Typegen umbrella crate.
//!
//! This crate serves as the workspace root and re-exports the library
//! surface of the member crates, so embedders can depend on a single crate.
//!
//! ```no_run
//! use std::path::{Path, PathBuf};
//!
//! let ctx = typegen::GenerationContext::builder()
//!     .output_dir(PathBuf::from("./types"))
//!     .build()?;
//! let report = typegen::generate_from_file(Path::new("dmmf.json"), &ctx)?;
//! println!("wrote {}", report.output_path.display());
//! # Ok::<(), typegen::PipelineError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![warn(deprecated_in_future)]
#![doc(test(attr(warn(unused))))]

pub use codegen::{
    render_declarations, write_declarations, CodegenError, FormatError, Formatter,
    PassthroughFormatter, PrettierFormatter,
};
pub use config::{Config, ConfigError};
pub use ir::{DataModel, Document, EnumType, EnumValue, Field, FieldKind, Model};
pub use pipeline::{
    generate, generate_from_file, GenerationContext, GenerationReport, PipelineError,
};
pub use types::{TypeAdapter, TypeMap, TypeScriptAdapter, UnmappedTypeError};

/// Miscellaneous metadata about the typegen workspace.
pub mod typegen_meta {
    /// Version string for the umbrella crate, as reported by Cargo.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}
