#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Code generation for data model type declarations.
//!
//! This crate turns a [`DataModel`] into target-language declaration text.
//! It focuses solely on code generation: translating models and enums,
//! assembling them into one source file, formatting that source through a
//! [`Formatter`], and persisting the result.
//!
//! Loading the data model and deciding where output goes reside in the
//! pipeline crate.

pub mod formatter;
pub mod generators;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use ir::DataModel;
use thiserror::Error;
use types::{TypeAdapter, UnmappedTypeError};

pub use crate::formatter::{FormatError, Formatter, PassthroughFormatter, PrettierFormatter};
pub use crate::generators::{translate_enum, translate_model};

/// Error type for code generation operations in this crate.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// A scalar field declares a type missing from the type map.
    #[error("Cannot translate field `{model}.{field}`: {source}")]
    UnmappedType {
        /// Model declaring the field
        model: String,
        /// Field name
        field: String,
        /// The lookup failure
        #[source]
        source: UnmappedTypeError,
    },
    /// The formatter failed on the generated source.
    #[error(transparent)]
    Format(#[from] FormatError),
    /// The output directory could not be created.
    #[error("Failed to create output directory {}: {source}", path.display())]
    DirectoryCreation {
        /// Directory that was being created
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// A generated file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// File that was being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Convenient result type for codegen functions in this crate.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Render every declaration of a data model into one source text.
///
/// Models come first, then enums, each group in input order. Fragments are
/// separated by a single blank line. Translation errors abort before any
/// output is produced.
pub fn render_declarations(data_model: &DataModel, adapter: &dyn TypeAdapter) -> Result<String> {
    let mut fragments = Vec::with_capacity(data_model.models().len() + data_model.enums().len());

    for model in data_model.models() {
        fragments.push(translate_model(model, adapter)?);
    }
    for enum_type in data_model.enums() {
        fragments.push(translate_enum(enum_type));
    }

    Ok(fragments.join("\n"))
}

/// Defines the core interface for generating source files from a data model.
/// Implementors produce a set of `(filename, source)` pairs.
pub trait CodeGenerator {
    /// Generate source files for the provided data model.
    fn generate(&self, data_model: &DataModel) -> Result<Vec<(String, String)>>;
}

/// Emits all type declarations of a data model into a single `index` module.
pub struct TypeDeclarationGenerator<'a> {
    adapter: &'a dyn TypeAdapter,
}

impl<'a> TypeDeclarationGenerator<'a> {
    /// Create a generator mapping field types through `adapter`
    pub fn new(adapter: &'a dyn TypeAdapter) -> Self { Self { adapter } }

    /// Name of the emitted file, e.g. `index.ts`
    pub fn file_name(&self) -> String { format!("index.{}", self.adapter.file_extension()) }
}

impl CodeGenerator for TypeDeclarationGenerator<'_> {
    fn generate(&self, data_model: &DataModel) -> Result<Vec<(String, String)>> {
        let source = render_declarations(data_model, self.adapter)?;
        Ok(vec![(self.file_name(), clean_generated_source(&source))])
    }
}

/// Trim trailing whitespace from each line and drop trailing blank lines.
/// Always ensures the returned string ends with a single newline when not empty.
fn clean_generated_source(src: &str) -> String {
    let mut lines: Vec<&str> = src.lines().map(str::trim_end).collect();

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    if lines.is_empty() {
        String::new()
    } else {
        format!("{}\n", lines.join("\n"))
    }
}

/// Persist a list of generated source files under the given output directory.
///
/// The directory (and any missing parents) is created first. Each file is
/// written to a temporary file in the same directory and then renamed over
/// the target, so readers never observe a partially written file and an
/// existing file is replaced whole. Contents are written byte for byte.
/// Returns the paths written.
pub fn write_generated<P: AsRef<Path>>(
    out_dir: P,
    files: &[(String, String)],
) -> Result<Vec<PathBuf>> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir).map_err(|source| CodegenError::DirectoryCreation {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(files.len());
    for (name, src) in files {
        let path = out_dir.join(name);
        write_atomic(out_dir, &path, src.as_bytes())
            .map_err(|source| CodegenError::Write { path: path.clone(), source })?;
        tracing::debug!(path = %path.display(), bytes = src.len(), "wrote generated file");
        written.push(path);
    }
    Ok(written)
}

/// Write a single declarations file, replacing any previous version.
pub fn write_declarations(out_dir: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
    let mut written = write_generated(out_dir, &[(file_name.to_string(), content.to_string())])?;
    Ok(written.remove(0))
}

fn write_atomic(dir: &Path, path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}


/// Sub-crate: **`utils`**
///
/// Identifier, literal and type-expression helpers shared by the generators.
pub mod utils;
