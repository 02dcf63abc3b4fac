//! Pipeline orchestration for the main entry points.
//!
//! A run renders every declaration, formats the result, and only then
//! touches the filesystem. Any failure before the write leaves the output
//! directory exactly as it was.

use std::path::{Path, PathBuf};

use codegen::{write_generated, CodeGenerator, TypeDeclarationGenerator};
use ir::{DataModel, Document};
use tracing::{debug, info};

use crate::generation_context::GenerationContext;
use crate::{PipelineError, Result};

/// Summary of a completed generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Path of the written file
    pub output_path: PathBuf,
    /// Number of interfaces emitted
    pub models: usize,
    /// Number of enums emitted
    pub enums: usize,
    /// Number of interface members emitted across all models
    pub fields: usize,
}

impl GenerationReport {
    fn new(output_path: PathBuf, data_model: &DataModel) -> Self {
        Self {
            output_path,
            models: data_model.models().len(),
            enums: data_model.enums().len(),
            fields: data_model.models().iter().map(|m| m.emittable_fields().count()).sum(),
        }
    }
}

/// Load a data model document from a JSON file
pub fn load_document(path: &Path) -> Result<Document> {
    Document::from_file(path)
        .map_err(|source| PipelineError::Input { path: path.to_path_buf(), source })
}

/// Generate the declarations file for `document` into the context's output directory.
///
/// Stages run strictly in order: render, format, write. Whitespace cleanup
/// happens on the rendered text before formatting; the formatter's output is
/// written unchanged. Errors surface unchanged and nothing is retried.
///
/// # Returns
///
/// Returns a [`GenerationReport`] describing what was written
pub fn generate(document: &Document, ctx: &GenerationContext) -> Result<GenerationReport> {
    let data_model = &document.datamodel;
    info!(
        models = data_model.models().len(),
        enums = data_model.enums().len(),
        "generating {} declarations",
        ctx.adapter.target_name()
    );

    let files = TypeDeclarationGenerator::new(ctx.adapter.as_ref()).generate(data_model)?;
    debug!(bytes = files.iter().map(|(_, src)| src.len()).sum::<usize>(), "rendered declarations");

    let mut formatted = Vec::with_capacity(files.len());
    for (name, src) in files {
        formatted.push((name, ctx.formatter.format(&src)?));
    }
    debug!(formatter = ctx.formatter.name(), "formatted declarations");

    let output_path = write_generated(ctx.output_dir(), &formatted)?
        .into_iter()
        .next()
        .ok_or_else(|| PipelineError::Message("no declarations file was generated".to_string()))?;
    info!(path = %output_path.display(), "wrote declarations");

    Ok(GenerationReport::new(output_path, data_model))
}

/// Load the document at `input` and run [`generate`] on it
pub fn generate_from_file(input: &Path, ctx: &GenerationContext) -> Result<GenerationReport> {
    let document = load_document(input)?;
    generate(&document, ctx)
}
