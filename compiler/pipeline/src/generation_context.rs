//! Generation context for the pipeline.
//!
//! This module provides the context that carries everything one run needs
//! besides the data model itself: where output goes, how field types are
//! mapped and how the generated source is formatted.

use std::path::{Path, PathBuf};

use codegen::{Formatter, PassthroughFormatter, PrettierFormatter};
use config::Config;
use types::{TypeAdapter, TypeMap, TypeScriptAdapter};

use crate::PipelineError;

/// Context containing all settings needed for a generation run
pub struct GenerationContext {
    /// Directory that receives the generated file
    pub output_dir: PathBuf,
    /// Maps declared field types to target type expressions
    pub adapter: Box<dyn TypeAdapter>,
    /// Formatter applied to the generated source before writing
    pub formatter: Box<dyn Formatter>,
}

impl GenerationContext {
    /// Create a new builder for GenerationContext
    pub fn builder() -> GenerationContextBuilder { GenerationContextBuilder::default() }

    /// Build a context from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self, PipelineError> {
        let type_map = TypeMap::typescript()
            .with_overrides(config.type_map.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        let mut builder = Self::builder()
            .output_dir(config.generator.output_directory.clone())
            .adapter(Box::new(TypeScriptAdapter::with_type_map(type_map)));
        if config.formatter.enabled {
            builder = builder.formatter(Box::new(PrettierFormatter::new(&config.formatter.command)));
        } else {
            builder = builder.formatter(Box::new(PassthroughFormatter));
        }
        builder.build()
    }

    /// The directory receiving output
    pub fn output_dir(&self) -> &Path { &self.output_dir }
}

/// Builder for GenerationContext
#[derive(Default)]
pub struct GenerationContextBuilder {
    /// Directory that receives the generated file
    output_dir: Option<PathBuf>,
    /// Field type adapter; defaults to TypeScript with the standard mappings
    adapter: Option<Box<dyn TypeAdapter>>,
    /// Source formatter; defaults to `prettier`
    formatter: Option<Box<dyn Formatter>>,
}

impl GenerationContextBuilder {
    /// Set the output directory
    pub fn output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = Some(dir);
        self
    }

    /// Set the type adapter
    pub fn adapter(mut self, adapter: Box<dyn TypeAdapter>) -> Self {
        self.adapter = Some(adapter);
        self
    }

    /// Set the formatter
    pub fn formatter(mut self, formatter: Box<dyn Formatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Build the GenerationContext
    pub fn build(self) -> Result<GenerationContext, PipelineError> {
        Ok(GenerationContext {
            output_dir: self
                .output_dir
                .ok_or_else(|| PipelineError::Message("output_dir is required".to_string()))?,
            adapter: self.adapter.unwrap_or_else(|| Box::new(TypeScriptAdapter::new())),
            formatter: self.formatter.unwrap_or_else(|| Box::new(PrettierFormatter::default())),
        })
    }
}
