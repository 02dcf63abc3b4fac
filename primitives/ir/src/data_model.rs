//! Typegen Data Model
//!
//! This module defines the structures that represent a host data model
//! description: record types ([`Model`]) made of [`Field`]s, and closed
//! string enumerations ([`EnumType`]).

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while loading a data model document
#[derive(Debug, Error)]
pub enum IrError {
    /// I/O error while reading the document
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The document is not valid JSON or does not match the data model layout
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result alias for IR operations
pub type IrResult<T> = std::result::Result<T, IrError>;

/// Root of a data model document, as emitted by the host generator pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The data model to translate
    pub datamodel: DataModel,
}

/// The set of models and enums described by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataModel {
    /// Record types, in declaration order
    #[serde(default)]
    models: Vec<Model>,
    /// Enumerations, in declaration order
    #[serde(default)]
    enums: Vec<EnumType>,
}

/// A named record type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Model name, unique within the data model
    pub name: String,
    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Documentation comment attached to the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

/// A field of a [`Model`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Field name
    pub name: String,
    /// Declared type name: a scalar type (e.g. "String") or an enum name
    #[serde(rename = "type")]
    pub type_: String,
    /// What the declared type refers to
    pub kind: FieldKind,
    /// Whether a value must be present
    pub is_required: bool,
    /// Whether the field holds a sequence of values
    pub is_list: bool,
    /// Documentation comment attached to the field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

/// Field kinds reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Primitive value (string, number, date, ...)
    Scalar,
    /// Reference to an [`EnumType`]
    Enum,
    /// Relation to another model
    Object,
    /// Database type without a client-side representation
    Unsupported,
    /// Any kind not known to this crate
    #[serde(other)]
    Other,
}

/// A closed set of named string values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumType {
    /// Enum name, unique within the data model
    pub name: String,
    /// Values in declaration order
    #[serde(default)]
    pub values: Vec<EnumValue>,
    /// Documentation comment attached to the enum
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

/// A single value of an [`EnumType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    /// Value name
    pub name: String,
    /// Name of the value in the database, when mapped
    #[serde(default)]
    pub db_name: Option<String>,
}

impl Document {
    /// Create a document wrapping the given data model
    pub fn new(datamodel: DataModel) -> Self { Self { datamodel } }

    /// Load a document from a JSON file
    pub fn from_file(path: &Path) -> IrResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse a document from JSON.
    ///
    /// Accepts either the wrapped form `{ "datamodel": { ... } }` or a bare
    /// data model object `{ "models": [...], "enums": [...] }`.
    pub fn from_json(json: &str) -> IrResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        let datamodel = match value {
            Value::Object(mut map) if map.contains_key("datamodel") => {
                map.remove("datamodel").unwrap_or(Value::Null)
            }
            other => other,
        };
        Ok(Self { datamodel: serde_json::from_value(datamodel)? })
    }

    /// Serialize this document as pretty-printed JSON
    pub fn to_json_pretty(&self) -> IrResult<String> { Ok(serde_json::to_string_pretty(self)?) }
}

impl DataModel {
    /// Create a data model from models and enums
    pub fn new(models: Vec<Model>, enums: Vec<EnumType>) -> Self { Self { models, enums } }

    /// All models, in declaration order
    pub fn models(&self) -> &[Model] { &self.models }

    /// All enums, in declaration order
    pub fn enums(&self) -> &[EnumType] { &self.enums }

    /// Find a model by name
    pub fn model(&self, name: &str) -> Option<&Model> { self.models.iter().find(|m| m.name == name) }

    /// Find an enum by name
    pub fn enum_type(&self, name: &str) -> Option<&EnumType> {
        self.enums.iter().find(|e| e.name == name)
    }

    /// Whether the data model declares nothing
    pub fn is_empty(&self) -> bool { self.models.is_empty() && self.enums.is_empty() }
}

impl Model {
    /// Create a model with the given fields
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self { name: name.into(), fields, documentation: None }
    }

    /// Fields that are rendered into the generated declaration
    pub fn emittable_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_emittable())
    }
}

impl Field {
    /// Create a required, singular field
    pub fn new(name: impl Into<String>, type_: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            type_: type_.into(),
            kind,
            is_required: true,
            is_list: false,
            documentation: None,
        }
    }

    /// Shorthand for a scalar field
    pub fn scalar(name: impl Into<String>, type_: impl Into<String>) -> Self {
        Self::new(name, type_, FieldKind::Scalar)
    }

    /// Shorthand for an enum-kind field
    pub fn enumeration(name: impl Into<String>, enum_name: impl Into<String>) -> Self {
        Self::new(name, enum_name, FieldKind::Enum)
    }

    /// Shorthand for a relation field
    pub fn relation(name: impl Into<String>, model_name: impl Into<String>) -> Self {
        Self::new(name, model_name, FieldKind::Object)
    }

    /// Mark the field as not required
    pub fn optional(mut self) -> Self {
        self.is_required = false;
        self
    }

    /// Mark the field as holding a sequence
    pub fn list(mut self) -> Self {
        self.is_list = true;
        self
    }

    /// Attach a documentation comment
    pub fn documented(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    /// Whether this field is a scalar or enum field
    pub fn is_emittable(&self) -> bool { matches!(self.kind, FieldKind::Scalar | FieldKind::Enum) }
}

impl EnumType {
    /// Create an enum from value names
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values
                .into_iter()
                .map(|v| EnumValue { name: v.into(), db_name: None })
                .collect(),
            documentation: None,
        }
    }

    /// Value names, in declaration order
    pub fn value_names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|v| v.name.as_str())
    }
}
