//! JSON field manifests.
//!
//! A manifest is either a bare array of field mappings or an object with a
//! `fields` array (and optionally the `class` to generate).

use maker_core::Literal;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{CliError, CliResult};
use crate::field::FieldMapping;

/// Parsed manifest.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Manifest {
    Fields(Vec<FieldMapping>),
    Document {
        #[serde(default)]
        class: Option<String>,
        fields: Vec<FieldMapping>,
    },
}

impl Manifest {
    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
        Self::from_json(&text).map_err(|e| CliError::manifest(path, e))
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn fields(&self) -> &[FieldMapping] {
        match self {
            Manifest::Fields(fields) | Manifest::Document { fields, .. } => fields,
        }
    }

    /// Class name given in the manifest, if any.
    pub fn class(&self) -> Option<&str> {
        match self {
            Manifest::Document { class, .. } => class.as_deref(),
            Manifest::Fields(_) => None,
        }
    }
}

/// Convert a JSON value into a literal.
pub fn to_literal(value: &serde_json::Value) -> Literal {
    use serde_json::Value;

    match value {
        Value::Null => Literal::Null,
        Value::Bool(b) => Literal::Bool(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Literal::Int(i),
            None => Literal::Float(n.as_f64().unwrap_or_default()),
        },
        Value::String(s) => Literal::String(s.clone()),
        Value::Array(items) => Literal::List(items.iter().map(to_literal).collect()),
        Value::Object(map) => Literal::Map(
            map.iter()
                .map(|(k, v)| (k.clone(), to_literal(v)))
                .collect(),
        ),
    }
}
