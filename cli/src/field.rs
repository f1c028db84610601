//! Field mappings read from the manifest.

use maker_core::{Literal, ValueType};
use serde::{Deserialize, Serialize};

use crate::manifest::to_literal;

/// One mapped entity field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMapping {
    #[serde(rename = "fieldName", alias = "name")]
    pub name: String,
    /// Doctrine mapping type (`string`, `integer`, `datetime_immutable`, ...).
    #[serde(rename = "type", default)]
    pub doctrine_type: String,
    #[serde(default)]
    pub nullable: bool,
    /// Identifier fields are never copied.
    #[serde(default)]
    pub id: bool,
    /// Class that declares the field when it is inherited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared: Option<String>,
    #[serde(default)]
    pub constraints: Vec<ConstraintSpec>,
}

/// A validation constraint as `(name, options)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintSpec {
    /// Short constraint name (`NotBlank`, `Length`).
    pub name: String,
    #[serde(default)]
    pub options: serde_json::Map<String, serde_json::Value>,
}

impl FieldMapping {
    pub fn new(name: impl Into<String>, doctrine_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doctrine_type: doctrine_type.into(),
            nullable: false,
            id: false,
            declared: None,
            constraints: Vec::new(),
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn constraint(mut self, constraint: ConstraintSpec) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// PHP type of the property, if the Doctrine type has one.
    pub fn value_type(&self) -> Option<ValueType> {
        php_type(&self.doctrine_type)
    }
}

impl ConstraintSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: serde_json::Map::new(),
        }
    }

    pub fn option(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    /// Options as literals, in manifest order.
    pub fn literal_options(&self) -> Vec<(String, Literal)> {
        self.options
            .iter()
            .map(|(k, v)| (k.clone(), to_literal(v)))
            .collect()
    }

    /// Constraint class name without its namespace or alias.
    pub fn short_name(&self) -> &str {
        maker_core::short_name(self.name.trim().trim_start_matches('@'))
    }
}

/// Map a Doctrine mapping type to the PHP type of the property.
pub fn php_type(doctrine_type: &str) -> Option<ValueType> {
    let ty = doctrine_type.trim().to_ascii_lowercase();
    let kind = match ty.as_str() {
        "string" | "text" | "guid" => ValueType::String,
        "integer" | "smallint" => ValueType::Int,
        "bigint" | "decimal" => ValueType::String,
        "float" => ValueType::Float,
        "boolean" => ValueType::Bool,
        "array" | "simple_array" | "json" | "json_array" => ValueType::Array,
        "dateinterval" => ValueType::Class("\\DateInterval".to_string()),
        t if t.starts_with("date") || t.starts_with("time") => {
            ValueType::Class("\\DateTimeInterface".to_string())
        }
        _ => return None,
    };
    Some(kind)
}
