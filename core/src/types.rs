//! Semantic property types.
//!
//! A `TypeRef` is what the manipulator knows about a property's type: the
//! non-null part (`ValueType`) plus nullability. It can be read back from a
//! PHP type hint and spelled as a hint or as a docblock type.

use std::fmt;

/// The non-null part of a property type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueType {
    String,
    Int,
    Float,
    Bool,
    Array,
    Iterable,
    Object,
    Mixed,
    /// A class or interface reference, spelled as written (`\DateTimeInterface`, `Item`).
    Class(String),
    /// Collection of T. Hinted as `array`, documented as `T[]`.
    Collection(Box<ValueType>),
    /// Anything not understood (unions, intersections, `self`, ...), kept verbatim.
    Raw(String),
}

impl ValueType {
    /// Map a single PHP type keyword or class name to a value type.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "string" => ValueType::String,
            "int" => ValueType::Int,
            "float" => ValueType::Float,
            "bool" => ValueType::Bool,
            "array" => ValueType::Array,
            "iterable" => ValueType::Iterable,
            "object" => ValueType::Object,
            "mixed" => ValueType::Mixed,
            _ if is_class_name(name) => ValueType::Class(name.to_string()),
            _ => ValueType::Raw(name.to_string()),
        }
    }

    /// The type as written in a PHP type hint.
    pub fn hint(&self) -> String {
        match self {
            ValueType::String => "string".to_string(),
            ValueType::Int => "int".to_string(),
            ValueType::Float => "float".to_string(),
            ValueType::Bool => "bool".to_string(),
            ValueType::Array | ValueType::Collection(_) => "array".to_string(),
            ValueType::Iterable => "iterable".to_string(),
            ValueType::Object => "object".to_string(),
            ValueType::Mixed => "mixed".to_string(),
            ValueType::Class(name) | ValueType::Raw(name) => name.clone(),
        }
    }

    /// The type as written in a `@var` / `@return` docblock tag.
    pub fn doc(&self) -> String {
        match self {
            ValueType::Collection(inner) => format!("{}[]", inner.doc()),
            other => other.hint(),
        }
    }

    fn is_union(&self) -> bool {
        matches!(self, ValueType::Raw(raw) if raw.contains('|') || raw.contains('&'))
    }
}

/// A nullable semantic type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub kind: ValueType,
    pub nullable: bool,
}

impl TypeRef {
    pub fn new(kind: ValueType) -> Self {
        Self {
            kind,
            nullable: false,
        }
    }

    pub fn nullable(kind: ValueType) -> Self {
        Self {
            kind,
            nullable: true,
        }
    }

    /// Set nullability.
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Read a PHP type hint (`?string`, `int|null`, `\DateTimeInterface`).
    pub fn parse(hint: &str) -> Self {
        let hint = hint.trim();
        if let Some(rest) = hint.strip_prefix('?') {
            return Self::nullable(ValueType::from_name(rest.trim()));
        }

        let parts: Vec<&str> = hint.split('|').map(str::trim).collect();
        let nullable = parts.iter().any(|p| p.eq_ignore_ascii_case("null"));
        let rest: Vec<&str> = parts
            .into_iter()
            .filter(|p| !p.eq_ignore_ascii_case("null"))
            .collect();

        let kind = match rest.as_slice() {
            [] => ValueType::Mixed,
            [single] => ValueType::from_name(single),
            many => ValueType::Raw(many.join("|")),
        };
        Self { kind, nullable }
    }

    /// True when the non-null part is exactly `bool`.
    pub fn is_bool(&self) -> bool {
        self.kind == ValueType::Bool
    }

    /// The type as written in a PHP type hint.
    pub fn hint(&self) -> String {
        let base = self.kind.hint();
        if !self.nullable || self.kind == ValueType::Mixed {
            base
        } else if self.kind.is_union() {
            format!("{}|null", base)
        } else {
            format!("?{}", base)
        }
    }

    /// The type as written in a docblock tag.
    pub fn doc(&self) -> String {
        if self.nullable && self.kind != ValueType::Mixed {
            format!("{}|null", self.kind.doc())
        } else {
            self.kind.doc()
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hint())
    }
}

fn is_class_name(name: &str) -> bool {
    !name.is_empty()
        && !name.eq_ignore_ascii_case("self")
        && !name.eq_ignore_ascii_case("static")
        && name
            .split('\\')
            .enumerate()
            .all(|(i, seg)| (i == 0 && seg.is_empty()) || is_identifier(seg))
}

fn is_identifier(seg: &str) -> bool {
    let mut chars = seg.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}
