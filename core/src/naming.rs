//! Accessor naming conventions.
//!
//! Getter names use `get` except for bool properties, which use `is`.
//! Properties already named like a predicate (`isActive`, `hasChildren`)
//! keep their own name as the getter.

use convert_case::{Case, Casing};

const PREDICATE_PREFIXES: [&str; 2] = ["is", "has"];

/// `first_name` / `firstName` -> `FirstName`.
pub fn as_pascal_case(name: &str) -> String {
    name.to_case(Case::Pascal)
}

/// `FirstName` / `first_name` -> `firstName`.
pub fn as_camel_case(name: &str) -> String {
    name.to_case(Case::Camel)
}

/// Getter name for a property.
pub fn getter_name(property: &str, is_bool: bool) -> String {
    if is_bool {
        if is_predicate(property) {
            return property.to_string();
        }
        return format!("is{}", as_pascal_case(property));
    }
    format!("get{}", as_pascal_case(property))
}

/// Setter name for a property.
pub fn setter_name(property: &str) -> String {
    format!("set{}", as_pascal_case(property))
}

/// Short name of a fully-qualified class name (`App\Entity\User` -> `User`).
pub fn short_name(fqcn: &str) -> &str {
    fqcn.rsplit('\\').next().unwrap_or(fqcn)
}

/// Strip whitespace and the leading namespace separator.
pub fn normalize_fqcn(fqcn: &str) -> String {
    fqcn.trim().trim_start_matches('\\').to_string()
}

fn is_predicate(property: &str) -> bool {
    PREDICATE_PREFIXES.iter().any(|prefix| {
        property
            .strip_prefix(prefix)
            .and_then(|rest| rest.chars().next())
            .is_some_and(|c| c.is_uppercase())
    })
}
