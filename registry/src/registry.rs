//! The MemberRegistry - member lookup over one class model.

use crate::RegistryBuilder;
use maker_parser::{ClassModel, MemberKind, MethodModel, PropertyModel};
use std::collections::{HashMap, HashSet};

/// Member lookup for one class model.
/// It borrows the model and is rebuilt after every edit.
#[derive(Debug)]
pub struct MemberRegistry<'m> {
    model: &'m ClassModel,
    /// Single-name properties by name, with their member index.
    properties: HashMap<String, usize>,
    /// Every declared property name (grouped and promoted included).
    declared: HashSet<String>,
    /// Methods by lowercase name.
    methods: HashMap<String, usize>,
    /// Constructor parameter names in order.
    constructor_params: Vec<String>,
    /// `(property, parameter)` pairs assigned in the constructor body.
    assignments: HashSet<(String, String)>,
    /// Member index where the next property goes.
    property_slot: usize,
    first_method: Option<usize>,
}

impl<'m> MemberRegistry<'m> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        model: &'m ClassModel,
        properties: HashMap<String, usize>,
        declared: HashSet<String>,
        methods: HashMap<String, usize>,
        constructor_params: Vec<String>,
        assignments: HashSet<(String, String)>,
        property_slot: usize,
        first_method: Option<usize>,
    ) -> Self {
        Self {
            model,
            properties,
            declared,
            methods,
            constructor_params,
            assignments,
            property_slot,
            first_method,
        }
    }

    /// Index a class model.
    pub fn from_model(model: &'m ClassModel) -> Self {
        RegistryBuilder::new(model).index_members().build()
    }

    // ==================== Property Lookups ====================

    /// True if the class declares the property in any form.
    pub fn has_property(&self, name: &str) -> bool {
        self.declared.contains(name)
    }

    /// Get a single-name property declaration.
    pub fn property(&self, name: &str) -> Option<&'m PropertyModel> {
        let index = *self.properties.get(name)?;
        match &self.model.members[index].kind {
            MemberKind::Property(property) => Some(property),
            _ => None,
        }
    }

    /// Member index of a single-name property.
    pub fn property_index(&self, name: &str) -> Option<usize> {
        self.properties.get(name).copied()
    }

    pub fn property_count(&self) -> usize {
        self.declared.len()
    }

    // ==================== Method Lookups ====================

    /// True if a method with this name exists, ignoring ASCII case.
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(&name.to_ascii_lowercase())
    }

    pub fn method(&self, name: &str) -> Option<&'m MethodModel> {
        let index = self.method_index(name)?;
        match &self.model.members[index].kind {
            MemberKind::Method(method) => Some(method),
            _ => None,
        }
    }

    pub fn method_index(&self, name: &str) -> Option<usize> {
        self.methods.get(&name.to_ascii_lowercase()).copied()
    }

    // ==================== Constructor Lookups ====================

    pub fn has_constructor(&self) -> bool {
        self.model.constructor().is_some()
    }

    pub fn has_constructor_param(&self, name: &str) -> bool {
        self.constructor_params.iter().any(|p| p == name)
    }

    /// True if the constructor body assigns `$this->name = $name;`, or the
    /// parameter is promoted.
    pub fn has_constructor_assignment(&self, name: &str) -> bool {
        self.assignments
            .contains(&(name.to_string(), name.to_string()))
    }

    pub fn constructor_params(&self) -> &[String] {
        &self.constructor_params
    }

    // ==================== Insertion Points ====================

    /// Member index for a new property: after the last property, or after
    /// the constants and trait uses heading the body.
    pub fn property_slot(&self) -> usize {
        self.property_slot
    }

    /// Member index for a new constructor: before the first method.
    pub fn constructor_slot(&self) -> usize {
        self.first_method.unwrap_or(self.model.members.len())
    }
}
