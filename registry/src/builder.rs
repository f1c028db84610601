//! RegistryBuilder for indexing the members of a class model.

use crate::MemberRegistry;
use maker_parser::{ClassModel, MemberKind, MethodModel};
use regex_lite::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// `$this->prop = $param;` inside a constructor body.
const ASSIGNMENT_PATTERN: &str =
    r"\$this->([A-Za-z_][A-Za-z0-9_]*)\s*=\s*\$([A-Za-z_][A-Za-z0-9_]*)\s*;";

fn assignment_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(ASSIGNMENT_PATTERN).expect("assignment pattern is valid"))
}

/// Builder for a `MemberRegistry` over one class model.
#[derive(Debug)]
pub struct RegistryBuilder<'m> {
    model: &'m ClassModel,
    properties: HashMap<String, usize>,
    declared: HashSet<String>,
    methods: HashMap<String, usize>,
    constructor_params: Vec<String>,
    assignments: HashSet<(String, String)>,
    last_property: Option<usize>,
    first_method: Option<usize>,
}

impl<'m> RegistryBuilder<'m> {
    pub fn new(model: &'m ClassModel) -> Self {
        Self {
            model,
            properties: HashMap::new(),
            declared: HashSet::new(),
            methods: HashMap::new(),
            constructor_params: Vec::new(),
            assignments: HashSet::new(),
            last_property: None,
            first_method: None,
        }
    }

    /// Walk every member of the model.
    pub fn index_members(mut self) -> Self {
        let model = self.model;
        for (index, member) in model.members.iter().enumerate() {
            match &member.kind {
                MemberKind::Property(property) => {
                    self.properties.insert(property.name.clone(), index);
                    self.declared.insert(property.name.clone());
                    self.last_property = Some(index);
                }
                MemberKind::Opaque(opaque) if !opaque.declared_properties.is_empty() => {
                    self.declared
                        .extend(opaque.declared_properties.iter().cloned());
                    self.last_property = Some(index);
                }
                MemberKind::Opaque(_) => {}
                MemberKind::Method(method) => {
                    self.methods
                        .entry(method.name.to_ascii_lowercase())
                        .or_insert(index);
                    self.first_method.get_or_insert(index);
                    if method.is_constructor() {
                        self.index_constructor(method);
                    }
                }
            }
        }
        self
    }

    fn index_constructor(&mut self, method: &MethodModel) {
        for param in &method.params {
            self.constructor_params.push(param.name.clone());
            // a promoted parameter is its own assignment
            if param.promotion.is_some() {
                self.declared.insert(param.name.clone());
                self.assignments
                    .insert((param.name.clone(), param.name.clone()));
            }
        }

        let body = method.body_text();
        for caps in assignment_pattern().captures_iter(&body) {
            self.assignments
                .insert((caps[1].to_string(), caps[2].to_string()));
        }
    }

    /// Build the registry.
    pub fn build(self) -> MemberRegistry<'m> {
        let property_slot = match self.last_property {
            Some(index) => index + 1,
            None => leading_opaque_count(self.model),
        };
        MemberRegistry::new(
            self.model,
            self.properties,
            self.declared,
            self.methods,
            self.constructor_params,
            self.assignments,
            property_slot,
            self.first_method,
        )
    }
}

/// Constants and trait uses at the top of the body.
fn leading_opaque_count(model: &ClassModel) -> usize {
    model
        .members
        .iter()
        .take_while(|m| matches!(m.kind, MemberKind::Opaque(_)))
        .count()
}
