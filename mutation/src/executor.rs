//! Class manipulator - coordinates edit operations.
//!
//! The manipulator delegates to specialized operation modules in `ops/`:
//! - `ops/property.rs` - property insertion
//! - `ops/accessor.rs` - getters, setters and fluent mutators
//! - `ops/constructor.rs` - constructor parameters and assignments
//! - `ops/import.rs` - use imports
//! - `ops/annotation.rs` - doc-comment annotation lines

use maker_core::{Literal, TypeRef, ValueType};
use maker_parser::ClassModel;
use maker_registry::MemberRegistry;

use crate::config::ManipulatorConfig;
use crate::error::MutationResult;
use crate::ops;
use crate::result::EditOutcome;

/// Parse class source into a model ready for editing.
pub fn load(source: &str) -> MutationResult<ClassModel> {
    Ok(maker_parser::parse(source)?)
}

/// Edits one class model in place.
pub struct ClassManipulator<'c> {
    class: &'c mut ClassModel,
    config: ManipulatorConfig,
}

impl<'c> ClassManipulator<'c> {
    /// Create a new manipulator.
    pub fn new(class: &'c mut ClassModel, config: ManipulatorConfig) -> Self {
        Self { class, config }
    }

    pub fn config(&self) -> &ManipulatorConfig {
        &self.config
    }

    /// The class being edited.
    pub fn class(&self) -> &ClassModel {
        self.class
    }

    /// A registry over the current state of the class.
    pub fn registry(&self) -> MemberRegistry<'_> {
        MemberRegistry::from_model(self.class)
    }

    /// Add a property unless one with that name exists.
    pub fn add_property(
        &mut self,
        name: &str,
        ty: Option<TypeRef>,
        default: Option<Literal>,
        doc_lines: &[String],
    ) -> MutationResult<EditOutcome> {
        ops::add_property(self.class, &self.config, name, ty, default, doc_lines)
    }

    /// Add the getter for a property.
    pub fn add_getter(
        &mut self,
        property: &str,
        ty: Option<ValueType>,
        nullable: bool,
    ) -> MutationResult<EditOutcome> {
        ops::add_getter(self.class, &self.config, property, ty, nullable)
    }

    /// Add the setter for a property; `fluent` only applies when fluent
    /// mutators are enabled.
    pub fn add_setter(
        &mut self,
        property: &str,
        ty: Option<ValueType>,
        nullable: bool,
        fluent: bool,
    ) -> MutationResult<EditOutcome> {
        ops::add_setter(self.class, &self.config, property, ty, nullable, fluent)
    }

    /// Add a constructor parameter, creating the constructor if needed.
    pub fn add_constructor_parameter(
        &mut self,
        name: &str,
        ty: Option<TypeRef>,
        promote: bool,
    ) -> MutationResult<EditOutcome> {
        ops::add_constructor_parameter(self.class, name, ty, promote)
    }

    /// Import a class; returns the short name to use in the body.
    pub fn add_use_import(&mut self, fqcn: &str) -> MutationResult<String> {
        ops::add_use_import(self.class, fqcn, None)
    }

    /// Import a class under an alias.
    pub fn add_use_import_as(&mut self, fqcn: &str, alias: &str) -> MutationResult<String> {
        ops::add_use_import(self.class, fqcn, Some(alias))
    }

    /// Append an annotation line to a property's doc comment.
    pub fn add_doc_comment_line(
        &mut self,
        property: &str,
        annotation: &str,
        options: &[(String, Literal)],
    ) -> MutationResult<EditOutcome> {
        ops::add_doc_comment_line(self.class, &self.config, property, annotation, options)
    }

    /// Render the class.
    pub fn source_code(&self) -> String {
        maker_printer::render(self.class)
    }
}
