//! Data transfer object generation.
//!
//! Mirrors an entity's mapped fields onto a DTO class: one property per
//! field with its validation constraints copied as annotations, plus the
//! accessors unless they are omitted.

use maker_core::{TypeRef, ValueType};
use maker_mutation::{ClassManipulator, ManipulatorConfig, MutationResult};
use maker_parser::ClassModel;
use maker_printer::annotation_line;
use tracing::{debug, info};

use crate::field::FieldMapping;

/// Namespace of the validator constraints.
pub const ASSERT_NAMESPACE: &str = "Symfony\\Component\\Validator\\Constraints";

/// Alias the constraints are imported under.
pub const ASSERT_ALIAS: &str = "Assert";

/// What a generation run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DtoReport {
    /// Fields that got a new property.
    pub written: Vec<String>,
    /// Fields whose property already existed.
    pub unchanged: Vec<String>,
    /// Identifier fields, never copied.
    pub skipped: Vec<String>,
    /// Whether validation constraints were copied and imported.
    pub assertions_imported: bool,
}

/// Applies field mappings to a class model.
#[derive(Debug, Clone, Copy, Default)]
pub struct DtoGenerator {
    config: ManipulatorConfig,
}

impl DtoGenerator {
    pub fn new(config: ManipulatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ManipulatorConfig {
        &self.config
    }

    /// Add every non-identifier field to the class.
    pub fn generate(
        &self,
        class: &mut ClassModel,
        fields: &[FieldMapping],
    ) -> MutationResult<DtoReport> {
        let mut report = DtoReport::default();
        let mut manipulator = ClassManipulator::new(class, self.config);

        let copies_constraints = self.config.use_annotations
            && fields.iter().any(|f| !f.id && !f.constraints.is_empty());
        let assert_alias = if copies_constraints {
            report.assertions_imported = true;
            Some(manipulator.add_use_import_as(ASSERT_NAMESPACE, ASSERT_ALIAS)?)
        } else {
            None
        };

        for field in fields {
            if field.id {
                debug!(field = %field.name, "identifier field, skipping");
                report.skipped.push(field.name.clone());
                continue;
            }
            if let Some(declared) = &field.declared {
                debug!(field = %field.name, declared = %declared, "inherited field");
            }

            let ty: Option<ValueType> = field.value_type();
            let doc_lines: Vec<String> = match &assert_alias {
                Some(alias) => field
                    .constraints
                    .iter()
                    .map(|c| {
                        annotation_line(
                            &format!("{}\\{}", alias, c.short_name()),
                            &c.literal_options(),
                        )
                    })
                    .collect(),
                None => Vec::new(),
            };

            let property_type = ty
                .clone()
                .map(|kind| TypeRef::new(kind).with_nullable(field.nullable));
            let outcome =
                manipulator.add_property(&field.name, property_type, None, &doc_lines)?;
            manipulator.add_getter(&field.name, ty.clone(), field.nullable)?;
            manipulator.add_setter(&field.name, ty, field.nullable, true)?;

            if outcome.applied() {
                report.written.push(field.name.clone());
            } else {
                report.unchanged.push(field.name.clone());
            }
        }

        info!(
            written = report.written.len(),
            unchanged = report.unchanged.len(),
            skipped = report.skipped.len(),
            "generated data class"
        );
        Ok(report)
    }
}
