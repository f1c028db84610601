//! Property insertion.

use maker_core::{Literal, TypeRef};
use maker_parser::{ClassMember, ClassModel, DefaultValue, MemberKind, PropertyModel, Visibility};
use maker_registry::MemberRegistry;
use tracing::debug;

use crate::config::ManipulatorConfig;
use crate::error::MutationResult;
use crate::result::{EditOutcome, SkipReason};

/// Add a property after the last existing one.
pub fn add_property(
    class: &mut ClassModel,
    config: &ManipulatorConfig,
    name: &str,
    ty: Option<TypeRef>,
    default: Option<Literal>,
    doc_lines: &[String],
) -> MutationResult<EditOutcome> {
    let registry = MemberRegistry::from_model(class);
    if registry.has_property(name) {
        debug!(property = name, "property exists, skipping");
        return Ok(EditOutcome::Skipped(SkipReason::AlreadyPresent));
    }
    let slot = registry.property_slot();

    let default = match (&ty, default) {
        (_, Some(literal)) => Some(literal),
        (Some(ty), None) if ty.nullable && config.typed_properties => Some(Literal::Null),
        _ => None,
    };

    let visibility = if config.omit_getters_setters {
        Visibility::Public
    } else {
        Visibility::Private
    };

    let mut property = PropertyModel::new(name)
        .with_visibility(visibility)
        .with_default(default.map(DefaultValue::Literal));
    if config.typed_properties {
        property = property.with_type(ty.clone());
    }

    if config.use_annotations {
        if !config.typed_properties {
            if let Some(ty) = &ty {
                property.doc_mut().push_line(format!("@var {}", ty.doc()));
            }
        }
        for line in doc_lines {
            property.doc_mut().push_line(line.clone());
        }
    }

    class
        .members
        .insert(slot, ClassMember::synthesized(MemberKind::Property(property)));
    debug!(property = name, position = slot, "added property");
    Ok(EditOutcome::Added)
}
