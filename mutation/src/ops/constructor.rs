//! Constructor parameters.

use maker_core::TypeRef;
use maker_parser::{ClassMember, ClassModel, MemberKind, MethodModel, Parameter, CONSTRUCTOR};
use maker_registry::MemberRegistry;
use tracing::debug;

use crate::error::MutationResult;
use crate::result::{EditOutcome, SkipReason};
use crate::validation;

/// Append a constructor parameter, creating the constructor when absent.
///
/// With `promote`, the body also gets `$this->name = $name;` unless that
/// assignment is already there, even when the parameter itself existed.
pub fn add_constructor_parameter(
    class: &mut ClassModel,
    name: &str,
    ty: Option<TypeRef>,
    promote: bool,
) -> MutationResult<EditOutcome> {
    let registry = MemberRegistry::from_model(class);
    if promote {
        validation::require_property(&registry, class, name)?;
    }

    let has_param = registry.has_constructor_param(name);
    let needs_assignment = promote && !registry.has_constructor_assignment(name);
    let existing = registry.method_index(CONSTRUCTOR);
    let slot = registry.constructor_slot();

    if has_param && !needs_assignment {
        debug!(parameter = name, "constructor parameter exists, skipping");
        return Ok(EditOutcome::Skipped(SkipReason::AlreadyPresent));
    }

    let assignment = format!("$this->{} = ${};", name, name);
    let param = Parameter::new(name, ty.map(|t| t.hint()));

    let Some(index) = existing else {
        let mut constructor = MethodModel::new(CONSTRUCTOR).param(param);
        if promote {
            constructor.append_statement(assignment);
        }
        class.members.insert(
            slot,
            ClassMember::synthesized(MemberKind::Method(constructor)),
        );
        debug!(parameter = name, position = slot, "created constructor");
        return Ok(EditOutcome::Added);
    };

    let member = &mut class.members[index];
    if let MemberKind::Method(constructor) = &mut member.kind {
        if !has_param {
            constructor.params.push(param);
        }
        if needs_assignment {
            constructor.append_statement(assignment);
        }
        member.touch();
    }
    debug!(parameter = name, "extended constructor");
    Ok(EditOutcome::Extended)
}
