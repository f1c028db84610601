//! Getter and setter generation.

use maker_core::{getter_name, setter_name, TypeRef, ValueType};
use maker_parser::{ClassMember, ClassModel, MemberKind, MethodModel, Parameter};
use maker_registry::MemberRegistry;
use tracing::debug;

use crate::config::ManipulatorConfig;
use crate::error::MutationResult;
use crate::result::{EditOutcome, SkipReason};
use crate::validation;

/// Add `getX()` (or `isX()` for bool properties) returning the property.
pub fn add_getter(
    class: &mut ClassModel,
    config: &ManipulatorConfig,
    property: &str,
    ty: Option<ValueType>,
    nullable: bool,
) -> MutationResult<EditOutcome> {
    let ty = ty.map(|kind| TypeRef::new(kind).with_nullable(nullable));
    let is_bool = ty.as_ref().is_some_and(TypeRef::is_bool);
    let name = getter_name(property, is_bool);

    let mut method = MethodModel::new(&name).body(vec![format!("return $this->{};", property)]);
    if let Some(ty) = &ty {
        method = method.returns(ty.hint());
    }

    put_method(class, config, property, method)
}

/// Add `setX($x)`. Fluent setters return `self` and end with `return $this;`.
pub fn add_setter(
    class: &mut ClassModel,
    config: &ManipulatorConfig,
    property: &str,
    ty: Option<ValueType>,
    nullable: bool,
    fluent: bool,
) -> MutationResult<EditOutcome> {
    let fluent = fluent && config.use_fluent_mutators;
    let ty = ty.map(|kind| TypeRef::new(kind).with_nullable(nullable));

    let mut body = vec![format!("$this->{} = ${};", property, property)];
    if fluent {
        body.push(String::new());
        body.push("return $this;".to_string());
    }

    let method = MethodModel::new(setter_name(property))
        .param(Parameter::new(property, ty.map(|t| t.hint())))
        .returns(if fluent { "self" } else { "void" })
        .body(body)
        .fluent(fluent);

    put_method(class, config, property, method)
}

/// Append the accessor, or regenerate an existing one in place.
fn put_method(
    class: &mut ClassModel,
    config: &ManipulatorConfig,
    property: &str,
    method: MethodModel,
) -> MutationResult<EditOutcome> {
    let registry = MemberRegistry::from_model(class);
    validation::require_property(&registry, class, property)?;

    if config.omit_getters_setters {
        debug!(method = %method.name, "accessors omitted, skipping");
        return Ok(EditOutcome::Skipped(SkipReason::Disabled));
    }

    match registry.method_index(&method.name) {
        Some(_) if !config.overwrite_existing_methods => {
            debug!(method = %method.name, "method exists, skipping");
            Ok(EditOutcome::Skipped(SkipReason::AlreadyPresent))
        }
        Some(index) => {
            debug!(method = %method.name, "replacing existing method");
            let member = &mut class.members[index];
            member.kind = MemberKind::Method(method);
            member.touch();
            Ok(EditOutcome::Replaced)
        }
        None => {
            debug!(method = %method.name, "added method");
            class
                .members
                .push(ClassMember::synthesized(MemberKind::Method(method)));
            Ok(EditOutcome::Added)
        }
    }
}
