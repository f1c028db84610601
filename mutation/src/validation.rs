//! Member checks shared by the edit operations.

use maker_core::{normalize_fqcn, short_name};
use maker_parser::{ClassModel, UseImport};
use maker_registry::MemberRegistry;

use crate::error::{MutationError, MutationResult};

/// Fail unless the class declares the property.
pub fn require_property(
    registry: &MemberRegistry,
    class: &ClassModel,
    name: &str,
) -> MutationResult<()> {
    if registry.has_property(name) {
        Ok(())
    } else {
        Err(MutationError::unknown_member(class.full_name(), name))
    }
}

/// Fail unless the class has a single-name declaration of the property,
/// returning its member index.
pub fn require_single_property(
    registry: &MemberRegistry,
    class: &ClassModel,
    name: &str,
) -> MutationResult<usize> {
    registry
        .property_index(name)
        .ok_or_else(|| MutationError::unknown_member(class.full_name(), name))
}

/// Check that `alias` is free for `fqcn`: no other import binds it and it is
/// not the class's own name.
pub fn check_alias(class: &ClassModel, fqcn: &str, alias: &str) -> MutationResult<()> {
    let fqcn = normalize_fqcn(fqcn);

    if let Some(taken) = class
        .imports
        .iter()
        .find(|i| i.short_alias().eq_ignore_ascii_case(alias) && !i.same_symbol(&fqcn))
    {
        return Err(MutationError::import_conflict(alias, &taken.name, fqcn));
    }

    if class.name.eq_ignore_ascii_case(alias) && !class.full_name().eq_ignore_ascii_case(&fqcn) {
        return Err(MutationError::import_conflict(alias, class.full_name(), fqcn));
    }

    Ok(())
}

/// Existing import of the same symbol.
pub fn find_import<'c>(class: &'c ClassModel, fqcn: &str) -> Option<&'c UseImport> {
    class.imports.iter().find(|i| i.same_symbol(fqcn))
}

/// True if `fqcn` lives directly in the class's namespace.
pub fn in_class_namespace(class: &ClassModel, fqcn: &str) -> bool {
    let fqcn = normalize_fqcn(fqcn);
    let namespace = fqcn
        .len()
        .checked_sub(short_name(&fqcn).len() + 1)
        .map(|end| &fqcn[..end]);
    match (&class.namespace, namespace) {
        (Some(ours), Some(theirs)) => ours.eq_ignore_ascii_case(theirs),
        _ => false,
    }
}
