//! Use imports.

use maker_core::{normalize_fqcn, short_name};
use maker_parser::{ClassModel, UseImport};
use tracing::debug;

use crate::error::MutationResult;
use crate::validation;

/// Import `fqcn`, optionally under `alias`, and return the name the class
/// body should use for it.
///
/// Already-imported symbols keep their existing alias. Classes from the
/// class's own namespace need no import.
pub fn add_use_import(
    class: &mut ClassModel,
    fqcn: &str,
    alias: Option<&str>,
) -> MutationResult<String> {
    let fqcn = normalize_fqcn(fqcn);

    if let Some(existing) = validation::find_import(class, &fqcn) {
        debug!(import = %fqcn, "import exists, skipping");
        return Ok(existing.short_alias().to_string());
    }

    let bound = alias.unwrap_or_else(|| short_name(&fqcn)).to_string();
    if alias.is_none() && validation::in_class_namespace(class, &fqcn) {
        debug!(import = %fqcn, "same namespace, no import needed");
        return Ok(bound);
    }
    validation::check_alias(class, &fqcn, &bound)?;

    let mut import = UseImport::class(fqcn.as_str());
    if let Some(alias) = alias.filter(|a| *a != short_name(&fqcn)) {
        import = import.with_alias(alias);
    }
    class.imports.push(import);
    class.imports_changed = true;
    debug!(import = %fqcn, alias = %bound, "added import");
    Ok(bound)
}
