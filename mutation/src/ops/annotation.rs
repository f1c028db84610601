//! Doc-comment annotation lines.

use maker_core::Literal;
use maker_parser::{ClassModel, MemberKind};
use maker_printer::annotation_line;
use maker_registry::MemberRegistry;
use tracing::debug;

use crate::config::ManipulatorConfig;
use crate::error::MutationResult;
use crate::result::{EditOutcome, SkipReason};
use crate::validation;

/// Append `@Name(options)` to a property's doc comment.
///
/// Distinct lines accumulate in call order. An exact repeat of a line the
/// comment already holds is not added again: the call reports
/// `Skipped(AlreadyPresent)` and leaves the member untouched.
pub fn add_doc_comment_line(
    class: &mut ClassModel,
    config: &ManipulatorConfig,
    property: &str,
    annotation: &str,
    options: &[(String, Literal)],
) -> MutationResult<EditOutcome> {
    let registry = MemberRegistry::from_model(class);
    let index = validation::require_single_property(&registry, class, property)?;

    if !config.use_annotations {
        debug!(property, annotation, "annotations disabled, skipping");
        return Ok(EditOutcome::Skipped(SkipReason::Disabled));
    }

    let line = annotation_line(annotation, options);
    let member = &mut class.members[index];
    let MemberKind::Property(model) = &mut member.kind else {
        return Ok(EditOutcome::Skipped(SkipReason::AlreadyPresent));
    };
    if model.doc.as_ref().is_some_and(|d| d.lines.contains(&line)) {
        debug!(property, %line, "annotation exists, skipping");
        return Ok(EditOutcome::Skipped(SkipReason::AlreadyPresent));
    }

    model.doc_mut().push_line(line.as_str());
    member.touch();
    debug!(property, %line, "added annotation");
    Ok(EditOutcome::Extended)
}
