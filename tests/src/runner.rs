//! Scenario runner.

use maker_mutation::{ClassManipulator, MutationResult};
use maker_parser::ClassModel;
use maker_printer::render;

use crate::assertion::StepOutput;
use crate::error::{HarnessError, HarnessResult};
use crate::scenario::{Edit, Scenario, Start};

/// Runs a scenario against the manipulator.
pub struct Runner<'s> {
    scenario: &'s Scenario,
}

impl<'s> Runner<'s> {
    pub fn new(scenario: &'s Scenario) -> Self {
        Self { scenario }
    }

    /// Run the scenario and return the final source.
    pub fn run(&self) -> HarnessResult<String> {
        // 1. Load the class
        let mut class = match &self.scenario.start {
            Start::Skeleton(fqcn) => ClassModel::skeleton(fqcn),
            Start::Source(source) => {
                maker_mutation::load(source).map_err(|e| HarnessError::step_failed("load", e))?
            }
        };

        // 2. Execute each step and verify assertions
        for step in self.scenario.steps() {
            let before = render(&class);
            let result = apply(&mut class, self.scenario, &step.edit)
                .map(|(outcome, returned)| StepOutput {
                    outcome,
                    returned,
                    before,
                    after: render(&class),
                })
                .map_err(|e| e.to_string());
            step.assertion.verify(&step.name, &result)?;
        }

        let rendered = render(&class);

        // 3. Compare with the expected text
        if let Some(expected) = &self.scenario.expected {
            if expected != &rendered {
                return Err(HarnessError::assertion_failed(
                    &self.scenario.name,
                    format!("final source mismatch\n--- expected\n{}\n--- actual\n{}", expected, rendered),
                ));
            }
        }

        // 4. Replay on the written result
        if self.scenario.idempotent {
            self.replay(&rendered)?;
        }

        Ok(rendered)
    }

    fn replay(&self, rendered: &str) -> HarnessResult<()> {
        let mut class = maker_mutation::load(rendered)
            .map_err(|e| HarnessError::step_failed("reload", e))?;
        if render(&class) != rendered {
            return Err(HarnessError::assertion_failed(
                "reload",
                "reparsed output does not render to the same text",
            ));
        }

        for step in self.scenario.steps() {
            if let Err(e) = apply(&mut class, self.scenario, &step.edit) {
                // A step that failed the first time fails the same way.
                if step.assertion.error.is_none() {
                    return Err(HarnessError::step_failed(format!("replay:{}", step.name), e));
                }
            }
        }

        let replayed = render(&class);
        if replayed != rendered {
            return Err(HarnessError::assertion_failed(
                "replay",
                format!("second run changed the source\n--- first\n{}\n--- second\n{}", rendered, replayed),
            ));
        }
        Ok(())
    }
}

/// Apply one edit. Returns the outcome, or the short name for imports.
fn apply(
    class: &mut ClassModel,
    scenario: &Scenario,
    edit: &Edit,
) -> MutationResult<(Option<maker_mutation::EditOutcome>, Option<String>)> {
    let mut manipulator = ClassManipulator::new(class, scenario.config);
    match edit {
        Edit::Property {
            name,
            ty,
            default,
            doc_lines,
        } => manipulator
            .add_property(name, ty.clone(), default.clone(), doc_lines)
            .map(|o| (Some(o), None)),
        Edit::Getter {
            property,
            ty,
            nullable,
        } => manipulator
            .add_getter(property, ty.clone(), *nullable)
            .map(|o| (Some(o), None)),
        Edit::Setter {
            property,
            ty,
            nullable,
            fluent,
        } => manipulator
            .add_setter(property, ty.clone(), *nullable, *fluent)
            .map(|o| (Some(o), None)),
        Edit::ConstructorParameter { name, ty, promote } => manipulator
            .add_constructor_parameter(name, ty.clone(), *promote)
            .map(|o| (Some(o), None)),
        Edit::Import { fqcn, alias } => match alias {
            Some(alias) => manipulator.add_use_import_as(fqcn, alias),
            None => manipulator.add_use_import(fqcn),
        }
        .map(|name| (None, Some(name))),
        Edit::DocLine {
            property,
            annotation,
            options,
        } => manipulator
            .add_doc_comment_line(property, annotation, options)
            .map(|o| (Some(o), None)),
    }
}

#[cfg(test)]
mod tests {
    use crate::scenario::{Edit, Scenario};

    #[test]
    fn test_runner_with_inline_source() {
        let scenario = Scenario::new("inline")
            .source("<?php\nclass A\n{\n}\n")
            .step("add", Edit::property("a", None), |a| {
                a.added().contains("    private $a;\n")
            })
            .idempotent();

        let out = scenario.run().unwrap();
        assert_eq!(out, "<?php\nclass A\n{\n    private $a;\n}\n");
    }

    #[test]
    fn test_load_failure_is_reported() {
        let err = Scenario::new("broken")
            .source("<?php\n")
            .run()
            .unwrap_err();
        assert!(err.to_string().starts_with("step 'load' failed"));
    }
}
