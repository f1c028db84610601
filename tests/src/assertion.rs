//! Assertion types and builders for verifying step results.

use maker_mutation::{EditOutcome, SkipReason};

use crate::error::{HarnessError, HarnessResult};

/// What one step produced.
#[derive(Debug, Clone)]
pub struct StepOutput {
    /// Outcome of an edit, `None` for imports.
    pub outcome: Option<EditOutcome>,
    /// Short name returned by an import.
    pub returned: Option<String>,
    /// Rendered source before the step.
    pub before: String,
    /// Rendered source after the step.
    pub after: String,
}

/// A complete assertion for a step result.
#[derive(Debug, Default)]
pub struct Assertion {
    // Edit outcome
    pub outcome: Option<EditOutcome>,
    pub returned: Option<String>,

    // Rendered source
    pub source: Option<String>,
    pub contains: Vec<String>,
    pub absent: Vec<String>,
    pub counts: Vec<(String, usize)>,
    pub ordered: Vec<Vec<String>>,
    pub patterns: Vec<String>,
    pub unchanged: bool,

    // Error assertions
    pub error: Option<String>,
}

impl Assertion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify the assertion against a step result.
    pub fn verify(&self, step: &str, result: &Result<StepOutput, String>) -> HarnessResult<()> {
        if let Some(expected) = &self.error {
            return match result {
                Err(msg) if msg.contains(expected.as_str()) => Ok(()),
                Err(msg) => Err(HarnessError::assertion_failed(
                    step,
                    format!("expected error containing '{}', got: {}", expected, msg),
                )),
                Ok(_) => Err(HarnessError::assertion_failed(
                    step,
                    format!("expected error containing '{}', but step succeeded", expected),
                )),
            };
        }

        let output = result
            .as_ref()
            .map_err(|msg| HarnessError::assertion_failed(step, format!("unexpected error: {}", msg)))?;

        if let Some(expected) = &self.outcome {
            if output.outcome.as_ref() != Some(expected) {
                return Err(HarnessError::assertion_failed(
                    step,
                    format!("expected outcome {:?}, got {:?}", expected, output.outcome),
                ));
            }
        }

        if let Some(expected) = &self.returned {
            if output.returned.as_ref() != Some(expected) {
                return Err(HarnessError::assertion_failed(
                    step,
                    format!("expected import name '{}', got {:?}", expected, output.returned),
                ));
            }
        }

        self.verify_source(step, &output.after)?;

        if self.unchanged && output.before != output.after {
            return Err(HarnessError::assertion_failed(
                step,
                format!(
                    "expected source to be unchanged\n--- before\n{}\n--- after\n{}",
                    output.before, output.after
                ),
            ));
        }

        Ok(())
    }

    fn verify_source(&self, step: &str, source: &str) -> HarnessResult<()> {
        if let Some(expected) = &self.source {
            if expected != source {
                return Err(HarnessError::assertion_failed(
                    step,
                    format!("source mismatch\n--- expected\n{}\n--- actual\n{}", expected, source),
                ));
            }
        }

        for needle in &self.contains {
            if !source.contains(needle.as_str()) {
                return Err(HarnessError::assertion_failed(
                    step,
                    format!("expected source to contain:\n{}\n--- actual\n{}", needle, source),
                ));
            }
        }

        for needle in &self.absent {
            if source.contains(needle.as_str()) {
                return Err(HarnessError::assertion_failed(
                    step,
                    format!("expected source not to contain:\n{}\n--- actual\n{}", needle, source),
                ));
            }
        }

        for (needle, expected) in &self.counts {
            let actual = source.matches(needle.as_str()).count();
            if actual != *expected {
                return Err(HarnessError::assertion_failed(
                    step,
                    format!("expected {} occurrence(s) of '{}', found {}", expected, needle, actual),
                ));
            }
        }

        for sequence in &self.ordered {
            let mut from = 0;
            for needle in sequence {
                match source[from..].find(needle.as_str()) {
                    Some(pos) => from += pos + needle.len(),
                    None => {
                        return Err(HarnessError::assertion_failed(
                            step,
                            format!("expected '{}' after offset {} in:\n{}", needle, from, source),
                        ))
                    }
                }
            }
        }

        for pattern in &self.patterns {
            let re = regex_lite::Regex::new(pattern).map_err(|e| {
                HarnessError::assertion_failed(step, format!("invalid regex pattern: {}", e))
            })?;
            if !re.is_match(source) {
                return Err(HarnessError::assertion_failed(
                    step,
                    format!("source does not match /{}/:\n{}", pattern, source),
                ));
            }
        }

        Ok(())
    }
}

/// Builder for constructing assertions fluently.
#[derive(Debug, Default)]
pub struct AssertionBuilder {
    assertion: Assertion,
}

impl AssertionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcome(mut self, outcome: EditOutcome) -> Self {
        self.assertion.outcome = Some(outcome);
        self
    }

    pub fn added(self) -> Self {
        self.outcome(EditOutcome::Added)
    }

    pub fn replaced(self) -> Self {
        self.outcome(EditOutcome::Replaced)
    }

    pub fn extended(self) -> Self {
        self.outcome(EditOutcome::Extended)
    }

    /// Skipped because the member is already there; the source must not move.
    pub fn already_present(self) -> Self {
        self.outcome(EditOutcome::Skipped(SkipReason::AlreadyPresent))
            .unchanged()
    }

    /// Skipped because the configuration turns the edit off.
    pub fn disabled(self) -> Self {
        self.outcome(EditOutcome::Skipped(SkipReason::Disabled))
            .unchanged()
    }

    /// Name returned by an import.
    pub fn imported_as(mut self, name: &str) -> Self {
        self.assertion.returned = Some(name.to_string());
        self
    }

    /// The whole rendered source.
    pub fn source(mut self, expected: &str) -> Self {
        self.assertion.source = Some(expected.to_string());
        self
    }

    pub fn contains(mut self, needle: &str) -> Self {
        self.assertion.contains.push(needle.to_string());
        self
    }

    pub fn absent(mut self, needle: &str) -> Self {
        self.assertion.absent.push(needle.to_string());
        self
    }

    /// Exact number of occurrences.
    pub fn count(mut self, needle: &str, times: usize) -> Self {
        self.assertion.counts.push((needle.to_string(), times));
        self
    }

    /// Each needle appears after the previous one.
    pub fn in_order(mut self, needles: &[&str]) -> Self {
        self.assertion
            .ordered
            .push(needles.iter().map(|n| n.to_string()).collect());
        self
    }

    pub fn matches(mut self, pattern: &str) -> Self {
        self.assertion.patterns.push(pattern.to_string());
        self
    }

    pub fn unchanged(mut self) -> Self {
        self.assertion.unchanged = true;
        self
    }

    pub fn error(mut self, message: &str) -> Self {
        self.assertion.error = Some(message.to_string());
        self
    }

    pub fn build(self) -> Assertion {
        self.assertion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(after: &str) -> Result<StepOutput, String> {
        Ok(StepOutput {
            outcome: Some(EditOutcome::Added),
            returned: None,
            before: String::new(),
            after: after.to_string(),
        })
    }

    #[test]
    fn test_contains_and_order() {
        let assertion = AssertionBuilder::new()
            .added()
            .contains("$b")
            .in_order(&["$a", "$b"])
            .count("private", 2)
            .build();

        assert!(assertion.verify("s", &output("private $a; private $b;")).is_ok());
        assert!(assertion.verify("s", &output("private $b; private $a;")).is_err());
    }

    #[test]
    fn test_error_expectation() {
        let assertion = AssertionBuilder::new().error("Unknown member").build();

        assert!(assertion
            .verify("s", &Err("Unknown member 'x' on class A".to_string()))
            .is_ok());
        assert!(assertion.verify("s", &output("")).is_err());
    }

    #[test]
    fn test_unchanged_compares_before_and_after() {
        let assertion = AssertionBuilder::new().unchanged().build();
        let result = Ok(StepOutput {
            outcome: None,
            returned: None,
            before: "a".to_string(),
            after: "b".to_string(),
        });

        let err = assertion.verify("s", &result).unwrap_err();
        assert!(err.to_string().contains("expected source to be unchanged"));
    }

    #[test]
    fn test_pattern() {
        let assertion = AssertionBuilder::new().matches(r"function get\w+\(\)").build();
        assert!(assertion.verify("s", &output("public function getName()")).is_ok());
    }
}
