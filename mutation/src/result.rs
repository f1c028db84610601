//! Edit outcome types.

/// Outcome of one edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// A new member was inserted.
    Added,
    /// An existing member was regenerated in place.
    Replaced,
    /// An existing member gained a parameter, statement or doc line.
    Extended,
    /// Nothing changed.
    Skipped(SkipReason),
}

/// Why an edit left the class untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    AlreadyPresent,
    /// Turned off by the manipulator configuration.
    Disabled,
}

impl EditOutcome {
    /// True if the class changed.
    pub fn applied(&self) -> bool {
        !matches!(self, EditOutcome::Skipped(_))
    }
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::AlreadyPresent => "already present",
            SkipReason::Disabled => "disabled",
        }
    }
}
