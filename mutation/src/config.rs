//! Manipulator configuration.

/// Switches consumed by `ClassManipulator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManipulatorConfig {
    /// Regenerate an existing getter/setter instead of skipping it.
    pub overwrite_existing_methods: bool,
    /// Emit doc-comment blocks at all.
    pub use_annotations: bool,
    /// Setters return `self` and end with `return $this;`.
    pub use_fluent_mutators: bool,
    /// Make `add_getter` / `add_setter` no-ops.
    pub omit_getters_setters: bool,
    /// Declare property types (PHP 7.4+). Off means `@var` docs instead.
    pub typed_properties: bool,
}

impl Default for ManipulatorConfig {
    fn default() -> Self {
        Self {
            overwrite_existing_methods: true,
            use_annotations: true,
            use_fluent_mutators: true,
            omit_getters_setters: false,
            typed_properties: true,
        }
    }
}

impl ManipulatorConfig {
    pub fn with_overwrite_existing_methods(mut self, value: bool) -> Self {
        self.overwrite_existing_methods = value;
        self
    }

    pub fn with_annotations(mut self, value: bool) -> Self {
        self.use_annotations = value;
        self
    }

    pub fn with_fluent_mutators(mut self, value: bool) -> Self {
        self.use_fluent_mutators = value;
        self
    }

    pub fn with_omit_getters_setters(mut self, value: bool) -> Self {
        self.omit_getters_setters = value;
        self
    }

    pub fn with_typed_properties(mut self, value: bool) -> Self {
        self.typed_properties = value;
        self
    }
}
