//! Mutation error types.

use maker_parser::ParseError;
use thiserror::Error;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors that can occur while editing a class.
#[derive(Debug, Error)]
pub enum MutationError {
    #[error("Unknown member: {class}::${name}")]
    UnknownMember { class: String, name: String },

    #[error("Import conflict: `{alias}` already refers to {existing}, cannot import {requested}")]
    DuplicateImportConflict {
        alias: String,
        existing: String,
        requested: String,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl MutationError {
    pub fn unknown_member(class: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownMember {
            class: class.into(),
            name: name.into(),
        }
    }

    pub fn import_conflict(
        alias: impl Into<String>,
        existing: impl Into<String>,
        requested: impl Into<String>,
    ) -> Self {
        Self::DuplicateImportConflict {
            alias: alias.into(),
            existing: existing.into(),
            requested: requested.into(),
        }
    }
}
