//! CLI error types.

use maker_mutation::MutationError;
use maker_parser::ParseError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a command before anything is written.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error on {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Invalid field manifest {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{}: {source}", path.display())]
    Parse { path: PathBuf, source: ParseError },

    #[error("Class file {} does not exist; pass --class to create it", path.display())]
    MissingClass { path: PathBuf },

    #[error(transparent)]
    Mutation(#[from] MutationError),
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn manifest(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Manifest {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: ParseError) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;
