//! Maker Mutation
//!
//! Edit a parsed PHP class one operation at a time.
//!
//! Responsibilities:
//! - Add properties, accessors, constructor parameters, imports and annotations
//! - Keep every addition idempotent by consulting a fresh member registry
//! - Honour the manipulator configuration
//! - Render the result through the printer
//!
//! # Module Structure
//!
//! - `executor` - `ClassManipulator` that coordinates operations
//! - `ops/` - Individual operation implementations
//! - `validation` - Shared member and alias checks
//! - `config` - Manipulator switches
//! - `error` - Error types for failed edits
//! - `result` - Outcome of each edit

mod config;
mod error;
mod executor;
mod ops;
mod result;
mod validation;

pub use config::ManipulatorConfig;
pub use error::{MutationError, MutationResult};
pub use executor::{load, ClassManipulator};
pub use result::{EditOutcome, SkipReason};
