//! Maker CLI library - drives the class manipulator from the command line.
//!
//! It is split into modules for better maintainability:
//!
//! - `cli`: clap definitions and flag-to-config mapping
//! - `command`: command execution and file handling
//! - `dto`: data transfer object generation from field mappings
//! - `field`: field mappings and Doctrine type mapping
//! - `manifest`: JSON manifest loading
//! - `format`: Output formatting utilities
//! - `observability`: logging setup

mod cli;
mod command;
mod dto;
mod error;
mod field;
mod format;
mod manifest;
pub mod observability;

pub use cli::{Cli, Command, DtoArgs};
pub use command::{execute, run_dto};
pub use dto::{DtoGenerator, DtoReport, ASSERT_ALIAS, ASSERT_NAMESPACE};
pub use error::{CliError, CliResult};
pub use field::{php_type, ConstraintSpec, FieldMapping};
pub use format::format_report;
pub use manifest::{to_literal, Manifest};
