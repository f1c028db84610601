//! Command-line interface definition.

use clap::{Args, Parser, Subcommand};
use maker_mutation::ManipulatorConfig;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "maker")]
#[command(version)]
#[command(about = "Generate and update PHP classes without losing hand-written code", long_about = None)]
pub struct Cli {
    /// Log every edit (same as MAKER_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add entity fields to a data transfer object class
    Dto(DtoArgs),
}

#[derive(Debug, Args)]
pub struct DtoArgs {
    /// PHP file holding the DTO class
    pub class_file: PathBuf,

    /// JSON manifest of mapped fields
    #[arg(long, value_name = "MANIFEST")]
    pub fields: PathBuf,

    /// Fully-qualified class name, used when the class file does not exist yet
    #[arg(long, value_name = "FQCN")]
    pub class: Option<String>,

    /// Generate public properties without getters and setters
    #[arg(long)]
    pub omit_accessors: bool,

    /// Setters return void instead of $this
    #[arg(long)]
    pub no_fluent: bool,

    /// Do not write doc-comment annotations
    #[arg(long)]
    pub no_annotations: bool,

    /// Declare properties without types (@var annotations instead)
    #[arg(long)]
    pub untyped: bool,

    /// Leave existing getters and setters alone
    #[arg(long)]
    pub keep_existing_methods: bool,

    /// Print the result instead of writing the file
    #[arg(long)]
    pub dry_run: bool,
}

impl DtoArgs {
    /// Manipulator configuration for these flags.
    pub fn config(&self) -> ManipulatorConfig {
        ManipulatorConfig::default()
            .with_overwrite_existing_methods(!self.keep_existing_methods)
            .with_annotations(!self.no_annotations)
            .with_fluent_mutators(!self.no_fluent)
            .with_omit_getters_setters(self.omit_accessors)
            .with_typed_properties(!self.untyped)
    }
}
