//! Command execution.

use std::fs;
use std::io::Write;
use std::path::Path;

use maker_parser::ClassModel;
use tracing::info;

use crate::cli::{Cli, Command, DtoArgs};
use crate::dto::{DtoGenerator, DtoReport};
use crate::error::{CliError, CliResult};
use crate::format::format_report;
use crate::manifest::Manifest;

/// Run a parsed command line. Dry runs print the class to `out`.
pub fn execute(cli: &Cli, out: &mut dyn Write) -> CliResult<()> {
    match &cli.command {
        Command::Dto(args) => run_dto(args, out).map(|_| ()),
    }
}

/// Apply a field manifest to a DTO class file.
///
/// The file is written once, after rendering succeeded, and only when the
/// text changed.
pub fn run_dto(args: &DtoArgs, out: &mut dyn Write) -> CliResult<DtoReport> {
    let manifest = Manifest::load(&args.fields)?;
    let class_name = args.class.as_deref().or(manifest.class());
    let (mut class, original) = load_class(&args.class_file, class_name)?;

    let generator = DtoGenerator::new(args.config());
    let report = generator.generate(&mut class, manifest.fields())?;
    let rendered = maker_printer::render(&class);

    if args.dry_run {
        out.write_all(rendered.as_bytes())
            .map_err(|e| CliError::io("<stdout>", e))?;
    } else if original.as_deref() != Some(rendered.as_str()) {
        fs::write(&args.class_file, &rendered).map_err(|e| CliError::io(&args.class_file, e))?;
        info!(path = %args.class_file.display(), "updated class file");
    } else {
        info!(path = %args.class_file.display(), "class file already up to date");
    }

    for line in format_report(&report) {
        info!("{}", line);
    }
    Ok(report)
}

/// Parse the class file, or start from a skeleton when it does not exist.
fn load_class(path: &Path, class_name: Option<&str>) -> CliResult<(ClassModel, Option<String>)> {
    if !path.exists() {
        let Some(fqcn) = class_name else {
            return Err(CliError::MissingClass {
                path: path.to_path_buf(),
            });
        };
        info!(class = fqcn, "creating new class");
        return Ok((ClassModel::skeleton(fqcn), None));
    }

    let source = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let class = maker_parser::parse(&source).map_err(|e| CliError::parse(path, e))?;
    info!(class = %class.full_name(), path = %path.display(), "loaded class");
    Ok((class, Some(source)))
}
