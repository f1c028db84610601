//! The `maker dto` command against real files.

use std::fs;
use std::path::Path;

use clap::Parser;
use maker_cli::{execute, run_dto, Cli, CliError, Command, DtoArgs};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const MANIFEST: &str = r#"{
    "class": "App\\Form\\Data\\UserData",
    "fields": [
        { "fieldName": "id", "type": "integer", "id": true },
        {
            "fieldName": "name",
            "type": "string",
            "constraints": [
                { "name": "NotBlank" },
                { "name": "Symfony\\Component\\Validator\\Constraints\\Length", "options": { "max": 255 } }
            ]
        },
        { "fieldName": "active", "type": "boolean", "nullable": true }
    ]
}"#;

const EXPECTED: &str = r#"<?php

namespace App\Form\Data;

use Symfony\Component\Validator\Constraints as Assert;

class UserData
{
    /**
     * @Assert\NotBlank()
     * @Assert\Length(max=255)
     */
    private string $name;

    private ?bool $active = null;

    public function getName(): string
    {
        return $this->name;
    }

    public function setName(string $name): self
    {
        $this->name = $name;

        return $this;
    }

    public function isActive(): ?bool
    {
        return $this->active;
    }

    public function setActive(?bool $active): self
    {
        $this->active = $active;

        return $this;
    }
}
"#;

fn dto_args(dir: &Path, extra: &[&str]) -> DtoArgs {
    let class_file = dir.join("UserData.php");
    let manifest = dir.join("fields.json");
    let mut argv = vec![
        "maker".to_string(),
        "dto".to_string(),
        class_file.display().to_string(),
        "--fields".to_string(),
        manifest.display().to_string(),
    ];
    argv.extend(extra.iter().map(|s| s.to_string()));

    match Cli::try_parse_from(argv).unwrap().command {
        Command::Dto(args) => args,
    }
}

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("fields.json"), MANIFEST).unwrap();
    dir
}

#[test]
fn test_creates_missing_class_file() {
    // GIVEN a manifest naming the class and no class file yet
    let dir = workspace();
    let args = dto_args(dir.path(), &[]);

    // WHEN running the command
    let report = run_dto(&args, &mut Vec::new()).unwrap();

    // THEN the file is written with every non-identifier field
    assert_eq!(report.written, vec!["name", "active"]);
    assert_eq!(report.skipped, vec!["id"]);
    assert_eq!(fs::read_to_string(&args.class_file).unwrap(), EXPECTED);
}

#[test]
fn test_second_run_keeps_file_identical() {
    let dir = workspace();
    let args = dto_args(dir.path(), &[]);
    run_dto(&args, &mut Vec::new()).unwrap();
    let first = fs::read_to_string(&args.class_file).unwrap();

    let report = run_dto(&args, &mut Vec::new()).unwrap();

    assert!(report.written.is_empty());
    assert_eq!(report.unchanged, vec!["name", "active"]);
    assert_eq!(fs::read_to_string(&args.class_file).unwrap(), first);
}

#[test]
fn test_existing_class_keeps_hand_written_code() {
    let dir = workspace();
    let source = "<?php\n\nnamespace App\\Form\\Data;\n\nclass UserData\n{\n    // filled by the form\n    private ?string $name = null;\n\n    public function label(): string\n    {\n        return sprintf('%s', $this->name);\n    }\n}\n";
    let args = dto_args(dir.path(), &["--keep-existing-methods"]);
    fs::write(&args.class_file, source).unwrap();

    let report = run_dto(&args, &mut Vec::new()).unwrap();

    assert_eq!(report.unchanged, vec!["name"]);
    assert_eq!(report.written, vec!["active"]);
    let written = fs::read_to_string(&args.class_file).unwrap();
    assert!(written.starts_with(
        "<?php\n\nnamespace App\\Form\\Data;\n\nuse Symfony\\Component\\Validator\\Constraints as Assert;\n\nclass UserData\n{\n    // filled by the form\n    private ?string $name = null;\n\n    private ?bool $active = null;\n\n    public function label(): string\n    {\n        return sprintf('%s', $this->name);\n    }\n"
    ));
    assert!(written.contains("public function getName(): string\n"));
    assert!(written.contains("public function isActive(): ?bool\n"));
}

#[test]
fn test_dry_run_prints_without_writing() {
    let dir = workspace();
    let args = dto_args(dir.path(), &["--dry-run", "--omit-accessors", "--no-annotations"]);
    let mut out = Vec::new();

    run_dto(&args, &mut out).unwrap();

    assert!(!args.class_file.exists());
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "<?php\n\nnamespace App\\Form\\Data;\n\nclass UserData\n{\n    public string $name;\n\n    public ?bool $active = null;\n}\n"
    );
}

#[test]
fn test_execute_dispatches_dto() {
    let dir = workspace();
    let class_file = dir.path().join("UserData.php");
    let cli = Cli::try_parse_from([
        "maker",
        "--verbose",
        "dto",
        class_file.to_str().unwrap(),
        "--fields",
        dir.path().join("fields.json").to_str().unwrap(),
        "--untyped",
        "--no-fluent",
    ])
    .unwrap();

    execute(&cli, &mut Vec::new()).unwrap();

    let written = fs::read_to_string(&class_file).unwrap();
    assert!(written.contains("     * @var string\n     * @Assert\\NotBlank()\n"));
    assert!(written.contains("    private $active;\n"));
    assert!(written.contains("public function setActive(?bool $active): void\n"));
}

#[test]
fn test_missing_class_without_name() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("fields.json"), r#"[{ "name": "title", "type": "string" }]"#).unwrap();
    let args = dto_args(dir.path(), &[]);

    let err = run_dto(&args, &mut Vec::new()).unwrap_err();

    assert!(matches!(err, CliError::MissingClass { .. }));
}

#[test]
fn test_class_flag_overrides_manifest() {
    let dir = workspace();
    let args = dto_args(dir.path(), &["--class", "App\\Dto\\Account"]);

    run_dto(&args, &mut Vec::new()).unwrap();

    let written = fs::read_to_string(&args.class_file).unwrap();
    assert!(written.starts_with("<?php\n\nnamespace App\\Dto;\n\nuse Symfony"));
    assert!(written.contains("\nclass Account\n{\n"));
}

#[test]
fn test_invalid_class_file_is_left_alone() {
    let dir = workspace();
    let args = dto_args(dir.path(), &[]);
    fs::write(&args.class_file, "<?php\nfunction helper() {}\n").unwrap();

    let err = run_dto(&args, &mut Vec::new()).unwrap_err();

    assert!(matches!(err, CliError::Parse { .. }));
    assert_eq!(
        fs::read_to_string(&args.class_file).unwrap(),
        "<?php\nfunction helper() {}\n"
    );
}

#[test]
fn test_malformed_manifest() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("fields.json"), "{ not json").unwrap();
    let args = dto_args(dir.path(), &[]);

    let err = run_dto(&args, &mut Vec::new()).unwrap_err();

    assert!(matches!(err, CliError::Manifest { .. }));
}
