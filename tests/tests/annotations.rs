//! Doc-comment annotation lines on properties.

use maker_tests::prelude::*;

#[test]
fn test_lines_accumulate_in_call_order() {
    Scenario::new("Data")
        .edit("property", Edit::property("age", Some(TypeRef::nullable(ValueType::Int))))
        .step(
            "range",
            Edit::doc_line("age", "@Assert\\Range", options! { "min" => 0, "max" => 130 }),
            |a| a.extended(),
        )
        .step("not null", Edit::doc_line("age", "Assert\\NotNull", options!()), |a| {
            a.extended()
        })
        .step(
            "choice",
            Edit::doc_line(
                "age",
                "Assert\\Choice",
                options! { "choices" => Literal::List(vec![Literal::Int(18), Literal::Int(21)]), "message" => "Pick \"one\"" },
            ),
            |a| {
                a.extended().contains(
                    "    /**\n     * @Assert\\Range(min=0, max=130)\n     * @Assert\\NotNull()\n     * @Assert\\Choice(choices={18, 21}, message=\"Pick \"\"one\"\"\")\n     */\n    private ?int $age = null;\n",
                )
            },
        )
        .step("repeat", Edit::doc_line("age", "Assert\\NotNull", options!()), |a| {
            a.already_present().count("@Assert\\NotNull()", 1)
        })
        .idempotent()
        .run()
        .unwrap();
}

#[test]
fn test_existing_doc_comment_is_extended() {
    let source = "<?php\n\nclass Data\n{\n    /**\n     * Display name.\n     */\n    private string $name;\n\n    private int $age;\n}\n";

    Scenario::new("Data")
        .source(source)
        .step("length", Edit::doc_line("name", "Assert\\Length", options! { "max" => 255 }), |a| {
            a.extended().source(
                "<?php\n\nclass Data\n{\n    /**\n     * Display name.\n     * @Assert\\Length(max=255)\n     */\n    private string $name;\n\n    private int $age;\n}\n",
            )
        })
        .idempotent()
        .run()
        .unwrap();
}

#[test]
fn test_same_line_comment_survives() {
    let source = "<?php\n\nclass Data\n{\n    private ?int $age = null; // years\n}\n";

    Scenario::new("Data")
        .source(source)
        .step("range", Edit::doc_line("age", "Assert\\Range", options! { "min" => 0 }), |a| {
            a.extended().source(
                "<?php\n\nclass Data\n{\n    /**\n     * @Assert\\Range(min=0)\n     */\n    private ?int $age = null; // years\n}\n",
            )
        })
        .idempotent()
        .run()
        .unwrap();
}

#[test]
fn test_positional_value() {
    Scenario::new("Data")
        .edit("property", Edit::property("email", Some(TypeRef::new(ValueType::String))))
        .step(
            "email",
            Edit::doc_line("email", "Assert\\Email", options! { "" => "Not an email" }),
            |a| a.contains("     * @Assert\\Email(\"Not an email\")\n"),
        )
        .run()
        .unwrap();
}

#[test]
fn test_disabled_annotations() {
    let config = ManipulatorConfig::default().with_annotations(false);

    Scenario::new("Data")
        .config(config)
        .edit("property", Edit::property("name", Some(TypeRef::new(ValueType::String))))
        .step("length", Edit::doc_line("name", "Assert\\Length", options!()), |a| {
            a.disabled()
        })
        .run()
        .unwrap();
}

#[test]
fn test_grouped_or_missing_property() {
    let source = "<?php\n\nclass Data\n{\n    private $a, $b;\n}\n";

    Scenario::new("Data")
        .source(source)
        .step("grouped", Edit::doc_line("a", "Assert\\NotNull", options!()), |a| {
            a.error("Unknown member: Data::$a")
        })
        .step("missing", Edit::doc_line("c", "Assert\\NotNull", options!()), |a| {
            a.error("Unknown member: Data::$c")
        })
        .run()
        .unwrap();
}
