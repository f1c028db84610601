//! Constructor parameters and their assignments.

use maker_tests::prelude::*;

fn repository() -> Option<TypeRef> {
    Some(TypeRef::new(ValueType::Class("RepositoryInterface".into())))
}

#[test]
fn test_constructor_created_before_first_method() {
    let source = "<?php\n\nclass Service\n{\n    private RepositoryInterface $repo;\n\n    public function run(): void\n    {\n    }\n}\n";

    Scenario::new("Service")
        .source(source)
        .step("inject", Edit::constructor_param("repo", repository(), true), |a| {
            a.added().source(
                "<?php\n\nclass Service\n{\n    private RepositoryInterface $repo;\n\n    public function __construct(RepositoryInterface $repo)\n    {\n        $this->repo = $repo;\n    }\n\n    public function run(): void\n    {\n    }\n}\n",
            )
        })
        .idempotent()
        .run()
        .unwrap();
}

#[test]
fn test_parameters_accumulate_in_order() {
    Scenario::new("Service")
        .edit("property", Edit::property("repo", repository()))
        .step("first", Edit::constructor_param("repo", repository(), true), |a| {
            a.added()
        })
        .step(
            "second",
            Edit::constructor_param("clock", Some(TypeRef::nullable(ValueType::Class("ClockInterface".into()))), false),
            |a| {
                a.extended().contains(
                    "    public function __construct(RepositoryInterface $repo, ?ClockInterface $clock)\n    {\n        $this->repo = $repo;\n    }\n",
                )
            },
        )
        .step("first again", Edit::constructor_param("repo", repository(), true), |a| {
            a.already_present().count("$this->repo = $repo;", 1)
        })
        .idempotent()
        .run()
        .unwrap();
}

#[test]
fn test_existing_parameter_gets_missing_assignment() {
    let source = "<?php\n\nclass Service\n{\n    private $repo;\n\n    public function __construct($repo)\n    {\n        // wire later\n    }\n}\n";

    Scenario::new("Service")
        .source(source)
        .step("promote", Edit::constructor_param("repo", None, true), |a| {
            a.extended().contains(
                "    public function __construct($repo)\n    {\n        // wire later\n        $this->repo = $repo;\n    }\n",
            )
        })
        .idempotent()
        .run()
        .unwrap();
}

#[test]
fn test_promotion_requires_the_property() {
    Scenario::new("Service")
        .step("inject", Edit::constructor_param("repo", repository(), true), |a| {
            a.error("Unknown member: App\\Service::$repo")
        })
        .step("plain parameter", Edit::constructor_param("repo", repository(), false), |a| {
            a.added().contains("public function __construct(RepositoryInterface $repo)\n    {\n    }\n")
        })
        .run()
        .unwrap();
}

#[test]
fn test_multi_line_signature_keeps_comments() {
    let source = "<?php\n\nclass Service\n{\n    public function __construct(\n        // injected\n        $a\n    ) {\n    }\n}\n";

    Scenario::new("Service")
        .source(source)
        .step("append", Edit::constructor_param("b", None, false), |a| {
            a.extended().contains(
                "    public function __construct(\n        // injected\n        $a,\n        $b\n    )\n    {\n    }\n",
            )
        })
        .idempotent()
        .run()
        .unwrap();
}

#[test]
fn test_promoted_parameter_is_already_stored() {
    let source = "<?php\n\nclass Service\n{\n    public function __construct(private string $email)\n    {\n    }\n}\n";

    Scenario::new("Service")
        .source(source)
        .step("email", Edit::constructor_param("email", Some(TypeRef::new(ValueType::String)), true), |a| {
            a.already_present().absent("$this->email")
        })
        .run()
        .unwrap();
}
