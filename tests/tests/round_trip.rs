//! Parsing then printing an unedited class gives back the same bytes.

use maker_parser::parse;
use maker_printer::render;
use maker_tests::CaseFile;
use pretty_assertions::assert_eq;

fn assert_round_trip(source: &str) {
    let class = parse(source).unwrap();
    assert_eq!(render(&class), source);
}

#[test]
fn test_case_sources_round_trip() {
    for file in ["registration_data.case", "order_exporter.case"] {
        let case = CaseFile::load(file).unwrap();
        for section in case.section_names() {
            assert_round_trip(case.section(section).unwrap());
        }
    }
}

#[test]
fn test_unusual_layouts_round_trip() {
    let sources = [
        // no trailing newline, tabs, CRLF
        "<?php\nclass A\n{\n\tprivate $a;\n}",
        "<?php\r\nnamespace App;\r\n\r\nuse B;\r\n\r\nclass A\r\n{\r\n    private $a;\r\n}\r\n",
        // braced namespace and code around the class
        "<?php\nnamespace App {\n    use B;\n\n    class A { private $x = ['{' => '}']; }\n\n    function helper() { return A::class; }\n}\n",
        // inline html and a close tag
        "<html>\n<?php\nclass A\n{\n    public $a = \"?>\";\n}\n?>\n</html>\n",
        // enum-style constants, static and readonly members, property hooks
        "<?php\nfinal readonly class A\n{\n    const X = 1, Y = 2;\n    public static ?A $instance = null;\n    public function __construct(public readonly int $id = 0) {}\n    public string $name { get => 'a'; }\n}\n",
        // empty class on one line
        "<?php class A {}",
    ];

    for source in sources {
        assert_round_trip(source);
    }
}

#[test]
fn test_edited_output_reparses_to_itself() {
    use maker_core::{TypeRef, ValueType};
    use maker_mutation::{ClassManipulator, ManipulatorConfig};

    let case = CaseFile::load("order_exporter.case").unwrap();
    let mut class = parse(case.section("source").unwrap()).unwrap();
    let mut manipulator = ClassManipulator::new(&mut class, ManipulatorConfig::default());
    manipulator
        .add_property("limit", Some(TypeRef::new(ValueType::Int)), None, &[])
        .unwrap();
    manipulator
        .add_getter("limit", Some(ValueType::Int), false)
        .unwrap();
    let once = manipulator.source_code();

    assert_round_trip(&once);
}
