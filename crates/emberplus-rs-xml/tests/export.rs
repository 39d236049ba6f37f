// crates/emberplus-rs-xml/tests/export.rs

use emberplus_rs::glow::{
    Command, ElementCollection, InvocationResult, Label, Matrix, Node, Parameter, QualifiedFunction,
    QualifiedMatrix, QualifiedParameter, QualifiedTemplate, RootElementCollection, Source,
    StreamDescription, StringIntegerCollection, Template,
};
use emberplus_rs::types::{FieldFlags, MatrixType, ParameterAccess, StreamFormat};
use emberplus_rs::{GlowElement, MinMax, ParameterType, Path, Value};
use emberplus_rs_xml::{
    ExportOptions, QuickXmlSink, Skipped, export, export_to_string, export_to_string_with_options,
};
use std::fs;
use std::path::PathBuf;

/// Helper function to load a test file from the `tests/data/` directory.
fn load_test_file(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(name);

    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read test file {:?}: {}", path, e))
}

fn load_tree(name: &str) -> GlowElement {
    serde_json::from_str(&load_test_file(name))
        .unwrap_or_else(|e| panic!("Failed to parse tree {}: {}", name, e))
}

fn init_logger() {
    env_logger::builder().is_test(true).try_init().ok(); // Ignore error if already initialized
}

fn path(numbers: &[u32]) -> Path {
    Path::try_from(numbers).expect("non-empty path")
}

// --- Fixtures ---

#[test]
fn test_device_tree_matches_fixture() {
    init_logger();
    let tree = load_tree("device_tree.json");
    let xml = export_to_string(&tree).expect("export failed");
    assert_eq!(xml, load_test_file("device_tree.xml"));
}

#[test]
fn test_stream_collection_matches_fixture() {
    init_logger();
    let tree = load_tree("stream_collection.json");

    let mut sink = QuickXmlSink::new(Vec::new());
    let summary = export(&tree, &mut sink).expect("export failed");
    let xml = String::from_utf8(sink.finish().unwrap()).unwrap();

    assert_eq!(xml, load_test_file("stream_collection.xml"));
    // The null stream value keeps its StreamEntry but loses the value element.
    assert_eq!(
        summary.skipped,
        vec![Skipped::Value {
            element: "streamValue",
            parameter_type: ParameterType::NULL
        }]
    );
}

#[test]
fn test_commands_match_fixture() {
    init_logger();
    let tree = load_tree("commands.json");
    let xml = export_to_string(&tree).expect("export failed");
    assert_eq!(xml, load_test_file("commands.xml"));
}

// --- Reference scenarios ---

/// A node with one integer parameter child.
#[test]
fn test_node_with_integer_parameter() {
    init_logger();
    let tree: GlowElement = Node::new(3)
        .with_identifier("root")
        .with_children(ElementCollection::new(vec![
            Parameter::new(1).with_value(42i64).into(),
        ]))
        .into();

    assert_eq!(
        export_to_string(&tree).unwrap(),
        "<Node number=\"3\"><contents><identifier>root</identifier></contents><children>\
         <Parameter number=\"1\"><contents><value type=\"INTEGER\">42</value><type>1</type>\
         </contents></Parameter></children></Node>\n"
    );
}

/// A value with an undefined type is dropped; its siblings still render.
#[test]
fn test_undefined_value_type_is_omitted() {
    init_logger();
    let mut parameter = Parameter::new(1);
    parameter.contents.identifier = Some("broken".into());
    parameter.contents.value = Some(Value::Unsupported(ParameterType(99)));
    parameter.contents.default = Some(Value::Integer(0));

    let mut sink = QuickXmlSink::new(Vec::new());
    let summary = export(&parameter.into(), &mut sink).unwrap();
    let xml = String::from_utf8(sink.finish().unwrap()).unwrap();

    assert_eq!(
        xml,
        "<Parameter number=\"1\"><contents><identifier>broken</identifier>\
         <default type=\"INTEGER\">0</default></contents></Parameter>\n"
    );
    assert_eq!(
        summary.skipped,
        vec![Skipped::Value {
            element: "value",
            parameter_type: ParameterType(99)
        }]
    );
}

/// Present-but-empty targets are written, absent sources are not.
#[test]
fn test_matrix_empty_versus_absent_lists() {
    init_logger();
    let mut matrix = QualifiedMatrix::new(path(&[1, 2]));
    matrix.targets = Some(Vec::new());
    matrix.sources = None;

    let xml = export_to_string(&matrix.into()).unwrap();
    assert!(xml.contains("<targets></targets>"));
    assert!(!xml.contains("sources"));
}

/// A collection root has no wrapper element.
#[test]
fn test_collection_root_has_no_wrapper() {
    init_logger();
    let tree: GlowElement = ElementCollection::new(vec![
        Command::new(10).into(),
        Command::new(11).into(),
    ])
    .into();

    assert_eq!(
        export_to_string(&tree).unwrap(),
        "<Command number=\"10\"></Command><Command number=\"11\"></Command>\n"
    );
}

/// Boolean limits have no encoding.
#[test]
fn test_boolean_min_max_is_omitted() {
    init_logger();
    let mut parameter = Parameter::new(6);
    parameter.contents.minimum = Some(MinMax::Unsupported(ParameterType::BOOLEAN));
    parameter.contents.maximum = Some(MinMax::Unsupported(ParameterType::BOOLEAN));
    parameter.contents.is_online = Some(true);

    let mut sink = QuickXmlSink::new(Vec::new());
    let summary = export(&parameter.into(), &mut sink).unwrap();
    let xml = String::from_utf8(sink.finish().unwrap()).unwrap();

    assert_eq!(
        xml,
        "<Parameter number=\"6\"><contents><isOnline>true</isOnline></contents></Parameter>\n"
    );
    assert_eq!(summary.skipped.len(), 2);
    assert!(matches!(
        summary.skipped[1],
        Skipped::MinMax {
            element: "maximum",
            ..
        }
    ));
}

// --- Other roots and kinds ---

#[test]
fn test_invocation_result() {
    init_logger();
    let result = InvocationResult {
        invocation_id: Some(5),
        success: Some(true),
        result: Some(vec![Value::Real(0.25), Value::Octets(vec![0x0a])]),
    };
    assert_eq!(
        export_to_string(&result.into()).unwrap(),
        "<Root type=\"InvocationResult\" invocationId=\"5\"><success>true</success><result>\
         <Value type=\"REAL\">0.25</Value><Value type=\"OCTET STRING\">0A</Value></result></Root>\n"
    );
}

#[test]
fn test_invocation_result_without_id() {
    init_logger();
    let xml = export_to_string(&InvocationResult::default().into()).unwrap();
    assert_eq!(xml, "<Root type=\"InvocationResult\"></Root>\n");
}

#[test]
fn test_qualified_template_wraps_matrix() {
    init_logger();
    let mut template = QualifiedTemplate::new(path(&[2, 1]));
    template.element = Some(Box::new(Matrix::new(0).into()));

    assert_eq!(
        export_to_string(&template.into()).unwrap(),
        "<QualifiedTemplate path=\"2.1\"><element><Matrix number=\"0\"></Matrix></element>\
         </QualifiedTemplate>\n"
    );
}

#[test]
fn test_sub_container_writes_nothing() {
    init_logger();
    let mut sink = QuickXmlSink::new(Vec::new());
    let summary = export(&GlowElement::SubContainer, &mut sink).unwrap();
    assert_eq!(String::from_utf8(sink.finish().unwrap()).unwrap(), "\n");
    assert_eq!(summary.elements, 0);
    assert_eq!(summary.skipped, vec![Skipped::SubContainer]);
}

#[test]
fn test_text_is_escaped() {
    init_logger();
    let tree: GlowElement = Node::new(1).with_identifier("in & <out>").into();
    assert_eq!(
        export_to_string(&tree).unwrap(),
        "<Node number=\"1\"><contents><identifier>in &amp; &lt;out&gt;</identifier>\
         </contents></Node>\n"
    );
}

#[test]
fn test_export_is_deterministic() {
    init_logger();
    let tree = load_tree("device_tree.json");
    let first = export_to_string(&tree).unwrap();
    let second = export_to_string(&tree).unwrap();
    assert_eq!(first, second);
}

/// Every parameter field present. Assigned in reverse, written in declaration order.
#[test]
fn test_qualified_parameter_field_order() {
    init_logger();
    let mut parameter = QualifiedParameter::new(path(&[1, 3]));
    let contents = &mut parameter.contents;
    contents.stream_descriptor = Some(StreamDescription {
        format: StreamFormat::SIGNED_INT16_BIG_ENDIAN,
        offset: 2,
    });
    let mut enum_map = StringIntegerCollection::new();
    enum_map.push("Low", 0);
    contents.enum_map = Some(enum_map);
    contents.stream_identifier = Some(4);
    contents.is_online = Some(true);
    contents.parameter_type = Some(ParameterType::INTEGER);
    contents.access = Some(ParameterAccess::READ_WRITE);
    contents.step = Some(1);
    contents.format = Some("dB".into());
    contents.factor = Some(10);
    contents.enumeration = Some("Low\nHigh".into());
    contents.default = Some(Value::Integer(0));
    contents.maximum = Some(MinMax::Integer(15));
    contents.minimum = Some(MinMax::Integer(-128));
    contents.value = Some(Value::Integer(-20));
    contents.description = Some("Main volume".into());
    contents.identifier = Some("volume".into());

    assert_eq!(
        export_to_string(&parameter.into()).unwrap(),
        "<QualifiedParameter path=\"1.3\"><contents><identifier>volume</identifier>\
         <description>Main volume</description><value type=\"INTEGER\">-20</value>\
         <minimum type=\"INTEGER\">-128</minimum><maximum type=\"INTEGER\">15</maximum>\
         <default type=\"INTEGER\">0</default><enumeration>Low\nHigh</enumeration>\
         <factor>10</factor><format>dB</format><step>1</step><access>3</access><type>1</type>\
         <isOnline>true</isOnline><streamIdentifier>4</streamIdentifier><enumMap>\
         <StringIntegerPair entryString=\"Low\" entryInteger=\"0\"></StringIntegerPair></enumMap>\
         <streamDescriptor><format>10</format><offset>2</offset></streamDescriptor></contents>\
         </QualifiedParameter>\n"
    );
}

#[test]
fn test_qualified_function() {
    init_logger();
    let mut function = QualifiedFunction::new(path(&[2, 5]));
    function.contents.identifier = Some("fire".into());
    function.children = Some(ElementCollection::default());

    assert_eq!(
        export_to_string(&function.into()).unwrap(),
        "<QualifiedFunction path=\"2.5\"><contents><identifier>fire</identifier></contents>\
         <children></children></QualifiedFunction>\n"
    );
}

#[test]
fn test_matrix_sources() {
    init_logger();
    let mut matrix = Matrix::new(1);
    matrix.sources = Some(vec![Source { number: 0 }, Source { number: 7 }]);

    assert_eq!(
        export_to_string(&matrix.into()).unwrap(),
        "<Matrix number=\"1\"><sources><Source number=\"0\"></Source>\
         <Source number=\"7\"></Source></sources></Matrix>\n"
    );
}

#[test]
fn test_empty_root_element_collection() {
    init_logger();
    let xml = export_to_string(&RootElementCollection::default().into()).unwrap();
    assert_eq!(xml, "<Root type=\"ElementCollection\"></Root>\n");
}

#[test]
fn test_bare_template() {
    init_logger();
    let xml = export_to_string(&Template::new(9).into()).unwrap();
    assert_eq!(xml, "<Template number=\"9\"></Template>\n");
}

/// Codes the protocol does not define are written as decoded.
#[test]
fn test_undefined_codes_are_written_verbatim() {
    init_logger();
    let mut parameter = Parameter::new(1);
    parameter.contents.access = Some(ParameterAccess(7));
    parameter.contents.stream_descriptor = Some(StreamDescription {
        format: StreamFormat(1),
        offset: 0,
    });
    let mut matrix = Matrix::new(2);
    matrix.contents.matrix_type = Some(MatrixType(5));
    let tree: GlowElement = ElementCollection::new(vec![
        parameter.into(),
        matrix.into(),
        Command::get_directory(Some(FieldFlags(9))).into(),
    ])
    .into();

    assert_eq!(
        export_to_string(&tree).unwrap(),
        "<Parameter number=\"1\"><contents><access>7</access><streamDescriptor><format>1</format>\
         <offset>0</offset></streamDescriptor></contents></Parameter><Matrix number=\"2\">\
         <contents><type>5</type></contents></Matrix><Command number=\"32\">\
         <dirFieldMask>9</dirFieldMask></Command>\n"
    );
}

#[test]
fn test_undefined_code_from_json() {
    init_logger();
    let tree: GlowElement =
        serde_json::from_str(r#"{ "Parameter": { "number": 1, "contents": { "access": 7 } } }"#)
            .expect("open codes deserialize from integers");
    assert_eq!(
        export_to_string(&tree).unwrap(),
        "<Parameter number=\"1\"><contents><access>7</access></contents></Parameter>\n"
    );
}

/// Whitespace in attribute values is written as character references.
#[test]
fn test_label_description_whitespace() {
    init_logger();
    let mut matrix = Matrix::new(1);
    matrix.contents.labels = Some(vec![Label {
        base_path: path(&[1, 1000]),
        description: "Main\nBackup\tB".into(),
    }]);
    let xml = export_to_string(&matrix.into()).unwrap();
    assert!(xml.contains("<Label basePath=\"1.1000\" description=\"Main&#xA;Backup&#x9;B\">"));
}

#[test]
fn test_text_quotes_are_not_escaped() {
    init_logger();
    let tree: GlowElement = Node::new(1).with_identifier("it's \"x\"").into();
    assert_eq!(
        export_to_string(&tree).unwrap(),
        "<Node number=\"1\"><contents><identifier>it's \"x\"</identifier></contents></Node>\n"
    );
}

// --- Options ---

#[test]
fn test_custom_line_ending_and_declaration() {
    init_logger();
    let options = ExportOptions::new()
        .with_line_ending("\r\n")
        .with_xml_declaration(true);
    let xml = export_to_string_with_options(&Node::new(1).into(), &options).unwrap();
    assert_eq!(
        xml,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\r\n<Node number=\"1\"></Node>\r\n"
    );
}

#[test]
fn test_indentation_keeps_content() {
    init_logger();
    let tree = load_tree("device_tree.json");
    let compact = export_to_string(&tree).unwrap();
    let indented =
        export_to_string_with_options(&tree, &ExportOptions::new().with_indent(' ', 2)).unwrap();

    assert_ne!(compact, indented);
    assert!(indented.contains("\n  <QualifiedNode path=\"1\">"));
    let strip = |s: &str| s.lines().map(str::trim).collect::<String>();
    assert_eq!(strip(&compact), strip(&indented));
}
