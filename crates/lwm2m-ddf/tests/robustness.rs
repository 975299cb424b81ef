//! Integration tests focused on error containment and edge cases.
//!
//! The fail-soft entry points must return an empty list for any broken
//! document, while the `try_*` forms report why.

use lwm2m_ddf::{DdfError, DdfParser, ResourceType};
use std::path::PathBuf;

/// A minimal valid document used as a base for creating corrupted test cases.
const MINIMAL_VALID_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<LWM2M>
  <Object ObjectType="MODefinition">
    <Name>Temperature</Name>
    <ObjectID>3303</ObjectID>
    <MultipleInstances>Multiple</MultipleInstances>
    <Mandatory>Optional</Mandatory>
    <Resources>
      <Item ID="5700">
        <Name>Sensor Value</Name>
        <Operations>R</Operations>
        <Type>Float</Type>
        <Units>Cel</Units>
      </Item>
    </Resources>
  </Object>
  <Object ObjectType="MODefinition">
    <Name>Humidity</Name>
    <ObjectID>3304</ObjectID>
  </Object>
</LWM2M>"#;

fn parse(xml: &str) -> Vec<lwm2m_ddf::ObjectModel> {
    // Shows the contained errors when run with RUST_LOG=debug.
    let _ = env_logger::builder().is_test(true).try_init();
    DdfParser::new().parse_str(xml, Some("robustness"))
}

#[test]
fn test_baseline_is_valid() {
    let objects = parse(MINIMAL_VALID_XML);
    assert_eq!(objects.len(), 2);
    assert_eq!(
        objects[0].resource(5700).unwrap().resource_type,
        ResourceType::Float
    );
}

/// An unclosed tag yields no objects and no panic.
#[test]
fn test_malformed_xml_syntax() {
    let xml = "<LWM2M><Object><ObjectID>3</ObjectID> ... missing closing tags";
    assert!(parse(xml).is_empty());
    assert!(DdfParser::new().try_parse_str(xml, None).is_err());
}

#[test]
fn test_truncated_file() {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/data/truncated.xml");

    let parser = DdfParser::new();
    assert!(parser.parse_file(&path).is_empty());
    assert!(parser.try_parse_file(&path).is_err());
}

/// An unknown Operations literal discards the whole document, valid objects included.
#[test]
fn test_unknown_operations_discards_document() {
    let xml = MINIMAL_VALID_XML.replace("<Operations>R</Operations>", "<Operations>ZZ</Operations>");
    assert!(parse(&xml).is_empty());

    let result = DdfParser::new().try_parse_str(&xml, None);
    assert!(
        matches!(result, Err(DdfError::UnknownOperations(ref v)) if v == "ZZ"),
        "Expected UnknownOperations, got {:?}",
        result
    );
}

/// An unknown Type literal is absorbed (contrast with Operations).
#[test]
fn test_unknown_type_is_absorbed() {
    let xml = MINIMAL_VALID_XML.replace("<Type>Float</Type>", "<Type>Foo</Type>");
    let objects = parse(&xml);
    assert_eq!(objects.len(), 2);
    assert_eq!(
        objects[0].resource(5700).unwrap().resource_type,
        ResourceType::String
    );
}

#[test]
fn test_non_numeric_object_id() {
    let xml = MINIMAL_VALID_XML.replace("<ObjectID>3304</ObjectID>", "<ObjectID>33o4</ObjectID>");
    assert!(parse(&xml).is_empty());
    assert!(matches!(
        DdfParser::new().try_parse_str(&xml, None),
        Err(DdfError::InvalidInteger { field: "ObjectID", .. })
    ));
}

#[test]
fn test_missing_object_id() {
    let xml = MINIMAL_VALID_XML.replace("<ObjectID>3304</ObjectID>", "");
    assert!(parse(&xml).is_empty());
    assert!(matches!(
        DdfParser::new().try_parse_str(&xml, None),
        Err(DdfError::MissingElement { element: "ObjectID" })
    ));
}

#[test]
fn test_missing_item_id() {
    let xml = MINIMAL_VALID_XML.replace(r#"<Item ID="5700">"#, "<Item>");
    assert!(parse(&xml).is_empty());
    assert!(matches!(
        DdfParser::new().try_parse_str(&xml, None),
        Err(DdfError::MissingAttribute {
            element: "Item",
            attribute: "ID"
        })
    ));
}

#[test]
fn test_non_numeric_item_id() {
    let xml = MINIMAL_VALID_XML.replace(r#"ID="5700""#, r#"ID="0x1644""#);
    assert!(parse(&xml).is_empty());
}

/// A root without objects is a valid, empty description.
#[test]
fn test_no_objects_is_not_an_error() {
    let result = DdfParser::new().try_parse_str("<LWM2M><Comment>nothing here</Comment></LWM2M>", None);
    assert!(result.unwrap().is_empty());
}

#[test]
fn test_empty_input() {
    assert!(parse("").is_empty());
    assert!(matches!(
        DdfParser::new().try_parse_str("", None),
        Err(DdfError::Xml(_))
    ));
}

#[test]
fn test_not_xml_at_all() {
    assert!(parse("ObjectID: 3\nName: Device\n").is_empty());
}

#[test]
fn test_invalid_utf8_stream() {
    let mut bytes = b"<LWM2M><Object><ObjectID>1</ObjectID><Name>".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe]);
    bytes.extend_from_slice(b"</Name></Object></LWM2M>");

    let objects = DdfParser::new().parse_reader(bytes.as_slice(), Some("binary"));
    assert!(objects.is_empty());
}

/// Only UTF-8 input is read; a Latin-1 file is rejected whatever its declaration says.
#[test]
fn test_latin1_document_is_rejected() {
    let mut bytes = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n<LWM2M><Object><ObjectID>1</ObjectID><Name>Capteur de temp".to_vec();
    bytes.push(0xe9);
    bytes.extend_from_slice(b"rature</Name></Object></LWM2M>");

    let parser = DdfParser::new();
    assert!(parser.parse_reader(bytes.as_slice(), Some("latin1.xml")).is_empty());
    assert!(matches!(
        parser.try_parse_reader(bytes.as_slice(), None),
        Err(DdfError::Io(_))
    ));
}

/// Windows line endings in field text are normalized to `\n`.
#[test]
fn test_crlf_line_endings_are_normalized() {
    let xml = MINIMAL_VALID_XML.replace('\n', "\r\n").replace(
        "<Name>Humidity</Name>",
        "<Name>Humidity</Name><Description1>Relative\r\nhumidity\rreading</Description1>",
    );
    let objects = parse(&xml);
    assert_eq!(objects.len(), 2);
    assert_eq!(
        objects[1].description.as_deref(),
        Some("Relative\nhumidity\nreading")
    );
    assert_eq!(objects[0].resource(5700).unwrap().units.as_deref(), Some("Cel"));
}

/// Entities declared in an internal DOCTYPE subset are expanded.
#[test]
fn test_doctype_entities_are_expanded() {
    let xml = MINIMAL_VALID_XML
        .replace(
            "<LWM2M>",
            "<!DOCTYPE LWM2M [\n  <!ENTITY version \"2.0\">\n  <!ENTITY unit \"Cel\">\n]>\n<LWM2M>",
        )
        .replace("<Name>Humidity</Name>", "<Name>Humidity</Name><ObjectVersion>&version;</ObjectVersion>")
        .replace("<Units>Cel</Units>", "<Units>&unit;</Units>");
    let objects = parse(&xml);
    assert_eq!(objects.len(), 2);
    assert_eq!(objects[1].version, "2.0");
    assert_eq!(objects[0].resource(5700).unwrap().units.as_deref(), Some("Cel"));
}

/// A reference to an entity the DOCTYPE does not declare breaks the document.
#[test]
fn test_undeclared_entity_is_rejected() {
    let xml = MINIMAL_VALID_XML.replace("<Units>Cel</Units>", "<Units>&unit;</Units>");
    assert!(parse(&xml).is_empty());
    assert!(matches!(
        DdfParser::new().try_parse_str(&xml, None),
        Err(DdfError::Xml(_))
    ));
}

/// XML entities and CDATA are decoded in field text.
#[test]
fn test_xml_entity_decoding() {
    let xml = MINIMAL_VALID_XML.replace(
        "<Name>Humidity</Name>",
        "<Name>Humidity &amp; Dew <![CDATA[<Point>]]></Name>",
    );
    let objects = parse(&xml);
    assert_eq!(objects[1].name.as_deref(), Some("Humidity & Dew <Point>"));
}

/// Unknown elements at every level are ignored.
#[test]
fn test_unknown_elements_everywhere() {
    let xml = MINIMAL_VALID_XML
        .replace("<LWM2M>", "<LWM2M><Vendor>acme</Vendor>")
        .replace("<Resources>", "<Resources><Note>ignore me</Note>")
        .replace("<Units>Cel</Units>", "<Units>Cel</Units><Extra><Deep/></Extra>");
    let objects = parse(&xml);
    assert_eq!(objects.len(), 2);
    assert_eq!(objects[0].resources.len(), 1);
}

/// Element names are matched case-sensitively.
#[test]
fn test_field_names_are_case_sensitive() {
    let xml = MINIMAL_VALID_XML.replace("<Name>Humidity</Name>", "<name>Humidity</name>");
    let objects = parse(&xml);
    assert_eq!(objects[1].name, None);
}

/// Objects nested in a wrapper element below the root are still found.
#[test]
fn test_objects_below_wrapper_element() {
    let xml = "<LWM2M><Group><Object><ObjectID>9</ObjectID></Object></Group><Object><ObjectID>10</ObjectID></Object></LWM2M>";
    let ids: Vec<_> = parse(xml).iter().map(|o| o.id).collect();
    assert_eq!(ids, [9, 10]);
}
