//! Loading and serializing TOML through the document model.
use chrono::{NaiveDate, NaiveTime};
use ted_core::{load_document, serialize_document, Document, NodeRef, Scalar, TedError};

/// Parse both sides back into `toml::Table`s so the comparison ignores layout.
fn same_toml(left: &str, right: &str) {
    let l: toml::Table = left.parse().unwrap();
    let r: toml::Table = right.parse().unwrap();
    assert_eq!(l, r, "\nleft:\n{left}\nright:\n{right}");
}

#[test]
fn blank_input_is_empty_document() {
    assert!(load_document("").unwrap().is_empty());
    assert!(load_document("\n  \n").unwrap().is_empty());
}

#[test]
fn invalid_toml_is_parse_error() {
    assert!(matches!(
        load_document("a = = 1"),
        Err(TedError::Parse(_))
    ));
}

#[test]
fn loads_every_scalar_kind() {
    let doc = load_document(
        r#"
s = "text"
b = false
i = -3
f = 0.5
ts = 1979-05-27T07:32:00Z
ldt = 1979-05-27T07:32:00
ld = 1979-05-27
lt = 07:32:00
"#,
    )
    .unwrap();

    assert_eq!(doc.get_scalar("s"), Some(&Scalar::from("text")));
    assert_eq!(doc.get_scalar("b"), Some(&Scalar::Bool(false)));
    assert_eq!(doc.get_scalar("i"), Some(&Scalar::Int(-3)));
    assert_eq!(doc.get_scalar("f"), Some(&Scalar::Float(0.5)));
    assert!(matches!(doc.get_scalar("ts"), Some(Scalar::Timestamp(_))));
    assert!(matches!(doc.get_scalar("ldt"), Some(Scalar::LocalDateTime(_))));
    assert_eq!(
        doc.get_scalar("ld"),
        Some(&Scalar::LocalDate(NaiveDate::from_ymd_opt(1979, 5, 27).unwrap()))
    );
    assert_eq!(
        doc.get_scalar("lt"),
        Some(&Scalar::LocalTime(NaiveTime::from_hms_opt(7, 32, 0).unwrap()))
    );
}

#[test]
fn round_trip_preserves_values() {
    let input = r#"
name = "svc"
when = 1979-05-27T00:32:00.999999-07:00
day = 1979-05-27
ports = [80, 443]

[db]
host = "localhost"
retries = 3

[[peers]]
id = "p1"

[[peers]]
id = "p2"
"#;
    let doc = load_document(input).unwrap();
    same_toml(&serialize_document(&doc).unwrap(), input);
}

#[test]
fn key_order_is_preserved() {
    let doc = load_document("zeta = 1\nalpha = 2\nmid = 3\n").unwrap();
    assert_eq!(serialize_document(&doc).unwrap(), "zeta = 1\nalpha = 2\nmid = 3\n");
}

#[test]
fn end_to_end_set_adds_sibling() {
    let mut doc = load_document("[a]\nb = 1\n").unwrap();
    doc.set("a.c", 2i64).unwrap();
    same_toml(&serialize_document(&doc).unwrap(), "[a]\nb = 1\nc = 2\n");
}

#[test]
fn new_tables_serialize_as_nested_tables() {
    let mut doc = Document::new();
    doc.set("x.y.z", "deep").unwrap();
    same_toml(&serialize_document(&doc).unwrap(), "[x.y]\nz = \"deep\"\n");
}

#[test]
fn array_of_tables_loads_as_array() {
    let doc = load_document("[[p]]\nid = 1\n[[p]]\nid = 2\n").unwrap();
    let items = doc.get("p").and_then(NodeRef::as_array).unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|n| n.as_table().is_some()));
}
