//! Tests for the flow documentation model and the comment grammar.
mod common;
use common::*;
use flowlens::docs::{CommentDocLookup, DocumentationLookup, parse_flow_doc};
use flowlens::document::CommentBlock;
use flowlens::prelude::*;

fn block(lines: &[&str]) -> CommentBlock {
    CommentBlock {
        lines: lines.iter().map(|s| s.to_string()).collect(),
        start_line: 0,
    }
}

#[test]
fn test_param_type_from_declared() {
    assert_eq!(ParamType::from_declared("string"), ParamType::String);
    assert_eq!(ParamType::from_declared("Boolean"), ParamType::Boolean);
    assert_eq!(ParamType::from_declared("bool"), ParamType::Boolean);
    assert_eq!(ParamType::from_declared(" number "), ParamType::Number);
    assert_eq!(ParamType::from_declared("int"), ParamType::Number);
    assert_eq!(ParamType::from_declared("array"), ParamType::Array);
    assert_eq!(ParamType::from_declared("object"), ParamType::Object);
    assert_eq!(ParamType::from_declared("map"), ParamType::Object);
    // Unrecognized text never errors.
    assert_eq!(ParamType::from_declared("wibble"), ParamType::Unknown);
    assert_eq!(ParamType::from_declared(""), ParamType::Unknown);
}

#[test]
fn test_parse_description_and_params() {
    let doc = parse_flow_doc(&block(&[
        "Deploys one service.",
        "",
        "in:",
        "  name: string, mandatory, the service to deploy",
        "  replicas: number, optional, instance count",
        "out:",
        "  result: boolean, whether it worked",
    ]));

    assert_eq!(doc.description(), Some("Deploys one service."));

    let names: Vec<_> = doc.in_params().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["name", "replicas"]);

    let name = doc.in_param("name").unwrap();
    assert_eq!(name.ty, ParamType::String);
    assert!(name.required);
    assert_eq!(name.description.as_deref(), Some("the service to deploy"));

    let replicas = doc.in_param("replicas").unwrap();
    assert_eq!(replicas.ty, ParamType::Number);
    assert!(!replicas.required);

    assert_eq!(doc.out_params().len(), 1);
    assert_eq!(doc.out_params()[0].ty, ParamType::Boolean);
}

#[test]
fn test_parse_anchor_lines() {
    let mut b = block(&["in:", "  a: string", "  b: number"]);
    b.start_line = 10;
    let doc = parse_flow_doc(&b);

    assert_eq!(doc.in_param("a").unwrap().anchor_line, 11);
    assert_eq!(doc.in_param("b").unwrap().anchor_line, 12);
}

#[test]
fn test_duplicate_names_first_wins() {
    let doc = parse_flow_doc(&block(&[
        "in:",
        "  p: string, first",
        "  p: number, second",
    ]));

    assert_eq!(doc.in_params().len(), 1);
    let p = doc.in_param("p").unwrap();
    assert_eq!(p.ty, ParamType::String);
    assert_eq!(p.description.as_deref(), Some("first"));
}

#[test]
fn test_unparseable_lines_are_skipped() {
    let doc = parse_flow_doc(&block(&[
        "in:",
        "  just some prose without structure",
        "  : string, nameless",
        "  ok: string",
    ]));

    let names: Vec<_> = doc.in_params().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["ok"]);
}

#[test]
fn test_bare_type_entry() {
    let doc = parse_flow_doc(&block(&["in:", "  flag: boolean"]));
    let flag = doc.in_param("flag").unwrap();
    assert_eq!(flag.ty, ParamType::Boolean);
    assert!(!flag.required);
    assert_eq!(flag.description, None);
}

#[test]
fn test_missing_in_section_yields_empty_contract() {
    let doc = parse_flow_doc(&block(&["Just a description, nothing declared."]));
    assert!(doc.is_empty());
    assert!(doc.description().is_some());
}

#[test]
fn test_in_param_lookup_is_exact() {
    let doc = parse_flow_doc(&block(&["in:", "  name: string"]));
    assert!(doc.in_param("name").is_some());
    assert!(doc.in_param("Name").is_none());
    assert!(doc.in_param("nam").is_none());
}

#[test]
fn test_comment_lookup_on_documents() {
    let (index, doc_id) = index_with(documented_workflow());
    let document = index.document(doc_id);

    let lookup = CommentDocLookup;
    let doc = lookup
        .parse_documentation(document, flow_kv(document, "flowA"))
        .expect("flowA is documented");
    assert_eq!(doc.in_params().len(), 6);
    assert_eq!(doc.in_param("extra").unwrap().ty, ParamType::Unknown);
    // The anchor points at the comment line declaring p1.
    assert_eq!(doc.in_param("p1").unwrap().anchor_line, 5);

    assert!(
        lookup
            .parse_documentation(document, flow_kv(document, "main"))
            .is_none()
    );
}

#[test]
fn test_record_invariants_at_construction() {
    let params = vec![
        ParamDocumentation {
            name: String::new(),
            ty: ParamType::String,
            required: false,
            description: None,
            anchor_line: 0,
        },
        ParamDocumentation {
            name: "kept".to_string(),
            ty: ParamType::String,
            required: false,
            description: None,
            anchor_line: 1,
        },
    ];
    let doc = FlowDocumentation::new(None, params, Vec::new());

    // The empty name is dropped at construction.
    assert_eq!(doc.in_params().len(), 1);
    assert_eq!(doc.in_params()[0].name, "kept");
}

#[test]
fn test_documentation_serializes_to_json() {
    let doc = FlowDocumentation::new(
        Some("Deploys a service".to_string()),
        vec![ParamDocumentation {
            name: "replicas".to_string(),
            ty: ParamType::Number,
            required: true,
            description: Some("instance count".to_string()),
            anchor_line: 3,
        }],
        Vec::new(),
    );

    let json = serde_json::to_string(&doc).unwrap();
    // Declared types serialize as their lowercase names.
    assert!(json.contains(r#""ty":"number""#));
    assert!(json.contains(r#""name":"replicas""#));

    let restored: FlowDocumentation = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, doc);
}
