//! Common test utilities for building workflow documents and project indexes.
use flowlens::prelude::*;

/// A workflow with a fully documented flow exercising every declared type,
/// and a call site with an `in:` block.
#[allow(dead_code)]
pub fn documented_workflow() -> &'static str {
    r#"flows:
  ##
  # Deploys one service.
  #
  # in:
  #   p1: string, mandatory, service name
  #   replicas: number, optional, instance count
  #   debug: boolean
  #   tags: array
  #   config: object
  #   extra: wibble
  ##
  flowA:
    - log: "deploying"

  main:
    - call: flowA
      in:
        p1: "billing"
"#
}

/// The minimal completion shape: one documented input, one call site.
#[allow(dead_code)]
pub fn simple_workflow() -> &'static str {
    r#"flows:
  # in:
  #   p1: string
  flowA:
    - log: "hi"

  main:
    - call: flowA
      in:
        p1: "x"
"#
}

/// A flow with steps but no documentation, plus a dangling call.
#[allow(dead_code)]
pub fn undocumented_workflow() -> &'static str {
    r#"flows:
  plain:
    - log: "one"
    - call: plain

  broken:
    - call: doesNotExist
      in:
        p1: "x"
"#
}

/// Loads a single document into a fresh index.
#[allow(dead_code)]
pub fn index_with(source: &str) -> (ProjectIndex, DocId) {
    let mut index = ProjectIndex::new();
    let doc_id = index.add_document(Document::from_yaml(source).expect("fixture must parse"));
    (index, doc_id)
}

/// The key-value node defining a flow in the document's `flows:` mapping.
#[allow(dead_code)]
pub fn flow_kv(document: &Document, name: &str) -> NodeId {
    let flows_kv = document
        .key_value(document.root(), "flows")
        .expect("fixture has a flows mapping");
    let flows = document.value_of(flows_kv).expect("flows has a body");
    document
        .key_value(flows, name)
        .unwrap_or_else(|| panic!("fixture defines flow '{}'", name))
}

/// The first step mapping of a flow's body.
#[allow(dead_code)]
pub fn first_step(document: &Document, flow: &str) -> NodeId {
    let body = document
        .value_of(flow_kv(document, flow))
        .expect("flow has a body");
    document.items(body)[0]
}

/// The `in:` mapping of a flow's first step.
#[allow(dead_code)]
pub fn in_block(document: &Document, flow: &str) -> NodeId {
    let step = first_step(document, flow);
    let in_kv = document
        .key_value(step, "in")
        .expect("step has an in block");
    document.value_of(in_kv).expect("in block has a body")
}
