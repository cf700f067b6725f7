//! # Flowlens - Code Intelligence for YAML Workflow DSLs
//!
//! **Flowlens** is the code-intelligence core behind editor support for a
//! YAML-based workflow DSL: when a document invokes a named flow through a
//! `call` step, flowlens resolves that reference, recovers the parameter
//! contract from the documentation comment attached to the flow definition,
//! and synthesizes a just-in-time schema type describing what the call's
//! `in:` arguments must look like. Completion and validation hosts consume
//! the synthesized schema; flowlens itself never renders a popup.
//!
//! ## Core Workflow
//!
//! The engine is designed to be host-agnostic. It operates on a canonical
//! in-memory model of a workflow document. The primary workflow is:
//!
//! 1.  **Load Your Documents**: Parse workflow YAML with [`Document::from_yaml`],
//!     or convert an editor's own document tree through the `IntoDocument` trait.
//! 2.  **Index the Project**: Add every document to a [`ProjectIndex`], which
//!     builds the flow-name index that call references resolve against.
//! 3.  **Synthesize**: Create a [`SchemaSynthesizer`] over the index and ask it
//!     for the parameter schema at any call-site node. Resolution failures,
//!     missing documentation, and unknown parameter types all degrade to safe
//!     defaults - nothing in this pipeline ever aborts the surrounding analysis.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let source = r#"
//! flows:
//!   ## Deploys one service instance.
//!   ## in:
//!   ##   name: string, mandatory, the service to deploy
//!   ##   replicas: number, optional, instance count
//!   deploy:
//!     - log: "deploying"
//!
//!   main:
//!     - call: deploy
//!       in:
//!         name: "billing"
//! "#;
//!
//!     let mut index = ProjectIndex::new();
//!     let doc_id = index.add_document(Document::from_yaml(source)?);
//!     let synthesizer = SchemaSynthesizer::new(&index);
//!
//!     // Any node inside the call step works as the starting point; here we
//!     // start from the first step of the `main` flow.
//!     let document = index.document(doc_id);
//!     let flows = document.value_of(document.key_value(document.root(), "flows").unwrap()).unwrap();
//!     let main_body = document.value_of(document.key_value(flows, "main").unwrap()).unwrap();
//!     let call_step = document.items(main_body)[0];
//!
//!     let call_site = NodeRef { doc: doc_id, node: call_step };
//!     let schema = synthesizer.in_params_schema(call_site);
//!
//!     // The synthesized schema recognizes exactly the documented parameters.
//!     assert_eq!(schema.field_names(), vec!["name", "replicas"]);
//!     println!("{}", schema);
//!     Ok(())
//! }
//! ```
//!
//! [`Document::from_yaml`]: document::Document::from_yaml
//! [`ProjectIndex`]: resolve::ProjectIndex
//! [`SchemaSynthesizer`]: synth::SchemaSynthesizer

pub mod docs;
pub mod document;
pub mod error;
pub mod prelude;
pub mod resolve;
pub mod schema;
pub mod synth;
