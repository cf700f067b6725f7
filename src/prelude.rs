//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! flowlens crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use flowlens::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load the workflow documents of the project
//! let source = std::fs::read_to_string("path/to/workflow.concord.yaml")?;
//!
//! let mut index = ProjectIndex::new();
//! let doc_id = index.add_document(Document::from_yaml(&source)?);
//!
//! // Synthesize the parameter schema for a call site
//! let synthesizer = SchemaSynthesizer::new(&index);
//! let call_site = NodeRef { doc: doc_id, node: index.document(doc_id).root() };
//! let schema = synthesizer.in_params_schema(call_site);
//!
//! println!("Call parameter schema: {}", schema);
//! # Ok(())
//! # }
//! ```

// Core resolution and synthesis
pub use crate::resolve::{DocId, NodeRef, ProjectIndex, SourceAnchor};
pub use crate::synth::SchemaSynthesizer;

// Document model
pub use crate::document::{Document, DocumentBuilder, IntoDocument, NodeId, NodeKind};

// Documentation records
pub use crate::docs::{FlowDocumentation, ParamDocumentation, ParamType};

// Schema types
pub use crate::schema::{ObjectSchema, SchemaField, SchemaType, param_schema};

// Error types
pub use crate::error::{DocumentConversionError, DocumentError};

// Standard library re-exports commonly used with this crate
pub use std::path::Path;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
