use super::tree::Document;
use crate::error::DocumentConversionError;

/// A trait for host document models that can be converted into a flowlens
/// `Document`.
///
/// This is the primary extension point for making flowlens host-agnostic. An
/// editor integration that already owns a parsed document tree implements
/// this trait as a translation layer into the canonical arena model, instead
/// of round-tripping through YAML text.
///
/// # Example
///
/// ```rust
/// use flowlens::document::{Document, DocumentBuilder, IntoDocument};
/// use flowlens::error::DocumentConversionError;
///
/// // 1. A host-side tree, however the editor represents it.
/// struct HostStep { keyword: String, argument: String }
/// struct HostFlow { name: String, steps: Vec<HostStep> }
///
/// // 2. Implement `IntoDocument` for the host's top-level document.
/// struct HostDocument { flows: Vec<HostFlow> }
///
/// impl IntoDocument for HostDocument {
///     fn into_document(self) -> Result<Document, DocumentConversionError> {
///         let mut builder = DocumentBuilder::new();
///         let mut flow_entries = Vec::new();
///         for flow in self.flows {
///             let steps = flow
///                 .steps
///                 .into_iter()
///                 .map(|step| {
///                     let argument = builder.scalar(step.argument);
///                     let entry = builder.key_value(step.keyword, Some(argument));
///                     builder.mapping(vec![entry])
///                 })
///                 .collect();
///             let body = builder.sequence(steps);
///             flow_entries.push(builder.key_value(flow.name, Some(body)));
///         }
///         let flows_mapping = builder.mapping(flow_entries);
///         let flows = builder.key_value("flows", Some(flows_mapping));
///         let root = builder.mapping(vec![flows]);
///         Ok(builder.build(root))
///     }
/// }
/// ```
pub trait IntoDocument {
    /// Consumes the host model and converts it into a canonical `Document`.
    fn into_document(self) -> Result<Document, DocumentConversionError>;
}
