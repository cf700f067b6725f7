use crate::docs::model::FlowDocumentation;
use crate::docs::parser::parse_flow_doc;
use crate::document::{Document, NodeId};

/// Defines the contract for recovering a flow's documented parameter
/// contract from its definition node.
///
/// Implementations must be total: a definition they cannot document yields
/// `None`, and declared types they cannot recognize map to
/// [`ParamType::Unknown`](crate::docs::ParamType::Unknown) rather than
/// erroring. The returned record always satisfies the name invariants
/// (non-empty, first occurrence wins).
pub trait DocumentationLookup {
    fn parse_documentation(
        &self,
        document: &Document,
        definition: NodeId,
    ) -> Option<FlowDocumentation>;
}

/// The default lookup: parses the comment block attached to the flow
/// definition key. No caching; documentation is re-parsed on every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommentDocLookup;

impl DocumentationLookup for CommentDocLookup {
    fn parse_documentation(
        &self,
        document: &Document,
        definition: NodeId,
    ) -> Option<FlowDocumentation> {
        document.doc_comment(definition).map(parse_flow_doc)
    }
}
