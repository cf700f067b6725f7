use std::fmt;

use crate::document::{Document, NodeId};

/// Identifies a document within a [`ProjectIndex`](crate::resolve::ProjectIndex).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocId(pub(crate) u32);

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc{}", self.0)
    }
}

/// A node addressed across the whole project. A weak, lookup-only edge:
/// produced per resolution request and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub doc: DocId,
    pub node: NodeId,
}

/// A source position across the whole project, used to navigate from a call
/// argument back to its documented parameter. `line` is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceAnchor {
    pub doc: DocId,
    pub line: usize,
}

/// The kind tag a reference reports. The resolver only follows
/// `FlowDefinition` references and skips everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    FlowDefinition,
    Other,
}

/// One reference attached to a call-target value. Resolution may fail
/// (a dangling reference); failure is an ordinary `None`, never an error.
pub trait FlowReference {
    fn kind(&self) -> ReferenceKind;
    fn resolve(&self) -> Option<NodeRef>;
}

/// The reference-resolution substrate: enumerates the references attached to
/// a value node, in whatever order the substrate reports them. The resolver
/// never re-sorts this order.
pub trait ReferenceProvider {
    fn references<'a>(
        &'a self,
        document: &'a Document,
        doc_id: DocId,
        value: NodeId,
    ) -> Vec<Box<dyn FlowReference + 'a>>;
}
