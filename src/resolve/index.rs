use ahash::AHashMap;

use crate::document::{Document, NodeId};
use crate::resolve::reference::{DocId, FlowReference, NodeRef, ReferenceKind, ReferenceProvider};

/// The project's view of every loaded workflow document, with a flow-name
/// index over their top-level `flows:` mappings.
///
/// The index doubles as the default [`ReferenceProvider`]: a scalar call
/// target yields one flow-definition reference that resolves through the
/// name index. The `ready` flag models the host's background indexing state;
/// while indexing is in progress every consumer short-circuits to its safe
/// default instead of resolving against a half-built index.
#[derive(Debug, Default)]
pub struct ProjectIndex {
    documents: Vec<Document>,
    flows: AHashMap<String, NodeRef>,
    indexing: bool,
}

impl ProjectIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document and indexes its flow definitions. On duplicate flow
    /// names the first definition wins, in document insertion order.
    pub fn add_document(&mut self, document: Document) -> DocId {
        let doc_id = DocId(self.documents.len() as u32);
        self.index_flows(&document, doc_id);
        self.documents.push(document);
        doc_id
    }

    pub fn document(&self, id: DocId) -> &Document {
        &self.documents[id.0 as usize]
    }

    /// The definition node (the flow's key-value entry) for a flow name.
    pub fn flow_definition(&self, name: &str) -> Option<NodeRef> {
        self.flows.get(name).copied()
    }

    /// All indexed flow names, in arbitrary order.
    pub fn flow_names(&self) -> impl Iterator<Item = &str> {
        self.flows.keys().map(String::as_str)
    }

    /// False while the host is still indexing the project.
    pub fn is_ready(&self) -> bool {
        !self.indexing
    }

    pub fn begin_indexing(&mut self) {
        self.indexing = true;
    }

    pub fn finish_indexing(&mut self) {
        self.indexing = false;
    }

    fn index_flows(&mut self, document: &Document, doc_id: DocId) {
        let Some(flows_kv) = document.key_value(document.root(), "flows") else {
            return;
        };
        let Some(flows_mapping) = document.value_of(flows_kv) else {
            return;
        };

        for &kv in document.entries(flows_mapping) {
            let Some(name) = document.key(kv) else {
                continue;
            };
            self.flows
                .entry(name.to_string())
                .or_insert(NodeRef { doc: doc_id, node: kv });
        }
    }
}

/// A by-name reference from a call target to a flow definition. Dangling
/// when the index knows no flow of that name.
struct FlowNameReference<'a> {
    index: &'a ProjectIndex,
    name: String,
}

impl FlowReference for FlowNameReference<'_> {
    fn kind(&self) -> ReferenceKind {
        ReferenceKind::FlowDefinition
    }

    fn resolve(&self) -> Option<NodeRef> {
        self.index.flow_definition(&self.name)
    }
}

impl ReferenceProvider for ProjectIndex {
    fn references<'a>(
        &'a self,
        document: &'a Document,
        _doc_id: DocId,
        value: NodeId,
    ) -> Vec<Box<dyn FlowReference + 'a>> {
        match document.scalar_text(value) {
            Some(name) if !name.is_empty() => vec![Box::new(FlowNameReference {
                index: self,
                name: name.to_string(),
            })],
            _ => Vec::new(),
        }
    }
}
