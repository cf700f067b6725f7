use std::fmt;

/// Identifies a node within a single `Document`.
///
/// Ids are only meaningful for the document that produced them; they carry no
/// ownership and stay valid for the lifetime of that document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A contiguous run of comment lines attached to a flow definition key.
///
/// `start_line` is the 0-based source line of the first comment line, so the
/// line with index `i` in `lines` sits at source line `start_line + i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBlock {
    pub lines: Vec<String>,
    pub start_line: usize,
}

/// The structural kind of a document node.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// An ordered set of key-value entries. Entry order follows the source.
    Mapping { entries: Vec<NodeId> },
    /// One `key: value` pair inside a mapping. The value is absent for keys
    /// with an empty body. Flow definition keys carry their leading comment
    /// block here.
    KeyValue {
        key: String,
        value: Option<NodeId>,
        doc_comment: Option<CommentBlock>,
    },
    /// An ordered list of items.
    Sequence { items: Vec<NodeId> },
    /// A scalar value, stored as its rendered text. Null renders as "".
    Scalar { text: String },
}

#[derive(Debug, Clone)]
struct NodeData {
    parent: Option<NodeId>,
    kind: NodeKind,
}

/// The canonical in-memory model of one workflow document.
///
/// An arena of nodes with parent links, built either by the YAML loader or by
/// a host converting its own document model through [`IntoDocument`]. Once
/// built, a document is never mutated; every traversal is a pure read.
///
/// [`IntoDocument`]: crate::document::IntoDocument
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl Document {
    /// The root node. The loader guarantees this is a mapping.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0 as usize].kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0 as usize].parent
    }

    /// The rendered text of a scalar node, or `None` for structural nodes.
    pub fn scalar_text(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::Scalar { text } => Some(text),
            _ => None,
        }
    }

    /// The key text of a key-value node.
    pub fn key(&self, id: NodeId) -> Option<&str> {
        match self.kind(id) {
            NodeKind::KeyValue { key, .. } => Some(key),
            _ => None,
        }
    }

    /// The value node of a key-value node, if it has one.
    pub fn value_of(&self, id: NodeId) -> Option<NodeId> {
        match self.kind(id) {
            NodeKind::KeyValue { value, .. } => *value,
            _ => None,
        }
    }

    /// The comment block attached to a key-value node.
    pub fn doc_comment(&self, id: NodeId) -> Option<&CommentBlock> {
        match self.kind(id) {
            NodeKind::KeyValue { doc_comment, .. } => doc_comment.as_ref(),
            _ => None,
        }
    }

    /// The key-value entries of a mapping node, in source order.
    pub fn entries(&self, id: NodeId) -> &[NodeId] {
        match self.kind(id) {
            NodeKind::Mapping { entries } => entries,
            _ => &[],
        }
    }

    /// Iterates every node id of the document, in allocation order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// The items of a sequence node, in source order.
    pub fn items(&self, id: NodeId) -> &[NodeId] {
        match self.kind(id) {
            NodeKind::Sequence { items } => items,
            _ => &[],
        }
    }

    /// Looks up an entry of a mapping by exact key match. No case folding,
    /// no prefix matching.
    pub fn key_value(&self, mapping: NodeId, key: &str) -> Option<NodeId> {
        self.entries(mapping)
            .iter()
            .copied()
            .find(|&kv| self.key(kv) == Some(key))
    }

    /// Iterates the ancestors of a node, nearest first, excluding the node.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), |&cur| self.parent(cur))
    }

    /// The bounded upward walk at the heart of call-site resolution: starting
    /// at `node` (a mapping counts as its own nearest mapping), ascend through
    /// enclosing mappings until one owns an entry named `key`, and return that
    /// mapping. Returns `None` when the parent chain is exhausted.
    pub fn enclosing_mapping_with_key(&self, node: NodeId, key: &str) -> Option<NodeId> {
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            if matches!(self.kind(id), NodeKind::Mapping { .. }) {
                if self.key_value(id, key).is_some() {
                    return Some(id);
                }
            }
            cursor = self.parent(id);
        }
        None
    }

    pub(crate) fn set_doc_comment(&mut self, id: NodeId, block: CommentBlock) {
        if let NodeKind::KeyValue { doc_comment, .. } = &mut self.nodes[id.0 as usize].kind {
            *doc_comment = Some(block);
        }
    }
}

/// Incrementally builds a `Document`, wiring parent links as structure is
/// assembled. This is the construction surface for both the YAML loader and
/// host-side [`IntoDocument`] implementations.
///
/// [`IntoDocument`]: crate::document::IntoDocument
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    nodes: Vec<NodeData>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData { parent: None, kind });
        id
    }

    fn adopt(&mut self, child: NodeId, parent: NodeId) {
        self.nodes[child.0 as usize].parent = Some(parent);
    }

    pub fn scalar(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeKind::Scalar { text: text.into() })
    }

    pub fn key_value(&mut self, key: impl Into<String>, value: Option<NodeId>) -> NodeId {
        let id = self.push(NodeKind::KeyValue {
            key: key.into(),
            value,
            doc_comment: None,
        });
        if let Some(value) = value {
            self.adopt(value, id);
        }
        id
    }

    pub fn mapping(&mut self, entries: Vec<NodeId>) -> NodeId {
        let id = self.push(NodeKind::Mapping {
            entries: entries.clone(),
        });
        for entry in entries {
            self.adopt(entry, id);
        }
        id
    }

    pub fn sequence(&mut self, items: Vec<NodeId>) -> NodeId {
        let id = self.push(NodeKind::Sequence {
            items: items.clone(),
        });
        for item in items {
            self.adopt(item, id);
        }
        id
    }

    /// Attaches a leading comment block to a key-value node.
    pub fn attach_doc_comment(&mut self, kv: NodeId, block: CommentBlock) {
        if let NodeKind::KeyValue { doc_comment, .. } = &mut self.nodes[kv.0 as usize].kind {
            *doc_comment = Some(block);
        }
    }

    pub fn build(self, root: NodeId) -> Document {
        Document {
            nodes: self.nodes,
            root,
        }
    }
}
