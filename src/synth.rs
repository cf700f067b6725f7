use crate::docs::{CommentDocLookup, DocumentationLookup, FlowDocumentation};
use crate::document::{Document, NodeId, NodeKind};
use crate::resolve::{
    NodeRef, ProjectIndex, ReferenceProvider, SourceAnchor, resolve_call_target,
};
use crate::schema::{
    ANY_OBJECT_SCHEMA, EXPRESSION_SCHEMA, ObjectSchema, SchemaField, SchemaType, param_schema,
    step_element_schema,
};

/// Synthesizes call-site parameter schemas on demand.
///
/// A `SchemaSynthesizer` borrows the project's [`ProjectIndex`] and is driven
/// directly by the host's completion/validation thread. Every public
/// operation is synchronous, side-effect-free, and total: a dangling call
/// reference, absent documentation, or an unparseable parameter degrades to
/// the documented safe default (`None` or the generic object schema) rather
/// than surfacing a failure. Nothing is cached; documentation is re-resolved
/// on every request, so results can never go stale after an edit.
pub struct SchemaSynthesizer<'p> {
    index: &'p ProjectIndex,
    references: &'p dyn ReferenceProvider,
    documentation: Box<dyn DocumentationLookup + 'p>,
}

/// Builder for a [`SchemaSynthesizer`], with the collaborator seams as
/// extension points. Defaults: the index itself resolves references, and
/// documentation comes from the comment block preceding each definition.
pub struct SchemaSynthesizerBuilder<'p> {
    index: &'p ProjectIndex,
    references: Option<&'p dyn ReferenceProvider>,
    documentation: Option<Box<dyn DocumentationLookup + 'p>>,
}

impl<'p> SchemaSynthesizerBuilder<'p> {
    pub fn new(index: &'p ProjectIndex) -> Self {
        Self {
            index,
            references: None,
            documentation: None,
        }
    }

    /// Overrides the reference-resolution substrate.
    pub fn with_reference_provider(mut self, provider: &'p dyn ReferenceProvider) -> Self {
        self.references = Some(provider);
        self
    }

    /// Overrides the documentation lookup collaborator.
    pub fn with_documentation_lookup(
        mut self,
        lookup: Box<dyn DocumentationLookup + 'p>,
    ) -> Self {
        self.documentation = Some(lookup);
        self
    }

    pub fn build(self) -> SchemaSynthesizer<'p> {
        SchemaSynthesizer {
            index: self.index,
            references: self.references.unwrap_or(self.index),
            documentation: self
                .documentation
                .unwrap_or_else(|| Box::new(CommentDocLookup)),
        }
    }
}

impl<'p> SchemaSynthesizer<'p> {
    pub fn builder(index: &'p ProjectIndex) -> SchemaSynthesizerBuilder<'p> {
        SchemaSynthesizerBuilder::new(index)
    }

    /// A synthesizer with the default collaborators.
    pub fn new(index: &'p ProjectIndex) -> Self {
        Self::builder(index).build()
    }

    /// Resolves the flow definition targeted by the call enclosing `at`.
    /// `None` while the index is not ready, when no enclosing `call` exists,
    /// or when every attached reference dangles.
    pub fn resolve_target_definition(&self, at: NodeRef) -> Option<NodeRef> {
        if !self.index.is_ready() {
            return None;
        }
        let document = self.index.document(at.doc);
        resolve_call_target(document, at.doc, at.node, self.references)
    }

    /// The schema of the `in:` parameter block for the call enclosing `at`.
    ///
    /// With documented parameters this is an object schema recognizing
    /// exactly those names, each typed through the parameter mapper. In
    /// every other case (index not ready, resolution failed, documentation
    /// absent or empty) it degenerates to the generic object schema, which
    /// accepts any field. Each call allocates a fresh schema; no identity
    /// persists across invocations.
    pub fn in_params_schema(&self, at: NodeRef) -> SchemaType {
        let Some((target, documentation)) = self.flow_documentation(at) else {
            return ANY_OBJECT_SCHEMA.clone();
        };
        if documentation.is_empty() {
            return ANY_OBJECT_SCHEMA.clone();
        }

        let document = self.index.document(target.doc);
        let flow_name = document.key(target.node).unwrap_or("call");
        let fields = documentation
            .in_params()
            .iter()
            .map(|param| SchemaField {
                name: param.name.clone(),
                ty: param_schema(param.ty),
            })
            .collect();
        SchemaType::Object(ObjectSchema::new(format!("{flow_name} in params"), fields))
    }

    /// Navigates from one call argument back to its documented parameter:
    /// `at` names a key-value entry inside a call's `in:` block, and the
    /// result anchors the documentation line declaring that parameter.
    /// `None` when the parameter is undocumented or resolution failed.
    pub fn in_param_definition_target(&self, at: NodeRef) -> Option<SourceAnchor> {
        if !self.index.is_ready() {
            return None;
        }
        let document = self.index.document(at.doc);
        let name = document.key(at.node)?;

        let (target, documentation) = self.flow_documentation(at)?;
        let param = documentation.in_param(name)?;
        Some(SourceAnchor {
            doc: target.doc,
            line: param.anchor_line,
        })
    }

    /// The polymorphic type of a call's parameter block: either a bare
    /// expression string or a structured object per [`in_params_schema`].
    /// The expression alternative is always present, whatever the
    /// documentation state.
    ///
    /// [`in_params_schema`]: Self::in_params_schema
    pub fn call_param_block_type(&self, at: NodeRef) -> SchemaType {
        SchemaType::AnyOf(vec![EXPRESSION_SCHEMA.clone(), self.in_params_schema(at)])
    }

    /// Key suggestions for the position `at`: documented parameter names
    /// inside a call's `in:` block, the step keyword set inside a flow body,
    /// empty anywhere else.
    pub fn suggest_keys(&self, at: NodeRef) -> Vec<String> {
        if !self.index.is_ready() {
            return Vec::new();
        }
        let document = self.index.document(at.doc);

        if in_params_block(document, at.node) {
            return self
                .in_params_schema(at)
                .field_names()
                .into_iter()
                .map(str::to_string)
                .collect();
        }
        if in_flow_body(document, at.node) {
            return step_element_schema()
                .field_names()
                .into_iter()
                .map(str::to_string)
                .collect();
        }
        Vec::new()
    }

    fn flow_documentation(&self, at: NodeRef) -> Option<(NodeRef, FlowDocumentation)> {
        let target = self.resolve_target_definition(at)?;
        let document = self.index.document(target.doc);
        let documentation = self
            .documentation
            .parse_documentation(document, target.node)?;
        Some((target, documentation))
    }
}

fn nearest_mapping(document: &Document, node: NodeId) -> Option<NodeId> {
    std::iter::once(node)
        .chain(document.ancestors(node))
        .find(|&id| matches!(document.kind(id), NodeKind::Mapping { .. }))
}

/// True when `node` sits inside the `in:` mapping of a call step.
fn in_params_block(document: &Document, node: NodeId) -> bool {
    let Some(mapping) = nearest_mapping(document, node) else {
        return false;
    };
    let Some(in_kv) = document.parent(mapping) else {
        return false;
    };
    if document.key(in_kv) != Some("in") {
        return false;
    }
    let Some(call_mapping) = document.parent(in_kv) else {
        return false;
    };
    document.key_value(call_mapping, "call").is_some()
}

/// True when `node` sits inside a flow body: some enclosing sequence is the
/// value of a definition key under the document's top-level `flows:` mapping.
fn in_flow_body(document: &Document, node: NodeId) -> bool {
    std::iter::once(node)
        .chain(document.ancestors(node))
        .filter(|&id| matches!(document.kind(id), NodeKind::Sequence { .. }))
        .any(|seq| {
            let Some(flow_kv) = document.parent(seq) else {
                return false;
            };
            if document.key(flow_kv).is_none() {
                return false;
            }
            let Some(flows_mapping) = document.parent(flow_kv) else {
                return false;
            };
            let Some(flows_kv) = document.parent(flows_mapping) else {
                return false;
            };
            document.key(flows_kv) == Some("flows")
                && document.parent(flows_kv) == Some(document.root())
        })
}
