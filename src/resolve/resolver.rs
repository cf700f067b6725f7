use crate::document::{Document, NodeId};
use crate::resolve::reference::{DocId, NodeRef, ReferenceKind, ReferenceProvider};

/// Resolves the flow definition targeted by the call enclosing `node`.
///
/// Ascends from `node` to the nearest enclosing mapping that owns a `call`
/// entry, then follows the references attached to that entry's value: the
/// first reference that is tagged as a flow definition and resolves to a
/// live node wins, in the order the substrate reported them. Every miss
/// (no enclosing call, no call value, no attached references, all of them
/// dangling) is `None`. Pure lookup: no memoization, no side effects, safe
/// to repeat for the same node.
pub fn resolve_call_target(
    document: &Document,
    doc_id: DocId,
    node: NodeId,
    provider: &dyn ReferenceProvider,
) -> Option<NodeRef> {
    let call_kv = enclosing_call_kv(document, node)?;
    let value = document.value_of(call_kv)?;

    provider
        .references(document, doc_id, value)
        .iter()
        .filter(|reference| reference.kind() == ReferenceKind::FlowDefinition)
        .find_map(|reference| reference.resolve())
}

/// The `call` entry of the nearest enclosing mapping that owns one.
pub fn enclosing_call_kv(document: &Document, node: NodeId) -> Option<NodeId> {
    let mapping = document.enclosing_mapping_with_key(node, "call")?;
    document.key_value(mapping, "call")
}
