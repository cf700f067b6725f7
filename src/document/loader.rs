use serde_yaml::Value;

use crate::document::tree::{CommentBlock, Document, DocumentBuilder, NodeId};
use crate::error::DocumentError;

impl Document {
    /// Loads a workflow document from YAML source text.
    ///
    /// Structure comes from `serde_yaml` (mapping order preserved); a second,
    /// line-oriented pass recovers the comment blocks preceding flow
    /// definition keys, which the YAML data model does not carry. The root of
    /// a workflow document must be a mapping.
    pub fn from_yaml(source: &str) -> Result<Document, DocumentError> {
        let value: Value = serde_yaml::from_str(source)
            .map_err(|e| DocumentError::YamlParseError(e.to_string()))?;
        if !matches!(resolve_tag(&value), Value::Mapping(_)) {
            return Err(DocumentError::RootNotMapping);
        }

        let mut builder = DocumentBuilder::new();
        let root = lower(&mut builder, &value);
        let mut document = builder.build(root);

        attach_flow_comments(&mut document, source);
        Ok(document)
    }
}

/// Unwraps YAML tags; the document model keeps only the tagged value.
fn resolve_tag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => resolve_tag(&tagged.value),
        other => other,
    }
}

fn lower(builder: &mut DocumentBuilder, value: &Value) -> NodeId {
    match resolve_tag(value) {
        Value::Mapping(mapping) => {
            let entries = mapping
                .iter()
                .map(|(key, entry_value)| {
                    let value_id = match resolve_tag(entry_value) {
                        Value::Null => None,
                        other => Some(lower(builder, other)),
                    };
                    builder.key_value(render_scalar(key), value_id)
                })
                .collect();
            builder.mapping(entries)
        }
        Value::Sequence(items) => {
            let items = items.iter().map(|item| lower(builder, item)).collect();
            builder.sequence(items)
        }
        scalar => builder.scalar(render_scalar(scalar)),
    }
}

/// Renders a scalar (or mapping key) as plain text. Null renders as "".
fn render_scalar(value: &Value) -> String {
    match resolve_tag(value) {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Scans the source text for comment runs directly above keys in the
/// top-level `flows:` mapping and attaches them to the matching key-value
/// nodes. A blank line, intervening content, or a comment at a different
/// indent than the flow keys breaks the run.
fn attach_flow_comments(document: &mut Document, source: &str) {
    let blocks = flow_comment_blocks(source);
    if blocks.is_empty() {
        return;
    }

    let Some(flows_kv) = document.key_value(document.root(), "flows") else {
        return;
    };
    let Some(flows_mapping) = document.value_of(flows_kv) else {
        return;
    };

    for (name, block) in blocks {
        if let Some(kv) = document.key_value(flows_mapping, &name) {
            document.set_doc_comment(kv, block);
        }
    }
}

fn flow_comment_blocks(source: &str) -> Vec<(String, CommentBlock)> {
    let mut blocks = Vec::new();
    let mut in_flows = false;
    let mut child_indent: Option<usize> = None;
    // Comment lines collected since the last non-comment line, with their
    // source line numbers.
    let mut pending: Vec<(usize, String)> = Vec::new();

    for (line_no, raw) in source.lines().enumerate() {
        let trimmed = raw.trim_start();
        let indent = raw.len() - trimmed.len();

        if !in_flows {
            if indent == 0 && trimmed == "flows:" {
                in_flows = true;
            }
            continue;
        }

        if trimmed.is_empty() {
            pending.clear();
            continue;
        }

        if let Some(comment) = trimmed.strip_prefix('#') {
            // Comments indented into a flow body belong to that body, not to
            // the next flow key.
            if child_indent.is_some_and(|ci| indent != ci) {
                pending.clear();
                continue;
            }
            let text = comment.trim_start_matches('#');
            let text = text.strip_prefix(' ').unwrap_or(text);
            pending.push((line_no, text.to_string()));
            continue;
        }

        if indent == 0 {
            // Left the flows section.
            break;
        }

        let child_indent = *child_indent.get_or_insert(indent);
        if indent == child_indent {
            if let Some(name) = flow_key_name(trimmed) {
                if !pending.is_empty() {
                    let start_line = pending[0].0;
                    let lines = pending.iter().map(|(_, text)| text.clone()).collect();
                    blocks.push((name.to_string(), CommentBlock { lines, start_line }));
                }
            }
        }
        pending.clear();
    }

    blocks
}

/// Recognizes a flow definition key line (`name:` with an empty rest; the
/// flow body always starts on the following lines).
fn flow_key_name(trimmed: &str) -> Option<&str> {
    let (name, rest) = trimmed.split_once(':')?;
    let name = name.trim();
    if name.is_empty() || name.starts_with('-') || !rest.trim().is_empty() {
        return None;
    }
    Some(name)
}
