use clap::Parser;
use flowlens::docs::{CommentDocLookup, DocumentationLookup};
use flowlens::document::NodeKind;
use flowlens::prelude::*;
use flowlens::resolve::resolver::enclosing_call_kv;
use itertools::Itertools;
use std::fs;
use std::path::PathBuf;

/// Inspects workflow YAML files: lists every flow call site together with the
/// parameter schema flowlens synthesizes for it.
#[derive(Parser)]
#[command(name = "flowlens-cli", version, about)]
struct Cli {
    /// Workflow YAML files to load into the project index
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Also dump each resolved flow's documentation record as JSON
    #[arg(long)]
    docs_json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut index = ProjectIndex::new();
    let mut documents = Vec::new();
    for path in &cli.files {
        let source = fs::read_to_string(path)?;
        let doc_id = index.add_document(Document::from_yaml(&source)?);
        documents.push((doc_id, path));
    }

    println!(
        "Indexed flows: {}",
        index.flow_names().sorted().join(", ")
    );

    let synthesizer = SchemaSynthesizer::new(&index);
    for (doc_id, path) in documents {
        let document = index.document(doc_id);
        for call_mapping in call_sites(document) {
            let at = NodeRef {
                doc: doc_id,
                node: call_mapping,
            };
            let target = call_target_name(document, call_mapping).unwrap_or("<missing>");

            match synthesizer.resolve_target_definition(at) {
                Some(definition) => {
                    println!(
                        "{}: call {} -> {}",
                        path.display(),
                        target,
                        synthesizer.in_params_schema(at)
                    );
                    if cli.docs_json {
                        let target_doc = index.document(definition.doc);
                        if let Some(docs) =
                            CommentDocLookup.parse_documentation(target_doc, definition.node)
                        {
                            println!("{}", serde_json::to_string_pretty(&docs)?);
                        }
                    }
                }
                None => println!(
                    "{}: call {} -> unresolved, falling back to {}",
                    path.display(),
                    target,
                    synthesizer.in_params_schema(at)
                ),
            }
        }
    }

    Ok(())
}

/// Every mapping node that owns a `call` entry.
fn call_sites(document: &Document) -> Vec<NodeId> {
    document
        .node_ids()
        .filter(|&id| {
            matches!(document.kind(id), NodeKind::Mapping { .. })
                && document.key_value(id, "call").is_some()
        })
        .collect()
}

fn call_target_name(document: &Document, call_mapping: NodeId) -> Option<&str> {
    let call_kv = enclosing_call_kv(document, call_mapping)?;
    document.scalar_text(document.value_of(call_kv)?)
}
