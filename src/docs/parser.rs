use crate::docs::model::{FlowDocumentation, ParamDocumentation, ParamType};
use crate::document::CommentBlock;

/// Parses a flow's leading comment block into its documented contract.
///
/// The block format, line by line (after the `#` markers are stripped):
/// optional free-text description lines, an `in:` header followed by entries
/// of the form `name: type[, mandatory|optional][, description]`, and an
/// optional `out:` header with the same entry shape. Decorative fence lines
/// and anything that does not parse as an entry are skipped, never rejected.
pub fn parse_flow_doc(block: &CommentBlock) -> FlowDocumentation {
    #[derive(PartialEq)]
    enum Section {
        Preamble,
        In,
        Out,
    }

    let mut section = Section::Preamble;
    let mut description_lines: Vec<&str> = Vec::new();
    let mut in_params = Vec::new();
    let mut out_params = Vec::new();

    for (idx, line) in block.lines.iter().enumerate() {
        let trimmed = line.trim();
        match trimmed {
            "in:" => {
                section = Section::In;
                continue;
            }
            "out:" => {
                section = Section::Out;
                continue;
            }
            _ => {}
        }

        match section {
            Section::Preamble => {
                if !trimmed.is_empty() {
                    description_lines.push(trimmed);
                }
            }
            Section::In => {
                if let Some(param) = parse_entry(trimmed, block.start_line + idx) {
                    in_params.push(param);
                }
            }
            Section::Out => {
                if let Some(param) = parse_entry(trimmed, block.start_line + idx) {
                    out_params.push(param);
                }
            }
        }
    }

    let description = if description_lines.is_empty() {
        None
    } else {
        Some(description_lines.join("\n"))
    };

    FlowDocumentation::new(description, in_params, out_params)
}

/// Parses one parameter entry: `name: type[, mandatory|optional][, text]`.
fn parse_entry(line: &str, anchor_line: usize) -> Option<ParamDocumentation> {
    let (name, rest) = line.split_once(':')?;
    let name = name.trim();
    if name.is_empty() || name.contains(char::is_whitespace) {
        return None;
    }

    let mut parts = rest.split(',').map(str::trim);
    let ty = ParamType::from_declared(parts.next().unwrap_or(""));

    let mut required = false;
    let mut description_parts: Vec<&str> = Vec::new();
    for part in parts {
        match part.to_ascii_lowercase().as_str() {
            "mandatory" | "required" => required = true,
            "optional" => required = false,
            _ if !part.is_empty() => description_parts.push(part),
            _ => {}
        }
    }

    let description = if description_parts.is_empty() {
        None
    } else {
        Some(description_parts.join(", "))
    };

    Some(ParamDocumentation {
        name: name.to_string(),
        ty,
        required,
        description,
        anchor_line,
    })
}
