use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of declared parameter types a flow's documentation can use.
///
/// Declared-type text outside the set maps to `Unknown`; it is never an
/// error, only a loss of completion precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Boolean,
    Number,
    Array,
    Object,
    Unknown,
}

impl ParamType {
    /// Parses declared-type text from a documentation entry. Total: anything
    /// unrecognized is `Unknown`.
    pub fn from_declared(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "string" => Self::String,
            "boolean" | "bool" => Self::Boolean,
            "number" | "int" | "integer" | "float" => Self::Number,
            "array" => Self::Array,
            "object" | "map" => Self::Object,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParamType::String => "string",
            ParamType::Boolean => "boolean",
            ParamType::Number => "number",
            ParamType::Array => "array",
            ParamType::Object => "object",
            ParamType::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// One documented flow parameter.
///
/// `anchor_line` is the 0-based source line of the comment line that declared
/// the parameter, a weak back-reference used only for navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDocumentation {
    pub name: String,
    pub ty: ParamType,
    pub required: bool,
    pub description: Option<String>,
    pub anchor_line: usize,
}

/// The documented parameter contract of one flow definition.
///
/// Ordered as declared. Entries with empty names are dropped and duplicate
/// names keep their first occurrence, so the lists always satisfy the record
/// invariants regardless of what the comment parser saw.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowDocumentation {
    description: Option<String>,
    in_params: Vec<ParamDocumentation>,
    out_params: Vec<ParamDocumentation>,
}

impl FlowDocumentation {
    pub fn new(
        description: Option<String>,
        in_params: Vec<ParamDocumentation>,
        out_params: Vec<ParamDocumentation>,
    ) -> Self {
        Self {
            description,
            in_params: keep_first(in_params),
            out_params: keep_first(out_params),
        }
    }

    /// The free-text description preceding the parameter sections.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Documented input parameters, in declaration order.
    pub fn in_params(&self) -> &[ParamDocumentation] {
        &self.in_params
    }

    /// Documented output parameters, in declaration order. Synthesis does not
    /// consume these; they exist for hover and navigation hosts.
    pub fn out_params(&self) -> &[ParamDocumentation] {
        &self.out_params
    }

    /// Exact-match lookup of an input parameter by name.
    pub fn in_param(&self, name: &str) -> Option<&ParamDocumentation> {
        self.in_params.iter().find(|p| p.name == name)
    }

    /// True when no input parameters are documented. Downstream this is
    /// indistinguishable from documentation being absent.
    pub fn is_empty(&self) -> bool {
        self.in_params.is_empty()
    }
}

fn keep_first(params: Vec<ParamDocumentation>) -> Vec<ParamDocumentation> {
    let mut seen = AHashSet::new();
    params
        .into_iter()
        .filter(|p| !p.name.is_empty() && seen.insert(p.name.clone()))
        .collect()
}
