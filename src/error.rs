use thiserror::Error;

/// Errors that can occur while loading a workflow document into the canonical tree.
#[derive(Error, Debug, Clone)]
pub enum DocumentError {
    #[error("Failed to parse workflow YAML: {0}")]
    YamlParseError(String),

    #[error("Workflow document root must be a mapping")]
    RootNotMapping,
}

/// Errors that can occur when converting a custom host document model into a
/// flowlens `Document`.
#[derive(Error, Debug, Clone)]
pub enum DocumentConversionError {
    #[error("Invalid host document: {0}")]
    ValidationError(String),
}
