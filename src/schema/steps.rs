use std::sync::LazyLock;

use crate::schema::types::{ANY_SCHEMA, ObjectSchema, SchemaField, SchemaType};

/// The fixed set of step keywords a flow body accepts, in suggestion order.
pub const STEP_KEYWORDS: [&str; 18] = [
    "block",
    "call",
    "checkpoint",
    "exit",
    "expr",
    "form",
    "if",
    "log",
    "logYaml",
    "parallel",
    "return",
    "script",
    "set",
    "suspend",
    "switch",
    "task",
    "throw",
    "try",
];

static STEP_ELEMENT_SCHEMA: LazyLock<SchemaType> = LazyLock::new(|| {
    let fields = STEP_KEYWORDS
        .iter()
        .map(|&name| SchemaField {
            name: name.to_string(),
            ty: &ANY_SCHEMA,
        })
        .collect();
    SchemaType::Object(ObjectSchema::new("flow step", fields))
});

/// The schema of one step element in a flow body: an object recognizing
/// exactly the step keywords, each unconstrained. Shared and immutable.
pub fn step_element_schema() -> &'static SchemaType {
    &STEP_ELEMENT_SCHEMA
}
