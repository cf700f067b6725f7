use crate::docs::ParamType;
use crate::schema::types::{
    ANY_ARRAY_SCHEMA, ANY_OBJECT_SCHEMA, ANY_SCHEMA, BOOLEAN_SCHEMA, INTEGER_SCHEMA, SchemaType,
    STRING_SCHEMA,
};

/// Maps a declared parameter type onto its schema-type singleton.
///
/// Pure and total over the closed enum; repeated calls return the same
/// `&'static` reference. `Unknown` falls back to the accept-anything schema.
pub fn param_schema(ty: ParamType) -> &'static SchemaType {
    match ty {
        ParamType::String => &STRING_SCHEMA,
        ParamType::Boolean => &BOOLEAN_SCHEMA,
        ParamType::Number => &INTEGER_SCHEMA,
        ParamType::Array => &ANY_ARRAY_SCHEMA,
        ParamType::Object => &ANY_OBJECT_SCHEMA,
        ParamType::Unknown => &ANY_SCHEMA,
    }
}
