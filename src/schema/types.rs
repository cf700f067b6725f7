use itertools::Itertools;
use std::fmt;

/// The scalar kinds a documented parameter can be constrained to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    String,
    Boolean,
    Integer,
}

/// A type description handed to the completion/validation host.
///
/// Primitive flavors exist as process-wide singletons (see the statics
/// below): shared, immutable, and safe across concurrent resolutions.
/// `Object` schemas are synthesized fresh per resolution and carry no
/// identity across calls: two synthesized schemas for the same call site
/// are value-equivalent but distinct objects.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaType {
    /// A scalar constrained to one kind.
    Scalar(ScalarKind),
    /// Any sequence, items unconstrained.
    AnyArray,
    /// Any mapping: accepts every field name, each of unconstrained type.
    AnyObject,
    /// The fallback type: accepts anything.
    Any,
    /// A bare `${...}` expression string in place of a structured value.
    Expression,
    /// A mapping with a fixed, known field set.
    Object(ObjectSchema),
    /// Valid as any one of the alternatives, tried in order.
    AnyOf(Vec<SchemaType>),
}

/// The string scalar singleton.
pub static STRING_SCHEMA: SchemaType = SchemaType::Scalar(ScalarKind::String);
/// The boolean scalar singleton.
pub static BOOLEAN_SCHEMA: SchemaType = SchemaType::Scalar(ScalarKind::Boolean);
/// The integer scalar singleton.
pub static INTEGER_SCHEMA: SchemaType = SchemaType::Scalar(ScalarKind::Integer);
/// The unconstrained-array singleton.
pub static ANY_ARRAY_SCHEMA: SchemaType = SchemaType::AnyArray;
/// The unconstrained-object singleton, also the safe default every public
/// operation degrades to.
pub static ANY_OBJECT_SCHEMA: SchemaType = SchemaType::AnyObject;
/// The accept-anything singleton.
pub static ANY_SCHEMA: SchemaType = SchemaType::Any;
/// The expression-string singleton.
pub static EXPRESSION_SCHEMA: SchemaType = SchemaType::Expression;

/// A schema type with a fixed set of recognized fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSchema {
    name: String,
    fields: Vec<SchemaField>,
}

/// One recognized field of an [`ObjectSchema`]. Field types are always one of
/// the primitive singletons.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField {
    pub name: String,
    pub ty: &'static SchemaType,
}

impl ObjectSchema {
    pub fn new(name: impl Into<String>, fields: Vec<SchemaField>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    /// Exact-match field lookup. No case folding, no prefix matching.
    pub fn field(&self, name: &str) -> Option<&'static SchemaType> {
        self.fields.iter().find(|f| f.name == name).map(|f| f.ty)
    }
}

impl SchemaType {
    /// The type a field of the given name would have under this schema, or
    /// `None` when the schema rejects the field. Unconstrained objects accept
    /// every field at the fallback type; alternatives are tried in order.
    pub fn field(&self, name: &str) -> Option<&'static SchemaType> {
        match self {
            SchemaType::Object(object) => object.field(name),
            SchemaType::AnyObject | SchemaType::Any => Some(&ANY_SCHEMA),
            SchemaType::AnyOf(alternatives) => {
                alternatives.iter().find_map(|alt| alt.field(name))
            }
            _ => None,
        }
    }

    /// The recognized field names, in documented order. Empty for schemas
    /// without a fixed field set.
    pub fn field_names(&self) -> Vec<&str> {
        match self {
            SchemaType::Object(object) => object.fields.iter().map(|f| f.name.as_str()).collect(),
            SchemaType::AnyOf(alternatives) => alternatives
                .iter()
                .flat_map(|alt| alt.field_names())
                .unique()
                .collect(),
            _ => Vec::new(),
        }
    }

    /// True when a bare expression string is valid for this schema.
    pub fn accepts_expression(&self) -> bool {
        match self {
            SchemaType::Expression => true,
            SchemaType::AnyOf(alternatives) => {
                alternatives.iter().any(SchemaType::accepts_expression)
            }
            _ => false,
        }
    }

    /// True when this schema places no constraint on field names.
    pub fn accepts_any_field(&self) -> bool {
        match self {
            SchemaType::AnyObject | SchemaType::Any => true,
            SchemaType::AnyOf(alternatives) => {
                alternatives.iter().any(SchemaType::accepts_any_field)
            }
            _ => false,
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaType::Scalar(ScalarKind::String) => write!(f, "string"),
            SchemaType::Scalar(ScalarKind::Boolean) => write!(f, "boolean"),
            SchemaType::Scalar(ScalarKind::Integer) => write!(f, "integer"),
            SchemaType::AnyArray => write!(f, "array"),
            SchemaType::AnyObject => write!(f, "object"),
            SchemaType::Any => write!(f, "any"),
            SchemaType::Expression => write!(f, "expression"),
            SchemaType::Object(object) => {
                let fields = object
                    .fields
                    .iter()
                    .map(|field| format!("{}: {}", field.name, field.ty))
                    .join(", ");
                write!(f, "{} {{{}}}", object.name, fields)
            }
            SchemaType::AnyOf(alternatives) => {
                write!(f, "[{}]", alternatives.iter().join("|"))
            }
        }
    }
}
