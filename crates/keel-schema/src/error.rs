//! Schema parsing error types.

use thiserror::Error;

/// Broad category of a [`SchemaError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The declaration is structurally wrong: a required field is missing, a
    /// reference does not resolve, a name is repeated.
    Schema,
    /// A field is present but does not coerce to the expected primitive.
    Type,
    /// An argument handed to a helper does not fit the object schema.
    InvalidArgument,
}

/// Errors raised while parsing a schema declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    // --- Structural ---
    /// A `list` property was declared without a usable `objectType`.
    #[error("List property must specify 'objectType'")]
    ListMissingObjectType { property: String },

    /// An `object` property was declared without a usable `objectType`.
    #[error("Object property must specify 'objectType'")]
    ObjectMissingObjectType { property: String },

    /// `primaryKey` names a property the object schema does not declare.
    #[error("Missing primary key property '{0}'")]
    MissingPrimaryKey(String),

    /// A constructor was supplied without a nested `schema` object.
    #[error("Object constructor must have a 'schema' property.")]
    MissingConstructorSchema,

    /// The object schema has no non-empty `name` string.
    #[error("ObjectSchema must have a non-empty 'name' string.")]
    MissingObjectName,

    /// The object schema has no `properties` object or array.
    #[error("ObjectSchema '{object}' must have a 'properties' object.")]
    MissingProperties { object: String },

    /// A descriptor-form property has no `type` field.
    #[error("Property '{property}' must specify a 'type'")]
    MissingPropertyType { property: String },

    /// An element of an ordered property list has no `name` string.
    #[error("Property at index {index} must have a 'name' string")]
    MissingPropertyName { index: usize },

    #[error("Property name must not be empty")]
    EmptyPropertyName,

    #[error("Duplicate property '{property}' in object schema '{object}'")]
    DuplicateProperty { object: String, property: String },

    #[error("Duplicate object schema '{0}'")]
    DuplicateObjectSchema(String),

    /// A value that must be an object (or constructor) was something else.
    #[error("{what} must be an object")]
    NotAnObject { what: String },

    // --- Coercion ---
    /// A field exists but is not of the expected primitive type.
    #[error("'{field}' must be of type: {expected}")]
    Type {
        field: String,
        expected: &'static str,
    },

    // --- Invalid argument ---
    /// The positional value array does not match the property count.
    #[error("Array must contain values for all object properties")]
    ArrayLength { expected: usize, actual: usize },
}

impl SchemaError {
    /// Category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Type { .. } => ErrorKind::Type,
            Self::ArrayLength { .. } => ErrorKind::InvalidArgument,
            _ => ErrorKind::Schema,
        }
    }

    pub(crate) fn type_error(field: &str, expected: &'static str) -> Self {
        Self::Type {
            field: field.to_owned(),
            expected,
        }
    }
}

pub type Result<T, E = SchemaError> = std::result::Result<T, E>;
