//! Property kinds and the typed `Property` model.
//!
//! Property kinds serialize with their declaration keyword (`"bool"`,
//! `"list"`, ...), so a serialized `Property` reads the way it was declared.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// PropertyType
// ---------------------------------------------------------------------------

/// The closed set of value kinds a property can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Bool,
    Int,
    Float,
    Double,
    String,
    Date,
    Data,
    List,
    Object,
}

impl PropertyType {
    /// Every kind, in keyword order.
    pub const ALL: [Self; 9] = [
        Self::Bool,
        Self::Int,
        Self::Float,
        Self::Double,
        Self::String,
        Self::Date,
        Self::Data,
        Self::List,
        Self::Object,
    ];

    /// Return the declaration keyword for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Date => "date",
            Self::Data => "data",
            Self::List => "list",
            Self::Object => "object",
        }
    }

    /// Resolve a declaration keyword. Matching is exact and case-sensitive.
    ///
    /// Returns `None` for anything outside the closed keyword set, which the
    /// parser treats as a reference to another declared type.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == keyword)
    }

    /// Scalar kinds carry no `object_type`.
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        !self.requires_object_type()
    }

    /// `List` and `Object` name their element or target type.
    #[must_use]
    pub const fn requires_object_type(self) -> bool {
        matches!(self, Self::List | Self::Object)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Property
// ---------------------------------------------------------------------------

/// One named, typed property of an object type.
///
/// `object_type` is empty for scalar kinds. Default values are never stored
/// here; the parser hands them out through a separate defaults map.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    #[serde(default)]
    pub object_type: String,
    #[serde(default)]
    pub is_nullable: bool,
    #[serde(default)]
    pub is_indexed: bool,
    #[serde(default)]
    pub is_primary: bool,
}

impl Property {
    /// A property of the given kind with every flag cleared.
    #[must_use]
    pub fn new(name: impl Into<String>, property_type: PropertyType) -> Self {
        Self {
            name: name.into(),
            property_type,
            object_type: String::new(),
            is_nullable: false,
            is_indexed: false,
            is_primary: false,
        }
    }

    /// A nullable reference to another declared type.
    #[must_use]
    pub fn object(name: impl Into<String>, object_type: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            is_nullable: true,
            ..Self::new(name, PropertyType::Object)
        }
    }

    /// A list whose elements are of `object_type`.
    #[must_use]
    pub fn list(name: impl Into<String>, object_type: impl Into<String>) -> Self {
        Self {
            object_type: object_type.into(),
            ..Self::new(name, PropertyType::List)
        }
    }

    #[must_use]
    pub const fn is_object_reference(&self) -> bool {
        matches!(self.property_type, PropertyType::Object)
    }
}
