use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::object_schema::ObjectSchema;

/// The ordered collection of object types produced by one parse.
///
/// Order is declaration order. References between types are not resolved
/// here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(transparent)]
pub struct Schema(Vec<ObjectSchema>);

impl Schema {
    #[must_use]
    pub const fn new(object_schemas: Vec<ObjectSchema>) -> Self {
        Self(object_schemas)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ObjectSchema> {
        self.0.iter()
    }

    /// Look up an object type by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&ObjectSchema> {
        self.0.iter().find(|object| object.name == name)
    }
}

impl From<Vec<ObjectSchema>> for Schema {
    fn from(object_schemas: Vec<ObjectSchema>) -> Self {
        Self(object_schemas)
    }
}

impl IntoIterator for Schema {
    type Item = ObjectSchema;
    type IntoIter = std::vec::IntoIter<ObjectSchema>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a ObjectSchema;
    type IntoIter = std::slice::Iter<'a, ObjectSchema>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
