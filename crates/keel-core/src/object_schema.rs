use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::property::Property;

/// One declared object type: its name, properties in declaration order, and
/// optional primary key.
///
/// When `primary_key` is set it names exactly one property, and that
/// property has `is_primary` set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ObjectSchema {
    pub name: String,
    pub properties: Vec<Property>,
    #[serde(default)]
    pub primary_key: Option<String>,
}

impl ObjectSchema {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            primary_key: None,
        }
    }

    /// Look up a property by name.
    #[must_use]
    pub fn property_for_name(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|prop| prop.name == name)
    }

    /// Mutable lookup, used when flagging the primary key.
    pub fn property_for_name_mut(&mut self, name: &str) -> Option<&mut Property> {
        self.properties.iter_mut().find(|prop| prop.name == name)
    }

    /// The property named by `primary_key`, if any.
    #[must_use]
    pub fn primary_key_property(&self) -> Option<&Property> {
        self.primary_key
            .as_deref()
            .and_then(|name| self.property_for_name(name))
    }

    /// Property names in declaration order.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|prop| prop.name.as_str())
    }
}
