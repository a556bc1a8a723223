//! Boundary normalization of raw declarations.
//!
//! Each shape-polymorphic input is resolved once into a closed variant here.
//! The parsers downstream only match on these variants.

use crate::error::{Result, SchemaError};
use crate::host::{self, HostValue};

// ---------------------------------------------------------------------------
// Property declarations
// ---------------------------------------------------------------------------

/// One property declaration: a bare type name, or a descriptor object.
#[derive(Debug, Clone)]
pub enum PropertyDeclaration<'a, V> {
    Bare(&'a str),
    Descriptor(PropertyDescriptor<'a, V>),
}

/// The descriptor form of a property declaration.
#[derive(Debug, Clone)]
pub struct PropertyDescriptor<'a, V> {
    pub type_name: &'a str,
    pub optional: Option<bool>,
    pub indexed: Option<bool>,
    pub default: Option<&'a V>,
    /// Raw `objectType`; only list and object properties read it.
    pub object_type: Option<&'a V>,
}

impl<'a, V: HostValue> PropertyDeclaration<'a, V> {
    /// Normalize a raw property declaration.
    ///
    /// A non-object value must be a string naming the type. A descriptor must
    /// carry a string `type`; `optional` and `indexed` must be booleans when
    /// present.
    pub fn from_value(value: &'a V, property_name: &str) -> Result<Self> {
        if !value.is_object() {
            return host::validated_to_string(value, property_name).map(Self::Bare);
        }

        let type_name = host::get_field(value, "type")
            .ok_or_else(|| SchemaError::MissingPropertyType {
                property: property_name.to_owned(),
            })
            .and_then(|type_value| host::validated_to_string(type_value, "type"))?;

        Ok(Self::Descriptor(PropertyDescriptor {
            type_name,
            optional: host::optional_boolean(value, "optional")?,
            indexed: host::optional_boolean(value, "indexed")?,
            default: host::get_field(value, "default"),
            object_type: host::get_field(value, "objectType"),
        }))
    }

    /// The `objectType` a list or object property names, if non-empty.
    ///
    /// # Errors
    ///
    /// `SchemaError::Type` when `objectType` is present but not a string.
    pub fn object_type(&self) -> Result<Option<&'a str>> {
        let Some(value) = self.descriptor().and_then(|descriptor| descriptor.object_type) else {
            return Ok(None);
        };
        let object_type = host::validated_to_string(value, "objectType")?;
        Ok(Some(object_type).filter(|object_type| !object_type.is_empty()))
    }
}

impl<'a, V> PropertyDeclaration<'a, V> {
    #[must_use]
    pub const fn type_name(&self) -> &'a str {
        match self {
            Self::Bare(type_name) => *type_name,
            Self::Descriptor(descriptor) => descriptor.type_name,
        }
    }

    #[must_use]
    pub const fn descriptor(&self) -> Option<&PropertyDescriptor<'a, V>> {
        match self {
            Self::Bare(_) => None,
            Self::Descriptor(descriptor) => Some(descriptor),
        }
    }

    /// The declared default value, if any.
    #[must_use]
    pub fn default_value(&self) -> Option<&'a V> {
        self.descriptor().and_then(|descriptor| descriptor.default)
    }
}

// ---------------------------------------------------------------------------
// Property collections
// ---------------------------------------------------------------------------

/// The `properties` of an object declaration, in either accepted shape.
#[derive(Debug, Clone)]
pub enum PropertyCollection<'a, V> {
    /// Array of descriptor objects, each carrying its own `name`.
    Ordered(Vec<&'a V>),
    /// Name-keyed mapping, in the host's field order.
    Keyed(Vec<(&'a str, &'a V)>),
}

impl<'a, V: HostValue> PropertyCollection<'a, V> {
    /// Pick the shape by asking whether the value is array-like. Returns
    /// `None` when it is neither an array nor an object.
    pub fn from_value(value: &'a V) -> Option<Self> {
        if value.is_array() {
            let length = value.length()?;
            let elements = (0..length).filter_map(|i| value.get_index(i)).collect();
            Some(Self::Ordered(elements))
        } else if value.is_object() {
            let entries = value
                .property_names()
                .into_iter()
                .filter_map(|name| value.get_property(name).map(|decl| (name, decl)))
                .collect();
            Some(Self::Keyed(entries))
        } else {
            None
        }
    }

    /// Resolve to `(property name, declaration)` pairs in stored order.
    pub fn entries(&self) -> Result<Vec<(&'a str, &'a V)>> {
        match self {
            Self::Keyed(entries) => Ok(entries.clone()),
            Self::Ordered(elements) => elements
                .iter()
                .enumerate()
                .map(|(index, &element)| {
                    if !element.is_object() {
                        return Err(SchemaError::NotAnObject {
                            what: format!("Property at index {index}"),
                        });
                    }
                    let name = host::get_field(element, "name")
                        .ok_or(SchemaError::MissingPropertyName { index })?;
                    Ok((host::validated_to_string(name, "name")?, element))
                })
                .collect(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Ordered(elements) => elements.len(),
            Self::Keyed(entries) => entries.len(),
        }
    }
}

// ---------------------------------------------------------------------------
// Object declarations
// ---------------------------------------------------------------------------

/// One normalized object-type declaration.
#[derive(Debug, Clone)]
pub struct ObjectDeclaration<'a, V: HostValue> {
    /// Set when the declaration was a constructor carrying a `schema`.
    pub constructor: Option<&'a V::Constructor>,
    pub name: &'a str,
    pub properties: PropertyCollection<'a, V>,
    pub primary_key: Option<&'a str>,
}

impl<'a, V: HostValue> ObjectDeclaration<'a, V> {
    /// Normalize a raw object declaration, unwrapping a constructor to its
    /// nested `schema` first.
    pub fn from_value(value: &'a V) -> Result<Self> {
        let (constructor, descriptor) = if let Some(constructor) = value.as_constructor() {
            let schema = host::get_field(value, "schema")
                .filter(|schema| schema.is_object())
                .ok_or(SchemaError::MissingConstructorSchema)?;
            (Some(constructor), schema)
        } else if value.is_object() {
            (None, value)
        } else {
            return Err(SchemaError::NotAnObject {
                what: "Object schema".to_owned(),
            });
        };

        let name = host::get_field(descriptor, "name")
            .and_then(|name| name.as_str())
            .filter(|name| !name.is_empty())
            .ok_or(SchemaError::MissingObjectName)?;

        let properties = host::get_field(descriptor, "properties")
            .and_then(PropertyCollection::from_value)
            .ok_or_else(|| SchemaError::MissingProperties {
                object: name.to_owned(),
            })?;

        Ok(Self {
            constructor,
            name,
            properties,
            primary_key: host::optional_string(descriptor, "primaryKey")?,
        })
    }
}
