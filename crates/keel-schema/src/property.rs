//! Property parser: one declaration to one typed `Property`.

use keel_core::{Property, PropertyType};

use crate::declaration::PropertyDeclaration;
use crate::defaults::ObjectDefaults;
use crate::error::{Result, SchemaError};
use crate::host::{HostValue, Protected};

/// Parse one property declaration.
///
/// `declaration` is a bare type name or a descriptor object. A declared
/// `default` is inserted into `defaults` under `property_name`; the returned
/// `Property` never carries it.
///
/// # Errors
///
/// `SchemaError::ListMissingObjectType` / `ObjectMissingObjectType` when a
/// `list` or `object` property has no `objectType`, `SchemaError::Type` when a
/// field does not coerce, and the structural errors of
/// [`PropertyDeclaration::from_value`].
pub fn parse_property<V: HostValue>(
    declaration: &V,
    property_name: &str,
    defaults: &mut ObjectDefaults<V>,
) -> Result<Property> {
    if property_name.is_empty() {
        return Err(SchemaError::EmptyPropertyName);
    }

    let declaration = PropertyDeclaration::from_value(declaration, property_name)?;
    let property = build_property(&declaration, property_name)?;

    if let Some(default) = declaration.default_value() {
        defaults
            .entry(property_name.to_owned())
            .or_insert_with(|| Protected::new(default.clone()));
    }

    Ok(property)
}

/// Resolve a normalized declaration into a `Property`.
pub fn build_property<V: HostValue>(declaration: &PropertyDeclaration<'_, V>, name: &str) -> Result<Property> {
    let type_name = declaration.type_name();

    let mut property = match PropertyType::from_keyword(type_name) {
        Some(PropertyType::List) => {
            let object_type =
                declaration
                    .object_type()?
                    .ok_or_else(|| SchemaError::ListMissingObjectType {
                        property: name.to_owned(),
                    })?;
            Property::list(name, object_type)
        }
        Some(PropertyType::Object) => {
            let object_type =
                declaration
                    .object_type()?
                    .ok_or_else(|| SchemaError::ObjectMissingObjectType {
                        property: name.to_owned(),
                    })?;
            Property::object(name, object_type)
        }
        Some(scalar) => Property::new(name, scalar),
        None => {
            tracing::trace!(
                property = name,
                object_type = type_name,
                "deferring object type reference"
            );
            Property::object(name, type_name)
        }
    };

    if let Some(descriptor) = declaration.descriptor() {
        // Object references stay nullable whatever `optional` says.
        if !property.is_object_reference() {
            if let Some(optional) = descriptor.optional {
                property.is_nullable = optional;
            }
        }
        if let Some(indexed) = descriptor.indexed {
            property.is_indexed = indexed;
        }
    }

    Ok(property)
}
