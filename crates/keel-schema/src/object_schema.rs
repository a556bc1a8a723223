//! Object-schema parser: one type declaration to one `ObjectSchema`.

use keel_core::ObjectSchema;

use crate::declaration::ObjectDeclaration;
use crate::defaults::{ConstructorMap, ObjectDefaults, ObjectDefaultsMap};
use crate::error::{Result, SchemaError};
use crate::host::{HostValue, Protected};
use crate::property::parse_property;

/// Parse one object-type declaration.
///
/// The declaration is either a descriptor object (`name`, `properties`,
/// optional `primaryKey`) or a constructor carrying one in its `schema`
/// field. On success the type's defaults are inserted into `defaults` (even
/// when empty) and a supplied constructor into `constructors`, both keyed by
/// the type name. Nothing is inserted when the declaration fails.
///
/// # Errors
///
/// `SchemaError::MissingPrimaryKey` when `primaryKey` names no declared
/// property, `SchemaError::DuplicateProperty` on a repeated property name,
/// and any error raised while normalizing the declaration or parsing one of
/// its properties.
pub fn parse_object_schema<V: HostValue>(
    declaration: &V,
    defaults: &mut ObjectDefaultsMap<V>,
    constructors: &mut ConstructorMap<V>,
) -> Result<ObjectSchema> {
    let declaration = ObjectDeclaration::from_value(declaration)?;
    parse_declaration(&declaration, defaults, constructors)
}

/// Parse an already-normalized declaration.
pub(crate) fn parse_declaration<V: HostValue>(
    declaration: &ObjectDeclaration<'_, V>,
    defaults: &mut ObjectDefaultsMap<V>,
    constructors: &mut ConstructorMap<V>,
) -> Result<ObjectSchema> {
    let mut object_defaults = ObjectDefaults::new();
    let mut object_schema = ObjectSchema::new(declaration.name);
    object_schema.properties.reserve(declaration.properties.len());

    for (property_name, property_declaration) in declaration.properties.entries()? {
        if object_schema.property_for_name(property_name).is_some() {
            return Err(SchemaError::DuplicateProperty {
                object: declaration.name.to_owned(),
                property: property_name.to_owned(),
            });
        }
        let property = parse_property(property_declaration, property_name, &mut object_defaults)?;
        object_schema.properties.push(property);
    }

    if let Some(primary_key) = declaration.primary_key {
        let property = object_schema
            .property_for_name_mut(primary_key)
            .ok_or_else(|| SchemaError::MissingPrimaryKey(primary_key.to_owned()))?;
        property.is_primary = true;
        object_schema.primary_key = Some(primary_key.to_owned());
    }

    if let Some(constructor) = declaration.constructor {
        constructors
            .entry(object_schema.name.clone())
            .or_insert_with(|| Protected::new(constructor.clone()));
    }

    tracing::debug!(
        object = %object_schema.name,
        properties = object_schema.properties.len(),
        defaults = object_defaults.len(),
        primary_key = object_schema.primary_key.as_deref(),
        "parsed object schema"
    );

    defaults
        .entry(object_schema.name.clone())
        .or_insert(object_defaults);

    Ok(object_schema)
}
