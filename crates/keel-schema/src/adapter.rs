//! Positional-to-named object data.

use keel_core::ObjectSchema;

use crate::error::{Result, SchemaError};
use crate::host::HostValue;

/// Pair an array of property values with `object_schema`'s property names.
///
/// Element `i` is stored under the name of property `i` in declaration
/// order. Values are not checked against the property types.
///
/// # Errors
///
/// `SchemaError::Type` when `values` is not an array, and
/// `SchemaError::ArrayLength` when its length differs from the property
/// count.
pub fn dict_for_property_array<V: HostValue>(object_schema: &ObjectSchema, values: &V) -> Result<V> {
    let expected = object_schema.properties.len();
    let actual = values
        .length()
        .ok_or_else(|| SchemaError::type_error("values", "array"))?;
    if actual != expected {
        return Err(SchemaError::ArrayLength { expected, actual });
    }

    let entries = object_schema
        .properties
        .iter()
        .enumerate()
        .map(|(index, property)| {
            values
                .get_index(index)
                .map(|value| (property.name.clone(), value.clone()))
                .ok_or(SchemaError::ArrayLength { expected, actual })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(V::from_entries(entries))
}
