//! Host value capability surface.
//!
//! The parser never touches a concrete dynamic value type. It reads
//! declarations through [`HostValue`], which a host value layer implements
//! for its own representation. `serde_json::Value` is implemented in
//! [`json`].

pub mod json;

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::error::{Result, SchemaError};

/// Read access to a host's dynamic values, plus object construction for
/// [`dict_for_property_array`](crate::dict_for_property_array).
///
/// "Object" means anything with named fields. Arrays are reported separately
/// by [`is_array`](Self::is_array) and are not objects for this trait.
pub trait HostValue: Clone + fmt::Debug {
    /// Handle to a constructor or class-like value that carries its schema
    /// in a `schema` field.
    type Constructor: Clone + fmt::Debug;

    /// Explicit "absent" marker. A field holding it reads as missing.
    fn is_undefined(&self) -> bool {
        false
    }

    fn is_object(&self) -> bool;

    fn is_array(&self) -> bool;

    /// The constructor handle, when this value is one.
    fn as_constructor(&self) -> Option<&Self::Constructor>;

    fn as_str(&self) -> Option<&str>;

    fn as_bool(&self) -> Option<bool>;

    /// Named field lookup. Constructors expose their `schema` here.
    fn get_property(&self, name: &str) -> Option<&Self>;

    /// Field names in the order the host stores them.
    fn property_names(&self) -> Vec<&str>;

    /// Element count of an array-like value.
    fn length(&self) -> Option<usize>;

    fn get_index(&self, index: usize) -> Option<&Self>;

    /// Build a fresh object from name/value pairs, in order.
    fn from_entries(entries: Vec<(String, Self)>) -> Self;
}

/// Named field lookup that treats an undefined value as absent.
pub fn get_field<'a, V: HostValue>(object: &'a V, name: &str) -> Option<&'a V> {
    object.get_property(name).filter(|value| !value.is_undefined())
}

/// Coerce to a string, failing with a type error naming `field`.
pub fn validated_to_string<'a, V: HostValue>(value: &'a V, field: &str) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| SchemaError::type_error(field, "string"))
}

/// Coerce to a boolean, failing with a type error naming `field`.
pub fn validated_to_boolean<V: HostValue>(value: &V, field: &str) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| SchemaError::type_error(field, "boolean"))
}

/// Read an optional string field.
pub fn optional_string<'a, V: HostValue>(object: &'a V, field: &str) -> Result<Option<&'a str>> {
    get_field(object, field)
        .map(|value| validated_to_string(value, field))
        .transpose()
}

/// Read an optional boolean field.
pub fn optional_boolean<V: HostValue>(object: &V, field: &str) -> Result<Option<bool>> {
    get_field(object, field)
        .map(|value| validated_to_boolean(value, field))
        .transpose()
}

// ---------------------------------------------------------------------------
// Protected
// ---------------------------------------------------------------------------

/// Kept-alive handle to a host value or constructor.
///
/// Output maps hold these so extracted defaults and constructors stay valid
/// for as long as the map entry exists, independent of the declaration they
/// came from. Clones share the same value.
pub struct Protected<T>(Arc<T>);

impl<T> Protected<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self(Arc::new(value))
    }

    #[must_use]
    pub fn get(&self) -> &T {
        &self.0
    }
}

impl<T> Clone for Protected<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Deref for Protected<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Protected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Protected").field(&*self.0).finish()
    }
}

impl<T: PartialEq> PartialEq for Protected<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: Eq> Eq for Protected<T> {}
