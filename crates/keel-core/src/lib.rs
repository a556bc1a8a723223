//! # keel-core
//!
//! Typed schema model for Keel.
//!
//! This crate provides the types a persistence engine consumes once a
//! user-authored schema declaration has been parsed:
//! - `PropertyType`: the closed set of property kinds
//! - `Property`: one typed, named property of an object type
//! - `ObjectSchema`: one object type with its ordered properties and primary key
//! - `Schema`: the ordered collection of object types
//!
//! Parsing lives in `keel-schema`. Nothing here checks that an `object_type`
//! names a declared type; that resolution is left to the consuming engine.

pub mod object_schema;
pub mod property;
pub mod schema;

pub use object_schema::ObjectSchema;
pub use property::{Property, PropertyType};
pub use schema::Schema;
