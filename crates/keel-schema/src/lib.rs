//! # keel-schema
//!
//! Parses user-authored, dynamically-typed schema declarations into the typed
//! `keel-core` model.
//!
//! This crate provides:
//! - [`parse_property`], [`parse_object_schema`], [`parse_schema`]: the three
//!   nested parsers, leaf first
//! - [`SchemaParser`]: the configurable top-level entry point (atomic commit,
//!   duplicate type handling)
//! - [`dict_for_property_array`]: pairs positional values with property names
//! - [`HostValue`]: the capability surface a host value layer implements;
//!   `serde_json::Value` implements it out of the box
//!
//! ## Output maps
//!
//! Default values and constructor bindings never enter the schema model.
//! They are inserted into caller-owned [`ObjectDefaultsMap`] and
//! [`ConstructorMap`] values passed through the parse. Inserts never replace an
//! existing key.
//!
//! ## Forward references
//!
//! A property type that is not a known keyword is taken as the name of another
//! declared type. Whether that type exists is not checked here.

pub mod adapter;
pub mod declaration;
pub mod defaults;
pub mod error;
pub mod host;
pub mod object_schema;
pub mod property;
pub mod schema;

pub use adapter::dict_for_property_array;
pub use defaults::{ConstructorMap, ObjectDefaults, ObjectDefaultsMap};
pub use error::{ErrorKind, Result, SchemaError};
pub use host::{HostValue, Protected};
pub use object_schema::parse_object_schema;
pub use property::parse_property;
pub use schema::{SchemaParser, parse_schema};
