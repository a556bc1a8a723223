//! Top-level schema parser: an ordered list of type declarations to a
//! `Schema`.

use keel_config::ParserConfig;
use keel_core::{ObjectSchema, Schema};

use crate::declaration::ObjectDeclaration;
use crate::defaults::{self, ConstructorMap, ObjectDefaultsMap};
use crate::error::{Result, SchemaError};
use crate::host::HostValue;
use crate::object_schema::parse_declaration;

/// Parse an array of object-type declarations with the default
/// [`SchemaParser`] settings.
///
/// Output order is input order. The first failing declaration aborts the
/// parse with its error; entries that earlier declarations already inserted
/// into `defaults` and `constructors` stay there.
///
/// # Errors
///
/// `SchemaError::Type` when `declarations` is not an array, plus any error of
/// [`parse_object_schema`](crate::parse_object_schema).
pub fn parse_schema<V: HostValue>(
    declarations: &V,
    defaults: &mut ObjectDefaultsMap<V>,
    constructors: &mut ConstructorMap<V>,
) -> Result<Schema> {
    SchemaParser::default().parse(declarations, defaults, constructors)
}

/// Configurable top-level parser.
///
/// ```
/// use keel_schema::{ConstructorMap, ObjectDefaultsMap, SchemaParser};
/// use serde_json::{json, Value};
///
/// let mut defaults = ObjectDefaultsMap::<Value>::new();
/// let mut constructors = ConstructorMap::<Value>::new();
///
/// let schema = SchemaParser::default()
///     .atomic(true)
///     .parse(
///         &json!([{ "name": "Dog", "properties": { "name": "string", "owner": "Person" } }]),
///         &mut defaults,
///         &mut constructors,
///     )
///     .unwrap();
///
/// assert_eq!(schema.len(), 1);
/// assert!(defaults.contains_key("Dog"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaParser {
    config: ParserConfig,
}

impl SchemaParser {
    #[must_use]
    pub const fn from_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Commit output-map entries only when every declaration parses.
    #[must_use]
    pub const fn atomic(mut self, atomic: bool) -> Self {
        self.config.atomic = atomic;
        self
    }

    /// Fail on a type name declared twice. When off, the repeat is parsed and
    /// the output maps keep the first declaration's entries.
    #[must_use]
    pub const fn reject_duplicate_types(mut self, reject: bool) -> Self {
        self.config.reject_duplicate_types = reject;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `declarations`, an array of object-type declarations.
    ///
    /// In atomic mode the parse fills staging maps that are merged into
    /// `defaults` and `constructors` only on success; a failed parse leaves
    /// them exactly as they were.
    ///
    /// # Errors
    ///
    /// Same as [`parse_schema`], plus `SchemaError::DuplicateObjectSchema`
    /// while duplicate types are rejected.
    pub fn parse<V: HostValue>(
        &self,
        declarations: &V,
        defaults: &mut ObjectDefaultsMap<V>,
        constructors: &mut ConstructorMap<V>,
    ) -> Result<Schema> {
        if !self.config.atomic {
            return self.parse_into(declarations, defaults, constructors);
        }

        let mut staged_defaults = ObjectDefaultsMap::new();
        let mut staged_constructors = ConstructorMap::<V>::new();
        match self.parse_into(declarations, &mut staged_defaults, &mut staged_constructors) {
            Ok(schema) => {
                defaults::merge_staged(defaults, staged_defaults);
                defaults::merge_staged(constructors, staged_constructors);
                Ok(schema)
            }
            Err(error) => {
                tracing::debug!(
                    staged_types = staged_defaults.len(),
                    %error,
                    "discarding staged schema output"
                );
                Err(error)
            }
        }
    }

    fn parse_into<V: HostValue>(
        &self,
        declarations: &V,
        defaults: &mut ObjectDefaultsMap<V>,
        constructors: &mut ConstructorMap<V>,
    ) -> Result<Schema> {
        let length = declarations
            .length()
            .ok_or_else(|| SchemaError::type_error("schema", "array"))?;

        let mut object_schemas: Vec<ObjectSchema> = Vec::with_capacity(length);
        for index in 0..length {
            let value = declarations
                .get_index(index)
                .ok_or_else(|| SchemaError::NotAnObject {
                    what: format!("Object schema at index {index}"),
                })?;
            let declaration = ObjectDeclaration::from_value(value)?;

            if self.config.reject_duplicate_types
                && object_schemas.iter().any(|o| o.name == declaration.name)
            {
                return Err(SchemaError::DuplicateObjectSchema(declaration.name.to_owned()));
            }

            object_schemas.push(parse_declaration(&declaration, defaults, constructors)?);
        }

        tracing::debug!(object_schemas = object_schemas.len(), "parsed schema");
        Ok(Schema::new(object_schemas))
    }
}
