//! Schema parser configuration.

use serde::{Deserialize, Serialize};

const fn default_reject_duplicate_types() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParserConfig {
    /// Stage auxiliary output (defaults, constructors) and commit it only when
    /// the whole schema parses. Off by default: declarations parsed before a
    /// failure keep their entries.
    #[serde(default)]
    pub atomic: bool,

    /// Fail when two declarations share a type name.
    #[serde(default = "default_reject_duplicate_types")]
    pub reject_duplicate_types: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            atomic: false,
            reject_duplicate_types: default_reject_duplicate_types(),
        }
    }
}
