//! # keel-config
//!
//! Layered configuration loading for Keel using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`KEEL_*` prefix, `__` as separator)
//! 2. Project-level `.keel/config.toml`
//! 3. User-level `~/.config/keel/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `KEEL_PARSER__ATOMIC` -> `parser.atomic`,
//! `KEEL_PARSER__REJECT_DUPLICATE_TYPES` -> `parser.reject_duplicate_types`.
//!
//! # Usage
//!
//! ```no_run
//! use keel_config::KeelConfig;
//!
//! let config = KeelConfig::load().expect("config");
//! if config.parser.atomic {
//!     println!("schema parses commit defaults only on success");
//! }
//! ```

mod error;
mod parser;

pub use error::ConfigError;
pub use parser::ParserConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KeelConfig {
    #[serde(default)]
    pub parser: ParserConfig,
}

impl KeelConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`KEEL_*` prefix)
    /// 2. `.keel/config.toml` (project-local)
    /// 3. `~/.config/keel/config.toml` (user-global)
    /// 4. Default values
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".keel/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("KEEL_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("keel").join("config.toml"))
    }
}
