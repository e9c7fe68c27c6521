//! # Configuration
//!
//! Arbor configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files, environment variables, and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `ARBOR__DATA_FILE`, `ARBOR__STRICT_PARENTS`, `ARBOR__LOG_LEVEL`.
//! 2. **Store Config**: `<data dir>/arbor.toml` — overrides everything for that store.
//! 3. **User Config**: OS-appropriate config directory (via `directories` crate).
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `nodes.json` | Name of the JSON data file inside the data directory |
//! | `strict_parents` | `false` | Require an existing parent directory on create/move/copy |
//! | `log_level` | `warn` | Tracing filter used when `ARBOR_LOG` is unset |

use crate::commands::StoreOptions;
use crate::store::fs_backend::DEFAULT_DATA_FILE;
use confique::Config;
use serde::{Deserialize, Serialize};

/// Configuration for arbor, stored in `arbor.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ArborConfig {
    /// Name of the JSON data file inside the data directory.
    #[config(default = "nodes.json")]
    pub data_file: String,

    /// Require the parent of created, moved or copied nodes to be an existing directory.
    #[config(default = false)]
    pub strict_parents: bool,

    /// Default tracing filter (e.g. "warn", "arbor=debug").
    #[config(default = "warn")]
    pub log_level: String,
}

impl Default for ArborConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
            strict_parents: false,
            log_level: "warn".to_string(),
        }
    }
}

impl ArborConfig {
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            strict_parents: self.strict_parents,
        }
    }

    /// Data file name, falling back to the default when configured blank.
    pub fn data_file(&self) -> &str {
        let name = self.data_file.trim();
        if name.is_empty() {
            DEFAULT_DATA_FILE
        } else {
            name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ArborConfig::default();
        assert_eq!(config.data_file(), "nodes.json");
        assert!(!config.strict_parents);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.store_options(), StoreOptions::default());
    }

    #[test]
    fn test_strict_parents_maps_to_options() {
        let config = ArborConfig {
            strict_parents: true,
            ..Default::default()
        };
        assert_eq!(config.store_options(), StoreOptions::strict());
    }

    #[test]
    fn test_blank_data_file_falls_back() {
        let config = ArborConfig {
            data_file: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.data_file(), "nodes.json");
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ArborConfig {
            data_file: "tree.json".to_string(),
            strict_parents: true,
            log_level: "arbor=debug".to_string(),
        };
        let text = toml::to_string(&config).unwrap();
        let parsed: ArborConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
