//! # Configuration
//!
//! Configuration is managed by [`confique`], layering environment variables
//! over an optional `recordkeep.toml` in the data directory over compiled
//! defaults.
//!
//! ## Available Settings
//!
//! | Key | Default | Env | Description |
//! |-----|---------|-----|-------------|
//! | `storage_key` | `records` | `RECORDKEEP_STORAGE_KEY` | Key the blob is stored under |
//! | `on_corrupt` | `fail` | `RECORDKEEP_ON_CORRUPT` | `fail` or `reset` when the blob cannot be decoded |
//! | `pretty` | `false` | `RECORDKEEP_PRETTY` | Pretty-print the stored JSON |

use crate::error::Result;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILENAME: &str = "recordkeep.toml";
pub const DEFAULT_STORAGE_KEY: &str = "records";

/// What `load` does with a blob that fails to decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptBlobPolicy {
    /// Return the decode error; the collection is left untouched.
    #[default]
    Fail,
    /// Log a warning and start from an empty collection.
    Reset,
}

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecordkeepConfig {
    /// Key the record collection is stored under.
    #[config(default = "records", env = "RECORDKEEP_STORAGE_KEY")]
    pub storage_key: String,

    /// Behaviour on a malformed stored blob ("fail" or "reset").
    #[config(default = "fail", env = "RECORDKEEP_ON_CORRUPT")]
    pub on_corrupt: CorruptBlobPolicy,

    /// Pretty-print the stored JSON.
    #[config(default = false, env = "RECORDKEEP_PRETTY")]
    pub pretty: bool,
}

impl Default for RecordkeepConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            on_corrupt: CorruptBlobPolicy::Fail,
            pretty: false,
        }
    }
}

impl RecordkeepConfig {
    /// Loads env overrides and `recordkeep.toml` from `config_dir`, if present.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config = Self::builder()
            .env()
            .file(config_dir.as_ref().join(CONFIG_FILENAME))
            .load()?;
        Ok(config)
    }
}
