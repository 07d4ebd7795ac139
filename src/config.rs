//! Mapping-layer configuration
//!
//! Only the settings this layer owns live here. Addresses, pool sizes and
//! timeouts belong to whatever [`Executor`](crate::executor::Executor) the
//! caller plugs in.

use crate::error::OgmResult;
use crate::model::DEFAULT_LIMIT;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings applied to every statement issued through a [`Db`](crate::Db)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Row limit for neighbourhood selects
    pub limit: usize,
    /// Echo every statement through the logger before running it
    pub debug_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            debug_mode: false,
        }
    }
}

impl Config {
    /// Fill unset values with their defaults
    pub fn load_default(mut self) -> Self {
        if self.limit == 0 {
            self.limit = DEFAULT_LIMIT;
        }
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_debug(mut self, debug_mode: bool) -> Self {
        self.debug_mode = debug_mode;
        self
    }

    pub fn from_yaml_str(s: &str) -> OgmResult<Self> {
        let cfg: Config = serde_yaml::from_str(s)?;
        Ok(cfg.load_default())
    }

    pub fn from_json_str(s: &str) -> OgmResult<Self> {
        let cfg: Config = serde_json::from_str(s)?;
        Ok(cfg.load_default())
    }

    /// Load from a file; `.yaml`/`.yml` is read as YAML, anything else as JSON
    pub fn load(path: impl AsRef<Path>) -> OgmResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            _ => Self::from_json_str(&content),
        }
    }
}
