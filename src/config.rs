// In: src/config.rs

//! The single source of truth for `BitVector` construction settings.
//!
//! `BitweaveConfig` is meant to be built once at the application boundary (from a
//! JSON document, or in code) and handed to `BitVector::with_config`. Every field
//! has a serde default so partial documents are accepted.

use serde::{Deserialize, Serialize};

use crate::error::BitweaveError;

/// Settings for a freshly created, empty `BitVector`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct BitweaveConfig {
    /// Number of 32-bit words allocated up front. Growth doubles from here.
    #[serde(default = "default_initial_capacity_words")]
    pub initial_capacity_words: usize,

    /// If true, every storage growth is reported through `log_metric!`.
    #[serde(default)]
    pub log_growth: bool,
}

impl Default for BitweaveConfig {
    fn default() -> Self {
        Self {
            initial_capacity_words: default_initial_capacity_words(),
            log_growth: false,
        }
    }
}

impl BitweaveConfig {
    /// Parses a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, BitweaveError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Helper for `serde` to provide a default for `initial_capacity_words`.
fn default_initial_capacity_words() -> usize {
    4
}
