//! Initial population settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const fn default_reset_before_seed() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedConfig {
    /// Fixture file used by `setup`. Unset means the built-in sample data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixtures_path: Option<PathBuf>,

    /// Drop every collection before `setup` seeds.
    #[serde(default = "default_reset_before_seed")]
    pub reset_before_seed: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            fixtures_path: None,
            reset_before_seed: default_reset_before_seed(),
        }
    }
}
