//! Persistence backend selection.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Which store the CLI seeds into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local; nothing survives the command.
    Memory,
    /// One `<collection>.jsonl` file per kind under `data_dir`.
    #[default]
    Jsonl,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".foodylicious/data")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Directory holding the collection files of the JSONL backend.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            data_dir: default_data_dir(),
        }
    }
}

impl StoreConfig {
    /// Whether documents outlive the process.
    #[must_use]
    pub const fn is_persistent(&self) -> bool {
        matches!(self.backend, StoreBackend::Jsonl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_jsonl_under_project_dir() {
        let config = StoreConfig::default();
        assert_eq!(config.backend, StoreBackend::Jsonl);
        assert_eq!(config.data_dir, PathBuf::from(".foodylicious/data"));
        assert!(config.is_persistent());
    }
}
