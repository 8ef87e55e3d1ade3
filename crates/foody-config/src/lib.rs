//! # foody-config
//!
//! Layered configuration loading for the `foody` tools using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FOODY_*` prefix, `__` as separator)
//! 2. Project-level `.foodylicious/config.toml`
//! 3. User-level `~/.config/foodylicious/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `FOODY_STORE__BACKEND` -> `store.backend`, `FOODY_SEED__RESET_BEFORE_SEED`
//! -> `seed.reset_before_seed`. The `__` (double underscore) separates nested
//! config sections.
//!
//! # Usage
//!
//! ```no_run
//! use foody_config::FoodyConfig;
//!
//! let config = FoodyConfig::load_with_dotenv().expect("config");
//! if config.store.is_persistent() {
//!     println!("collections live in {}", config.store.data_dir.display());
//! }
//! ```

mod error;
mod general;
mod seed;
mod store;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use seed::SeedConfig;
pub use store::{StoreBackend, StoreConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG: &str = ".foodylicious/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FoodyConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl FoodyConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed, or
    /// `ConfigError::InvalidValue` if the merged values are unusable.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the workspace root.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and check a config from any figment.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.check()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("FOODY_").split("__"))
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.store.is_persistent() && self.store.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store.data_dir".into(),
                reason: "the jsonl backend needs a data directory".into(),
            });
        }
        if self.general.log_filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "general.log_filter".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("foodylicious").join("config.toml"))
    }

    /// Walks up from `CARGO_MANIFEST_DIR` (crate -> crates/ -> root) looking
    /// for `.env`, then falls back to the current directory. Missing files
    /// are ignored.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
