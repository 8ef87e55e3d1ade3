//! Integration tests for layered configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use std::path::PathBuf;

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use foody_config::{ConfigError, FoodyConfig, StoreBackend};
use pretty_assertions::assert_eq;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[store]
backend = "memory"
data_dir = "/tmp/foody"

[seed]
fixtures_path = "fixtures/pune.json"
reset_before_seed = false

[general]
log_filter = "foody_schema=debug"
"#,
        )?;

        let config: FoodyConfig = Figment::from(Serialized::defaults(FoodyConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.store.data_dir, PathBuf::from("/tmp/foody"));
        assert_eq!(config.seed.fixtures_path, Some(PathBuf::from("fixtures/pune.json")));
        assert!(!config.seed.reset_before_seed);
        assert_eq!(config.general.log_filter, "foody_schema=debug");
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".foodylicious")?;
        jail.create_file(
            ".foodylicious/config.toml",
            r#"
[store]
data_dir = "var/collections"
"#,
        )?;

        let config = FoodyConfig::load().expect("config loads");
        assert_eq!(config.store.data_dir, PathBuf::from("var/collections"));
        assert_eq!(config.store.backend, StoreBackend::Jsonl);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".foodylicious")?;
        jail.create_file(
            ".foodylicious/config.toml",
            r#"
[store]
backend = "jsonl"

[seed]
reset_before_seed = true
"#,
        )?;
        jail.set_env("FOODY_STORE__BACKEND", "memory");
        jail.set_env("FOODY_SEED__RESET_BEFORE_SEED", "false");

        let config = FoodyConfig::load().expect("config loads");
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert!(!config.seed.reset_before_seed);
        Ok(())
    });
}

#[test]
fn unknown_backend_is_an_error() {
    Jail::expect_with(|jail| {
        jail.set_env("FOODY_STORE__BACKEND", "mongodb");
        let err = FoodyConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}

#[test]
fn blank_log_filter_fails_the_check() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[general]\nlog_filter = \"  \"\n")?;
        let figment = Figment::from(Serialized::defaults(FoodyConfig::default()))
            .merge(Toml::file("config.toml"));

        let err = FoodyConfig::from_figment(&figment).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "general.log_filter"));
        Ok(())
    });
}
