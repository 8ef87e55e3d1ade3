use foody_config::FoodyConfig;
use foody_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::context::Store;

/// Shared resources for commands that touch the store.
pub struct AppContext {
    pub config: FoodyConfig,
    pub registry: SchemaRegistry,
    pub store: Store,
}

impl AppContext {
    /// Open the configured store. `--data-dir` wins over `store.data_dir`.
    pub fn init(
        mut config: FoodyConfig,
        registry: SchemaRegistry,
        flags: &GlobalFlags,
    ) -> anyhow::Result<Self> {
        if let Some(dir) = &flags.data_dir {
            config.store.data_dir.clone_from(dir);
        }
        let store = Store::open(&config.store, &registry)?;
        tracing::debug!(backend = ?config.store.backend, "store opened");

        Ok(Self {
            config,
            registry,
            store,
        })
    }
}
