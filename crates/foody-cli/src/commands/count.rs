use foody_core::enums::EntityKind;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::{AppContext, Store};
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct CollectionCount {
    pub collection: &'static str,
    pub count: usize,
}

/// Document counts for `kinds`, in the order given.
pub fn counts(store: &Store, kinds: &[EntityKind]) -> anyhow::Result<Vec<CollectionCount>> {
    kinds
        .iter()
        .map(|kind| {
            Ok(CollectionCount {
                collection: kind.collection(),
                count: store.count(*kind)?,
            })
        })
        .collect()
}

/// Handle `foody count`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&counts(&ctx.store, &EntityKind::ALL)?, flags.format)
}
