use foody_core::enums::EntityKind;
use foody_schema::SchemaRegistry;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct KindSummary {
    pub kind: EntityKind,
    pub collection: &'static str,
    pub required: Vec<&'static str>,
    pub unique: Vec<&'static str>,
}

pub fn summarize(registry: &SchemaRegistry) -> anyhow::Result<Vec<KindSummary>> {
    registry
        .kinds()
        .into_iter()
        .map(|kind| {
            let schema = registry.schema(kind)?;
            Ok(KindSummary {
                kind,
                collection: kind.collection(),
                required: schema.required_fields().collect(),
                unique: schema.unique_fields().collect(),
            })
        })
        .collect()
}

/// Handle `foody kinds`.
pub fn handle(registry: &SchemaRegistry, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&summarize(registry)?, flags.format)
}
