use std::collections::BTreeMap;

use foody_core::enums::EntityKind;
use foody_schema::indexes::{IndexSpec, indexes_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::IndexesArgs;
use crate::output::output;

/// Declared indexes keyed by collection name.
pub fn catalog(kind: Option<EntityKind>) -> BTreeMap<&'static str, &'static [IndexSpec]> {
    kind.map_or_else(|| EntityKind::ALL.to_vec(), |kind| vec![kind])
        .into_iter()
        .map(|kind| (kind.collection(), indexes_for(kind)))
        .collect()
}

/// Handle `foody indexes`.
pub fn handle(args: &IndexesArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&catalog(args.kind), flags.format)
}
