use anyhow::Context;
use foody_core::enums::EntityKind;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::DocumentsArgs;
use crate::commands::shared::read_documents;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub kind: EntityKind,
    pub collection: &'static str,
    pub written: usize,
}

/// Handle `foody seed`.
pub fn handle(args: &DocumentsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let documents = read_documents(&args.file)?;
    let written = ctx
        .registry
        .seed(args.kind, documents, &ctx.store)
        .with_context(|| format!("nothing was written to {}", args.kind.collection()))?;

    output(
        &SeedResponse {
            kind: args.kind,
            collection: args.kind.collection(),
            written,
        },
        flags.format,
    )
}
