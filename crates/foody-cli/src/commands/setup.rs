use anyhow::Context;
use foody_core::fixtures::{SEED_ORDER, SampleData};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SetupArgs;
use crate::commands::count::counts;
use crate::context::AppContext;
use crate::output::output;

/// Handle `foody setup`: optionally reset, then seed every collection in
/// dependency order and print the resulting counts.
pub fn handle(args: &SetupArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let fixtures = args
        .fixtures
        .as_ref()
        .or(ctx.config.seed.fixtures_path.as_ref());
    let data = match fixtures {
        Some(path) => SampleData::from_path(path)
            .with_context(|| format!("failed to load fixtures from {}", path.display()))?,
        None => SampleData::load().context("built-in sample data is unreadable")?,
    };

    if !args.keep && ctx.config.seed.reset_before_seed {
        ctx.store.reset().context("failed to reset the store")?;
    }

    for kind in SEED_ORDER {
        let documents = data.documents(kind).to_vec();
        if documents.is_empty() {
            continue;
        }
        let written = ctx
            .registry
            .seed(kind, documents, &ctx.store)
            .with_context(|| format!("setup stopped while seeding {}", kind.collection()))?;
        if !flags.quiet {
            eprintln!("seeded {written} {}", kind.collection());
        }
    }

    output(&counts(&ctx.store, &SEED_ORDER)?, flags.format)
}
