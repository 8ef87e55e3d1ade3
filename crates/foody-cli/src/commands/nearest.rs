use crate::cli::GlobalFlags;
use crate::cli::root_commands::NearestArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `foody nearest`.
pub fn handle(args: &NearestArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let hits = ctx.store.nearest(args.kind, args.lon, args.lat, args.limit)?;
    output(&hits, flags.format)
}
