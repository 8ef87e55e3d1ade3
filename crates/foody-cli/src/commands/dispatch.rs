use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a store-backed command to its handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Seed(args) => commands::seed::handle(&args, ctx, flags),
        Commands::Setup(args) => commands::setup::handle(&args, ctx, flags),
        Commands::Count => commands::count::handle(ctx, flags),
        Commands::Nearest(args) => commands::nearest::handle(&args, ctx, flags),
        Commands::Kinds | Commands::Validate(_) | Commands::Schema(_) | Commands::Indexes(_) => {
            unreachable!("kinds/validate/schema/indexes are pre-dispatched in main")
        }
    }
}
