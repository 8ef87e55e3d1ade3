use anyhow::Context;
use clap::Parser;
use foody_config::FoodyConfig;
use foody_schema::SchemaRegistry;

mod cli;
mod commands;
mod context;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("foody error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = FoodyConfig::load_with_dotenv().context("failed to load foody configuration")?;
    let flags = cli.global_flags();
    init_tracing(&flags, &config.general.log_filter)?;

    let registry = SchemaRegistry::new();

    match &cli.command {
        cli::Commands::Kinds => return commands::kinds::handle(&registry, &flags),
        cli::Commands::Validate(args) => return commands::validate::handle(args, &registry, &flags),
        cli::Commands::Schema(args) => return commands::schema::handle(args, &flags),
        cli::Commands::Indexes(args) => return commands::indexes::handle(args, &flags),
        _ => {}
    }

    let ctx = context::AppContext::init(config, registry, &flags)
        .context("failed to initialize foody application context")?;
    commands::dispatch::dispatch(cli.command, &ctx, &flags)
}

/// `FOODY_LOG` wins; otherwise `--quiet`/`--verbose`, then `general.log_filter`.
/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(flags: &cli::GlobalFlags, configured: &str) -> anyhow::Result<()> {
    let level = log_level(flags, configured);
    let filter = tracing_subscriber::EnvFilter::try_from_env("FOODY_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn log_level<'a>(flags: &cli::GlobalFlags, configured: &'a str) -> &'a str {
    if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        configured
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::log_level;
    use crate::cli::Cli;

    fn level_for(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(args).expect("cli should parse");
        log_level(&cli.global_flags(), "foody_schema=info").to_string()
    }

    #[test]
    fn flags_pick_the_log_level() {
        assert_eq!(level_for(&["foody", "kinds"]), "foody_schema=info");
        assert_eq!(level_for(&["foody", "kinds", "--verbose"]), "debug");
        assert_eq!(level_for(&["foody", "--quiet", "--verbose", "kinds"]), "error");
    }
}
