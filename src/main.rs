use anyhow::Context as _;
use clap::Parser;
use subscout::cli::{Cli, Context};
use subscout::config::AppSettings;
use subscout::output;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if let Err(e) = run(cli).await {
        output::print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = match &cli.config {
        Some(path) => AppSettings::load_from(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => AppSettings::load().context("failed to load settings")?,
    };

    let ctx = Context {
        settings,
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    cli.command.execute(&ctx).await?;
    Ok(())
}

/// Logs go to stderr so stdout stays clean for CSV/JSON. `RUST_LOG` wins
/// over the verbosity flags.
fn init_tracing(verbose: bool, quiet: bool) {
    let level = if verbose {
        "subscout=debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
