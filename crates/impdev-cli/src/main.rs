//! CLI entry point.
//!
//! Wiring happens in `bootstrap`; dispatch routes to handlers which delegate
//! to the core services.

use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use impdev_cli::{Cli, CliConfig, CliError, bootstrap, handlers, outcome_exit_code};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before parsing so clap sees IMPDEV_* from it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let code = match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err}", style("error:").red().bold());
            err.exit_code()
        }
    };
    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<i32, CliError> {
    let config = CliConfig::from_cli(&cli)?;
    let ctx = bootstrap(config)?;
    let outcome = handlers::dispatch(&ctx, cli.command).await?;
    tracing::debug!(?outcome, "command finished");
    Ok(outcome_exit_code(outcome))
}

/// Logs go to stderr so they never mix with command output.
///
/// `-v` forces debug level; otherwise `RUST_LOG` applies, defaulting to warn.
fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("cannot initialize logging: {e}"))
}
