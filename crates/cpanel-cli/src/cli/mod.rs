//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.no_color);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let ctx = commands::Context {
        credentials: cli.credentials.clone(),
        config: cli.authenticator_config(),
        output_format: cli.output.unwrap_or_default(),
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Perform(args) => commands::perform::execute(ctx, args).await,
        Commands::Cleanup(args) => commands::cleanup::execute(ctx, args).await,
        Commands::Records(args) => commands::records::execute(ctx, args).await,
    }
}

/// Log to stderr so stdout carries only command output.
///
/// `RUST_LOG` overrides the default filter.
fn init_tracing(verbose: bool, no_color: bool) {
    let default = if verbose {
        "info,cpanel_core=debug,cpanel_client=debug,cpanel_dns01=debug,cpanel_cli=debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(!no_color)
        .init();
}
