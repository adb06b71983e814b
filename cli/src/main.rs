// CLI-specific lint overrides
#![allow(clippy::print_stdout, reason = "CLI tools print to stdout")]
#![allow(clippy::print_stderr, reason = "CLI tools print to stderr")]
#![allow(clippy::unwrap_used, reason = "CLI can unwrap for user-facing errors")]
#![allow(clippy::expect_used, reason = "CLI can expect for user-facing errors")]

mod bundle;
mod caveat_parser;
mod cli;
mod commands;
mod output;
mod sig_parser;

use clap::Parser;
use cli::{Cli, Commands};
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Selector(args) => commands::selector::run(args, cli.json),
        Commands::Hash(args) => commands::hash::run(args, cli.json),
        Commands::Create(args) => commands::create::run(args, cli.json),
        Commands::Disable(args) => commands::disable::run(args, cli.json),
        Commands::Redeem(args) => commands::redeem::run(args, cli.json),
        Commands::Environment(args) => commands::environment::run(args, cli.json),
    }
}
