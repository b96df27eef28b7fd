use std::path::PathBuf;

use clap::Parser;

/// Chat with the travel concierge from your terminal.
#[derive(Parser, Debug)]
#[command(name = "wayfarer", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `wayfarer=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Chat endpoint base URL, overriding the config file.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Print the session token and exit.
    #[arg(long)]
    pub print_token: bool,

    /// Keep the session token in memory only.
    #[arg(long)]
    pub ephemeral: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
