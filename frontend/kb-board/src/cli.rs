use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "kanban")]
#[command(about = "Terminal client for the Kanban project API")]
#[command(version)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// API base URL (overrides config.toml and KANBAN_API_BASE_URL)
    #[arg(long, global = true)]
    pub(crate) api_url: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
