//! kanban - terminal client for the Kanban project API
//!
//! # Examples
//!
//! ```bash
//! # List all projects
//! kanban list --pretty
//!
//! # Create a project against another server
//! kanban --api-url http://10.0.0.5:8000 create --name "Website" --description "Relaunch"
//!
//! # Interactive board
//! kanban board
//! ```

mod cli;
mod commands;

use crate::{cli::Cli, commands::Commands};

use kb_board::{BoardResult, ProjectBoard, TerminalNotifier, logger, session};
use kb_client::Client;
use kb_config::Config;
use kb_core::ProjectInput;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use serde::Serialize;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> BoardResult<()> {
    // Explicit flag > env > config.toml > default
    let mut config = Config::load()?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let client = Arc::new(Client::from_config(&config.api));

    match cli.command {
        Commands::List => print_json(&client.list_projects().await?, cli.pretty),
        Commands::Get { id } => print_json(&client.get_project(id).await?, cli.pretty),
        Commands::Create { name, description } => {
            let input = ProjectInput::new(name, description);
            input.validate()?;
            print_json(&client.create_project(&input).await?, cli.pretty)
        }
        Commands::Board => {
            let mut board = ProjectBoard::new(client, TerminalNotifier);
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            session::run(&mut board, stdin, &mut stdout).await
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> BoardResult<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    println!("{}", json);
    Ok(())
}
