//! todo-client - command-line client for the todo REST API
//!
//! Usage:
//!   todo-client add <task words...>
//!   todo-client list
//!   todo-client view <id>
//!   todo-client complete <id>
//!   todo-client remove <id>

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use todo_rest::actions;
use todo_rest::client::TodoClient;
use todo_rest::config::ClientConfig;
use todo_rest::tracing_setup;

#[derive(Parser)]
#[command(name = "todo-client")]
#[command(about = "Manage a remote todo list through its REST API")]
#[command(version)]
struct Cli {
    /// Todo API URL
    #[arg(long, global = true, env = "TODO_API_URL")]
    api_url: Option<String>,

    /// Config file (default: $HOME/.todo_client.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add task to list
    #[command(alias = "a")]
    Add {
        /// Task name
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        task: Vec<String>,
    },

    /// Show all items of the todo list
    #[command(alias = "l")]
    List,

    /// Show details of a single item
    #[command(alias = "v")]
    View {
        /// Item number
        id: String,
    },

    /// Set the item as completed
    #[command(alias = "c")]
    Complete {
        /// Item number
        id: String,
    },

    /// Delete item by id
    #[command(alias = "d")]
    Remove {
        /// Item number
        id: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_setup::init_cli_tracing();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = ClientConfig::resolve(cli.api_url, cli.config.as_deref())?;
    tracing::debug!(api_url = %config.api_url, "Using API");

    let client = TodoClient::new(config.api_url)?;
    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Add { task } => actions::add_action(&mut out, &client, &task).await?,
        Commands::List => actions::list_action(&mut out, &client).await?,
        Commands::View { id } => actions::view_action(&mut out, &client, &id).await?,
        Commands::Complete { id } => actions::complete_action(&mut out, &client, &id).await?,
        Commands::Remove { id } => actions::remove_action(&mut out, &client, &id).await?,
    }

    Ok(())
}
