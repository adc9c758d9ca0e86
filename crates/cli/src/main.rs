use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tasktree_core::manager::{TaskManager, TaskManagerConfig};

mod commands;

/// Tasktree - aggregate task-definition files and run the tasks they declare
#[derive(Parser)]
#[command(name = "tasktree")]
#[command(about = "Aggregates task-definition JSON files into a searchable, runnable task list")]
#[command(version)]
struct Cli {
    /// Path to the workspace root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    workspace: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every aggregated task in file order
    List {
        /// Case-insensitive substring filter over task and group names
        #[arg(long)]
        filter: Option<String>,
    },
    /// Show tasks grouped by their two-level category path
    Tree {
        /// Case-insensitive substring filter over task and group names
        #[arg(long)]
        filter: Option<String>,
    },
    /// Run a task by name
    Run {
        /// Exact name of the task to run
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let manager = TaskManager::new(TaskManagerConfig {
        workspace_root: cli.workspace,
    })
    .map_err(|e| anyhow::anyhow!("Failed to initialize workspace: {}", e))?;

    match cli.command {
        Commands::List { filter } => commands::list::execute(&manager, filter.as_deref()).await,
        Commands::Tree { filter } => commands::tree::execute(&manager, filter.as_deref()).await,
        Commands::Run { name } => commands::run::execute(&manager, &name).await,
    }
}
