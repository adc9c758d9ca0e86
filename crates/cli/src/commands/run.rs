use anyhow::Result;
use colored::*;
use tasktree_core::manager::TaskManager;

use super::print_notices;

pub async fn execute(manager: &TaskManager, name: &str) -> Result<()> {
    let pass = manager.tasks(false).await;
    print_notices(&pass.notices);

    println!("{} {}", "Running task".bold(), name.cyan());
    println!();

    manager
        .run_task(name)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run task: {}", e))?;

    println!();
    println!(
        "{} {}",
        "✓".green().bold(),
        format!("Task '{}' completed successfully!", name).green().bold()
    );

    Ok(())
}
