use anyhow::Result;
use colored::*;
use tasktree_core::manager::TaskManager;

use super::print_notices;

pub async fn execute(manager: &TaskManager, filter: Option<&str>) -> Result<()> {
    let result = manager.view(filter.unwrap_or("")).await;
    print_notices(&result.notices);

    println!("{}", "Tasks".bold().underline());
    if result.view.is_empty() {
        println!("  {}", "No grouped tasks found".dimmed());
        return Ok(());
    }

    for group in &result.view.groups {
        println!("{}", group.label.blue().bold());
        for parent in &group.parents {
            println!("  {}", parent.label.cyan());
            for task in &parent.tasks {
                println!("    {} {}", task.name, task.command.dimmed());
            }
        }
    }

    Ok(())
}
