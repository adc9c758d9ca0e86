use anyhow::Result;
use colored::*;
use tasktree_core::grouping::matches_query;
use tasktree_core::manager::TaskManager;

use super::print_notices;

pub async fn execute(manager: &TaskManager, filter: Option<&str>) -> Result<()> {
    let pass = manager.tasks(false).await;
    print_notices(&pass.notices);

    let query = filter.unwrap_or("");
    let matching: Vec<_> = pass
        .tasks
        .iter()
        .filter(|task| matches_query(task, query))
        .collect();

    println!("{}", "Tasks".bold().underline());
    if matching.is_empty() {
        println!("  {}", "No tasks found".dimmed());
    }
    for task in matching {
        let group_path = match (task.grand_parent(), task.parent()) {
            (Some(grand_parent), Some(parent)) => format!(" ({}/{})", grand_parent, parent),
            (Some(grand_parent), None) => format!(" ({})", grand_parent),
            (None, Some(parent)) => format!(" (-/{})", parent),
            (None, None) => String::new(),
        };
        println!(
            "{} {}{}",
            task.name.blue().bold(),
            task.command.dimmed(),
            group_path.dimmed()
        );
    }

    let ad_hoc = manager.ad_hoc_commands();
    if !ad_hoc.is_empty() {
        println!();
        println!("{}", "Ad hoc commands".bold().underline());
        for command in ad_hoc {
            println!("  {}", command.dimmed());
        }
    }

    Ok(())
}
