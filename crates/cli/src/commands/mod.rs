pub mod list;
pub mod run;
pub mod tree;

use colored::*;
use tasktree_core::Notice;

/// Print accumulated aggregation notices: warnings to stdout, errors to
/// stderr.
pub fn print_notices(notices: &[Notice]) {
    for notice in notices {
        if notice.is_warning() {
            println!("{} {}", "Warning:".yellow().bold(), notice.to_string().yellow());
        } else {
            eprintln!("{} {}", "Error:".red().bold(), notice.to_string().red());
        }
    }
}
