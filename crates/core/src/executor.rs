//! Conversion of task records into runnable job specs, and shell execution
//!
//! [`to_job_spec`] is the adapter boundary: it produces a plain description of
//! what to run. [`ShellRunner`] is the in-process execution facility that
//! spawns the shell, inherits stdio, and reports the exit status.

use std::path::Path;
use std::process::Command;

use crate::configs::tasks::TaskRecord;
use crate::types::{TaskTreeError, TaskTreeResult};

/// Well-known job classifications derived from a task's grand-parent label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobKind {
    Build,
    Test,
}

/// A runnable job description handed to the execution facility.
#[derive(Debug, Clone, PartialEq)]
pub struct JobSpec {
    pub name: String,
    pub command_line: String,
    pub kind: Option<JobKind>,
}

/// Convert an aggregated task record into a runnable job spec.
///
/// Only the grand-parent labels `build` and `test` carry a classification;
/// every other label leaves the job unclassified.
pub fn to_job_spec(task: &TaskRecord) -> JobSpec {
    let kind = match task.grand_parent() {
        Some("build") => Some(JobKind::Build),
        Some("test") => Some(JobKind::Test),
        _ => None,
    };

    JobSpec {
        name: task.name.clone(),
        command_line: task.command.clone(),
        kind,
    }
}

/// Executes job specs through `sh -c` with the workspace root as the working
/// directory.
pub struct ShellRunner<'a> {
    workspace_root: &'a Path,
}

impl<'a> ShellRunner<'a> {
    pub fn new(workspace_root: &'a Path) -> Self {
        Self { workspace_root }
    }

    pub fn run(&self, job: &JobSpec) -> TaskTreeResult<()> {
        let mut command = Command::new("sh");
        command.arg("-c").arg(&job.command_line);
        command.current_dir(self.workspace_root);
        command.env("TASKTREE_TASK", &job.name);

        let status = command.status().map_err(|e| {
            TaskTreeError::Task(format!(
                "Failed to execute command '{}': {}",
                job.command_line, e
            ))
        })?;

        if !status.success() {
            return Err(TaskTreeError::Task(format!(
                "Command '{}' failed with exit code: {}",
                job.command_line,
                status.code().unwrap_or(-1)
            )));
        }

        Ok(())
    }
}
