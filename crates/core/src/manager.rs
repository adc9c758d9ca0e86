//! High-level task management interface
//!
//! This module provides the [`TaskManager`] which serves as the primary
//! interface for all task operations. It loads the workspace settings once at
//! startup and passes them explicitly into the aggregator; nothing reads
//! process-wide configuration ad hoc.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use tasktree_core::manager::{TaskManager, TaskManagerConfig};
//!
//! # async fn example() -> tasktree_core::types::TaskTreeResult<()> {
//! let manager = TaskManager::new(TaskManagerConfig {
//!     workspace_root: PathBuf::from("."),
//! })?;
//!
//! // Grouped view filtered by a search query
//! let result = manager.view("build").await;
//!
//! // Run a task by name
//! manager.run_task("Build All").await?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::aggregator::TaskAggregator;
use crate::configs::settings::{parse_settings_config, SettingsConfig};
use crate::executor::{to_job_spec, ShellRunner};
use crate::grouping::compute_view;
use crate::results::{AggregatePass, TaskViewResult};
use crate::types::{TaskTreeError, TaskTreeResult};

/// Relative location of the settings file under the workspace root.
const SETTINGS_FILE: &str = ".tasktree/config.yml";

/// High-level task manager that encapsulates aggregation, grouping, and
/// execution.
pub struct TaskManager {
    workspace_root: PathBuf,
    settings: SettingsConfig,
    aggregator: TaskAggregator,
}

/// Configuration for initializing a task manager
pub struct TaskManagerConfig {
    pub workspace_root: PathBuf,
}

impl TaskManager {
    /// Initialize a task manager from the given workspace root.
    ///
    /// A missing settings file is treated as an empty configuration; a
    /// settings file that exists but fails to parse is a hard error.
    pub fn new(config: TaskManagerConfig) -> TaskTreeResult<Self> {
        let settings = Self::load_settings(&config.workspace_root)?;
        let aggregator = TaskAggregator::new(settings.clone(), config.workspace_root.clone());

        Ok(Self {
            workspace_root: config.workspace_root,
            settings,
            aggregator,
        })
    }

    /// The aggregated flat task list, rebuilt from disk when `force_refresh`
    /// is set.
    pub async fn tasks(&self, force_refresh: bool) -> Arc<AggregatePass> {
        self.aggregator.get_tasks(force_refresh).await
    }

    /// Drop the cached task list; the next query re-reads all files.
    pub async fn clear_cache(&self) {
        self.aggregator.clear_cache().await;
    }

    /// Compute the grouped view of all tasks matching `query`.
    pub async fn view(&self, query: &str) -> TaskViewResult {
        let pass = self.aggregator.get_tasks(false).await;
        TaskViewResult {
            view: compute_view(&pass.tasks, query),
            notices: pass.notices.clone(),
        }
    }

    /// Run the first aggregated task whose name matches exactly.
    pub async fn run_task(&self, name: &str) -> TaskTreeResult<()> {
        let pass = self.aggregator.get_tasks(false).await;
        let task = pass
            .tasks
            .iter()
            .find(|task| task.name == name)
            .ok_or_else(|| TaskTreeError::Task(format!("Task '{}' not found", name)))?;

        let job = to_job_spec(task);
        ShellRunner::new(&self.workspace_root).run(&job)
    }

    /// Ad hoc command strings from the settings file. These are listed next
    /// to file-defined tasks but never grouped.
    pub fn ad_hoc_commands(&self) -> &[String] {
        self.settings.ad_hoc_commands()
    }

    fn load_settings(workspace_root: &Path) -> TaskTreeResult<SettingsConfig> {
        let settings_path = workspace_root.join(SETTINGS_FILE);
        let content = match std::fs::read_to_string(&settings_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(SettingsConfig::default());
            }
            Err(e) => {
                return Err(TaskTreeError::Config(format!(
                    "Failed to read settings {}: {}",
                    settings_path.display(),
                    e
                )));
            }
        };

        parse_settings_config(&content).map_err(|e| {
            TaskTreeError::Config(format!(
                "Failed to parse settings {}: {}",
                settings_path.display(),
                e
            ))
        })
    }
}
