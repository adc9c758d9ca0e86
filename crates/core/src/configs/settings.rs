use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::TaskTreeResult;

/// Workspace settings loaded from `.tasktree/config.yml`.
#[derive(Deserialize, Serialize, JsonSchema, Clone, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SettingsConfig {
    /// Paths to task-definition JSON files, relative to the workspace root
    /// unless absolute.
    pub task_files: Option<Vec<String>>,
    /// Ad hoc shell command strings, listed alongside file-defined tasks but
    /// never grouped.
    pub tasks: Option<Vec<String>>,
}

impl SettingsConfig {
    /// Resolve the configured task-file paths against the workspace root.
    ///
    /// Relative entries are joined onto `workspace_root`; absolute entries
    /// pass through unchanged. Absent configuration yields an empty list.
    pub fn task_file_paths(&self, workspace_root: &Path) -> Vec<PathBuf> {
        self.task_files
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|entry| {
                let path = Path::new(entry);
                if path.is_relative() {
                    workspace_root.join(path)
                } else {
                    path.to_path_buf()
                }
            })
            .collect()
    }

    /// The ad hoc command strings, if any were configured.
    pub fn ad_hoc_commands(&self) -> &[String] {
        self.tasks.as_deref().unwrap_or_default()
    }
}

pub fn parse_settings_config(yaml_str: &str) -> TaskTreeResult<SettingsConfig> {
    let config: SettingsConfig = serde_yaml::from_str(yaml_str)?;
    Ok(config)
}
