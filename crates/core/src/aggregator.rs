//! Task aggregation over configured task-definition files
//!
//! The aggregator reads every configured task file in order, concatenates the
//! parsed records into one flat list, and caches the result. File-level
//! failures are isolated: a missing or unparsable file contributes zero tasks
//! and a [`Notice`], and processing continues with the next path. No error
//! escapes [`TaskAggregator::get_tasks`] — the caller always receives a
//! (possibly partial or empty) snapshot.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::configs::settings::SettingsConfig;
use crate::configs::tasks::parse_task_file;
use crate::results::AggregatePass;
use crate::types::Notice;

/// Loads and caches the flat task list from all configured task files.
pub struct TaskAggregator {
    settings: SettingsConfig,
    workspace_root: PathBuf,
    cache: Mutex<Option<Arc<AggregatePass>>>,
}

impl TaskAggregator {
    pub fn new(settings: SettingsConfig, workspace_root: PathBuf) -> Self {
        Self {
            settings,
            workspace_root,
            cache: Mutex::new(None),
        }
    }

    /// Return the aggregated task list, rebuilding it from disk if no cached
    /// snapshot exists or `force_refresh` is set.
    ///
    /// The cache lock is held across a rebuild, so concurrent callers wait for
    /// the in-flight pass and share its snapshot rather than starting a second
    /// read pass.
    pub async fn get_tasks(&self, force_refresh: bool) -> Arc<AggregatePass> {
        let mut cache = self.cache.lock().await;
        if force_refresh {
            *cache = None;
        }
        if let Some(pass) = cache.as_ref() {
            return Arc::clone(pass);
        }

        let pass = Arc::new(self.rebuild().await);
        *cache = Some(Arc::clone(&pass));
        pass
    }

    /// Drop the cached snapshot; the next [`get_tasks`](Self::get_tasks) call
    /// re-reads all files from disk.
    pub async fn clear_cache(&self) {
        *self.cache.lock().await = None;
    }

    async fn rebuild(&self) -> AggregatePass {
        let mut tasks = Vec::new();
        let mut notices = Vec::new();

        let paths = self.settings.task_file_paths(&self.workspace_root);
        if paths.is_empty() {
            notices.push(Notice::ConfigMissing);
        }

        for path in paths {
            let content = match tokio::fs::read_to_string(&path).await {
                Ok(content) => content,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    notices.push(Notice::FileNotFound { path });
                    continue;
                }
                Err(e) => {
                    notices.push(Notice::FileReadError {
                        path,
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            match parse_task_file(&content) {
                Ok(parsed) => {
                    for shape_error in parsed.shape_errors {
                        notices.push(Notice::TaskShapeInvalid {
                            path: path.clone(),
                            index: shape_error.index,
                            message: shape_error.message,
                        });
                    }
                    tasks.extend(parsed.tasks);
                }
                Err(e) => {
                    notices.push(Notice::ParseError {
                        path,
                        message: e.to_string(),
                    });
                }
            }
        }

        AggregatePass { tasks, notices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::settings::parse_settings_config;
    use std::path::Path;

    fn settings_for(files: &[&str]) -> SettingsConfig {
        let yaml = files
            .iter()
            .fold(String::from("taskFiles:\n"), |acc, f| {
                acc + &format!("  - {}\n", f)
            });
        parse_settings_config(&yaml).unwrap()
    }

    fn write_file(root: &Path, name: &str, content: &str) {
        std::fs::write(root.join(name), content).unwrap();
    }

    const A_JSON: &str = r#"[{"name":"Build","command":"make","group":{"grand_parent":"build","parent":"native"}}]"#;
    const B_JSON: &str = r#"[{"name":"Test","command":"pytest","group":{"grand_parent":"test","parent":"unit"}}]"#;

    #[tokio::test]
    async fn aggregates_files_in_configured_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_file(temp_dir.path(), "a.json", A_JSON);
        write_file(temp_dir.path(), "b.json", B_JSON);

        let aggregator = TaskAggregator::new(
            settings_for(&["a.json", "b.json"]),
            temp_dir.path().to_path_buf(),
        );
        let pass = aggregator.get_tasks(false).await;

        assert!(pass.notices.is_empty());
        assert_eq!(pass.tasks.len(), 2);
        assert_eq!(pass.tasks[0].name, "Build");
        assert_eq!(pass.tasks[1].name, "Test");
    }

    #[tokio::test]
    async fn missing_file_is_skipped_with_one_notice() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_file(temp_dir.path(), "a.json", A_JSON);

        let aggregator = TaskAggregator::new(
            settings_for(&["missing.json", "a.json"]),
            temp_dir.path().to_path_buf(),
        );
        let pass = aggregator.get_tasks(false).await;

        assert_eq!(pass.tasks.len(), 1);
        assert_eq!(pass.tasks[0].name, "Build");
        assert_eq!(pass.notices.len(), 1);
        assert!(pass.notices[0].is_warning());
        assert!(matches!(pass.notices[0], Notice::FileNotFound { .. }));
    }

    #[tokio::test]
    async fn parse_failure_does_not_affect_other_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_file(temp_dir.path(), "broken.json", "{ not json");
        write_file(temp_dir.path(), "a.json", A_JSON);
        write_file(temp_dir.path(), "b.json", B_JSON);

        let aggregator = TaskAggregator::new(
            settings_for(&["a.json", "broken.json", "b.json"]),
            temp_dir.path().to_path_buf(),
        );
        let pass = aggregator.get_tasks(false).await;

        assert_eq!(pass.tasks.len(), 2);
        assert_eq!(pass.tasks[0].name, "Build");
        assert_eq!(pass.tasks[1].name, "Test");
        assert_eq!(pass.notices.len(), 1);
        assert!(!pass.notices[0].is_warning());
        assert!(matches!(pass.notices[0], Notice::ParseError { .. }));
    }

    #[tokio::test]
    async fn malformed_entry_becomes_shape_notice() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_file(
            temp_dir.path(),
            "a.json",
            r#"[{"name":"Build","command":"make"},{"command":"nameless"}]"#,
        );

        let aggregator =
            TaskAggregator::new(settings_for(&["a.json"]), temp_dir.path().to_path_buf());
        let pass = aggregator.get_tasks(false).await;

        assert_eq!(pass.tasks.len(), 1);
        assert!(matches!(
            pass.notices[0],
            Notice::TaskShapeInvalid { index: 1, .. }
        ));
    }

    #[tokio::test]
    async fn empty_configuration_yields_config_missing_notice() {
        let temp_dir = tempfile::tempdir().unwrap();
        let aggregator =
            TaskAggregator::new(SettingsConfig::default(), temp_dir.path().to_path_buf());
        let pass = aggregator.get_tasks(false).await;

        assert!(pass.tasks.is_empty());
        assert_eq!(pass.notices, vec![Notice::ConfigMissing]);
    }

    #[tokio::test]
    async fn duplicate_names_coexist() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_file(temp_dir.path(), "a.json", A_JSON);
        write_file(temp_dir.path(), "b.json", A_JSON);

        let aggregator = TaskAggregator::new(
            settings_for(&["a.json", "b.json"]),
            temp_dir.path().to_path_buf(),
        );
        let pass = aggregator.get_tasks(false).await;

        assert_eq!(pass.tasks.len(), 2);
        assert_eq!(pass.tasks[0], pass.tasks[1]);
    }

    #[tokio::test]
    async fn cached_snapshot_is_reused_until_invalidated() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_file(temp_dir.path(), "a.json", A_JSON);

        let aggregator =
            TaskAggregator::new(settings_for(&["a.json"]), temp_dir.path().to_path_buf());

        let first = aggregator.get_tasks(false).await;
        write_file(temp_dir.path(), "a.json", B_JSON);

        // Without invalidation the old snapshot is served.
        let second = aggregator.get_tasks(false).await;
        assert_eq!(first, second);

        // Force refresh re-reads from disk.
        let third = aggregator.get_tasks(true).await;
        assert_eq!(third.tasks[0].name, "Test");

        // Explicit clear has the same effect.
        write_file(temp_dir.path(), "a.json", A_JSON);
        aggregator.clear_cache().await;
        let fourth = aggregator.get_tasks(false).await;
        assert_eq!(fourth.tasks[0].name, "Build");
    }

    #[tokio::test]
    async fn concurrent_calls_share_one_snapshot() {
        let temp_dir = tempfile::tempdir().unwrap();
        write_file(temp_dir.path(), "a.json", A_JSON);

        let aggregator = Arc::new(TaskAggregator::new(
            settings_for(&["a.json"]),
            temp_dir.path().to_path_buf(),
        ));

        let left = tokio::spawn({
            let aggregator = Arc::clone(&aggregator);
            async move { aggregator.get_tasks(false).await }
        });
        let right = tokio::spawn({
            let aggregator = Arc::clone(&aggregator);
            async move { aggregator.get_tasks(false).await }
        });

        let (left, right) = (left.await.unwrap(), right.await.unwrap());
        assert!(Arc::ptr_eq(&left, &right));
    }
}
