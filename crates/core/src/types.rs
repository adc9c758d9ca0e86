use std::path::PathBuf;

use thiserror::Error;

/// The main error type for tasktree operations
#[derive(Debug, Error)]
pub enum TaskTreeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Task error: {0}")]
    Task(String),
}

/// Result type alias for tasktree operations
pub type TaskTreeResult<T> = Result<T, TaskTreeError>;

/// A non-fatal condition encountered during an aggregation pass.
///
/// Notices never abort aggregation: the offending file (or entry) is skipped
/// and every other configured file still contributes its tasks. The caller
/// decides how to surface them; the CLI prints warnings to stdout and errors
/// to stderr.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Notice {
    #[error("no task-definition files configured")]
    ConfigMissing,

    #[error("task file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read task file {}: {}", .path.display(), .message)]
    FileReadError { path: PathBuf, message: String },

    #[error("failed to parse task file {}: {}", .path.display(), .message)]
    ParseError { path: PathBuf, message: String },

    #[error("invalid task entry {} in {}: {}", .index, .path.display(), .message)]
    TaskShapeInvalid {
        path: PathBuf,
        index: usize,
        message: String,
    },
}

impl Notice {
    /// Whether this notice is informational rather than an error.
    ///
    /// A missing configuration and a missing file are expected conditions
    /// (paths may be configured ahead of the files existing); everything else
    /// means a file was present but unusable.
    pub fn is_warning(&self) -> bool {
        matches!(self, Notice::ConfigMissing | Notice::FileNotFound { .. })
    }
}
