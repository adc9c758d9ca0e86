use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::TaskTreeResult;

/// The two-level category path of a task. Both levels are optional; an absent
/// level means "ungrouped" at that level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TaskGroup {
    pub grand_parent: Option<String>,
    pub parent: Option<String>,
}

/// A single entry from a task-definition file.
///
/// Field names match the wire format exactly. Unknown fields are tolerated;
/// only `name` and `command` are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TaskRecord {
    pub name: String,
    pub command: String,
    pub group: Option<TaskGroup>,
}

impl TaskRecord {
    pub fn grand_parent(&self) -> Option<&str> {
        self.group.as_ref().and_then(|g| g.grand_parent.as_deref())
    }

    pub fn parent(&self) -> Option<&str> {
        self.group.as_ref().and_then(|g| g.parent.as_deref())
    }
}

/// A task entry that failed shape validation, with its index in the file's
/// top-level array.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskShapeError {
    pub index: usize,
    pub message: String,
}

/// Outcome of parsing one task-definition file.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTaskFile {
    pub tasks: Vec<TaskRecord>,
    pub shape_errors: Vec<TaskShapeError>,
}

/// Parse a task-definition file: a JSON array of task objects.
///
/// A document that is not a JSON array fails as a whole. Individual elements
/// are validated independently, so one malformed entry is reported as a
/// [`TaskShapeError`] without dropping its siblings.
pub fn parse_task_file(json_str: &str) -> TaskTreeResult<ParsedTaskFile> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(json_str)?;

    let mut tasks = Vec::new();
    let mut shape_errors = Vec::new();
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<TaskRecord>(entry) {
            Ok(task) => tasks.push(task),
            Err(e) => shape_errors.push(TaskShapeError {
                index,
                message: e.to_string(),
            }),
        }
    }

    Ok(ParsedTaskFile {
        tasks,
        shape_errors,
    })
}
