//! Result types for aggregation and query operations
//!
//! This module contains the output structures returned by the task manager
//! and aggregator, providing a centralized location for result shapes.

use crate::configs::tasks::TaskRecord;
use crate::grouping::TaskView;
use crate::types::Notice;

/// The outcome of one aggregation pass over all configured task files.
///
/// `tasks` preserves file order and encounter order across files; `notices`
/// carries every non-fatal condition hit along the way. The pass is the single
/// source of truth: grouping views are pure projections of it.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatePass {
    pub tasks: Vec<TaskRecord>,
    pub notices: Vec<Notice>,
}

/// Result of computing a grouped, filtered view of the task list.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskViewResult {
    pub view: TaskView,
    pub notices: Vec<Notice>,
}
