//! Grouped, filtered projections of the flat task list
//!
//! The view computed here is transient: it is rebuilt from the flat list on
//! every query and never outlives it. Distinct group labels are enumerated in
//! first-seen order, matching the order tasks were aggregated in.

use crate::configs::tasks::TaskRecord;

/// A parent-level group node. `grand_parent` disambiguates same-named parent
/// labels under different grand-parents; they must never be merged.
#[derive(Debug, Clone, PartialEq)]
pub struct ParentGroup {
    pub label: String,
    pub grand_parent: String,
    pub tasks: Vec<TaskRecord>,
}

/// A grand-parent-level group node.
#[derive(Debug, Clone, PartialEq)]
pub struct GrandParentGroup {
    pub label: String,
    pub parents: Vec<ParentGroup>,
}

/// The grouped view of all tasks matching a query.
///
/// Tasks without a grand-parent label do not appear in the grouped view; a
/// task with a grand-parent but no parent contributes its grand-parent node
/// only.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskView {
    pub groups: Vec<GrandParentGroup>,
}

impl TaskView {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Whether a task matches a search query.
///
/// The empty query matches everything; otherwise the query must be a
/// case-insensitive substring of the task's name, its parent label, or its
/// grand-parent label. Absent labels never match.
pub fn matches_query(task: &TaskRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();

    task.name.to_lowercase().contains(&query)
        || task
            .parent()
            .map_or(false, |p| p.to_lowercase().contains(&query))
        || task
            .grand_parent()
            .map_or(false, |g| g.to_lowercase().contains(&query))
}

/// Compute the two-level grouped view of `tasks` filtered by `query`.
pub fn compute_view(tasks: &[TaskRecord], query: &str) -> TaskView {
    let matching: Vec<&TaskRecord> = tasks
        .iter()
        .filter(|task| matches_query(task, query))
        .collect();

    let mut groups: Vec<GrandParentGroup> = Vec::new();
    for task in &matching {
        let grand_parent = match task.grand_parent() {
            Some(label) => label,
            None => continue,
        };
        if !groups.iter().any(|g| g.label == grand_parent) {
            groups.push(GrandParentGroup {
                label: grand_parent.to_string(),
                parents: Vec::new(),
            });
        }
    }

    for group in &mut groups {
        for task in &matching {
            if task.grand_parent() != Some(group.label.as_str()) {
                continue;
            }
            let parent = match task.parent() {
                Some(label) => label,
                None => continue,
            };
            if !group.parents.iter().any(|p| p.label == parent) {
                group.parents.push(ParentGroup {
                    label: parent.to_string(),
                    grand_parent: group.label.clone(),
                    tasks: Vec::new(),
                });
            }
        }

        for parent in &mut group.parents {
            parent.tasks = matching
                .iter()
                .filter(|task| {
                    task.grand_parent() == Some(parent.grand_parent.as_str())
                        && task.parent() == Some(parent.label.as_str())
                })
                .map(|task| (*task).clone())
                .collect();
        }
    }

    TaskView { groups }
}
