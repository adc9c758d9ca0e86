//! Tasktree Core Library
//!
//! This is the core library for the tasktree task aggregator. It reads a
//! configured list of task-definition JSON files, concatenates their entries
//! into one flat task list, and exposes grouped, searchable views plus shell
//! execution of individual tasks.
//!
//! ## Architecture
//!
//! The core library is organized into several modules:
//!
//! - [`manager`] - High-level task management interface
//! - [`aggregator`] - Task-file loading with per-file failure isolation and a
//!   coalesced refresh cache
//! - [`grouping`] - Transient grouped/filtered projections of the task list
//! - [`executor`] - Conversion to runnable job specs and shell execution
//! - [`configs`] - Settings and task-definition file parsing
//! - [`results`] - Result types for aggregation and queries
//! - [`types`] - Common error and notice types
//!
//! ## Usage
//!
//! The primary entry point is the [`TaskManager`] which provides a high-level
//! interface for all task operations:
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
//! let pass = manager.tasks(false).await;
//! for task in &pass.tasks {
//!     println!("{}: {}", task.name, task.command);
//! }
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
pub mod configs;
pub mod executor;
pub mod grouping;
pub mod manager;
pub mod results;
pub mod types;

// Re-export the main types for easier usage
pub use manager::{TaskManager, TaskManagerConfig};
pub use types::{Notice, TaskTreeError, TaskTreeResult};
