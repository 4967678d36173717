//! Task book - per-user pending and done lists
//!
//! This module owns the data the whole bot revolves around:
//! - Per-user `pending`/`done` task lists ([`TaskList`])
//! - The store with all mutating operations ([`TaskStore`])
//! - Explicit error values for unknown users and bad indices

pub mod model;
pub mod store;

pub use model::{TaskBook, TaskList, View};
pub use store::{CreatedTask, StoreError, TaskStore};
