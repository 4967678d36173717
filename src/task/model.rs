//! Task list data model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which side of a task list a command reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Pending,
    Done,
}

/// One user's tasks.
///
/// A task's position in `pending` is the index users reference in
/// `task did <n>`; `done` keeps completion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskList {
    /// Open tasks, oldest first.
    #[serde(default)]
    pub pending: Vec<String>,

    /// Finished tasks, in completion order.
    #[serde(default)]
    pub done: Vec<String>,
}

impl TaskList {
    pub fn view(&self, view: View) -> &[String] {
        match view {
            View::Pending => &self.pending,
            View::Done => &self.done,
        }
    }
}

/// Every user's task list, keyed by canonical user name.
///
/// Entries are created lazily on a user's first task and never removed;
/// clearing `done` leaves the entry in place.
pub type TaskBook = HashMap<String, TaskList>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_selects_the_right_list() {
        let list = TaskList {
            pending: vec!["open".to_string()],
            done: vec!["closed".to_string()],
        };

        assert_eq!(list.view(View::Pending), ["open".to_string()]);
        assert_eq!(list.view(View::Done), ["closed".to_string()]);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let list: TaskList = serde_json::from_str(r#"{"pending": ["x"]}"#).unwrap();
        assert_eq!(list.pending.len(), 1);
        assert!(list.done.is_empty());
    }
}
