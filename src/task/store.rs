//! Task store - all operations over the per-user task book
//!
//! The store loads the book from the brain once at construction and treats
//! the in-memory copy as the source of truth, writing it back after every
//! mutation. A failed write-back is logged and does not fail the operation;
//! surfacing persistence trouble is the backend's job.

use thiserror::Error;
use tracing::warn;

use super::model::{TaskBook, TaskList, View};
use crate::brain::Brain;

/// Brain key the whole task book lives under.
const BRAIN_KEY: &str = "tasks";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("no task list exists for {0}")]
    UserNotFound(String),

    #[error("task #{index} does not exist; {pending} tasks pending")]
    OutOfRange { index: usize, pending: usize },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// What happened when a task was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedTask {
    /// Index the new task got in the pending list.
    pub index: usize,

    /// True when this was the user's first task ever.
    pub first_for_user: bool,
}

pub struct TaskStore {
    brain: Box<dyn Brain>,
    book: TaskBook,
}

impl TaskStore {
    /// Read the task book out of the brain. A missing key is an empty book;
    /// a malformed one is discarded with a warning rather than taking the
    /// bot down.
    pub fn new(brain: Box<dyn Brain>) -> Self {
        let book = match brain.get(BRAIN_KEY) {
            Some(value) => match serde_json::from_value(value) {
                Ok(book) => book,
                Err(e) => {
                    warn!("Ignoring malformed task book in brain: {}", e);
                    TaskBook::default()
                }
            },
            None => TaskBook::default(),
        };

        Self { brain, book }
    }

    /// Append a task to `user`'s pending list, creating the list if this is
    /// their first task. Accepts any user name and text.
    pub fn create(&mut self, user: &str, text: &str) -> CreatedTask {
        let first_for_user = !self.book.contains_key(user);

        let list = self.book.entry(user.to_string()).or_default();
        list.pending.push(text.to_string());
        let index = list.pending.len() - 1;

        self.persist();

        CreatedTask {
            index,
            first_for_user,
        }
    }

    /// The user's full task list, if they have ever created a task.
    pub fn tasks(&self, user: &str) -> Option<&TaskList> {
        self.book.get(user)
    }

    /// One side of the user's task list.
    pub fn list(&self, user: &str, view: View) -> Result<&[String]> {
        self.book
            .get(user)
            .map(|list| list.view(view))
            .ok_or_else(|| StoreError::UserNotFound(user.to_string()))
    }

    /// Move the pending task at `index` to done and return its text.
    pub fn complete(&mut self, user: &str, index: usize) -> Result<String> {
        let list = self.list_mut(user)?;

        if index >= list.pending.len() {
            return Err(StoreError::OutOfRange {
                index,
                pending: list.pending.len(),
            });
        }

        let text = list.pending.remove(index);
        list.done.push(text.clone());

        self.persist();
        Ok(text)
    }

    /// Move every pending task to done, preserving pending order, and return
    /// how many moved. Zero pending tasks is a normal 0, not an error.
    pub fn complete_all(&mut self, user: &str) -> Result<usize> {
        let list = self.list_mut(user)?;

        let moved = list.pending.len();
        let drained: Vec<String> = list.pending.drain(..).collect();
        list.done.extend(drained);

        if moved > 0 {
            self.persist();
        }
        Ok(moved)
    }

    /// Empty the done list and return the removed texts in their original
    /// order, so the caller can report each one.
    pub fn clear_done(&mut self, user: &str) -> Result<Vec<String>> {
        let list = self.list_mut(user)?;
        let removed: Vec<String> = list.done.drain(..).collect();

        if !removed.is_empty() {
            self.persist();
        }
        Ok(removed)
    }

    fn list_mut(&mut self, user: &str) -> Result<&mut TaskList> {
        self.book
            .get_mut(user)
            .ok_or_else(|| StoreError::UserNotFound(user.to_string()))
    }

    fn persist(&mut self) {
        let value = match serde_json::to_value(&self.book) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to serialize task book: {}", e);
                return;
            }
        };

        if let Err(e) = self.brain.set(BRAIN_KEY, value) {
            warn!("Failed to persist task book: {}", e);
        }
    }
}
