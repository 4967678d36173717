//! The bot - routes messages, runs commands, renders replies
//!
//! [`Bot::handle`] is the whole chat surface: one incoming message in, zero
//! or more reply lines out. Every store and lookup failure is rendered as a
//! friendly line here; nothing propagates past this module and nothing
//! crashes the process.

pub mod replies;
pub mod router;

use tracing::debug;

use crate::identity::{Lookup, Roster};
use crate::task::{StoreError, TaskStore, View};
use router::{Command, Router, Target};

pub struct Bot {
    router: Router,
    roster: Roster,
    store: TaskStore,
}

impl Bot {
    pub fn new(store: TaskStore, roster: Roster) -> Self {
        Self {
            router: Router::new(),
            roster,
            store,
        }
    }

    /// Handle one incoming message from `caller`. Returns the reply lines;
    /// an empty Vec means the message was not a task command and the bot
    /// stays quiet.
    pub fn handle(&mut self, caller: &str, message: &str) -> Vec<String> {
        let Some(command) = self.router.parse(message) else {
            return Vec::new();
        };
        debug!("Dispatching {:?} for {}", command, caller);

        match command {
            Command::Help => replies::help(),
            Command::Create { target, text } => match self.resolve(caller, &target) {
                Ok(user) => self.create(&user, &text),
                Err(lines) => lines,
            },
            Command::List { target, view } => match self.resolve(caller, &target) {
                Ok(user) => self.list(caller, &user, view),
                Err(lines) => lines,
            },
            Command::Complete { index } => self.complete(caller, index),
            Command::CompleteAll => self.complete_all(caller),
            Command::Clear => self.clear(caller),
        }
    }

    fn resolve(&self, caller: &str, target: &Target) -> Result<String, Vec<String>> {
        match target {
            Target::Caller => Ok(caller.to_string()),
            Target::Handle(raw) => match self.roster.resolve(raw) {
                Lookup::Unique(user) => Ok(user),
                Lookup::NotFound => Err(vec![format!("I don't know anyone matching {}.", raw)]),
                Lookup::Ambiguous(candidates) => Err(vec![format!(
                    "Be more specific - {} matches: {}.",
                    raw,
                    candidates.join(", ")
                )]),
            },
        }
    }

    fn create(&mut self, user: &str, text: &str) -> Vec<String> {
        let created = self.store.create(user, text);

        let mut lines = Vec::new();
        if created.first_for_user {
            lines.push(format!("New task list for {}!", user));
        }
        lines.push(format!("Don't forget to: {} (#{})", text, created.index));
        lines
    }

    fn list(&self, caller: &str, user: &str, view: View) -> Vec<String> {
        match self.store.list(user, view) {
            Ok(tasks) => replies::render_list(view, tasks),
            Err(err) => Self::store_error(caller, err),
        }
    }

    fn complete(&mut self, caller: &str, index: usize) -> Vec<String> {
        match self.store.complete(caller, index) {
            Ok(text) => vec![format!("Done: {}", text)],
            Err(err) => Self::store_error(caller, err),
        }
    }

    fn complete_all(&mut self, caller: &str) -> Vec<String> {
        match self.store.complete_all(caller) {
            Ok(moved) => vec![format!("{} tasks marked as done.", moved)],
            Err(err) => Self::store_error(caller, err),
        }
    }

    fn clear(&mut self, caller: &str) -> Vec<String> {
        match self.store.clear_done(caller) {
            Ok(removed) => {
                let mut lines: Vec<String> = removed
                    .iter()
                    .map(|text| format!("Deleting: {}", text))
                    .collect();
                lines.push(format!("{} done tasks cleared.", removed.len()));
                lines
            }
            Err(err) => Self::store_error(caller, err),
        }
    }

    fn store_error(caller: &str, err: StoreError) -> Vec<String> {
        match err {
            StoreError::UserNotFound(user) => vec![replies::no_task_list(caller, &user)],
            StoreError::OutOfRange { index, pending } => {
                vec![replies::out_of_range(index, pending)]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::MemoryBrain;

    fn bot_with(roster: &[&str]) -> Bot {
        let store = TaskStore::new(Box::new(MemoryBrain::new()));
        Bot::new(
            store,
            Roster::new(roster.iter().map(|s| s.to_string()).collect()),
        )
    }

    #[test]
    fn test_first_create_greets_once() {
        let mut bot = bot_with(&[]);

        let replies = bot.handle("alice", "task me buy milk");
        assert_eq!(
            replies,
            [
                "New task list for alice!".to_string(),
                "Don't forget to: buy milk (#0)".to_string(),
            ]
        );

        let replies = bot.handle("alice", "task me walk dog");
        assert_eq!(replies, ["Don't forget to: walk dog (#1)".to_string()]);
    }

    #[test]
    fn test_non_command_stays_quiet() {
        let mut bot = bot_with(&[]);
        assert!(bot.handle("alice", "good morning").is_empty());
    }

    #[test]
    fn test_list_for_unknown_self() {
        let mut bot = bot_with(&[]);
        assert_eq!(
            bot.handle("alice", "task list"),
            ["No task list for you yet. Start one with: task me <something>".to_string()]
        );
    }

    #[test]
    fn test_out_of_range_carries_pending_count() {
        let mut bot = bot_with(&[]);
        bot.handle("alice", "task me buy milk");

        assert_eq!(
            bot.handle("alice", "task did 1"),
            ["No such task #1. Your pending tasks go from #0 to #0.".to_string()]
        );
    }

    #[test]
    fn test_create_for_ambiguous_handle() {
        let mut bot = bot_with(&["alice", "albert"]);

        let replies = bot.handle("bob", "task @al water the plants");
        assert_eq!(replies.len(), 1);
        assert!(replies[0].starts_with("Be more specific - @al matches:"));
        assert!(replies[0].contains("alice"));
        assert!(replies[0].contains("albert"));
    }

    #[test]
    fn test_create_for_unknown_handle() {
        let mut bot = bot_with(&["alice"]);
        assert_eq!(
            bot.handle("bob", "task @zed water the plants"),
            ["I don't know anyone matching @zed.".to_string()]
        );
    }

    #[test]
    fn test_create_for_resolved_handle_lands_on_their_list() {
        let mut bot = bot_with(&["alice", "bob"]);

        bot.handle("bob", "task @alice water the plants");

        assert_eq!(
            bot.handle("bob", "task list @alice"),
            [
                "Task #0: water the plants".to_string(),
                "------------------------------".to_string(),
                "Total pending: 1".to_string(),
            ]
        );
    }

    #[test]
    fn test_clear_reports_each_deleted_task() {
        let mut bot = bot_with(&[]);
        bot.handle("alice", "task me one");
        bot.handle("alice", "task me two");
        bot.handle("alice", "task did all");

        assert_eq!(
            bot.handle("alice", "task clear"),
            [
                "Deleting: one".to_string(),
                "Deleting: two".to_string(),
                "2 done tasks cleared.".to_string(),
            ]
        );
        assert_eq!(
            bot.handle("alice", "task clear"),
            ["0 done tasks cleared.".to_string()]
        );
    }

    #[test]
    fn test_help_lists_the_commands() {
        let mut bot = bot_with(&[]);
        let replies = bot.handle("alice", "task help");
        assert_eq!(replies.len(), 10);
        assert!(replies[0].starts_with("task me"));
    }
}
