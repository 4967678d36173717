//! Command routing - ordered pattern table
//!
//! Every route is an anchored, case-insensitive regex paired with an
//! extractor. The table is tried top to bottom and the first match wins; the
//! literal forms (`help`, `list`, `did`, `clear`, `me`) sit above the
//! catch-all `task @user <text>` and the patterns are mutually exclusive, so
//! a message routes to at most one command.

use regex::{Captures, Regex};

use crate::task::View;

/// Whose list a command is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// The user who sent the message.
    Caller,
    /// A raw `@name` token, still to be resolved against the roster.
    Handle(String),
}

/// A parsed task command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create { target: Target, text: String },
    List { target: Target, view: View },
    Complete { index: usize },
    CompleteAll,
    Clear,
    Help,
}

type Extractor = fn(&Captures) -> Command;

pub struct Router {
    routes: Vec<(Regex, Extractor)>,
}

impl Router {
    pub fn new() -> Self {
        let table: &[(&str, Extractor)] = &[
            (r"(?i)^task\s+help$", |_| Command::Help),
            (r"(?i)^task\s+list\s+done\s+(@\w+)$", |c: &Captures| Command::List {
                target: Target::Handle(c[1].to_string()),
                view: View::Done,
            }),
            (r"(?i)^task\s+list\s+done$", |_| Command::List {
                target: Target::Caller,
                view: View::Done,
            }),
            (r"(?i)^task\s+list\s+(@\w+)$", |c: &Captures| Command::List {
                target: Target::Handle(c[1].to_string()),
                view: View::Pending,
            }),
            (r"(?i)^task\s+list$", |_| Command::List {
                target: Target::Caller,
                view: View::Pending,
            }),
            (r"(?i)^task\s+did\s+all$", |_| Command::CompleteAll),
            // An index too large for usize still routes; the store rejects
            // it as out of range.
            (r"(?i)^task\s+did\s+(\d+)$", |c: &Captures| Command::Complete {
                index: c[1].parse().unwrap_or(usize::MAX),
            }),
            (r"(?i)^task\s+clear$", |_| Command::Clear),
            (r"(?i)^task\s+me\s+(.+)$", |c: &Captures| Command::Create {
                target: Target::Caller,
                text: c[1].trim().to_string(),
            }),
            (r"(?i)^task\s+(@\w+)\s+(.+)$", |c: &Captures| Command::Create {
                target: Target::Handle(c[1].to_string()),
                text: c[2].trim().to_string(),
            }),
        ];

        let routes = table
            .iter()
            .map(|(pattern, extract)| (Regex::new(pattern).unwrap(), *extract))
            .collect();

        Self { routes }
    }

    /// Parse a message into a command. `None` means the message is not a
    /// task command at all and the bot should stay quiet.
    pub fn parse(&self, message: &str) -> Option<Command> {
        let message = message.trim();
        for (re, extract) in &self.routes {
            if let Some(caps) = re.captures(message) {
                return Some(extract(&caps));
            }
        }
        None
    }

    #[cfg(test)]
    fn match_count(&self, message: &str) -> usize {
        let message = message.trim();
        self.routes
            .iter()
            .filter(|(re, _)| re.is_match(message))
            .count()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
