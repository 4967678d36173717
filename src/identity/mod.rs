//! User identity resolution
//!
//! Chat commands address other users as `@name` fragments. The roster turns
//! a fragment into zero, one, or many known users, and callers must handle
//! all three outcomes.

use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher};

/// Result of resolving an `@handle` fragment against the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Nobody matches the fragment.
    NotFound,
    /// Exactly one user matches.
    Unique(String),
    /// Several users match, best score first.
    Ambiguous(Vec<String>),
}

/// The known chat users.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    users: Vec<String>,
}

impl Roster {
    pub fn new(users: Vec<String>) -> Self {
        Self { users }
    }

    pub fn users(&self) -> &[String] {
        &self.users
    }

    /// Resolve a raw `@name` token (the `@` is optional) to a known user.
    ///
    /// A case-insensitive exact name wins outright; otherwise the fragment
    /// is fuzzy matched against every roster entry.
    pub fn resolve(&self, raw_handle: &str) -> Lookup {
        let fragment = raw_handle.strip_prefix('@').unwrap_or(raw_handle);
        if fragment.is_empty() {
            return Lookup::NotFound;
        }

        if let Some(user) = self
            .users
            .iter()
            .find(|u| u.eq_ignore_ascii_case(fragment))
        {
            return Lookup::Unique(user.clone());
        }

        let mut matcher = Matcher::new(Config::DEFAULT);
        let pattern = Pattern::parse(fragment, CaseMatching::Ignore, Normalization::Smart);
        let mut hits: Vec<String> = pattern
            .match_list(self.users.iter().map(String::as_str), &mut matcher)
            .into_iter()
            .map(|(name, _score)| name.to_string())
            .collect();

        match hits.len() {
            0 => Lookup::NotFound,
            1 => Lookup::Unique(hits.remove(0)),
            _ => Lookup::Ambiguous(hits),
        }
    }
}
