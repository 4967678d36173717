//! Key-value brain - the persistence port
//!
//! The store talks to a [`Brain`] rather than a concrete backend, so tests
//! run against an in-memory map and an embedding can plug in whatever store
//! its host chat framework provides. [`FileBrain`] is the bundled backend.

pub mod storage;

pub use storage::FileBrain;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use serde_json::Value;

pub trait Brain: Send {
    /// Last value written under `key`, if any.
    fn get(&self, key: &str) -> Option<Value>;

    /// Replace the value under `key`.
    fn set(&mut self, key: &str, value: Value) -> Result<()>;
}

/// In-memory brain. Clones share one map, so a test can keep a handle while
/// the bot owns the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryBrain {
    map: Arc<Mutex<HashMap<String, Value>>>,
}

impl MemoryBrain {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Brain for MemoryBrain {
    fn get(&self, key: &str) -> Option<Value> {
        self.map.lock().unwrap().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.map.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }
}
