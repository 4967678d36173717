//! File-backed brain - JSON file persistence

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::Value;
use tracing::warn;

use super::Brain;
use crate::config::{get_profile_dir, DEFAULT_PROFILE};

pub struct FileBrain {
    profile: String,
    brain_path: PathBuf,
    map: HashMap<String, Value>,
}

impl FileBrain {
    /// Open the brain for a profile, loading whatever was last saved. This
    /// is the "store loaded" point: afterwards `get` reads the in-memory
    /// copy and every `set` writes the file back.
    pub fn open(profile: &str) -> Result<Self> {
        let profile_name = if profile.is_empty() {
            DEFAULT_PROFILE.to_string()
        } else {
            profile.to_string()
        };

        let profile_dir = get_profile_dir(&profile_name)?;
        let brain_path = profile_dir.join("brain.json");
        Self::open_at(profile_name, brain_path)
    }

    /// Open a brain at an explicit file path. Used by tests and by
    /// embeddings that manage their own directories.
    pub fn open_path(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open_at(DEFAULT_PROFILE.to_string(), path.into())
    }

    fn open_at(profile: String, brain_path: PathBuf) -> Result<Self> {
        let map = if brain_path.exists() {
            let content = fs::read_to_string(&brain_path)?;
            if content.trim().is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str(&content)?
            }
        } else {
            HashMap::new()
        };

        Ok(Self {
            profile,
            brain_path,
            map,
        })
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn path(&self) -> &Path {
        &self.brain_path
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.brain_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Create backup
        if self.brain_path.exists() {
            let backup_path = self.brain_path.with_extension("json.bak");
            if let Err(e) = fs::copy(&self.brain_path, &backup_path) {
                warn!("Failed to create brain backup: {}", e);
            }
        }

        let content = serde_json::to_string_pretty(&self.map)?;
        fs::write(&self.brain_path, content)?;
        Ok(())
    }
}

impl Brain for FileBrain {
    fn get(&self, key: &str) -> Option<Value> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.map.insert(key.to_string(), value);
        self.save()
    }
}
