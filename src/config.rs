//! Bot configuration - roster and shell defaults

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PROFILE: &str = "default";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Known chat users, addressable as `@name` in commands.
    #[serde(default)]
    pub roster: Vec<String>,

    #[serde(default)]
    pub shell: ShellConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Caller identity when `--user` is not given and $USER is unset.
    #[serde(default)]
    pub default_user: Option<String>,
}

pub fn get_app_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Cannot find home directory")?;
    let dir = home.join(".taskbot");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Data directory for one profile. Each profile gets its own brain file, so
/// separate chat workspaces don't share task books.
pub fn get_profile_dir(profile: &str) -> Result<PathBuf> {
    let dir = get_app_dir()?.join("profiles").join(profile);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_config_deserialize_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.roster.is_empty());
        assert!(config.shell.default_user.is_none());
    }

    #[test]
    fn test_config_roundtrip_through_toml() {
        let config = Config {
            roster: vec!["alice".to_string(), "albert".to_string()],
            shell: ShellConfig {
                default_user: Some("alice".to_string()),
            },
        };

        let content = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&content).unwrap();

        assert_eq!(parsed.roster, config.roster);
        assert_eq!(parsed.shell.default_user.as_deref(), Some("alice"));
    }

    #[test]
    #[serial]
    fn test_save_and_load_config() -> Result<()> {
        let temp = tempdir()?;
        std::env::set_var("HOME", temp.path());

        let config = Config {
            roster: vec!["bob".to_string()],
            shell: ShellConfig::default(),
        };
        save_config(&config)?;

        let loaded = load_config()?;
        assert_eq!(loaded.roster, ["bob".to_string()]);
        Ok(())
    }

    #[test]
    #[serial]
    fn test_load_config_without_file_is_default() -> Result<()> {
        let temp = tempdir()?;
        std::env::set_var("HOME", temp.path());

        let loaded = load_config()?;
        assert!(loaded.roster.is_empty());
        Ok(())
    }

    #[test]
    #[serial]
    fn test_profile_dirs_are_isolated() -> Result<()> {
        let temp = tempdir()?;
        std::env::set_var("HOME", temp.path());

        let work = get_profile_dir("work")?;
        let home = get_profile_dir("home")?;

        assert_ne!(work, home);
        assert!(work.exists());
        assert!(home.exists());
        Ok(())
    }
}
