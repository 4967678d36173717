//! CLI command implementations

pub mod definition;
pub mod roster;
pub mod send;

pub use definition::{Cli, Commands};

use crate::config::Config;

/// Pick the caller identity for a dispatched message: explicit flag first,
/// then the configured default, then $USER, then a generic fallback.
pub fn resolve_caller(explicit: Option<String>, config: &Config) -> String {
    explicit
        .or_else(|| config.shell.default_user.clone())
        .or_else(|| std::env::var("USER").ok())
        .unwrap_or_else(|| "you".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShellConfig;
    use serial_test::serial;

    #[test]
    fn test_resolve_caller_prefers_explicit() {
        let config = Config {
            roster: Vec::new(),
            shell: ShellConfig {
                default_user: Some("configured".to_string()),
            },
        };
        assert_eq!(
            resolve_caller(Some("flag".to_string()), &config),
            "flag"
        );
    }

    #[test]
    fn test_resolve_caller_falls_back_to_config() {
        let config = Config {
            roster: Vec::new(),
            shell: ShellConfig {
                default_user: Some("configured".to_string()),
            },
        };
        assert_eq!(resolve_caller(None, &config), "configured");
    }

    #[test]
    #[serial]
    fn test_resolve_caller_falls_back_to_env_then_generic() {
        let config = Config::default();

        std::env::set_var("USER", "envuser");
        assert_eq!(resolve_caller(None, &config), "envuser");

        std::env::remove_var("USER");
        assert_eq!(resolve_caller(None, &config), "you");
    }
}
