//! Version-control configuration discovery

use std::collections::HashMap;
use std::process::Command;

pub const USER_NAME_KEY: &str = "user.name";
pub const USER_EMAIL_KEY: &str = "user.email";
pub const GITHUB_USER_KEY: &str = "github.user";

/// Read-only access to version-control configuration values.
///
/// Absence (no repository, no binary, unset key) is reported as `None`, never as an error.
pub trait VcsConfig {
    fn value(&self, key: &str) -> Option<String>;
}

/// Reads values through `git config --get <key>`
#[derive(Debug, Clone, Copy, Default)]
pub struct GitConfig;

impl VcsConfig for GitConfig {
    fn value(&self, key: &str) -> Option<String> {
        let output = Command::new("git")
            .args(["config", "--get", key])
            .output()
            .ok()?;

        if !output.status.success() {
            return None;
        }

        non_empty(String::from_utf8_lossy(&output.stdout).trim())
    }
}

/// Fixed values, used when discovery should be disabled or predetermined
impl VcsConfig for HashMap<String, String> {
    fn value(&self, key: &str) -> Option<String> {
        self.get(key).and_then(|v| non_empty(v.trim()))
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_config_skips_blank_values() {
        let mut config = HashMap::new();
        config.insert(USER_NAME_KEY.to_string(), "Jane Doe".to_string());
        config.insert(USER_EMAIL_KEY.to_string(), "  ".to_string());

        assert_eq!(config.value(USER_NAME_KEY).as_deref(), Some("Jane Doe"));
        assert_eq!(config.value(USER_EMAIL_KEY), None);
        assert_eq!(config.value(GITHUB_USER_KEY), None);
    }

    #[test]
    fn test_git_config_missing_key_is_none() {
        // Whether or not git is installed, an unknown key never errors
        assert_eq!(GitConfig.value("gemsmith.surely-not-a-real-key"), None);
    }
}
