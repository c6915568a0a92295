//! Caller-supplied settings, command flags and hard-coded defaults
//!
//! These are the input layers the configuration builder merges. Settings come
//! from the settings file (`~/.gemsmithrc`, YAML) overlaid with command-line
//! overrides; flags only carry the feature toggles.

use crate::error::ScaffoldError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable for overriding the settings file location
pub const SETTINGS_ENV: &str = "GEMSMITH_SETTINGS";

/// Settings file name within the home directory
pub const SETTINGS_FILE_NAME: &str = ".gemsmithrc";

/// Author URL used when nothing else supplies one
pub const DEFAULT_AUTHOR_URL: &str = "https://www.unknown.com";

/// Optional values supplied by the caller. `None` means "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gem_platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gem_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruby_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruby_patch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rails_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_install_message: Option<String>,
}

impl Settings {
    /// Resolve the settings file path: env override first, then `~/.gemsmithrc`
    pub fn default_path() -> Option<PathBuf> {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
            _ => dirs::home_dir().map(|home| home.join(SETTINGS_FILE_NAME)),
        }
    }

    /// Load settings from a YAML file. A missing file yields empty settings.
    pub fn load(path: &Path) -> Result<Self, ScaffoldError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ScaffoldError::Settings {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ScaffoldError::Settings {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Parse settings from YAML. An empty document yields empty settings.
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Overlay `overrides` on top of these settings, field by field
    pub fn overlay(self, overrides: Settings) -> Settings {
        Settings {
            author_name: overrides.author_name.or(self.author_name),
            author_email: overrides.author_email.or(self.author_email),
            author_url: overrides.author_url.or(self.author_url),
            gem_platform: overrides.gem_platform.or(self.gem_platform),
            gem_url: overrides.gem_url.or(self.gem_url),
            company_name: overrides.company_name.or(self.company_name),
            company_url: overrides.company_url.or(self.company_url),
            github_user: overrides.github_user.or(self.github_user),
            year: overrides.year.or(self.year),
            ruby_version: overrides.ruby_version.or(self.ruby_version),
            ruby_patch: overrides.ruby_patch.or(self.ruby_patch),
            rails_version: overrides.rails_version.or(self.rails_version),
            post_install_message: overrides.post_install_message.or(self.post_install_message),
        }
    }
}

/// Feature toggles controlling which optional files are generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Toggles {
    pub bin: bool,
    pub rails: bool,
    pub pry: bool,
    pub guard: bool,
    pub rspec: bool,
    pub travis: bool,
    pub code_climate: bool,
}

impl Default for Toggles {
    fn default() -> Self {
        Self {
            bin: false,
            rails: false,
            pry: true,
            guard: true,
            rspec: true,
            travis: true,
            code_climate: true,
        }
    }
}

impl Toggles {
    /// Apply explicit flags over these toggles
    pub fn with_flags(self, flags: &Flags) -> Self {
        Self {
            bin: flags.bin.unwrap_or(self.bin),
            rails: flags.rails.unwrap_or(self.rails),
            pry: flags.pry.unwrap_or(self.pry),
            guard: flags.guard.unwrap_or(self.guard),
            rspec: flags.rspec.unwrap_or(self.rspec),
            travis: flags.travis.unwrap_or(self.travis),
            code_climate: flags.code_climate.unwrap_or(self.code_climate),
        }
    }

    /// Guard only watches specs, so it needs RSpec enabled too
    pub fn guard_enabled(&self) -> bool {
        self.guard && self.rspec
    }
}

/// Toggle values passed on the command line. `None` means the flag was not given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub bin: Option<bool>,
    pub rails: Option<bool>,
    pub pry: Option<bool>,
    pub guard: Option<bool>,
    pub rspec: Option<bool>,
    pub travis: Option<bool>,
    pub code_climate: Option<bool>,
}

/// Hard-coded values used when no other layer supplies one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub author_name: &'static str,
    pub author_email: &'static str,
    pub author_url: &'static str,
    pub gem_platform: &'static str,
    pub github_user: &'static str,
    pub ruby_version: &'static str,
    pub ruby_patch: &'static str,
    pub rails_version: &'static str,
    pub toggles: Toggles,
}

/// The lowest-precedence layer
pub fn defaults() -> Defaults {
    Defaults {
        author_name: "TODO: Add full name here.",
        author_email: "TODO: Add email address here.",
        author_url: DEFAULT_AUTHOR_URL,
        gem_platform: "Gem::Platform::RUBY",
        github_user: "unknown",
        ruby_version: "2.0.0",
        ruby_patch: "p0",
        rails_version: "3.0",
        toggles: Toggles::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_defaults() {
        let toggles = defaults().toggles;
        assert!(!toggles.bin);
        assert!(!toggles.rails);
        assert!(toggles.pry);
        assert!(toggles.guard);
        assert!(toggles.rspec);
        assert!(toggles.travis);
        assert!(toggles.code_climate);
    }

    #[test]
    fn test_flags_override_toggles_both_ways() {
        let flags = Flags {
            bin: Some(true),
            pry: Some(false),
            ..Flags::default()
        };
        let toggles = Toggles::default().with_flags(&flags);
        assert!(toggles.bin);
        assert!(!toggles.pry);
        assert!(!toggles.rails);
        assert!(toggles.guard);
    }

    #[test]
    fn test_parse_settings_yaml() {
        let yaml = r#"
author_name: Jane Doe
author_url: https://jane.dev
year: 2020
post_install_message: Thanks!
"#;
        let settings = Settings::parse(yaml).unwrap();
        assert_eq!(settings.author_name.as_deref(), Some("Jane Doe"));
        assert_eq!(settings.author_url.as_deref(), Some("https://jane.dev"));
        assert_eq!(settings.year, Some(2020));
        assert_eq!(settings.post_install_message.as_deref(), Some("Thanks!"));
        assert!(settings.company_name.is_none());
    }

    #[test]
    fn test_parse_empty_settings() {
        assert_eq!(Settings::parse("").unwrap(), Settings::default());
        assert_eq!(Settings::parse("  \n").unwrap(), Settings::default());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = tempfile::TempDir::new().unwrap();
        let settings = Settings::load(&temp.path().join("missing.yml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join(".gemsmithrc");
        std::fs::write(&path, "author_name: [unclosed").unwrap();

        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, ScaffoldError::Settings { .. }));
        assert!(err.to_string().contains(".gemsmithrc"));
    }

    #[test]
    fn test_overlay_prefers_overrides() {
        let file = Settings {
            author_name: Some("File Author".to_string()),
            author_email: Some("file@example.com".to_string()),
            ..Settings::default()
        };
        let cli = Settings {
            author_name: Some("Cli Author".to_string()),
            ..Settings::default()
        };

        let merged = file.overlay(cli);
        assert_eq!(merged.author_name.as_deref(), Some("Cli Author"));
        assert_eq!(merged.author_email.as_deref(), Some("file@example.com"));
    }
}
