//! Configuration resolution
//!
//! Merges the input layers into one immutable [`Configuration`]. Precedence,
//! highest first:
//!
//! 1. command flags (toggles only)
//! 2. caller settings (everything except toggles)
//! 3. version-control discovery (`user.name`, `user.email`, `github.user`)
//! 4. hard-coded defaults ([`settings::defaults`])

use crate::error::ScaffoldError;
use crate::identity::{Identity, IdentityResolver};
use crate::settings::{self, Flags, Settings, Toggles};
use crate::vcs::{self, GitConfig, VcsConfig};
use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeMap;

/// Fully resolved options for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    identity: Identity,
    gem_platform: String,
    author_name: String,
    author_email: String,
    author_url: String,
    gem_url: String,
    company_name: String,
    company_url: String,
    github_user: String,
    year: i32,
    ruby_version: String,
    ruby_patch: String,
    rails_version: String,
    post_install_message: Option<String>,
    toggles: Toggles,
}

impl Configuration {
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn gem_name(&self) -> &str {
        self.identity.name()
    }

    pub fn gem_class(&self) -> &str {
        self.identity.class()
    }

    pub fn gem_platform(&self) -> &str {
        &self.gem_platform
    }

    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    pub fn author_email(&self) -> &str {
        &self.author_email
    }

    pub fn author_url(&self) -> &str {
        &self.author_url
    }

    pub fn gem_url(&self) -> &str {
        &self.gem_url
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn company_url(&self) -> &str {
        &self.company_url
    }

    pub fn github_user(&self) -> &str {
        &self.github_user
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn ruby_version(&self) -> &str {
        &self.ruby_version
    }

    pub fn ruby_patch(&self) -> &str {
        &self.ruby_patch
    }

    pub fn rails_version(&self) -> &str {
        &self.rails_version
    }

    /// `None` is an explicit "no message", not an unresolved option
    pub fn post_install_message(&self) -> Option<&str> {
        self.post_install_message.as_deref()
    }

    pub fn toggles(&self) -> &Toggles {
        &self.toggles
    }

    /// Every value a template may reference, keyed by placeholder name.
    ///
    /// Besides the plain options this includes a few gemspec fragments derived
    /// from the toggles, so templates stay free of conditionals.
    pub fn placeholders(&self) -> BTreeMap<&'static str, String> {
        let t = &self.toggles;
        let mut values = BTreeMap::new();

        values.insert("gem_name", self.gem_name().to_string());
        values.insert("gem_class", self.gem_class().to_string());
        values.insert("gem_platform", self.gem_platform.clone());
        values.insert("author_name", self.author_name.clone());
        values.insert("author_email", self.author_email.clone());
        values.insert("author_url", self.author_url.clone());
        values.insert("gem_url", self.gem_url.clone());
        values.insert("company_name", self.company_name.clone());
        values.insert("company_url", self.company_url.clone());
        values.insert("github_user", self.github_user.clone());
        values.insert("year", self.year.to_string());
        values.insert("ruby_version", self.ruby_version.clone());
        values.insert("ruby_patch", self.ruby_patch.clone());
        values.insert("rails_version", self.rails_version.clone());
        values.insert(
            "post_install_message",
            self.post_install_message.clone().unwrap_or_default(),
        );

        values.insert("bin", t.bin.to_string());
        values.insert("rails", t.rails.to_string());
        values.insert("pry", t.pry.to_string());
        values.insert("guard", t.guard.to_string());
        values.insert("rspec", t.rspec.to_string());
        values.insert("travis", t.travis.to_string());
        values.insert("code_climate", t.code_climate.to_string());

        values.insert("gem_runtime_dependencies", self.runtime_dependencies());
        values.insert("gem_development_dependencies", self.development_dependencies());
        values.insert("gem_executables", self.executables());
        values.insert("gem_post_install_message", self.post_install_line());

        values
    }

    fn runtime_dependencies(&self) -> String {
        let mut lines = Vec::new();
        if self.toggles.bin {
            lines.push(dependency_line("add_dependency", "thor", Some("~> 0.19")));
        }
        if self.toggles.rails {
            let requirement = format!("~> {}", self.rails_version);
            lines.push(dependency_line("add_dependency", "rails", Some(&requirement)));
        }
        lines.join("\n")
    }

    fn development_dependencies(&self) -> String {
        let t = &self.toggles;
        let mut lines = vec![dependency_line("add_development_dependency", "rake", None)];
        if t.pry {
            lines.push(dependency_line("add_development_dependency", "pry", None));
            lines.push(dependency_line("add_development_dependency", "pry-byebug", None));
        }
        if t.rspec {
            lines.push(dependency_line("add_development_dependency", "rspec", None));
        }
        if t.guard_enabled() {
            lines.push(dependency_line("add_development_dependency", "guard-rspec", None));
        }
        if t.code_climate {
            lines.push(dependency_line(
                "add_development_dependency",
                "codeclimate-test-reporter",
                None,
            ));
        }
        lines.join("\n")
    }

    fn executables(&self) -> String {
        if self.toggles.bin {
            format!("  spec.executables << \"{}\"", self.gem_name())
        } else {
            String::new()
        }
    }

    fn post_install_line(&self) -> String {
        match &self.post_install_message {
            Some(message) => format!(
                "  spec.post_install_message = \"{}\"",
                message.replace('\\', "\\\\").replace('"', "\\\"")
            ),
            None => String::new(),
        }
    }
}

fn dependency_line(method: &str, gem: &str, requirement: Option<&str>) -> String {
    match requirement {
        Some(req) => format!("  spec.{} \"{}\", \"{}\"", method, gem, req),
        None => format!("  spec.{} \"{}\"", method, gem),
    }
}

/// Builds configurations, memoizing the gem identity across calls
pub struct ConfigurationBuilder<V: VcsConfig = GitConfig> {
    vcs: V,
    identity: IdentityResolver,
}

impl ConfigurationBuilder<GitConfig> {
    /// A builder that discovers values from the local git configuration
    pub fn new() -> Self {
        Self::with_vcs(GitConfig)
    }
}

impl Default for ConfigurationBuilder<GitConfig> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VcsConfig> ConfigurationBuilder<V> {
    pub fn with_vcs(vcs: V) -> Self {
        Self {
            vcs,
            identity: IdentityResolver::new(),
        }
    }

    /// Resolve the identity forms. See [`IdentityResolver::resolve_name`].
    pub fn resolve_name(&self, raw: Option<&str>) -> Result<&Identity, ScaffoldError> {
        self.identity.resolve_name(raw)
    }

    /// Merge all layers into a configuration
    pub fn build(
        &self,
        raw_name: Option<&str>,
        settings: &Settings,
        flags: &Flags,
    ) -> Result<Configuration, ScaffoldError> {
        let identity = self.resolve_name(raw_name)?.clone();
        let defaults = settings::defaults();

        let author_name = settings
            .author_name
            .clone()
            .or_else(|| self.vcs.value(vcs::USER_NAME_KEY))
            .unwrap_or_else(|| defaults.author_name.to_string());
        let author_email = settings
            .author_email
            .clone()
            .or_else(|| self.vcs.value(vcs::USER_EMAIL_KEY))
            .unwrap_or_else(|| defaults.author_email.to_string());
        let author_url = settings
            .author_url
            .clone()
            .unwrap_or_else(|| defaults.author_url.to_string());

        Ok(Configuration {
            identity,
            gem_platform: settings
                .gem_platform
                .clone()
                .unwrap_or_else(|| defaults.gem_platform.to_string()),
            gem_url: settings.gem_url.clone().unwrap_or_else(|| author_url.clone()),
            company_name: settings
                .company_name
                .clone()
                .unwrap_or_else(|| author_name.clone()),
            company_url: settings
                .company_url
                .clone()
                .unwrap_or_else(|| author_url.clone()),
            github_user: settings
                .github_user
                .clone()
                .or_else(|| self.vcs.value(vcs::GITHUB_USER_KEY))
                .unwrap_or_else(|| defaults.github_user.to_string()),
            year: settings.year.unwrap_or_else(current_year),
            ruby_version: settings
                .ruby_version
                .clone()
                .unwrap_or_else(|| defaults.ruby_version.to_string()),
            ruby_patch: settings
                .ruby_patch
                .clone()
                .unwrap_or_else(|| defaults.ruby_patch.to_string()),
            rails_version: settings
                .rails_version
                .clone()
                .unwrap_or_else(|| defaults.rails_version.to_string()),
            post_install_message: settings.post_install_message.clone(),
            toggles: defaults.toggles.with_flags(flags),
            author_name,
            author_email,
            author_url,
        })
    }
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}
