//! Gem name normalization
//!
//! A gem is known by two forms of the same name: the snake form used for
//! directories, file names and the package itself (`sample_gem`), and the camel
//! form used for the Ruby module (`SampleGem`).

use crate::error::ScaffoldError;
use heck::{ToSnakeCase, ToUpperCamelCase};
use serde::Serialize;
use std::cell::OnceCell;

/// Placeholder token substituted with the snake form in template paths
pub const GEM_NAME_TOKEN: &str = "%gem_name%";

/// The canonical forms of a gem name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    name: String,
    class: String,
}

impl Identity {
    /// Derive both forms from a raw name
    pub fn from_raw(raw: &str) -> Result<Self, ScaffoldError> {
        let raw = raw.trim();
        let name = raw.to_snake_case();
        let class = raw.to_upper_camel_case();

        if name.is_empty() || class.is_empty() {
            return Err(ScaffoldError::InvalidName);
        }

        Ok(Self { name, class })
    }

    /// Lowercase, `_`-separated form (`sample_gem`)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Capitalized, concatenated form (`SampleGem`)
    pub fn class(&self) -> &str {
        &self.class
    }
}

/// Compute-once holder for the identity of a single generation run.
///
/// The first resolution fixes the forms; later calls return them unchanged,
/// whether or not a raw name is passed again.
#[derive(Debug, Default)]
pub struct IdentityResolver {
    cached: OnceCell<Identity>,
}

impl IdentityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve_name(&self, raw: Option<&str>) -> Result<&Identity, ScaffoldError> {
        if let Some(identity) = self.cached.get() {
            return Ok(identity);
        }

        let identity = Identity::from_raw(raw.ok_or(ScaffoldError::InvalidName)?)?;
        Ok(self.cached.get_or_init(|| identity))
    }
}
