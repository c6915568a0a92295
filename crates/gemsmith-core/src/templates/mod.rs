//! Template sources, path resolution and rendering
//!
//! This module provides:
//! - Template catalogs (embedded in the binary, or a local directory)
//! - Destination path resolution for template sources
//! - Placeholder rendering against a configuration

pub mod catalog;
pub mod renderer;

use crate::identity::{Identity, GEM_NAME_TOKEN};
use std::path::PathBuf;

pub use catalog::{TemplateCatalog, TemplateSource};
pub use renderer::{PlaceholderRenderer, Renderer};

/// Marker suffix identifying a template source
pub const TEMPLATE_SUFFIX: &str = ".tt";

/// Resolve the destination of a template source, relative to the output directory.
///
/// `%gem_name%` becomes the snake form of the identity and the `.tt` suffix is dropped.
pub fn destination(source: &str, identity: &Identity) -> PathBuf {
    let resolved = source.replace(GEM_NAME_TOKEN, identity.name());
    match resolved.strip_suffix(TEMPLATE_SUFFIX) {
        Some(stripped) => PathBuf::from(stripped),
        None => PathBuf::from(resolved),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_destination_substitutes_name_and_strips_suffix() {
        let identity = Identity::from_raw("sample_gem").unwrap();

        assert_eq!(
            destination("%gem_name%/%gem_name%.gemspec.tt", &identity),
            Path::new("sample_gem/sample_gem.gemspec")
        );
        assert_eq!(
            destination("%gem_name%/bin/setup.tt", &identity),
            Path::new("sample_gem/bin/setup")
        );
    }

    #[test]
    fn test_destination_without_suffix_is_kept() {
        let identity = Identity::from_raw("sample_gem").unwrap();
        assert_eq!(
            destination("%gem_name%/README.md", &identity),
            Path::new("sample_gem/README.md")
        );
    }

    #[test]
    fn test_only_trailing_suffix_is_stripped() {
        let identity = Identity::from_raw("sample_gem").unwrap();
        assert_eq!(
            destination("%gem_name%/a.tt/b.rb.tt", &identity),
            Path::new("sample_gem/a.tt/b.rb")
        );
    }
}
