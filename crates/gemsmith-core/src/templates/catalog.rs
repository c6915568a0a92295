//! Template catalogs: templates embedded in the binary or read from a local directory
//!
//! Both catalogs are addressed by the same source paths (e.g.
//! `%gem_name%/Gemfile.tt`), so a local directory can override the embedded set
//! during template development.

use std::io;
use std::path::PathBuf;

macro_rules! embedded {
    ($($path:literal),* $(,)?) => {
        &[$(($path, include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $path)))),*]
    };
}

/// Templates compiled into the binary, keyed by source path
const EMBEDDED: &[(&str, &str)] = embedded![
    "%gem_name%/bin/setup.tt",
    "%gem_name%/Gemfile.tt",
    "%gem_name%/%gem_name%.gemspec.tt",
    "%gem_name%/lib/%gem_name%.rb.tt",
    "%gem_name%/lib/%gem_name%/identity.rb.tt",
    "%gem_name%/README.md.tt",
    "%gem_name%/CONTRIBUTING.md.tt",
    "%gem_name%/CODE_OF_CONDUCT.md.tt",
    "%gem_name%/LICENSE.md.tt",
    "%gem_name%/CHANGELOG.md.tt",
    "%gem_name%/.gitignore.tt",
    "%gem_name%/Rakefile.tt",
    "%gem_name%/bin/%gem_name%.tt",
    "%gem_name%/lib/%gem_name%/cli.rb.tt",
    "%gem_name%/lib/%gem_name%/engine.rb.tt",
    "%gem_name%/lib/generators/%gem_name%/install/install_generator.rb.tt",
    "%gem_name%/lib/generators/%gem_name%/install/USAGE.tt",
    "%gem_name%/.rspec.tt",
    "%gem_name%/spec/spec_helper.rb.tt",
    "%gem_name%/spec/lib/%gem_name%/%gem_name%_spec.rb.tt",
    "%gem_name%/Guardfile.tt",
    "%gem_name%/.travis.yml.tt",
    "%gem_name%/.codeclimate.yml.tt",
];

/// Supplies the body of a template source
pub trait TemplateCatalog {
    fn read(&self, source: &str) -> io::Result<String>;
}

/// Template source - either the embedded set or a local directory
#[derive(Debug, Clone, Default)]
pub enum TemplateSource {
    #[default]
    Embedded,
    Local(PathBuf),
}

impl TemplateSource {
    /// Local directory if one is given, embedded templates otherwise
    pub fn from_dir(template_dir: Option<PathBuf>) -> Self {
        match template_dir {
            Some(path) => Self::Local(path),
            None => Self::Embedded,
        }
    }

    /// Source paths of every embedded template
    pub fn embedded_sources() -> impl Iterator<Item = &'static str> {
        EMBEDDED.iter().map(|(source, _)| *source)
    }

    /// Human-readable description, for log output
    pub fn describe(&self) -> String {
        match self {
            Self::Embedded => "built-in templates".to_string(),
            Self::Local(path) => format!("local templates from {}", path.display()),
        }
    }
}

impl TemplateCatalog for TemplateSource {
    fn read(&self, source: &str) -> io::Result<String> {
        match self {
            Self::Embedded => EMBEDDED
                .iter()
                .find(|(path, _)| *path == source)
                .map(|(_, body)| body.to_string())
                .ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("template not found: {}", source),
                    )
                }),
            Self::Local(root) => {
                let path = root.join(source);
                std::fs::read_to_string(&path).map_err(|e| {
                    io::Error::new(
                        e.kind(),
                        format!("failed to read template {}: {}", path.display(), e),
                    )
                })
            }
        }
    }
}
