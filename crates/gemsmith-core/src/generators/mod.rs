//! Generators: turn a configuration into files
//!
//! Every generator owns a fixed list of template sources. Construction binds
//! the configuration and resolves the plan (source → destination pairs), so
//! the full list of files is known before anything is written. `run` renders
//! and writes each planned file, then applies the generator's own side
//! effects (such as marking scripts executable) once all files are written.
//!
//! New generator kinds supply their template list and `run`; planning and
//! file creation come from the shared [`Base`].

pub mod writer;

use crate::configuration::Configuration;
use crate::error::ScaffoldError;
use crate::templates::{self, PlaceholderRenderer, Renderer, TemplateCatalog, TemplateSource};
use std::path::{Path, PathBuf};

pub use writer::{FileWriter, FsWriter};

/// Declares a generator whose `run` only creates its files
macro_rules! file_generator {
    ($(#[$meta:meta])* $ty:ident, $name:literal, [$($source:literal),+ $(,)?]) => {
        $(#[$meta])*
        pub struct $ty<'a> {
            base: $crate::generators::Base<'a>,
        }

        impl<'a> $ty<'a> {
            pub const TEMPLATES: &'static [&'static str] = &[$($source),+];

            pub fn new(configuration: &'a $crate::configuration::Configuration) -> Self {
                Self {
                    base: $crate::generators::Base::new(configuration, Self::TEMPLATES),
                }
            }
        }

        impl $crate::generators::Generator for $ty<'_> {
            fn name(&self) -> &'static str {
                $name
            }

            fn templates(&self) -> &'static [&'static str] {
                Self::TEMPLATES
            }

            fn base(&self) -> &$crate::generators::Base<'_> {
                &self.base
            }

            fn run(
                &self,
                ctx: &mut $crate::generators::RunContext<'_>,
            ) -> Result<Vec<::std::path::PathBuf>, $crate::error::ScaffoldError> {
                self.base.create_files(ctx)
            }
        }
    };
}

pub mod bin;
pub mod features;
pub mod gem;
pub mod project;

pub use bin::Bin;
pub use features::{CodeClimate, Guard, Rails, Rspec, Travis};
pub use gem::Gem;
pub use project::{Documentation, Git, Rake};

/// One template source and where it lands, relative to the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub source: &'static str,
    pub destination: PathBuf,
}

/// Collaborators a generator needs while running
pub struct RunContext<'a> {
    /// Directory the planned destinations are relative to
    pub root: &'a Path,
    pub catalog: &'a dyn TemplateCatalog,
    pub renderer: &'a dyn Renderer,
    pub writer: &'a mut dyn FileWriter,
}

/// Configuration binding and path resolution shared by every generator
#[derive(Debug, Clone)]
pub struct Base<'a> {
    configuration: &'a Configuration,
    plan: Vec<PlannedFile>,
}

impl<'a> Base<'a> {
    pub fn new(configuration: &'a Configuration, templates: &[&'static str]) -> Self {
        let plan = templates
            .iter()
            .map(|&source| PlannedFile {
                source,
                destination: templates::destination(source, configuration.identity()),
            })
            .collect();

        Self {
            configuration,
            plan,
        }
    }

    pub fn plan(&self) -> &[PlannedFile] {
        &self.plan
    }

    /// Destination of a template source, relative to the output directory
    pub fn destination_of(&self, source: &str) -> PathBuf {
        templates::destination(source, self.configuration.identity())
    }

    /// Render and write every planned file, in plan order.
    ///
    /// Stops at the first failure; files already written stay on disk.
    pub fn create_files(&self, ctx: &mut RunContext<'_>) -> Result<Vec<PathBuf>, ScaffoldError> {
        let values = self.configuration.placeholders();
        let mut written = Vec::with_capacity(self.plan.len());

        for planned in &self.plan {
            let target = ctx.root.join(&planned.destination);

            let body = ctx
                .catalog
                .read(planned.source)
                .map_err(|e| ScaffoldError::generation(&target, e))?;
            let rendered = ctx.renderer.render(&body, &values);

            ctx.writer
                .write(&target, &rendered)
                .map_err(|e| ScaffoldError::generation(&target, e))?;

            written.push(target);
        }

        Ok(written)
    }

    /// Mark a generated script as executable by its owner
    pub fn make_executable(
        &self,
        ctx: &mut RunContext<'_>,
        source: &str,
    ) -> Result<(), ScaffoldError> {
        let target = ctx.root.join(self.destination_of(source));
        ctx.writer
            .set_executable(&target)
            .map_err(|e| ScaffoldError::generation(&target, e))
    }
}

/// A kind of generator
pub trait Generator {
    /// Short name, for log output
    fn name(&self) -> &'static str;

    /// Template sources this generator owns
    fn templates(&self) -> &'static [&'static str];

    fn base(&self) -> &Base<'_>;

    /// Planned files, fixed at construction
    fn plan(&self) -> &[PlannedFile] {
        self.base().plan()
    }

    /// Write all planned files, then apply side effects. Returns the written paths.
    fn run(&self, ctx: &mut RunContext<'_>) -> Result<Vec<PathBuf>, ScaffoldError>;
}

/// The generators enabled by a configuration, in run order
pub struct Pipeline<'a> {
    generators: Vec<Box<dyn Generator + 'a>>,
}

impl<'a> Pipeline<'a> {
    pub fn new(configuration: &'a Configuration) -> Self {
        let toggles = configuration.toggles();
        let mut generators: Vec<Box<dyn Generator + 'a>> = vec![
            Box::new(Gem::new(configuration)),
            Box::new(Documentation::new(configuration)),
            Box::new(Git::new(configuration)),
            Box::new(Rake::new(configuration)),
        ];

        if toggles.bin {
            generators.push(Box::new(Bin::new(configuration)));
        }
        if toggles.rails {
            generators.push(Box::new(Rails::new(configuration)));
        }
        if toggles.rspec {
            generators.push(Box::new(Rspec::new(configuration)));
        }
        if toggles.guard_enabled() {
            generators.push(Box::new(Guard::new(configuration)));
        }
        if toggles.travis {
            generators.push(Box::new(Travis::new(configuration)));
        }
        if toggles.code_climate {
            generators.push(Box::new(CodeClimate::new(configuration)));
        }

        Self { generators }
    }

    /// Use an explicit set of generators instead of the toggle-driven defaults
    pub fn from_generators(generators: Vec<Box<dyn Generator + 'a>>) -> Self {
        Self { generators }
    }

    pub fn generators(&self) -> &[Box<dyn Generator + 'a>] {
        &self.generators
    }

    /// Every planned file across all generators, without touching the file system
    pub fn planned(&self) -> Vec<&PlannedFile> {
        self.generators.iter().flat_map(|g| g.plan()).collect()
    }

    /// Run each generator in order. The first failure aborts the remaining generators.
    pub fn run(&self, ctx: &mut RunContext<'_>) -> Result<Vec<PathBuf>, ScaffoldError> {
        let mut written = Vec::new();
        for generator in &self.generators {
            written.extend(generator.run(ctx)?);
        }
        Ok(written)
    }
}

/// Generate a gem under `root` with the toggle-driven generators, writing to disk
pub fn generate(
    configuration: &Configuration,
    root: &Path,
    source: &TemplateSource,
) -> Result<Vec<PathBuf>, ScaffoldError> {
    let pipeline = Pipeline::new(configuration);
    let mut writer = FsWriter;
    let mut ctx = RunContext {
        root,
        catalog: source,
        renderer: &PlaceholderRenderer,
        writer: &mut writer,
    };
    pipeline.run(&mut ctx)
}


#[cfg(test)]
mod tests {
    use super::testing::{configuration, RecordingWriter};
    use super::*;
    use crate::settings::Flags;
    use crate::templates::{PlaceholderRenderer, TemplateSource};

    #[test]
    fn test_default_pipeline_generators() {
        let config = configuration(Flags::default());
        let pipeline = Pipeline::new(&config);
        let names: Vec<_> = pipeline.generators().iter().map(|g| g.name()).collect();

        assert_eq!(
            names,
            vec![
                "gem",
                "documentation",
                "git",
                "rake",
                "rspec",
                "guard",
                "travis",
                "code_climate"
            ]
        );
    }

    #[test]
    fn test_toggles_select_generators() {
        let config = configuration(Flags {
            bin: Some(true),
            rails: Some(true),
            rspec: Some(false),
            guard: Some(false),
            travis: Some(false),
            code_climate: Some(false),
            ..Flags::default()
        });
        let pipeline = Pipeline::new(&config);
        let names: Vec<_> = pipeline.generators().iter().map(|g| g.name()).collect();

        assert_eq!(names, vec!["gem", "documentation", "git", "rake", "bin", "rails"]);
    }

    #[test]
    fn test_every_template_is_embedded() {
        let config = configuration(Flags {
            bin: Some(true),
            rails: Some(true),
            ..Flags::default()
        });
        let pipeline = Pipeline::new(&config);
        let embedded: Vec<_> = TemplateSource::embedded_sources().collect();

        for planned in pipeline.planned() {
            assert!(
                embedded.contains(&planned.source),
                "missing embedded template {}",
                planned.source
            );
        }
        assert_eq!(pipeline.planned().len(), embedded.len());
    }

    #[test]
    fn test_planning_has_no_side_effects() {
        let config = configuration(Flags::default());
        let pipeline = Pipeline::new(&config);
        let planned: Vec<PlannedFile> = pipeline.planned().into_iter().cloned().collect();

        assert!(!planned.is_empty());
        assert!(planned.iter().all(|p| p.destination.starts_with("sample_gem")));

        // The plan fixed before running is exactly what the run writes
        let root = Path::new("/out");
        let mut writer = RecordingWriter::default();
        let written = {
            let mut ctx = RunContext {
                root,
                catalog: &TemplateSource::Embedded,
                renderer: &PlaceholderRenderer,
                writer: &mut writer,
            };
            pipeline.run(&mut ctx).unwrap()
        };
        let expected: Vec<PathBuf> = planned.iter().map(|p| root.join(&p.destination)).collect();
        assert_eq!(written, expected);
        assert_eq!(pipeline.planned().len(), planned.len());
    }

    #[test]
    fn test_guard_needs_rspec() {
        let config = configuration(Flags {
            rspec: Some(false),
            ..Flags::default()
        });
        let pipeline = Pipeline::new(&config);
        let names: Vec<_> = pipeline.generators().iter().map(|g| g.name()).collect();

        assert!(config.toggles().guard);
        assert!(!names.contains(&"guard"));
        assert!(!names.contains(&"rspec"));
    }

    #[test]
    fn test_run_renders_all_planned_files() {
        let config = configuration(Flags::default());
        let pipeline = Pipeline::new(&config);
        let root = Path::new("/out");
        let mut writer = RecordingWriter::default();

        let written = {
            let mut ctx = RunContext {
                root,
                catalog: &TemplateSource::Embedded,
                renderer: &PlaceholderRenderer,
                writer: &mut writer,
            };
            pipeline.run(&mut ctx).unwrap()
        };

        let expected: Vec<_> = pipeline.planned().iter().map(|p| root.join(&p.destination)).collect();
        assert_eq!(written, expected);

        let (_, readme) = writer
            .files
            .iter()
            .find(|(p, _)| p.ends_with("README.md"))
            .unwrap();
        assert!(readme.starts_with("# SampleGem"));
        assert!(!readme.contains("{{"));
    }

    #[test]
    fn test_write_failure_names_path_and_keeps_prior_writes() {
        let config = configuration(Flags::default());
        let pipeline = Pipeline::new(&config);
        let root = Path::new("/out");
        let failing = root.join("sample_gem/Gemfile");
        let mut writer = RecordingWriter {
            fail_on: Some(failing.clone()),
            ..RecordingWriter::default()
        };

        let result = {
            let mut ctx = RunContext {
                root,
                catalog: &TemplateSource::Embedded,
                renderer: &PlaceholderRenderer,
                writer: &mut writer,
            };
            pipeline.run(&mut ctx)
        };

        match result {
            Err(ScaffoldError::Generation { path, .. }) => assert_eq!(path, failing),
            other => panic!("expected generation error, got {:?}", other),
        }
        // bin/setup was written before the failure and is not rolled back
        assert_eq!(writer.files.len(), 1);
        assert!(writer.files[0].0.ends_with("bin/setup"));
        // Side effects never run for a failed generator
        assert!(writer.executables.is_empty());
    }

    struct Notes<'a> {
        base: Base<'a>,
    }

    impl Generator for Notes<'_> {
        fn name(&self) -> &'static str {
            "notes"
        }

        fn templates(&self) -> &'static [&'static str] {
            &["%gem_name%/NOTES.md.tt"]
        }

        fn base(&self) -> &Base<'_> {
            &self.base
        }

        fn run(&self, ctx: &mut RunContext<'_>) -> Result<Vec<PathBuf>, ScaffoldError> {
            self.base.create_files(ctx)
        }
    }

    #[test]
    fn test_custom_generator_reuses_base() {
        let temp = tempfile::TempDir::new().unwrap();
        let templates_dir = temp.path().join("templates/%gem_name%");
        std::fs::create_dir_all(&templates_dir).unwrap();
        std::fs::write(templates_dir.join("NOTES.md.tt"), "# {{gem_class}} notes").unwrap();

        let config = configuration(Flags::default());
        let notes = Notes {
            base: Base::new(&config, &["%gem_name%/NOTES.md.tt"]),
        };
        let pipeline = Pipeline::from_generators(vec![Box::new(notes)]);
        let local = TemplateSource::Local(temp.path().join("templates"));
        let mut writer = FsWriter;

        let written = {
            let mut ctx = RunContext {
                root: temp.path(),
                catalog: &local,
                renderer: &PlaceholderRenderer,
                writer: &mut writer,
            };
            pipeline.run(&mut ctx).unwrap()
        };

        let notes_path = temp.path().join("sample_gem/NOTES.md");
        assert_eq!(written, vec![notes_path.clone()]);
        assert_eq!(
            std::fs::read_to_string(notes_path).unwrap(),
            "# SampleGem notes"
        );
    }

    #[test]
    fn test_missing_template_is_generation_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = configuration(Flags::default());
        let pipeline = Pipeline::new(&config);
        let local = TemplateSource::Local(temp.path().join("empty"));
        let mut writer = RecordingWriter::default();

        let result = {
            let mut ctx = RunContext {
                root: temp.path(),
                catalog: &local,
                renderer: &PlaceholderRenderer,
                writer: &mut writer,
            };
            pipeline.run(&mut ctx)
        };

        match result {
            Err(ScaffoldError::Generation { path, .. }) => {
                assert_eq!(path, temp.path().join("sample_gem/bin/setup"))
            }
            other => panic!("expected generation error, got {:?}", other),
        }
        assert!(writer.files.is_empty());
    }
}
