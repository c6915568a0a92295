//! Project files every gem gets: documentation, git ignores, Rakefile

file_generator!(
    /// README, contributing guide, code of conduct, license and changelog
    Documentation,
    "documentation",
    [
        "%gem_name%/README.md.tt",
        "%gem_name%/CONTRIBUTING.md.tt",
        "%gem_name%/CODE_OF_CONDUCT.md.tt",
        "%gem_name%/LICENSE.md.tt",
        "%gem_name%/CHANGELOG.md.tt",
    ]
);

file_generator!(Git, "git", ["%gem_name%/.gitignore.tt"]);

file_generator!(Rake, "rake", ["%gem_name%/Rakefile.tt"]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::testing::{configuration, RecordingWriter};
    use crate::generators::{Generator, RunContext};
    use crate::settings::Flags;
    use crate::templates::{PlaceholderRenderer, TemplateSource};
    use std::path::Path;

    #[test]
    fn test_license_uses_company_and_year() {
        let config = configuration(Flags::default());
        let docs = Documentation::new(&config);
        let mut writer = RecordingWriter::default();

        {
            let mut ctx = RunContext {
                root: Path::new("/out"),
                catalog: &TemplateSource::Embedded,
                renderer: &PlaceholderRenderer,
                writer: &mut writer,
            };
            docs.run(&mut ctx).unwrap();
        }

        let (_, license) = writer
            .files
            .iter()
            .find(|(p, _)| p.ends_with("LICENSE.md"))
            .unwrap();
        assert!(license.contains(&format!(
            "Copyright (c) {} [{}]({})",
            config.year(),
            config.company_name(),
            config.company_url()
        )));
        // No permission changes for plain files
        assert!(writer.executables.is_empty());
    }

    #[test]
    fn test_dotfile_destinations() {
        let config = configuration(Flags::default());
        let git = Git::new(&config);
        assert_eq!(git.plan()[0].destination, Path::new("sample_gem/.gitignore"));
        assert_eq!(Rake::new(&config).plan()[0].destination, Path::new("sample_gem/Rakefile"));
    }
}
