//! Charm-style CLI prompts using cliclack

use crate::configuration::{Configuration, ConfigurationBuilder};
use crate::editor;
use crate::error::ScaffoldError;
use crate::generators::{FsWriter, Pipeline, RunContext};
use crate::installed::{self, GemSpecification};
use crate::report;
use crate::selection::{self, Selection};
use crate::settings::{Flags, Settings};
use crate::templates::{PlaceholderRenderer, TemplateSource};
use anyhow::{Context, Result};
use console::style;
use std::path::{Path, PathBuf};

/// Arguments for the `new` command
#[derive(Debug, Clone, Default)]
pub struct NewArgs {
    /// Raw gem name, in any casing
    pub name: String,

    /// Settings given on the command line (overlay the settings file)
    pub settings: Settings,

    /// Feature toggles given on the command line
    pub flags: Flags,

    /// Settings file to read instead of `~/.gemsmithrc`
    pub settings_file: Option<PathBuf>,

    /// Local directory to use for templates instead of the built-in set
    pub template_dir: Option<PathBuf>,

    /// Directory to create the gem in (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// List planned files without writing anything
    pub dry_run: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Arguments for the `open` command
#[derive(Debug, Clone, Default)]
pub struct OpenArgs {
    /// Gem to open
    pub name: String,

    /// Gem directories to search (defaults to `GEM_HOME` and `GEM_PATH`)
    pub gem_dirs: Vec<PathBuf>,
}

/// Run the `new` command with interactive prompts
pub fn run_new(args: NewArgs) -> Result<()> {
    cliclack::intro("Gemsmith")?;

    // Step 1: Merge the settings file with command-line settings
    let settings = load_settings(args.settings_file.as_deref())?.overlay(args.settings.clone());

    // Step 2: Resolve the configuration
    let builder = ConfigurationBuilder::new();
    let configuration = builder.build(Some(&args.name), &settings, &args.flags)?;
    cliclack::note("Configuration", summary(&configuration))?;

    // Step 3: Pick the output directory
    let root = select_directory(&args, configuration.gem_name())?;

    // Step 4: Plan
    let pipeline = Pipeline::new(&configuration);
    let source = TemplateSource::from_dir(args.template_dir.clone());
    cliclack::log::info(format!("Using {}", source.describe()))?;

    if args.dry_run {
        report::print_plan(&pipeline, &root);
        cliclack::outro("Dry run complete")?;
        return Ok(());
    }

    // Step 5: Generate
    let written = create_gem(&pipeline, &root, &source)?;
    cliclack::log::success(format!(
        "Created {} files in {}",
        written.len(),
        root.join(configuration.gem_name()).display()
    ))?;

    // Step 6: Show next steps
    print_next_steps(&configuration, &root)?;

    Ok(())
}

/// Run the `open` command: find installed versions, pick one, open it
pub fn run_open(args: OpenArgs) -> Result<()> {
    let dirs = if args.gem_dirs.is_empty() {
        installed::gem_dirs()
    } else {
        args.gem_dirs.clone()
    };

    let specs = installed::find_installed(&args.name, &dirs);
    let spec = match specs.len() {
        0 => {
            return Err(ScaffoldError::GemNotFound {
                name: args.name.clone(),
            }
            .into())
        }
        1 => specs[0].clone(),
        _ => match pick_version(&specs)? {
            Some(spec) => spec,
            None => return Ok(()),
        },
    };

    cliclack::log::info(format!("Opening {}", spec.path.display()))?;
    editor::open_in_editor(&spec.path)?;

    Ok(())
}

/// Print the settings file in use and its contents
pub fn run_config(settings_file: Option<PathBuf>) -> Result<()> {
    let path = settings_file.or_else(Settings::default_path);
    let settings = load_settings(path.as_deref())?;
    report::print_settings(path.as_deref(), &settings);
    Ok(())
}

fn load_settings(settings_file: Option<&Path>) -> Result<Settings> {
    let path = match settings_file {
        Some(path) => Some(path.to_path_buf()),
        None => Settings::default_path(),
    };

    match path {
        Some(path) => Settings::load(&path).map_err(Into::into),
        None => Ok(Settings::default()),
    }
}

fn summary(configuration: &Configuration) -> String {
    let t = configuration.toggles();
    let enabled: Vec<&str> = [
        ("bin", t.bin),
        ("rails", t.rails),
        ("pry", t.pry),
        ("guard", t.guard),
        ("rspec", t.rspec),
        ("travis", t.travis),
        ("code_climate", t.code_climate),
    ]
    .iter()
    .filter(|(_, on)| *on)
    .map(|(name, _)| *name)
    .collect();

    format!(
        "Gem: {} ({})\nAuthor: {} <{}>\nURL: {}\nRuby: {}-{}\nFeatures: {}",
        configuration.gem_name(),
        configuration.gem_class(),
        configuration.author_name(),
        configuration.author_email(),
        configuration.gem_url(),
        configuration.ruby_version(),
        configuration.ruby_patch(),
        if enabled.is_empty() {
            "none".to_string()
        } else {
            enabled.join(", ")
        }
    )
}

fn select_directory(args: &NewArgs, gem_name: &str) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let root = match &args.directory {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    if !root.is_dir() {
        anyhow::bail!("Directory does not exist: {}", root.display());
    }

    // Warn if the gem directory exists and has files
    let gem_dir = root.join(gem_name);
    if gem_dir.is_dir() {
        if let Ok(entries) = std::fs::read_dir(&gem_dir) {
            let count = entries.count();
            if count > 0 {
                cliclack::log::warning(format!(
                    "{} has {} existing items",
                    gem_dir.display(),
                    count
                ))?;

                // Auto-confirm with --yes flag
                let confirm = if args.yes || args.dry_run {
                    true
                } else {
                    cliclack::confirm("Overwrite existing files?")
                        .initial_value(false)
                        .interact()?
                };

                if !confirm {
                    anyhow::bail!("Generation cancelled.");
                }
            }
        }
    }

    Ok(root)
}

fn create_gem(pipeline: &Pipeline<'_>, root: &Path, source: &TemplateSource) -> Result<Vec<PathBuf>> {
    let spinner = cliclack::spinner();
    spinner.start("Creating gem...");

    let mut writer = FsWriter;
    let mut ctx = RunContext {
        root,
        catalog: source,
        renderer: &PlaceholderRenderer,
        writer: &mut writer,
    };

    match pipeline.run(&mut ctx) {
        Ok(written) => {
            spinner.stop(format!("Generated {} files", written.len()));
            Ok(written)
        }
        Err(e) => {
            spinner.stop("Generation failed");
            cliclack::log::warning("Files written before the failure were left in place")?;
            Err(e).context("Failed to create gem")
        }
    }
}

fn pick_version(specs: &[GemSpecification]) -> Result<Option<GemSpecification>> {
    cliclack::log::info(format!(
        "Multiple versions found:\n{}",
        selection::numbered_list(specs).join("\n")
    ))?;

    let response: String = cliclack::input(selection::PROMPT).interact()?;

    match selection::choose(specs, &response) {
        Ok(Selection::Picked(index)) => Ok(Some(specs[index].clone())),
        Ok(Selection::Quit) => {
            cliclack::outro("Nothing opened")?;
            Ok(None)
        }
        Err(e) if !e.is_fatal() => {
            cliclack::log::error(e.to_string())?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn print_next_steps(configuration: &Configuration, root: &Path) -> Result<()> {
    let gem_dir = root.join(configuration.gem_name());
    let mut steps = vec![format!("cd {}", gem_dir.display()), "bin/setup".to_string()];
    if configuration.toggles().rspec {
        steps.push("bundle exec rspec".to_string());
    }

    println!();
    println!("  {}", style("Next steps").bold());
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}  {}", style(format!("{}.", i + 1)).dim(), style(step).cyan());
    }

    cliclack::outro("Happy hacking!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn configuration(flags: Flags) -> Configuration {
        ConfigurationBuilder::with_vcs(HashMap::<String, String>::new())
            .build(Some("sample_gem"), &Settings::default(), &flags)
            .unwrap()
    }

    #[test]
    fn test_summary_lists_enabled_features() {
        let text = summary(&configuration(Flags::default()));
        assert!(text.contains("Gem: sample_gem (SampleGem)"));
        assert!(text.contains("Features: pry, guard, rspec, travis, code_climate"));
    }

    #[test]
    fn test_summary_without_features() {
        let flags = Flags {
            pry: Some(false),
            guard: Some(false),
            rspec: Some(false),
            travis: Some(false),
            code_climate: Some(false),
            ..Flags::default()
        };
        assert!(summary(&configuration(flags)).contains("Features: none"));
    }

    #[test]
    fn test_load_explicit_settings_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("settings.yml");
        std::fs::write(&path, "author_name: Jane Doe\n").unwrap();

        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.author_name.as_deref(), Some("Jane Doe"));
    }
}
