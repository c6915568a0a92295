//! Gemsmith CLI - Ruby gem skeleton generator

use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand};
use gemsmith_core::settings::{Flags, Settings, SETTINGS_ENV};
use gemsmith_core::tui::{NewArgs, OpenArgs};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gemsmith")]
#[command(about = "CLI for scaffolding Ruby gems")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new gem skeleton
    New(CliNewArgs),
    /// Open an installed gem in your editor
    Open(CliOpenArgs),
    /// Show the settings file and its contents
    Config {
        /// Settings file to read instead of ~/.gemsmithrc
        #[arg(long, env = SETTINGS_ENV)]
        settings: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
pub struct CliNewArgs {
    /// Gem name (any casing; normalized to snake_case)
    pub name: String,

    #[command(flatten)]
    pub toggles: ToggleArgs,

    #[command(flatten)]
    pub overrides: SettingsArgs,

    /// Settings file to read instead of ~/.gemsmithrc
    #[arg(long, env = SETTINGS_ENV)]
    pub settings: Option<PathBuf>,

    /// Local directory to use for templates instead of the built-in set (for development use)
    #[arg(long = "template-dir", env = "GEMSMITH_TEMPLATE_DIR")]
    pub template_dir: Option<PathBuf>,

    /// Directory to create the gem in
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// List the files that would be created without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

/// Feature toggles. A bare flag means `true`; `--rspec=false` turns a default off.
/// Values must be attached with `=` so a bare toggle never swallows the gem name.
#[derive(ClapArgs, Debug, Default)]
pub struct ToggleArgs {
    /// Add a command line interface
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub bin: Option<bool>,

    /// Add Rails engine support
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub rails: Option<bool>,

    /// Add Pry as a development dependency
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub pry: Option<bool>,

    /// Add Guard support
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub guard: Option<bool>,

    /// Add RSpec support
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub rspec: Option<bool>,

    /// Add Travis CI support
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub travis: Option<bool>,

    /// Add Code Climate support
    #[arg(long = "code-climate", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub code_climate: Option<bool>,
}

impl From<ToggleArgs> for Flags {
    fn from(args: ToggleArgs) -> Self {
        Flags {
            bin: args.bin,
            rails: args.rails,
            pry: args.pry,
            guard: args.guard,
            rspec: args.rspec,
            travis: args.travis,
            code_climate: args.code_climate,
        }
    }
}

/// Settings given on the command line; these win over the settings file
#[derive(ClapArgs, Debug, Default)]
pub struct SettingsArgs {
    #[arg(long)]
    pub author_name: Option<String>,

    #[arg(long)]
    pub author_email: Option<String>,

    #[arg(long)]
    pub author_url: Option<String>,

    #[arg(long)]
    pub gem_url: Option<String>,

    #[arg(long)]
    pub company_name: Option<String>,

    #[arg(long)]
    pub company_url: Option<String>,

    #[arg(long)]
    pub github_user: Option<String>,

    /// Copyright year
    #[arg(long)]
    pub year: Option<i32>,

    #[arg(long)]
    pub ruby_version: Option<String>,

    #[arg(long)]
    pub ruby_patch: Option<String>,

    #[arg(long)]
    pub rails_version: Option<String>,

    #[arg(long)]
    pub post_install_message: Option<String>,

    /// Gem platform (e.g. Gem::Platform::RUBY)
    #[arg(long)]
    pub platform: Option<String>,
}

impl From<SettingsArgs> for Settings {
    fn from(args: SettingsArgs) -> Self {
        Settings {
            author_name: args.author_name,
            author_email: args.author_email,
            author_url: args.author_url,
            gem_platform: args.platform,
            gem_url: args.gem_url,
            company_name: args.company_name,
            company_url: args.company_url,
            github_user: args.github_user,
            year: args.year,
            ruby_version: args.ruby_version,
            ruby_patch: args.ruby_patch,
            rails_version: args.rails_version,
            post_install_message: args.post_install_message,
        }
    }
}

impl From<CliNewArgs> for NewArgs {
    fn from(args: CliNewArgs) -> Self {
        NewArgs {
            name: args.name,
            settings: args.overrides.into(),
            flags: args.toggles.into(),
            settings_file: args.settings,
            template_dir: args.template_dir,
            directory: args.directory,
            dry_run: args.dry_run,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CliOpenArgs {
    /// Name of the installed gem
    pub name: String,

    /// Gem directory to search (repeatable; defaults to GEM_HOME and GEM_PATH)
    #[arg(long = "gem-dir")]
    pub gem_dirs: Vec<PathBuf>,
}

impl From<CliOpenArgs> for OpenArgs {
    fn from(args: CliOpenArgs) -> Self {
        OpenArgs {
            name: args.name,
            gem_dirs: args.gem_dirs,
        }
    }
}

fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let result = match args.command {
        Command::New(new_args) => gemsmith_core::run_new(new_args.into()),
        Command::Open(open_args) => gemsmith_core::run_open(open_args.into()),
        Command::Config { settings } => gemsmith_core::run_config(settings),
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
