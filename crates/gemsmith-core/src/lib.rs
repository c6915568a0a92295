//! Gemsmith Core - Ruby gem skeleton generation
//!
//! This library turns a gem name, a settings file and a handful of feature
//! toggles into a ready-to-use gem skeleton on disk.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Resolution** - Identity (name/class), settings layering and VCS lookups
//!   merged into an immutable [`Configuration`]
//! - **Layer 2: Generation** - A [`Pipeline`] of generators rendering templates into files
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use gemsmith_core::{generate, ConfigurationBuilder, Flags, Settings, TemplateSource};
//!
//! let settings = Settings::load(&path)?;
//! let configuration = ConfigurationBuilder::new().build(Some("my-gem"), &settings, &Flags::default())?;
//! let written = generate(&configuration, Path::new("."), &TemplateSource::Embedded)?;
//! ```

pub mod configuration;
pub mod editor;
pub mod error;
pub mod generators;
pub mod identity;
pub mod installed;
pub mod report;
pub mod selection;
pub mod settings;
pub mod templates;
pub mod vcs;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use configuration::{Configuration, ConfigurationBuilder};
pub use error::ScaffoldError;
pub use generators::{generate, Generator, Pipeline};
pub use identity::{Identity, IdentityResolver};
pub use installed::GemSpecification;
pub use selection::{choose, Selection};
pub use settings::{Flags, Settings, Toggles};
pub use templates::TemplateSource;
pub use vcs::{GitConfig, VcsConfig};

#[cfg(feature = "tui")]
pub use tui::{run_config, run_new, run_open};
