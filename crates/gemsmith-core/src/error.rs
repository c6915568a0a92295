//! Error taxonomy for gem generation

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors raised by the configuration, generation and selection layers
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// No project name was ever supplied (or the supplied one was blank)
    #[error("Invalid gem name: a non-empty name is required")]
    InvalidName,

    /// A template render or file write failed for a specific destination.
    /// Files written before the failure are left in place.
    #[error("Failed to generate {}: {source}", path.display())]
    Generation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The selection prompt received an unusable response
    #[error("Invalid option: {response}")]
    InvalidSelection { response: String },

    /// The settings file exists but could not be read or parsed
    #[error("Failed to load settings from {}: {reason}", path.display())]
    Settings { path: PathBuf, reason: String },

    /// No installed versions of the requested gem were found
    #[error("Unable to find gem: {name}")]
    GemNotFound { name: String },

    /// The editor process could not be started
    #[error("Failed to open editor '{editor}': {source}")]
    Editor {
        editor: String,
        #[source]
        source: std::io::Error,
    },

    /// The editor ran but exited unsuccessfully
    #[error("Editor '{editor}' exited with {status}")]
    EditorFailed { editor: String, status: ExitStatus },
}

impl ScaffoldError {
    pub(crate) fn generation(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Generation {
            path: path.into(),
            source,
        }
    }

    /// Whether the error should end the process with a failure status.
    /// An invalid selection is reported to the user and the command ends quietly.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::InvalidSelection { .. })
    }
}
