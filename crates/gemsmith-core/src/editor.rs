//! Opening files in the user's editor

use crate::error::ScaffoldError;
use std::path::Path;
use std::process::Command;

/// Editor command from `VISUAL`, then `EDITOR`. Blank values are ignored.
pub fn editor_command() -> Option<String> {
    ["VISUAL", "EDITOR"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Open `path` in the configured editor and wait for it to exit.
///
/// The editor value may carry arguments (`code --wait`). Without a configured
/// editor the path is handed to the platform's default opener instead.
pub fn open_in_editor(path: &Path) -> Result<(), ScaffoldError> {
    match editor_command() {
        Some(editor) => run_editor(&editor, path),
        None => open::that(path).map_err(|source| ScaffoldError::Editor {
            editor: "system opener".to_string(),
            source,
        }),
    }
}

fn run_editor(editor: &str, path: &Path) -> Result<(), ScaffoldError> {
    let mut words = editor.split_whitespace();
    let program = words.next().unwrap_or(editor);

    let status = Command::new(program)
        .args(words)
        .arg(path)
        .status()
        .map_err(|source| ScaffoldError::Editor {
            editor: editor.to_string(),
            source,
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(ScaffoldError::EditorFailed {
            editor: editor.to_string(),
            status,
        })
    }
}
