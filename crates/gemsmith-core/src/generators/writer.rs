//! File-system side of generation

use std::fs;
use std::io;
use std::path::Path;

/// Places rendered files and applies permission changes
pub trait FileWriter {
    /// Write `contents` to `path`, creating parent directories as needed
    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()>;

    /// Grant owner-execute permission; group and world get no execute bit
    fn set_executable(&mut self, path: &Path) -> io::Result<()>;
}

/// Writes to the real file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FsWriter;

impl FileWriter for FsWriter {
    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)
    }

    #[cfg(unix)]
    fn set_executable(&mut self, path: &Path) -> io::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let mode = fs::metadata(path)?.permissions().mode();
        let mode = (mode | 0o100) & !0o011;
        fs::set_permissions(path, fs::Permissions::from_mode(mode))
    }

    #[cfg(not(unix))]
    fn set_executable(&mut self, path: &Path) -> io::Result<()> {
        // No execute bit to set; still fail on a missing file
        fs::metadata(path).map(|_| ())
    }
}
