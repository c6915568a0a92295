//! Discovery of installed gems
//!
//! Gems live in `<gem dir>/gems/<name>-<version>`. Gem directories come from
//! `GEM_HOME` and `GEM_PATH`.

use anyhow::Result;
use semver::Version;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// An installed gem version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GemSpecification {
    pub name: String,
    pub version: String,
    /// Full path to the installed gem directory
    pub path: PathBuf,
}

/// Gem directories from `GEM_HOME` and `GEM_PATH`, in that order, without duplicates
pub fn gem_dirs() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = Vec::new();

    for var in ["GEM_HOME", "GEM_PATH"] {
        if let Some(value) = std::env::var_os(var) {
            for dir in std::env::split_paths(&value) {
                if !dir.as_os_str().is_empty() && !dirs.contains(&dir) {
                    dirs.push(dir);
                }
            }
        }
    }

    dirs
}

/// All installed versions of `name` across `gem_dirs`, oldest first
pub fn find_installed(name: &str, gem_dirs: &[PathBuf]) -> Vec<GemSpecification> {
    let prefix = format!("{}-", name);
    let mut specs: Vec<GemSpecification> = gem_dirs
        .iter()
        .flat_map(|dir| gems_in(&dir.join("gems")))
        .filter_map(|path| {
            let dir_name = path.file_name()?.to_str()?;
            let version = dir_name.strip_prefix(&prefix)?;
            // `foo-bar-1.0` is not a version of `foo`
            if !version.starts_with(|c: char| c.is_ascii_digit()) {
                return None;
            }
            Some(GemSpecification {
                name: name.to_string(),
                version: version.to_string(),
                path,
            })
        })
        .collect();

    specs.sort_by(|a, b| compare_versions(&a.version, &b.version));
    specs
}

fn gems_in(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| entry.into_path())
        .collect()
}

fn compare_versions(a: &str, b: &str) -> Ordering {
    match (parse_version(a), parse_version(b)) {
        (Ok(va), Ok(vb)) => va.cmp(&vb).then_with(|| a.cmp(b)),
        _ => a.cmp(b),
    }
}

/// Parse a gem version leniently: a leading `v` is dropped and missing
/// components are zero (`1.2` is `1.2.0`). Components past the third are ignored.
pub fn parse_version(version_str: &str) -> Result<Version> {
    let cleaned = version_str.strip_prefix('v').unwrap_or(version_str);
    if let Ok(version) = Version::parse(cleaned) {
        return Ok(version);
    }

    let core = cleaned.split(['-', '+']).next().unwrap_or(cleaned);
    let mut parts = [0u64; 3];
    for (slot, part) in parts.iter_mut().zip(core.split('.')) {
        *slot = part
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))?;
    }

    Ok(Version::new(parts[0], parts[1], parts[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn install(gem_dir: &Path, dir_name: &str) {
        std::fs::create_dir_all(gem_dir.join("gems").join(dir_name)).unwrap();
    }

    #[test]
    fn test_parse_version_lenient() {
        assert_eq!(parse_version("1.2.3").unwrap(), Version::new(1, 2, 3));
        assert_eq!(parse_version("v1.2.3").unwrap(), Version::new(1, 2, 3));
        assert_eq!(parse_version("1.2").unwrap(), Version::new(1, 2, 0));
        assert_eq!(parse_version("4").unwrap(), Version::new(4, 0, 0));
        assert_eq!(parse_version("1.2.3.4").unwrap(), Version::new(1, 2, 3));
        assert_eq!(
            parse_version("1.10.0-x86_64-linux").unwrap(),
            Version::new(1, 10, 0)
        );
    }

    #[test]
    fn test_parse_version_invalid() {
        assert!(parse_version("abc").is_err());
        assert!(parse_version("").is_err());
    }

    #[test]
    fn test_find_installed_sorted_by_version() {
        let temp = tempfile::TempDir::new().unwrap();
        install(temp.path(), "sample_gem-1.10.0");
        install(temp.path(), "sample_gem-1.2");
        install(temp.path(), "sample_gem-0.9.1");
        install(temp.path(), "sample_gem-extras-3.0.0");
        install(temp.path(), "other-1.0.0");

        let specs = find_installed("sample_gem", &[temp.path().to_path_buf()]);
        let versions: Vec<_> = specs.iter().map(|s| s.version.as_str()).collect();

        assert_eq!(versions, vec!["0.9.1", "1.2", "1.10.0"]);
        assert!(specs.iter().all(|s| s.name == "sample_gem"));
        assert_eq!(
            specs[0].path,
            temp.path().join("gems").join("sample_gem-0.9.1")
        );
    }

    #[test]
    fn test_find_installed_across_dirs() {
        let home = tempfile::TempDir::new().unwrap();
        let system = tempfile::TempDir::new().unwrap();
        install(home.path(), "sample_gem-2.0.0");
        install(system.path(), "sample_gem-1.0.0");

        let specs = find_installed(
            "sample_gem",
            &[home.path().to_path_buf(), system.path().to_path_buf()],
        );
        let versions: Vec<_> = specs.iter().map(|s| s.version.as_str()).collect();
        assert_eq!(versions, vec!["1.0.0", "2.0.0"]);
    }

    #[test]
    fn test_find_installed_missing_dir() {
        let temp = tempfile::TempDir::new().unwrap();
        assert!(find_installed("sample_gem", &[temp.path().join("nope")]).is_empty());
    }
}
