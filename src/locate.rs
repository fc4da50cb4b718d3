//! Executable resolution: bundled per-platform directories first, then the
//! process search path.
//!
//! The search root holds one subdirectory per platform identifier, each
//! containing a `tailwindcss` binary. Resolution prefers a bundled binary
//! whose declared platform matches the host; only when none matches does
//! the locator fall back to scanning `PATH`, and only for real native
//! binaries (interpreter shims are rejected).

use std::env;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{LocateError, LocateResult};
use crate::platform::Platform;
use crate::upstream;

#[cfg(windows)]
const EXE_NAME: &str = "tailwindcss.exe";

#[cfg(not(windows))]
const EXE_NAME: &str = "tailwindcss";

/// Fallback search path used when `PATH` is unset.
const DEFAULT_SEARCH_PATH: &[&str] = &["/usr/local/bin", "/usr/ucb", "/usr/bin", "/bin"];

/// Resolves the tailwindcss executable for a given host environment.
///
/// The host platform and search path are injected so resolution is
/// deterministic under test; [`Locator::from_env`] captures the real
/// process environment. No state is cached between calls.
#[derive(Debug, Clone)]
pub struct Locator {
    platform: Platform,
    search_path: Vec<PathBuf>,
}

impl Locator {
    /// Build a locator with an explicit host platform and search path.
    pub fn new(platform: Platform, search_path: Vec<PathBuf>) -> Self {
        Self {
            platform,
            search_path,
        }
    }

    /// Build a locator from the process environment (`PATH` and the local
    /// platform).
    pub fn from_env() -> Self {
        let search_path = env::var_os("PATH").map_or_else(
            || DEFAULT_SEARCH_PATH.iter().map(PathBuf::from).collect(),
            |raw| env::split_paths(&raw).collect(),
        );
        Self::new(Platform::local(), search_path)
    }

    /// The host platform this locator resolves for.
    pub const fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Resolve the tailwindcss executable, preferring bundled binaries under
    /// `exe_root` over anything on the search path.
    ///
    /// # Errors
    ///
    /// [`LocateError::UnsupportedPlatform`] when upstream ships no binary
    /// for the host at all, [`LocateError::ExecutableNotFound`] when the
    /// platform is supported but no binary is present.
    pub fn locate(&self, exe_root: &Path) -> LocateResult<PathBuf> {
        if let Some(found) = self.bundled_candidate(exe_root) {
            debug!(path = %found.display(), "using bundled tailwindcss binary");
            return Ok(found);
        }

        if let Some(found) = self.search_path_candidate() {
            debug!(path = %found.display(), "using tailwindcss from search path");
            return Ok(found);
        }

        if upstream::supports(&self.platform) {
            Err(LocateError::ExecutableNotFound {
                platform: self.platform.to_string(),
                exe_root: exe_root.to_path_buf(),
            })
        } else {
            Err(LocateError::UnsupportedPlatform {
                platform: self.platform.to_string(),
            })
        }
    }

    /// First platform-matching subdirectory of `exe_root` containing the
    /// conventional binary name.
    ///
    /// At most one subdirectory is expected to match in practice; candidate
    /// names are sorted so the tie-break stays stable regardless of
    /// filesystem enumeration order.
    fn bundled_candidate(&self, exe_root: &Path) -> Option<PathBuf> {
        let entries = match fs::read_dir(exe_root) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(root = %exe_root.display(), error = %e, "cannot read exe root");
                return None;
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        names.sort();

        for name in names {
            let Some(declared) = Platform::parse(&name) else {
                continue;
            };
            if !self.platform.matches(&declared) {
                continue;
            }

            let candidate = exe_root.join(&name).join(EXE_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            debug!(dir = %name, "platform directory matches but holds no binary");
        }

        None
    }

    /// First search-path directory containing a real native binary.
    fn search_path_candidate(&self) -> Option<PathBuf> {
        self.search_path
            .iter()
            .map(|dir| dir.join(EXE_NAME))
            .find(|candidate| is_native_executable(candidate))
    }
}

/// True for regular, executable files whose first two bytes are not `#!`.
///
/// Only the two-byte prefix is checked; binaries with unusual headers must
/// still pass, so no deeper format inspection happens here.
fn is_native_executable(path: &Path) -> bool {
    let Ok(metadata) = fs::metadata(path) else {
        return false;
    };
    if !metadata.is_file() || !is_executable(&metadata) {
        return false;
    }

    let mut prefix = [0_u8; 2];
    match fs::File::open(path).and_then(|mut file| file.read(&mut prefix)) {
        Ok(n) => {
            let shim = n == 2 && &prefix == b"#!";
            if shim {
                debug!(path = %path.display(), "skipping interpreter shim");
            }
            !shim
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot inspect candidate");
            false
        }
    }
}

#[cfg(unix)]
fn is_executable(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(metadata: &fs::Metadata) -> bool {
    metadata.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(unix)]
    use std::os::unix::fs::PermissionsExt;

    fn platform(id: &str) -> Platform {
        Platform::parse(id).unwrap()
    }

    /// Write a file with the executable bit set (no-op distinction on
    /// non-unix, where existence is enough).
    fn write_executable(path: &Path, contents: &[u8]) {
        fs::write(path, contents).unwrap();
        #[cfg(unix)]
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn bundle(root: &Path, platform_dir: &str) -> PathBuf {
        let dir = root.join(platform_dir);
        fs::create_dir_all(&dir).unwrap();
        let exe = dir.join(EXE_NAME);
        write_executable(&exe, b"\x7fELF fake binary");
        exe
    }

    #[test]
    fn test_bundled_binary_is_found() {
        let root = TempDir::new().unwrap();
        let exe = bundle(root.path(), "sparc-solaris2.8");

        let locator = Locator::new(platform("sparc-solaris2.8"), vec![]);
        assert_eq!(locator.locate(root.path()).unwrap(), exe);
    }

    #[test]
    fn test_bundled_match_tolerates_minor_version() {
        let root = TempDir::new().unwrap();
        let exe = bundle(root.path(), "sparc-solaris2.8");

        let locator = Locator::new(platform("sparc-solaris2"), vec![]);
        assert_eq!(locator.locate(root.path()).unwrap(), exe);
    }

    #[test]
    fn test_bundled_beats_search_path() {
        let root = TempDir::new().unwrap();
        let bundled = bundle(root.path(), "x86_64-linux");

        let path_dir = TempDir::new().unwrap();
        write_executable(&path_dir.path().join(EXE_NAME), b"\x7fELF other binary");

        let locator = Locator::new(
            platform("x86_64-linux"),
            vec![path_dir.path().to_path_buf()],
        );
        assert_eq!(locator.locate(root.path()).unwrap(), bundled);
    }

    #[test]
    fn test_incompatible_bundled_directories_are_skipped() {
        let root = TempDir::new().unwrap();
        bundle(root.path(), "aarch64-linux");
        bundle(root.path(), "x86_64-darwin");

        let path_dir = TempDir::new().unwrap();
        let fallback = path_dir.path().join(EXE_NAME);
        write_executable(&fallback, b"\x7fELF fallback");

        let locator = Locator::new(
            platform("x86_64-linux"),
            vec![path_dir.path().to_path_buf()],
        );
        assert_eq!(locator.locate(root.path()).unwrap(), fallback);
    }

    #[test]
    fn test_non_platform_directories_are_ignored() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("src")).unwrap();
        fs::write(root.path().join("README.md"), "not a directory").unwrap();
        let exe = bundle(root.path(), "x86_64-linux");

        let locator = Locator::new(platform("x86_64-linux"), vec![]);
        assert_eq!(locator.locate(root.path()).unwrap(), exe);
    }

    #[test]
    fn test_search_path_order_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let expected = first.path().join(EXE_NAME);
        write_executable(&expected, b"\x7fELF first");
        write_executable(&second.path().join(EXE_NAME), b"\x7fELF second");

        let root = TempDir::new().unwrap();
        let locator = Locator::new(
            platform("x86_64-linux"),
            vec![first.path().to_path_buf(), second.path().to_path_buf()],
        );
        assert_eq!(locator.locate(root.path()).unwrap(), expected);
    }

    #[test]
    fn test_shim_on_search_path_is_rejected() {
        let path_dir = TempDir::new().unwrap();
        write_executable(&path_dir.path().join(EXE_NAME), b"#!/bin/sh\nexec node");

        let root = TempDir::new().unwrap();
        let locator = Locator::new(
            platform("x86_64-linux"),
            vec![path_dir.path().to_path_buf()],
        );
        let err = locator.locate(root.path()).unwrap_err();
        assert!(matches!(err, LocateError::ExecutableNotFound { .. }));
    }

    #[test]
    #[cfg(unix)]
    fn test_non_executable_file_on_search_path_is_rejected() {
        let path_dir = TempDir::new().unwrap();
        let candidate = path_dir.path().join(EXE_NAME);
        fs::write(&candidate, b"\x7fELF but not executable").unwrap();
        fs::set_permissions(&candidate, fs::Permissions::from_mode(0o644)).unwrap();

        let root = TempDir::new().unwrap();
        let locator = Locator::new(
            platform("x86_64-linux"),
            vec![path_dir.path().to_path_buf()],
        );
        assert!(locator.locate(root.path()).is_err());
    }

    #[test]
    fn test_tiny_file_is_not_mistaken_for_shim() {
        // A one-byte file cannot carry a `#!` prefix and passes the check.
        let path_dir = TempDir::new().unwrap();
        let candidate = path_dir.path().join(EXE_NAME);
        write_executable(&candidate, b"#");

        let root = TempDir::new().unwrap();
        let locator = Locator::new(
            platform("x86_64-linux"),
            vec![path_dir.path().to_path_buf()],
        );
        assert_eq!(locator.locate(root.path()).unwrap(), candidate);
    }

    #[test]
    fn test_total_miss_on_supported_platform_is_not_found() {
        let root = TempDir::new().unwrap();
        let locator = Locator::new(platform("x86_64-linux"), vec![]);
        let err = locator.locate(root.path()).unwrap_err();
        assert!(matches!(err, LocateError::ExecutableNotFound { .. }));
    }

    #[test]
    fn test_total_miss_on_unknown_platform_is_unsupported() {
        let root = TempDir::new().unwrap();
        let locator = Locator::new(platform("sparc-solaris2.8"), vec![]);
        let err = locator.locate(root.path()).unwrap_err();
        assert!(matches!(err, LocateError::UnsupportedPlatform { .. }));
    }

    #[test]
    fn test_missing_exe_root_falls_through_to_classification() {
        let locator = Locator::new(platform("x86_64-linux"), vec![]);
        let err = locator.locate(Path::new("/nonexistent/exe")).unwrap_err();
        assert!(matches!(err, LocateError::ExecutableNotFound { .. }));
    }

    #[test]
    fn test_matching_directory_without_binary_is_skipped() {
        let root = TempDir::new().unwrap();
        fs::create_dir_all(root.path().join("x86_64-linux")).unwrap();

        let locator = Locator::new(platform("x86_64-linux"), vec![]);
        assert!(locator.locate(root.path()).is_err());
    }

    #[test]
    fn test_from_env_produces_usable_locator() {
        let locator = Locator::from_env();
        assert!(!locator.platform().to_string().is_empty());
    }
}
