//! Host platform detection and platform-identifier matching.
//!
//! Bundled tailwindcss binaries live in directories named after the platform
//! they target (`arm64-darwin`, `x86_64-linux`, ...). This module parses
//! those names, derives the equivalent identifier for the host machine, and
//! decides whether a declared platform is compatible with the host.

use std::env;
use std::fmt;

/// A normalized `<cpu>-<os>` platform identifier.
///
/// The OS token may carry a trailing version or variant suffix
/// (`solaris2.8`, `mingw32`, `linux-gnu`); it is split off during parsing so
/// matching can tolerate minor-version drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    cpu: String,
    os: String,
    version: Option<String>,
}

impl Platform {
    /// Detect the host platform.
    ///
    /// Infallible: arch/OS tokens with no known normalization pass through
    /// verbatim rather than erroring.
    pub fn local() -> Self {
        Self::normalized(env::consts::ARCH, env::consts::OS)
    }

    /// Map Rust's arch/OS names onto the vocabulary the bundled-binary
    /// packaging scheme uses.
    fn normalized(arch: &str, os: &str) -> Self {
        let cpu = match (arch, os) {
            ("aarch64", "macos" | "windows") => "arm64",
            ("x86_64", "windows") => "x64",
            _ => arch,
        };
        let os = match os {
            "macos" => "darwin",
            "windows" => "mingw",
            other => other,
        };
        Self {
            cpu: cpu.to_string(),
            os: os.to_string(),
            version: None,
        }
    }

    /// Parse a `<cpu>-<os><optional version suffix>` identifier.
    ///
    /// Returns `None` for names that do not look like platform identifiers
    /// (no hyphen, empty tokens, OS part not starting with a letter), so
    /// unrelated directory names are skipped during scanning.
    pub fn parse(name: &str) -> Option<Self> {
        let (cpu, rest) = name.split_once('-')?;
        if cpu.is_empty() || rest.is_empty() {
            return None;
        }

        // Hyphenated variant suffix, e.g. "linux-gnu" or "mingw-ucrt".
        let (os_part, variant) = match rest.split_once('-') {
            Some((os, v)) if !os.is_empty() && !v.is_empty() => (os, Some(v)),
            _ => (rest, None),
        };

        if !os_part
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
        {
            return None;
        }

        // Inline numeric suffix, e.g. "solaris2.8" or "mingw32".
        let (os, version) = match os_part.find(|c: char| c.is_ascii_digit()) {
            Some(idx) => (&os_part[..idx], Some(&os_part[idx..])),
            None => (os_part, variant),
        };

        Some(Self {
            cpu: cpu.to_string(),
            os: os.to_string(),
            version: version.map(str::to_string),
        })
    }

    /// The CPU architecture token, e.g. `x86_64` or `arm64`.
    pub fn cpu(&self) -> &str {
        &self.cpu
    }

    /// The operating system token, e.g. `linux` or `darwin`.
    pub fn os(&self) -> &str {
        &self.os
    }

    /// The OS version or variant suffix, if the identifier carried one.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Whether a binary declared for `declared` can run on this host.
    ///
    /// CPU and OS tokens must agree (`universal` stands in for any CPU).
    /// Versions agree when equal, absent on either side, or sharing the same
    /// numeric major: `sparc-solaris2.8` matches a host reporting
    /// `sparc-solaris2`.
    pub fn matches(&self, declared: &Self) -> bool {
        let cpu_ok =
            self.cpu == declared.cpu || self.cpu == "universal" || declared.cpu == "universal";
        if !cpu_ok || self.os != declared.os {
            return false;
        }

        match (self.version.as_deref(), declared.version.as_deref()) {
            (None, _) | (_, None) => true,
            (Some(actual), Some(wanted)) => {
                actual == wanted
                    || numeric_major(actual)
                        .zip(numeric_major(wanted))
                        .is_some_and(|(a, w)| a == w)
            }
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.cpu, self.os)?;
        match &self.version {
            Some(v) if v.starts_with(|c: char| c.is_ascii_digit()) => write!(f, "{v}"),
            Some(v) => write!(f, "-{v}"),
            None => Ok(()),
        }
    }
}

/// Leading component of a dotted numeric version, or `None` when the
/// version is a non-numeric variant tag like `gnu` or `ucrt`.
fn numeric_major(version: &str) -> Option<&str> {
    let major = version.split('.').next().unwrap_or(version);
    (!major.is_empty() && major.chars().all(|c| c.is_ascii_digit())).then_some(major)
}
