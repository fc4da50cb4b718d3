//! Pinned upstream tailwindcss release metadata.
//!
//! Mirrors the asset table of the upstream binary release this crate tracks.
//! Used to decide whether a host platform is supported at all; fetching the
//! binaries themselves happens at packaging time, not here.

use crate::platform::Platform;

/// Upstream release the bundled binaries are pinned to.
pub const VERSION: &str = "v3.4.1";

/// Platform identifiers upstream ships binaries for, with the release asset
/// name for each.
pub const NATIVE_PLATFORMS: &[(&str, &str)] = &[
    ("arm-linux", "tailwindcss-linux-armv7"),
    ("arm64-darwin", "tailwindcss-macos-arm64"),
    ("aarch64-linux", "tailwindcss-linux-arm64"),
    ("x64-mingw32", "tailwindcss-windows-x64.exe"),
    ("x64-mingw-ucrt", "tailwindcss-windows-x64.exe"),
    ("x86_64-darwin", "tailwindcss-macos-x64"),
    ("x86_64-linux", "tailwindcss-linux-x64"),
];

/// The release asset name for a host platform, or `None` when upstream ships
/// no binary for it.
pub fn native_asset(host: &Platform) -> Option<&'static str> {
    NATIVE_PLATFORMS.iter().find_map(|(id, asset)| {
        Platform::parse(id)
            .filter(|declared| host.matches(declared))
            .map(|_| *asset)
    })
}

/// Whether upstream ships a binary for the host platform.
pub fn supports(host: &Platform) -> bool {
    native_asset(host).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_identifiers_all_parse() {
        for (id, asset) in NATIVE_PLATFORMS {
            assert!(Platform::parse(id).is_some(), "unparseable id: {id}");
            assert!(asset.starts_with("tailwindcss-"));
        }
    }

    #[test]
    fn test_supported_platforms() {
        let linux = Platform::parse("x86_64-linux").unwrap();
        assert_eq!(native_asset(&linux), Some("tailwindcss-linux-x64"));
        assert!(supports(&linux));

        let mac = Platform::parse("arm64-darwin").unwrap();
        assert_eq!(native_asset(&mac), Some("tailwindcss-macos-arm64"));
    }

    #[test]
    fn test_versionless_windows_host_matches_both_toolchains() {
        // Hosts report plain "x64-mingw"; both declared variants resolve to
        // the same upstream asset.
        let win = Platform::parse("x64-mingw").unwrap();
        assert_eq!(native_asset(&win), Some("tailwindcss-windows-x64.exe"));
    }

    #[test]
    fn test_unknown_platform_is_unsupported() {
        let solaris = Platform::parse("sparc-solaris2.8").unwrap();
        assert!(!supports(&solaris));
        assert_eq!(native_asset(&solaris), None);
    }
}
