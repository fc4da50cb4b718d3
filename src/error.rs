//! Error types for executable resolution.
//!
//! Both variants are terminal at this layer: the locator refuses to guess
//! or substitute an incompatible binary, so either a fully qualified path
//! comes back or one of these errors does.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving the tailwindcss executable.
#[derive(Debug, Error)]
pub enum LocateError {
    /// Upstream ships no binary for the host platform at all.
    #[error(
        "tailwindcss-bin does not support the {platform} platform\n\
         Please install tailwindcss following instructions at https://tailwindcss.com/docs/installation"
    )]
    UnsupportedPlatform {
        /// The host platform identifier
        platform: String,
    },

    /// The platform is supported in principle but no binary is present,
    /// bundled or on the search path.
    #[error(
        "Cannot find the tailwindcss executable for {platform} in {exe_root}\n\n\
         The bundled binary for {platform} was most likely left out when this\n\
         package was installed. Fetch the upstream release asset for your\n\
         platform from https://github.com/tailwindlabs/tailwindcss/releases\n\
         and place it at:\n\n    \
         {exe_root}/{platform}/tailwindcss\n\n\
         or install a native tailwindcss binary somewhere on your PATH.\n\
         Interpreter shims are ignored; it must be the real executable.",
        exe_root = .exe_root.display()
    )]
    ExecutableNotFound {
        /// The host platform identifier
        platform: String,
        /// The bundled-binary root that was searched
        exe_root: PathBuf,
    },
}

/// Result type alias for locator operations.
pub type LocateResult<T> = Result<T, LocateError>;
