//! Invocation building for the tailwindcss CLI.
//!
//! Builds the argument lists for one-shot compiles and watch mode. The
//! returned vectors are ready to hand to a process spawner; nothing is
//! executed here.

use std::path::{Path, PathBuf};

use crate::error::LocateResult;
use crate::locate::Locator;

/// Options shared by compile and watch invocations.
///
/// The stylesheet and config paths come from the host project's conventions
/// and are passed through as opaque strings.
#[derive(Debug, Clone)]
pub struct CommandOptions {
    /// Root directory holding the bundled per-platform binaries.
    pub exe_root: PathBuf,
    /// Input stylesheet, passed as `-i`.
    pub input: PathBuf,
    /// Output stylesheet, passed as `-o`.
    pub output: PathBuf,
    /// Tailwind config file, passed as `-c`.
    pub config: PathBuf,
    /// Skip `--minify` for debuggable output. Off by default, so production
    /// builds minify.
    pub debug: bool,
    /// Poll the filesystem instead of relying on native change events
    /// (watch mode only).
    pub poll: bool,
}

impl CommandOptions {
    /// Options for a production compile of `input` to `output`.
    pub fn new(
        exe_root: impl Into<PathBuf>,
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        config: impl Into<PathBuf>,
    ) -> Self {
        Self {
            exe_root: exe_root.into(),
            input: input.into(),
            output: output.into(),
            config: config.into(),
            debug: false,
            poll: false,
        }
    }

    /// Enable or disable debug output (disables `--minify`).
    #[must_use]
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Enable or disable filesystem polling in watch mode.
    #[must_use]
    pub fn poll(mut self, enabled: bool) -> Self {
        self.poll = enabled;
        self
    }
}

/// Build the argument list for a one-shot stylesheet compile.
///
/// The first element is the resolved executable path; `--minify` is
/// appended unless `debug` is set.
///
/// # Errors
///
/// Propagates [`Locator::locate`]'s errors unchanged.
pub fn compile_command(locator: &Locator, options: &CommandOptions) -> LocateResult<Vec<String>> {
    let exe = locator.locate(&options.exe_root)?;

    let mut command = vec![
        path_arg(&exe),
        "-i".to_string(),
        path_arg(&options.input),
        "-o".to_string(),
        path_arg(&options.output),
        "-c".to_string(),
        path_arg(&options.config),
    ];
    if !options.debug {
        command.push("--minify".to_string());
    }

    Ok(command)
}

/// Build the argument list for watch mode: the compile invocation with `-w`
/// appended, plus `-p` when polling is requested.
///
/// # Errors
///
/// Propagates [`Locator::locate`]'s errors unchanged.
pub fn watch_command(locator: &Locator, options: &CommandOptions) -> LocateResult<Vec<String>> {
    let mut command = compile_command(locator, options)?;

    command.push("-w".to_string());
    if options.poll {
        command.push("-p".to_string());
    }

    Ok(command)
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
