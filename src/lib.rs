//! Locator and command builder for the platform-specific Tailwind CSS CLI.
//!
//! Upstream tailwindcss ships a standalone native binary per platform. This
//! crate finds the right one for the host machine among bundled per-platform
//! directories (falling back to the process search path) and builds the
//! argument lists a host build tool needs to compile or watch stylesheets.
//! It never spawns the process itself; running the command is the caller's
//! job.
//!
//! ```no_run
//! use std::path::PathBuf;
//! use tailwindcss_bin::{CommandOptions, Locator, compile_command};
//!
//! let locator = Locator::from_env();
//! let options = CommandOptions::new(
//!     PathBuf::from("exe"),
//!     PathBuf::from("app/assets/stylesheets/application.tailwind.css"),
//!     PathBuf::from("app/assets/builds/tailwind.css"),
//!     PathBuf::from("config/tailwind.config.js"),
//! );
//! let argv = compile_command(&locator, &options)?;
//! # Ok::<(), tailwindcss_bin::LocateError>(())
//! ```

pub mod command;
pub mod error;
pub mod locate;
pub mod platform;
pub mod upstream;

pub use command::{CommandOptions, compile_command, watch_command};
pub use error::{LocateError, LocateResult};
pub use locate::Locator;
pub use platform::Platform;
