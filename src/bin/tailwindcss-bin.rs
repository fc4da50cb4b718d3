//! Diagnostic CLI for the tailwindcss binary locator.
//!
//! Prints what the library would resolve or run for the current machine.
//! It never spawns tailwindcss itself; wiring the command into a build
//! pipeline is the host's job.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use tailwindcss_bin::{CommandOptions, Locator, compile_command, upstream, watch_command};

#[derive(Parser)]
#[command(name = "tailwindcss-bin")]
#[command(about = "Inspect how the bundled tailwindcss binary resolves")]
#[command(version)]
struct Cli {
    /// Root directory containing the bundled per-platform binaries
    #[arg(long = "exe-root", global = true, default_value = "exe")]
    exe_root: PathBuf,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the host platform identifier and whether upstream supports it
    Platform,
    /// Print the resolved tailwindcss executable path
    Which,
    /// Print the compile invocation, one argument per line
    Compile(BuildArgs),
    /// Print the watch invocation, one argument per line
    Watch(BuildArgs),
}

#[derive(Args)]
struct BuildArgs {
    /// Input stylesheet passed as `-i`
    #[arg(long, default_value = "app/assets/stylesheets/application.tailwind.css")]
    input: PathBuf,

    /// Output stylesheet passed as `-o`
    #[arg(long, default_value = "app/assets/builds/tailwind.css")]
    output: PathBuf,

    /// Tailwind config passed as `-c`
    #[arg(long, default_value = "config/tailwind.config.js")]
    config: PathBuf,

    /// Skip --minify for debuggable output
    #[arg(long)]
    debug: bool,

    /// Poll for file changes instead of using native events (watch only)
    #[arg(long)]
    poll: bool,
}

impl BuildArgs {
    fn to_options(&self, exe_root: &Path) -> CommandOptions {
        CommandOptions::new(exe_root, &self.input, &self.output, &self.config)
            .debug(self.debug)
            .poll(self.poll)
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> tailwindcss_bin::LocateResult<Vec<String>> {
    let locator = Locator::from_env();

    match &cli.command {
        Commands::Platform => {
            let platform = locator.platform();
            let support = upstream::native_asset(platform).map_or_else(
                || "not supported upstream".to_string(),
                |asset| format!("supported upstream ({} {asset})", upstream::VERSION),
            );
            Ok(vec![format!("{platform}: {support}")])
        }
        Commands::Which => locator
            .locate(&cli.exe_root)
            .map(|path| vec![path.display().to_string()]),
        Commands::Compile(args) => compile_command(&locator, &args.to_options(&cli.exe_root)),
        Commands::Watch(args) => watch_command(&locator, &args.to_options(&cli.exe_root)),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from(["tailwindcss-bin", "--exe-root", "/tmp/exe", "-v", "which"]);
        assert!(cli.verbose);
        assert_eq!(cli.exe_root, PathBuf::from("/tmp/exe"));
    }

    #[test]
    fn test_build_args_map_onto_options() {
        let cli = Cli::parse_from(["tailwindcss-bin", "watch", "--debug", "--poll"]);
        let Commands::Watch(args) = &cli.command else {
            panic!("expected watch subcommand");
        };
        let options = args.to_options(&cli.exe_root);
        assert!(options.debug);
        assert!(options.poll);
        assert_eq!(options.exe_root, PathBuf::from("exe"));
        assert_eq!(
            options.config,
            PathBuf::from("config/tailwind.config.js")
        );
    }
}
