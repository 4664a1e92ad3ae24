//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Lint and compile LESS/CSS style-sheets with recess as a build step
#[derive(Parser, Debug)]
#[command(name = "recess-build")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile the matched style-sheets with the recess engine
    Compile(commands::compile::CompileArgs),

    /// List the matched style-sheets and where their output goes
    Ls(commands::ls::LsArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        match self.command {
            Commands::Compile(args) => commands::compile::execute(args, &self.color),
            Commands::Ls(args) => commands::ls::execute(args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// `RUST_LOG` wins over `--log-level` when set
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A logger may already be installed when embedded; keep it
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_parse() {
        let cli = Cli::try_parse_from([
            "recess-build",
            "--log-level",
            "debug",
            "--color",
            "never",
            "ls",
        ])
        .unwrap();
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.color, "never");
        assert!(matches!(cli.command, Commands::Ls(_)));
    }

    #[test]
    fn test_compile_subcommand_parses_toggles() {
        let cli = Cli::try_parse_from([
            "recess-build",
            "compile",
            "--output-file",
            "bundle.css",
            "--compress",
            "true",
            "--no-ids",
            "false",
        ])
        .unwrap();
        match cli.command {
            Commands::Compile(args) => {
                assert_eq!(
                    args.settings.output_file.as_deref(),
                    Some(std::path::Path::new("bundle.css"))
                );
                assert_eq!(args.settings.compress, Some(true));
                assert_eq!(args.settings.no_ids, Some(false));
            }
            other => panic!("expected compile, got {:?}", other),
        }
    }
}
