//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// prereq - Check a component's requirements and report what is missing.
#[derive(Debug, Parser)]
#[command(name = "prereq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Path to requirement manifest (overrides .prereq/requirements.yml)
    #[arg(short, long, global = true)]
    pub manifest: Option<PathBuf>,

    /// Path to host snapshot (overrides .prereq/host.yml)
    #[arg(long, global = true)]
    pub host: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate requirements (default if no command specified)
    Check(CheckArgs),

    /// Print the HTML error notice for unmet requirements
    Notice,

    /// Deactivate the target if any requirement is unmet
    Deactivate,

    /// Run the init and render hooks in order
    Lifecycle,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags() {
        let cli = Cli::parse_from([
            "prereq",
            "--manifest",
            "reqs.yml",
            "--host",
            "host.yml",
            "--quiet",
            "notice",
        ]);
        assert_eq!(cli.manifest, Some(PathBuf::from("reqs.yml")));
        assert_eq!(cli.host, Some(PathBuf::from("host.yml")));
        assert!(cli.quiet);
        assert!(matches!(cli.command, Some(Commands::Notice)));
    }

    #[test]
    fn check_accepts_json() {
        let cli = Cli::parse_from(["prereq", "check", "--json"]);
        match cli.command {
            Some(Commands::Check(args)) => assert!(args.json),
            other => panic!("Expected Check, got {:?}", other),
        }
    }

    #[test]
    fn command_is_optional() {
        let cli = Cli::parse_from(["prereq"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["prereq", "deactivate", "--debug", "-p", "/tmp/app"]);
        assert!(cli.debug);
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/app")));
    }
}
