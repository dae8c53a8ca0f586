//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "skillhub.toml";

#[derive(Parser)]
#[command(name = "skillhub")]
#[command(about = "Skillhub - keyword and intent driven skill routing over MCP")]
#[command(
    long_about = r#"Skillhub - keyword and intent driven skill routing over MCP

USAGE:
  skillhub serve                     # Run the MCP server on stdio
  skillhub analyze "your message"    # One-shot routing, JSON to stdout
  skillhub skills list               # Show the skill catalog
  skillhub skills search <keyword>   # Search the catalog

Logs go to stderr; set RUST_LOG for verbosity (e.g. RUST_LOG=debug)."#
)]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: PathBuf,

    /// Additional skill directories to scan (may repeat)
    #[arg(long = "skills-dir")]
    pub skill_dirs: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the MCP server over stdio
    Serve,

    /// Analyze one message and print the routing outcome as JSON
    Analyze {
        /// The message to route
        message: String,

        /// Maximum number of skills to activate (1-5)
        #[arg(long, default_value_t = 1)]
        max_skills: usize,

        /// Session identifier to activate under
        #[arg(long, default_value = "cli")]
        session: String,
    },

    /// Inspect the skill catalog
    Skills {
        #[command(subcommand)]
        action: SkillsAction,
    },
}

#[derive(Subcommand)]
pub enum SkillsAction {
    /// List every skill grouped by category
    List,

    /// Search skills by keyword
    Search {
        /// Keyword to search for
        keyword: String,
    },
}
