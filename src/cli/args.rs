//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Course catalog explorer: ordered course index, prerequisite trees, and CSV-backed catalog queries
#[derive(Parser, Debug)]
#[command(name = "coursecat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the full course list, ascending by identifier
    List {
        /// Catalog CSV file
        #[arg(value_hint = ValueHint::FilePath, env = "COURSECAT_SOURCE")]
        source: Option<PathBuf>,
    },

    /// Show one course and its prerequisites
    Show {
        /// Course identifier, e.g. CSCI200
        identifier: String,

        /// Catalog CSV file
        #[arg(value_hint = ValueHint::FilePath, env = "COURSECAT_SOURCE")]
        source: Option<PathBuf>,
    },

    /// Show the transitive prerequisite hierarchy as a tree
    Prereqs {
        /// Course identifier
        identifier: String,

        /// Catalog CSV file
        #[arg(value_hint = ValueHint::FilePath, env = "COURSECAT_SOURCE")]
        source: Option<PathBuf>,
    },

    /// Run the interactive course planner menu
    Interactive {
        /// Catalog CSV file to load before the first prompt
        #[arg(value_hint = ValueHint::FilePath, env = "COURSECAT_SOURCE")]
        source: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Show global config path
    Path,

    /// Create config template
    Init,
}
