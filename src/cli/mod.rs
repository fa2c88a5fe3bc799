//! CLI layer: argument parsing, dispatch, and terminal output

pub mod args;
pub mod commands;
pub mod error;
pub mod output;
pub mod prereq_tree;

pub use args::{Cli, Commands};
pub use error::{CliError, CliResult};
