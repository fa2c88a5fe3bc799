//! coursecat: course catalog explorer.
//!
//! An in-memory course catalog backed by an arena-based binary search
//! tree ([`domain::CourseIndex`]), populated from a comma-separated
//! source file ([`application::CatalogLoader`]) and queried through
//! the CLI, either one-shot subcommands or the interactive planner
//! menu.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
