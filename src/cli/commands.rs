//! Command dispatch and the interactive planner menu

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, CatalogLoader, LoadedCatalog};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::cli::prereq_tree::prerequisite_tree;
use crate::config::Settings;
use crate::domain::CourseIndex;
use crate::util::path::expand_user_path;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::List { source }) => list(source.as_deref()),
        Some(Commands::Show { identifier, source }) => show(identifier, source.as_deref()),
        Some(Commands::Prereqs { identifier, source }) => prereqs(identifier, source.as_deref()),
        Some(Commands::Interactive { source }) => interactive(source.as_deref()),
        Some(Commands::Config { command }) => config_command(command),
        Some(Commands::Completion { shell }) => completion(*shell),
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    }
}

#[instrument]
fn list(source: Option<&Path>) -> CliResult<()> {
    let loaded = load_catalog(source)?;
    for course in loaded.index.iter_in_order() {
        output::info(course);
    }
    Ok(())
}

#[instrument]
fn show(identifier: &str, source: Option<&Path>) -> CliResult<()> {
    let loaded = load_catalog(source)?;
    let identifier = identifier.trim();
    match loaded.index.search(identifier) {
        Some(course) => {
            output::course(course);
            Ok(())
        }
        None => Err(CliError::CourseNotFound(identifier.to_string())),
    }
}

#[instrument]
fn prereqs(identifier: &str, source: Option<&Path>) -> CliResult<()> {
    let loaded = load_catalog(source)?;
    let identifier = identifier.trim();
    let course = loaded
        .index
        .search(identifier)
        .ok_or_else(|| CliError::CourseNotFound(identifier.to_string()))?;
    output::info(&prerequisite_tree(&loaded.index, course));
    Ok(())
}

/// The original planner menu: load a catalog, print the sorted list,
/// print one course, exit. Unknown choices are reported and the menu
/// repeats. EOF on stdin ends the session like choice 9.
#[instrument]
fn interactive(source: Option<&Path>) -> CliResult<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    output::info("Welcome to the course planner.");

    let mut index = CourseIndex::new();
    if let Some(path) = source {
        index = load_catalog(Some(path))?.index;
    }

    loop {
        output::info("");
        output::header("Menu:");
        output::detail("1. Load Data Structure");
        output::detail("2. Print Course List");
        output::detail("3. Print Course");
        output::detail("9. Exit");
        output::info("");
        output::prompt("What would you like to do?");

        let Some(line) = lines.next() else {
            break;
        };
        let choice = line.map_err(ApplicationError::Io)?;

        match choice.trim() {
            "1" => {
                output::prompt("Enter complete CSV file path:");
                let Some(path_line) = lines.next() else {
                    break;
                };
                let path = expand_user_path(&path_line.map_err(ApplicationError::Io)?);
                match load_catalog_from(&path) {
                    Ok(loaded) => {
                        output::info(&format!("{} courses loaded.", loaded.rows_loaded));
                        index = loaded.index;
                    }
                    Err(e) => output::error(&e),
                }
            }
            "2" => {
                output::info("Here is a sample schedule:");
                for course in index.iter_in_order() {
                    output::info(course);
                }
            }
            "3" => {
                output::prompt("What course do you want to know about?");
                let Some(id_line) = lines.next() else {
                    break;
                };
                let id_line = id_line.map_err(ApplicationError::Io)?;
                let identifier = id_line.trim();
                match index.search(identifier) {
                    Some(course) => output::course(course),
                    None => output::info(&format!("Course number {} not found.", identifier)),
                }
            }
            "9" => break,
            other => output::info(&format!("{} is not a valid option.", other)),
        }
    }

    output::info("Thank you for using the course planner!");
    Ok(())
}

#[instrument]
fn config_command(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(None)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => {
            output::info(&Settings::global_config_path().display());
        }
        ConfigCommands::Init => {
            let path = Settings::write_template()?;
            output::action("Created", &path.display());
        }
    }
    Ok(())
}

fn completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

/// Resolve the catalog source: explicit argument first, then the
/// configured default.
fn resolve_source(source: Option<&Path>) -> CliResult<PathBuf> {
    if let Some(path) = source {
        return Ok(expand_user_path(&path.to_string_lossy()));
    }
    let settings = Settings::load(None)?;
    settings.resolved_source().ok_or_else(|| {
        CliError::Usage(
            "no catalog source given (pass a file, or set default_source in the config)"
                .to_string(),
        )
    })
}

fn load_catalog(source: Option<&Path>) -> CliResult<LoadedCatalog> {
    let path = resolve_source(source)?;
    load_catalog_from(&path)
}

fn load_catalog_from(path: &Path) -> CliResult<LoadedCatalog> {
    debug!("loading catalog from {}", path.display());
    let mut loader = CatalogLoader::new();
    let loaded = loader.load_from_file(path)?;
    if loaded.rows_skipped > 0 {
        output::warning(&format!("{} malformed rows skipped", loaded.rows_skipped));
    }
    if loaded.prerequisites_dropped > 0 {
        output::warning(&format!(
            "{} unknown prerequisite references dropped",
            loaded.prerequisites_dropped
        ));
    }
    Ok(loaded)
}
