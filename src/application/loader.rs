//! Catalog loading: comma-separated source file to [`CourseIndex`].
//!
//! Row format: `identifier,name[,prerequisite...]`. Fields are
//! trimmed. Rows missing an identifier or name are skipped with a
//! diagnostic; prerequisites referencing an identifier absent from
//! the source are dropped with a diagnostic. Bad input never aborts
//! the rest of the load.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, instrument, warn};

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::{Course, CourseIndex};

/// Result of one catalog load.
#[derive(Debug)]
pub struct LoadedCatalog {
    /// Freshly built index containing every accepted row
    pub index: CourseIndex,
    /// Rows inserted into the index
    pub rows_loaded: usize,
    /// Rows rejected for a missing identifier or name
    pub rows_skipped: usize,
    /// Prerequisite references dropped because the identifier does
    /// not appear in the source
    pub prerequisites_dropped: usize,
}

/// Builds a [`CourseIndex`] from a comma-separated source file.
pub struct CatalogLoader {
    known_identifiers: HashSet<String>,
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogLoader {
    pub fn new() -> Self {
        Self {
            known_identifiers: HashSet::new(),
        }
    }

    /// Load the file at `path` into a fresh index.
    ///
    /// Two passes: the first collects the identifier column so that
    /// prerequisite references can be checked against the whole
    /// source (forward references are valid), the second parses rows
    /// and inserts them in file order. Insertion order determines the
    /// final tree shape.
    #[instrument(level = "debug", skip(self))]
    pub fn load_from_file(&mut self, path: &Path) -> ApplicationResult<LoadedCatalog> {
        if !path.exists() {
            return Err(ApplicationError::SourceNotFound(path.to_path_buf()));
        }

        self.scan_identifiers(path)?;

        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut index = CourseIndex::new();
        let mut rows_loaded = 0;
        let mut rows_skipped = 0;
        let mut prerequisites_dropped = 0;

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match self.parse_row(&line) {
                Some((course, dropped)) => {
                    prerequisites_dropped += dropped;
                    index.insert(course);
                    rows_loaded += 1;
                }
                None => {
                    warn!("skipping malformed row {}: {:?}", line_no + 1, line);
                    rows_skipped += 1;
                }
            }
        }

        debug!(
            "loaded {} courses ({} rows skipped, {} prerequisites dropped), tree depth {}",
            rows_loaded,
            rows_skipped,
            prerequisites_dropped,
            index.depth()
        );

        Ok(LoadedCatalog {
            index,
            rows_loaded,
            rows_skipped,
            prerequisites_dropped,
        })
    }

    /// First pass: collect every identifier appearing in column 1.
    fn scan_identifiers(&mut self, path: &Path) -> ApplicationResult<()> {
        self.known_identifiers.clear();
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        for line in reader.lines() {
            let line = line?;
            if let Some(identifier) = line.split(',').next() {
                let identifier = identifier.trim();
                if !identifier.is_empty() {
                    self.known_identifiers.insert(identifier.to_string());
                }
            }
        }
        Ok(())
    }

    /// Parse one row into a course.
    ///
    /// Returns the course plus the number of dropped prerequisite
    /// references, or `None` when the identifier or name is missing.
    /// Empty trailing cells are ignored rather than counted.
    fn parse_row(&self, line: &str) -> Option<(Course, usize)> {
        let mut fields = line.split(',').map(str::trim);

        let identifier = fields.next().filter(|f| !f.is_empty())?;
        let name = fields.next().filter(|f| !f.is_empty())?;

        let mut prerequisites = Vec::new();
        let mut dropped = 0;
        for prereq in fields.filter(|f| !f.is_empty()) {
            if self.known_identifiers.contains(prereq) {
                prerequisites.push(prereq.to_string());
            } else {
                warn!(
                    "course {}: dropping unknown prerequisite {:?}",
                    identifier, prereq
                );
                dropped += 1;
            }
        }

        Some((Course::new(identifier, name, prerequisites), dropped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader_knowing(identifiers: &[&str]) -> CatalogLoader {
        let mut loader = CatalogLoader::new();
        for id in identifiers {
            loader.known_identifiers.insert(id.to_string());
        }
        loader
    }

    #[test]
    fn parse_row_trims_fields() {
        let loader = loader_knowing(&["CSCI100", "CSCI101"]);
        let (course, dropped) = loader
            .parse_row("  CSCI101 , Intro to Programming ,  CSCI100 ")
            .unwrap();
        assert_eq!(course.identifier, "CSCI101");
        assert_eq!(course.name, "Intro to Programming");
        assert_eq!(course.prerequisites, vec!["CSCI100"]);
        assert_eq!(dropped, 0);
    }

    #[test]
    fn parse_row_without_name_is_rejected() {
        let loader = loader_knowing(&[]);
        assert!(loader.parse_row("CSCI101").is_none());
        assert!(loader.parse_row("CSCI101,").is_none());
        assert!(loader.parse_row(",Orphan Name").is_none());
    }

    #[test]
    fn parse_row_drops_unknown_prerequisites() {
        let loader = loader_knowing(&["CSCI100"]);
        let (course, dropped) = loader
            .parse_row("CSCI200,Data Structures,CSCI100,BIO999")
            .unwrap();
        assert_eq!(course.prerequisites, vec!["CSCI100"]);
        assert_eq!(dropped, 1);
    }

    #[test]
    fn parse_row_ignores_empty_trailing_cells() {
        let loader = loader_knowing(&[]);
        let (course, dropped) = loader.parse_row("CSCI100,Intro CS,,").unwrap();
        assert!(course.prerequisites.is_empty());
        assert_eq!(dropped, 0);
    }
}
