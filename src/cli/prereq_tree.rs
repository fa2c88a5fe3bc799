//! Prerequisite hierarchy rendering

use std::collections::HashSet;

use termtree::Tree;

use crate::domain::{Course, CourseIndex};

/// Render the transitive prerequisite hierarchy of `course`.
///
/// Each node shows `identifier, name`. Identifiers the catalog does
/// not contain are marked, and a course already on the current path
/// is not expanded again, so cyclic references cannot recurse
/// forever.
pub fn prerequisite_tree(index: &CourseIndex, course: &Course) -> Tree<String> {
    let mut path = HashSet::new();
    build(index, course, &mut path)
}

fn build(index: &CourseIndex, course: &Course, path: &mut HashSet<String>) -> Tree<String> {
    path.insert(course.identifier.clone());

    let mut leaves = Vec::new();
    for prereq in &course.prerequisites {
        if path.contains(prereq) {
            leaves.push(Tree::new(format!("{} (already shown)", prereq)));
            continue;
        }
        match index.search(prereq) {
            Some(found) => leaves.push(build(index, found, path)),
            None => leaves.push(Tree::new(format!("{} (not in catalog)", prereq))),
        }
    }

    path.remove(&course.identifier);
    Tree::new(course.to_string()).with_leaves(leaves)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CourseIndex {
        let mut index = CourseIndex::new();
        index.insert(Course::new("CSCI100", "Intro CS", vec![]));
        index.insert(Course::new(
            "CSCI200",
            "Data Structures",
            vec!["CSCI100".to_string()],
        ));
        index.insert(Course::new(
            "CSCI300",
            "Algorithms",
            vec!["CSCI200".to_string(), "MATH201".to_string()],
        ));
        index
    }

    #[test]
    fn renders_transitive_prerequisites() {
        let index = catalog();
        let course = index.search("CSCI300").unwrap();

        let rendered = prerequisite_tree(&index, course).to_string();

        assert!(rendered.contains("CSCI300, Algorithms"));
        assert!(rendered.contains("CSCI200, Data Structures"));
        assert!(rendered.contains("CSCI100, Intro CS"));
        assert!(rendered.contains("MATH201 (not in catalog)"));
    }

    #[test]
    fn cyclic_references_are_not_expanded_twice() {
        let mut index = CourseIndex::new();
        index.insert(Course::new("A", "First", vec!["B".to_string()]));
        index.insert(Course::new("B", "Second", vec!["A".to_string()]));
        let course = index.search("A").unwrap();

        let rendered = prerequisite_tree(&index, course).to_string();

        assert!(rendered.contains("A (already shown)"));
    }
}
