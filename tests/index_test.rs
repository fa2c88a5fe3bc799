//! Tests for the ordered course index

use rstest::rstest;

use coursecat::domain::{Course, CourseIndex};

fn course(identifier: &str, name: &str) -> Course {
    Course::new(identifier, name, Vec::new())
}

fn identifiers(index: &CourseIndex) -> Vec<String> {
    index
        .iter_in_order()
        .map(|c| c.identifier.clone())
        .collect()
}

#[test]
fn given_empty_index_when_reading_then_nothing_found() {
    // Arrange
    let index = CourseIndex::new();

    // Assert
    assert!(index.is_empty());
    assert_eq!(index.len(), 0);
    assert_eq!(index.depth(), 0);
    assert_eq!(index.iter_in_order().count(), 0);
    assert!(index.search("CS101").is_none());
}

#[rstest]
#[case::source_order(&["CS101", "CS050", "CS200"])]
#[case::sorted(&["CS050", "CS101", "CS200"])]
#[case::reverse_sorted(&["CS200", "CS101", "CS050"])]
fn given_any_insertion_order_when_enumerating_then_ascending(#[case] order: &[&str]) {
    // Arrange
    let mut index = CourseIndex::new();
    for id in order {
        index.insert(course(id, "placeholder"));
    }

    // Act
    let ids = identifiers(&index);

    // Assert
    assert_eq!(ids, vec!["CS050", "CS101", "CS200"]);
}

#[test]
fn given_loaded_index_when_searching_then_every_course_found() {
    // Arrange
    let inserted = ["MATH201", "CSCI100", "CSCI301", "CSCI200", "ENGL101"];
    let mut index = CourseIndex::new();
    for id in inserted {
        index.insert(course(id, "placeholder"));
    }

    // Assert
    for id in inserted {
        let found = index.search(id).expect("inserted course present");
        assert_eq!(found.identifier, id);
    }
}

#[test]
fn given_missing_identifier_when_searching_then_none() {
    // Arrange
    let mut index = CourseIndex::new();
    index.insert(course("CSCI100", "Intro CS"));
    index.insert(course("CSCI200", "Data Structures"));

    // Assert
    assert!(index.search("CSCI999").is_none());
    assert!(index.search("").is_none());
    assert!(index.search("csci100").is_none(), "comparison is case-sensitive");
}

#[test]
fn given_duplicate_identifier_when_reading_then_first_inserted_shadows() {
    // Arrange
    let mut index = CourseIndex::new();
    index.insert(course("A", "first"));
    index.insert(course("A", "second"));

    // Assert: search finds the instance nearer the root
    assert_eq!(index.search("A").map(|c| c.name.as_str()), Some("first"));

    // Assert: enumeration still yields both entries
    assert_eq!(index.len(), 2);
    assert_eq!(identifiers(&index), vec!["A", "A"]);
    let names: Vec<_> = index.iter_in_order().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn given_catalog_scenario_when_querying_then_matches_expected() {
    // Arrange
    let mut index = CourseIndex::new();
    index.insert(Course::new("CS101", "Intro", vec![]));
    index.insert(Course::new("CS050", "Foundations", vec![]));
    index.insert(Course::new(
        "CS200",
        "Data Structures",
        vec!["CS101".to_string()],
    ));

    // Assert
    assert_eq!(identifiers(&index), vec!["CS050", "CS101", "CS200"]);

    let found = index.search("CS200").expect("CS200 present");
    assert_eq!(found.name, "Data Structures");
    assert_eq!(found.prerequisites, vec!["CS101"]);

    assert!(index.search("CS999").is_none());
}

#[test]
fn given_no_intervening_insert_when_reading_repeatedly_then_identical_results() {
    // Arrange
    let mut index = CourseIndex::new();
    for id in ["CS200", "CS050", "CS101"] {
        index.insert(course(id, "placeholder"));
    }

    // Act
    let first_enumeration = identifiers(&index);
    let second_enumeration = identifiers(&index);
    let first_search = index.search("CS101").cloned();
    let second_search = index.search("CS101").cloned();

    // Assert
    assert_eq!(first_enumeration, second_enumeration);
    assert_eq!(first_search, second_search);
}

#[test]
fn given_sorted_insertion_when_measuring_depth_then_degenerates_to_len() {
    // Arrange: worst-case shape, every node a right child
    let mut index = CourseIndex::new();
    for id in ["A", "B", "C", "D", "E"] {
        index.insert(course(id, "placeholder"));
    }

    // Assert: operations still correct on the degenerate tree
    assert_eq!(index.depth(), 5);
    assert_eq!(index.len(), 5);
    assert_eq!(identifiers(&index), vec!["A", "B", "C", "D", "E"]);
    assert_eq!(index.search("E").map(|c| c.identifier.as_str()), Some("E"));
}

#[test]
fn given_balanced_insertion_when_measuring_depth_then_shallow() {
    // Arrange
    let mut index = CourseIndex::new();
    for id in ["B", "A", "C"] {
        index.insert(course(id, "placeholder"));
    }

    // Assert
    assert_eq!(index.depth(), 2);
}
