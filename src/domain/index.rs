//! Ordered course index: an arena-backed binary search tree.

use std::cmp::Ordering;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::entities::Course;

/// Tree node owning one course and its child links.
///
/// Nodes are created at insertion time and never mutated afterwards;
/// the whole tree is torn down together when the index is dropped.
#[derive(Debug)]
struct Node {
    course: Course,
    /// Arena index of the left child, None for a leaf edge
    left: Option<Index>,
    /// Arena index of the right child, None for a leaf edge
    right: Option<Index>,
}

/// Binary search tree over courses, keyed by identifier.
///
/// Nodes live in a generational arena and reference their children by
/// arena index; an empty tree is `root: None`. The tree does not
/// self-balance, so lookup cost is O(depth) and inserting identifiers
/// in sorted order degrades depth to the number of courses.
///
/// Equal identifiers route right on insert, exactly like
/// strictly-greater ones. A duplicated identifier is therefore stored
/// twice, and [`CourseIndex::search`] returns the first-inserted
/// instance (the one nearer the root). Callers that need unique keys
/// must check with `search` before inserting.
#[derive(Debug)]
pub struct CourseIndex {
    /// Arena storage for all tree nodes; nodes are never removed, so
    /// held indices stay valid for the lifetime of the index
    arena: Arena<Node>,
    /// Index of the root node, None for an empty tree
    root: Option<Index>,
}

impl Default for CourseIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseIndex {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Number of stored courses, duplicates counted.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a course, keyed by its identifier.
    ///
    /// Descends iteratively from the root: strictly-less goes left,
    /// equal or greater goes right. Never fails; see the type-level
    /// note on duplicate identifiers.
    #[instrument(level = "trace", skip(self, course), fields(identifier = %course.identifier))]
    pub fn insert(&mut self, course: Course) {
        let new_idx = self.arena.insert(Node {
            course,
            left: None,
            right: None,
        });

        let Some(mut cur) = self.root else {
            self.root = Some(new_idx);
            return;
        };

        loop {
            if self.arena[new_idx].course.identifier < self.arena[cur].course.identifier {
                match self.arena[cur].left {
                    Some(left) => cur = left,
                    None => {
                        self.arena[cur].left = Some(new_idx);
                        return;
                    }
                }
            } else {
                match self.arena[cur].right {
                    Some(right) => cur = right,
                    None => {
                        self.arena[cur].right = Some(new_idx);
                        return;
                    }
                }
            }
        }
    }

    /// Look up a course by exact identifier.
    ///
    /// The first match on the descent path wins. `None` is the
    /// caller's "no such course" signal, not a fault.
    #[instrument(level = "trace", skip(self))]
    pub fn search(&self, identifier: &str) -> Option<&Course> {
        let mut cur = self.root;
        while let Some(idx) = cur {
            let node = &self.arena[idx];
            match identifier.cmp(node.course.identifier.as_str()) {
                Ordering::Equal => return Some(&node.course),
                Ordering::Less => cur = node.left,
                Ordering::Greater => cur = node.right,
            }
        }
        None
    }

    /// In-order iterator over stored courses, ascending by identifier.
    ///
    /// Each call walks the full tree from scratch; no cursor state is
    /// retained on the index between calls.
    pub fn iter_in_order(&self) -> InOrderIter<'_> {
        InOrderIter {
            index: self,
            stack: Vec::new(),
            next_subtree: self.root,
        }
    }

    /// Maximum node depth, 0 for an empty tree.
    ///
    /// Makes the degenerate sorted-insertion shape observable.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(Index, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((idx, depth)) = stack.pop() {
            max = max.max(depth);
            let node = &self.arena[idx];
            if let Some(left) = node.left {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right {
                stack.push((right, depth + 1));
            }
        }
        max
    }
}

/// In-order traversal (left subtree, node, right subtree) with an
/// explicit stack, so adversarial sorted input cannot overflow the
/// call stack.
pub struct InOrderIter<'a> {
    index: &'a CourseIndex,
    stack: Vec<Index>,
    next_subtree: Option<Index>,
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = &'a Course;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.next_subtree {
            self.stack.push(idx);
            self.next_subtree = self.index.arena[idx].left;
        }
        let idx = self.stack.pop()?;
        self.next_subtree = self.index.arena[idx].right;
        Some(&self.index.arena[idx].course)
    }
}
