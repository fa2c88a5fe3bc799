//! Domain layer: course records and the ordered index
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod index;

pub use entities::Course;
pub use index::{CourseIndex, InOrderIter};
