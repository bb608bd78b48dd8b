//! Semester bucket.
//!
//! A semester holds an ordered list of course ids. It knows nothing about
//! credits; totals are computed against the catalog by the allocator.

use serde::{Deserialize, Serialize};

use super::CourseId;

/// One semester slot on the board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    /// Position on the board (0-based).
    pub index: usize,
    /// Assigned courses, in drop order.
    pub courses: Vec<CourseId>,
}

impl Semester {
    /// Creates an empty semester at the given position.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            courses: Vec::new(),
        }
    }

    /// Whether the course is held here.
    pub fn contains(&self, id: CourseId) -> bool {
        self.courses.contains(&id)
    }

    /// Number of courses held.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether no course is held.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Human-facing label ("Semester 1").
    pub fn label(&self) -> String {
        format!("Semester {}", self.index + 1)
    }

    pub(crate) fn remove(&mut self, id: CourseId) -> bool {
        let before = self.courses.len();
        self.courses.retain(|c| *c != id);
        self.courses.len() != before
    }

    pub(crate) fn push(&mut self, id: CourseId) {
        self.courses.push(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semester_push_remove() {
        let mut s = Semester::new(2);
        assert!(s.is_empty());
        s.push(CourseId(1));
        s.push(CourseId(4));
        assert_eq!(s.len(), 2);
        assert!(s.contains(CourseId(4)));

        assert!(s.remove(CourseId(1)));
        assert!(!s.remove(CourseId(1)));
        assert_eq!(s.courses, vec![CourseId(4)]);
        assert_eq!(s.label(), "Semester 3");
    }
}
