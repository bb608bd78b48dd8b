//! Read-only board snapshots.
//!
//! Snapshots own their data, so a renderer or an export collaborator can
//! hold one while the planner keeps changing.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Course, CourseId};

/// Owned copy of the whole board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerSnapshot {
    /// Courses not placed in any semester, in creation order.
    pub unassigned_courses: Vec<Course>,
    /// Semesters in board order.
    pub semesters: Vec<SemesterView>,
    /// Cap in effect when the snapshot was taken.
    pub credit_cap: f64,
}

/// Owned copy of one semester with its courses resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterView {
    /// Position on the board (0-based).
    pub index: usize,
    /// Courses in drop order.
    pub courses: Vec<Course>,
    /// Sum of course credits.
    pub total_credits: f64,
    /// Cap in effect.
    pub credit_cap: f64,
    /// Whether the total exceeds the cap.
    pub over_capacity: bool,
}

impl PlannerSnapshot {
    /// Semester view by index.
    pub fn semester(&self, index: usize) -> Option<&SemesterView> {
        self.semesters.get(index)
    }

    /// All placed courses, semester by semester.
    pub fn assigned_courses(&self) -> impl Iterator<Item = &Course> {
        self.semesters.iter().flat_map(|s| s.courses.iter())
    }

    /// Semester index holding the course, if placed.
    pub fn semester_of(&self, id: CourseId) -> Option<usize> {
        self.semesters
            .iter()
            .find(|s| s.courses.iter().any(|c| c.id == id))
            .map(|s| s.index)
    }
}

impl SemesterView {
    /// Ids of the held courses.
    pub fn course_ids(&self) -> Vec<CourseId> {
        self.courses.iter().map(|c| c.id).collect()
    }
}

impl fmt::Display for SemesterView {
    /// Board header, e.g. `Semester 1 (25/30 Credits)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Semester {} ({}/{} Credits)",
            self.index + 1,
            self.total_credits,
            self.credit_cap
        )
    }
}
