//! Planner state: the catalog and the allocator kept in lockstep.
//!
//! The application shell owns one [`Planner`] per session. Every UI event
//! maps to one method here; each method either fully applies or returns an
//! error with the state untouched.

use tracing::{debug, warn};

use crate::allocator::Allocator;
use crate::catalog::Catalog;
use crate::config::PlannerConfig;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{Course, CourseDraft, CourseId, PlannerSnapshot, SemesterView};

/// Complete in-memory board state.
///
/// # Example
///
/// ```
/// use credit_planner::{CourseDraft, Planner, PlannerError};
///
/// let mut planner = Planner::default();
/// let algebra = planner.add_course(CourseDraft::traditional("Algebra", 25.0)).unwrap();
/// let lab = planner.add_course(CourseDraft::mixed("Lab", 6.0, 60.0, 40.0)).unwrap();
///
/// planner.place(algebra, 0).unwrap();
/// assert!(matches!(
///     planner.place(lab, 0),
///     Err(PlannerError::CapacityExceeded { .. })
/// ));
///
/// let snapshot = planner.snapshot();
/// assert_eq!(snapshot.unassigned_courses.len(), 1);
/// assert_eq!(snapshot.semesters[0].total_credits, 25.0);
/// ```
#[derive(Debug, Clone)]
pub struct Planner {
    catalog: Catalog,
    allocator: Allocator,
}

impl Default for Planner {
    fn default() -> Self {
        Self {
            catalog: Catalog::new(),
            allocator: Allocator::from_validated(&PlannerConfig::default()),
        }
    }
}

impl Planner {
    /// Creates an empty planner after validating the configuration.
    pub fn new(config: PlannerConfig) -> PlannerResult<Self> {
        Ok(Self {
            catalog: Catalog::new(),
            allocator: Allocator::new(&config)?,
        })
    }

    /// Read-only catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read-only allocator.
    pub fn allocator(&self) -> &Allocator {
        &self.allocator
    }

    /// Validates a draft and adds it to the unassigned pool.
    pub fn add_course(&mut self, draft: CourseDraft) -> PlannerResult<CourseId> {
        self.catalog.create_course(draft).map(|c| c.id)
    }

    /// Places (or moves) a course into a semester.
    pub fn place(&mut self, id: CourseId, semester: usize) -> PlannerResult<()> {
        self.allocator.place(&self.catalog, id, semester)
    }

    /// Takes a course off the board, back into the unassigned pool.
    ///
    /// Returns the semester it left, if any.
    pub fn release(&mut self, id: CourseId) -> Option<usize> {
        self.allocator.release(id)
    }

    /// Deletes a course, releasing it from its semester in the same call.
    pub fn remove_course(&mut self, id: CourseId) -> PlannerResult<Course> {
        if !self.catalog.contains(id) {
            return Err(PlannerError::UnknownCourse(id));
        }
        let from = self.allocator.release(id);
        let course = self.catalog.remove_course(id)?;
        debug!(course = %id, released_from = ?from, "course deleted");
        Ok(course)
    }

    /// Sum of credits in a semester.
    pub fn total_credits(&self, semester: usize) -> f64 {
        self.allocator.total_credits(&self.catalog, semester)
    }

    /// Whether a semester is above the cap.
    pub fn is_over_capacity(&self, semester: usize) -> bool {
        self.allocator.is_over_capacity(&self.catalog, semester)
    }

    /// Courses not placed in any semester, in creation order.
    pub fn unassigned(&self) -> Vec<&Course> {
        self.catalog.list_unassigned(&self.allocator)
    }

    /// Courses held by a semester, in drop order.
    pub fn semester_courses(&self, semester: usize) -> Vec<&Course> {
        self.allocator
            .semesters()
            .get(semester)
            .map(|s| s.courses.iter().filter_map(|c| self.catalog.get(*c)).collect())
            .unwrap_or_default()
    }

    /// Changes the credit cap for every semester.
    ///
    /// Existing placements are kept; semesters left above the new cap are
    /// reported as over capacity until the user moves courses out.
    pub fn set_credit_cap(&mut self, cap: f64) -> PlannerResult<()> {
        self.allocator.set_credit_cap(cap)?;
        for semester in self.allocator.over_capacity_semesters(&self.catalog) {
            warn!(
                semester = semester + 1,
                total = self.total_credits(semester),
                cap,
                "semester over capacity after cap change"
            );
        }
        Ok(())
    }

    /// Owned copy of the board for rendering or export.
    pub fn snapshot(&self) -> PlannerSnapshot {
        let cap = self.allocator.credit_cap();
        PlannerSnapshot {
            unassigned_courses: self.unassigned().into_iter().cloned().collect(),
            semesters: self
                .allocator
                .semesters()
                .iter()
                .map(|s| SemesterView {
                    index: s.index,
                    courses: self
                        .semester_courses(s.index)
                        .into_iter()
                        .cloned()
                        .collect(),
                    total_credits: self.total_credits(s.index),
                    credit_cap: cap,
                    over_capacity: self.is_over_capacity(s.index),
                })
                .collect(),
            credit_cap: cap,
        }
    }
}
