//! Semester allocator.
//!
//! Owns the ordered semester buckets and the assignment relation
//! (course id → semester). Every placement goes through [`Allocator::place`],
//! which enforces the credit cap and keeps each course in at most one
//! semester.
//!
//! # Placement rule
//!
//! The candidate total for the target semester is computed with the course
//! removed from wherever it currently sits, target included. If that total
//! exceeds the cap, nothing changes. A total exactly equal to the cap is
//! accepted. Accepted placements append the course at the end of the target.

use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::config::{validate_cap, PlannerConfig};
use crate::error::{PlannerError, PlannerResult};
use crate::models::{CourseId, Semester};
use crate::validation::CREDIT_EPSILON;

/// Fixed-size ordered collection of semesters with a shared credit cap.
#[derive(Debug, Clone)]
pub struct Allocator {
    semesters: Vec<Semester>,
    credit_cap: f64,
}

impl Allocator {
    /// Creates an allocator with `config.semester_count` empty semesters.
    ///
    /// # Errors
    /// [`PlannerError::InvalidConfig`] if the board has no semester or the
    /// cap is not a positive finite number.
    pub fn new(config: &PlannerConfig) -> PlannerResult<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    /// Builds an allocator from a configuration already known to be valid.
    pub(crate) fn from_validated(config: &PlannerConfig) -> Self {
        Self {
            semesters: (0..config.semester_count).map(Semester::new).collect(),
            credit_cap: config.credit_cap,
        }
    }

    /// Places a course into a semester, moving it if it is already placed.
    ///
    /// # Errors
    /// - [`PlannerError::UnknownCourse`] if the catalog lacks the course.
    /// - [`PlannerError::UnknownSemester`] if the index is out of range.
    /// - [`PlannerError::CapacityExceeded`] if the move would exceed the cap.
    ///
    /// The arrangement is unchanged on every error.
    pub fn place(&mut self, catalog: &Catalog, id: CourseId, semester: usize) -> PlannerResult<()> {
        let credits = catalog
            .credits_of(id)
            .ok_or(PlannerError::UnknownCourse(id))?;
        self.check_index(semester)?;

        let others: f64 = self.semesters[semester]
            .courses
            .iter()
            .filter(|c| **c != id)
            .filter_map(|c| catalog.credits_of(*c))
            .sum();
        let attempted = others + credits;

        if exceeds(attempted, self.credit_cap) {
            warn!(
                course = %id,
                semester = semester + 1,
                attempted,
                cap = self.credit_cap,
                "credit limit exceeded for this semester"
            );
            return Err(PlannerError::CapacityExceeded {
                semester,
                attempted,
                cap: self.credit_cap,
            });
        }

        let from = self.release(id);
        self.semesters[semester].push(id);
        debug!(course = %id, from = ?from, to = semester, total = attempted, "course placed");
        Ok(())
    }

    /// Removes a course from whichever semester holds it.
    ///
    /// Returns the index it was released from, or `None` if it was unplaced.
    pub fn release(&mut self, id: CourseId) -> Option<usize> {
        self.semesters
            .iter_mut()
            .find_map(|s| s.remove(id).then_some(s.index))
    }

    /// Sum of credits of the courses held by a semester.
    ///
    /// Returns 0 for an out-of-range index.
    pub fn total_credits(&self, catalog: &Catalog, semester: usize) -> f64 {
        self.semesters
            .get(semester)
            .map(|s| s.courses.iter().filter_map(|c| catalog.credits_of(*c)).sum())
            .unwrap_or(0.0)
    }

    /// Whether the semester total is strictly above the cap.
    ///
    /// Only reachable after [`Allocator::set_credit_cap`] lowers the cap
    /// below an existing load.
    pub fn is_over_capacity(&self, catalog: &Catalog, semester: usize) -> bool {
        exceeds(self.total_credits(catalog, semester), self.credit_cap)
    }

    /// Credits still available in a semester (negative when over capacity).
    pub fn remaining_credits(&self, catalog: &Catalog, semester: usize) -> f64 {
        self.credit_cap - self.total_credits(catalog, semester)
    }

    /// Indices of semesters currently over capacity.
    pub fn over_capacity_semesters(&self, catalog: &Catalog) -> Vec<usize> {
        (0..self.semesters.len())
            .filter(|&i| self.is_over_capacity(catalog, i))
            .collect()
    }

    /// Semester index holding the course.
    pub fn semester_of(&self, id: CourseId) -> Option<usize> {
        self.semesters.iter().find(|s| s.contains(id)).map(|s| s.index)
    }

    /// Whether the course is placed anywhere.
    pub fn is_assigned(&self, id: CourseId) -> bool {
        self.semester_of(id).is_some()
    }

    /// All semesters in board order.
    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    /// Number of semesters.
    pub fn semester_count(&self) -> usize {
        self.semesters.len()
    }

    /// Current cap.
    pub fn credit_cap(&self) -> f64 {
        self.credit_cap
    }

    /// Changes the cap. Existing placements are kept even if they now
    /// exceed it.
    pub fn set_credit_cap(&mut self, cap: f64) -> PlannerResult<()> {
        validate_cap(cap)?;
        self.credit_cap = cap;
        Ok(())
    }

    fn check_index(&self, semester: usize) -> PlannerResult<()> {
        if semester < self.semesters.len() {
            Ok(())
        } else {
            Err(PlannerError::UnknownSemester {
                index: semester,
                count: self.semesters.len(),
            })
        }
    }
}

/// Cap is inclusive; sums within `CREDIT_EPSILON` of it count as equal.
fn exceeds(total: f64, cap: f64) -> bool {
    total > cap + CREDIT_EPSILON
}
