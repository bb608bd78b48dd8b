//! Course catalog.
//!
//! Owns every course definition, assigned or not. Identity is assigned
//! here: ids increase monotonically and are never handed out twice.

use tracing::debug;

use crate::allocator::Allocator;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{Course, CourseDraft, CourseId, CourseKind};
use crate::validation::{first_issue, mixed_split};

/// The set of all defined courses, in creation order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
    next_id: u64,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a draft and appends the resulting course.
    ///
    /// On failure the catalog is unchanged and no id is consumed.
    pub fn create_course(&mut self, draft: CourseDraft) -> PlannerResult<&Course> {
        if let Some(err) = first_issue(&draft) {
            return Err(err.into());
        }

        let mixed = (draft.kind == CourseKind::Mixed).then(|| mixed_split(&draft));
        let course = Course {
            id: CourseId(self.next_id),
            name: draft.name.trim().to_string(),
            credits: draft.credits,
            kind: draft.kind,
            mixed,
        };
        self.next_id += 1;

        debug!(
            id = %course.id,
            name = %course.name,
            credits = course.credits,
            kind = %course.kind,
            "course created"
        );
        self.courses.push(course);
        Ok(&self.courses[self.courses.len() - 1])
    }

    /// Removes a course definition.
    ///
    /// Only the planner calls this, right after releasing the course from
    /// the allocator, so no semester can keep a dangling id.
    pub(crate) fn remove_course(&mut self, id: CourseId) -> PlannerResult<Course> {
        let pos = self
            .courses
            .iter()
            .position(|c| c.id == id)
            .ok_or(PlannerError::UnknownCourse(id))?;
        let course = self.courses.remove(pos);
        debug!(id = %id, "course removed");
        Ok(course)
    }

    /// Courses no semester references, in creation order.
    pub fn list_unassigned(&self, allocator: &Allocator) -> Vec<&Course> {
        self.courses
            .iter()
            .filter(|c| !allocator.is_assigned(c.id))
            .collect()
    }

    /// Looks up a course.
    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Whether the course exists.
    pub fn contains(&self, id: CourseId) -> bool {
        self.get(id).is_some()
    }

    /// Credit weight of a course.
    pub fn credits_of(&self, id: CourseId) -> Option<f64> {
        self.get(id).map(|c| c.credits)
    }

    /// All courses in creation order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog holds no course.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Sum of all course credits.
    pub fn total_credits(&self) -> f64 {
        self.courses.iter().map(|c| c.credits).sum()
    }
}
