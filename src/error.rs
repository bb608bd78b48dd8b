//! Error types for planner operations.
//!
//! Every error here is recoverable: the rejected operation leaves the
//! planner state exactly as it was before the call.

use thiserror::Error;

use crate::models::CourseId;
use crate::validation::ValidationError;

/// Errors returned by catalog, allocator, and planner mutators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlannerError {
    /// The course draft failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Placing the course would push the semester over the credit cap.
    #[error("semester {} would carry {attempted} credits, cap is {cap}", .semester + 1)]
    CapacityExceeded {
        /// Target semester index (0-based).
        semester: usize,
        /// Total the semester would have carried after the placement.
        attempted: f64,
        /// Configured cap.
        cap: f64,
    },

    /// No course with this id exists in the catalog.
    #[error("unknown course {0}")]
    UnknownCourse(CourseId),

    /// Semester index is outside the configured range.
    #[error("semester index {index} out of range (board has {count} semesters)")]
    UnknownSemester { index: usize, count: usize },

    /// Configuration value rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for planner results.
pub type PlannerResult<T> = Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_capacity_message_is_one_based() {
        let err = PlannerError::CapacityExceeded {
            semester: 0,
            attempted: 31.0,
            cap: 30.0,
        };
        assert_eq!(err.to_string(), "semester 1 would carry 31 credits, cap is 30");
    }

    #[test]
    fn test_validation_conversion() {
        let v = ValidationError::new(ValidationErrorKind::PercentageSum, "bad split");
        let err: PlannerError = v.clone().into();
        assert_eq!(err, PlannerError::Validation(v));
        assert_eq!(err.to_string(), "bad split");
    }
}
