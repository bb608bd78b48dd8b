//! Input validation for course drafts.
//!
//! Checks a draft before the catalog assigns it an id. Detects:
//! - Non-positive or non-finite credit weights
//! - Mixed percentages outside 0..=100
//! - Mixed percentages that do not sum to 100
//!
//! Percentages on non-mixed drafts are ignored.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{CourseDraft, CourseKind, CreditSplit};

/// Tolerance for credit and percentage comparisons.
pub const CREDIT_EPSILON: f64 = 1e-9;

/// Validation result carrying every detected issue.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Credits are zero, negative, or not a finite number.
    NonPositiveCredits,
    /// Mixed percentages do not add up to 100.
    PercentageSum,
    /// A mixed percentage lies outside 0..=100.
    PercentageOutOfRange,
    /// Course type label not recognised.
    UnknownKind,
    /// A required field is absent or unreadable.
    MissingField,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a course draft.
///
/// Checks:
/// 1. Credits are finite and strictly positive
/// 2. For mixed drafts, each percentage is within 0..=100 (missing = 0)
/// 3. For mixed drafts, the percentages sum to 100
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_draft(draft: &CourseDraft) -> ValidationResult {
    let errors = collect_issues(draft);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// First issue found in a draft, if any.
pub(crate) fn first_issue(draft: &CourseDraft) -> Option<ValidationError> {
    collect_issues(draft).into_iter().next()
}

fn collect_issues(draft: &CourseDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !(draft.credits.is_finite() && draft.credits > 0.0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveCredits,
            format!(
                "Course '{}' must have a positive credit weight, got {}",
                draft.name, draft.credits
            ),
        ));
    }

    if draft.kind == CourseKind::Mixed {
        let split = mixed_split(draft);

        for (label, pct) in [
            ("traditional", split.traditional_pct),
            ("project", split.project_pct),
        ] {
            if !(0.0..=100.0).contains(&pct) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::PercentageOutOfRange,
                    format!("The {label} percentage must be between 0 and 100, got {pct}"),
                ));
            }
        }

        let sum = split.traditional_pct + split.project_pct;
        if !((sum - 100.0).abs() <= CREDIT_EPSILON) {
            errors.push(ValidationError::new(
                ValidationErrorKind::PercentageSum,
                format!(
                    "The percentages for traditional and project-based must add up to 100, got {sum}"
                ),
            ));
        }
    }

    errors
}

/// Percentages of a mixed draft, with missing values read as 0.
pub(crate) fn mixed_split(draft: &CourseDraft) -> CreditSplit {
    CreditSplit {
        traditional_pct: draft.traditional_pct.unwrap_or(0.0),
        project_pct: draft.project_pct.unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(draft: &CourseDraft) -> Vec<ValidationErrorKind> {
        match validate_draft(draft) {
            Ok(()) => vec![],
            Err(errors) => errors.into_iter().map(|e| e.kind).collect(),
        }
    }

    #[test]
    fn test_valid_drafts() {
        assert!(validate_draft(&CourseDraft::traditional("Algebra", 6.0)).is_ok());
        assert!(validate_draft(&CourseDraft::project("Capstone", 0.5)).is_ok());
        assert!(validate_draft(&CourseDraft::mixed("X", 4.0, 60.0, 40.0)).is_ok());
        assert!(validate_draft(&CourseDraft::mixed("X", 4.0, 100.0, 0.0)).is_ok());
    }

    #[test]
    fn test_non_positive_credits() {
        assert_eq!(
            kinds(&CourseDraft::traditional("A", 0.0)),
            vec![ValidationErrorKind::NonPositiveCredits]
        );
        assert_eq!(
            kinds(&CourseDraft::traditional("A", -3.0)),
            vec![ValidationErrorKind::NonPositiveCredits]
        );
        assert_eq!(
            kinds(&CourseDraft::traditional("A", f64::NAN)),
            vec![ValidationErrorKind::NonPositiveCredits]
        );
        assert_eq!(
            kinds(&CourseDraft::traditional("A", f64::INFINITY)),
            vec![ValidationErrorKind::NonPositiveCredits]
        );
    }

    #[test]
    fn test_mixed_sum() {
        let errors = validate_draft(&CourseDraft::mixed("X", 4.0, 60.0, 50.0)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::PercentageSum);
        assert!(errors[0].message.contains("add up to 100"));
    }

    #[test]
    fn test_mixed_out_of_range() {
        let k = kinds(&CourseDraft::mixed("X", 4.0, 150.0, -50.0));
        assert_eq!(
            k,
            vec![
                ValidationErrorKind::PercentageOutOfRange,
                ValidationErrorKind::PercentageOutOfRange
            ]
        );
    }

    #[test]
    fn test_mixed_missing_percentage_reads_as_zero() {
        let mut d = CourseDraft::new("X", 3.0, CourseKind::Mixed);
        d.traditional_pct = Some(100.0);
        assert!(validate_draft(&d).is_ok());

        d.traditional_pct = None;
        assert_eq!(kinds(&d), vec![ValidationErrorKind::PercentageSum]);
    }

    #[test]
    fn test_percentages_ignored_when_not_mixed() {
        let d = CourseDraft::traditional("A", 3.0).with_percentages(10.0, 10.0);
        assert!(validate_draft(&d).is_ok());
    }

    #[test]
    fn test_fractional_percentages() {
        let d = CourseDraft::mixed("X", 3.0, 33.3, 66.7);
        assert!(validate_draft(&d).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let d = CourseDraft::mixed("X", 0.0, 60.0, 50.0);
        let errors = validate_draft(&d).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
