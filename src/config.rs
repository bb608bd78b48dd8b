//! Board configuration.
//!
//! The number of semesters and the per-semester credit cap are
//! configuration, not logic. Defaults match the usual six-semester board
//! with a 30-credit ceiling.

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};

/// Default number of semester slots.
pub const DEFAULT_SEMESTER_COUNT: usize = 6;

/// Default credit cap per semester (inclusive).
pub const DEFAULT_CREDIT_CAP: f64 = 30.0;

/// Planner configuration.
///
/// # Example
///
/// ```
/// use credit_planner::PlannerConfig;
///
/// let config = PlannerConfig::from_json_str(r#"{"creditCap": 24}"#).unwrap();
/// assert_eq!(config.semester_count, 6);
/// assert_eq!(config.credit_cap, 24.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlannerConfig {
    /// Number of semester slots on the board.
    pub semester_count: usize,
    /// Maximum total credits per semester (inclusive).
    pub credit_cap: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            semester_count: DEFAULT_SEMESTER_COUNT,
            credit_cap: DEFAULT_CREDIT_CAP,
        }
    }
}

impl PlannerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of semesters.
    pub fn with_semester_count(mut self, semester_count: usize) -> Self {
        self.semester_count = semester_count;
        self
    }

    /// Sets the credit cap.
    pub fn with_credit_cap(mut self, credit_cap: f64) -> Self {
        self.credit_cap = credit_cap;
        self
    }

    /// Parses and validates a JSON configuration. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> PlannerResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| PlannerError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the board has at least one semester and a usable cap.
    pub fn validate(&self) -> PlannerResult<()> {
        if self.semester_count == 0 {
            return Err(PlannerError::InvalidConfig(
                "semester count must be at least 1".into(),
            ));
        }
        validate_cap(self.credit_cap)
    }
}

pub(crate) fn validate_cap(cap: f64) -> PlannerResult<()> {
    if cap.is_finite() && cap > 0.0 {
        Ok(())
    } else {
        Err(PlannerError::InvalidConfig(format!(
            "credit cap must be a positive number, got {cap}"
        )))
    }
}
