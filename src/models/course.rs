//! Course model.
//!
//! A course is a named unit of academic work with a credit weight and a
//! pedagogical kind. Mixed courses split their weight between traditional
//! and project-based teaching by percentage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::{ValidationError, ValidationErrorKind};

/// Stable course identity.
///
/// Assigned by the catalog in creation order and never reused, even after
/// the course is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub u64);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Pedagogical kind of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseKind {
    /// Lecture-style teaching.
    #[default]
    Traditional,
    /// Project-based teaching.
    Project,
    /// Split between both by percentage.
    Mixed,
}

impl CourseKind {
    /// Lowercase label used on the wire and in spreadsheets.
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseKind::Traditional => "traditional",
            CourseKind::Project => "project",
            CourseKind::Mixed => "mixed",
        }
    }
}

impl fmt::Display for CourseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseKind {
    type Err = ValidationError;

    /// Case-insensitive. Accepts `project-based` as an alias for `project`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "traditional" => Ok(CourseKind::Traditional),
            "project" | "project-based" | "project based" => Ok(CourseKind::Project),
            "mixed" => Ok(CourseKind::Mixed),
            other => Err(ValidationError::new(
                ValidationErrorKind::UnknownKind,
                format!("Unknown course type '{other}'"),
            )),
        }
    }
}

/// Percentage split of a course's credits between the two teaching styles.
///
/// Always sums to 100 for a validated course.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditSplit {
    /// Traditional share (0..=100).
    pub traditional_pct: f64,
    /// Project share (0..=100).
    pub project_pct: f64,
}

impl CreditSplit {
    /// Split for a purely traditional course.
    pub const TRADITIONAL: CreditSplit = CreditSplit {
        traditional_pct: 100.0,
        project_pct: 0.0,
    };

    /// Split for a purely project-based course.
    pub const PROJECT: CreditSplit = CreditSplit {
        traditional_pct: 0.0,
        project_pct: 100.0,
    };
}

/// A validated course held by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Catalog-assigned identity.
    pub id: CourseId,
    /// Display name.
    pub name: String,
    /// Credit weight (> 0, fractional allowed).
    pub credits: f64,
    /// Pedagogical kind.
    pub kind: CourseKind,
    /// Percentages, present only for mixed courses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mixed: Option<CreditSplit>,
}

impl Course {
    /// Credit split derived from the kind.
    pub fn split(&self) -> CreditSplit {
        match self.kind {
            CourseKind::Traditional => CreditSplit::TRADITIONAL,
            CourseKind::Project => CreditSplit::PROJECT,
            CourseKind::Mixed => self.mixed.unwrap_or(CreditSplit::TRADITIONAL),
        }
    }

    /// Credits attributed to traditional teaching.
    pub fn traditional_credits(&self) -> f64 {
        self.credits * self.split().traditional_pct / 100.0
    }

    /// Credits attributed to project-based teaching.
    pub fn project_credits(&self) -> f64 {
        self.credits * self.split().project_pct / 100.0
    }

    /// Rendered block width in pixels (40 px per credit).
    pub fn block_width_px(&self) -> f64 {
        self.credits * 40.0
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} Credits)", self.name, self.credits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed(trad: f64, proj: f64) -> Course {
        Course {
            id: CourseId(3),
            name: "Studio".into(),
            credits: 5.0,
            kind: CourseKind::Mixed,
            mixed: Some(CreditSplit {
                traditional_pct: trad,
                project_pct: proj,
            }),
        }
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("Traditional".parse::<CourseKind>().unwrap(), CourseKind::Traditional);
        assert_eq!(" PROJECT ".parse::<CourseKind>().unwrap(), CourseKind::Project);
        assert_eq!("project-based".parse::<CourseKind>().unwrap(), CourseKind::Project);
        assert_eq!("mixed".parse::<CourseKind>().unwrap(), CourseKind::Mixed);

        let err = "seminar".parse::<CourseKind>().unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::UnknownKind);
    }

    #[test]
    fn test_split_by_kind() {
        let mut c = mixed(60.0, 40.0);
        assert!((c.traditional_credits() - 3.0).abs() < 1e-10);
        assert!((c.project_credits() - 2.0).abs() < 1e-10);

        c.kind = CourseKind::Project;
        assert_eq!(c.split(), CreditSplit::PROJECT);
        assert!((c.project_credits() - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_display_and_width() {
        let c = mixed(50.0, 50.0);
        assert_eq!(c.to_string(), "Studio (5 Credits)");
        assert!((c.block_width_px() - 200.0).abs() < 1e-10);
        assert_eq!(CourseId(7).to_string(), "#7");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(mixed(60.0, 40.0)).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["kind"], "mixed");
        assert_eq!(json["mixed"]["traditionalPct"], 60.0);

        let mut plain = mixed(0.0, 0.0);
        plain.kind = CourseKind::Traditional;
        plain.mixed = None;
        let json = serde_json::to_value(plain).unwrap();
        assert!(json.get("mixed").is_none());
    }
}
