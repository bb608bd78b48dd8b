//! Course draft: the unvalidated input the UI submits.

use serde::{Deserialize, Serialize};

use super::CourseKind;

/// Course definition as entered by the user, before validation.
///
/// Percentages are only consulted when `kind` is [`CourseKind::Mixed`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    /// Display name.
    pub name: String,
    /// Credit weight.
    pub credits: f64,
    /// Pedagogical kind.
    #[serde(default)]
    pub kind: CourseKind,
    /// Traditional share for mixed courses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traditional_pct: Option<f64>,
    /// Project share for mixed courses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_pct: Option<f64>,
}

impl CourseDraft {
    /// Creates a draft with the given kind.
    pub fn new(name: impl Into<String>, credits: f64, kind: CourseKind) -> Self {
        Self {
            name: name.into(),
            credits,
            kind,
            traditional_pct: None,
            project_pct: None,
        }
    }

    /// Traditional course draft.
    pub fn traditional(name: impl Into<String>, credits: f64) -> Self {
        Self::new(name, credits, CourseKind::Traditional)
    }

    /// Project-based course draft.
    pub fn project(name: impl Into<String>, credits: f64) -> Self {
        Self::new(name, credits, CourseKind::Project)
    }

    /// Mixed course draft with both percentages.
    pub fn mixed(name: impl Into<String>, credits: f64, traditional_pct: f64, project_pct: f64) -> Self {
        Self::new(name, credits, CourseKind::Mixed).with_percentages(traditional_pct, project_pct)
    }

    /// Sets both percentages.
    pub fn with_percentages(mut self, traditional_pct: f64, project_pct: f64) -> Self {
        self.traditional_pct = Some(traditional_pct);
        self.project_pct = Some(project_pct);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_builders() {
        let d = CourseDraft::mixed("X", 4.0, 60.0, 40.0);
        assert_eq!(d.kind, CourseKind::Mixed);
        assert_eq!(d.traditional_pct, Some(60.0));
        assert_eq!(d.project_pct, Some(40.0));

        let d = CourseDraft::project("Capstone", 10.0);
        assert_eq!(d.kind, CourseKind::Project);
        assert!(d.traditional_pct.is_none());
    }

    #[test]
    fn test_draft_deserialize_defaults_kind() {
        let d: CourseDraft = serde_json::from_str(r#"{"name":"Algebra","credits":6}"#).unwrap();
        assert_eq!(d.kind, CourseKind::Traditional);
        assert!((d.credits - 6.0).abs() < 1e-10);

        let d: CourseDraft = serde_json::from_str(
            r#"{"name":"X","credits":4,"kind":"mixed","traditionalPct":60,"projectPct":40}"#,
        )
        .unwrap();
        assert_eq!(d, CourseDraft::mixed("X", 4.0, 60.0, 40.0));
    }
}
