//! Spreadsheet row records.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{CourseDraft, CourseKind};
use crate::validation::{ValidationError, ValidationErrorKind};

/// One spreadsheet row, keyed by the sheet's column headers.
///
/// Numeric columns accept numbers or numeric text; blank cells read as
/// missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportRow {
    /// Course name.
    #[serde(rename = "Name", default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    /// Credit weight.
    #[serde(rename = "Credits", default, deserialize_with = "lenient_number")]
    pub credits: Option<f64>,
    /// Course type label; missing means traditional.
    #[serde(rename = "Type", default, deserialize_with = "lenient_text")]
    pub kind: Option<String>,
    /// Traditional share of a mixed course, in percent.
    #[serde(
        rename = "TraditionalPercentage",
        default,
        deserialize_with = "lenient_number"
    )]
    pub traditional_pct: Option<f64>,
    /// Project share of a mixed course, in percent.
    #[serde(rename = "ProjectPercentage", default, deserialize_with = "lenient_number")]
    pub project_pct: Option<f64>,
}

impl ImportRow {
    /// Creates a row with a name and credits; type defaults to traditional.
    pub fn new(name: impl Into<String>, credits: f64) -> Self {
        Self {
            name: Some(name.into()),
            credits: Some(credits),
            ..Self::default()
        }
    }

    /// Sets the type label.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Sets both percentages.
    pub fn with_percentages(mut self, traditional_pct: f64, project_pct: f64) -> Self {
        self.traditional_pct = Some(traditional_pct);
        self.project_pct = Some(project_pct);
        self
    }

    /// Maps the row 1:1 to a draft. A missing type means traditional.
    ///
    /// Only structural problems are reported here; credit and percentage
    /// rules are checked when the draft is added to the catalog.
    pub fn to_draft(&self) -> Result<CourseDraft, ValidationError> {
        let name = self.name.clone().ok_or_else(|| missing("Name"))?;
        let credits = self.credits.ok_or_else(|| missing("Credits"))?;
        let kind = match self.kind.as_deref() {
            None => CourseKind::Traditional,
            Some(label) => label.parse()?,
        };

        Ok(CourseDraft {
            name,
            credits,
            kind,
            traditional_pct: self.traditional_pct,
            project_pct: self.project_pct,
        })
    }
}

fn missing(column: &str) -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::MissingField,
        format!("Missing '{column}' value"),
    )
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Cell {
    Number(f64),
    Text(String),
    Flag(bool),
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    match Option::<Cell>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Cell::Number(n)) => Ok(Some(n)),
        Some(Cell::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.trim_end_matches('%')
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("expected a number, got '{s}'")))
        }
        Some(Cell::Flag(b)) => Err(D::Error::custom(format!("expected a number, got {b}"))),
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Cell>::deserialize(deserializer)? {
        None => None,
        Some(Cell::Number(n)) => Some(n.to_string()),
        Some(Cell::Text(s)) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Some(Cell::Flag(b)) => Some(b.to_string()),
    })
}
