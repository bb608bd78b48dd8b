//! Bulk course import.
//!
//! Rows come from a spreadsheet: already-decoded [`ImportRow`]s, a JSON
//! array of row objects, or a workbook file. Each row is handled on its
//! own. A row that fails to decode or validate is skipped and recorded in
//! the [`ImportReport`]; it never aborts the rest of the batch.
//!
//! # Columns
//!
//! | Column | Meaning |
//! |--------|---------|
//! | `Name` | Course name |
//! | `Credits` | Credit weight |
//! | `Type` | `traditional` (default), `project`, or `mixed` |
//! | `TraditionalPercentage` | Mixed courses only |
//! | `ProjectPercentage` | Mixed courses only |

mod row;
mod sheet;

pub use row::ImportRow;
pub use sheet::{read_workbook, read_workbook_bytes, SheetRecord};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::CourseId;
use crate::planner::Planner;

/// Failures that prevent reading the batch at all.
///
/// Row-level problems are never reported here; see [`ImportReport::skipped`].
#[derive(Debug, Error)]
pub enum ImportError {
    /// The workbook could not be opened or read.
    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),
    /// The JSON document is malformed.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The JSON document is not an array of rows.
    #[error("expected a JSON array of rows")]
    NotAnArray,
    /// The workbook has no sheets.
    #[error("workbook contains no sheets")]
    NoSheets,
}

/// A row left out of the import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedRow {
    /// Position of the row in the batch (0-based, header excluded). Blank
    /// sheet rows are never reported but still count.
    pub row: usize,
    /// Why the row was skipped.
    pub reason: String,
}

/// Outcome of a bulk import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    /// Ids of the courses created, in row order.
    pub created: Vec<CourseId>,
    /// Rows that were skipped.
    pub skipped: Vec<SkippedRow>,
}

impl ImportReport {
    /// Number of courses created.
    pub fn imported_count(&self) -> usize {
        self.created.len()
    }

    /// Number of rows skipped.
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Whether every row was imported.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    fn skip(&mut self, row: usize, reason: impl Into<String>) {
        let reason = reason.into();
        warn!(row, reason = %reason, "skipping import row");
        self.skipped.push(SkippedRow { row, reason });
    }
}

impl Planner {
    /// Imports decoded rows, appending every valid one as an unassigned course.
    pub fn import_rows<I>(&mut self, rows: I) -> ImportReport
    where
        I: IntoIterator<Item = ImportRow>,
    {
        let mut report = ImportReport::default();
        for (i, row) in rows.into_iter().enumerate() {
            self.import_one(&mut report, i, &row);
        }
        log_report(&report);
        report
    }

    /// Imports a JSON array of row objects.
    ///
    /// Each element is decoded independently, so one malformed element only
    /// skips that row.
    pub fn import_json(&mut self, json: &str) -> Result<ImportReport, ImportError> {
        match serde_json::from_str::<Value>(json)? {
            Value::Array(records) => Ok(self.import_records(records.into_iter().enumerate())),
            _ => Err(ImportError::NotAnArray),
        }
    }

    /// Imports the first sheet of a workbook file.
    pub fn import_workbook<P: AsRef<Path>>(&mut self, path: P) -> Result<ImportReport, ImportError> {
        let records = read_workbook(path)?;
        Ok(self.import_records(records.into_iter().map(|r| (r.row, r.record))))
    }

    /// Imports the first sheet of an in-memory workbook.
    pub fn import_workbook_bytes(&mut self, bytes: Vec<u8>) -> Result<ImportReport, ImportError> {
        let records = read_workbook_bytes(bytes)?;
        Ok(self.import_records(records.into_iter().map(|r| (r.row, r.record))))
    }

    fn import_records<I>(&mut self, records: I) -> ImportReport
    where
        I: IntoIterator<Item = (usize, Value)>,
    {
        let mut report = ImportReport::default();
        for (i, record) in records {
            match serde_json::from_value::<ImportRow>(record) {
                Ok(row) => self.import_one(&mut report, i, &row),
                Err(e) => report.skip(i, e.to_string()),
            }
        }
        log_report(&report);
        report
    }

    fn import_one(&mut self, report: &mut ImportReport, i: usize, row: &ImportRow) {
        let draft = match row.to_draft() {
            Ok(d) => d,
            Err(e) => return report.skip(i, e.message),
        };
        match self.add_course(draft) {
            Ok(id) => report.created.push(id),
            Err(e) => report.skip(i, e.to_string()),
        }
    }
}

fn log_report(report: &ImportReport) {
    info!(
        imported = report.imported_count(),
        skipped = report.skipped_count(),
        "course import finished"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourseKind;

    #[test]
    fn test_import_rows_skips_bad_rows() {
        let mut p = Planner::default();
        let report = p.import_rows(vec![
            ImportRow::new("Algebra", 5.0),
            ImportRow::new("Bad Mix", 4.0)
                .with_kind("mixed")
                .with_percentages(60.0, 50.0),
            ImportRow::new("Studio", 6.0)
                .with_kind("Mixed")
                .with_percentages(30.0, 70.0),
            ImportRow::new("Zero", 0.0),
        ]);

        assert_eq!(report.imported_count(), 2);
        assert_eq!(report.skipped.iter().map(|s| s.row).collect::<Vec<_>>(), vec![1, 3]);
        assert!(!report.is_clean());

        let names: Vec<&str> = p.catalog().courses().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Algebra", "Studio"]);
        assert_eq!(p.catalog().courses()[0].kind, CourseKind::Traditional);
        assert_eq!(p.unassigned().len(), 2);
    }

    #[test]
    fn test_import_json() {
        let mut p = Planner::default();
        let report = p
            .import_json(
                r#"[
                    {"Name": "Algebra", "Credits": 5},
                    {"Name": "Capstone", "Credits": "10", "Type": "project"},
                    {"Name": "Broken", "Credits": "ten"},
                    "not an object",
                    {"Credits": 3},
                    {"Name": "Lab", "Credits": 4, "Type": "mixed",
                     "TraditionalPercentage": 60, "ProjectPercentage": 40}
                ]"#,
            )
            .unwrap();

        assert_eq!(report.imported_count(), 3);
        assert_eq!(report.skipped.iter().map(|s| s.row).collect::<Vec<_>>(), vec![2, 3, 4]);
        assert!(report.skipped[2].reason.contains("Name"));
        assert_eq!(p.catalog().get(report.created[1]).unwrap().kind, CourseKind::Project);
    }

    #[test]
    fn test_import_json_document_errors() {
        let mut p = Planner::default();
        assert!(matches!(p.import_json("{ nope"), Err(ImportError::Json(_))));
        assert!(matches!(
            p.import_json(r#"{"Name": "A"}"#),
            Err(ImportError::NotAnArray)
        ));
        assert!(p.catalog().is_empty());
    }

    #[test]
    fn test_import_appends_after_existing_courses() {
        let mut p = Planner::default();
        let first = p
            .add_course(crate::models::CourseDraft::traditional("Existing", 3.0))
            .unwrap();
        p.place(first, 0).unwrap();

        let report = p.import_rows(vec![ImportRow::new("New", 2.0)]);
        assert_eq!(report.created, vec![CourseId(1)]);
        assert_eq!(p.allocator().semester_of(first), Some(0));
        assert_eq!(p.unassigned().len(), 1);
    }

    #[test]
    fn test_import_workbook_bytes() {
        let bytes = include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/courses.xlsx"));
        let mut p = Planner::default();
        let report = p.import_workbook_bytes(bytes.to_vec()).unwrap();

        assert_eq!(report.created, vec![CourseId(0), CourseId(1)]);
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.skipped[0].row, 2);
        assert!(report.skipped[0].reason.contains("got 110"));

        let studio = p.catalog().get(CourseId(0)).unwrap();
        assert_eq!(studio.name, "Studio");
        assert_eq!(studio.kind, CourseKind::Mixed);
        assert!((studio.split().traditional_pct - 30.0).abs() < 1e-10);
        assert!((studio.split().project_pct - 70.0).abs() < 1e-10);
        assert_eq!(p.catalog().get(CourseId(1)).unwrap().name, "Algebra");
        assert_eq!(p.unassigned().len(), 2);
    }

    #[test]
    fn test_import_workbook_missing_file() {
        let mut p = Planner::default();
        assert!(matches!(
            p.import_workbook("missing.xlsx"),
            Err(ImportError::Workbook(_))
        ));
    }
}
