//! Workbook reading.
//!
//! Reads the first sheet of an `.xlsx`, `.xls`, `.xlsb`, or `.ods` file.
//! The first non-blank row is the header; each following row becomes a JSON
//! object keyed by the canonical column names so it decodes as an
//! [`ImportRow`](super::ImportRow).

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Reader, Sheets};
use serde_json::{Map, Number, Value};
use std::collections::HashSet;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use tracing::warn;

use super::ImportError;

/// One data row of a sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRecord {
    /// Position among the rows below the header (0-based, blank rows counted).
    pub row: usize,
    /// Cell values keyed by canonical column name.
    pub record: Value,
}

/// Reads the first sheet of a workbook on disk.
pub fn read_workbook<P: AsRef<Path>>(path: P) -> Result<Vec<SheetRecord>, ImportError> {
    first_sheet_records(open_workbook_auto(path)?)
}

/// Reads the first sheet of an in-memory workbook (e.g. an uploaded file).
pub fn read_workbook_bytes(bytes: Vec<u8>) -> Result<Vec<SheetRecord>, ImportError> {
    first_sheet_records(open_workbook_auto_from_rs(Cursor::new(bytes))?)
}

fn first_sheet_records<RS: Read + Seek>(
    mut workbook: Sheets<RS>,
) -> Result<Vec<SheetRecord>, ImportError> {
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(ImportError::NoSheets)?;
    let range = workbook.worksheet_range(&sheet)?;
    Ok(rows_to_records(range.rows()))
}

/// Turns raw sheet rows into header-keyed records.
///
/// Blank rows produce no record but still count toward the row number, so
/// `SheetRecord::row` matches the row's place in the sheet.
pub(crate) fn rows_to_records<'a, I>(rows: I) -> Vec<SheetRecord>
where
    I: IntoIterator<Item = &'a [Data]>,
{
    let mut rows = rows.into_iter().skip_while(|r| is_blank(r));
    let header = match rows.next() {
        Some(r) => first_wins(r.iter().map(|c| canonical_header(&cell_text(c))).collect()),
        None => return Vec::new(),
    };

    rows.enumerate()
        .filter(|(_, r)| !is_blank(r))
        .map(|(row, r)| {
            let record: Map<String, Value> = header
                .iter()
                .zip(r.iter())
                .filter(|(h, _)| !h.is_empty())
                .map(|(h, c)| (h.clone(), cell_value(c)))
                .collect();
            SheetRecord {
                row,
                record: Value::Object(record),
            }
        })
        .collect()
}

/// Blanks out repeated column names so the leftmost column keeps the key.
fn first_wins(header: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    header
        .into_iter()
        .enumerate()
        .map(|(i, h)| {
            if h.is_empty() || seen.insert(h.clone()) {
                h
            } else {
                warn!(column = %h, position = i, "duplicate column ignored");
                String::new()
            }
        })
        .collect()
}

/// Maps a header cell to the column name rows are keyed by.
///
/// Matching ignores case, whitespace, underscores, and dashes. Unknown
/// headers are kept as written and ignored during decoding.
pub(crate) fn canonical_header(raw: &str) -> String {
    let key: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .collect::<String>()
        .to_lowercase();
    match key.as_str() {
        "name" | "coursename" | "course" => "Name".into(),
        "credits" | "credit" => "Credits".into(),
        "type" | "kind" | "coursetype" => "Type".into(),
        "traditionalpercentage" | "traditionalpct" | "traditional%" | "traditional" => {
            "TraditionalPercentage".into()
        }
        "projectpercentage" | "projectpct" | "project%" | "project" => "ProjectPercentage".into(),
        _ => raw.trim().to_string(),
    }
}

fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Empty | Data::Error(_) => Value::Null,
        Data::Int(i) => Value::from(*i),
        Data::Float(f) => Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null),
        Data::Bool(b) => Value::Bool(*b),
        Data::String(s) => Value::String(s.clone()),
        other => Value::String(other.to_string()),
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        other => other.to_string(),
    }
}

fn is_blank(row: &[Data]) -> bool {
    row.iter().all(|c| match c {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    })
}
