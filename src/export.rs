//! Export requests.
//!
//! Rasterizing a semester to an image or composing the board into a PDF is
//! done by an external collaborator implementing [`Exporter`]. The planner
//! only builds a one-shot [`ExportRequest`] holding an owned snapshot taken
//! at request time; later edits never reach an in-flight export and the
//! result never flows back into planner state.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::PlannerSnapshot;
use crate::planner::Planner;

/// Region of the board to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExportTarget {
    /// A single semester (0-based index).
    Semester(usize),
    /// The whole board.
    Board,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// PNG raster image.
    Png,
    /// PDF document.
    Pdf,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// MIME type of the produced file.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Pdf => "application/pdf",
        }
    }
}

/// Everything a collaborator needs to produce one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    /// Region to render.
    pub target: ExportTarget,
    /// Output format.
    pub format: ExportFormat,
    /// Suggested download name.
    pub file_name: String,
    /// Board state at request time.
    pub snapshot: PlannerSnapshot,
}

/// A produced file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportArtifact {
    /// Download name, including the extension.
    pub file_name: String,
    /// MIME type of `bytes`.
    pub mime_type: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

/// Export failures. A failed export produces no file and leaves the
/// planner untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    /// The requested semester does not exist.
    #[error("semester index {index} out of range (board has {count} semesters)")]
    UnknownSemester { index: usize, count: usize },
    /// The collaborator failed.
    #[error("export failed: {0}")]
    Collaborator(String),
}

/// External rendering service.
pub trait Exporter {
    /// Produces the file for a request.
    fn export(&self, request: &ExportRequest) -> Result<ExportArtifact, ExportError>;
}

impl ExportRequest {
    /// Default download name for a target and format.
    pub fn default_file_name(target: ExportTarget, format: ExportFormat) -> String {
        match target {
            ExportTarget::Semester(i) => format!("semester-{}.{}", i + 1, format.extension()),
            ExportTarget::Board => format!("course-plan.{}", format.extension()),
        }
    }
}

/// Writes the requested region of the snapshot as pretty JSON.
///
/// Useful for debugging a board and for checking what a real
/// collaborator would receive. Ignores the requested format.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn export(&self, request: &ExportRequest) -> Result<ExportArtifact, ExportError> {
        let bytes = match request.target {
            ExportTarget::Board => serde_json::to_vec_pretty(&request.snapshot),
            ExportTarget::Semester(i) => {
                let view = request.snapshot.semester(i).ok_or(ExportError::UnknownSemester {
                    index: i,
                    count: request.snapshot.semesters.len(),
                })?;
                serde_json::to_vec_pretty(view)
            }
        }
        .map_err(|e| ExportError::Collaborator(e.to_string()))?;

        let stem = request
            .file_name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&request.file_name);
        Ok(ExportArtifact {
            file_name: format!("{stem}.json"),
            mime_type: "application/json".into(),
            bytes,
        })
    }
}

impl Planner {
    /// Builds an export request from the current state.
    pub fn export_request(
        &self,
        target: ExportTarget,
        format: ExportFormat,
    ) -> Result<ExportRequest, ExportError> {
        if let ExportTarget::Semester(index) = target {
            let count = self.allocator().semester_count();
            if index >= count {
                return Err(ExportError::UnknownSemester { index, count });
            }
        }
        Ok(ExportRequest {
            target,
            format,
            file_name: ExportRequest::default_file_name(target, format),
            snapshot: self.snapshot(),
        })
    }

    /// Builds a request and hands it to the collaborator.
    pub fn export(
        &self,
        target: ExportTarget,
        format: ExportFormat,
        exporter: &dyn Exporter,
    ) -> Result<ExportArtifact, ExportError> {
        let request = self.export_request(target, format)?;
        match exporter.export(&request) {
            Ok(artifact) => {
                debug!(file = %artifact.file_name, size = artifact.bytes.len(), "export finished");
                Ok(artifact)
            }
            Err(e) => {
                warn!(file = %request.file_name, error = %e, "export failed");
                Err(e)
            }
        }
    }
}
