//! Semester credit planning core.
//!
//! Holds the state behind an interactive planning board: courses are defined
//! in a catalog and dropped into semester slots, each slot capped at a
//! configurable credit total. Rendering, drag capture, and image/PDF
//! composition belong to the UI; this crate is the bookkeeping underneath.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `CourseDraft`, `Semester`,
//!   `PlannerSnapshot`
//! - **`validation`**: Course draft checks (credits, mixed percentages)
//! - **`catalog`**: Course definitions and identity
//! - **`allocator`**: Semester buckets and the credit-cap rule
//! - **`planner`**: Catalog and allocator kept consistent behind one API
//! - **`import`**: Bulk import from spreadsheet rows, JSON, or workbooks
//! - **`export`**: One-shot export requests for rendering collaborators
//! - **`summary`**: Board-level credit metrics
//!
//! # Example
//!
//! ```
//! use credit_planner::{CourseDraft, Planner};
//!
//! let mut planner = Planner::default();
//! let course = planner.add_course(CourseDraft::mixed("Studio", 6.0, 60.0, 40.0)).unwrap();
//! planner.place(course, 1).unwrap();
//! planner.place(course, 2).unwrap();
//!
//! assert_eq!(planner.allocator().semester_of(course), Some(2));
//! assert_eq!(planner.total_credits(1), 0.0);
//! assert_eq!(planner.total_credits(2), 6.0);
//! ```

pub mod allocator;
pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod planner;
pub mod summary;
pub mod validation;

pub use allocator::Allocator;
pub use catalog::Catalog;
pub use config::PlannerConfig;
pub use error::{PlannerError, PlannerResult};
pub use export::{
    ExportArtifact, ExportError, ExportFormat, ExportRequest, ExportTarget, Exporter, JsonExporter,
};
pub use import::{ImportError, ImportReport, ImportRow, SheetRecord, SkippedRow};
pub use models::{
    Course, CourseDraft, CourseId, CourseKind, CreditSplit, PlannerSnapshot, Semester, SemesterView,
};
pub use planner::Planner;
pub use summary::PlanSummary;
pub use validation::{ValidationError, ValidationErrorKind};
