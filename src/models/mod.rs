//! Planning domain models.
//!
//! Plain data types shared by the catalog, the allocator, and the
//! rendering/export boundary.
//!
//! | Type | Role |
//! |------|------|
//! | `Course` | Validated course owned by the catalog |
//! | `CourseDraft` | Unvalidated course input |
//! | `Semester` | Ordered bucket of course ids |
//! | `PlannerSnapshot` | Owned read-only copy of the board |

mod course;
mod draft;
mod semester;
mod snapshot;

pub use course::{Course, CourseId, CourseKind, CreditSplit};
pub use draft::CourseDraft;
pub use semester::Semester;
pub use snapshot::{PlannerSnapshot, SemesterView};
