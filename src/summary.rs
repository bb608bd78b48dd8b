//! Plan summary metrics.
//!
//! Computes board-level indicators from the current planner state.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total credits | Sum over every course in the catalog |
//! | Assigned credits | Sum over placed courses |
//! | Semester load | Credits held per semester |
//! | Utilization | load / cap, per semester |
//! | Avg utilization | Mean utilization over all semesters |
//! | Teaching breakdown | Traditional vs project credits, mixed courses split by percentage |

use serde::{Deserialize, Serialize};

use crate::planner::Planner;

/// Board-level indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// Credits of every course in the catalog.
    pub total_credits: f64,
    /// Credits placed on the board.
    pub assigned_credits: f64,
    /// Credits still in the unassigned pool.
    pub unassigned_credits: f64,
    /// Number of placed courses.
    pub assigned_count: usize,
    /// Number of unplaced courses.
    pub unassigned_count: usize,
    /// Credits per semester, in board order.
    pub semester_load: Vec<f64>,
    /// Load / cap per semester.
    pub utilization: Vec<f64>,
    /// Mean of `utilization` (0.0 for an empty board).
    pub avg_utilization: f64,
    /// Semesters above the cap.
    pub over_capacity_count: usize,
    /// Credits taught traditionally across the catalog.
    pub traditional_credits: f64,
    /// Credits taught through projects across the catalog.
    pub project_credits: f64,
}

impl PlanSummary {
    /// Computes the summary for a planner.
    pub fn calculate(planner: &Planner) -> Self {
        let catalog = planner.catalog();
        let allocator = planner.allocator();
        let cap = allocator.credit_cap();

        let semester_load: Vec<f64> = (0..allocator.semester_count())
            .map(|i| planner.total_credits(i))
            .collect();
        let utilization: Vec<f64> = semester_load.iter().map(|load| load / cap).collect();
        let avg_utilization = if utilization.is_empty() {
            0.0
        } else {
            utilization.iter().sum::<f64>() / utilization.len() as f64
        };

        let total_credits = catalog.total_credits();
        let assigned_credits: f64 = semester_load.iter().sum();
        let unassigned = planner.unassigned();

        Self {
            total_credits,
            assigned_credits,
            unassigned_credits: unassigned.iter().map(|c| c.credits).sum(),
            assigned_count: catalog.len() - unassigned.len(),
            unassigned_count: unassigned.len(),
            over_capacity_count: allocator.over_capacity_semesters(catalog).len(),
            semester_load,
            utilization,
            avg_utilization,
            traditional_credits: catalog.courses().iter().map(|c| c.traditional_credits()).sum(),
            project_credits: catalog.courses().iter().map(|c| c.project_credits()).sum(),
        }
    }

    /// Share of credits taught traditionally (0.0..1.0), or `None` for an
    /// empty catalog.
    pub fn traditional_share(&self) -> Option<f64> {
        (self.total_credits > 0.0).then(|| self.traditional_credits / self.total_credits)
    }
}

impl Planner {
    /// Board-level indicators for the current state.
    pub fn summary(&self) -> PlanSummary {
        PlanSummary::calculate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourseDraft;

    #[test]
    fn test_summary_basic() {
        let mut p = Planner::default();
        let a = p.add_course(CourseDraft::traditional("A", 15.0)).unwrap();
        let b = p.add_course(CourseDraft::project("B", 6.0)).unwrap();
        p.add_course(CourseDraft::mixed("C", 10.0, 60.0, 40.0)).unwrap();
        p.place(a, 0).unwrap();
        p.place(b, 1).unwrap();

        let s = p.summary();
        assert!((s.total_credits - 31.0).abs() < 1e-10);
        assert!((s.assigned_credits - 21.0).abs() < 1e-10);
        assert!((s.unassigned_credits - 10.0).abs() < 1e-10);
        assert_eq!(s.assigned_count, 2);
        assert_eq!(s.unassigned_count, 1);
        assert!((s.semester_load[0] - 15.0).abs() < 1e-10);
        assert!((s.utilization[0] - 0.5).abs() < 1e-10);
        assert!((s.utilization[1] - 0.2).abs() < 1e-10);
        // (0.5 + 0.2) / 6
        assert!((s.avg_utilization - 0.7 / 6.0).abs() < 1e-10);
        assert_eq!(s.over_capacity_count, 0);
    }

    #[test]
    fn test_teaching_breakdown() {
        let mut p = Planner::default();
        p.add_course(CourseDraft::traditional("A", 15.0)).unwrap();
        p.add_course(CourseDraft::project("B", 5.0)).unwrap();
        p.add_course(CourseDraft::mixed("C", 10.0, 60.0, 40.0)).unwrap();

        let s = p.summary();
        assert!((s.traditional_credits - 21.0).abs() < 1e-10);
        assert!((s.project_credits - 9.0).abs() < 1e-10);
        assert!((s.traditional_share().unwrap() - 0.7).abs() < 1e-10);
    }

    #[test]
    fn test_summary_empty() {
        let s = Planner::default().summary();
        assert!((s.total_credits - 0.0).abs() < 1e-10);
        assert!((s.avg_utilization - 0.0).abs() < 1e-10);
        assert!(s.traditional_share().is_none());
        assert_eq!(s.semester_load.len(), 6);
    }

    #[test]
    fn test_summary_counts_over_capacity() {
        let mut p = Planner::default();
        let a = p.add_course(CourseDraft::traditional("A", 28.0)).unwrap();
        p.place(a, 2).unwrap();
        p.set_credit_cap(20.0).unwrap();
        assert_eq!(p.summary().over_capacity_count, 1);
    }
}
