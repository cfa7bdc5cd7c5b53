//! Reconciliation plan types
//!
//! A [`ReconcilePlan`] reports both passes of a reconciliation at once: which
//! existing regions stay, which are stale, and which desired regions are missing.

use serde::Serialize;

use crate::model::Grouping;

/// Overall state of the regions in a member list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanStatus {
    /// Existing regions match the desired regions
    InSync,
    /// Some desired regions are missing
    Missing,
    /// Some existing regions are no longer desired
    Stale,
    /// Regions are both missing and stale
    Drifted,
}

/// Result of reconciling existing regions against desired regions
#[derive(Debug, Clone, Serialize)]
pub struct ReconcilePlan {
    /// Desired regions, in composition order
    pub desired: Vec<Grouping>,
    /// Existing regions that are also desired, in member order
    pub kept: Vec<Grouping>,
    /// Existing regions to delete, in member order
    pub to_remove: Vec<Grouping>,
    /// Desired regions to create, in composition order
    pub to_insert: Vec<Grouping>,
}

impl ReconcilePlan {
    pub fn status(&self) -> PlanStatus {
        match (self.to_remove.is_empty(), self.to_insert.is_empty()) {
            (true, true) => PlanStatus::InSync,
            (true, false) => PlanStatus::Missing,
            (false, true) => PlanStatus::Stale,
            (false, false) => PlanStatus::Drifted,
        }
    }

    pub fn is_in_sync(&self) -> bool {
        self.status() == PlanStatus::InSync
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(to_remove: &[&str], to_insert: &[&str]) -> ReconcilePlan {
        ReconcilePlan {
            desired: Vec::new(),
            kept: Vec::new(),
            to_remove: to_remove.iter().map(|n| Grouping::new(*n)).collect(),
            to_insert: to_insert.iter().map(|n| Grouping::new(*n)).collect(),
        }
    }

    #[test]
    fn test_status() {
        assert_eq!(plan(&[], &[]).status(), PlanStatus::InSync);
        assert_eq!(plan(&[], &["Methods"]).status(), PlanStatus::Missing);
        assert_eq!(plan(&["Old"], &[]).status(), PlanStatus::Stale);
        assert_eq!(plan(&["Old"], &["Methods"]).status(), PlanStatus::Drifted);
        assert!(plan(&[], &[]).is_in_sync());
    }

    #[test]
    fn test_serializes_status_kebab_case() {
        let json = serde_json::to_string(&PlanStatus::InSync).unwrap();
        assert_eq!(json, "\"in-sync\"");
    }
}
