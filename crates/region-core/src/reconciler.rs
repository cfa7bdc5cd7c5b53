//! Region reconciliation
//!
//! Compares the regions found in a member list with the regions the policy asks
//! for. Removal and insertion are computed as two independent passes; neither
//! touches the member list.

use std::borrow::Cow;
use std::collections::HashSet;

use region_meta::{MemberTypeCatalog, NameComparison, RegionPolicy};

use crate::composer::RegionComposer;
use crate::model::{Grouping, Member, existing_regions};
use crate::plan::ReconcilePlan;

/// Receives regions that must be created.
///
/// Where the marker lands in the underlying source is up to the implementor.
pub trait RegionSink {
    fn create_region(&mut self, region: Grouping);
}

impl RegionSink for Vec<Grouping> {
    fn create_region(&mut self, region: Grouping) {
        self.push(region);
    }
}

/// Computes stale and missing regions for a member list.
#[derive(Debug, Clone, Copy)]
pub struct RegionReconciler<'a> {
    composer: RegionComposer<'a>,
}

impl<'a> RegionReconciler<'a> {
    pub fn new(catalog: &'a MemberTypeCatalog) -> Self {
        Self {
            composer: RegionComposer::new(catalog),
        }
    }

    /// Regions the policy asks for.
    pub fn desired_regions(&self, policy: &RegionPolicy) -> Vec<Grouping> {
        self.composer.compose(policy)
    }

    /// Existing regions whose name is not desired, in member order.
    ///
    /// A stale name is returned once, at its first occurrence.
    pub fn regions_to_remove(&self, members: &[Member], policy: &RegionPolicy) -> Vec<Grouping> {
        let desired = self.desired_regions(policy);
        let to_remove = difference(
            existing_regions(members),
            &desired,
            policy.name_comparison,
        );

        tracing::debug!(count = to_remove.len(), "Computed regions to remove");
        to_remove
    }

    /// Desired regions missing from `members`, in desired order.
    pub fn regions_to_insert(&self, members: &[Member], policy: &RegionPolicy) -> Vec<Grouping> {
        let existing = existing_regions(members);
        let to_insert = difference(
            self.desired_regions(policy),
            &existing,
            policy.name_comparison,
        );

        tracing::debug!(count = to_insert.len(), "Computed regions to insert");
        to_insert
    }

    /// Hand every missing region to `sink`, in desired order.
    ///
    /// Returns the number of regions handed over. Nothing is removed.
    pub fn insert_regions<S>(
        &self,
        members: &[Member],
        policy: &RegionPolicy,
        sink: &mut S,
    ) -> usize
    where
        S: RegionSink + ?Sized,
    {
        let to_insert = self.regions_to_insert(members, policy);
        let count = to_insert.len();

        for region in to_insert {
            tracing::debug!(region = %region.name, "Requesting region creation");
            sink.create_region(region);
        }

        count
    }

    /// Compute both passes in one plan.
    pub fn plan(&self, members: &[Member], policy: &RegionPolicy) -> ReconcilePlan {
        let comparison = policy.name_comparison;
        let desired = self.desired_regions(policy);
        let existing = existing_regions(members);

        let stale = difference(existing.clone(), &desired, comparison);
        let kept = difference(existing.clone(), &stale, comparison);
        let to_insert = difference(desired.clone(), &existing, comparison);

        let plan = ReconcilePlan {
            desired,
            kept,
            to_remove: stale,
            to_insert,
        };
        tracing::debug!(
            status = ?plan.status(),
            remove = plan.to_remove.len(),
            insert = plan.to_insert.len(),
            "Reconciled regions"
        );
        plan
    }
}

fn keys(regions: &[Grouping], comparison: NameComparison) -> HashSet<Cow<'_, str>> {
    regions.iter().map(|g| comparison.key(&g.name)).collect()
}

/// Regions in `from` whose name does not occur in `exclude`.
///
/// Each name is kept once, at its first occurrence in `from`.
fn difference(
    from: Vec<Grouping>,
    exclude: &[Grouping],
    comparison: NameComparison,
) -> Vec<Grouping> {
    let excluded = keys(exclude, comparison);
    let mut seen = HashSet::new();
    from.into_iter()
        .filter(|g| {
            let key = comparison.key(&g.name).into_owned();
            !excluded.contains(key.as_str()) && seen.insert(key)
        })
        .collect()
}
