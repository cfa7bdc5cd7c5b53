//! Desired region composition
//!
//! Turns the member-type catalog and a policy into the ordered list of regions
//! that should exist. The result depends only on catalog and policy, never on
//! the members being reorganized.

use std::collections::HashSet;

use region_meta::{MemberTypeCatalog, RegionPolicy};

use crate::model::Grouping;

/// Builds the desired region sequence from a catalog.
#[derive(Debug, Clone, Copy)]
pub struct RegionComposer<'a> {
    catalog: &'a MemberTypeCatalog,
}

impl<'a> RegionComposer<'a> {
    pub fn new(catalog: &'a MemberTypeCatalog) -> Self {
        Self { catalog }
    }

    /// Compose the desired regions for `policy`.
    ///
    /// Empty unless `insert_even_if_empty` is set. Otherwise one region per tier
    /// in ascending order, or one per access modifier and tier when
    /// `include_access_level` is set. A name that was already emitted (which
    /// only happens when configured names collide) is skipped.
    pub fn compose(&self, policy: &RegionPolicy) -> Vec<Grouping> {
        if !policy.insert_even_if_empty {
            tracing::debug!("Empty regions disabled; no regions desired");
            return Vec::new();
        }

        let mut regions = Vec::new();
        let mut seen = HashSet::new();

        for tier in self.catalog.tiers() {
            let label = tier.label();
            let names: Vec<String> = if policy.include_access_level {
                policy
                    .access_modifiers()
                    .iter()
                    .map(|access| format!("{} {}", access.label(), label))
                    .collect()
            } else {
                vec![label.to_string()]
            };

            for name in names {
                if seen.insert(policy.name_comparison.key(&name).into_owned()) {
                    regions.push(Grouping::new(name));
                } else {
                    tracing::debug!(
                        region = %name,
                        order = tier.order(),
                        "Skipping duplicate region name"
                    );
                }
            }
        }

        tracing::debug!(count = regions.len(), "Composed desired regions");
        regions
    }
}
