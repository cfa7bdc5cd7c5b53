//! Property tests for region composition and reconciliation

use std::collections::HashSet;

use proptest::prelude::*;
use region_core::{
    Grouping, Member, MemberKind, MemberTypeCatalog, MemberTypeSetting, NameComparison,
    RegionComposer, RegionPolicy, RegionReconciler,
};

const CATALOG_KINDS: [MemberKind; 6] = [
    MemberKind::Field,
    MemberKind::Constructor,
    MemberKind::Property,
    MemberKind::Method,
    MemberKind::Event,
    MemberKind::Class,
];

const LABELS: [&str; 5] = ["Fields", "Methods", "methods", "Helpers", "Properties"];

const REGION_NAMES: [&str; 9] = [
    "Fields",
    "fields",
    "Methods",
    "Public Fields",
    "Private Methods",
    "Obsolete Tier",
    "Helpers",
    "Properties",
    "Public Properties",
];

fn catalog_strategy() -> impl Strategy<Value = MemberTypeCatalog> {
    prop::collection::vec(
        (0..CATALOG_KINDS.len(), 0..LABELS.len(), 0u32..4, prop::option::of(0..LABELS.len())),
        0..8,
    )
    .prop_map(|entries| {
        MemberTypeCatalog::new(
            entries
                .into_iter()
                .map(|(kind, label, order, custom)| {
                    let setting =
                        MemberTypeSetting::new(CATALOG_KINDS[kind], LABELS[label], order);
                    match custom {
                        Some(custom) => setting.with_custom_name(LABELS[custom]),
                        None => setting,
                    }
                })
                .collect(),
        )
    })
}

fn policy_strategy() -> impl Strategy<Value = RegionPolicy> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(insert, access, ignore_case)| {
        let comparison = if ignore_case {
            NameComparison::IgnoreCase
        } else {
            NameComparison::Ordinal
        };
        RegionPolicy::new(insert, access).with_name_comparison(comparison)
    })
}

fn members_strategy() -> impl Strategy<Value = Vec<Member>> {
    prop::collection::vec(
        prop_oneof![
            (0..REGION_NAMES.len()).prop_map(|i| Member::region(REGION_NAMES[i])),
            (0..CATALOG_KINDS.len()).prop_map(|i| Member::new(CATALOG_KINDS[i], "member")),
        ],
        0..12,
    )
}

fn keys(regions: &[Grouping], comparison: NameComparison) -> HashSet<String> {
    regions
        .iter()
        .map(|g| comparison.key(&g.name).into_owned())
        .collect()
}

fn region_keys(members: &[Member], comparison: NameComparison) -> HashSet<String> {
    members
        .iter()
        .filter(|m| m.kind == MemberKind::Region)
        .map(|m| comparison.key(&m.name).into_owned())
        .collect()
}

proptest! {
    #[test]
    fn test_disabled_policy_composes_nothing(
        catalog in catalog_strategy(),
        include_access_level in any::<bool>(),
    ) {
        let policy = RegionPolicy::new(false, include_access_level);
        prop_assert!(RegionComposer::new(&catalog).compose(&policy).is_empty());
    }

    #[test]
    fn test_desired_has_no_duplicates(
        catalog in catalog_strategy(),
        policy in policy_strategy(),
    ) {
        let desired = RegionComposer::new(&catalog).compose(&policy);
        let unique = keys(&desired, policy.name_comparison);
        prop_assert_eq!(unique.len(), desired.len());
    }

    #[test]
    fn test_removed_regions_are_never_desired(
        catalog in catalog_strategy(),
        policy in policy_strategy(),
        members in members_strategy(),
    ) {
        let reconciler = RegionReconciler::new(&catalog);
        let desired = keys(&reconciler.desired_regions(&policy), policy.name_comparison);
        let removed = keys(
            &reconciler.regions_to_remove(&members, &policy),
            policy.name_comparison,
        );

        prop_assert!(removed.is_disjoint(&desired));
    }

    #[test]
    fn test_remove_and_insert_are_complementary(
        catalog in catalog_strategy(),
        policy in policy_strategy(),
        members in members_strategy(),
    ) {
        let cmp = policy.name_comparison;
        let reconciler = RegionReconciler::new(&catalog);

        let existing = region_keys(&members, cmp);
        let desired = keys(&reconciler.desired_regions(&policy), cmp);
        let to_remove = keys(&reconciler.regions_to_remove(&members, &policy), cmp);
        let to_insert = keys(&reconciler.regions_to_insert(&members, &policy), cmp);
        let common: HashSet<String> = existing.intersection(&desired).cloned().collect();

        prop_assert_eq!(&existing, &common.union(&to_remove).cloned().collect::<HashSet<_>>());
        prop_assert_eq!(&desired, &common.union(&to_insert).cloned().collect::<HashSet<_>>());
        prop_assert!(to_remove.is_disjoint(&to_insert));
    }

    #[test]
    fn test_insertion_is_idempotent(
        catalog in catalog_strategy(),
        policy in policy_strategy(),
        members in members_strategy(),
    ) {
        let reconciler = RegionReconciler::new(&catalog);
        let mut members = members;

        let mut created: Vec<Grouping> = Vec::new();
        reconciler.insert_regions(&members, &policy, &mut created);
        members.extend(created.into_iter().map(|g| Member::region(g.name)));

        prop_assert!(reconciler.regions_to_insert(&members, &policy).is_empty());
        prop_assert!(reconciler.regions_to_insert(&members, &policy).is_empty());
    }

    #[test]
    fn test_plan_matches_individual_passes(
        catalog in catalog_strategy(),
        policy in policy_strategy(),
        members in members_strategy(),
    ) {
        let reconciler = RegionReconciler::new(&catalog);
        let plan = reconciler.plan(&members, &policy);

        let names = |regions: &[Grouping]| {
            regions.iter().map(|g| g.name.clone()).collect::<Vec<_>>()
        };
        prop_assert_eq!(
            names(&plan.to_remove),
            names(&reconciler.regions_to_remove(&members, &policy))
        );
        prop_assert_eq!(
            names(&plan.to_insert),
            names(&reconciler.regions_to_insert(&members, &policy))
        );
        prop_assert_eq!(
            plan.kept.len() + plan.to_remove.len(),
            region_keys(&members, policy.name_comparison).len()
        );
    }

    #[test]
    fn test_removed_names_are_distinct(
        catalog in catalog_strategy(),
        policy in policy_strategy(),
        members in members_strategy(),
    ) {
        let reconciler = RegionReconciler::new(&catalog);
        let to_remove = reconciler.regions_to_remove(&members, &policy);
        prop_assert_eq!(keys(&to_remove, policy.name_comparison).len(), to_remove.len());
    }
}
