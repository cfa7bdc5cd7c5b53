//! Member-type catalog
//!
//! The catalog lists every member type that can own a region, together with its
//! display name and sort order. Settings that share an order form a [`Tier`],
//! and each tier maps to exactly one region (or one per access modifier).

use std::collections::BTreeMap;

use crate::config::MemberTypeOverride;
use crate::kind::MemberKind;

/// Built-in member types: kind, default display name, order.
const DEFAULT_MEMBER_TYPES: [(MemberKind, &str, u32); 12] = [
    (MemberKind::Field, "Fields", 1),
    (MemberKind::Constructor, "Constructors", 2),
    (MemberKind::Destructor, "Destructors", 3),
    (MemberKind::Delegate, "Delegates", 4),
    (MemberKind::Event, "Events", 5),
    (MemberKind::Enum, "Enums", 6),
    (MemberKind::Interface, "Interfaces", 7),
    (MemberKind::Property, "Properties", 8),
    (MemberKind::Indexer, "Indexers", 9),
    (MemberKind::Method, "Methods", 10),
    (MemberKind::Struct, "Structs", 11),
    (MemberKind::Class, "Classes", 12),
];

/// Ordering and naming for a single member type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberTypeSetting {
    pub kind: MemberKind,
    /// Built-in display name.
    pub default_name: String,
    /// User-configured display name, if any.
    pub custom_name: Option<String>,
    /// Sort order; settings sharing an order are merged into one region.
    pub order: u32,
}

impl MemberTypeSetting {
    pub fn new(kind: MemberKind, default_name: impl Into<String>, order: u32) -> Self {
        Self {
            kind,
            default_name: default_name.into(),
            custom_name: None,
            order,
        }
    }

    pub fn with_custom_name(mut self, name: impl Into<String>) -> Self {
        self.custom_name = Some(name.into());
        self
    }

    /// The custom name when one is set and not blank, otherwise the default name.
    pub fn effective_name(&self) -> &str {
        match self.custom_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.default_name,
        }
    }
}

/// Settings sharing one order value.
///
/// Tiers are only built by [`MemberTypeCatalog::tiers`], which never yields an
/// empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier<'a> {
    order: u32,
    settings: Vec<&'a MemberTypeSetting>,
}

impl<'a> Tier<'a> {
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Settings of this tier in catalog declaration order.
    pub fn settings(&self) -> &[&'a MemberTypeSetting] {
        &self.settings
    }

    /// Display name of the tier: the effective name of its first setting in
    /// catalog declaration order.
    pub fn label(&self) -> &'a str {
        self.settings[0].effective_name()
    }

    pub fn kinds(&self) -> impl Iterator<Item = MemberKind> + '_ {
        self.settings.iter().map(|s| s.kind)
    }
}

/// Ordered, immutable collection of member-type settings.
///
/// Build one per process (see [`MemberTypeCatalog::standard`] and
/// [`MemberTypeCatalog::with_overrides`]) and share it by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberTypeCatalog {
    settings: Vec<MemberTypeSetting>,
}

impl MemberTypeCatalog {
    /// Create a catalog from settings in declaration order.
    pub fn new(settings: Vec<MemberTypeSetting>) -> Self {
        Self { settings }
    }

    /// A catalog without settings. Produces no tiers.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// The built-in catalog: twelve member types, each in its own tier.
    pub fn standard() -> Self {
        Self::new(
            DEFAULT_MEMBER_TYPES
                .iter()
                .map(|(kind, name, order)| MemberTypeSetting::new(*kind, *name, *order))
                .collect(),
        )
    }

    /// Return a copy of this catalog with configured names and orders applied.
    ///
    /// Overrides for kinds the catalog does not contain are skipped.
    pub fn with_overrides(&self, overrides: &BTreeMap<MemberKind, MemberTypeOverride>) -> Self {
        let mut settings = self.settings.clone();

        for (kind, over) in overrides {
            let Some(setting) = settings.iter_mut().find(|s| s.kind == *kind) else {
                tracing::warn!("Ignoring override for {}: not in the member-type catalog", kind);
                continue;
            };
            if let Some(name) = &over.name {
                setting.custom_name = Some(name.clone());
            }
            if let Some(order) = over.order {
                setting.order = order;
            }
            tracing::debug!(
                kind = %kind,
                name = setting.effective_name(),
                order = setting.order,
                "Applied member-type override"
            );
        }

        Self::new(settings)
    }

    pub fn settings(&self) -> &[MemberTypeSetting] {
        &self.settings
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Look up the setting for a kind.
    pub fn setting(&self, kind: MemberKind) -> Option<&MemberTypeSetting> {
        self.settings.iter().find(|s| s.kind == kind)
    }

    /// Sort order of a kind, if the catalog knows it.
    pub fn order_of(&self, kind: MemberKind) -> Option<u32> {
        self.setting(kind).map(|s| s.order)
    }

    /// Partition the settings by order, ascending.
    ///
    /// Every tier is non-empty, and within a tier settings keep the order in
    /// which they were declared, so [`Tier::label`] is deterministic.
    pub fn tiers(&self) -> Vec<Tier<'_>> {
        let mut by_order: BTreeMap<u32, Vec<&MemberTypeSetting>> = BTreeMap::new();
        for setting in &self.settings {
            by_order.entry(setting.order).or_default().push(setting);
        }

        by_order
            .into_iter()
            .map(|(order, settings)| Tier { order, settings })
            .collect()
    }
}

impl Default for MemberTypeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
