//! Members and regions.

use serde::{Deserialize, Serialize};

use region_meta::{MemberKind, MemberTypeCatalog, NameComparison};

/// A parsed code member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub kind: MemberKind,
    pub name: String,
}

impl Member {
    pub fn new(kind: MemberKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    /// A region marker member.
    pub fn region(name: impl Into<String>) -> Self {
        Self::new(MemberKind::Region, name)
    }

    /// Sort order of this member's kind in `catalog`.
    pub fn order(&self, catalog: &MemberTypeCatalog) -> Option<u32> {
        catalog.order_of(self.kind)
    }
}

/// A named region.
///
/// Identity is the name alone, compared with a [`NameComparison`]; use
/// [`Grouping::same_as`] rather than structural equality.
#[derive(Debug, Clone, Serialize)]
pub struct Grouping {
    pub name: String,
}

impl Grouping {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn same_as(&self, other: &Grouping, comparison: NameComparison) -> bool {
        comparison.same_name(&self.name, &other.name)
    }
}

/// Regions already present in `members`, in member order.
pub fn existing_regions(members: &[Member]) -> Vec<Grouping> {
    members
        .iter()
        .filter(|m| m.kind.is_region_marker())
        .map(|m| Grouping::new(m.name.clone()))
        .collect()
}
