//! Region composition and reconciliation for parsed code members.
//!
//! Given the members of a type (some of which may be region markers) and a
//! [`RegionPolicy`], this crate decides which regions are stale and which are
//! missing. It never edits source: callers receive ordered lists of regions to
//! delete and to create, and place the markers themselves.
//!
//! # Example
//!
//! ```
//! use region_core::{Member, MemberKind, MemberTypeCatalog, RegionPolicy, RegionReconciler};
//!
//! let catalog = MemberTypeCatalog::standard();
//! let reconciler = RegionReconciler::new(&catalog);
//! let policy = RegionPolicy::new(true, false);
//!
//! let members = vec![
//!     Member::region("Fields"),
//!     Member::new(MemberKind::Field, "count"),
//!     Member::region("Helpers"),
//! ];
//!
//! let stale = reconciler.regions_to_remove(&members, &policy);
//! assert_eq!(stale.len(), 1);
//! assert_eq!(stale[0].name, "Helpers");
//!
//! let missing = reconciler.regions_to_insert(&members, &policy);
//! assert_eq!(missing[0].name, "Constructors");
//! ```

pub mod composer;
pub mod model;
pub mod plan;
pub mod reconciler;

pub use composer::RegionComposer;
pub use model::{Grouping, Member, existing_regions};
pub use plan::{PlanStatus, ReconcilePlan};
pub use reconciler::{RegionReconciler, RegionSink};

pub use region_meta::{
    ACCESS_MODIFIERS, AccessModifier, MemberKind, MemberTypeCatalog, MemberTypeSetting,
    NameComparison, RegionPolicy, Tier,
};
