//! Member-type metadata and configuration for the region reconciler.
//!
//! This crate owns the static inputs of a reconciliation pass:
//!
//! - [`MemberKind`]: the classification attached to every parsed member
//! - [`MemberTypeCatalog`]: the ordered member-type settings, grouped into tiers
//! - [`RegionPolicy`]: the flags deciding which regions should exist
//! - [`RegionsConfig`]: the TOML configuration the catalog and policy are built from

pub mod catalog;
pub mod config;
pub mod error;
pub mod kind;
pub mod policy;

pub use catalog::{MemberTypeCatalog, MemberTypeSetting, Tier};
pub use config::{RegionsConfig, load_config};
pub use error::{Error, Result};
pub use kind::MemberKind;
pub use policy::{ACCESS_MODIFIERS, AccessModifier, NameComparison, RegionPolicy};
