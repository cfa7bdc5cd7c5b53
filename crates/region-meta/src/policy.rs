//! Region policy: the flags deciding which regions should exist and how
//! region names are compared.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Access level used to subdivide a tier's region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessModifier {
    Public,
    Internal,
    ProtectedInternal,
    Protected,
    Private,
}

/// Access modifiers in the order their regions are emitted.
pub const ACCESS_MODIFIERS: [AccessModifier; 5] = [
    AccessModifier::Public,
    AccessModifier::Internal,
    AccessModifier::ProtectedInternal,
    AccessModifier::Protected,
    AccessModifier::Private,
];

impl AccessModifier {
    /// Label prefixed to a tier name when access levels are included.
    pub fn label(&self) -> &'static str {
        match self {
            AccessModifier::Public => "Public",
            AccessModifier::Internal => "Internal",
            AccessModifier::ProtectedInternal => "Protected Internal",
            AccessModifier::Protected => "Protected",
            AccessModifier::Private => "Private",
        }
    }
}

impl fmt::Display for AccessModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How two region names are compared for identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameComparison {
    /// Names match only if they are byte-for-byte equal.
    #[default]
    Ordinal,
    /// Names match regardless of letter case.
    IgnoreCase,
}

impl NameComparison {
    /// Key under which a name participates in identity checks.
    pub fn key<'a>(&self, name: &'a str) -> Cow<'a, str> {
        match self {
            NameComparison::Ordinal => Cow::Borrowed(name),
            NameComparison::IgnoreCase => Cow::Owned(name.to_lowercase()),
        }
    }

    /// Check whether two names denote the same region.
    pub fn same_name(&self, a: &str, b: &str) -> bool {
        self.key(a) == self.key(b)
    }
}

impl FromStr for NameComparison {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ordinal" | "case-sensitive" => Ok(NameComparison::Ordinal),
            "ignore-case" | "case-insensitive" => Ok(NameComparison::IgnoreCase),
            _ => Err(Error::UnknownComparison {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for NameComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameComparison::Ordinal => write!(f, "ordinal"),
            NameComparison::IgnoreCase => write!(f, "ignore-case"),
        }
    }
}

/// Snapshot of the region settings for a single reconciliation pass.
///
/// Callers read this from their configuration store on every invocation;
/// nothing in the engine retains it between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionPolicy {
    /// Generate regions for every tier even when no member would land in them.
    pub insert_even_if_empty: bool,
    /// Split each tier into one region per access modifier.
    pub include_access_level: bool,
    /// Comparison used for region identity.
    pub name_comparison: NameComparison,
}

impl RegionPolicy {
    pub fn new(insert_even_if_empty: bool, include_access_level: bool) -> Self {
        Self {
            insert_even_if_empty,
            include_access_level,
            name_comparison: NameComparison::default(),
        }
    }

    pub fn with_name_comparison(mut self, name_comparison: NameComparison) -> Self {
        self.name_comparison = name_comparison;
        self
    }

    /// The fixed, ordered access modifiers.
    pub fn access_modifiers(&self) -> &'static [AccessModifier] {
        &ACCESS_MODIFIERS
    }
}
