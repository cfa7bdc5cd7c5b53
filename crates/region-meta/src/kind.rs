//! Member classifications.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Classification of a parsed code member.
///
/// [`MemberKind::Region`] is the grouping marker kind: members of that kind are
/// the existing regions a reconciliation pass compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Class,
    Constructor,
    Delegate,
    Destructor,
    Enum,
    Event,
    Field,
    Indexer,
    Interface,
    Method,
    Namespace,
    Property,
    Region,
    Struct,
    Using,
}

impl MemberKind {
    /// Every kind, in declaration order.
    pub const ALL: [MemberKind; 15] = [
        MemberKind::Class,
        MemberKind::Constructor,
        MemberKind::Delegate,
        MemberKind::Destructor,
        MemberKind::Enum,
        MemberKind::Event,
        MemberKind::Field,
        MemberKind::Indexer,
        MemberKind::Interface,
        MemberKind::Method,
        MemberKind::Namespace,
        MemberKind::Property,
        MemberKind::Region,
        MemberKind::Struct,
        MemberKind::Using,
    ];

    /// Lowercase identifier used in configuration and member input files.
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Class => "class",
            MemberKind::Constructor => "constructor",
            MemberKind::Delegate => "delegate",
            MemberKind::Destructor => "destructor",
            MemberKind::Enum => "enum",
            MemberKind::Event => "event",
            MemberKind::Field => "field",
            MemberKind::Indexer => "indexer",
            MemberKind::Interface => "interface",
            MemberKind::Method => "method",
            MemberKind::Namespace => "namespace",
            MemberKind::Property => "property",
            MemberKind::Region => "region",
            MemberKind::Struct => "struct",
            MemberKind::Using => "using",
        }
    }

    /// Check if members of this kind are grouping markers.
    pub fn is_region_marker(&self) -> bool {
        matches!(self, MemberKind::Region)
    }
}

impl FromStr for MemberKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        MemberKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lowered)
            .ok_or_else(|| Error::UnknownKind {
                kind: s.to_string(),
            })
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
