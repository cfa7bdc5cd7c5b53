//! Configuration types and loading for the region reconciler
//!
//! A single TOML file, every section optional:
//!
//! ```toml
//! [regions]
//! insert_even_if_empty = true
//! include_access_level = false
//! name_comparison = "ordinal"
//!
//! [member_types.method]
//! name = "Operations"
//! order = 10
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::MemberTypeCatalog;
use crate::error::{Error, Result};
use crate::kind::MemberKind;
use crate::policy::{NameComparison, RegionPolicy};

/// Largest configuration file accepted by [`load_config`].
pub const MAX_CONFIG_SIZE: u64 = 1024 * 1024;

/// `[regions]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegionSettings {
    /// Generate regions even when they would be empty
    #[serde(default)]
    pub insert_even_if_empty: bool,
    /// Subdivide regions by access level
    #[serde(default)]
    pub include_access_level: bool,
    /// Region name comparison
    #[serde(default)]
    pub name_comparison: NameComparison,
}

/// Per-kind override under `[member_types.<kind>]`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MemberTypeOverride {
    /// Custom display name
    #[serde(default)]
    pub name: Option<String>,
    /// Custom sort order
    #[serde(default)]
    pub order: Option<u32>,
}

/// Parsed region configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegionsConfig {
    #[serde(default)]
    pub regions: RegionSettings,

    #[serde(default)]
    pub member_types: BTreeMap<MemberKind, MemberTypeOverride>,
}

impl RegionsConfig {
    /// Parse configuration from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use region_meta::RegionsConfig;
    ///
    /// let config = RegionsConfig::parse(r#"
    /// [regions]
    /// insert_even_if_empty = true
    /// "#).unwrap();
    ///
    /// assert!(config.policy().insert_even_if_empty);
    /// ```
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Policy snapshot described by the `[regions]` section
    pub fn policy(&self) -> RegionPolicy {
        RegionPolicy::new(
            self.regions.insert_even_if_empty,
            self.regions.include_access_level,
        )
        .with_name_comparison(self.regions.name_comparison)
    }

    /// The standard catalog with this configuration's overrides applied
    pub fn catalog(&self) -> MemberTypeCatalog {
        MemberTypeCatalog::standard().with_overrides(&self.member_types)
    }
}

/// Load the configuration file at `path`
///
/// # Errors
///
/// Returns [`Error::ConfigNotFound`] if the file does not exist,
/// [`Error::ConfigTooLarge`] above [`MAX_CONFIG_SIZE`], and
/// [`Error::InvalidConfig`] if it is not valid configuration TOML.
pub fn load_config(path: &Path) -> Result<RegionsConfig> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let size = fs::metadata(path)
        .map_err(|e| Error::io(path, e))?
        .len();
    if size > MAX_CONFIG_SIZE {
        return Err(Error::ConfigTooLarge {
            path: path.to_path_buf(),
            size,
            max: MAX_CONFIG_SIZE,
        });
    }

    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let config = RegionsConfig::parse(&content).map_err(|e| Error::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::debug!(
        path = %path.display(),
        overrides = config.member_types.len(),
        "Loaded region configuration"
    );

    Ok(config)
}
