//! Command implementations for region-cli

pub mod desired;
pub mod plan;
pub mod tiers;

pub use desired::run_desired;
pub use plan::run_plan;
pub use tiers::run_tiers;

use region_meta::{MemberTypeCatalog, RegionPolicy, RegionsConfig, load_config};

use crate::cli::ConfigArgs;
use crate::error::Result;

/// Build the catalog and policy for one invocation.
///
/// Command-line flags can only switch boolean options on, and an explicit
/// `--name-comparison` replaces the configured one. Everything else comes from
/// the configuration file, or the defaults when no file is given.
pub(crate) fn resolve(args: &ConfigArgs) -> Result<(MemberTypeCatalog, RegionPolicy)> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => RegionsConfig::default(),
    };

    let mut policy = config.policy();
    policy.insert_even_if_empty |= args.insert_even_if_empty;
    policy.include_access_level |= args.include_access_level;
    if let Some(name_comparison) = args.name_comparison {
        policy.name_comparison = name_comparison;
    }

    tracing::debug!(?policy, "Resolved region policy");
    Ok((config.catalog(), policy))
}
