//! Desired command implementation

use colored::Colorize;
use region_core::{Grouping, RegionComposer};
use serde::Serialize;

use crate::cli::ConfigArgs;
use crate::error::Result;

#[derive(Serialize)]
struct DesiredOutput<'a> {
    insert_even_if_empty: bool,
    include_access_level: bool,
    regions: &'a [Grouping],
}

/// Run the desired command
pub fn run_desired(args: &ConfigArgs, json: bool) -> Result<()> {
    let (catalog, policy) = super::resolve(args)?;
    let regions = RegionComposer::new(&catalog).compose(&policy);

    if json {
        let output = DesiredOutput {
            insert_even_if_empty: policy.insert_even_if_empty,
            include_access_level: policy.include_access_level,
            regions: &regions,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Desired Regions".bold());
    println!();

    if regions.is_empty() {
        println!("  {}", "None".dimmed());
        if !policy.insert_even_if_empty {
            println!();
            println!(
                "Empty regions are disabled (use {} to enable).",
                "--insert-even-if-empty".cyan()
            );
        }
        return Ok(());
    }

    for region in &regions {
        println!("  {} {}", "+".green(), region.name.cyan());
    }

    Ok(())
}
