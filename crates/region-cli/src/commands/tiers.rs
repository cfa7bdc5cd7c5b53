//! Tiers command implementation

use colored::Colorize;

use crate::cli::ConfigArgs;
use crate::error::Result;

/// Run the tiers command
pub fn run_tiers(args: &ConfigArgs) -> Result<()> {
    let (catalog, _) = super::resolve(args)?;

    println!("{}", "Member-Type Tiers".bold());
    println!();

    let tiers = catalog.tiers();
    if tiers.is_empty() {
        println!("  {}", "None".dimmed());
        return Ok(());
    }

    for tier in tiers {
        let kinds: Vec<String> = tier.kinds().map(|k| k.to_string()).collect();
        println!(
            "  {:>3}  {} ({})",
            tier.order(),
            tier.label().cyan(),
            kinds.join(", ").dimmed()
        );
    }

    Ok(())
}
