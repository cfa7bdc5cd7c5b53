//! Plan command implementation

use std::fs;
use std::path::Path;

use colored::Colorize;
use region_core::{Member, PlanStatus, RegionReconciler};

use crate::cli::ConfigArgs;
use crate::error::{CliError, Result};

/// Read a JSON member list.
pub(crate) fn load_members(path: &Path) -> Result<Vec<Member>> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CliError::InvalidMembers {
        path: path.to_path_buf(),
        source,
    })
}

/// Run the plan command
pub fn run_plan(members_path: &Path, args: &ConfigArgs, json: bool) -> Result<()> {
    let (catalog, policy) = super::resolve(args)?;
    let members = load_members(members_path)?;
    tracing::debug!(count = members.len(), path = %members_path.display(), "Loaded members");

    let plan = RegionReconciler::new(&catalog).plan(&members, &policy);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let status = match plan.status() {
        PlanStatus::InSync => "in sync".green(),
        PlanStatus::Missing => "missing regions".yellow(),
        PlanStatus::Stale => "stale regions".yellow(),
        PlanStatus::Drifted => "drifted".red(),
    };
    println!("{}: {}", "Regions".bold(), status);
    println!();

    println!("{}:", "Remove".bold());
    if plan.to_remove.is_empty() {
        println!("  {}", "None".dimmed());
    }
    for region in &plan.to_remove {
        println!("  {} {}", "-".red(), region.name);
    }
    println!();

    println!("{}:", "Insert".bold());
    if plan.to_insert.is_empty() {
        println!("  {}", "None".dimmed());
    }
    for region in &plan.to_insert {
        println!("  {} {}", "+".green(), region.name.cyan());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use region_core::MemberKind;
    use tempfile::TempDir;

    #[test]
    fn test_load_members() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("members.json");
        fs::write(
            &path,
            r#"[{"kind": "region", "name": "Fields"}, {"kind": "field", "name": "count"}]"#,
        )
        .unwrap();

        let members = load_members(&path).unwrap();
        assert_eq!(
            members,
            vec![
                Member::region("Fields"),
                Member::new(MemberKind::Field, "count")
            ]
        );
    }

    #[test]
    fn test_load_members_rejects_unknown_kind() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("members.json");
        fs::write(&path, r#"[{"kind": "gadget", "name": "x"}]"#).unwrap();

        assert!(matches!(
            load_members(&path),
            Err(CliError::InvalidMembers { .. })
        ));
    }

    #[test]
    fn test_load_members_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.json");

        assert!(matches!(load_members(&path), Err(CliError::Read { .. })));
    }
}
