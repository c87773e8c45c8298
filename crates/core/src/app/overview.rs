use crate::domain::{OverviewEntry, Project, UploadableBranch};
use crate::ports::BranchRegistry;
use tracing::{debug, warn};

/// Collect every uploadable branch across `projects`, grouped by project.
///
/// Project order follows `projects`; branch order follows the registry's
/// enumeration. With `current_branch_only`, each project contributes at most
/// its checked-out branch. Projects with nothing to upload are left out.
pub fn build_overview<'a>(
    registry: &dyn BranchRegistry,
    projects: &'a [Project],
    current_branch_only: bool,
) -> Vec<OverviewEntry<'a>> {
    let mut uploadable = Vec::new();

    for project in projects {
        let current = registry.current_branch(project);
        let names = match registry.branch_names(project) {
            Ok(names) => names,
            Err(e) => {
                warn!("Failed to list branches for {}: {}", project, e);
                continue;
            }
        };

        for name in names {
            let is_current = current.as_deref() == Some(name.as_str());
            if current_branch_only && !is_current {
                continue;
            }

            match registry.uploadable_branch(project, &name) {
                Ok(Some(activity)) => {
                    uploadable.push(UploadableBranch::new(project, name, activity, is_current));
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("Failed to inspect branch {} in {}: {}", name, project.name, e);
                }
            }
        }
    }

    debug!("Collected {} uploadable branches", uploadable.len());
    group_by_project(uploadable)
}

/// Regroup a flat, project-ordered branch list, opening a new entry whenever
/// the owning project changes.
fn group_by_project(branches: Vec<UploadableBranch<'_>>) -> Vec<OverviewEntry<'_>> {
    let mut entries: Vec<OverviewEntry<'_>> = Vec::new();

    for branch in branches {
        match entries.last_mut() {
            Some(entry) if entry.project.same_checkout(branch.project) => {
                entry.branches.push(branch);
            }
            _ => entries.push(OverviewEntry {
                project: branch.project,
                branches: vec![branch],
            }),
        }
    }

    entries
}
