use crate::domain::{BranchActivity, Project};
use anyhow::Result;

/// Port onto a project's local branch registry
pub trait BranchRegistry {
    /// Name of the checked-out branch, `None` when HEAD is detached or unborn
    fn current_branch(&self, project: &Project) -> Option<String>;

    /// Local branch names in enumeration order
    fn branch_names(&self, project: &Project) -> Result<Vec<String>>;

    /// Pending work on `branch`, or `None` when it has no upstream or nothing
    /// the upstream lacks
    fn uploadable_branch(&self, project: &Project, branch: &str) -> Result<Option<BranchActivity>>;
}
