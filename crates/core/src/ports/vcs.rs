use crate::domain::Project;
use anyhow::Result;

/// Port for read-only version-control queries against one checkout.
///
/// Every method returns the query's raw output lines; parsing happens in the core.
pub trait VcsPort {
    /// Local branch listing, the checked-out branch marked with `*`
    fn local_branches(&self, project: &Project) -> Result<Vec<String>>;

    /// Remote branch listing; symbolic refs contain `->`
    fn remote_branches(&self, project: &Project) -> Result<Vec<String>>;

    /// Refresh tracking refs from every remote
    fn fetch_all(&self, project: &Project) -> Result<()>;

    /// Commits in `range` (e.g. `origin/main..HEAD`), one `<hash> <subject>` line each, newest first
    fn log(&self, project: &Project, range: &str) -> Result<Vec<String>>;
}
