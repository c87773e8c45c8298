use super::{commit::Commit, project::Project};

/// Pending work on a local branch, as reported by the branch registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchActivity {
    /// Commits not on the upstream, newest first
    pub commits: Vec<Commit>,
    /// Date of the branch tip
    pub date: String,
}

/// A local branch carrying commits its upstream does not have
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadableBranch<'a> {
    pub name: String,
    pub project: &'a Project,
    pub commits: Vec<Commit>,
    pub date: String,
    pub is_current: bool,
}

impl<'a> UploadableBranch<'a> {
    pub fn new(
        project: &'a Project,
        name: impl Into<String>,
        activity: BranchActivity,
        is_current: bool,
    ) -> Self {
        Self {
            name: name.into(),
            project,
            commits: activity.commits,
            date: activity.date,
            is_current,
        }
    }

    pub fn commit_count(&self) -> usize {
        self.commits.len()
    }

    /// Summary line for the overview, e.g. `* feature   (2 commits, 2023-01-01)`.
    ///
    /// The branch name is padded to `name_width` columns.
    pub fn summary_line(&self, name_width: usize) -> String {
        let count = self.commit_count();
        format!(
            "{} {:<width$} ({} commit{}, {})",
            current_marker(self.is_current),
            self.name,
            count,
            plural_suffix(count),
            self.date,
            width = name_width,
        )
    }
}

/// A project together with its uploadable branches, in discovery order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewEntry<'a> {
    pub project: &'a Project,
    pub branches: Vec<UploadableBranch<'a>>,
}

impl OverviewEntry<'_> {
    pub fn commit_count(&self) -> usize {
        self.branches.iter().map(UploadableBranch::commit_count).sum()
    }
}

pub fn current_marker(is_current: bool) -> &'static str {
    match is_current {
        true => "*",
        false => " ",
    }
}

pub fn plural_suffix(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
