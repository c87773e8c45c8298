use std::path::PathBuf;

/// A single checkout in the workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    /// Where the checkout is mounted on disk
    pub worktree: PathBuf,
    /// Branch name or pinned ref the project is expected to follow
    pub revision_expr: String,
    /// Path relative to the workspace root
    pub relpath: String,
}

impl Project {
    pub fn new(
        name: impl Into<String>,
        worktree: impl Into<PathBuf>,
        revision_expr: impl Into<String>,
        relpath: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            worktree: worktree.into(),
            revision_expr: revision_expr.into(),
            relpath: relpath.into(),
        }
    }

    /// Whether both values describe the same checkout
    pub fn same_checkout(&self, other: &Project) -> bool {
        self.worktree == other.worktree && self.relpath == other.relpath
    }
}

impl std::fmt::Display for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.worktree.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_display() {
        let project = Project::new("build", "/ws/tools/build", "main", "tools/build");
        let display_str = format!("{}", project);
        assert!(display_str.contains("build"));
        assert!(display_str.contains("/ws/tools/build"));
    }

    #[test]
    fn test_same_checkout_ignores_revision() {
        let a = Project::new("build", "/ws/build", "main", "build");
        let b = Project::new("build", "/ws/build", "stable", "build");
        let c = Project::new("build", "/ws/other/build", "main", "other/build");
        assert!(a.same_checkout(&b));
        assert!(!a.same_checkout(&c));
    }
}
