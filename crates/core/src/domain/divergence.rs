use super::commit::Commit;

/// What the local history was compared against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComparisonTarget {
    /// The project follows a remote branch, e.g. `origin/main`
    Tracked(String),
    /// No remote tracking branch was found; the bare revision is used
    Degraded(String),
}

impl ComparisonTarget {
    pub fn as_str(&self) -> &str {
        match self {
            ComparisonTarget::Tracked(target) | ComparisonTarget::Degraded(target) => target,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, ComparisonTarget::Degraded(_))
    }
}

impl std::fmt::Display for ComparisonTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Commits unique to each side of a project's local/remote comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivergenceResult {
    pub target: ComparisonTarget,
    /// Reachable from HEAD but not from the target, newest first
    pub local_only: Vec<Commit>,
    /// Reachable from the target but not from HEAD, newest first
    pub remote_only: Vec<Commit>,
}
