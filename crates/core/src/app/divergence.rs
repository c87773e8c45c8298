use crate::domain::{Commit, ComparisonTarget, DivergenceResult, Project};
use crate::ports::VcsPort;
use tracing::{debug, warn};

pub const DEFAULT_REMOTE: &str = "origin";

/// Marker a remote listing uses for symbolic refs, e.g. `origin/HEAD -> origin/main`
const SYMBOLIC_REF_MARKER: &str = "->";

/// Compares a project's local history with its remote tracking branch
pub struct DivergenceAnalyzer<'a> {
    vcs: &'a dyn VcsPort,
    remote: String,
}

impl<'a> DivergenceAnalyzer<'a> {
    pub fn new(vcs: &'a dyn VcsPort) -> Self {
        Self::with_remote(vcs, DEFAULT_REMOTE)
    }

    pub fn with_remote(vcs: &'a dyn VcsPort, remote: impl Into<String>) -> Self {
        Self {
            vcs,
            remote: remote.into(),
        }
    }

    /// Fetch, pick a comparison target, then collect the commits unique to each side.
    ///
    /// Never fails: a failed fetch leaves the previously known remote refs in
    /// place, and a failed query contributes no commits.
    pub fn analyze(&self, project: &Project) -> DivergenceResult {
        if let Err(e) = self.vcs.fetch_all(project) {
            warn!("Fetch failed for {}, using known remote refs: {}", project, e);
        }

        let remote_branches = match self.vcs.remote_branches(project) {
            Ok(lines) => lines,
            Err(e) => {
                warn!("Failed to list remote branches for {}: {}", project.name, e);
                Vec::new()
            }
        };

        let target = self.comparison_target(project, &remote_branches);
        if target.is_degraded() {
            debug!(
                "No remote tracking branch for {}, comparing with {}",
                project.name, target
            );
        }

        let local_only = self.commits_in(project, &format!("{}..HEAD", target));
        let remote_only = self.commits_in(project, &format!("HEAD..{}", target));

        DivergenceResult {
            target,
            local_only,
            remote_only,
        }
    }

    fn comparison_target(&self, project: &Project, remote_branches: &[String]) -> ComparisonTarget {
        let on_tracked_branch = remote_branches
            .iter()
            .any(|line| line.contains(SYMBOLIC_REF_MARKER));

        if on_tracked_branch {
            ComparisonTarget::Tracked(format!("{}/{}", self.remote, project.revision_expr))
        } else {
            ComparisonTarget::Degraded(project.revision_expr.clone())
        }
    }

    fn commits_in(&self, project: &Project, range: &str) -> Vec<Commit> {
        match self.vcs.log(project, range) {
            Ok(lines) => Commit::parse_lines(lines),
            Err(e) => {
                warn!("git log {} failed for {}: {}", range, project.name, e);
                Vec::new()
            }
        }
    }
}

/// Convenience wrapper comparing against the default remote
pub fn analyze_divergence(vcs: &dyn VcsPort, project: &Project) -> DivergenceResult {
    DivergenceAnalyzer::new(vcs).analyze(project)
}

/// Local branch names with the current-branch marker stripped, in query order.
///
/// Names are not deduplicated. A failed query yields no branches.
pub fn list_local_branches(vcs: &dyn VcsPort, project: &Project) -> Vec<String> {
    match vcs.local_branches(project) {
        Ok(lines) => lines
            .iter()
            .map(|line| line.replace('*', "").trim().to_string())
            .filter(|name| !name.is_empty())
            .collect(),
        Err(e) => {
            warn!("Failed to list local branches for {}: {}", project.name, e);
            Vec::new()
        }
    }
}
