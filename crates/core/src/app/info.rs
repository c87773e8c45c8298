use crate::app::divergence::{list_local_branches, DivergenceAnalyzer, DEFAULT_REMOTE};
use crate::app::overview::build_overview;
use crate::error::{CoreError, Result};
use crate::ports::{BranchRegistry, ProjectBlock, ProjectSource, ReportRenderer, VcsPort};
use tracing::{info, warn};

/// Manifest-level values shown at the top of every report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestInfo {
    pub revision: String,
    pub merge_branch: String,
}

/// What the caller asked the info command to show
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoOptions {
    /// Include local/remote divergence for each project
    pub all: bool,
    /// Show the cross-project overview instead of per-project blocks
    pub overview: bool,
    /// Restrict the overview to checked-out branches
    pub current_branch: bool,
    /// Project names or paths
    pub projects: Vec<String>,
}

/// Runs the info report against the given ports
pub struct InfoService<'a> {
    vcs: &'a dyn VcsPort,
    registry: &'a dyn BranchRegistry,
    projects: &'a dyn ProjectSource,
    remote: String,
}

impl<'a> InfoService<'a> {
    pub fn new(
        vcs: &'a dyn VcsPort,
        registry: &'a dyn BranchRegistry,
        projects: &'a dyn ProjectSource,
    ) -> Self {
        Self {
            vcs,
            registry,
            projects,
            remote: DEFAULT_REMOTE.to_string(),
        }
    }

    /// Remote used for the tracked comparison target
    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    pub fn execute(
        &self,
        manifest: &ManifestInfo,
        options: &InfoOptions,
        out: &mut dyn ReportRenderer,
    ) -> Result<()> {
        out.field("Manifest branch", &manifest.revision)
            .map_err(CoreError::port)?;
        out.field("Manifest merge branch", &manifest.merge_branch)
            .map_err(CoreError::port)?;

        if options.overview {
            self.print_overview(options, out)
        } else {
            self.print_local_info(options, out)
        }
    }

    fn print_local_info(&self, options: &InfoOptions, out: &mut dyn ReportRenderer) -> Result<()> {
        let args = if options.projects.is_empty() {
            vec![".".to_string()]
        } else {
            options.projects.clone()
        };

        let projects = match self.projects.resolve(&args) {
            Ok(projects) => projects,
            Err(e @ CoreError::NoSuchProject { .. }) => {
                warn!("Skipping project report: {}", e);
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let analyzer = DivergenceAnalyzer::with_remote(self.vcs, self.remote.clone());
        for project in &projects {
            let block = ProjectBlock {
                name: project.name.clone(),
                mount_path: project.worktree.clone(),
                revision: project.revision_expr.clone(),
                local_branches: list_local_branches(self.vcs, project),
            };
            out.project(&block).map_err(CoreError::port)?;

            if options.all {
                let result = analyzer.analyze(project);
                out.divergence(&result).map_err(CoreError::port)?;
            }
        }

        Ok(())
    }

    fn print_overview(&self, options: &InfoOptions, out: &mut dyn ReportRenderer) -> Result<()> {
        let projects = self.projects.resolve(&options.projects)?;
        let overview = build_overview(self.registry, &projects, options.current_branch);

        if overview.is_empty() {
            info!("Nothing to upload in {} projects", projects.len());
            return Ok(());
        }

        let commits: usize = overview.iter().map(|entry| entry.commit_count()).sum();
        info!(
            "Overview: {} commits across {} projects",
            commits,
            overview.len()
        );

        out.overview(&overview).map_err(CoreError::port)
    }
}
