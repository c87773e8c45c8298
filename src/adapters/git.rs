//! `git` CLI adapter for the version-control queries.
//!
//! Fetching needs the user's SSH agent and credential helpers, which the CLI
//! inherits for free, so every query goes through the `git` binary and returns
//! its stdout as lines.

use anyhow::{bail, Context, Result};
use repoinfo_core::ports::VcsPort;
use repoinfo_core::Project;
use std::process::Command;
use tracing::{debug, info, warn};

/// Runs read-only git queries inside a project's worktree
pub struct GitCli {
    program: String,
}

impl GitCli {
    pub fn new() -> Self {
        Self {
            program: "git".to_string(),
        }
    }

    /// Run git with `args` in the project's worktree and capture stdout lines
    fn run(&self, project: &Project, args: &[&str]) -> Result<Vec<String>> {
        debug!("Running git {} in {}", args.join(" "), project.name);

        let output = Command::new(&self.program)
            .current_dir(&project.worktree)
            .args(args)
            .output()
            .with_context(|| {
                format!(
                    "Failed to execute {} in {}",
                    self.program,
                    project.worktree.display()
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(
                "git {} failed in {} (exit {}): {}",
                args.join(" "),
                project.name,
                output.status.code().unwrap_or(-1),
                stderr.trim()
            );
            bail!("git {} failed: {}", args.join(" "), stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect())
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl VcsPort for GitCli {
    fn local_branches(&self, project: &Project) -> Result<Vec<String>> {
        self.run(project, &["branch", "--no-color"])
    }

    fn remote_branches(&self, project: &Project) -> Result<Vec<String>> {
        self.run(project, &["branch", "-r", "--no-color"])
    }

    fn fetch_all(&self, project: &Project) -> Result<()> {
        info!("Fetching all remotes for {}", project);
        self.run(project, &["fetch", "--all", "--quiet"])?;
        info!("Fetch completed for {}", project.name);
        Ok(())
    }

    fn log(&self, project: &Project, range: &str) -> Result<Vec<String>> {
        self.run(
            project,
            &["log", "--no-color", "--no-decorate", "--pretty=format:%h %s", range, "--"],
        )
    }
}
