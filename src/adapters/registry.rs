use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Offset, Utc};
use git2::{BranchType, Repository as GitRepository};
use repoinfo_core::ports::BranchRegistry;
use repoinfo_core::{BranchActivity, Commit, Project};
use tracing::debug;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Branch registry backed by git2, reading refs and branch config directly
#[derive(Debug, Default)]
pub struct Git2Registry;

impl Git2Registry {
    pub fn new() -> Self {
        Self
    }

    fn open_repo(&self, project: &Project) -> Result<GitRepository> {
        GitRepository::open(&project.worktree).with_context(|| {
            format!(
                "Failed to open git repository at {}",
                project.worktree.display()
            )
        })
    }
}

impl BranchRegistry for Git2Registry {
    fn current_branch(&self, project: &Project) -> Option<String> {
        let git_repo = self.open_repo(project).ok()?;
        let head = git_repo.head().ok()?;

        // Detached HEAD has no current branch
        if head.is_branch() {
            head.shorthand().map(|s| s.to_string())
        } else {
            None
        }
    }

    fn branch_names(&self, project: &Project) -> Result<Vec<String>> {
        let git_repo = self.open_repo(project)?;

        let mut names = Vec::new();
        for entry in git_repo
            .branches(Some(BranchType::Local))
            .context("Failed to list local branches")?
        {
            let (branch, _) = entry?;
            if let Some(name) = branch.name()? {
                names.push(name.to_string());
            }
        }

        Ok(names)
    }

    fn uploadable_branch(&self, project: &Project, branch: &str) -> Result<Option<BranchActivity>> {
        let git_repo = self.open_repo(project)?;
        let local = git_repo
            .find_branch(branch, BranchType::Local)
            .with_context(|| format!("Local branch not found: {}", branch))?;

        let upstream = match local.upstream() {
            Ok(upstream) => upstream,
            Err(e) => {
                debug!("No upstream for {} in {}: {}", branch, project.name, e);
                return Ok(None);
            }
        };

        let tip = local.get().peel_to_commit()?;
        let base = upstream.get().peel_to_commit()?;

        let mut revwalk = git_repo.revwalk()?;
        revwalk.push(tip.id())?;
        revwalk.hide(base.id())?;
        revwalk.set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::TIME)?;

        let mut commits = Vec::new();
        for oid in revwalk {
            let commit = git_repo.find_commit(oid?)?;
            let short_id = commit.as_object().short_id()?;
            commits.push(Commit::new(
                short_id.as_str().unwrap_or_default(),
                commit.summary().unwrap_or(""),
            ));
        }

        if commits.is_empty() {
            return Ok(None);
        }

        Ok(Some(BranchActivity {
            commits,
            date: format_commit_time(tip.time()),
        }))
    }
}

/// Render a commit time in its own timezone, e.g. `2023-01-01 10:00:00 +0100`
pub fn format_commit_time(time: git2::Time) -> String {
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60).unwrap_or_else(|| Utc.fix());

    match DateTime::from_timestamp(time.seconds(), 0) {
        Some(utc) => utc.with_timezone(&offset).format(DATE_FORMAT).to_string(),
        None => time.seconds().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_commit_time_utc() {
        let time = git2::Time::new(1_672_531_200, 0);
        assert_eq!(format_commit_time(time), "2023-01-01 00:00:00 +0000");
    }

    #[test]
    fn test_format_commit_time_keeps_author_offset() {
        let time = git2::Time::new(1_672_531_200, 90);
        assert_eq!(format_commit_time(time), "2023-01-01 01:30:00 +0130");
    }

    #[test]
    fn test_current_branch_outside_repo() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let project = Project::new("none", temp_dir.path(), "main", ".");
        assert_eq!(Git2Registry::new().current_branch(&project), None);
        assert!(Git2Registry::new().branch_names(&project).is_err());
    }
}
