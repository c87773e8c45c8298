use anyhow::{Context, Result};
use repoinfo_core::ports::ProjectSource;
use repoinfo_core::{CoreError, Project};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::config::Config;

/// Find every git checkout under `base_path`, in file-name order.
///
/// A checkout's own subdirectories are not searched, except when the base
/// itself is a checkout.
pub fn find_projects<P: AsRef<Path>>(base_path: P, config: &Config) -> Result<Vec<Project>> {
    let mut projects = Vec::new();
    let base_path = base_path.as_ref();

    for entry in WalkDir::new(base_path)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            // Skip .git directories and don't descend into them
            if e.file_name() == ".git" {
                return false;
            }

            // If we're in a checkout (parent has .git), don't descend further
            if let Some(parent) = e.path().parent() {
                if parent.join(".git").exists() && parent != base_path {
                    return false;
                }
            }

            true
        })
    {
        let entry = entry.context("Failed to read directory entry")?;

        if entry.path().join(".git").exists() {
            let worktree = entry.path().to_path_buf();
            let relpath = relative_path(&worktree, base_path);
            let name = worktree
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            let revision = config.revision_for(&relpath);

            debug!("Discovered project {} at {}", name, relpath);
            projects.push(Project::new(name, worktree, revision, relpath));
        }
    }

    Ok(projects)
}

/// Worktree of the git checkout containing `path`, if any
pub fn enclosing_checkout(path: &Path) -> Option<PathBuf> {
    match git2::Repository::discover(path) {
        Ok(repo) => repo.workdir().map(Path::to_path_buf),
        Err(e) => {
            debug!("No checkout encloses {}: {}", path.display(), e);
            None
        }
    }
}

fn relative_path(path: &Path, base_path: &Path) -> String {
    match path.strip_prefix(base_path) {
        Ok(relative) if relative == Path::new("") => ".".to_string(),
        Ok(relative) => relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.display().to_string(),
    }
}

/// Projects found in the workspace, resolvable by name, relative path or filesystem path
#[derive(Debug, Clone)]
pub struct WorkspaceProjects {
    projects: Vec<Project>,
}

impl WorkspaceProjects {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn scan<P: AsRef<Path>>(base_path: P, config: &Config) -> Result<Self> {
        Ok(Self::new(find_projects(base_path, config)?))
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    fn resolve_one(&self, arg: &str) -> Option<&Project> {
        let relpath = arg.trim_end_matches('/');

        self.projects
            .iter()
            .find(|p| p.name == arg)
            .or_else(|| self.projects.iter().find(|p| p.relpath == relpath))
            .or_else(|| self.containing(Path::new(arg)))
    }

    /// Deepest project whose worktree contains `path`
    fn containing(&self, path: &Path) -> Option<&Project> {
        let path = path.canonicalize().ok()?;

        self.projects
            .iter()
            .filter_map(|p| {
                let worktree: PathBuf = p.worktree.canonicalize().ok()?;
                path.starts_with(&worktree)
                    .then(|| (worktree.components().count(), p))
            })
            .max_by_key(|(depth, _)| *depth)
            .map(|(_, p)| p)
    }
}

impl ProjectSource for WorkspaceProjects {
    fn resolve(&self, args: &[String]) -> repoinfo_core::Result<Vec<Project>> {
        if args.is_empty() {
            return Ok(self.projects.clone());
        }

        args.iter()
            .map(|arg| {
                self.resolve_one(arg)
                    .cloned()
                    .ok_or_else(|| CoreError::NoSuchProject { name: arg.clone() })
            })
            .collect()
    }
}
