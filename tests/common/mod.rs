#![allow(dead_code)]

use anyhow::{Context, Result};
use git2::{Repository, RepositoryInitOptions, Signature};
use std::fs;
use std::path::Path;

/// Initialise a repository on `main` with one commit
pub fn init_repo(path: &Path) -> Result<Repository> {
    fs::create_dir_all(path)?;
    let mut options = RepositoryInitOptions::new();
    options.initial_head("main");
    let repo = Repository::init_opts(path, &options)?;
    commit_file(&repo, "README", "Initial commit")?;
    Ok(repo)
}

/// Write a file named after the message and commit it on HEAD
pub fn commit_file(repo: &Repository, name: &str, message: &str) -> Result<git2::Oid> {
    let workdir = repo.workdir().context("Repository has no working directory")?;
    fs::write(workdir.join(name), message)?;

    let mut index = repo.index()?;
    index.add_path(Path::new(name))?;
    index.write()?;
    let tree = repo.find_tree(index.write_tree()?)?;

    let signature = Signature::now("Test User", "test@example.com")?;
    let parents = match repo.head() {
        Ok(head) => vec![head.peel_to_commit()?],
        Err(_) => Vec::new(),
    };
    let parent_refs: Vec<&git2::Commit> = parents.iter().collect();

    let oid = repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parent_refs)?;
    Ok(oid)
}

/// Create `name` at HEAD and make it the checked-out branch
pub fn switch_to_new_branch(repo: &Repository, name: &str) -> Result<()> {
    let head = repo.head()?.peel_to_commit()?;
    repo.branch(name, &head, false)?;
    repo.set_head(&format!("refs/heads/{}", name))?;
    Ok(())
}

/// Clone `upstream` into `dest` and point `origin/HEAD` at `origin/main`
pub fn clone_repo(upstream: &Path, dest: &Path) -> Result<Repository> {
    let url = upstream.to_str().context("Non UTF-8 upstream path")?;
    let repo = Repository::clone(url, dest)?;
    repo.reference_symbolic(
        "refs/remotes/origin/HEAD",
        "refs/remotes/origin/main",
        true,
        "test: set origin HEAD",
    )?;
    Ok(repo)
}
