use anyhow::Result;
use repoinfo::adapters::registry::Git2Registry;
use repoinfo_core::app::build_overview;
use repoinfo_core::ports::BranchRegistry;
use repoinfo_core::Project;
use tempfile::TempDir;

mod common;

fn project_at(path: &std::path::Path) -> Project {
    Project::new("app", path, "main", "app")
}

#[test]
fn test_branch_with_upstream_and_local_commits_is_uploadable() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("app");
    let repo = common::init_repo(&path)?;

    common::switch_to_new_branch(&repo, "feature")?;
    repo.find_branch("feature", git2::BranchType::Local)?
        .set_upstream(Some("main"))?;
    common::commit_file(&repo, "a.txt", "First feature change")?;
    common::commit_file(&repo, "b.txt", "Second feature change")?;

    let registry = Git2Registry::new();
    let project = project_at(&path);

    assert_eq!(registry.current_branch(&project), Some("feature".to_string()));

    let activity = registry
        .uploadable_branch(&project, "feature")?
        .expect("feature should be uploadable");
    let subjects: Vec<_> = activity.commits.iter().map(|c| c.subject.as_str()).collect();
    assert_eq!(subjects, vec!["Second feature change", "First feature change"]);
    assert!(activity.commits.iter().all(|c| c.hash.len() >= 7));
    assert!(!activity.date.is_empty());

    Ok(())
}

#[test]
fn test_branches_without_upstream_or_new_commits_are_not_uploadable() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("app");
    let repo = common::init_repo(&path)?;

    common::switch_to_new_branch(&repo, "synced")?;
    repo.find_branch("synced", git2::BranchType::Local)?
        .set_upstream(Some("main"))?;
    common::switch_to_new_branch(&repo, "scratch")?;
    common::commit_file(&repo, "notes.txt", "Scratch notes")?;

    let registry = Git2Registry::new();
    let project = project_at(&path);

    let mut names = registry.branch_names(&project)?;
    names.sort();
    assert_eq!(names, vec!["main", "scratch", "synced"]);

    assert_eq!(registry.uploadable_branch(&project, "main")?, None);
    assert_eq!(registry.uploadable_branch(&project, "synced")?, None);
    assert_eq!(registry.uploadable_branch(&project, "scratch")?, None);

    Ok(())
}

#[test]
fn test_detached_head_has_no_current_branch() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("app");
    let repo = common::init_repo(&path)?;

    let head_commit = repo.head()?.peel_to_commit()?;
    repo.set_head_detached(head_commit.id())?;

    assert_eq!(Git2Registry::new().current_branch(&project_at(&path)), None);
    Ok(())
}

#[test]
fn test_overview_over_real_checkouts() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let idle_path = temp_dir.path().join("idle");
    common::init_repo(&idle_path)?;

    let busy_path = temp_dir.path().join("busy");
    let busy = common::init_repo(&busy_path)?;
    common::switch_to_new_branch(&busy, "wip")?;
    busy.find_branch("wip", git2::BranchType::Local)?
        .set_upstream(Some("main"))?;
    common::commit_file(&busy, "wip.txt", "Work in progress")?;

    let projects = vec![
        Project::new("idle", &idle_path, "main", "idle"),
        Project::new("busy", &busy_path, "main", "busy"),
    ];
    let registry = Git2Registry::new();

    let overview = build_overview(&registry, &projects, true);

    assert_eq!(overview.len(), 1);
    assert_eq!(overview[0].project.name, "busy");
    assert_eq!(overview[0].branches.len(), 1);
    assert_eq!(overview[0].branches[0].name, "wip");
    assert!(overview[0].branches[0].is_current);
    assert_eq!(overview[0].branches[0].commit_count(), 1);

    Ok(())
}
