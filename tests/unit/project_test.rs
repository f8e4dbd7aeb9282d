//! Tests for project root resolution
//!
//! These use the real `git` executable, like the CLI does.

use fourmat::adapters::GitCli;
use fourmat::project::Project;
use fourmat::shared::PathContext;
use serial_test::serial;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::common::git_repo::TempGitRepo;

fn canonical(path: &Path) -> std::path::PathBuf {
    path.canonicalize().unwrap()
}

#[test]
fn test_git_tree_with_pyproject_resolves_to_tree_root() {
    let repo = TempGitRepo::new();
    repo.write_file("pyproject.toml", "[tool.black]\n");
    let deep = repo.mkdir("pkg/sub/deeper");

    let project = Project::new(GitCli);
    assert_eq!(project.root_from(&deep).unwrap(), repo.path());
}

#[test]
fn test_git_tree_without_markers_resolves_to_tree_root() {
    let repo = TempGitRepo::new();
    let deep = repo.mkdir("a/b");

    let project = Project::new(GitCli);
    assert_eq!(project.root_from(&deep).unwrap(), repo.path());
}

#[test]
fn test_nested_project_wins_over_enclosing_git_root() {
    let repo = TempGitRepo::new();
    repo.write_file("pyproject.toml", "");
    repo.write_file("fixture/test_project/pyproject.toml", "");
    let deeper = repo.mkdir("fixture/test_project/pkg");

    let project = Project::new(GitCli);
    assert_eq!(
        project.root_from(&deeper).unwrap(),
        repo.path().join("fixture/test_project")
    );
}

#[test]
fn test_fixture_dir_without_own_markers_resolves_to_repo_root() {
    let repo = TempGitRepo::new();
    repo.write_file("pyproject.toml", "");
    repo.write_file("fixture/test_project/pyproject.toml", "");
    let fixture = repo.path().join("fixture");

    let project = Project::new(GitCli);
    assert_eq!(project.root_from(&fixture).unwrap(), repo.path());
}

#[test]
fn test_nearest_manifest_marker() {
    let temp = TempDir::new().unwrap();
    let proj = temp.path().join("test_project_fourmat");
    fs::create_dir_all(proj.join("pkg/inner")).unwrap();
    fs::write(proj.join(".fourmat"), "pkg\n").unwrap();

    let project = Project::new(GitCli);
    assert_eq!(project.root_from(&proj.join("pkg/inner")).unwrap(), canonical(&proj));

    let project = Project::new(GitCli);
    assert_eq!(project.root_from(&proj).unwrap(), canonical(&proj));
}

#[test]
fn test_falls_back_to_start_dir() {
    let temp = TempDir::new().unwrap();
    let start = temp.path().join("nothing/here");
    fs::create_dir_all(&start).unwrap();

    let project = Project::new(GitCli);
    assert_eq!(project.root_from(&start).unwrap(), canonical(&start));
}

#[cfg(unix)]
#[test]
#[serial(cwd)]
fn test_system_tmp_fallback() {
    let _ctx = PathContext::enter("/tmp").unwrap();

    let project = Project::new(GitCli);
    assert_eq!(project.root().unwrap(), canonical(Path::new("/tmp")));
}

#[test]
#[serial(cwd)]
fn test_root_uses_working_directory() {
    let repo = TempGitRepo::new();
    repo.write_file("pyproject.toml", "");
    let sub = repo.mkdir("pkg");

    let _ctx = PathContext::enter(&sub).unwrap();
    let project = Project::new(GitCli);
    assert_eq!(project.root().unwrap(), repo.path());
}

#[test]
#[serial(cwd)]
fn test_root_is_cached_across_filesystem_changes() {
    let temp = TempDir::new().unwrap();
    let start = temp.path().join("app");
    fs::create_dir_all(&start).unwrap();

    let project = Project::new(GitCli);
    let first = {
        let _ctx = PathContext::enter(&start).unwrap();
        project.root().unwrap().to_path_buf()
    };
    assert_eq!(first, canonical(&start));

    // A marker appearing above, and a different working directory, change nothing
    fs::write(temp.path().join("pyproject.toml"), "").unwrap();
    let _ctx = PathContext::enter(temp.path()).unwrap();
    assert_eq!(project.root().unwrap(), first);

    // A fresh context sees the new marker
    let fresh = Project::new(GitCli);
    assert_eq!(fresh.root_from(&start).unwrap(), canonical(temp.path()));
}
