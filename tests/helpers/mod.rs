#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run git in `repo_path` with a fixed locale so output phrasing is stable
pub fn git(repo_path: &Path, args: &[&str]) -> Output {
    Command::new("git")
        .args(["-c", "color.ui=false", "-c", "commit.gpgsign=false"])
        .args(args)
        .current_dir(repo_path)
        .env("LC_ALL", "C")
        .env("LANG", "C")
        .output()
        .expect("Failed to run git")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn configure_user(repo_path: &Path) {
    git(repo_path, &["config", "user.name", "Test User"]);
    git(repo_path, &["config", "user.email", "test@example.com"]);
}

/// Helper to create a test git repository whose first branch is `main`
pub fn create_test_repo() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init"]);
    git(&repo_path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    configure_user(&repo_path);

    (temp_dir, repo_path)
}

/// Clone `source` into a fresh temp dir
pub fn clone_repo(source: &Path) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let clone_path = temp_dir.path().join("clone");

    let output = Command::new("git")
        .args(["clone", "--quiet"])
        .arg(source)
        .arg(&clone_path)
        .env("LC_ALL", "C")
        .output()
        .expect("Failed to clone repo");
    assert!(output.status.success(), "clone failed: {}", stderr(&output));

    configure_user(&clone_path);

    (temp_dir, clone_path)
}

/// Helper to create a commit, returning git's commit output
pub fn create_commit(repo_path: &Path, file: &str, content: &str, message: &str) -> Output {
    fs::write(repo_path.join(file), content).expect("Failed to write file");
    git(repo_path, &["add", file]);
    git(repo_path, &["commit", "-m", message])
}

pub const MODERN_STATUS: &str = "On branch main
Your branch is up to date with 'origin/main'.

Changes to be committed:
  (use \"git restore --staged <file>...\" to unstage)
\tnew file:   src/registry.rs
\tdeleted:    src/old.rs

Changes not staged for commit:
  (use \"git add <file>...\" to update what will be committed)
  (use \"git restore <file>...\" to discard changes in working directory)
\tmodified:   src/lib.rs

Untracked files:
  (use \"git add <file>...\" to include in what will be committed)
\tscratch.txt
";

/// Long-format status with a submodule holding local edits
pub const DIRTY_SUBMODULE_STATUS: &str = "On branch main
Your branch is up to date with 'origin/main'.

Changes not staged for commit:
  (use \"git add <file>...\" to update what will be committed)
  (use \"git restore <file>...\" to discard changes in working directory)
  (commit or discard the untracked or modified content in submodules)
\tmodified:   README.md
\tmodified:   vendor/lib (modified content)

no changes added to commit (use \"git add\" and/or \"git commit -a\")
";

pub const UNTRACKED_LISTING: &str = "scratch.txt\n";

pub const COMMIT_OUTPUT: &str = "[main 4f2a9c1] Add registry\n 2 files changed, 40 insertions(+), 12 deletions(-)\n create mode 100644 src/registry.rs\n delete mode 100644 src/old.rs\n";

pub const BRANCH_LISTING: &str = "  develop\n* main\n  remotes/origin/HEAD -> origin/main\n  remotes/origin/develop\n  remotes/origin/main\n";

pub const REMOTE_LISTING: &str = "origin\tgit@github.com:me/repo.git (fetch)\norigin\tgit@github.com:me/repo.git (push)\n";

pub const PUSH_REJECTED: &str = "To github.com:me/repo.git\r\n ! [rejected]        main -> main (non-fast-forward)\r\n\r\nerror: failed to push some refs to 'github.com:me/repo.git'\r\n";

/// Build `count` log entries in the shape `LOG_FORMAT` produces
pub fn generate_log(count: usize) -> String {
    (0..count)
        .map(|i| {
            format!(
                "{{\"commit\": \"{:040x}\", \"author\": \"Test User <test@example.com>\", \"date\": \"Tue Oct 13 14:03:12 2026 +0200\", \"message\": \"Commit {}\"}},",
                i, i
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
