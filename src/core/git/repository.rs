use crate::utils::error::{DustyError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

/// `for-each-ref` format producing `name|author|date|upstream` per local branch.
pub const REF_FORMAT: &str =
    "--format=%(refname:short)|%(authorname)|%(authordate:iso)|%(upstream:short)";

#[derive(Debug, Clone)]
pub struct GitRepository {
    pub root: PathBuf,
}

impl GitRepository {
    pub fn discover() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            DustyError::git_operation(format!("Failed to get current directory: {}", e))
        })?;

        Self::discover_from(&current_dir)
    }

    pub fn discover_from(path: &Path) -> Result<Self> {
        let output = git_command(path)
            .args(["rev-parse", "--show-toplevel"])
            .output()
            .map_err(|e| DustyError::git_unavailable(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DustyError::git_operation(format!(
                "Not a git repository or git not found: {}",
                stderr.trim()
            )));
        }

        let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(Self {
            root: PathBuf::from(root),
        })
    }

    pub fn get_current_branch(&self) -> Result<String> {
        execute_git_command(self, &["rev-parse", "--abbrev-ref", "HEAD"])
    }

    pub fn list_refs(&self) -> Result<String> {
        execute_git_command(self, &["for-each-ref", REF_FORMAT, "refs/heads/"])
    }

    /// Names of local branches reachable from HEAD. `for-each-ref` is plumbing,
    /// so `color.ui` and `column.ui` never leak into the names.
    pub fn list_merged(&self) -> Result<Vec<String>> {
        let output = execute_git_command(
            self,
            &[
                "for-each-ref",
                "--merged=HEAD",
                "--format=%(refname:short)",
                "refs/heads/",
            ],
        )?;
        Ok(output
            .lines()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| name.to_string())
            .collect())
    }

    pub fn delete_branch(&self, name: &str, force: bool) -> Result<()> {
        let flag = if force { "-D" } else { "-d" };
        let output = run_git(self, &["branch", flag, name])?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(classify_delete_failure(name, stderr.trim()))
    }
}

/// Builds a git invocation with untranslated messages, since deletion failures
/// are classified from stderr.
fn git_command(dir: &Path) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir)
        .env("LC_ALL", "C")
        .env_remove("LANGUAGE");
    cmd
}

fn run_git(repo: &GitRepository, args: &[&str]) -> Result<Output> {
    debug!(event = "core.git.command_started", args = %args.join(" "));

    git_command(&repo.root)
        .args(args)
        .output()
        .map_err(|e| DustyError::git_unavailable(e.to_string()))
}

pub fn execute_git_command(repo: &GitRepository, args: &[&str]) -> Result<String> {
    let output = run_git(repo, args)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(DustyError::git_operation(format!(
            "Git command failed ({}): {}",
            args.join(" "),
            stderr.trim()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.trim().to_string())
}

/// Maps `git branch -d/-D` stderr onto the deletion error taxonomy.
pub fn classify_delete_failure(branch: &str, stderr: &str) -> DustyError {
    let lowered = stderr.to_lowercase();

    if lowered.contains("not found") {
        DustyError::not_found(branch)
    } else if lowered.contains("checked out") || lowered.contains("used by worktree") {
        DustyError::checked_out(branch)
    } else if lowered.contains("not fully merged") {
        DustyError::deletion_rejected(branch, stderr)
    } else {
        DustyError::git_operation(format!("Failed to delete branch '{}': {}", branch, stderr))
    }
}
