pub mod test_helpers {
    use crate::core::branch::BranchRecord;
    use crate::core::git::{GitOperations, GitRepository};
    use crate::utils::{DustyError, Result};
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::fs;
    use std::path::Path;
    use std::process::Command;
    use tempfile::TempDir;

    pub fn git(repo_path: &Path, args: &[&str]) {
        let status = Command::new("git")
            .current_dir(repo_path)
            .args(args)
            .status()
            .expect("Failed to run git");
        assert!(status.success(), "git {} failed", args.join(" "));
    }

    pub fn setup_test_repo() -> (TempDir, GitRepository) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo_path = temp_dir.path();

        git(repo_path, &["init", "--initial-branch=main"]);
        git(repo_path, &["config", "user.name", "Test User"]);
        git(repo_path, &["config", "user.email", "test@example.com"]);
        git(repo_path, &["config", "commit.gpgsign", "false"]);

        fs::write(repo_path.join("README.md"), "# Test Repository")
            .expect("Failed to write README");
        git(repo_path, &["add", "README.md"]);
        git(repo_path, &["commit", "-m", "Initial commit"]);

        let repo = GitRepository::discover_from(repo_path).expect("Failed to discover repo");
        (temp_dir, repo)
    }

    pub fn record(name: &str, age_days: i64, merged: bool) -> BranchRecord {
        BranchRecord {
            name: name.to_string(),
            author: "Test User".to_string(),
            age_days,
            merged,
            upstream: None,
        }
    }

    /// What the fake collaborator does when asked to delete a given branch.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum FakeFailure {
        Unmerged,
        CheckedOut,
        /// git ran but exited with a message nothing recognizes.
        GitError,
        /// git could not be started.
        Invocation,
    }

    /// In-memory stand-in for the git binary.
    #[derive(Default)]
    pub struct FakeGit {
        pub refs_output: RefCell<String>,
        pub merged: RefCell<Vec<String>>,
        pub current: RefCell<String>,
        pub failures: RefCell<HashMap<String, FakeFailure>>,
        pub fail_listing: Cell<bool>,
        pub deleted: RefCell<Vec<(String, bool)>>,
        pub list_refs_calls: Cell<usize>,
        pub list_merged_calls: Cell<usize>,
    }

    impl FakeGit {
        pub fn new() -> Self {
            let fake = Self::default();
            *fake.current.borrow_mut() = "main".to_string();
            fake
        }

        pub fn with_refs(lines: &[&str]) -> Self {
            let fake = Self::new();
            *fake.refs_output.borrow_mut() = lines.join("\n");
            fake
        }

        pub fn with_merged(self, names: &[&str]) -> Self {
            *self.merged.borrow_mut() = names.iter().map(|n| n.to_string()).collect();
            self
        }

        pub fn failing_on(self, name: &str, failure: FakeFailure) -> Self {
            self.failures
                .borrow_mut()
                .insert(name.to_string(), failure);
            self
        }

        pub fn branch_names(&self) -> Vec<String> {
            self.refs_output
                .borrow()
                .lines()
                .filter_map(|line| line.split('|').next())
                .map(|name| name.to_string())
                .collect()
        }

        pub fn deleted_names(&self) -> Vec<String> {
            self.deleted
                .borrow()
                .iter()
                .map(|(name, _)| name.clone())
                .collect()
        }
    }

    impl GitOperations for FakeGit {
        fn list_refs(&self) -> Result<String> {
            self.list_refs_calls.set(self.list_refs_calls.get() + 1);
            if self.fail_listing.get() {
                return Err(DustyError::git_operation("fatal: not a git repository"));
            }
            Ok(self.refs_output.borrow().clone())
        }

        fn list_merged(&self) -> Result<Vec<String>> {
            self.list_merged_calls.set(self.list_merged_calls.get() + 1);
            if self.fail_listing.get() {
                return Err(DustyError::git_operation("fatal: not a git repository"));
            }
            Ok(self.merged.borrow().clone())
        }

        fn delete_branch(&self, name: &str, force: bool) -> Result<()> {
            match self.failures.borrow().get(name).copied() {
                Some(FakeFailure::Unmerged) if !force => {
                    return Err(DustyError::deletion_rejected(
                        name,
                        format!("error: the branch '{}' is not fully merged", name),
                    ));
                }
                Some(FakeFailure::CheckedOut) => return Err(DustyError::checked_out(name)),
                Some(FakeFailure::GitError) => {
                    return Err(DustyError::git_operation(format!(
                        "Failed to delete branch '{}': Fehler: unbekannt",
                        name
                    )));
                }
                Some(FakeFailure::Invocation) => {
                    return Err(DustyError::git_unavailable("No such file or directory"));
                }
                _ => {}
            }

            if !self.branch_names().iter().any(|n| n == name) {
                return Err(DustyError::not_found(name));
            }

            let remaining: Vec<String> = self
                .refs_output
                .borrow()
                .lines()
                .filter(|line| line.split('|').next() != Some(name))
                .map(|line| line.to_string())
                .collect();
            *self.refs_output.borrow_mut() = remaining.join("\n");
            self.deleted.borrow_mut().push((name.to_string(), force));
            Ok(())
        }

        fn current_branch(&self) -> Result<String> {
            Ok(self.current.borrow().clone())
        }
    }
}
