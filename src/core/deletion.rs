use crate::core::branch::BranchRecord;
use crate::core::git::GitOperations;
use crate::utils::{DustyError, Result};
use tracing::{info, warn};

/// Deletes local branches through the git collaborator.
pub struct DeletionService<'a, G: GitOperations + ?Sized> {
    git: &'a G,
}

/// Outcome of pruning a batch of branches.
#[derive(Debug, Default)]
pub struct PruneReport {
    pub deleted: Vec<String>,
    pub failed: Vec<(String, DustyError)>,
    /// Branches never attempted because the batch stopped early.
    pub skipped: Vec<String>,
}

impl PruneReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && self.skipped.is_empty()
    }
}

impl<'a, G: GitOperations + ?Sized> DeletionService<'a, G> {
    pub fn new(git: &'a G) -> Self {
        Self { git }
    }

    /// Deletes one branch. A safe delete defers to git's own unmerged-commit check.
    pub fn delete(&self, name: &str, force: bool) -> Result<()> {
        info!(event = "core.deletion.started", branch = name, force = force);

        if let Ok(current) = self.git.current_branch() {
            if current == name {
                warn!(event = "core.deletion.checked_out", branch = name);
                return Err(DustyError::checked_out(name));
            }
        }

        match self.git.delete_branch(name, force) {
            Ok(()) => {
                info!(event = "core.deletion.completed", branch = name);
                Ok(())
            }
            Err(e) => {
                warn!(event = "core.deletion.failed", branch = name, error = %e);
                Err(e)
            }
        }
    }

    /// Deletes each record in order. Any failure git reports for one branch is
    /// collected and the batch moves on; only a git binary that cannot be
    /// started stops the remaining batch.
    pub fn prune<F>(&self, records: &[BranchRecord], force: bool, mut on_result: F) -> PruneReport
    where
        F: FnMut(&str, &Result<()>),
    {
        let mut report = PruneReport::default();

        for (index, record) in records.iter().enumerate() {
            let result = self.delete(&record.name, force);
            on_result(&record.name, &result);

            match result {
                Ok(()) => report.deleted.push(record.name.clone()),
                Err(e) if !e.is_git_unavailable() => report.failed.push((record.name.clone(), e)),
                Err(e) => {
                    report.failed.push((record.name.clone(), e));
                    report.skipped = records[index + 1..]
                        .iter()
                        .map(|r| r.name.clone())
                        .collect();
                    break;
                }
            }
        }

        report
    }
}
