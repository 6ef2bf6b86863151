use crate::config::Config;
use crate::core::branch::{BranchRecord, RefLine};
use crate::core::git::GitOperations;
use crate::utils::Result;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Builds branch records from the local refs of a repository.
pub struct BranchInventory<'a, G: GitOperations + ?Sized> {
    git: &'a G,
    config: &'a Config,
}

impl<'a, G: GitOperations + ?Sized> BranchInventory<'a, G> {
    pub fn new(git: &'a G, config: &'a Config) -> Self {
        Self { git, config }
    }

    pub fn list_branches(&self) -> Result<Vec<BranchRecord>> {
        self.list_branches_at(Utc::now())
    }

    /// Scans local branches, ageing them relative to `now`.
    ///
    /// Lines that cannot be parsed are skipped. A failing git call aborts the
    /// whole scan. Output order follows git's ref order.
    pub fn list_branches_at(&self, now: DateTime<Utc>) -> Result<Vec<BranchRecord>> {
        let output = self.git.list_refs()?;

        let parsed: Vec<RefLine> = output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| match RefLine::parse(line) {
                Ok(ref_line) => Some(ref_line),
                Err(e) => {
                    warn!(event = "core.inventory.line_dropped", error = %e);
                    None
                }
            })
            .collect();

        if parsed.is_empty() {
            info!(event = "core.inventory.scan_completed", branches = 0);
            return Ok(Vec::new());
        }

        let merged: HashSet<String> = self.git.list_merged()?.into_iter().collect();

        let records: Vec<BranchRecord> = parsed
            .into_iter()
            .map(|ref_line| {
                let is_merged = merged.contains(&ref_line.name);
                ref_line.into_record(now, is_merged)
            })
            .filter(|record| {
                let protected = self.config.is_protected(&record.name);
                if protected {
                    debug!(event = "core.inventory.protected_skipped", branch = %record.name);
                }
                !protected
            })
            .collect();

        info!(
            event = "core.inventory.scan_completed",
            branches = records.len()
        );
        Ok(records)
    }
}
