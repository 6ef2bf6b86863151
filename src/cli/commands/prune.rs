use crate::config::Config;
use crate::core::branch::BranchRecord;
use crate::core::deletion::{DeletionService, PruneReport};
use crate::core::git::GitOperations;
use crate::utils::{DustyError, Result};
use dialoguer::Confirm;
use std::io::{self, IsTerminal};

pub fn execute<G: GitOperations + ?Sized>(
    config: &Config,
    git: &G,
    branches: &[BranchRecord],
) -> Result<()> {
    if branches.is_empty() {
        return Ok(());
    }

    if config.force && !config.assume_yes && io::stdin().is_terminal() && !confirm_force(branches)? {
        println!("Aborted.");
        return Ok(());
    }

    let report = run(config, git, branches);
    report_result(&report, branches.len())
}

/// Deletes every branch, printing one line per outcome.
fn run<G: GitOperations + ?Sized>(
    config: &Config,
    git: &G,
    branches: &[BranchRecord],
) -> PruneReport {
    DeletionService::new(git).prune(branches, config.force, |name, result| match result {
        Ok(()) => println!("deleted {} branch", name),
        Err(e) => eprintln!("error: {}", e),
    })
}

fn report_result(report: &PruneReport, total: usize) -> Result<()> {
    for name in &report.skipped {
        eprintln!("skipped {}", name);
    }

    if report.is_success() {
        Ok(())
    } else {
        Err(DustyError::PruneIncomplete {
            failed: report.failed.len() + report.skipped.len(),
            total,
        })
    }
}

fn confirm_force(branches: &[BranchRecord]) -> Result<bool> {
    let unmerged = branches.iter().filter(|b| !b.merged).count();

    println!("Force-deleting {} branches:", branches.len());
    for branch in branches {
        println!("  {}", branch.summary_line());
    }
    if unmerged > 0 {
        println!(
            "\n⚠️  {} of them are not merged into HEAD; their commits will only be reachable from the reflog.",
            unmerged
        );
    }

    Confirm::new()
        .with_prompt("Continue?")
        .default(false)
        .interact()
        .map_err(|e| DustyError::terminal(format!("Failed to read confirmation: {}", e)))
}
