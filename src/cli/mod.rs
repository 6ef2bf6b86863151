pub mod commands;
pub mod parser;

pub use parser::Cli;

use crate::config::Config;
use crate::core::filter::BranchFilter;
use crate::core::git::{GitOperations, GitRepository};
use crate::core::inventory::BranchInventory;
use crate::utils::Result;

pub fn execute_command(cli: Cli) -> Result<()> {
    let config = Config::from_cli(&cli)?;
    let repo = GitRepository::discover()?;
    execute_with_git(&config, &repo)
}

/// Scans, filters and hands the matches to the selected mode.
pub fn execute_with_git<G: GitOperations + ?Sized>(config: &Config, git: &G) -> Result<()> {
    let branches = BranchInventory::new(git, config).list_branches()?;
    let matched = BranchFilter::from_config(config).apply(&branches);

    if config.interactive {
        commands::interactive::execute(config, git, matched)
    } else if config.prune {
        commands::prune::execute(config, git, &matched)
    } else {
        commands::list::execute(config, &matched)
    }
}
