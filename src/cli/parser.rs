use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "dusty")]
#[command(about = "A CLI tool to list and prune stale git branches.")]
#[command(
    version,
    long_about = "dusty provides a fast way to clean up your git repository.

It lists local branches with the following metadata, or prunes the ones older than a given age:

BRANCH NAME - AUTHOR NAME, Age: X days, Merged: (bool)

Protected branches (main and master) are always excluded."
)]
pub struct Cli {
    /// Only show branches older than this many days
    #[arg(long, short = 'a', default_value_t = 0, allow_negative_numbers = true)]
    pub age: i64,

    /// Prune matching branches instead of listing them
    #[arg(long, short = 'p')]
    pub prune: bool,

    /// Only show merged branches
    #[arg(long, short = 'm')]
    pub merged: bool,

    /// Force-delete when pruning, even with unmerged commits (destructive)
    #[arg(long, short = 'f', requires = "prune")]
    pub force: bool,

    /// Skip the confirmation prompt for forced pruning
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Review matching branches in an interactive terminal view
    #[arg(long, short = 'i', conflicts_with = "prune")]
    pub interactive: bool,

    /// Keep the interactive view open after the last branch is deleted
    #[arg(long, requires = "interactive")]
    pub keep_open: bool,

    /// Print matching branches as JSON (listing only)
    #[arg(long, conflicts_with_all = ["interactive", "prune"])]
    pub json: bool,

    /// Additional branch name to protect from listing and pruning (repeatable)
    #[arg(long = "protect", value_name = "NAME")]
    pub protect: Vec<String>,
}
