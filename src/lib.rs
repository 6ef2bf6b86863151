pub mod cli;
pub mod config;
pub mod core;
pub mod ui;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

pub use config::Config;
pub use core::branch::BranchRecord;
pub use core::deletion::DeletionService;
pub use core::filter::BranchFilter;
pub use core::git::{GitOperations, GitRepository};
pub use core::inventory::BranchInventory;
pub use utils::{DustyError, Result};
