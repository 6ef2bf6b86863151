pub mod branch;
pub mod deletion;
pub mod filter;
pub mod git;
pub mod inventory;
