pub mod error;

pub use error::{DustyError, Result};
