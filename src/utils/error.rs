use thiserror::Error;

#[derive(Error, Debug)]
pub enum DustyError {
    #[error("Git operation failed: {message}")]
    GitOperation { message: String },

    #[error("Failed to execute git: {message}")]
    GitUnavailable { message: String },

    #[error("Malformed ref line '{line}': {reason}")]
    MalformedRecord { line: String, reason: String },

    #[error("Branch '{branch}' has unmerged commits: {message}")]
    DeletionRejected { branch: String, message: String },

    #[error("Branch '{branch}' not found")]
    NotFound { branch: String },

    #[error("Branch '{branch}' is currently checked out")]
    CheckedOut { branch: String },

    #[error("{failed} of {total} branches could not be deleted")]
    PruneIncomplete { failed: usize, total: usize },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DustyError>;

impl DustyError {
    pub fn git_operation(message: impl Into<String>) -> Self {
        Self::GitOperation {
            message: message.into(),
        }
    }

    pub fn git_unavailable(message: impl Into<String>) -> Self {
        Self::GitUnavailable {
            message: message.into(),
        }
    }

    pub fn malformed_record(line: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line: line.into(),
            reason: reason.into(),
        }
    }

    pub fn deletion_rejected(branch: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DeletionRejected {
            branch: branch.into(),
            message: message.into(),
        }
    }

    pub fn not_found(branch: impl Into<String>) -> Self {
        Self::NotFound {
            branch: branch.into(),
        }
    }

    pub fn checked_out(branch: impl Into<String>) -> Self {
        Self::CheckedOut {
            branch: branch.into(),
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    /// True when the git binary could not be started at all, as opposed to
    /// git running and refusing one branch.
    pub fn is_git_unavailable(&self) -> bool {
        matches!(self, Self::GitUnavailable { .. })
    }
}
