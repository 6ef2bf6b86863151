use crate::utils::error::Result;

pub mod repository;

pub use repository::GitRepository;

/// The narrow set of git interactions the inventory and deletion code rely on.
pub trait GitOperations {
    /// Raw `name|author|date|upstream` lines for every local branch.
    fn list_refs(&self) -> Result<String>;
    /// Short names of the local branches merged into HEAD.
    fn list_merged(&self) -> Result<Vec<String>>;
    fn delete_branch(&self, name: &str, force: bool) -> Result<()>;
    fn current_branch(&self) -> Result<String>;
}

impl GitOperations for GitRepository {
    fn list_refs(&self) -> Result<String> {
        GitRepository::list_refs(self)
    }

    fn list_merged(&self) -> Result<Vec<String>> {
        GitRepository::list_merged(self)
    }

    fn delete_branch(&self, name: &str, force: bool) -> Result<()> {
        GitRepository::delete_branch(self, name, force)
    }

    fn current_branch(&self) -> Result<String> {
        self.get_current_branch()
    }
}
