use crate::areas::repository::Repository;
use crate::error::Result;

impl Repository {
    /// Create a branch pointing at the current head commit. Does not
    /// switch to it.
    pub fn branch(&mut self, name: &str) -> Result<()> {
        let head_id = self.head_commit_id()?;
        self.refs().create_branch(name, &head_id)
    }

    pub fn rm_branch(&mut self, name: &str) -> Result<()> {
        self.refs().delete_branch(name)
    }
}
