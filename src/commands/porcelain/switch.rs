use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::error::{Error, Result};

impl Repository {
    /// Check out a branch: project its head snapshot onto the working
    /// directory, point head at it, and clear the index.
    pub fn switch(&mut self, name: &str) -> Result<()> {
        if !self.refs().branch_exists(name) {
            return Err(Error::NoSuchBranchOnSwitch);
        }
        if self.head_branch()? == name {
            return Err(Error::AlreadyOnBranch);
        }

        let old = self.head_commit()?;
        let new_id = self.refs().read_branch(name)?;
        let new = self.database().commit(&new_id)?;

        let migration = Migration::new(self.workspace(), self.database(), &old, &new);
        migration.check_untracked()?;
        migration.apply()?;

        self.refs().set_head(name)?;

        let mut index = self.index();
        index.clear();
        index.write_updates()
    }
}
