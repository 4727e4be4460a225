use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::error::Result;

impl Repository {
    /// Move the current branch to the commit named by an abbreviated id,
    /// projecting its snapshot onto the working directory.
    pub fn reset(&mut self, fragment: &str) -> Result<()> {
        let oid = self.database().resolve_fragment(fragment)?;
        let target = self.database().commit(&oid)?;
        let head = self.head_commit()?;

        let migration = Migration::new(self.workspace(), self.database(), &head, &target);
        migration.check_untracked()?;
        migration.apply()?;

        self.refs().set_branch(&self.head_branch()?, &oid)?;

        let mut index = self.index();
        index.clear();
        index.write_updates()
    }
}
