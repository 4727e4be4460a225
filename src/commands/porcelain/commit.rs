use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::error::{Error, Result};

impl Repository {
    /// Record a commit from the head snapshot plus the staged changes.
    pub fn commit(&mut self, message: &str) -> Result<()> {
        let mut index = self.index();
        index.rehydrate()?;

        if !index.has_changes() {
            return Err(Error::NoChangesAdded);
        }
        if message.trim().is_empty() {
            return Err(Error::EmptyMessage);
        }

        let head_id = self.head_commit_id()?;
        let head = self.database().commit(&head_id)?;
        let blobs = index.apply_to(head.blobs());

        let commit = Commit::new(message.to_string(), head_id, blobs);
        self.finish_commit(commit, &mut index)
    }

    /// Save a commit, advance the current branch to it, and clear the
    /// index.
    pub(crate) fn finish_commit(&self, commit: Commit, index: &mut Index) -> Result<()> {
        let oid = self.database().store_commit(&commit)?;
        self.refs().set_branch(&self.head_branch()?, &oid)?;

        index.clear();
        index.write_updates()
    }
}
