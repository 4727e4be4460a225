use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::error::{Error, Result};

impl Repository {
    /// `restore -- <file>`: restore a file from the head commit.
    pub fn restore_from_head(&mut self, filename: &str) -> Result<()> {
        let head = self.head_commit()?;
        self.restore_file(&head, filename)
    }

    /// `restore <id> -- <file>`: restore a file from the commit named by
    /// an abbreviated id.
    pub fn restore_from_commit(&mut self, fragment: &str, filename: &str) -> Result<()> {
        let oid = self.database().resolve_fragment(fragment)?;
        let commit = self.database().commit(&oid)?;
        self.restore_file(&commit, filename)
    }

    /// Write a file's committed blob back into the working directory.
    /// Does not touch the index.
    pub(crate) fn restore_file(&self, commit: &Commit, filename: &str) -> Result<()> {
        let oid = commit.blob_id(filename).ok_or(Error::FileNotInCommit)?;
        let data = self.database().load_blob(oid)?;

        self.workspace().write_file(filename, &data)
    }

    /// Restore a file and stage it for addition; merge resolutions go
    /// through here.
    pub(crate) fn restore_and_stage(
        &self,
        index: &mut Index,
        commit: &Commit,
        filename: &str,
    ) -> Result<()> {
        self.restore_file(commit, filename)?;
        self.stage_file(index, filename)
    }
}
