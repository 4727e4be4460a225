use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::error::{Error, Result};

impl Repository {
    pub fn rm(&mut self, filename: &str) -> Result<()> {
        let mut index = self.index();
        index.rehydrate()?;

        self.mark_removed(&mut index, filename)?;
        index.write_updates()
    }

    /// Unstage a pending addition and, when the file is tracked by head,
    /// delete the working copy and stage the removal. A file whose removal
    /// is already staged gives no further reason to remove.
    pub(crate) fn mark_removed(&self, index: &mut Index, filename: &str) -> Result<()> {
        let tracked = self.head_commit()?.blob_id(filename).cloned();
        let staged = index.drop_addition(filename);

        if staged.is_none() && (tracked.is_none() || index.is_staged_for_removal(filename)) {
            return Err(Error::NoReasonToRemove);
        }

        if let Some(oid) = tracked {
            self.workspace().remove_file(filename)?;
            index.put_removal(filename, oid);
        }

        Ok(())
    }
}
