use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::error::{Error, Result};

impl Repository {
    pub fn add(&mut self, filename: &str) -> Result<()> {
        let mut index = self.index();
        index.rehydrate()?;

        self.stage_file(&mut index, filename)?;
        index.write_updates()
    }

    /// Stage one file for the next commit.
    ///
    /// A file staged for removal is simply unmarked. Otherwise its blob is
    /// stored and recorded as an addition, unless head already tracks the
    /// file at the same content, in which case any stale addition entry is
    /// dropped.
    pub(crate) fn stage_file(&self, index: &mut Index, filename: &str) -> Result<()> {
        if index.drop_removal(filename).is_some() {
            return Ok(());
        }

        if !self.workspace().is_plain_file(filename) {
            return Err(Error::FileDoesNotExist);
        }

        let blob = self.workspace().read_blob(filename)?;
        let oid = self.database().store_blob(&blob)?;

        if self.head_commit()?.blob_id(filename) == Some(&oid) {
            index.drop_addition(filename);
        } else {
            index.put_addition(filename, oid);
        }

        Ok(())
    }
}
