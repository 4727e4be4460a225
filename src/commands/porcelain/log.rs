use crate::areas::repository::Repository;
use crate::error::Result;
use std::io::Write;

impl Repository {
    /// Walk the first-parent chain from the head commit, printing each
    /// commit's display form.
    pub fn log(&mut self) -> Result<()> {
        let mut current = Some(self.head_commit_id()?);

        while let Some(oid) = current {
            let commit = self.database().commit(&oid)?;
            writeln!(self.writer(), "{}", commit.display(&oid))?;
            current = commit.first_parent().cloned();
        }

        Ok(())
    }

    /// Print every commit in the store, in listing order.
    pub fn global_log(&mut self) -> Result<()> {
        for oid in self.database().list_commit_ids()? {
            let commit = self.database().commit(&oid)?;
            writeln!(self.writer(), "{}", commit.display(&oid))?;
        }

        Ok(())
    }
}
