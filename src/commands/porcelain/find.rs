use crate::areas::repository::Repository;
use crate::error::{Error, Result};
use std::io::Write;

impl Repository {
    /// Print the hash of every commit whose message equals `message`.
    pub fn find(&mut self, message: &str) -> Result<()> {
        let mut found = false;

        for oid in self.database().list_commit_ids()? {
            if self.database().commit(&oid)?.message() == message {
                writeln!(self.writer(), "{oid}")?;
                found = true;
            }
        }

        if !found {
            return Err(Error::NoCommitWithMessage);
        }

        Ok(())
    }
}
