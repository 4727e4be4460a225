use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::error::{Error, Result};
use anyhow::Context;
use std::fs;

const DEFAULT_BRANCH: &str = "main";

impl Repository {
    /// Create the store layout, the initial commit, and the default
    /// branch, and point head at it.
    pub fn init(&mut self) -> Result<()> {
        if self.is_initialized() {
            return Err(Error::AlreadyInitialized);
        }

        fs::create_dir_all(self.database().commits_path())
            .context("unable to create the object store")?;
        fs::create_dir_all(self.refs().pointers_path())
            .context("unable to create the branch pointer store")?;

        if !self.refs().head_exists() {
            let oid = self.database().store_commit(&Commit::initial())?;
            self.refs().create_branch(DEFAULT_BRANCH, &oid)?;
            self.refs().set_head(DEFAULT_BRANCH)?;
        }

        Ok(())
    }
}
