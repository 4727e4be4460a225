use crate::areas::repository::Repository;
use crate::artifacts::status::inspector::Inspector;
use crate::error::Result;
use std::io::Write;

impl Repository {
    pub fn status(&mut self) -> Result<()> {
        let mut index = self.index();
        index.rehydrate()?;

        let report = Inspector::new(self).report(&index)?;
        write!(self.writer(), "{report}")?;

        Ok(())
    }
}
