//! Working-directory file operations.
//!
//! The tracked namespace is flat: only plain files directly under the
//! repository root participate in version control. The store directory
//! itself is never listed.

use crate::areas::STORE_DIR;
use crate::artifacts::objects::blob::Blob;
use crate::error::Result;
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, new)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    /// Names of the plain files at the repository root, sorted.
    pub fn list_plain_files(&self) -> Result<Vec<String>> {
        let files = WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name != STORE_DIR)
            .collect();

        Ok(files)
    }

    pub fn file_exists(&self, filename: &str) -> bool {
        self.path.join(filename).exists()
    }

    pub fn is_plain_file(&self, filename: &str) -> bool {
        self.path.join(filename).is_file()
    }

    pub fn read_blob(&self, filename: &str) -> Result<Blob> {
        let path = self.path.join(filename);
        let data = std::fs::read(&path)
            .with_context(|| format!("unable to read working file {}", path.display()))?;

        Ok(Blob::new(Bytes::from(data)))
    }

    pub fn write_file(&self, filename: &str, data: &[u8]) -> Result<()> {
        let path = self.path.join(filename);
        std::fs::write(&path, data)
            .with_context(|| format!("unable to write working file {}", path.display()))?;

        Ok(())
    }

    /// Delete a working file, but only when it exists as a plain file.
    /// Directories and already-missing files are left untouched.
    pub fn remove_file(&self, filename: &str) -> Result<()> {
        let path = self.path.join(filename);
        if path.is_file() {
            std::fs::remove_file(&path)
                .with_context(|| format!("unable to delete working file {}", path.display()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;
    use assert_fs::TempDir;

    fn workspace(dir: &TempDir) -> Workspace {
        Workspace::new(dir.path().to_path_buf().into_boxed_path())
    }

    #[test]
    fn lists_plain_files_sorted_and_skips_the_store() {
        let dir = TempDir::new().unwrap();
        dir.child("b.txt").write_str("b").unwrap();
        dir.child("a.txt").write_str("a").unwrap();
        dir.child(STORE_DIR).create_dir_all().unwrap();
        dir.child("sub").create_dir_all().unwrap();
        dir.child("sub/nested.txt").write_str("hidden").unwrap();

        let files = workspace(&dir).list_plain_files().unwrap();
        assert_eq!(files, vec!["a.txt".to_string(), "b.txt".to_string()]);
    }

    #[test]
    fn remove_file_only_deletes_plain_files() {
        let dir = TempDir::new().unwrap();
        dir.child("a.txt").write_str("a").unwrap();
        dir.child("subdir").create_dir_all().unwrap();

        let workspace = workspace(&dir);
        workspace.remove_file("a.txt").unwrap();
        workspace.remove_file("a.txt").unwrap();
        workspace.remove_file("subdir").unwrap();

        dir.child("a.txt").assert(predicates::path::missing());
        dir.child("subdir").assert(predicates::path::is_dir());
    }
}
