//! Branch pointers and the head pointer.
//!
//! Each branch is a file under `branch_pointers/` whose contents are a
//! commit hash. The `head` file holds the name of the active branch;
//! there is no detached state.

use crate::artifacts::objects::object_id::ObjectId;
use crate::error::{Error, Result};
use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Directory holding one pointer file per branch.
const POINTERS_DIR: &str = "branch_pointers";

/// File naming the active branch.
const HEAD_FILE: &str = "head";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the store root (the `.gitlet` directory).
    path: Box<Path>,
}

impl Refs {
    pub fn pointers_path(&self) -> PathBuf {
        self.path.join(POINTERS_DIR)
    }

    fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_FILE)
    }

    fn branch_path(&self, name: &str) -> PathBuf {
        self.pointers_path().join(name)
    }

    pub fn branch_exists(&self, name: &str) -> bool {
        self.branch_path(name).exists()
    }

    /// Create a branch pointing at `oid`.
    pub fn create_branch(&self, name: &str, oid: &ObjectId) -> Result<()> {
        if self.branch_exists(name) {
            return Err(Error::BranchExists);
        }

        self.set_branch(name, oid)
    }

    /// Move an existing (or new) branch pointer to `oid`.
    pub fn set_branch(&self, name: &str, oid: &ObjectId) -> Result<()> {
        let path = self.branch_path(name);
        std::fs::write(&path, oid.as_ref())
            .with_context(|| format!("unable to write branch pointer {}", path.display()))?;

        Ok(())
    }

    pub fn read_branch(&self, name: &str) -> Result<ObjectId> {
        let path = self.branch_path(name);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("unable to read branch pointer {}", path.display()))?;

        ObjectId::try_parse(content.trim().to_string())
    }

    /// Delete a branch pointer. The active branch cannot be deleted.
    pub fn delete_branch(&self, name: &str) -> Result<()> {
        if !self.branch_exists(name) {
            return Err(Error::NoSuchBranch);
        }
        if self.read_head()? == name {
            return Err(Error::CannotRemoveCurrent);
        }

        let path = self.branch_path(name);
        std::fs::remove_file(&path)
            .with_context(|| format!("unable to delete branch pointer {}", path.display()))?;

        Ok(())
    }

    /// Names of all branches, sorted.
    pub fn list_branches(&self) -> Result<Vec<String>> {
        let pointers_path = self.pointers_path();
        let mut branches = std::fs::read_dir(&pointers_path)
            .with_context(|| format!("unable to list branches in {}", pointers_path.display()))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }

    pub fn head_exists(&self) -> bool {
        self.head_path().is_file()
    }

    /// Name of the active branch.
    pub fn read_head(&self) -> Result<String> {
        let path = self.head_path();
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("unable to read head pointer {}", path.display()))?;

        Ok(content.trim().to_string())
    }

    pub fn set_head(&self, branch: &str) -> Result<()> {
        let path = self.head_path();
        std::fs::write(&path, branch)
            .with_context(|| format!("unable to write head pointer {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;

    fn refs() -> (TempDir, Refs) {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(POINTERS_DIR)).unwrap();
        let refs = Refs::new(dir.path().to_path_buf().into_boxed_path());
        (dir, refs)
    }

    fn oid(fill: char) -> ObjectId {
        ObjectId::try_parse(fill.to_string().repeat(40)).unwrap()
    }

    #[test]
    fn branches_point_at_their_commit() {
        let (_dir, refs) = refs();
        refs.create_branch("main", &oid('a')).unwrap();

        assert!(refs.branch_exists("main"));
        assert_eq!(refs.read_branch("main").unwrap(), oid('a'));

        refs.set_branch("main", &oid('b')).unwrap();
        assert_eq!(refs.read_branch("main").unwrap(), oid('b'));
    }

    #[test]
    fn creating_a_duplicate_branch_fails() {
        let (_dir, refs) = refs();
        refs.create_branch("main", &oid('a')).unwrap();

        assert!(matches!(
            refs.create_branch("main", &oid('b')),
            Err(Error::BranchExists)
        ));
    }

    #[test]
    fn the_current_branch_cannot_be_deleted() {
        let (_dir, refs) = refs();
        refs.create_branch("main", &oid('a')).unwrap();
        refs.create_branch("dev", &oid('a')).unwrap();
        refs.set_head("main").unwrap();

        assert!(matches!(refs.delete_branch("main"), Err(Error::CannotRemoveCurrent)));
        assert!(matches!(refs.delete_branch("ghost"), Err(Error::NoSuchBranch)));

        refs.delete_branch("dev").unwrap();
        assert!(!refs.branch_exists("dev"));
    }

    #[test]
    fn branch_listing_is_sorted() {
        let (_dir, refs) = refs();
        refs.create_branch("main", &oid('a')).unwrap();
        refs.create_branch("dev", &oid('a')).unwrap();
        refs.create_branch("api", &oid('a')).unwrap();

        assert_eq!(refs.list_branches().unwrap(), vec!["api", "dev", "main"]);
    }

    #[test]
    fn head_names_the_active_branch() {
        let (_dir, refs) = refs();
        assert!(!refs.head_exists());

        refs.set_head("main").unwrap();
        assert!(refs.head_exists());
        assert_eq!(refs.read_head().unwrap(), "main");
    }
}
