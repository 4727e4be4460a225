//! Content-addressed object database.
//!
//! Blobs live at `objects/<hash>` as raw bytes; commits live at
//! `objects/commits/<hash>` in their serialized form. Writes are
//! idempotent: an object that already exists on disk is never rewritten.
//! Objects are never deleted.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::error::{Error, Result};
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Subdirectory of the object store holding commits.
const COMMITS_DIR: &str = "commits";

#[derive(Debug, new)]
pub struct Database {
    /// Path to the objects directory.
    path: Box<Path>,
}

impl Database {
    /// Path to the commits directory, for store initialization.
    pub fn commits_path(&self) -> PathBuf {
        self.path.join(COMMITS_DIR)
    }

    fn blob_path(&self, oid: &ObjectId) -> PathBuf {
        self.path.join(oid.as_ref())
    }

    fn commit_path(&self, oid: &ObjectId) -> PathBuf {
        self.path.join(COMMITS_DIR).join(oid.as_ref())
    }

    /// Store a blob, returning its id. Duplicate contents are a no-op.
    pub fn store_blob(&self, blob: &Blob) -> Result<ObjectId> {
        let oid = blob.object_id()?;
        let path = self.blob_path(&oid);

        if !path.exists() {
            std::fs::write(&path, blob.data())
                .with_context(|| format!("unable to write blob {}", path.display()))?;
        }

        Ok(oid)
    }

    pub fn load_blob(&self, oid: &ObjectId) -> Result<Bytes> {
        let path = self.blob_path(oid);
        let data = std::fs::read(&path)
            .with_context(|| format!("unable to read blob {}", path.display()))?;

        Ok(Bytes::from(data))
    }

    /// Store a commit, returning its id.
    pub fn store_commit(&self, commit: &Commit) -> Result<ObjectId> {
        let oid = commit.object_id()?;
        let path = self.commit_path(&oid);

        if !path.exists() {
            std::fs::write(&path, commit.serialize()?)
                .with_context(|| format!("unable to write commit {}", path.display()))?;
        }

        Ok(oid)
    }

    pub fn load_commit(&self, oid: &ObjectId) -> Result<Option<Commit>> {
        let path = self.commit_path(oid);
        if !path.is_file() {
            return Ok(None);
        }

        let data = std::fs::read(&path)
            .with_context(|| format!("unable to read commit {}", path.display()))?;

        Ok(Some(Commit::deserialize(Cursor::new(data))?))
    }

    /// Load a commit that is required to exist.
    pub fn commit(&self, oid: &ObjectId) -> Result<Commit> {
        self.load_commit(oid)?.ok_or(Error::NoSuchCommit)
    }

    /// Parent hashes of a stored commit; loader for graph traversals.
    pub fn parent_ids(&self, oid: &ObjectId) -> Result<Vec<ObjectId>> {
        Ok(self.commit(oid)?.parent_ids())
    }

    /// Ids of every stored commit, sorted.
    pub fn list_commit_ids(&self) -> Result<Vec<ObjectId>> {
        let commits_path = self.commits_path();
        let mut ids = std::fs::read_dir(&commits_path)
            .with_context(|| format!("unable to list commits in {}", commits_path.display()))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| ObjectId::try_parse(entry.file_name().to_string_lossy().into_owned()).ok())
            .collect::<Vec<_>>();
        ids.sort();

        Ok(ids)
    }

    /// Resolve an abbreviated commit id.
    ///
    /// Matching is by substring containment over the stored hashes, with
    /// the first match in sorted order winning.
    pub fn resolve_fragment(&self, fragment: &str) -> Result<ObjectId> {
        self.list_commit_ids()?
            .into_iter()
            .find(|oid| oid.as_ref().contains(fragment))
            .ok_or(Error::NoSuchCommit)
    }
}
