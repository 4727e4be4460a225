//! Staging area (index).
//!
//! The index is two ordered maps over filenames: `additions` (files to
//! include or update in the next commit) and `removals` (files to drop,
//! keyed with the blob hash they had when removal was staged). A filename
//! is never in both maps; putting it into one drops it from the other.
//!
//! ## Persisted format
//!
//! One line per staged entry, additions first, lexicographic within each
//! kind:
//!
//! ```text
//! add <hash> <filename>
//! rm <hash> <filename>
//! ```
//!
//! Callers `rehydrate()` before reading and `write_updates()` after
//! mutating, so every command starts from the persisted state and
//! persists only after its in-memory mutation succeeded.

use crate::artifacts::objects::object_id::ObjectId;
use crate::error::Result;
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::Path;

const ADD_KIND: &str = "add";
const RM_KIND: &str = "rm";

/// One staged action, as exposed by iteration.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum StagedEntry {
    Addition { name: String, oid: ObjectId },
    Removal { name: String, oid: ObjectId },
}

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file.
    path: Box<Path>,
    additions: BTreeMap<String, ObjectId>,
    removals: BTreeMap<String, ObjectId>,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            additions: BTreeMap::new(),
            removals: BTreeMap::new(),
        }
    }

    /// Load the persisted staging state, replacing the in-memory state.
    /// A missing index file means an empty staging area.
    pub fn rehydrate(&mut self) -> Result<()> {
        self.clear();

        if !self.path.is_file() {
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("unable to read index {}", self.path.display()))?;

        for line in content.lines() {
            let mut parts = line.splitn(3, ' ');
            let kind = parts.next().with_context(|| format!("malformed index line: {line}"))?;
            let oid = parts.next().with_context(|| format!("malformed index line: {line}"))?;
            let name = parts.next().with_context(|| format!("malformed index line: {line}"))?;

            let oid = ObjectId::try_parse(oid.to_string())?;
            match kind {
                ADD_KIND => self.additions.insert(name.to_string(), oid),
                RM_KIND => self.removals.insert(name.to_string(), oid),
                _ => return Err(anyhow::anyhow!("unknown index entry kind: {kind}").into()),
            };
        }

        Ok(())
    }

    /// Persist the in-memory staging state.
    pub fn write_updates(&self) -> Result<()> {
        let mut lines = Vec::new();
        for entry in self.entries() {
            let (kind, name, oid) = match &entry {
                StagedEntry::Addition { name, oid } => (ADD_KIND, name, oid),
                StagedEntry::Removal { name, oid } => (RM_KIND, name, oid),
            };
            lines.push(format!("{} {} {}\n", kind, oid.as_ref(), name));
        }

        std::fs::write(&self.path, lines.concat())
            .with_context(|| format!("unable to write index {}", self.path.display()))?;

        Ok(())
    }

    pub fn clear(&mut self) {
        self.additions.clear();
        self.removals.clear();
    }

    pub fn has_changes(&self) -> bool {
        !(self.additions.is_empty() && self.removals.is_empty())
    }

    pub fn put_addition(&mut self, name: &str, oid: ObjectId) {
        self.removals.remove(name);
        self.additions.insert(name.to_string(), oid);
    }

    pub fn drop_addition(&mut self, name: &str) -> Option<ObjectId> {
        self.additions.remove(name)
    }

    pub fn put_removal(&mut self, name: &str, oid: ObjectId) {
        self.additions.remove(name);
        self.removals.insert(name.to_string(), oid);
    }

    pub fn drop_removal(&mut self, name: &str) -> Option<ObjectId> {
        self.removals.remove(name)
    }

    pub fn addition(&self, name: &str) -> Option<&ObjectId> {
        self.additions.get(name)
    }

    pub fn is_staged_for_addition(&self, name: &str) -> bool {
        self.additions.contains_key(name)
    }

    pub fn is_staged_for_removal(&self, name: &str) -> bool {
        self.removals.contains_key(name)
    }

    pub fn additions(&self) -> &BTreeMap<String, ObjectId> {
        &self.additions
    }

    pub fn removals(&self) -> &BTreeMap<String, ObjectId> {
        &self.removals
    }

    /// All staged entries: additions first, then removals, each in
    /// lexicographic filename order.
    pub fn entries(&self) -> impl Iterator<Item = StagedEntry> + '_ {
        let additions = self.additions.iter().map(|(name, oid)| StagedEntry::Addition {
            name: name.clone(),
            oid: oid.clone(),
        });
        let removals = self.removals.iter().map(|(name, oid)| StagedEntry::Removal {
            name: name.clone(),
            oid: oid.clone(),
        });

        additions.chain(removals)
    }

    /// Derive the next commit's blob map from a head snapshot: additions
    /// overwrite, removals delete.
    pub fn apply_to(&self, base: &BTreeMap<String, ObjectId>) -> BTreeMap<String, ObjectId> {
        let mut blobs = base.clone();
        for (name, oid) in &self.additions {
            blobs.insert(name.clone(), oid.clone());
        }
        for name in self.removals.keys() {
            blobs.remove(name);
        }

        blobs
    }
}
