//! Status computation over the head snapshot, index, and working tree.

use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::object::Object;
use crate::artifacts::status::report::{ChangeKind, StatusReport};
use crate::error::Result;
use derive_new::new;
use std::collections::BTreeMap;

#[derive(new)]
pub struct Inspector<'r> {
    repository: &'r Repository,
}

impl Inspector<'_> {
    /// Assemble the full status report.
    ///
    /// A file is unstaged-modified when it is tracked at a different hash
    /// than its working copy (and not restaged at the working hash), or
    /// staged for addition at a different hash than its working copy. It
    /// is unstaged-deleted when tracked but absent from the working
    /// directory and not staged for removal. A file is untracked when it
    /// is present but neither staged for addition nor tracked by head.
    pub fn report(&self, index: &Index) -> Result<StatusReport> {
        let head = self.repository.head_commit()?;
        let workspace = self.repository.workspace();
        let workspace_files = workspace.list_plain_files()?;

        let mut unstaged = BTreeMap::new();
        for filename in &workspace_files {
            let working_oid = workspace.read_blob(filename)?.object_id()?;

            if let Some(tracked) = head.blob_id(filename) {
                if *tracked != working_oid && !index.is_staged_for_addition(filename) {
                    unstaged.insert(filename.clone(), ChangeKind::Modified);
                }
            }
            if let Some(staged) = index.addition(filename) {
                if *staged != working_oid {
                    unstaged.insert(filename.clone(), ChangeKind::Modified);
                }
            }
        }
        for filename in head.tracked_files() {
            if !workspace.file_exists(filename) && !index.is_staged_for_removal(filename) {
                unstaged.insert(filename.clone(), ChangeKind::Deleted);
            }
        }

        let untracked = workspace_files
            .into_iter()
            .filter(|filename| !index.is_staged_for_addition(filename) && !head.tracks(filename))
            .collect();

        Ok(StatusReport {
            branches: self.repository.refs().list_branches()?,
            current_branch: self.repository.head_branch()?,
            staged: index.additions().keys().cloned().collect(),
            removed: index.removals().keys().cloned().collect(),
            unstaged,
            untracked,
        })
    }
}
