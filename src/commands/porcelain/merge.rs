use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::merge::resolver::{conflict_file_contents, resolve_file, FileResolution};
use crate::artifacts::merge::split_point::SplitPointFinder;
use crate::artifacts::objects::commit::Commit;
use crate::error::{Error, Result};
use std::collections::BTreeSet;

impl Repository {
    /// Three-way merge of the given branch into the current one.
    ///
    /// Preconditions run in order before anything is mutated. Once the
    /// per-file resolutions are applied, the merge commit is written and
    /// the branch advanced even when conflicts were found; the conflict
    /// outcome surfaces afterwards.
    pub fn merge(&mut self, given_branch: &str) -> Result<()> {
        let mut index = self.index();
        index.rehydrate()?;
        if index.has_changes() {
            return Err(Error::UncommittedChanges);
        }

        let head_branch = self.head_branch()?;
        if given_branch == head_branch {
            return Err(Error::MergeWithSelf);
        }
        if !self.refs().branch_exists(given_branch) {
            return Err(Error::NoSuchBranch);
        }

        let current_id = self.head_commit_id()?;
        let given_id = self.refs().read_branch(given_branch)?;
        let current = self.database().commit(&current_id)?;
        let given = self.database().commit(&given_id)?;

        Migration::new(self.workspace(), self.database(), &current, &given).check_untracked()?;

        let split_id = {
            let database = self.database();
            let finder = SplitPointFinder::new(|oid| database.parent_ids(oid));
            finder.find(&current_id, &given_id)?
        };

        if split_id == given_id {
            return Err(Error::GivenBranchIsAncestor);
        }
        if split_id == current_id {
            // Fast-forward: the current branch catches up to the given
            // head, then the working directory follows it.
            self.refs().set_branch(&head_branch, &given_id)?;
            drop(index);
            self.switch(given_branch)?;
            return Err(Error::FastForwarded);
        }

        let split = self.database().commit(&split_id)?;

        let mut filenames = BTreeSet::new();
        filenames.extend(split.tracked_files().cloned());
        filenames.extend(current.tracked_files().cloned());
        filenames.extend(given.tracked_files().cloned());

        let mut conflict = false;
        for filename in &filenames {
            let resolution = resolve_file(
                split.blob_id(filename),
                current.blob_id(filename),
                given.blob_id(filename),
            );

            match resolution {
                FileResolution::TakeGiven => {
                    self.restore_and_stage(&mut index, &given, filename)?;
                }
                FileResolution::Remove => {
                    self.mark_removed(&mut index, filename)?;
                }
                FileResolution::Conflict => {
                    let current_data = match current.blob_id(filename) {
                        Some(oid) => Some(self.database().load_blob(oid)?),
                        None => None,
                    };
                    let given_data = match given.blob_id(filename) {
                        Some(oid) => Some(self.database().load_blob(oid)?),
                        None => None,
                    };

                    let contents =
                        conflict_file_contents(current_data.as_deref(), given_data.as_deref());
                    self.workspace().write_file(filename, &contents)?;
                    self.stage_file(&mut index, filename)?;
                    conflict = true;
                }
                FileResolution::Keep => {}
            }
        }

        let blobs = index.apply_to(current.blobs());
        let message = format!("Merged {given_branch} into {head_branch}.");
        let merge_commit = Commit::new_merge(message, current_id, given_id, blobs);
        self.finish_commit(merge_commit, &mut index)?;

        if conflict {
            return Err(Error::MergeConflict);
        }

        Ok(())
    }
}
