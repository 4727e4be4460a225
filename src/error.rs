//! Error taxonomy for gitlet commands.
//!
//! Every user-facing failure has a fixed single-line message; the exact
//! strings are part of the command-line contract. `Internal` wraps
//! infrastructure failures (I/O, corrupt store contents) that have no
//! scripted message.
//!
//! `FastForwarded` and `MergeConflict` are informational: the merge has
//! already been applied when they surface. They still travel the error
//! channel so the dispatch loop prints them like any other outcome.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("A Gitlet version-control system already exists in the current directory.")]
    AlreadyInitialized,

    #[error("Not in an initialized Gitlet directory.")]
    NotInitialized,

    #[error("Please enter a command.")]
    EmptyCommand,

    #[error("Incorrect operands.")]
    IncorrectOperands,

    #[error("No command with that name exists.")]
    UnknownCommand,

    #[error("File does not exist.")]
    FileDoesNotExist,

    #[error("No reason to remove the file.")]
    NoReasonToRemove,

    #[error("No changes added to the commit.")]
    NoChangesAdded,

    #[error("Please enter a commit message.")]
    EmptyMessage,

    #[error("A branch with that name already exists.")]
    BranchExists,

    #[error("A branch with that name does not exist.")]
    NoSuchBranch,

    /// `switch` reports a missing branch with different wording than
    /// `rm-branch` and `merge` do.
    #[error("No such branch exists.")]
    NoSuchBranchOnSwitch,

    #[error("Cannot remove the current branch.")]
    CannotRemoveCurrent,

    #[error("No need to switch to the current branch.")]
    AlreadyOnBranch,

    #[error("No commit with that id exists.")]
    NoSuchCommit,

    #[error("File does not exist in that commit.")]
    FileNotInCommit,

    #[error("Found no commit with that message.")]
    NoCommitWithMessage,

    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedWouldBeOverwritten,

    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    #[error("Cannot merge a branch with itself.")]
    MergeWithSelf,

    #[error("Given branch is an ancestor of the current branch.")]
    GivenBranchIsAncestor,

    #[error("Current branch fast-forwarded.")]
    FastForwarded,

    #[error("Encountered a merge conflict.")]
    MergeConflict,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Internal(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_command_contract() {
        assert_eq!(
            Error::UntrackedWouldBeOverwritten.to_string(),
            "There is an untracked file in the way; delete it, or add and commit it first."
        );
        assert_eq!(Error::NoSuchBranch.to_string(), "A branch with that name does not exist.");
        assert_eq!(Error::NoSuchBranchOnSwitch.to_string(), "No such branch exists.");
        assert_eq!(Error::FastForwarded.to_string(), "Current branch fast-forwarded.");
    }

    #[test]
    fn internal_errors_surface_their_source_message() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing blob").into();
        assert!(err.to_string().contains("missing blob"));
    }
}
