//! Per-file three-way merge resolution.
//!
//! Each filename is resolved independently from the blob hashes it has at
//! the split point, in the current branch head, and in the given branch
//! head. Absence is a distinct value: a file deleted on one side compares
//! unequal to every hash.

use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;

/// Outcome of resolving one filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileResolution {
    /// Take the given branch's version and stage it for addition.
    TakeGiven,
    /// Both sides changed the file in different ways; write conflict
    /// markers and stage the result.
    Conflict,
    /// Delete the file from the working directory and stage the removal.
    Remove,
    /// Leave the working directory and index untouched.
    Keep,
}

/// Resolve one filename from its `(split, current, given)` blob hashes.
///
/// Rules apply in order; the first match wins:
/// 1. unchanged here, changed there: take the given version
/// 2. changed differently on both sides: conflict
/// 3. absent from the split point and the given branch: keep
/// 4. absent from the split point, present in the given branch: take it
/// 5. unchanged here, deleted there: remove
/// Anything else keeps the current version.
pub fn resolve_file(
    split: Option<&ObjectId>,
    current: Option<&ObjectId>,
    given: Option<&ObjectId>,
) -> FileResolution {
    if let (Some(s), Some(c), Some(g)) = (split, current, given) {
        if s == c && s != g {
            return FileResolution::TakeGiven;
        }
    }

    if split != current && split != given && current != given {
        return FileResolution::Conflict;
    }

    match (split, given) {
        (None, None) => FileResolution::Keep,
        (None, Some(_)) => FileResolution::TakeGiven,
        (Some(s), None) if Some(s) == current => FileResolution::Remove,
        _ => FileResolution::Keep,
    }
}

/// Conflict marker envelope written into the working directory.
///
/// The layout is fixed: `<<<<<<< HEAD`, the current contents (empty when
/// the current branch does not track the file), `=======`, the given
/// contents, `>>>>>>>`. No newline is added beyond the three marker
/// lines.
pub fn conflict_file_contents(current: Option<&[u8]>, given: Option<&[u8]>) -> Bytes {
    let mut contents = Vec::new();
    contents.extend_from_slice(b"<<<<<<< HEAD\n");
    if let Some(data) = current {
        contents.extend_from_slice(data);
    }
    contents.extend_from_slice(b"=======\n");
    if let Some(data) = given {
        contents.extend_from_slice(data);
    }
    contents.extend_from_slice(b">>>>>>>\n");
    Bytes::from(contents)
}
