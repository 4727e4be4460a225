//! Object value types: blobs, commits, and their identifiers.

pub(crate) mod blob;
pub(crate) mod commit;
pub(crate) mod object;
pub(crate) mod object_id;

/// Length of a hex-encoded SHA-1 hash.
pub const OBJECT_ID_LENGTH: usize = 40;
