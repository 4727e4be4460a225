//! Commit object.
//!
//! A commit is an immutable snapshot record: a message, a timestamp, a
//! parent lineage, and a map from filenames to blob hashes. Filenames are
//! flat; there is no directory nesting.
//!
//! ## Stored format
//!
//! ```text
//! plain                      (or `merge`)
//! parent <hash>              (none for the initial commit; two for merges)
//! timestamp <secs> <offset>
//! blob <hash> <filename>     (one per tracked file, sorted by filename)
//!
//! <message>
//! ```
//!
//! The leading tag makes the plain and merge forms disjoint, so a merge
//! commit can never collide with a plain commit that happens to share its
//! fields. Blob lines follow map order, which keeps the serialization
//! deterministic and the hash stable within a process.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::error::Result;
use anyhow::Context;
use bytes::Bytes;
use chrono::{DateTime, FixedOffset, TimeZone};
use std::collections::BTreeMap;
use std::io::BufRead;

const PLAIN_TAG: &str = "plain";
const MERGE_TAG: &str = "merge";

/// Message given to the commit every fresh repository starts from.
pub const INITIAL_COMMIT_MESSAGE: &str = "initial commit";

/// Parent lineage of a commit.
///
/// `Two` marks a merge commit; the first hash is the branch that was
/// checked out when the merge ran, the second is the branch merged in.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Parents {
    None,
    One(ObjectId),
    Two(ObjectId, ObjectId),
}

impl Parents {
    pub fn first(&self) -> Option<&ObjectId> {
        match self {
            Parents::None => None,
            Parents::One(parent) => Some(parent),
            Parents::Two(first, _) => Some(first),
        }
    }

    fn ids(&self) -> Vec<ObjectId> {
        match self {
            Parents::None => vec![],
            Parents::One(parent) => vec![parent.clone()],
            Parents::Two(first, second) => vec![first.clone(), second.clone()],
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    message: String,
    timestamp: DateTime<FixedOffset>,
    parents: Parents,
    blobs: BTreeMap<String, ObjectId>,
}

impl Commit {
    /// The parentless commit a fresh repository starts from.
    pub fn initial() -> Self {
        Commit {
            message: INITIAL_COMMIT_MESSAGE.to_string(),
            timestamp: chrono::Local::now().fixed_offset(),
            parents: Parents::None,
            blobs: BTreeMap::new(),
        }
    }

    pub fn new(message: String, parent: ObjectId, blobs: BTreeMap<String, ObjectId>) -> Self {
        Commit {
            message,
            timestamp: chrono::Local::now().fixed_offset(),
            parents: Parents::One(parent),
            blobs,
        }
    }

    pub fn new_merge(
        message: String,
        first_parent: ObjectId,
        second_parent: ObjectId,
        blobs: BTreeMap<String, ObjectId>,
    ) -> Self {
        Commit {
            message,
            timestamp: chrono::Local::now().fixed_offset(),
            parents: Parents::Two(first_parent, second_parent),
            blobs,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_merge(&self) -> bool {
        matches!(self.parents, Parents::Two(..))
    }

    /// First parent, the one `log` follows.
    pub fn first_parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    /// All parent hashes, first parent first.
    pub fn parent_ids(&self) -> Vec<ObjectId> {
        self.parents.ids()
    }

    pub fn tracks(&self, filename: &str) -> bool {
        self.blobs.contains_key(filename)
    }

    pub fn blob_id(&self, filename: &str) -> Option<&ObjectId> {
        self.blobs.get(filename)
    }

    pub fn blobs(&self) -> &BTreeMap<String, ObjectId> {
        &self.blobs
    }

    pub fn tracked_files(&self) -> impl Iterator<Item = &String> {
        self.blobs.keys()
    }

    fn readable_timestamp(&self) -> String {
        self.timestamp.format("%a %b %-d %H:%M:%S %Y %z").to_string()
    }

    /// Log entry for this commit.
    ///
    /// Merge commits add a `Merge:` line with both abbreviated parents and
    /// carry a trailing space after the message, matching the historical
    /// output byte for byte.
    pub fn display(&self, oid: &ObjectId) -> String {
        match &self.parents {
            Parents::Two(first, second) => format!(
                "===\ncommit {}\nMerge: {} {}\nDate: {}\n{} \n",
                oid,
                first.to_short_oid(),
                second.to_short_oid(),
                self.readable_timestamp(),
                self.message
            ),
            _ => format!(
                "===\ncommit {}\nDate: {}\n{}\n",
                oid,
                self.readable_timestamp(),
                self.message
            ),
        }
    }
}

impl Packable for Commit {
    fn serialize(&self) -> Result<Bytes> {
        let tag = if self.is_merge() { MERGE_TAG } else { PLAIN_TAG };

        let mut lines = vec![tag.to_string()];
        for parent in self.parents.ids() {
            lines.push(format!("parent {}", parent.as_ref()));
        }
        lines.push(format!(
            "timestamp {} {}",
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        ));
        for (filename, oid) in &self.blobs {
            lines.push(format!("blob {} {}", oid.as_ref(), filename));
        }
        lines.push(String::new());
        lines.push(self.message.clone());

        Ok(Bytes::from(lines.join("\n")))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> Result<Self> {
        let content = reader
            .bytes()
            .collect::<std::result::Result<Vec<u8>, std::io::Error>>()?;
        let content = String::from_utf8(content).context("commit is not valid UTF-8")?;
        let mut lines = content.lines();

        let tag = lines.next().context("commit is missing its tag line")?;

        let mut parent_ids = Vec::new();
        let mut next_line = lines.next().context("commit is missing its timestamp line")?;
        while let Some(parent) = next_line.strip_prefix("parent ") {
            parent_ids.push(ObjectId::try_parse(parent.to_string())?);
            next_line = lines.next().context("commit is missing its timestamp line")?;
        }

        let parents = match (tag, parent_ids.len()) {
            (PLAIN_TAG, 0) => Parents::None,
            (PLAIN_TAG, 1) => Parents::One(parent_ids.remove(0)),
            (MERGE_TAG, 2) => {
                let first = parent_ids.remove(0);
                let second = parent_ids.remove(0);
                Parents::Two(first, second)
            }
            (tag, count) => {
                return Err(
                    anyhow::anyhow!("invalid commit: tag {tag} with {count} parent(s)").into(),
                )
            }
        };

        let timestamp = next_line
            .strip_prefix("timestamp ")
            .context("invalid commit: malformed timestamp line")?;
        let timestamp = parse_timestamp(timestamp)?;

        let mut blobs = BTreeMap::new();
        loop {
            let line = lines.next().context("commit is missing its message")?;
            if line.is_empty() {
                break;
            }
            let entry = line
                .strip_prefix("blob ")
                .context("invalid commit: malformed blob line")?;
            let (oid, filename) = entry
                .split_once(' ')
                .context("invalid commit: malformed blob line")?;
            blobs.insert(filename.to_string(), ObjectId::try_parse(oid.to_string())?);
        }

        let message = lines.collect::<Vec<&str>>().join("\n");

        Ok(Commit {
            message,
            timestamp,
            parents,
            blobs,
        })
    }
}

impl Object for Commit {}

fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    let (seconds, offset) = value
        .split_once(' ')
        .context("invalid commit: malformed timestamp value")?;
    let seconds: i64 = seconds.parse().context("invalid commit: bad epoch seconds")?;
    let offset = parse_offset(offset)?;

    offset
        .timestamp_opt(seconds, 0)
        .single()
        .with_context(|| format!("timestamp {seconds} is out of range"))
        .map_err(Into::into)
}

// Offsets are serialized via `%z`, e.g. `+0000` or `-0800`.
fn parse_offset(value: &str) -> Result<FixedOffset> {
    let parsed = (value.len() == 5 && value.is_ascii())
        .then(|| value.split_at(1))
        .and_then(|(sign, digits)| {
            let hours: i32 = digits[..2].parse().ok()?;
            let minutes: i32 = digits[2..].parse().ok()?;
            let seconds = (hours * 60 + minutes) * 60;
            match sign {
                "+" => FixedOffset::east_opt(seconds),
                "-" => FixedOffset::west_opt(seconds),
                _ => None,
            }
        });

    parsed
        .with_context(|| format!("invalid timezone offset {value}"))
        .map_err(Into::into)
}
