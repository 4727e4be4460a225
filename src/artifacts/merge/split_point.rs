//! Split-point (latest common ancestor) lookup in the commit graph.
//!
//! The graph is traversed through a parent-loader closure instead of a
//! concrete store, so the algorithm can be exercised against an in-memory
//! graph in tests and against the on-disk database in commands. Merge
//! commits contribute both parents to every traversal.

use crate::artifacts::objects::object_id::ObjectId;
use crate::error::Result;
use std::collections::{HashSet, VecDeque};

/// Finds the split point between two commits.
///
/// `load_parents` returns the parent hashes of a stored commit, first
/// parent first; the initial commit returns an empty list.
pub struct SplitPointFinder<F>
where
    F: Fn(&ObjectId) -> Result<Vec<ObjectId>>,
{
    load_parents: F,
}

impl<F> SplitPointFinder<F>
where
    F: Fn(&ObjectId) -> Result<Vec<ObjectId>>,
{
    pub fn new(load_parents: F) -> Self {
        Self { load_parents }
    }

    /// Every ancestor of `start`, including `start` itself.
    pub fn path_to_root(&self, start: &ObjectId) -> Result<HashSet<ObjectId>> {
        let mut ancestors = HashSet::new();
        let mut pending = vec![start.clone()];

        while let Some(oid) = pending.pop() {
            if !ancestors.insert(oid.clone()) {
                continue;
            }
            pending.extend((self.load_parents)(&oid)?);
        }

        Ok(ancestors)
    }

    /// Latest common ancestor of `a` and `b`.
    ///
    /// Breadth-first from `b`, returning the first commit that is also an
    /// ancestor of `a`. The initial commit is a universal ancestor, so
    /// two commits of the same repository always resolve.
    pub fn find(&self, a: &ObjectId, b: &ObjectId) -> Result<ObjectId> {
        let ancestors = self.path_to_root(a)?;

        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([b.clone()]);
        while let Some(oid) = queue.pop_front() {
            if !visited.insert(oid.clone()) {
                continue;
            }
            if ancestors.contains(&oid) {
                return Ok(oid);
            }
            queue.extend((self.load_parents)(&oid)?);
        }

        Err(anyhow::anyhow!("commits {a} and {b} share no ancestor").into())
    }
}
