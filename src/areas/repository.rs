//! Repository facade.
//!
//! Coordinates the database, index, refs, and workspace and carries the
//! output writer commands print through. The repository is used by one
//! actor at a time; interior mutability replaces locking.

use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::areas::STORE_DIR;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::error::Result;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

/// Object database directory name inside the store.
const DATABASE_DIR: &str = "objects";

/// Index file name inside the store.
const INDEX_FILE: &str = "index";

pub struct Repository {
    /// Repository root path.
    path: Box<Path>,
    /// Output writer (stdout in the binary, a buffer in tests).
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    index: RefCell<Index>,
}

impl Repository {
    pub fn new(path: Box<Path>, writer: Box<dyn std::io::Write>) -> Self {
        let store_path = path.join(STORE_DIR);

        let database = Database::new(store_path.join(DATABASE_DIR).into_boxed_path());
        let workspace = Workspace::new(path.clone());
        let refs = Refs::new(store_path.clone().into_boxed_path());
        let index = Index::new(store_path.join(INDEX_FILE).into_boxed_path());

        Repository {
            path,
            writer: RefCell::new(writer),
            database,
            workspace,
            refs,
            index: RefCell::new(index),
        }
    }

    pub fn store_path(&self) -> PathBuf {
        self.path.join(STORE_DIR)
    }

    pub fn is_initialized(&self) -> bool {
        self.store_path().exists()
    }

    pub fn writer(&self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn index(&self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    /// Name of the active branch.
    pub fn head_branch(&self) -> Result<String> {
        self.refs.read_head()
    }

    /// Hash of the active branch's head commit.
    pub fn head_commit_id(&self) -> Result<ObjectId> {
        self.refs.read_branch(&self.head_branch()?)
    }

    /// The active branch's head commit.
    pub fn head_commit(&self) -> Result<Commit> {
        self.database.commit(&self.head_commit_id()?)
    }
}
