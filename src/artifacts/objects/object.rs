//! Core object traits.
//!
//! Every stored object is addressed by the SHA-1 hash of its serialized
//! bytes. `Packable`/`Unpackable` define the serialized form; `Object`
//! derives the identity from it. Serialization must be deterministic
//! within a process so that logically equal objects hash identically.

use crate::artifacts::objects::object_id::ObjectId;
use crate::error::Result;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::BufRead;

/// Trait for serializing objects into their stored byte form.
pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

/// Trait for deserializing objects from their stored byte form.
pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

/// Content-addressed object.
///
/// The identity is the SHA-1 hash of the serialized content.
pub trait Object: Packable {
    fn object_id(&self) -> Result<ObjectId> {
        let content = self.serialize()?;
        let mut hasher = Sha1::new();
        hasher.update(&content);

        let oid = hasher.finalize();
        ObjectId::try_parse(format!("{oid:x}"))
    }
}
