//! File content blob.
//!
//! A blob is an opaque byte sequence. Its identity is the SHA-1 of the
//! raw bytes, with no header or framing, so the stored form is the file
//! content itself.

use crate::artifacts::objects::object::{Object, Packable};
use crate::error::Result;
use bytes::Bytes;
use derive_new::new;

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct Blob {
    data: Bytes,
}

impl Blob {
    pub fn data(&self) -> &Bytes {
        &self.data
    }
}

impl Packable for Blob {
    fn serialize(&self) -> Result<Bytes> {
        Ok(self.data.clone())
    }
}

impl Object for Blob {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_is_the_sha1_of_the_raw_bytes() {
        // sha1("hello\n"), computed independently
        let blob = Blob::new(Bytes::from_static(b"hello\n"));
        assert_eq!(
            blob.object_id().unwrap().as_ref(),
            "f572d396fae9206628714fb2ce00f72e94f2258f"
        );
    }

    #[test]
    fn equal_contents_hash_identically() {
        let first = Blob::new(Bytes::from_static(b"same"));
        let second = Blob::new(Bytes::from_static(b"same"));
        assert_eq!(first.object_id().unwrap(), second.object_id().unwrap());
    }
}
