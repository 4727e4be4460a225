//! User-facing command implementations.

pub(crate) mod porcelain;
