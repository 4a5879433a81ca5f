//! Owned containers of samples.
//!
//! The primary container is [Samples], a growable sequence of samples of a
//! single [Sample][crate::Sample] encoding. It implements the
//! [Slice][crate::Slice] and [SliceMut][crate::SliceMut] traits, so it can be
//! copied into and out of containers of any other encoding.

mod samples;
pub use self::samples::{Iter, Samples};
