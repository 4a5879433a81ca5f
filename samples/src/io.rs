//! Reading and writing streams of samples.
//!
//! The traits that govern this are [Reader], [Writer] and [Seek]. A source
//! signals that it is exhausted with [Error::EndOfStream][crate::Error], which
//! is not considered a failure.
//!
//! [Buffer] is an in-memory stream which implements all of them, and [copy]
//! moves samples from any source into any sink.

pub use samples_core::{ReadSeeker, Reader, Seek, Writer};

mod buffer;
pub use self::buffer::{Buffer, MIN_READ};

mod utils;
pub use self::utils::{copy, COPY_SIZE};
