//! The core [samples] traits.
//!
//! If you want to build a component that produces or consumes samples without
//! caring about how they are stored, you can add a dependency directly to these
//! traits instead of depending on all of the [samples] crate.
//!
//! This provides:
//! * The [Sample] trait and its encodings, including the G.711 companding
//!   encodings [ALaw] and [MuLaw].
//! * The [Slice] and [SliceMut] traits, which give access to a sequence of
//!   samples through their [Normalized] form.
//! * The [Reader], [Writer] and [Seek] traits for streams of samples.
//!
//! [samples]: https://docs.rs/samples

#![deny(missing_docs, rustdoc::broken_intra_doc_links)]

mod sample;
pub use self::sample::{Normalized, Sample};

pub mod g711;
pub use self::g711::{ALaw, MuLaw};

pub mod translate;

pub mod raw;

pub mod slice;
pub use self::slice::{Slice, SliceMut};

mod io;
pub use self::io::{ReadSeeker, Reader, Seek, Writer};

mod error;
pub use self::error::{Error, Result};
