//! A crate for working with audio samples regardless of how they are encoded.
//!
//! This is made up of two parts:
//!
//! * [samples-core] - The core crate, which defines the [Sample] trait with
//!   its encodings and the traits for accessing and streaming samples.
//! * [samples] - This crate, which provides sample containers, an in-memory
//!   sample stream, and a registry of encoded formats.
//!
//! Every sample can be converted to and from a [Normalized] `f64`, which
//! conventionally lies in the range `-1.0` to `1.0`. This is what allows
//! samples of different encodings to be copied into each other without either
//! side knowing about the other. The following encodings are supported:
//!
//! * `u8` - unsigned 8-bit linear PCM.
//! * `i16` and `i32` - signed linear PCM.
//! * `f32` and `f64` - floating point samples.
//! * [ALaw] and [MuLaw] - 8-bit G.711 companded samples.
//!
//! <br>
//!
//! ## Containers
//!
//! A [Samples][buf::Samples] container stores samples of one encoding. It
//! implements [Slice] and [SliceMut], which give access to any sequence of
//! samples through their normalized form, and so do plain slices, arrays and
//! vectors of samples.
//!
//! Copying between two sequences only converts samples if their encodings
//! differ. Otherwise they are copied as memory.
//!
//! ```rust
//! use samples::{MuLaw, Slice};
//!
//! let pcm = samples::samples![0i16, 8192, -8192, i16::MAX];
//! let mut companded = samples::samples![MuLaw(0); 4];
//!
//! assert_eq!(pcm.copy_into(&mut companded), 4);
//!
//! assert_eq!(companded[0], MuLaw(0xff));
//! assert_eq!(companded[3], MuLaw(0x80));
//! assert!((companded.at(1) - 0.25).abs() < 0.01);
//! ```
//!
//! <br>
//!
//! ## Streams
//!
//! Sources and sinks of samples implement the [Reader] and [Writer] traits. A
//! [Buffer] is an in-memory stream which is both, and which grows as samples
//! are written to it.
//!
//! ```rust
//! use samples::{Buffer, Error};
//!
//! let mut buf = Buffer::new(samples::samples![0u8; 0]);
//!
//! buf.write_sample(0.5);
//! buf.write_sample(-0.5);
//!
//! assert!((buf.read_sample()? - 0.5).abs() < 0.01);
//! assert!((buf.read_sample()? + 0.5).abs() < 0.01);
//!
//! // A drained source signals the end of the stream.
//! assert!(matches!(buf.read_sample(), Err(Error::EndOfStream)));
//! # Ok::<_, Error>(())
//! ```
//!
//! [samples-core]: https://docs.rs/samples-core
//! [samples]: https://docs.rs/samples

#![deny(missing_docs, rustdoc::broken_intra_doc_links)]
#![allow(clippy::should_implement_trait)]

#[macro_use]
mod macros;
pub mod buf;
pub mod format;
pub mod io;

#[cfg(test)]
mod tests;

pub use self::io::Buffer;
pub use samples_core::*;
