//! Encoded audio formats.
//!
//! A format is something like a container or codec which can decode a stream
//! of bytes into samples. Decoders are looked up by sniffing the leading
//! bytes of the stream against the magic prefix of every format in a
//! [Registry].

use std::fmt;

use samples_core::{ReadSeeker, Result, Writer};

mod registry;
pub use self::registry::{Formats, Registry};

/// The configuration of an audio stream.
///
/// # Examples
///
/// ```
/// use samples::format::Config;
///
/// let config = Config {
///     sample_rate: 44100,
///     channels: 2,
/// };
///
/// assert_eq!(config.to_string(), "Config(SampleRate=44100, Channels=2)");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    /// The number of samples per second of each channel in the stream, like
    /// `44100` for compact disc quality.
    pub sample_rate: usize,
    /// The number of interleaved channels in the stream.
    pub channels: usize,
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config(SampleRate={}, Channels={})",
            self.sample_rate, self.channels
        )
    }
}

/// A decoder of an encoded audio stream.
///
/// Decoders are constructed by the factory passed to [Registry::register].
pub trait Decoder: ReadSeeker {
    /// The configuration of the decoded stream.
    fn config(&self) -> Config;
}

/// An encoder of an audio stream.
pub trait Encoder: Writer {
    /// Finalize the encoded stream.
    ///
    /// This must be called once all samples have been written, or the encoded
    /// data might be incomplete. What happens when writing to a closed encoder
    /// depends on the encoder.
    fn close(&mut self) -> Result<()>;
}
