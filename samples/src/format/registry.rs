use std::io::{self, Read};
use std::slice;

use samples_core::{Error, Result};

use crate::format::Decoder;

/// A function which constructs a decoder out of a stream of bytes.
type NewDecoder = Box<dyn Fn(Box<dyn Read>) -> Result<Box<dyn Decoder>>>;

struct Format {
    name: String,
    magic: Vec<u8>,
    new_decoder: NewDecoder,
}

impl Format {
    /// Test if `header` starts with the magic of this format.
    fn matches(&self, header: &[u8]) -> bool {
        let header = match header.get(..self.magic.len()) {
            Some(header) => header,
            None => return false,
        };

        self.magic
            .iter()
            .zip(header)
            .all(|(m, b)| *m == b'?' || m == b)
    }
}

/// A collection of formats that decoders can be looked up in.
///
/// Formats are matched in the order in which they were registered.
///
/// # Examples
///
/// ```
/// use std::io::Read;
///
/// use samples::format::{Config, Decoder, Registry};
/// use samples::{Buffer, Error, Reader, Result, Seek, SliceMut};
///
/// /// Decodes unsigned 8-bit samples following a four byte header.
/// struct Raw(Buffer<u8>);
///
/// impl Reader for Raw {
///     fn read(&mut self, dst: &mut dyn SliceMut) -> Result<usize> {
///         self.0.read(dst)
///     }
/// }
///
/// impl Seek for Raw {
///     fn seek(&mut self, sample: u64) -> Result<()> {
///         self.0.seek(sample)
///     }
/// }
///
/// impl Decoder for Raw {
///     fn config(&self) -> Config {
///         Config { sample_rate: 8000, channels: 1 }
///     }
/// }
///
/// let mut registry = Registry::new();
///
/// registry.register("raw", "RAW?", |mut reader| {
///     let mut data = Vec::new();
///     reader.read_to_end(&mut data)?;
///     let samples = data.get(4..).ok_or(Error::UnexpectedEndOfStream)?;
///     let decoder: Box<dyn Decoder> = Box::new(Raw(Buffer::new(samples.to_vec().into())));
///     Ok(decoder)
/// });
///
/// assert_eq!(registry.sniff(b"RAW1...."), Some("raw"));
/// assert_eq!(registry.sniff(b"WAV1...."), None);
///
/// let (mut decoder, name) = registry.decoder(&b"RAW1\x00\xff"[..])?;
/// assert_eq!(name, "raw");
///
/// let mut out = [0i16; 2];
/// assert_eq!(decoder.read(&mut out)?, 2);
/// assert_eq!(out, [-32767, 32767]);
/// # Ok::<_, Error>(())
/// ```
#[derive(Default)]
pub struct Registry {
    formats: Vec<Format>,
}

impl Registry {
    /// Construct an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a format.
    ///
    /// The `name` of the format is something like `"wav"` or `"ogg"`, and
    /// `magic` is the prefix which identifies its encoded data, where each `?`
    /// matches any one byte.
    ///
    /// When matched, `new_decoder` is called with the stream to decode,
    /// including its magic prefix. It should return [Error::InvalidData] if
    /// the data turns out to be invalid.
    pub fn register<N, M, F>(&mut self, name: N, magic: M, new_decoder: F)
    where
        N: Into<String>,
        M: AsRef<[u8]>,
        F: 'static + Fn(Box<dyn Read>) -> Result<Box<dyn Decoder>>,
    {
        let name = name.into();
        let magic = magic.as_ref().to_vec();
        tracing::debug!(name = %name, magic = ?magic, "registering format");

        self.formats.push(Format {
            name,
            magic,
            new_decoder: Box::new(new_decoder),
        });
    }

    /// Iterate over the names of registered formats in the order they were
    /// registered.
    ///
    /// # Examples
    ///
    /// ```
    /// use samples::format::Registry;
    ///
    /// let mut registry = Registry::new();
    /// registry.register("b", "B", |_| Err(samples::Error::InvalidData));
    /// registry.register("a", "A", |_| Err(samples::Error::InvalidData));
    ///
    /// assert_eq!(registry.formats().collect::<Vec<_>>(), vec!["b", "a"]);
    /// ```
    pub fn formats(&self) -> Formats<'_> {
        Formats {
            iter: self.formats.iter(),
        }
    }

    /// Determine the name of the format whose magic matches the start of
    /// `header`.
    pub fn sniff(&self, header: &[u8]) -> Option<&str> {
        Some(self.find(header)?.name.as_str())
    }

    /// Construct a decoder for the encoded data in `reader`.
    ///
    /// Enough bytes to match the longest magic of any format are read from
    /// `reader` to determine its format. The decoder is handed a stream which
    /// replays those bytes before the rest of `reader`.
    ///
    /// Returns the decoder together with the name of its format, or
    /// [Error::UnknownFormat] if no format matched.
    pub fn decoder<R>(&self, mut reader: R) -> Result<(Box<dyn Decoder>, &str)>
    where
        R: 'static + Read,
    {
        let peek = self.formats.iter().map(|f| f.magic.len()).max().unwrap_or(0);

        let mut header = Vec::with_capacity(peek);
        (&mut reader).take(peek as u64).read_to_end(&mut header)?;

        let format = match self.find(&header) {
            Some(format) => format,
            None => return Err(Error::UnknownFormat),
        };

        tracing::debug!(name = %format.name, "sniffed format");

        let reader: Box<dyn Read> = Box::new(io::Cursor::new(header).chain(reader));
        let decoder = (format.new_decoder)(reader)?;
        Ok((decoder, format.name.as_str()))
    }

    fn find(&self, header: &[u8]) -> Option<&Format> {
        self.formats.iter().find(|f| f.matches(header))
    }
}

/// An iterator over the names of the formats in a [Registry].
///
/// Created with [Registry::formats].
pub struct Formats<'a> {
    iter: slice::Iter<'a, Format>,
}

impl<'a> Iterator for Formats<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.iter.next()?.name.as_str())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
