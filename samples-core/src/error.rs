use thiserror::Error;

/// Errors raised by sample sources and sinks.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// No more samples are available.
    ///
    /// This signals the graceful end of a stream and is not a failure. Sources
    /// should only return it once they are exhausted, and never as an
    /// indication that something went wrong.
    #[error("end of stream")]
    EndOfStream,
    /// The end of the stream was encountered in the middle of reading a
    /// fixed-size block or data structure.
    #[error("unexpected end of stream")]
    UnexpectedEndOfStream,
    /// A sink accepted fewer samples than requested without returning an
    /// error of its own.
    #[error("short write")]
    ShortWrite,
    /// Input data is invalid or corrupt.
    #[error("input data is invalid or corrupt")]
    InvalidData,
    /// The encoded data did not match any registered format.
    #[error("unknown format")]
    UnknownFormat,
    /// An I/O error raised by an underlying byte source.
    #[error("i/o error: {0}")]
    Io(
        #[from]
        #[source]
        std::io::Error,
    ),
}

impl Error {
    /// Test if the error marks the graceful end of a stream.
    ///
    /// # Examples
    ///
    /// ```
    /// use samples_core::Error;
    ///
    /// assert!(Error::EndOfStream.is_end_of_stream());
    /// assert!(!Error::UnexpectedEndOfStream.is_end_of_stream());
    /// ```
    #[inline]
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, Error::EndOfStream)
    }
}

/// The re-exported error type.
pub type Result<T, E = Error> = ::std::result::Result<T, E>;
