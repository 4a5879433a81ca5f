use crate::error::Result;
use crate::slice::{Slice, SliceMut};

/// A source of samples.
///
/// # Examples
///
/// ```
/// use samples_core::{Error, Reader, Result, SliceMut};
///
/// /// Produces a fixed number of silent samples.
/// struct Silence(usize);
///
/// impl Reader for Silence {
///     fn read(&mut self, dst: &mut dyn SliceMut) -> Result<usize> {
///         if self.0 == 0 {
///             return Err(Error::EndOfStream);
///         }
///
///         let n = usize::min(self.0, dst.len());
///
///         for i in 0..n {
///             dst.set(i, 0.0);
///         }
///
///         self.0 -= n;
///         Ok(n)
///     }
/// }
///
/// let mut source = Silence(3);
/// let mut out = [1i16; 2];
///
/// assert_eq!(source.read(&mut out).unwrap(), 2);
/// assert_eq!(out, [0, 0]);
/// assert_eq!(source.read(&mut out).unwrap(), 1);
/// assert!(source.read(&mut out).unwrap_err().is_end_of_stream());
/// ```
pub trait Reader {
    /// Read samples into `dst`, filling it with at most `dst.len()` samples.
    ///
    /// Returns the number of samples read. Once the source is exhausted this
    /// returns [Error::EndOfStream][crate::Error::EndOfStream].
    fn read(&mut self, dst: &mut dyn SliceMut) -> Result<usize>;

    /// Write all remaining samples of the source directly into `dst`.
    ///
    /// Sources which can hand over their samples without an intermediate copy
    /// implement this, and return the number of samples written. Reaching the
    /// end of the source is not an error.
    ///
    /// The default implementation returns `None`, in which case callers have
    /// to fall back to [Reader::read].
    fn write_to(&mut self, dst: &mut dyn Writer) -> Option<Result<u64>> {
        let _ = dst;
        None
    }
}

/// A sink of samples.
pub trait Writer {
    /// Write all samples in `src` to the sink.
    ///
    /// Returns the number of samples written. If that is less than
    /// `src.len()` an error must be returned instead, and any error should be
    /// considered fatal for the sink.
    fn write(&mut self, src: &dyn Slice) -> Result<usize>;

    /// Read samples from `src` directly into the sink until `src` signals the
    /// end of the stream.
    ///
    /// Sinks which can read into their own storage implement this, and return
    /// the number of samples read. Reaching the end of `src` is not an error.
    ///
    /// The default implementation returns `None`, in which case callers have
    /// to fall back to [Writer::write].
    fn read_from(&mut self, src: &mut dyn Reader) -> Option<Result<u64>> {
        let _ = src;
        None
    }
}

/// A stream which can be positioned.
pub trait Seek {
    /// Seek to the given sample, relative to the start of the stream.
    ///
    /// Subsequent reads begin at the given sample. If an error is returned it
    /// was not possible to seek to the sample, and the position is unchanged.
    fn seek(&mut self, sample: u64) -> Result<()>;
}

/// A seekable source of samples.
pub trait ReadSeeker: Reader + Seek {}

impl<R> ReadSeeker for R where R: ?Sized + Reader + Seek {}

impl<R> Reader for &mut R
where
    R: ?Sized + Reader,
{
    #[inline]
    fn read(&mut self, dst: &mut dyn SliceMut) -> Result<usize> {
        (**self).read(dst)
    }

    #[inline]
    fn write_to(&mut self, dst: &mut dyn Writer) -> Option<Result<u64>> {
        (**self).write_to(dst)
    }
}

impl<R> Reader for Box<R>
where
    R: ?Sized + Reader,
{
    #[inline]
    fn read(&mut self, dst: &mut dyn SliceMut) -> Result<usize> {
        (**self).read(dst)
    }

    #[inline]
    fn write_to(&mut self, dst: &mut dyn Writer) -> Option<Result<u64>> {
        (**self).write_to(dst)
    }
}

impl<W> Writer for &mut W
where
    W: ?Sized + Writer,
{
    #[inline]
    fn write(&mut self, src: &dyn Slice) -> Result<usize> {
        (**self).write(src)
    }

    #[inline]
    fn read_from(&mut self, src: &mut dyn Reader) -> Option<Result<u64>> {
        (**self).read_from(src)
    }
}

impl<W> Writer for Box<W>
where
    W: ?Sized + Writer,
{
    #[inline]
    fn write(&mut self, src: &dyn Slice) -> Result<usize> {
        (**self).write(src)
    }

    #[inline]
    fn read_from(&mut self, src: &mut dyn Reader) -> Option<Result<u64>> {
        (**self).read_from(src)
    }
}

impl<S> Seek for &mut S
where
    S: ?Sized + Seek,
{
    #[inline]
    fn seek(&mut self, sample: u64) -> Result<()> {
        (**self).seek(sample)
    }
}

impl<S> Seek for Box<S>
where
    S: ?Sized + Seek,
{
    #[inline]
    fn seek(&mut self, sample: u64) -> Result<()> {
        (**self).seek(sample)
    }
}
