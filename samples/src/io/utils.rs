//! Utilities for moving samples between streams.

use samples_core::{Error, Reader, Result, Writer};

/// The number of samples in the scratch space used by [copy].
pub const COPY_SIZE: usize = (32 * 1024) / 8;

/// Copy samples from `src` into `dst` until `src` signals
/// [Error::EndOfStream] or an error occurs.
///
/// If `src` implements [Reader::write_to] it writes directly into `dst`.
/// Otherwise if `dst` implements [Writer::read_from] it reads directly from
/// `src`. Failing both, samples are moved through a scratch space of
/// [COPY_SIZE] normalized samples. Returns the number of samples copied.
///
/// Reaching the end of `src` is not an error, so a successful copy never
/// returns [Error::EndOfStream]. If `dst` accepts fewer samples than offered
/// without raising an error of its own this returns [Error::ShortWrite].
///
/// # Examples
///
/// ```
/// use samples::{io, Buffer, Error};
///
/// let mut from = Buffer::new(samples::samples![0i16, i16::MAX, -i16::MAX]);
/// let mut to = Buffer::new(samples::samples![0u8; 0]);
///
/// assert_eq!(io::copy(&mut to, &mut from)?, 3);
/// assert_eq!(to.samples(), &[128, 255, 0]);
/// # Ok::<_, Error>(())
/// ```
pub fn copy<W, R>(dst: &mut W, src: &mut R) -> Result<u64>
where
    W: ?Sized + Writer,
    R: ?Sized + Reader,
{
    if let Some(result) = src.write_to(&mut &mut *dst) {
        tracing::trace!("copied through source");
        return result;
    }

    if let Some(result) = dst.read_from(&mut &mut *src) {
        tracing::trace!("copied through sink");
        return result;
    }

    let mut buf = vec![0.0f64; COPY_SIZE];
    let mut written = 0u64;

    loop {
        let n = match src.read(&mut &mut buf[..]) {
            Ok(n) => n,
            Err(Error::EndOfStream) => break,
            Err(e) => return Err(e),
        };

        if n == 0 {
            continue;
        }

        let m = dst.write(&&buf[..n])?;
        written += m as u64;
        tracing::trace!(read = n, written = m, "copied chunk");

        if m != n {
            return Err(Error::ShortWrite);
        }
    }

    Ok(written)
}
