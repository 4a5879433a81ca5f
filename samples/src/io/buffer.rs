use std::convert::TryFrom;

use samples_core::{Error, Normalized, Reader, Result, Sample, Seek, Slice, SliceMut, Writer};

use crate::buf::Samples;


/// The minimum number of free samples made available to each call to
/// [Reader::read] by [Buffer::read_from].
///
/// As long as the buffer has at least this many samples of room beyond its
/// contents, [Buffer::read_from] will not grow it.
pub const MIN_READ: usize = 512;

/// A growable stream of samples which can be both written to and read from.
///
/// This is the sample equivalent of a byte buffer. Samples are written to the
/// end of the buffer and read from its front, and the storage is reused once
/// everything written has been read.
///
/// The buffer owns a single [Samples] container of encoding `T`. Samples of
/// any other encoding are converted when they are written to or read from the
/// buffer.
///
/// # Examples
///
/// ```
/// use samples::{Buffer, Error};
/// use samples::buf::Samples;
///
/// let mut buf = Buffer::new(Samples::<u8>::with_capacity(0));
///
/// buf.write_sample(0.5);
/// buf.write_sample(-0.5);
///
/// assert!((buf.read_sample()? - 0.5).abs() < 0.01);
/// assert!((buf.read_sample()? + 0.5).abs() < 0.01);
/// assert!(buf.read_sample().unwrap_err().is_end_of_stream());
/// # Ok::<_, Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Buffer<T> {
    /// Contains the samples `storage[read..]`. Writes happen at the end.
    storage: Samples<T>,
    /// The read position in `storage`.
    read: usize,
}

impl<T> Buffer<T>
where
    T: Sample,
{
    /// Construct a buffer using `storage` as its initial contents.
    ///
    /// To prepare a buffer for reading existing data, pass a filled container.
    /// To size the buffer for writing, pass an empty container with the
    /// desired capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use samples::Buffer;
    ///
    /// let buf = Buffer::new(samples::samples![1i16, 2, 3]);
    /// assert_eq!(buf.len(), 3);
    ///
    /// let buf = Buffer::new(samples::buf::Samples::<i16>::with_capacity(16));
    /// assert!(buf.is_empty());
    /// assert!(buf.capacity() >= 16);
    /// ```
    pub fn new(storage: Samples<T>) -> Self {
        Self { storage, read: 0 }
    }

    /// The unread samples in the buffer.
    ///
    /// The returned slice borrows the buffer, so it can't outlive the next
    /// call which modifies it.
    #[inline]
    pub fn samples(&self) -> &[T] {
        &self.storage[self.read..]
    }

    /// The unread samples in the buffer, mutably.
    #[inline]
    pub fn samples_mut(&mut self) -> &mut [T] {
        &mut self.storage[self.read..]
    }

    /// The number of unread samples in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len() - self.read
    }

    /// Test if there are no unread samples in the buffer.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The capacity of the underlying storage.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Discard all but the first `n` unread samples.
    ///
    /// # Panics
    ///
    /// Panics if `n` is larger than [len][Buffer::len].
    ///
    /// # Examples
    ///
    /// ```
    /// use samples::Buffer;
    ///
    /// let mut buf = Buffer::new(samples::samples![1i32, 2, 3, 4]);
    /// buf.next(1);
    ///
    /// buf.truncate(2);
    /// assert_eq!(buf.samples(), &[2, 3]);
    /// ```
    pub fn truncate(&mut self, n: usize) {
        assert!(
            n <= self.len(),
            "truncate: `{}` is out of range for `{}` unread samples",
            n,
            self.len()
        );

        if n == 0 {
            self.read = 0;
        }

        self.storage.set_len(self.read + n);
    }

    /// Discard all unread samples. This is the same as `truncate(0)`.
    #[inline]
    pub fn reset(&mut self) {
        self.truncate(0);
    }

    /// Reserve room for `n` more samples at the end of the buffer, returning
    /// the index in storage at which they should be written.
    fn grow_index(&mut self, n: usize) -> usize {
        let m = self.len();

        if m == 0 && self.read != 0 {
            self.reset();
        }

        let end = self
            .storage
            .len()
            .checked_add(n)
            .expect("grow: capacity overflow");

        if end > self.storage.capacity() {
            let capacity = self.storage.capacity().saturating_mul(2).saturating_add(n);
            tracing::trace!(from = self.storage.capacity(), to = capacity, "reallocating buffer");

            let mut storage = Samples::with_capacity(capacity);
            storage.extend_from_slice(&self.storage[self.read..]);
            self.storage = storage;
            self.read = 0;
        }

        // Unread samples now start at `read`, so this is at most `end`.
        self.storage.set_len(self.read + m + n);
        self.read + m
    }

    /// Grow the capacity of the buffer, if necessary, so that another `n`
    /// samples can be written without reallocating.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use samples::Buffer;
    ///
    /// let mut buf = Buffer::new(samples::samples![1.0f32]);
    /// buf.grow(64);
    ///
    /// assert_eq!(buf.len(), 1);
    /// assert!(buf.capacity() >= 65);
    /// ```
    pub fn grow(&mut self, n: usize) {
        let m = self.grow_index(n);
        self.storage.set_len(m);
    }

    /// Append the samples in `src` to the buffer, growing it as needed.
    ///
    /// Samples are converted into the encoding of the buffer. This never fails
    /// and always writes all of `src`.
    ///
    /// # Examples
    ///
    /// ```
    /// use samples::{Buffer, Error};
    ///
    /// let mut buf = Buffer::new(samples::samples![0i16; 0]);
    ///
    /// assert_eq!(buf.write(&[0.5f64, -1.0])?, 2);
    /// assert_eq!(buf.samples(), &[16384, -32767]);
    /// # Ok::<_, Error>(())
    /// ```
    pub fn write<S>(&mut self, src: &S) -> Result<usize>
    where
        S: ?Sized + Slice,
    {
        let m = self.grow_index(src.len());
        Ok(samples_core::slice::copy(src, &mut self.storage[m..]))
    }

    /// Append a single normalized sample to the buffer, growing it as needed.
    pub fn write_sample(&mut self, value: Normalized) {
        let m = self.grow_index(1);
        self.storage[m] = T::from_normalized(value);
    }

    /// Read up to `dst.len()` unread samples into `dst`, converting them into
    /// its encoding.
    ///
    /// Returns the number of samples read. If the buffer is drained this
    /// returns [Error::EndOfStream], unless `dst` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use samples::{Buffer, Error};
    ///
    /// let mut buf = Buffer::new(samples::samples![0u8, 255, 0]);
    /// let mut out = [0.0f32; 2];
    ///
    /// assert_eq!(buf.read(&mut out)?, 2);
    /// assert_eq!(out, [-1.0, 1.0]);
    ///
    /// assert_eq!(buf.read(&mut out)?, 1);
    /// assert!(buf.read(&mut out).unwrap_err().is_end_of_stream());
    /// assert_eq!(buf.read(&mut out[..0])?, 0);
    /// # Ok::<_, Error>(())
    /// ```
    pub fn read<D>(&mut self, dst: &mut D) -> Result<usize>
    where
        D: ?Sized + SliceMut,
    {
        if self.is_empty() {
            self.reset();

            if dst.is_empty() {
                return Ok(0);
            }

            return Err(Error::EndOfStream);
        }

        let n = samples_core::slice::copy(&self.storage[self.read..], dst);
        self.read += n;
        Ok(n)
    }

    /// Read a single sample in its normalized form.
    ///
    /// Returns [Error::EndOfStream] if the buffer is drained.
    pub fn read_sample(&mut self) -> Result<Normalized> {
        if self.is_empty() {
            self.reset();
            return Err(Error::EndOfStream);
        }

        let value = self.storage[self.read].to_normalized();
        self.read += 1;
        Ok(value)
    }

    /// Return up to `n` unread samples, advancing the buffer as if they had
    /// been read.
    ///
    /// If fewer than `n` samples are unread, all of them are returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use samples::Buffer;
    ///
    /// let mut buf = Buffer::new(samples::samples![1i16, 2, 3]);
    ///
    /// assert_eq!(buf.next(2), &[1, 2]);
    /// assert_eq!(buf.next(2), &[3]);
    /// assert!(buf.next(2).is_empty());
    /// ```
    pub fn next(&mut self, n: usize) -> &[T] {
        let n = usize::min(n, self.len());
        let start = self.read;
        self.read += n;
        &self.storage[start..start + n]
    }

    /// Seek to the given sample, relative to the start of the underlying
    /// storage, so that subsequent reads begin there.
    ///
    /// Returns [Error::EndOfStream] and leaves the position unchanged if
    /// `sample` is larger than [len][Buffer::len].
    ///
    /// # Examples
    ///
    /// ```
    /// use samples::{Buffer, Error};
    ///
    /// let mut buf = Buffer::new(samples::samples![1i16, 2, 3]);
    /// assert_eq!(buf.next(3), &[1, 2, 3]);
    ///
    /// assert!(buf.seek(1).unwrap_err().is_end_of_stream());
    ///
    /// buf.seek(0)?;
    /// assert_eq!(buf.samples(), &[1, 2, 3]);
    /// # Ok::<_, Error>(())
    /// ```
    pub fn seek(&mut self, sample: u64) -> Result<()> {
        match usize::try_from(sample) {
            Ok(sample) if sample <= self.len() => {
                self.read = sample;
                Ok(())
            }
            _ => Err(Error::EndOfStream),
        }
    }

    /// Read samples from `source` until it signals [Error::EndOfStream],
    /// appending them to the buffer and growing it as needed.
    ///
    /// Returns the number of samples read. Any other error raised by the
    /// source aborts reading and is returned, in which case samples read up
    /// until then remain in the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use samples::{Buffer, Error};
    ///
    /// let mut source = Buffer::new(samples::samples![0.25f64; 1000]);
    /// let mut buf = Buffer::new(samples::samples![0i32; 0]);
    ///
    /// assert_eq!(buf.read_from(&mut source)?, 1000);
    /// assert_eq!(buf.len(), 1000);
    /// assert!(source.is_empty());
    /// # Ok::<_, Error>(())
    /// ```
    pub fn read_from<R>(&mut self, source: &mut R) -> Result<u64>
    where
        R: ?Sized + Reader,
    {
        if self.is_empty() {
            self.reset();
        }

        let mut n = 0u64;

        loop {
            let free = self.storage.capacity() - self.storage.len();

            if free < MIN_READ {
                let unread = self.len();

                if self.read + free < MIN_READ {
                    let capacity = 2 * self.storage.capacity() + MIN_READ;
                    tracing::trace!(from = self.storage.capacity(), to = capacity, "reallocating buffer");

                    let mut storage = Samples::with_capacity(capacity);
                    storage.extend_from_slice(&self.storage[self.read..]);
                    self.storage = storage;
                } else {
                    tracing::trace!(read = self.read, unread, "collapsing buffer");
                    self.storage.copy_within(self.read.., 0);
                    self.storage.set_len(unread);
                }

                self.read = 0;
            }

            let len = self.storage.len();
            let free = self.storage.capacity() - len;
            let result = source.read(&mut self.storage.spare_mut());

            match result {
                Ok(m) => {
                    assert!(
                        m <= free,
                        "read_from: source reported `{}` samples for room of `{}`",
                        m,
                        free
                    );

                    self.storage.set_len(len + m);
                    n += m as u64;
                }
                Err(Error::EndOfStream) => return Ok(n),
                Err(e) => return Err(e),
            }
        }
    }

    /// Write all unread samples to `sink` in a single call.
    ///
    /// Returns the number of samples written, after which the buffer is empty.
    /// If the sink accepts fewer samples than offered without raising an error
    /// itself, this returns [Error::ShortWrite] and the samples which were
    /// accepted are considered read.
    ///
    /// # Panics
    ///
    /// Panics if the sink reports writing more samples than offered.
    ///
    /// # Examples
    ///
    /// ```
    /// use samples::{Buffer, Error};
    ///
    /// let mut buf = Buffer::new(samples::samples![i16::MAX, 0]);
    /// let mut sink = Buffer::new(samples::samples![1.0f32; 0]);
    ///
    /// assert_eq!(buf.write_to(&mut sink)?, 2);
    /// assert!(buf.is_empty());
    /// assert_eq!(sink.samples(), &[1.0, 0.0]);
    /// # Ok::<_, Error>(())
    /// ```
    pub fn write_to<W>(&mut self, sink: &mut W) -> Result<u64>
    where
        W: ?Sized + Writer,
    {
        let mut n = 0;

        if !self.is_empty() {
            let unread = self.len();
            let m = sink.write(&&self.storage[self.read..])?;

            assert!(
                m <= unread,
                "write_to: sink reported `{}` samples written out of `{}`",
                m,
                unread
            );

            self.read += m;
            n = m as u64;

            if m != unread {
                return Err(Error::ShortWrite);
            }
        }

        self.reset();
        Ok(n)
    }

    /// Convert into the underlying storage.
    ///
    /// This includes samples before the read position which have not yet
    /// been reclaimed.
    #[inline]
    pub fn into_inner(self) -> Samples<T> {
        self.storage
    }
}

impl<T> Reader for Buffer<T>
where
    T: Sample,
{
    #[inline]
    fn read(&mut self, dst: &mut dyn SliceMut) -> Result<usize> {
        Buffer::read(self, dst)
    }

    #[inline]
    fn write_to(&mut self, dst: &mut dyn Writer) -> Option<Result<u64>> {
        Some(Buffer::write_to(self, dst))
    }
}

impl<T> Writer for Buffer<T>
where
    T: Sample,
{
    #[inline]
    fn write(&mut self, src: &dyn Slice) -> Result<usize> {
        Buffer::write(self, src)
    }

    #[inline]
    fn read_from(&mut self, src: &mut dyn Reader) -> Option<Result<u64>> {
        Some(Buffer::read_from(self, src))
    }
}

impl<T> Seek for Buffer<T>
where
    T: Sample,
{
    #[inline]
    fn seek(&mut self, sample: u64) -> Result<()> {
        Buffer::seek(self, sample)
    }
}
