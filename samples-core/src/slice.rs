//! Traits used to operate over sample sequences regardless of their encoding.
//!
//! A [Slice] is conceptually a `[T]` of some [Sample] type `T`, except that
//! the element type has been erased. Every element is accessed through its
//! [Normalized] form, which lets code like [copy] move samples between two
//! sequences without having to know about either of their encodings.
//!
//! These are implemented for:
//! * `[T]`, `[T; N]` and `Vec<T>` where `T` is a [Sample].
//! * References to anything implementing the traits.
//! * A [View] of a sub-range of anything implementing the traits, as
//!   constructed with [view] or [view_mut].
//!
//! Note that since `[T]` is unsized, it has to be passed by reference when
//! used as a trait object, like `&mut &mut [T]`.

use crate::raw::{self, Raw, RawMut};
use crate::{Normalized, Sample};


/// A sequence of samples of an unknown encoding.
///
/// # Examples
///
/// ```
/// use samples_core::slice::Slice;
/// use samples_core::MuLaw;
///
/// fn peak(samples: &dyn Slice) -> f64 {
///     (0..samples.len()).map(|i| samples.at(i).abs()).fold(0.0, f64::max)
/// }
///
/// assert_eq!(peak(&[0i16, i16::MAX, -100]), 1.0);
/// assert!(peak(&[MuLaw(0xff), MuLaw(0x7f)]) < 0.001);
/// ```
pub trait Slice {
    /// The number of samples in the sequence.
    fn len(&self) -> usize;

    /// Test if the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of samples the sequence can hold without reallocating.
    ///
    /// Views have no spare capacity, so this defaults to [Slice::len].
    fn capacity(&self) -> usize {
        self.len()
    }

    /// Get the normalized sample at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not smaller than [Slice::len].
    fn at(&self, index: usize) -> Normalized;

    /// Access the typed storage of the sequence, if it has any.
    ///
    /// This is what allows [copy] to skip the conversion of samples when two
    /// sequences share their encoding.
    fn as_raw(&self) -> Option<Raw<'_>> {
        None
    }

    /// Allocate a new sequence of the same encoding, containing `len` zeroed
    /// samples and room for at least `capacity` samples.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is smaller than `len`.
    fn make(&self, len: usize, capacity: usize) -> Box<dyn SliceMut>;

    /// Copy samples into `dst`, returning the number of samples copied.
    ///
    /// See [copy].
    fn copy_into(&self, dst: &mut dyn SliceMut) -> usize {
        copy(self, dst)
    }
}

/// A mutable sequence of samples of an unknown encoding.
pub trait SliceMut: Slice {
    /// Store the normalized sample at the given index, converting it into the
    /// encoding of the sequence.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not smaller than [Slice::len].
    fn set(&mut self, index: usize, value: Normalized);

    /// Access the typed mutable storage of the sequence, if it has any.
    fn as_raw_mut(&mut self) -> Option<RawMut<'_>> {
        None
    }
}

/// Copy samples from `src` into `dst`.
///
/// The number of samples copied is the minimum of the length of both
/// sequences. If both sequences share an encoding the samples are copied as
/// memory, otherwise each sample is converted through its [Normalized] form.
///
/// # Examples
///
/// ```
/// use samples_core::slice;
/// use samples_core::ALaw;
///
/// let from = [0.0f64, 1.0, -1.0];
///
/// let mut to = [0i16; 2];
/// assert_eq!(slice::copy(&from[..], &mut to[..]), 2);
/// assert_eq!(to, [0, i16::MAX]);
///
/// let mut to = [ALaw(0); 4];
/// assert_eq!(slice::copy(&from[..], &mut to[..]), 3);
/// assert_eq!(to, [ALaw(0xd5), ALaw(0xaa), ALaw(0x2a), ALaw(0)]);
/// ```
pub fn copy<S, D>(src: &S, dst: &mut D) -> usize
where
    S: ?Sized + Slice,
    D: ?Sized + SliceMut,
{
    if let (Some(from), Some(mut to)) = (src.as_raw(), dst.as_raw_mut()) {
        if let Some(n) = to.copy_from(&from) {
            return n;
        }
    }

    let n = usize::min(src.len(), dst.len());

    for i in 0..n {
        dst.set(i, src.at(i));
    }

    n
}

/// Borrow the samples in `low..high` of `slice` as a [View].
///
/// This works on sequences of unknown encoding, like a `&dyn Slice`.
///
/// # Panics
///
/// Panics unless `low <= high <= slice.len()`.
///
/// # Examples
///
/// ```
/// use samples_core::slice::{self, Slice};
///
/// let data: &dyn Slice = &[0i16, i16::MAX, -i16::MAX, 0];
/// let view = slice::view(data, 1, 3);
///
/// assert_eq!(view.len(), 2);
/// assert_eq!(view.at(0), 1.0);
/// assert_eq!(view.at(1), -1.0);
/// ```
pub fn view<S>(slice: &S, low: usize, high: usize) -> View<&S>
where
    S: ?Sized + Slice,
{
    raw::assert_range(low, high, slice.len());

    View {
        inner: slice,
        low,
        len: high - low,
    }
}

/// Mutably borrow the samples in `low..high` of `slice` as a [View].
///
/// Samples set through the view are stored in `slice`.
///
/// # Panics
///
/// Panics unless `low <= high <= slice.len()`.
///
/// # Examples
///
/// ```
/// use samples_core::slice::{self, Slice, SliceMut};
///
/// fn fill_tail(dst: &mut dyn SliceMut, n: usize) {
///     let len = dst.len();
///     let mut tail = slice::view_mut(dst, n, len);
///
///     for i in 0..tail.len() {
///         tail.set(i, 1.0);
///     }
/// }
///
/// let mut data = [0u8; 4];
/// fill_tail(&mut data, 2);
/// assert_eq!(data, [0, 0, 255, 255]);
/// ```
pub fn view_mut<S>(slice: &mut S, low: usize, high: usize) -> View<&mut S>
where
    S: ?Sized + SliceMut,
{
    raw::assert_range(low, high, slice.len());

    View {
        inner: slice,
        low,
        len: high - low,
    }
}

/// A sub-range of another sequence, sharing its storage.
///
/// Created with [view] or [view_mut].
pub struct View<S> {
    inner: S,
    low: usize,
    len: usize,
}

impl<S> View<S> {
    #[inline]
    fn index(&self, index: usize) -> usize {
        assert!(
            index < self.len,
            "index `{}` out of bounds for view of length `{}`",
            index,
            self.len
        );

        self.low + index
    }
}

impl<S> Slice for View<S>
where
    S: Slice,
{
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn at(&self, index: usize) -> Normalized {
        self.inner.at(self.index(index))
    }

    #[inline]
    fn as_raw(&self) -> Option<Raw<'_>> {
        Some(self.inner.as_raw()?.range(self.low, self.low + self.len))
    }

    fn make(&self, len: usize, capacity: usize) -> Box<dyn SliceMut> {
        self.inner.make(len, capacity)
    }
}

impl<S> SliceMut for View<S>
where
    S: SliceMut,
{
    #[inline]
    fn set(&mut self, index: usize, value: Normalized) {
        let index = self.index(index);
        self.inner.set(index, value);
    }

    #[inline]
    fn as_raw_mut(&mut self) -> Option<RawMut<'_>> {
        let (low, high) = (self.low, self.low + self.len);
        Some(self.inner.as_raw_mut()?.range(low, high))
    }
}

impl<T> Slice for [T]
where
    T: Sample,
{
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> Normalized {
        self[index].to_normalized()
    }

    #[inline]
    fn as_raw(&self) -> Option<Raw<'_>> {
        Some(Raw::new(self))
    }

    fn make(&self, len: usize, capacity: usize) -> Box<dyn SliceMut> {
        Box::new(make_vec::<T>(len, capacity))
    }
}

impl<T> SliceMut for [T]
where
    T: Sample,
{
    #[inline]
    fn set(&mut self, index: usize, value: Normalized) {
        self[index] = T::from_normalized(value);
    }

    #[inline]
    fn as_raw_mut(&mut self) -> Option<RawMut<'_>> {
        Some(RawMut::new(self))
    }
}

impl<T, const N: usize> Slice for [T; N]
where
    T: Sample,
{
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn at(&self, index: usize) -> Normalized {
        self[index].to_normalized()
    }

    #[inline]
    fn as_raw(&self) -> Option<Raw<'_>> {
        Some(Raw::new(&self[..]))
    }

    fn make(&self, len: usize, capacity: usize) -> Box<dyn SliceMut> {
        Box::new(make_vec::<T>(len, capacity))
    }
}

impl<T, const N: usize> SliceMut for [T; N]
where
    T: Sample,
{
    #[inline]
    fn set(&mut self, index: usize, value: Normalized) {
        self[index] = T::from_normalized(value);
    }

    #[inline]
    fn as_raw_mut(&mut self) -> Option<RawMut<'_>> {
        Some(RawMut::new(&mut self[..]))
    }
}

impl<T> Slice for Vec<T>
where
    T: Sample,
{
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }

    #[inline]
    fn at(&self, index: usize) -> Normalized {
        self[index].to_normalized()
    }

    #[inline]
    fn as_raw(&self) -> Option<Raw<'_>> {
        Some(Raw::new(&self[..]))
    }

    fn make(&self, len: usize, capacity: usize) -> Box<dyn SliceMut> {
        Box::new(make_vec::<T>(len, capacity))
    }
}

impl<T> SliceMut for Vec<T>
where
    T: Sample,
{
    #[inline]
    fn set(&mut self, index: usize, value: Normalized) {
        self[index] = T::from_normalized(value);
    }

    #[inline]
    fn as_raw_mut(&mut self) -> Option<RawMut<'_>> {
        Some(RawMut::new(&mut self[..]))
    }
}

impl<S> Slice for &S
where
    S: ?Sized + Slice,
{
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    #[inline]
    fn at(&self, index: usize) -> Normalized {
        (**self).at(index)
    }

    #[inline]
    fn as_raw(&self) -> Option<Raw<'_>> {
        (**self).as_raw()
    }

    fn make(&self, len: usize, capacity: usize) -> Box<dyn SliceMut> {
        (**self).make(len, capacity)
    }
}

impl<S> Slice for &mut S
where
    S: ?Sized + Slice,
{
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    #[inline]
    fn at(&self, index: usize) -> Normalized {
        (**self).at(index)
    }

    #[inline]
    fn as_raw(&self) -> Option<Raw<'_>> {
        (**self).as_raw()
    }

    fn make(&self, len: usize, capacity: usize) -> Box<dyn SliceMut> {
        (**self).make(len, capacity)
    }
}

impl<S> SliceMut for &mut S
where
    S: ?Sized + SliceMut,
{
    #[inline]
    fn set(&mut self, index: usize, value: Normalized) {
        (**self).set(index, value);
    }

    #[inline]
    fn as_raw_mut(&mut self) -> Option<RawMut<'_>> {
        (**self).as_raw_mut()
    }
}

fn make_vec<T>(len: usize, capacity: usize) -> Vec<T>
where
    T: Sample,
{
    assert!(capacity >= len, "make: capacity smaller than length");
    let mut data = Vec::with_capacity(capacity);
    data.resize(len, T::ZERO);
    data
}
