//! A growable container of samples.

use std::fmt;
use std::iter::FromIterator;
use std::ops;
use std::slice;

use samples_core::raw::{Raw, RawMut};
use samples_core::{Normalized, Sample, Slice, SliceMut};

/// A growable, owned sequence of samples of a single encoding.
///
/// Like a [Vec], this has a length and a separately allocated capacity. Unlike
/// a [Vec] the whole allocation is initialized, so the length can be changed
/// freely within the capacity with [set_len][Samples::set_len] without
/// reallocating, and the spare room past the length can be written to
/// directly through [spare_mut][Samples::spare_mut]. This is what allows a
/// [Buffer][crate::Buffer] to reclaim space.
///
/// Sub-ranges are borrowed slices of the container, so they share its storage
/// and can be used anywhere a [Slice] or [SliceMut] is expected.
///
/// # Examples
///
/// ```
/// use samples::{MuLaw, Slice};
///
/// let mut buf = samples::samples![0i16; 4];
/// buf.slice_mut(1, 3).copy_from_slice(&[i16::MAX, -i16::MAX]);
///
/// assert_eq!(buf.at(1), 1.0);
/// assert_eq!(buf.at(2), -1.0);
///
/// let mut companded = samples::buf::Samples::<MuLaw>::make(4, 4);
/// assert_eq!(buf.copy_into(&mut companded), 4);
/// assert_eq!(companded.as_slice(), &[MuLaw(0xff), MuLaw(0x80), MuLaw(0x00), MuLaw(0xff)]);
/// ```
pub struct Samples<T> {
    /// The allocation, every element of which is initialized. Its length is
    /// the capacity of the container.
    data: Vec<T>,
    /// The number of samples in the container.
    len: usize,
}

impl<T> Samples<T> {
    /// Construct a new empty container.
    ///
    /// # Examples
    ///
    /// ```
    /// let buf = samples::buf::Samples::<f32>::new();
    ///
    /// assert_eq!(buf.len(), 0);
    /// assert_eq!(buf.capacity(), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            len: 0,
        }
    }

    /// Construct a container from a vector of samples.
    ///
    /// The capacity of the container is the length of the vector.
    #[inline]
    pub fn from_vec(data: Vec<T>) -> Self {
        let len = data.len();
        Self { data, len }
    }

    /// The number of samples in the container.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Test if the container is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of samples the container can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Borrow the samples in `low..high` as a shared view.
    ///
    /// # Panics
    ///
    /// Panics unless `low <= high <= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// let buf = samples::samples![1i32, 2, 3, 4];
    ///
    /// assert_eq!(buf.slice(1, 3), &[2, 3]);
    /// assert!(buf.slice(4, 4).is_empty());
    /// ```
    #[inline]
    pub fn slice(&self, low: usize, high: usize) -> &[T] {
        &self.as_slice()[low..high]
    }

    /// Borrow the samples in `low..high` as a mutable view.
    ///
    /// Changes made through the view are visible in the container.
    ///
    /// # Panics
    ///
    /// Panics unless `low <= high <= len`.
    #[inline]
    pub fn slice_mut(&mut self, low: usize, high: usize) -> &mut [T] {
        &mut self.as_mut_slice()[low..high]
    }

    /// Access the samples as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len]
    }

    /// Access the samples as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.len]
    }

    /// Access the spare room between the length and the capacity of the
    /// container.
    ///
    /// Samples written here become part of the container once its length is
    /// extended over them with [set_len][Samples::set_len].
    ///
    /// # Examples
    ///
    /// ```
    /// let mut buf = samples::buf::Samples::<i16>::with_capacity(4);
    /// buf.spare_mut()[..2].copy_from_slice(&[1, 2]);
    ///
    /// buf.set_len(2);
    /// assert_eq!(buf.as_slice(), &[1, 2]);
    /// assert_eq!(buf.spare_mut().len(), 2);
    /// ```
    #[inline]
    pub fn spare_mut(&mut self) -> &mut [T] {
        &mut self.data[self.len..]
    }

    /// Convert into a vector of the samples in the container.
    #[inline]
    pub fn into_vec(mut self) -> Vec<T> {
        self.data.truncate(self.len);
        self.data
    }

    /// Iterate over the samples in their [Normalized] form.
    ///
    /// # Examples
    ///
    /// ```
    /// let buf = samples::samples![0u8, 255];
    ///
    /// assert_eq!(buf.iter_normalized().collect::<Vec<_>>(), vec![-1.0, 1.0]);
    /// ```
    #[inline]
    pub fn iter_normalized(&self) -> Iter<'_, T> {
        Iter {
            iter: self.as_slice().iter(),
        }
    }
}

impl<T> Samples<T>
where
    T: Sample,
{
    /// Construct an empty container with room for exactly `capacity`
    /// samples, all of which are zeroed.
    ///
    /// This is the typical way to presize a [Buffer][crate::Buffer] for
    /// writing.
    ///
    /// # Examples
    ///
    /// ```
    /// let buf = samples::buf::Samples::<u8>::with_capacity(1024);
    ///
    /// assert!(buf.is_empty());
    /// assert_eq!(buf.capacity(), 1024);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![T::ZERO; capacity],
            len: 0,
        }
    }

    /// Allocate a container of `len` zeroed samples with room for `capacity`
    /// samples.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is smaller than `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use samples::{ALaw, Sample};
    ///
    /// let buf = samples::buf::Samples::<ALaw>::make(2, 8);
    ///
    /// assert_eq!(buf.as_slice(), &[ALaw::ZERO, ALaw::ZERO]);
    /// assert_eq!(buf.capacity(), 8);
    /// ```
    pub fn make(len: usize, capacity: usize) -> Self {
        let mut samples = Self::with_capacity(capacity);
        samples.set_len(len);
        samples
    }

    /// Change the length of the container within its capacity.
    ///
    /// Like re-slicing in other languages, shrinking keeps the samples past the
    /// new length around and growing back exposes them again. Room which has
    /// never been written to holds zeroed samples. This never reallocates.
    ///
    /// # Panics
    ///
    /// Panics if `len` is larger than [capacity][Samples::capacity].
    ///
    /// # Examples
    ///
    /// ```
    /// let mut buf = samples::buf::Samples::<i16>::with_capacity(4);
    /// buf.extend_from_slice(&[1, 2, 3]);
    ///
    /// buf.set_len(1);
    /// assert_eq!(buf.as_slice(), &[1]);
    ///
    /// buf.set_len(4);
    /// assert_eq!(buf.as_slice(), &[1, 2, 3, 0]);
    /// assert_eq!(buf.capacity(), 4);
    /// ```
    #[inline]
    pub fn set_len(&mut self, len: usize) {
        assert!(
            len <= self.data.len(),
            "set_len: length `{}` exceeds capacity `{}`",
            len,
            self.data.len()
        );

        self.len = len;
    }

    /// Append the samples in `other` to the container, reallocating as needed.
    pub fn extend_from_slice(&mut self, other: &[T]) {
        let end = self.len + other.len();

        if end > self.data.len() {
            self.data.truncate(self.len);
            self.data.reserve(other.len());
            let capacity = self.data.capacity();
            self.data.resize(capacity, T::ZERO);
        }

        self.data[self.len..end].copy_from_slice(other);
        self.len = end;
    }
}

impl<T> Default for Samples<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Samples<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for Samples<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> PartialEq for Samples<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> From<Vec<T>> for Samples<T> {
    #[inline]
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T, const N: usize> From<[T; N]> for Samples<T> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self::from_vec(Vec::from(data))
    }
}

impl<T> From<Samples<T>> for Vec<T> {
    #[inline]
    fn from(samples: Samples<T>) -> Self {
        samples.into_vec()
    }
}

impl<T> FromIterator<T> for Samples<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> ops::Deref for Samples<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> ops::DerefMut for Samples<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<'a, T> IntoIterator for &'a Samples<T> {
    type IntoIter = slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Samples<T> {
    type IntoIter = slice::IterMut<'a, T>;
    type Item = &'a mut T;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> Slice for Samples<T>
where
    T: Sample,
{
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn at(&self, index: usize) -> Normalized {
        self.as_slice()[index].to_normalized()
    }

    #[inline]
    fn as_raw(&self) -> Option<Raw<'_>> {
        Some(Raw::new(self.as_slice()))
    }

    fn make(&self, len: usize, capacity: usize) -> Box<dyn SliceMut> {
        Box::new(Samples::<T>::make(len, capacity))
    }
}

impl<T> SliceMut for Samples<T>
where
    T: Sample,
{
    #[inline]
    fn set(&mut self, index: usize, value: Normalized) {
        self.as_mut_slice()[index] = T::from_normalized(value);
    }

    #[inline]
    fn as_raw_mut(&mut self) -> Option<RawMut<'_>> {
        Some(RawMut::new(self.as_mut_slice()))
    }
}

/// An iterator over the normalized samples of a container.
///
/// Created with [Samples::iter_normalized].
pub struct Iter<'a, T> {
    iter: slice::Iter<'a, T>,
}

impl<T> Iterator for Iter<'_, T>
where
    T: Sample,
{
    type Item = Normalized;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.iter.next()?.to_normalized())
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        Some(self.iter.nth(n)?.to_normalized())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T>
where
    T: Sample,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        Some(self.iter.next_back()?.to_normalized())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T>
where
    T: Sample,
{
    #[inline]
    fn len(&self) -> usize {
        self.iter.len()
    }
}
