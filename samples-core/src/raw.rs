//! Type-erased views of typed sample storage.
//!
//! These are what allows [copy][crate::slice::copy] to detect that the source
//! and destination share an encoding without knowing what that encoding is,
//! in which case samples are copied as memory rather than being converted
//! through their normalized form.

use core::any::TypeId;
use core::marker::PhantomData;
use core::mem;
use core::ptr::{self, NonNull};
use core::slice;

use crate::Sample;

/// A type-erased shared view of a slice of samples.
///
/// # Examples
///
/// ```
/// use samples_core::raw::Raw;
///
/// let data = [1i16, 2, 3];
/// let raw = Raw::new(&data[..]);
///
/// assert_eq!(raw.len(), 3);
/// assert!(raw.downcast::<u8>().is_none());
/// assert_eq!(raw.downcast::<i16>(), Some(&data[..]));
/// ```
#[derive(Clone, Copy)]
pub struct Raw<'a> {
    id: TypeId,
    ptr: NonNull<u8>,
    len: usize,
    size: usize,
    _marker: PhantomData<&'a [u8]>,
}

impl<'a> Raw<'a> {
    /// Erase the type of the given slice.
    pub fn new<T>(data: &'a [T]) -> Self
    where
        T: Sample,
    {
        Self {
            id: TypeId::of::<T>(),
            // SAFETY: slice pointers are never null.
            ptr: unsafe { NonNull::new_unchecked(data.as_ptr() as *mut u8) },
            len: data.len(),
            size: mem::size_of::<T>(),
            _marker: PhantomData,
        }
    }

    /// The number of samples in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Test if the view is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Test if the view stores samples of type `T`.
    #[inline]
    pub fn is<T>(&self) -> bool
    where
        T: Sample,
    {
        self.id == TypeId::of::<T>()
    }

    /// Narrow the view to the samples in `low..high`.
    ///
    /// # Panics
    ///
    /// Panics unless `low <= high <= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use samples_core::raw::Raw;
    ///
    /// let data = [1i16, 2, 3, 4];
    /// let raw = Raw::new(&data[..]).range(1, 3);
    ///
    /// assert_eq!(raw.downcast::<i16>(), Some(&data[1..3]));
    /// ```
    pub fn range(self, low: usize, high: usize) -> Self {
        assert_range(low, high, self.len);

        Self {
            // SAFETY: `low` is within the bounds of the view.
            ptr: unsafe { NonNull::new_unchecked(self.ptr.as_ptr().add(low * self.size)) },
            len: high - low,
            ..self
        }
    }

    /// Recover the typed slice, if it stores samples of type `T`.
    pub fn downcast<T>(self) -> Option<&'a [T]>
    where
        T: Sample,
    {
        if !self.is::<T>() {
            return None;
        }

        // SAFETY: the view was constructed from a `&'a [T]` of the same type.
        Some(unsafe { slice::from_raw_parts(self.ptr.as_ptr() as *const T, self.len) })
    }
}

/// A type-erased mutable view of a slice of samples.
pub struct RawMut<'a> {
    id: TypeId,
    ptr: NonNull<u8>,
    len: usize,
    size: usize,
    _marker: PhantomData<&'a mut [u8]>,
}

impl<'a> RawMut<'a> {
    /// Erase the type of the given mutable slice.
    pub fn new<T>(data: &'a mut [T]) -> Self
    where
        T: Sample,
    {
        Self {
            id: TypeId::of::<T>(),
            // SAFETY: slice pointers are never null.
            ptr: unsafe { NonNull::new_unchecked(data.as_mut_ptr() as *mut u8) },
            len: data.len(),
            size: mem::size_of::<T>(),
            _marker: PhantomData,
        }
    }

    /// The number of samples in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Test if the view is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Test if the view stores samples of type `T`.
    #[inline]
    pub fn is<T>(&self) -> bool
    where
        T: Sample,
    {
        self.id == TypeId::of::<T>()
    }

    /// Narrow the view to the samples in `low..high`.
    ///
    /// # Panics
    ///
    /// Panics unless `low <= high <= len`.
    pub fn range(self, low: usize, high: usize) -> Self {
        assert_range(low, high, self.len);

        Self {
            // SAFETY: `low` is within the bounds of the view.
            ptr: unsafe { NonNull::new_unchecked(self.ptr.as_ptr().add(low * self.size)) },
            len: high - low,
            ..self
        }
    }

    /// Recover the typed mutable slice, if it stores samples of type `T`.
    pub fn downcast<T>(self) -> Option<&'a mut [T]>
    where
        T: Sample,
    {
        if !self.is::<T>() {
            return None;
        }

        // SAFETY: the view was constructed from a `&'a mut [T]` of the same
        // type and has been consumed.
        Some(unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr() as *mut T, self.len) })
    }

    /// Copy samples from `src` as memory if both views store the same type.
    ///
    /// Returns the number of samples copied, which is the smaller of the two
    /// lengths, or `None` if the types differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use samples_core::raw::{Raw, RawMut};
    ///
    /// let from = [1i16, 2, 3];
    /// let mut to = [0i16; 2];
    /// let mut other = [0u8; 4];
    ///
    /// assert_eq!(RawMut::new(&mut to[..]).copy_from(&Raw::new(&from[..])), Some(2));
    /// assert_eq!(to, [1, 2]);
    ///
    /// assert_eq!(RawMut::new(&mut other[..]).copy_from(&Raw::new(&from[..])), None);
    /// ```
    pub fn copy_from(&mut self, src: &Raw<'_>) -> Option<usize> {
        if self.id != src.id {
            return None;
        }

        debug_assert_eq!(self.size, src.size);
        let n = usize::min(self.len, src.len);

        // SAFETY: both views store the same type, are valid for at least `n`
        // elements, and cannot overlap since one is a unique borrow.
        unsafe {
            ptr::copy_nonoverlapping(src.ptr.as_ptr(), self.ptr.as_ptr(), n * self.size);
        }

        Some(n)
    }
}

pub(crate) fn assert_range(low: usize, high: usize, len: usize) {
    assert!(
        low <= high && high <= len,
        "range `{}..{}` out of bounds for length `{}`",
        low,
        high,
        len
    );
}
