use crate::error::Error;

/// Resolves `src` against a list of length `len`.
///
/// Unlike slice indexing this does not panic: a reversed range or one that
/// reaches past `len` is reported as [`Error::OutOfRange`].
#[inline]
pub(crate) fn split_range_bound(
    src: &impl core::ops::RangeBounds<usize>,
    len: usize,
) -> Result<(usize, usize), Error> {
    let start = match src.start_bound() {
        core::ops::Bound::Included(&i) => i,
        core::ops::Bound::Excluded(&i) => i.checked_add(1).ok_or(Error::out_of_range(i, len))?,
        core::ops::Bound::Unbounded => 0,
    };

    let end = match src.end_bound() {
        core::ops::Bound::Included(&i) => i.checked_add(1).ok_or(Error::out_of_range(i, len))?,
        core::ops::Bound::Excluded(&i) => i,
        core::ops::Bound::Unbounded => len,
    };

    if end > len {
        return Err(Error::out_of_range(end, len));
    }
    if start > end {
        return Err(Error::out_of_range(start, len));
    }
    Ok((start, end))
}

/// Marks the calling branch as unlikely.
#[cold]
#[inline(always)]
pub(crate) const fn cold_path() {}

/// Emits a `tracing` event when the `tracing` feature is enabled; compiles to nothing otherwise.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

pub(crate) use trace;

/// Slice-backed read-only trait family for a type with `fn as_slice(&self) -> &[T]`.
macro_rules! impl_read_only_traits {
    ($name:ty) => {
        impl<T> core::ops::Deref for $name {
            type Target = [T];
            #[inline]
            fn deref(&self) -> &Self::Target {
                self.as_slice()
            }
        }

        impl<T> core::convert::AsRef<[T]> for $name {
            #[inline]
            fn as_ref(&self) -> &[T] {
                self.as_slice()
            }
        }

        impl<T> alloc::borrow::Borrow<[T]> for $name {
            #[inline]
            fn borrow(&self) -> &[T] {
                self.as_slice()
            }
        }

        impl<T: core::hash::Hash> core::hash::Hash for $name {
            #[inline]
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                core::hash::Hash::hash(self.as_slice(), state);
            }
        }

        impl<T, I: core::slice::SliceIndex<[T]>> core::ops::Index<I> for $name {
            type Output = <I as core::slice::SliceIndex<[T]>>::Output;
            #[inline]
            fn index(&self, index: I) -> &Self::Output {
                core::ops::Index::index(self.as_slice(), index)
            }
        }

        impl<T: core::cmp::Ord> core::cmp::Ord for $name {
            #[inline]
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                core::cmp::Ord::cmp(self.as_slice(), other.as_slice())
            }
        }

        impl<T: core::cmp::PartialOrd> core::cmp::PartialOrd for $name {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                core::cmp::PartialOrd::partial_cmp(self.as_slice(), other.as_slice())
            }
        }

        impl<T: core::cmp::PartialEq> core::cmp::PartialEq for $name {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.as_slice() == other.as_slice()
            }
        }

        impl<T: Eq> Eq for $name {}

        impl<T, U> core::cmp::PartialEq<[U]> for $name
        where
            T: core::cmp::PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &[U]) -> bool {
                core::cmp::PartialEq::eq(self.as_slice(), other)
            }
        }

        impl<T, U> core::cmp::PartialEq<&[U]> for $name
        where
            T: core::cmp::PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &&[U]) -> bool {
                core::cmp::PartialEq::eq(self.as_slice(), *other)
            }
        }

        impl<T, U, const P: usize> core::cmp::PartialEq<[U; P]> for $name
        where
            T: core::cmp::PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &[U; P]) -> bool {
                core::cmp::PartialEq::eq(self.as_slice(), other.as_slice())
            }
        }

        impl<T, U> core::cmp::PartialEq<alloc::vec::Vec<U>> for $name
        where
            T: core::cmp::PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &alloc::vec::Vec<U>) -> bool {
                core::cmp::PartialEq::eq(self.as_slice(), other.as_slice())
            }
        }
    };
}

pub(crate) use impl_read_only_traits;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_common_ranges() {
        assert_eq!(split_range_bound(&(..), 5), Ok((0, 5)));
        assert_eq!(split_range_bound(&(1..3), 5), Ok((1, 3)));
        assert_eq!(split_range_bound(&(1..=3), 5), Ok((1, 4)));
        assert_eq!(split_range_bound(&(2..), 5), Ok((2, 5)));
        assert_eq!(split_range_bound(&(5..5), 5), Ok((5, 5)));
    }

    #[test]
    fn rejects_bad_ranges() {
        assert_eq!(
            split_range_bound(&(0..6), 5),
            Err(Error::OutOfRange { index: 6, len: 5 })
        );
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = 4..2;
        assert_eq!(
            split_range_bound(&reversed, 5),
            Err(Error::OutOfRange { index: 4, len: 5 })
        );
        assert!(split_range_bound(&(0..=usize::MAX), 5).is_err());
    }
}
