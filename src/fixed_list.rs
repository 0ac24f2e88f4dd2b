//! The frozen, shareable result of a [`LocalList`](crate::LocalList).
//!
//! A [`FixedList`] owns a frozen [`FixedStorage`], or nothing at all for the canonical empty
//! result. It dereferences to `[T]` and implements the usual read-only slice traits.
//!
//! Iterating it by reference tries to reuse the storage itself as the cursor: the first
//! [`iter`](FixedList::iter) call claims the cursor packed in the storage's state word and
//! gets [`FixedIter::Shared`]. Any iteration started while that one is still alive gets an
//! ordinary slice iterator instead ([`FixedIter::Standalone`]). Both yield the same items.
//!
//! ```
//! # use locallist::{FixedList, FixedIter};
//! let list = FixedList::of([1, 2, 3]);
//!
//! let first = list.iter();
//! let second = list.iter();
//! assert!(matches!(first, FixedIter::Shared(_)));
//! assert!(matches!(second, FixedIter::Standalone(_)));
//! assert!(first.eq(second));
//!
//! // the cursor was released when `first` was dropped
//! assert!(matches!(list.iter(), FixedIter::Shared(_)));
//! ```

use alloc::vec::Vec;
use core::{fmt, iter::FusedIterator, slice};

use crate::{
    error::Error,
    list::MutableList,
    state::EnumerationState,
    storage::FixedStorage,
    utils::impl_read_only_traits,
};

/// A frozen list: the read-only view returned by
/// [`LocalList::resulting_list`](crate::LocalList::resulting_list).
///
/// All mutation through [`MutableList`] fails with [`Error::CollectionReadOnly`].
pub struct FixedList<T>(Option<FixedStorage<T>>);

impl<T> FixedList<T> {
    /// The canonical empty list. Never allocates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use locallist::FixedList;
    /// const EMPTY: FixedList<u8> = FixedList::empty();
    /// assert!(EMPTY.is_empty());
    /// assert_eq!(EMPTY.capacity(), 0);
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        Self(None)
    }

    /// Wraps a frozen storage.
    pub(crate) fn from_storage(storage: FixedStorage<T>) -> Self {
        debug_assert!(storage.is_frozen());
        if storage.is_empty() {
            return Self::empty();
        }
        Self(Some(storage))
    }

    /// The backing storage, `None` for the empty list.
    #[inline]
    pub fn storage(&self) -> Option<&FixedStorage<T>> {
        self.0.as_ref()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.as_ref().map_or(0, FixedStorage::len)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Capacity of the backing tier. Frozen lists never grow, so this is informational.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.0.as_ref().map_or(0, FixedStorage::capacity)
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match &self.0 {
            Some(storage) => storage.as_slice(),
            None => &[],
        }
    }

    /// Bounds-checked access.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        self.as_slice()
            .get(index)
            .ok_or_else(|| Error::out_of_range(index, self.len()))
    }

    /// Position of the first item equal to `item`.
    #[inline]
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.0.as_ref().and_then(|storage| storage.index_of(item))
    }

    #[inline]
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    /// Iterates the items, reusing the storage as the cursor when nobody else is.
    ///
    /// See the [module documentation](crate::fixed_list) for the claiming rules.
    pub fn iter(&self) -> FixedIter<'_, T> {
        match &self.0 {
            Some(storage) if storage.try_claim_cursor() => FixedIter::Shared(storage),
            _ => FixedIter::Standalone(self.as_slice().iter()),
        }
    }

    /// Where the shared self-enumeration stands. The empty list is always [`Ready`].
    ///
    /// [`Ready`]: EnumerationState::Ready
    ///
    /// # Examples
    ///
    /// ```
    /// # use locallist::{EnumerationState, FixedList};
    /// let list = FixedList::of(['a', 'b']);
    /// let mut iter = list.iter();
    /// assert_eq!(list.enumeration_state(), EnumerationState::BeforeFirst);
    /// iter.next();
    /// assert_eq!(list.enumeration_state(), EnumerationState::AtElement(0));
    /// iter.by_ref().for_each(drop);
    /// assert_eq!(list.enumeration_state(), EnumerationState::Exhausted);
    /// drop(iter);
    /// assert_eq!(list.enumeration_state(), EnumerationState::Ready);
    /// ```
    pub fn enumeration_state(&self) -> EnumerationState {
        match &self.0 {
            Some(storage) => storage.state().enumeration_state(),
            None => EnumerationState::Ready,
        }
    }

    /// Clones the items into a new `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.as_slice().to_vec()
    }
}

impl<T: Default> FixedList<T> {
    /// A frozen list of the given items in the smallest tier that holds them.
    ///
    /// # Panics
    /// Panics if `N` exceeds [`MAX_COUNT`](crate::state::MAX_COUNT).
    ///
    /// # Examples
    ///
    /// ```
    /// # use locallist::FixedList;
    /// let list = FixedList::of([1, 2, 3]);
    /// assert_eq!(list, [1, 2, 3]);
    /// assert_eq!(list.capacity(), 3);
    /// ```
    pub fn of<const N: usize>(items: [T; N]) -> Self {
        match FixedStorage::frozen_from_iter(items) {
            Ok(storage) => Self(storage),
            Err(e) => panic!("{e}"),
        }
    }

    /// A frozen list of the present items, skipping `None`s.
    ///
    /// # Examples
    ///
    /// ```
    /// # use locallist::FixedList;
    /// let list = FixedList::of_some([Some("a"), None, Some("b")]).unwrap();
    /// assert_eq!(list, ["a", "b"]);
    ///
    /// let none = FixedList::<&str>::of_some([None, None]).unwrap();
    /// assert!(none.is_empty());
    /// ```
    pub fn of_some<I>(items: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let present: Vec<T> = items.into_iter().flatten().collect();
        FixedStorage::frozen_from_iter(present).map(Self)
    }

    /// A frozen list adopting `items`, of which only the first `count` are live.
    ///
    /// The buffer is reused without copying; the items past `count` are dropped.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `count > items.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use locallist::FixedList;
    /// let list = FixedList::from_prefix(vec![1, 2, 3, 4], 2).unwrap();
    /// assert_eq!(list, [1, 2]);
    /// assert!(FixedList::from_prefix(vec![1], 2).is_err());
    /// ```
    pub fn from_prefix(items: Vec<T>, count: usize) -> Result<Self, Error> {
        FixedStorage::frozen_from_vec(items, count).map(Self::from_storage)
    }

    /// Moves the items out into a `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.0.map_or_else(Vec::new, FixedStorage::into_vec)
    }
}

impl<T> Default for FixedList<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone + Default> Clone for FixedList<T> {
    /// The clone shares no cursor with `self`: it starts [`Ready`](EnumerationState::Ready).
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Default, const N: usize> From<[T; N]> for FixedList<T> {
    #[inline]
    fn from(items: [T; N]) -> Self {
        Self::of(items)
    }
}

impl_read_only_traits!(FixedList<T>);

impl<T: fmt::Debug> fmt::Debug for FixedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<T> fmt::Display for FixedList<T> {
    /// Diagnostic summary of the frozen state, e.g. `FixedList(Count = 3, Enumeration = <at item 1>)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(storage) => fmt::Display::fmt(storage, f),
            None => f.write_str("FixedList(Count = 0)"),
        }
    }
}

impl<'a, T> IntoIterator for &'a FixedList<T> {
    type Item = &'a T;
    type IntoIter = FixedIter<'a, T>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Default> IntoIterator for FixedList<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<T> MutableList<T> for FixedList<T> {
    fn set(&mut self, _index: usize, _item: T) -> Result<(), Error> {
        Err(Error::CollectionReadOnly)
    }

    fn push(&mut self, _item: T) -> Result<(), Error> {
        Err(Error::CollectionReadOnly)
    }

    fn insert(&mut self, _index: usize, _item: T) -> Result<(), Error> {
        Err(Error::CollectionReadOnly)
    }

    fn remove_item(&mut self, _item: &T) -> Result<bool, Error>
    where
        T: PartialEq,
    {
        Err(Error::CollectionReadOnly)
    }

    fn remove_at(&mut self, _index: usize) -> Result<T, Error> {
        Err(Error::CollectionReadOnly)
    }

    fn clear(&mut self) -> Result<(), Error> {
        Err(Error::CollectionReadOnly)
    }
}

/// Iterator over a [`FixedList`].
pub enum FixedIter<'a, T> {
    /// The storage itself acts as the cursor. Released when dropped.
    Shared(&'a FixedStorage<T>),
    /// An independent cursor, used while the shared one is taken.
    Standalone(slice::Iter<'a, T>),
}

impl<'a, T> Iterator for FixedIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            FixedIter::Shared(storage) => {
                let storage: &'a FixedStorage<T> = *storage;
                storage.advance_cursor()
            }
            FixedIter::Standalone(iter) => iter.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            FixedIter::Shared(storage) => {
                let remaining = storage.cursor_remaining();
                (remaining, Some(remaining))
            }
            FixedIter::Standalone(iter) => iter.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for FixedIter<'_, T> {}

impl<T> FusedIterator for FixedIter<'_, T> {}

impl<T> Drop for FixedIter<'_, T> {
    fn drop(&mut self) {
        if let FixedIter::Shared(storage) = self {
            storage.release_cursor();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for FixedIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixedIter::Shared(storage) => f.debug_tuple("Shared").field(&storage.state()).finish(),
            FixedIter::Standalone(iter) => f.debug_tuple("Standalone").field(iter).finish(),
        }
    }
}
