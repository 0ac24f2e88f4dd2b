//! [`LocalList`]: a growable list that keeps small contents inline and freezes into a
//! [`FixedList`] when its result is taken.
//!
//! A list moves through three states:
//!
//! ```text
//! Empty ──push/with_capacity──> Building ──to_vec/resulting_list/read_only_list──> Extracted
//!   └──────────────────────────to_vec/resulting_list/read_only_list──────────────────┘
//! ```
//!
//! While `Empty` or `Building` every operation is available. Once `Extracted`, only
//! [`len`](LocalList::len), [`capacity`](LocalList::capacity) and
//! [`is_extracted`](LocalList::is_extracted) still work; everything else fails with
//! [`Error::ResultAlreadyObtained`]. Extraction cannot be repeated.

use alloc::vec::Vec;
use core::{cmp::Ordering, fmt, mem, ops::RangeBounds, slice};

use crate::{
    enumerator::Enumerator,
    error::Error,
    fixed_list::FixedList,
    list::MutableList,
    storage::FixedStorage,
    utils::split_range_bound,
};

enum Holder<T> {
    /// No storage allocated yet.
    Empty,
    Building(FixedStorage<T>),
    /// The storage was frozen and handed out. `capacity` is what it had at that point.
    Extracted { capacity: usize },
}

/// A growable list that stores up to eight items inline.
///
/// Storage grows through the tiers `4 -> 8 -> 16 -> 32 -> ...`; the first three live inside
/// the list itself. Explicit capacities of 1, 2, 3, 4 and 8 are also inline.
///
/// Every operation returns a `Result`, because a list whose result was already extracted
/// rejects all further use.
///
/// # Examples
///
/// ```
/// # use locallist::LocalList;
/// let mut list = LocalList::new();
/// for i in 1..=9 {
///     list.push(i).unwrap();
/// }
/// assert_eq!(list.len(), 9);
/// assert_eq!(list.capacity(), 16);
/// assert_eq!(list[3], 4);
/// assert_eq!(list.to_vec().unwrap(), [1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
pub struct LocalList<T> {
    holder: Holder<T>,
    len: usize,
}

impl<T> LocalList<T> {
    /// Creates an empty list without allocating.
    ///
    /// # Examples
    ///
    /// ```
    /// # use locallist::LocalList;
    /// let list = LocalList::<u8>::new();
    /// assert_eq!(list.capacity(), 0);
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            holder: Holder::Empty,
            len: 0,
        }
    }

    /// Number of items. Still reports the extracted count after extraction.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the current storage tier.
    #[inline]
    pub fn capacity(&self) -> usize {
        match &self.holder {
            Holder::Empty => 0,
            Holder::Building(storage) => storage.capacity(),
            Holder::Extracted { capacity } => *capacity,
        }
    }

    /// Whether a result was already taken from this list.
    #[inline]
    pub const fn is_extracted(&self) -> bool {
        matches!(self.holder, Holder::Extracted { .. })
    }

    #[inline]
    fn storage(&self) -> Result<Option<&FixedStorage<T>>, Error> {
        match &self.holder {
            Holder::Empty => Ok(None),
            Holder::Building(storage) => {
                debug_assert_eq!(storage.len(), self.len);
                Ok(Some(storage))
            }
            Holder::Extracted { .. } => Err(Error::ResultAlreadyObtained),
        }
    }

    #[inline]
    fn storage_mut(&mut self) -> Result<Option<&mut FixedStorage<T>>, Error> {
        match &mut self.holder {
            Holder::Empty => Ok(None),
            Holder::Building(storage) => Ok(Some(storage)),
            Holder::Extracted { .. } => Err(Error::ResultAlreadyObtained),
        }
    }

    /// Raw state word of the storage, for enumerator validation.
    pub(crate) fn state_bits(&self) -> Result<Option<u64>, Error> {
        Ok(self.storage()?.map(|storage| storage.state().bits()))
    }

    /// The items as a slice.
    #[inline]
    pub fn as_slice(&self) -> Result<&[T], Error> {
        Ok(match self.storage()? {
            Some(storage) => storage.as_slice(),
            None => &[],
        })
    }

    /// A borrowing iterator over the items.
    ///
    /// The borrow keeps the list from being modified while the iterator lives; use
    /// [`enumerator`](Self::enumerator) for a cursor that tolerates (and reports) modification.
    #[inline]
    pub fn iter(&self) -> Result<slice::Iter<'_, T>, Error> {
        self.as_slice().map(<[T]>::iter)
    }

    /// A detached cursor that fails on its next step once the list is modified.
    pub fn enumerator(&self) -> Result<Enumerator, Error> {
        Ok(Enumerator::new(self.state_bits()?, self.len))
    }

    /// Bounds-checked access.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        self.as_slice()?
            .get(index)
            .ok_or_else(|| Error::out_of_range(index, self.len))
    }

    /// Mutable bounds-checked access. Counts as a modification.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        match self.storage_mut()? {
            Some(storage) if index < len => {
                storage.modify_version();
                Ok(storage.item_at_mut(index))
            }
            _ => Err(Error::out_of_range(index, len)),
        }
    }

    /// Position of the first item equal to `item`.
    pub fn index_of(&self, item: &T) -> Result<Option<usize>, Error>
    where
        T: PartialEq,
    {
        Ok(self.storage()?.and_then(|storage| storage.index_of(item)))
    }

    #[inline]
    pub fn contains(&self, item: &T) -> Result<bool, Error>
    where
        T: PartialEq,
    {
        Ok(self.index_of(item)?.is_some())
    }

    /// Whether the list holds any item.
    #[inline]
    pub fn any(&self) -> Result<bool, Error> {
        self.storage()?;
        Ok(self.len > 0)
    }

    /// Whether any item satisfies `predicate`.
    pub fn any_by<F>(&self, predicate: F) -> Result<bool, Error>
    where
        F: FnMut(&T) -> bool,
    {
        Ok(self.as_slice()?.iter().any(predicate))
    }

    /// Whether every item satisfies `predicate`. `true` for an empty list.
    pub fn all<F>(&self, predicate: F) -> Result<bool, Error>
    where
        F: FnMut(&T) -> bool,
    {
        Ok(self.as_slice()?.iter().all(predicate))
    }

    /// # Errors
    /// [`Error::Empty`] if there are no items.
    pub fn first(&self) -> Result<&T, Error> {
        self.as_slice()?.first().ok_or(Error::Empty)
    }

    /// # Errors
    /// [`Error::Empty`] if there are no items.
    pub fn last(&self) -> Result<&T, Error> {
        self.as_slice()?.last().ok_or(Error::Empty)
    }

    /// The only item.
    ///
    /// # Errors
    /// [`Error::Empty`] for no items, [`Error::ManyItems`] for more than one.
    pub fn single(&self) -> Result<&T, Error> {
        match self.as_slice()? {
            [] => Err(Error::Empty),
            [item] => Ok(item),
            _ => Err(Error::ManyItems),
        }
    }

    /// The first item, or the default value for an empty list.
    pub fn first_or_default(&self) -> Result<T, Error>
    where
        T: Clone + Default,
    {
        Ok(self.as_slice()?.first().cloned().unwrap_or_default())
    }

    /// The last item, or the default value for an empty list.
    pub fn last_or_default(&self) -> Result<T, Error>
    where
        T: Clone + Default,
    {
        Ok(self.as_slice()?.last().cloned().unwrap_or_default())
    }

    /// The only item, or the default value for an empty list.
    ///
    /// # Errors
    /// [`Error::ManyItems`] for more than one item.
    pub fn single_or_default(&self) -> Result<T, Error>
    where
        T: Clone + Default,
    {
        match self.as_slice()? {
            [] => Ok(T::default()),
            [item] => Ok(item.clone()),
            _ => Err(Error::ManyItems),
        }
    }

    /// The only item, or the default value when there is not exactly one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use locallist::LocalList;
    /// let mut list = LocalList::new();
    /// assert_eq!(list.single_item(), Ok(0));
    /// list.push(7).unwrap();
    /// assert_eq!(list.single_item(), Ok(7));
    /// list.push(8).unwrap();
    /// assert_eq!(list.single_item(), Ok(0));
    /// ```
    pub fn single_item(&self) -> Result<T, Error>
    where
        T: Clone + Default,
    {
        match self.as_slice()? {
            [item] => Ok(item.clone()),
            _ => Ok(T::default()),
        }
    }

    /// Clones every item into `target`, starting at `target_index`.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `target` has no room for all items.
    pub fn copy_to(&self, target: &mut [T], target_index: usize) -> Result<(), Error>
    where
        T: Clone,
    {
        match self.storage()? {
            Some(storage) => storage.copy_to_slice(target, target_index, 0, self.len),
            None => split_range_bound(&(target_index..target_index), target.len()).map(drop),
        }
    }

    /// Whether every free slot still holds the default value. Always `true` without storage.
    pub fn all_free_slots_are_clear(&self) -> bool
    where
        T: Default + PartialEq,
    {
        match &self.holder {
            Holder::Building(storage) => storage.all_free_slots_are_clear(),
            _ => true,
        }
    }

    /// Freezes the storage and moves it out, leaving the list extracted.
    fn extract(&mut self) -> Result<Option<FixedStorage<T>>, Error> {
        let capacity = self.capacity();
        match mem::replace(&mut self.holder, Holder::Extracted { capacity }) {
            Holder::Empty => Ok(None),
            Holder::Building(mut storage) => {
                storage.freeze();
                Ok(Some(storage))
            }
            Holder::Extracted { .. } => Err(Error::ResultAlreadyObtained),
        }
    }

    /// Freezes the list and returns it as a read-only [`FixedList`].
    ///
    /// The storage moves into the result without copying. An empty list yields
    /// [`FixedList::empty`].
    ///
    /// # Errors
    /// [`Error::ResultAlreadyObtained`] if a result was already taken.
    ///
    /// # Examples
    ///
    /// ```
    /// # use locallist::{Error, LocalList};
    /// let mut list = LocalList::new();
    /// list.push('a').unwrap();
    /// let result = list.resulting_list().unwrap();
    /// assert_eq!(result, ['a']);
    ///
    /// assert_eq!(list.push('b'), Err(Error::ResultAlreadyObtained));
    /// assert!(list.resulting_list().is_err());
    /// ```
    pub fn resulting_list(&mut self) -> Result<FixedList<T>, Error> {
        Ok(self
            .extract()?
            .map_or_else(FixedList::empty, FixedList::from_storage))
    }

    /// Same as [`resulting_list`](Self::resulting_list), for callers that only read the result.
    #[inline]
    pub fn read_only_list(&mut self) -> Result<FixedList<T>, Error> {
        self.resulting_list()
    }
}

impl<T: Default> LocalList<T> {
    /// Creates a list with room for `capacity` items.
    ///
    /// Capacities 1, 2, 3, 4 and 8 are stored inline, anything else in a heap array of exactly
    /// that size. Zero allocates nothing.
    ///
    /// # Errors
    /// [`Error::CapacityOverflow`] if `capacity` exceeds [`MAX_COUNT`](crate::state::MAX_COUNT).
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Ok(Self {
            holder: FixedStorage::with_capacity(capacity)?.map_or(Holder::Empty, Holder::Building),
            len: 0,
        })
    }

    /// Creates a list backed by a heap array of `capacity` slots, even when small.
    ///
    /// Zero allocates nothing, like [`new`](Self::new).
    pub fn with_array_capacity(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 {
            return Ok(Self::new());
        }
        Ok(Self {
            holder: Holder::Building(FixedStorage::with_array_capacity(capacity)?),
            len: 0,
        })
    }

    /// Creates a list that takes over `items` as its storage.
    ///
    /// An exactly sized vector is adopted without copying; spare capacity is released first,
    /// which may reallocate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use locallist::LocalList;
    /// let items = vec![1, 2, 3];
    /// assert_eq!(items.capacity(), 3);
    /// let ptr = items.as_ptr();
    /// let mut list = LocalList::from_vec(items).unwrap();
    /// assert_eq!(list.capacity(), 3);
    ///
    /// // an exactly full array tier hands its buffer back
    /// assert_eq!(list.to_vec().unwrap().as_ptr(), ptr);
    /// ```
    pub fn from_vec(items: Vec<T>) -> Result<Self, Error> {
        let len = items.len();
        if len == 0 {
            return Ok(Self::new());
        }
        Ok(Self {
            holder: Holder::Building(FixedStorage::from_vec(items)?),
            len,
        })
    }

    /// Creates a list holding clones of `items`.
    pub fn from_slice(items: &[T]) -> Result<Self, Error>
    where
        T: Clone,
    {
        let mut list = Self::with_capacity(items.len())?;
        list.extend_from_slice(items)?;
        Ok(list)
    }

    /// Creates an independent copy of `other`.
    ///
    /// With `preserve_capacity` the copy uses the same tier; otherwise it is trimmed to the
    /// smallest tier that fits.
    ///
    /// # Errors
    /// [`Error::ResultAlreadyObtained`] if `other` was extracted.
    ///
    /// # Examples
    ///
    /// ```
    /// # use locallist::LocalList;
    /// let mut list = LocalList::with_capacity(8).unwrap();
    /// list.push(1).unwrap();
    /// list.push(2).unwrap();
    ///
    /// assert_eq!(LocalList::copy_of(&list, true).unwrap().capacity(), 8);
    /// assert_eq!(LocalList::copy_of(&list, false).unwrap().capacity(), 2);
    /// ```
    pub fn copy_of(other: &LocalList<T>, preserve_capacity: bool) -> Result<Self, Error>
    where
        T: Clone,
    {
        let storage = match other.storage()? {
            Some(storage) if preserve_capacity => Some(storage.clone()),
            Some(storage) => storage.trimmed_clone(),
            None => None,
        };
        Ok(Self {
            holder: storage.map_or(Holder::Empty, Holder::Building),
            len: other.len,
        })
    }

    /// Appends `item`, promoting the storage to a larger tier when full.
    ///
    /// The first push into a list without storage allocates the inline four-slot tier.
    pub fn push(&mut self, item: T) -> Result<(), Error> {
        match self.holder {
            Holder::Empty => self.holder = Holder::Building(FixedStorage::first(item)),
            Holder::Building(ref mut storage) => storage.append(item)?,
            Holder::Extracted { .. } => return Err(Error::ResultAlreadyObtained),
        }
        self.len += 1;
        Ok(())
    }

    /// Inserts `item` at `index`, shifting later items right.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `index > len`.
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), Error> {
        let len = self.len;
        match self.storage_mut()? {
            Some(storage) => storage.insert(index, item)?,
            None if index == 0 => return self.push(item),
            None => return Err(Error::out_of_range(index, len)),
        }
        self.len += 1;
        Ok(())
    }

    /// Removes the first item equal to `item`. Returns whether one was found.
    pub fn remove_item(&mut self, item: &T) -> Result<bool, Error>
    where
        T: PartialEq,
    {
        match self.index_of(item)? {
            Some(index) => self.remove_at(index).map(|_| true),
            None => Ok(false),
        }
    }

    /// Removes and returns the item at `index`, shifting later items left.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, Error> {
        let len = self.len;
        let removed = match self.storage_mut()? {
            Some(storage) => storage.remove_at(index)?,
            None => return Err(Error::out_of_range(index, len)),
        };
        self.len -= 1;
        Ok(removed)
    }

    /// Removes every item. The storage and its capacity are kept.
    pub fn clear(&mut self) -> Result<(), Error> {
        if let Some(storage) = self.storage_mut()? {
            storage.clear()?;
        }
        self.len = 0;
        Ok(())
    }

    /// Replaces the item at `index`.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `index >= len`.
    pub fn set(&mut self, index: usize, item: T) -> Result<(), Error> {
        let len = self.len;
        match self.storage_mut()? {
            Some(storage) => storage.set(index, item),
            None => Err(Error::out_of_range(index, len)),
        }
    }

    /// Appends every item of `items`. The iterator's lower size bound is reserved up front.
    pub fn add_range<I>(&mut self, items: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
    {
        let items = items.into_iter();
        let (lower, _) = items.size_hint();
        if lower > 0 {
            self.ensure_capacity(self.len.saturating_add(lower))?;
        }
        for item in items {
            self.push(item)?;
        }
        Ok(())
    }

    /// Appends clones of `items`.
    pub fn extend_from_slice(&mut self, items: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        self.insert_slice(self.len, items)
    }

    /// Appends clones of every item of `other`.
    pub fn append_list(&mut self, other: &LocalList<T>) -> Result<(), Error>
    where
        T: Clone,
    {
        self.extend_from_slice(other.as_slice()?)
    }

    /// Inserts every item of `items` at `index`, keeping their order.
    ///
    /// The items are appended first and then rotated into place with three reversals, so the
    /// iterator's length need not be known.
    ///
    /// # Examples
    ///
    /// ```
    /// # use locallist::LocalList;
    /// let mut list = LocalList::from_slice(&[1, 5]).unwrap();
    /// list.insert_range(1, (2..=4).filter(|_| true)).unwrap();
    /// assert_eq!(list.as_slice().unwrap(), [1, 2, 3, 4, 5]);
    /// ```
    pub fn insert_range<I>(&mut self, index: usize, items: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
    {
        let len = self.len;
        if index > len {
            self.storage()?;
            return Err(Error::out_of_range(index, len));
        }
        let Some(storage) = self.storage_mut()? else {
            return self.add_range(items);
        };
        let result = storage.insert_iter(index, items);
        let count = storage.len();
        self.len = count;
        result.map(drop)
    }

    /// Inserts clones of `items` at `index` with a single shift of the tail.
    pub fn insert_slice(&mut self, index: usize, items: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        let len = self.len;
        self.storage()?;
        if index > len {
            return Err(Error::out_of_range(index, len));
        }
        if items.is_empty() {
            return Ok(());
        }
        self.ensure_capacity(len.saturating_add(items.len()))?;
        if let Some(storage) = self.storage_mut()? {
            storage.insert_from_slice(index, items)?;
        }
        self.len += items.len();
        Ok(())
    }

    /// Sorts the items with [`slice::sort_unstable`].
    pub fn sort_unstable(&mut self) -> Result<(), Error>
    where
        T: Ord,
    {
        self.sort_unstable_range_by(.., T::cmp)
    }

    /// Sorts the items with a comparator.
    pub fn sort_unstable_by<F>(&mut self, compare: F) -> Result<(), Error>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_unstable_range_by(.., compare)
    }

    /// Sorts the items by a key.
    pub fn sort_unstable_by_key<K, F>(&mut self, mut key: F) -> Result<(), Error>
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_unstable_range_by(.., |a, b| key(a).cmp(&key(b)))
    }

    /// Sorts the items in `range`.
    pub fn sort_unstable_range<R>(&mut self, range: R) -> Result<(), Error>
    where
        R: RangeBounds<usize>,
        T: Ord,
    {
        self.sort_unstable_range_by(range, T::cmp)
    }

    /// Sorts the items in `range` with a comparator. Counts as one modification.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `range` reaches past `len` or is reversed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use locallist::LocalList;
    /// let mut list = LocalList::from_slice(&[9, 3, 1, 2, 0]).unwrap();
    /// list.sort_unstable_range_by(1..4, |a, b| b.cmp(a)).unwrap();
    /// assert_eq!(list.as_slice().unwrap(), [9, 3, 2, 1, 0]);
    /// ```
    pub fn sort_unstable_range_by<R, F>(&mut self, range: R, compare: F) -> Result<(), Error>
    where
        R: RangeBounds<usize>,
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = self.len;
        match self.storage_mut()? {
            Some(storage) => storage.sort_unstable_by(range, compare),
            None => split_range_bound(&range, len).map(drop),
        }
    }

    /// Reverses the order of the items.
    pub fn reverse(&mut self) -> Result<(), Error> {
        self.reverse_range(..)
    }

    /// Reverses the order of the items in `range`. Counts as one modification.
    pub fn reverse_range<R>(&mut self, range: R) -> Result<(), Error>
    where
        R: RangeBounds<usize>,
    {
        let len = self.len;
        match self.storage_mut()? {
            Some(storage) => storage.reverse(range),
            None => split_range_bound(&range, len).map(drop),
        }
    }

    /// Makes room for at least `capacity` items.
    ///
    /// A list without storage gets exactly the tier for `capacity`. Otherwise, when growing,
    /// the new capacity is the larger of `capacity` and twice the current one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use locallist::LocalList;
    /// let mut list = LocalList::<i32>::new();
    /// list.ensure_capacity(3).unwrap();
    /// assert_eq!(list.capacity(), 3);
    /// list.ensure_capacity(5).unwrap();
    /// assert_eq!(list.capacity(), 6);
    /// list.ensure_capacity(2).unwrap();
    /// assert_eq!(list.capacity(), 6);
    /// ```
    pub fn ensure_capacity(&mut self, capacity: usize) -> Result<(), Error> {
        match self.holder {
            Holder::Empty => {
                if let Some(storage) = FixedStorage::with_capacity(capacity)? {
                    self.holder = Holder::Building(storage);
                }
                Ok(())
            }
            Holder::Building(ref mut storage) => {
                let current = storage.capacity();
                if current >= capacity {
                    return Ok(());
                }
                storage.reallocate(capacity.max(current.saturating_mul(2)))
            }
            Holder::Extracted { .. } => Err(Error::ResultAlreadyObtained),
        }
    }

    /// Moves the items into storage of exactly `capacity` slots (inline for 1, 2, 3, 4 and 8).
    ///
    /// Zero releases the storage.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `capacity < len`.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), Error> {
        self.storage()?;
        if capacity < self.len {
            return Err(Error::out_of_range(capacity, self.len));
        }
        if capacity == self.capacity() {
            return Ok(());
        }
        match self.holder {
            Holder::Building(_) if capacity == 0 => self.holder = Holder::Empty,
            Holder::Building(ref mut storage) => storage.reallocate(capacity)?,
            _ => {
                if let Some(storage) = FixedStorage::with_capacity(capacity)? {
                    self.holder = Holder::Building(storage);
                }
            }
        }
        Ok(())
    }

    /// Shrinks the storage to the smallest tier that holds the items; an empty list releases
    /// its storage entirely.
    ///
    /// # Examples
    ///
    /// ```
    /// # use locallist::LocalList;
    /// let mut list = LocalList::with_capacity(8).unwrap();
    /// list.extend_from_slice(&[1, 2]).unwrap();
    /// list.trim_excess().unwrap();
    /// assert_eq!(list.capacity(), 2);
    ///
    /// list.clear().unwrap();
    /// list.trim_excess().unwrap();
    /// assert_eq!(list.capacity(), 0);
    /// ```
    pub fn trim_excess(&mut self) -> Result<(), Error> {
        self.storage()?;
        self.holder = match mem::replace(&mut self.holder, Holder::Empty) {
            Holder::Building(storage) => storage
                .trim_excess()
                .map_or(Holder::Empty, Holder::Building),
            holder => holder,
        };
        Ok(())
    }

    /// Freezes the list and moves its items out.
    ///
    /// When the storage is a heap array holding exactly `len` items, that buffer is returned
    /// as is, including a buffer adopted by [`from_vec`](Self::from_vec).
    ///
    /// # Errors
    /// [`Error::ResultAlreadyObtained`] if a result was already taken.
    pub fn to_vec(&mut self) -> Result<Vec<T>, Error> {
        Ok(self
            .extract()?
            .map_or_else(Vec::new, FixedStorage::into_vec))
    }
}

impl<T> Default for LocalList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Default> Clone for LocalList<T> {
    /// Same as [`copy_of`](LocalList::copy_of) with `preserve_capacity`. Cloning an extracted
    /// list gives another extracted list.
    fn clone(&self) -> Self {
        let holder = match &self.holder {
            Holder::Empty => Holder::Empty,
            Holder::Building(storage) => Holder::Building(storage.clone()),
            Holder::Extracted { capacity } => Holder::Extracted {
                capacity: *capacity,
            },
        };
        Self {
            holder,
            len: self.len,
        }
    }
}

impl<T: Default> From<Vec<T>> for LocalList<T> {
    /// Adopts the vector's buffer, see [`from_vec`](LocalList::from_vec).
    ///
    /// # Panics
    /// Panics if the vector is longer than [`MAX_COUNT`](crate::state::MAX_COUNT).
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Default> FromIterator<T> for LocalList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Default> Extend<T> for LocalList<T> {
    /// # Panics
    /// Panics if the list was extracted.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        if let Err(e) = self.add_range(iter) {
            panic!("{e}");
        }
    }
}

impl<T> core::ops::Index<usize> for LocalList<T> {
    type Output = T;

    /// # Panics
    /// Panics if `index` is out of range or the list was extracted.
    #[inline]
    fn index(&self, index: usize) -> &T {
        self.get(index).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T> core::ops::IndexMut<usize> for LocalList<T> {
    /// Counts as a modification, like [`get_mut`](LocalList::get_mut).
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.get_mut(index).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Default> MutableList<T> for LocalList<T> {
    #[inline]
    fn set(&mut self, index: usize, item: T) -> Result<(), Error> {
        LocalList::set(self, index, item)
    }

    #[inline]
    fn push(&mut self, item: T) -> Result<(), Error> {
        LocalList::push(self, item)
    }

    #[inline]
    fn insert(&mut self, index: usize, item: T) -> Result<(), Error> {
        LocalList::insert(self, index, item)
    }

    #[inline]
    fn remove_item(&mut self, item: &T) -> Result<bool, Error>
    where
        T: PartialEq,
    {
        LocalList::remove_item(self, item)
    }

    #[inline]
    fn remove_at(&mut self, index: usize) -> Result<T, Error> {
        LocalList::remove_at(self, index)
    }

    #[inline]
    fn clear(&mut self) -> Result<(), Error> {
        LocalList::clear(self)
    }
}

impl<T: fmt::Display> fmt::Display for LocalList<T> {
    /// `[a, b, c]`, or `<result obtained>` once extracted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Ok(items) = self.as_slice() else {
            return f.write_str("<result obtained>");
        };
        f.write_str("[")?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for LocalList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("LocalList");
        match &self.holder {
            Holder::Empty => s.field("tier", &"None").field("items", &<&[T]>::default()),
            Holder::Building(storage) => s
                .field("tier", &storage.tier().name())
                .field("items", &storage.as_slice()),
            Holder::Extracted { .. } => s.field("extracted", &true).field("len", &self.len),
        };
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{format, string::ToString, vec, vec::Vec};
    use proptest::prelude::*;

    #[test]
    fn promotion_from_empty() {
        let mut list = LocalList::new();
        let mut capacities = vec![list.capacity()];
        for i in 0..40 {
            list.push(i).unwrap();
            capacities.push(list.capacity());
            assert!(list.all_free_slots_are_clear());
        }
        let mut expected = vec![0, 4, 4, 4, 4, 8, 8, 8, 8];
        expected.extend([16; 8]);
        expected.extend([32; 16]);
        expected.extend([64; 8]);
        assert_eq!(capacities, expected);
    }

    #[test]
    fn promotion_from_capacity_one() {
        let mut list = LocalList::with_capacity(1).unwrap();
        let mut capacities = Vec::new();
        for i in 0..9 {
            list.push(i).unwrap();
            capacities.push(list.capacity());
        }
        assert_eq!(capacities, [1, 4, 4, 4, 8, 8, 8, 8, 16]);
    }

    #[test]
    fn nine_items() {
        let mut list = LocalList::new();
        for i in 1..=9 {
            list.push(i).unwrap();
        }
        assert_eq!(list.len(), 9);
        assert_eq!(list.capacity(), 16);
        assert_eq!(list[3], 4);
        assert_eq!(list.to_vec().unwrap(), [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn remove_first_of_two() {
        let mut list = LocalList::new();
        list.push(1).unwrap();
        list.push(2).unwrap();
        assert_eq!(list.remove_at(0), Ok(1));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0], 2);
        assert!(list.all_free_slots_are_clear());
        let Holder::Building(storage) = &list.holder else {
            panic!("storage expected");
        };
        assert_eq!(storage.tier().slots()[1], 0);
    }

    #[test]
    fn extraction_is_one_shot() {
        type Extract = fn(&mut LocalList<i32>) -> Result<(), Error>;
        let extractors: [Extract; 3] = [
            |l| l.to_vec().map(drop),
            |l| l.resulting_list().map(drop),
            |l| l.read_only_list().map(drop),
        ];
        for first in extractors {
            for second in extractors {
                let mut list: LocalList<i32> = (0..3).collect();
                first(&mut list).unwrap();
                assert_eq!(second(&mut list), Err(Error::ResultAlreadyObtained));
                assert!(list.is_extracted());
            }
        }
    }

    #[test]
    fn empty_list_extracts_once() {
        let mut list = LocalList::<i32>::new();
        let result = list.resulting_list().unwrap();
        assert!(result.is_empty());
        assert!(result.storage().is_none());
        assert_eq!(list.to_vec(), Err(Error::ResultAlreadyObtained));
    }

    #[test]
    fn extracted_list_rejects_everything() {
        let mut list: LocalList<i32> = (1..=3).collect();
        let result = list.resulting_list().unwrap();
        assert_eq!(result, [1, 2, 3]);

        let e = Err(Error::ResultAlreadyObtained);
        assert_eq!(list.push(4), e);
        assert_eq!(list.insert(0, 4), e);
        assert_eq!(list.remove_item(&1), Err(Error::ResultAlreadyObtained));
        assert_eq!(list.remove_at(0), Err(Error::ResultAlreadyObtained));
        assert_eq!(list.clear(), e);
        assert_eq!(list.set(0, 1), e);
        assert_eq!(list.add_range([1]), e);
        assert_eq!(list.extend_from_slice(&[1]), e);
        assert_eq!(list.insert_range(0, [1]), e);
        assert_eq!(list.insert_range(9, [1]), e);
        assert_eq!(list.insert_slice(0, &[1]), e);
        assert_eq!(list.sort_unstable(), e);
        assert_eq!(list.reverse(), e);
        assert_eq!(list.ensure_capacity(10), e);
        assert_eq!(list.set_capacity(10), e);
        assert_eq!(list.trim_excess(), e);
        assert!(list.get(0).is_err());
        assert!(list.get_mut(0).is_err());
        assert!(list.first().is_err());
        assert!(list.as_slice().is_err());
        assert!(list.iter().is_err());
        assert_eq!(list.any(), Err(Error::ResultAlreadyObtained));
        assert_eq!(list.contains(&1), Err(Error::ResultAlreadyObtained));
        assert_eq!(list.single_item(), Err(Error::ResultAlreadyObtained));
        assert!(LocalList::copy_of(&list, true).is_err());

        assert_eq!(list.len(), 3);
        assert_eq!(list.capacity(), 3);
        assert_eq!(list.to_string(), "<result obtained>");
        assert!(list.clone().is_extracted());
    }

    #[test]
    fn to_vec_reuses_exact_array() {
        let mut list = LocalList::with_array_capacity(3).unwrap();
        list.extend_from_slice(&[1, 2, 3]).unwrap();
        let ptr = list.as_slice().unwrap().as_ptr();
        let items = list.to_vec().unwrap();
        assert_eq!(items, [1, 2, 3]);
        assert_eq!(items.as_ptr(), ptr);
    }

    #[test]
    fn from_slice_does_not_alias() {
        let source = vec![1, 2, 3, 4, 5];
        let mut list = LocalList::from_slice(&source).unwrap();
        list.set(0, 10).unwrap();
        assert_eq!(source, [1, 2, 3, 4, 5]);
        let out = list.to_vec().unwrap();
        assert_eq!(out, [10, 2, 3, 4, 5]);
        assert_ne!(out.as_ptr(), source.as_ptr());
    }

    #[test]
    fn insert_and_remove() {
        let mut list = LocalList::new();
        list.insert(0, 'b').unwrap();
        list.insert(0, 'a').unwrap();
        list.insert(2, 'd').unwrap();
        list.insert(2, 'c').unwrap();
        assert_eq!(list.as_slice().unwrap(), ['a', 'b', 'c', 'd']);
        assert_eq!(
            list.insert(5, 'x'),
            Err(Error::OutOfRange { index: 5, len: 4 })
        );
        assert_eq!(LocalList::<char>::new().insert(1, 'x'), Err(Error::OutOfRange { index: 1, len: 0 }));

        assert_eq!(list.remove_item(&'c'), Ok(true));
        assert_eq!(list.remove_item(&'z'), Ok(false));
        assert_eq!(list.remove_at(9), Err(Error::OutOfRange { index: 9, len: 3 }));
        assert_eq!(list.to_string(), "[a, b, d]");
    }

    #[test]
    fn bounds_use_zero_based_check() {
        let mut list: LocalList<i32> = (0..4).collect();
        assert_eq!(list.get(4), Err(Error::OutOfRange { index: 4, len: 4 }));
        assert_eq!(list.set(4, 0), Err(Error::OutOfRange { index: 4, len: 4 }));
        assert_eq!(list.get(3), Ok(&3));
        assert!(LocalList::<i32>::new().get(0).is_err());
        assert!(LocalList::<i32>::new().set(0, 1).is_err());
    }

    #[test]
    #[should_panic(expected = "index 2 out of range for list of length 2")]
    fn index_panics_with_message() {
        let list: LocalList<i32> = (0..2).collect();
        let _item = list[2];
    }

    #[test]
    fn index_mut_counts_as_modification() {
        let mut list: LocalList<i32> = (0..2).collect();
        let mut e = list.enumerator().unwrap();
        list[1] = 5;
        assert_eq!(list[1], 5);
        assert_eq!(e.move_next(&list), Err(Error::CollectionModified));
    }

    #[test]
    fn queries() {
        let empty = LocalList::<i32>::new();
        assert_eq!(empty.any(), Ok(false));
        assert_eq!(empty.all(|_| false), Ok(true));
        assert_eq!(empty.first(), Err(Error::Empty));
        assert_eq!(empty.last(), Err(Error::Empty));
        assert_eq!(empty.single(), Err(Error::Empty));
        assert_eq!(empty.first_or_default(), Ok(0));
        assert_eq!(empty.last_or_default(), Ok(0));
        assert_eq!(empty.single_or_default(), Ok(0));

        let one: LocalList<i32> = [7].into_iter().collect();
        assert_eq!(one.single(), Ok(&7));
        assert_eq!(one.single_or_default(), Ok(7));

        let many: LocalList<i32> = [3, 4, 5].into_iter().collect();
        assert_eq!(many.any(), Ok(true));
        assert_eq!(many.any_by(|x| *x > 4), Ok(true));
        assert_eq!(many.all(|x| *x > 3), Ok(false));
        assert_eq!(many.first(), Ok(&3));
        assert_eq!(many.last(), Ok(&5));
        assert_eq!(many.single(), Err(Error::ManyItems));
        assert_eq!(many.single_or_default(), Err(Error::ManyItems));
        assert_eq!(many.single_item(), Ok(0));
        assert_eq!(many.first_or_default(), Ok(3));
        assert_eq!(many.last_or_default(), Ok(5));
        assert_eq!(many.index_of(&5), Ok(Some(2)));
        assert_eq!(many.contains(&6), Ok(false));
        assert_eq!(many.iter().unwrap().sum::<i32>(), 12);
    }

    #[test]
    fn copy_to_checks_room() {
        let list: LocalList<i32> = [1, 2].into_iter().collect();
        let mut target = [0; 3];
        list.copy_to(&mut target, 1).unwrap();
        assert_eq!(target, [0, 1, 2]);
        assert!(list.copy_to(&mut target, 2).is_err());
        assert!(LocalList::<i32>::new().copy_to(&mut target, 3).is_ok());
        assert!(LocalList::<i32>::new().copy_to(&mut target, 4).is_err());
    }

    #[test]
    fn ranges() {
        let mut list: LocalList<i32> = [1, 2, 3].into_iter().collect();
        list.add_range([4, 5]).unwrap();
        list.insert_range(0, (-1..1).filter(|_| true)).unwrap();
        assert_eq!(list.as_slice().unwrap(), [-1, 0, 1, 2, 3, 4, 5]);
        list.insert_slice(3, &[10, 11]).unwrap();
        assert_eq!(list.as_slice().unwrap(), [-1, 0, 1, 10, 11, 2, 3, 4, 5]);
        assert_eq!(list.len(), 9);

        let other: LocalList<i32> = [8, 9].into_iter().collect();
        list.append_list(&other).unwrap();
        assert_eq!(list.last(), Ok(&9));
        assert_eq!(list.len(), 11);
        assert!(list.all_free_slots_are_clear());

        assert!(list.insert_range(12, [0]).is_err());
        assert!(list.insert_slice(12, &[0]).is_err());

        let mut empty = LocalList::new();
        empty.insert_range(0, [1, 2]).unwrap();
        assert_eq!(empty.as_slice().unwrap(), [1, 2]);
    }

    #[test]
    fn sorting_and_reversing() {
        let mut list: LocalList<i32> = [5, 1, 4, 2, 3].into_iter().collect();
        list.sort_unstable().unwrap();
        assert_eq!(list.as_slice().unwrap(), [1, 2, 3, 4, 5]);
        list.sort_unstable_by(|a, b| b.cmp(a)).unwrap();
        assert_eq!(list.as_slice().unwrap(), [5, 4, 3, 2, 1]);
        list.sort_unstable_by_key(|x| (*x - 3).abs()).unwrap();
        assert_eq!(list[0], 3);
        list.sort_unstable_range(1..).unwrap();
        list.reverse_range(..2).unwrap();
        list.reverse().unwrap();
        assert_eq!(list.len(), 5);
        assert!(list.sort_unstable_range(0..6).is_err());
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = 4..2;
        assert!(list.reverse_range(reversed).is_err());

        let mut empty = LocalList::<i32>::new();
        assert!(empty.sort_unstable().is_ok());
        assert!(empty.reverse_range(0..1).is_err());
    }

    #[test]
    fn capacity_management() {
        let mut list = LocalList::<i32>::new();
        list.set_capacity(8).unwrap();
        assert_eq!(list.capacity(), 8);
        list.extend_from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(
            list.set_capacity(2),
            Err(Error::OutOfRange { index: 2, len: 3 })
        );
        list.set_capacity(3).unwrap();
        assert_eq!(list.capacity(), 3);
        list.ensure_capacity(4).unwrap();
        assert_eq!(list.capacity(), 6);
        list.trim_excess().unwrap();
        assert_eq!(list.capacity(), 3);
        list.clear().unwrap();
        list.set_capacity(0).unwrap();
        assert_eq!(list.capacity(), 0);

        let mut array = LocalList::<i32>::with_array_capacity(4).unwrap();
        array.push(1).unwrap();
        array.trim_excess().unwrap();
        assert_eq!(array.capacity(), 1);
        array.clear().unwrap();
        array.trim_excess().unwrap();
        assert_eq!(array.capacity(), 0);
        assert!(LocalList::<u8>::with_capacity(usize::MAX).is_err());
    }

    #[test]
    fn zero_array_capacity_allocates_nothing() {
        let mut list = LocalList::<i32>::with_array_capacity(0).unwrap();
        assert_eq!(list.capacity(), 0);
        assert_eq!(format!("{list:?}"), "LocalList { tier: \"None\", items: [] }");
        list.push(1).unwrap();
        assert_eq!(list.capacity(), 4);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut list: LocalList<i32> = (0..10).collect();
        let capacity = list.capacity();
        list.clear().unwrap();
        assert!(list.is_empty());
        assert_eq!(list.capacity(), capacity);
        assert!(list.all_free_slots_are_clear());
    }

    #[test]
    fn from_vec_adopts_buffer() {
        let list = LocalList::from(vec![1, 2, 3]);
        assert_eq!(list.capacity(), 3);
        assert_eq!(list.len(), 3);
        let empty = LocalList::<i32>::from(Vec::new());
        assert_eq!(empty.capacity(), 0);
    }

    #[test]
    fn mutable_list_dispatch() {
        fn exercise<L: MutableList<i32>>(list: &mut L) -> Result<i32, Error> {
            list.push(1)?;
            list.push(2)?;
            list.insert(0, 0)?;
            list.set(2, 5)?;
            list.remove_item(&1)?;
            let removed = list.remove_at(0)?;
            list.clear()?;
            Ok(removed)
        }
        let mut list = LocalList::new();
        assert_eq!(exercise(&mut list), Ok(0));
        assert!(list.is_empty());
    }

    #[test]
    fn formatting() {
        let mut list: LocalList<i32> = [1, 2].into_iter().collect();
        assert_eq!(list.to_string(), "[1, 2]");
        assert_eq!(LocalList::<i32>::new().to_string(), "[]");
        assert_eq!(
            format!("{list:?}"),
            "LocalList { tier: \"Cap2\", items: [1, 2] }"
        );
        let _ = list.to_vec().unwrap();
        assert_eq!(
            format!("{list:?}"),
            "LocalList { extracted: true, len: 2 }"
        );
        assert_eq!(
            format!("{:?}", LocalList::<i32>::new()),
            "LocalList { tier: \"None\", items: [] }"
        );
    }

    #[derive(Clone, Debug)]
    enum Op {
        Push(u8),
        Insert(usize, u8),
        RemoveAt(usize),
        Set(usize, u8),
        Clear,
        Sort,
        Reverse,
        Trim,
        InsertRange(usize, Vec<u8>),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => any::<u8>().prop_map(Op::Push),
            2 => (any::<usize>(), any::<u8>()).prop_map(|(i, v)| Op::Insert(i, v)),
            2 => any::<usize>().prop_map(Op::RemoveAt),
            1 => (any::<usize>(), any::<u8>()).prop_map(|(i, v)| Op::Set(i, v)),
            1 => Just(Op::Clear),
            1 => Just(Op::Sort),
            1 => Just(Op::Reverse),
            1 => Just(Op::Trim),
            1 => (any::<usize>(), proptest::collection::vec(any::<u8>(), 0..12))
                .prop_map(|(i, v)| Op::InsertRange(i, v)),
        ]
    }

    fn apply(list: &mut LocalList<u8>, model: &mut Vec<u8>, op: Op) {
        let len = model.len();
        match op {
            Op::Push(v) => {
                list.push(v).unwrap();
                model.push(v);
            }
            Op::Insert(i, v) => {
                let i = i % (len + 1);
                list.insert(i, v).unwrap();
                model.insert(i, v);
            }
            Op::RemoveAt(i) if len > 0 => {
                let i = i % len;
                assert_eq!(list.remove_at(i).unwrap(), model.remove(i));
            }
            Op::RemoveAt(i) => assert!(list.remove_at(i).is_err()),
            Op::Set(i, v) if len > 0 => {
                list.set(i % len, v).unwrap();
                model[i % len] = v;
            }
            Op::Set(i, v) => assert!(list.set(i, v).is_err()),
            Op::Clear => {
                list.clear().unwrap();
                model.clear();
            }
            Op::Sort => {
                list.sort_unstable().unwrap();
                model.sort_unstable();
            }
            Op::Reverse => {
                list.reverse().unwrap();
                model.reverse();
            }
            Op::Trim => list.trim_excess().unwrap(),
            Op::InsertRange(i, items) => {
                let i = i % (len + 1);
                list.insert_range(i, items.iter().copied()).unwrap();
                let tail = model.split_off(i);
                model.extend(items);
                model.extend(tail);
            }
        }
    }

    proptest! {
        #[test]
        fn behaves_like_vec(ops in proptest::collection::vec(op(), 0..64)) {
            let mut list = LocalList::new();
            let mut model = Vec::new();
            for op in ops {
                apply(&mut list, &mut model, op);
                prop_assert_eq!(list.as_slice().unwrap(), model.as_slice());
                prop_assert_eq!(list.len(), model.len());
                prop_assert!(list.capacity() >= list.len());
                prop_assert!(list.all_free_slots_are_clear());
            }
            prop_assert_eq!(list.to_vec().unwrap(), model);
        }

        #[test]
        fn capacity_never_shrinks_on_push(items in proptest::collection::vec(any::<i64>(), 0..200)) {
            let mut list = LocalList::new();
            let mut last = 0;
            for item in &items {
                list.push(*item).unwrap();
                prop_assert!(list.capacity() >= last);
                prop_assert!(list.capacity() >= list.len());
                last = list.capacity();
            }
            prop_assert_eq!(list.to_vec().unwrap(), items);
        }

        #[test]
        fn clones_are_independent(
            items in proptest::collection::vec(any::<u16>(), 0..40),
            extra in any::<u16>(),
            preserve in any::<bool>(),
        ) {
            let source = LocalList::from_slice(&items).unwrap();
            let mut copy = LocalList::copy_of(&source, preserve).unwrap();
            let capacity = source.capacity();

            copy.push(extra).unwrap();
            if !copy.is_empty() {
                copy.set(0, extra.wrapping_add(1)).unwrap();
            }
            copy.reverse().unwrap();

            prop_assert_eq!(source.as_slice().unwrap(), items.as_slice());
            prop_assert_eq!(source.len(), items.len());
            prop_assert_eq!(source.capacity(), capacity);
            prop_assert!(source.all_free_slots_are_clear());
        }

        #[test]
        fn sources_do_not_leak_into_copies(
            items in proptest::collection::vec(any::<u16>(), 0..40),
            extra in any::<u16>(),
        ) {
            let mut source = LocalList::from_slice(&items).unwrap();
            let trimmed = LocalList::copy_of(&source, false).unwrap();
            let preserved = LocalList::copy_of(&source, true).unwrap();
            let cloned = source.clone();

            source.push(extra).unwrap();
            source.set(0, extra.wrapping_add(1)).unwrap();
            source.reverse().unwrap();
            source.remove_at(0).unwrap();
            let _ = source.to_vec().unwrap();

            for copy in [&trimmed, &preserved, &cloned] {
                prop_assert_eq!(copy.as_slice().unwrap(), items.as_slice());
                prop_assert_eq!(copy.len(), items.len());
                prop_assert!(!copy.is_extracted());
                prop_assert!(copy.all_free_slots_are_clear());
            }
        }

        #[test]
        fn copied_array_round_trips(items in proptest::collection::vec(any::<u32>(), 0..100)) {
            let mut list = LocalList::from_slice(&items).unwrap();
            prop_assert_eq!(list.to_vec().unwrap(), items);
        }
    }
}
