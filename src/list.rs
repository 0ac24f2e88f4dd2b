//! The list-shaped mutation surface shared by the builder and its frozen result.

use crate::error::Error;

/// Index-based mutation, as offered by [`LocalList`](crate::LocalList).
///
/// [`FixedList`](crate::FixedList) implements it too, so code written against a mutable list can
/// be handed a frozen one; every call on it fails with [`Error::CollectionReadOnly`].
///
/// # Examples
///
/// ```
/// # use locallist::{Error, FixedList, LocalList, MutableList};
/// fn fill(list: &mut impl MutableList<i32>) -> Result<(), Error> {
///     list.push(1)?;
///     list.push(2)?;
///     list.insert(0, 0)
/// }
///
/// let mut local = LocalList::new();
/// fill(&mut local).unwrap();
/// assert_eq!(local.as_slice().unwrap(), [0, 1, 2]);
///
/// let mut fixed = FixedList::of([1]);
/// assert_eq!(fill(&mut fixed), Err(Error::CollectionReadOnly));
/// ```
pub trait MutableList<T> {
    /// Replaces the item at `index`.
    fn set(&mut self, index: usize, item: T) -> Result<(), Error>;

    /// Appends an item.
    fn push(&mut self, item: T) -> Result<(), Error>;

    /// Inserts an item at `index`, which may equal the length.
    fn insert(&mut self, index: usize, item: T) -> Result<(), Error>;

    /// Removes the first item equal to `item`; `Ok(false)` if there is none.
    fn remove_item(&mut self, item: &T) -> Result<bool, Error>
    where
        T: PartialEq;

    /// Removes and returns the item at `index`.
    fn remove_at(&mut self, index: usize) -> Result<T, Error>;

    /// Removes every item.
    fn clear(&mut self) -> Result<(), Error>;
}
