//! A detached, version-checked cursor over a [`LocalList`].
//!
//! Unlike a borrowing iterator, an [`Enumerator`] does not hold on to the list between steps,
//! so the list may be mutated while one is alive. The enumerator remembers the storage's packed
//! state word from when it was created; any later mutation changes that word, and the next
//! [`move_next`](Enumerator::move_next) reports [`Error::CollectionModified`].
//!
//! ```
//! # use locallist::{Error, LocalList};
//! let mut list: LocalList<i32> = [1, 2, 3].into_iter().collect();
//!
//! let mut e = list.enumerator().unwrap();
//! assert_eq!(e.move_next(&list), Ok(true));
//! assert_eq!(e.current(&list), Some(&1));
//!
//! list.push(4).unwrap();
//! assert_eq!(e.move_next(&list), Err(Error::CollectionModified));
//! ```

use crate::{error::Error, local_list::LocalList};

/// Cursor created by [`LocalList::enumerator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Enumerator {
    /// State word at creation, `None` if the list had no storage.
    state: Option<u64>,
    /// Number of successful steps; the current item is `position - 1`.
    position: usize,
    count: usize,
}

impl Enumerator {
    pub(crate) const fn new(state: Option<u64>, count: usize) -> Self {
        Self {
            state,
            position: 0,
            count,
        }
    }

    /// Steps to the next item. Returns `Ok(false)` once every item has been visited.
    ///
    /// Only the state word is compared, not the identity of `list`. Passing a different list
    /// whose word happens to match, such as an unmodified clone of the original, is not
    /// detected and walks that list's items.
    ///
    /// # Errors
    /// [`Error::CollectionModified`] if `list` changed since this enumerator was created,
    /// including when a result was extracted from it.
    pub fn move_next<T>(&mut self, list: &LocalList<T>) -> Result<bool, Error> {
        match list.state_bits() {
            Ok(state) if state == self.state => {}
            _ => return Err(Error::CollectionModified),
        }
        if self.position < self.count {
            self.position += 1;
            return Ok(true);
        }
        self.position = self.count + 1;
        Ok(false)
    }

    /// The item the last successful [`move_next`](Self::move_next) stopped at.
    ///
    /// `None` before the first step, after the last one, or if `list` no longer has that item.
    pub fn current<'a, T>(&self, list: &'a LocalList<T>) -> Option<&'a T> {
        let index = self.position.checked_sub(1)?;
        if index >= self.count {
            return None;
        }
        list.as_slice().ok()?.get(index)
    }

    /// Rewinds to before the first item. The captured state is kept, so a list modified in
    /// the meantime is still reported.
    pub fn reset(&mut self) {
        self.position = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(items: &[i32]) -> LocalList<i32> {
        LocalList::from_slice(items).unwrap()
    }

    #[test]
    fn walks_every_item() {
        let list = list_of(&[1, 2, 3]);
        let mut e = list.enumerator().unwrap();
        assert_eq!(e.current(&list), None);

        let mut seen = [0; 3];
        let mut n = 0;
        while e.move_next(&list).unwrap() {
            seen[n] = *e.current(&list).unwrap();
            n += 1;
        }
        assert_eq!(seen, [1, 2, 3]);
        assert_eq!(e.current(&list), None);
        assert_eq!(e.move_next(&list), Ok(false));
    }

    #[test]
    fn empty_list_yields_nothing() {
        let list = LocalList::<i32>::new();
        let mut e = list.enumerator().unwrap();
        assert_eq!(e.move_next(&list), Ok(false));
        assert_eq!(e.current(&list), None);
    }

    #[test]
    fn every_mutation_invalidates() {
        type Mutation = fn(&mut LocalList<i32>);
        let mutations: [Mutation; 8] = [
            |l| l.push(9).unwrap(),
            |l| l.insert(1, 9).unwrap(),
            |l| assert_eq!(l.remove_at(0), Ok(3)),
            |l| l.set(0, 9).unwrap(),
            |l| *l.get_mut(0).unwrap() = 9,
            |l| l.clear().unwrap(),
            |l| l.sort_unstable().unwrap(),
            |l| l.reverse().unwrap(),
        ];
        for mutate in mutations {
            let mut list = list_of(&[3, 1, 2]);
            let mut e = list.enumerator().unwrap();
            assert_eq!(e.move_next(&list), Ok(true));
            mutate(&mut list);
            assert_eq!(e.move_next(&list), Err(Error::CollectionModified));

            let mut fresh = list.enumerator().unwrap();
            assert!(fresh.move_next(&list).is_ok());
        }
    }

    #[test]
    fn first_push_invalidates_empty_enumerator() {
        let mut list = LocalList::new();
        let mut e = list.enumerator().unwrap();
        list.push(1).unwrap();
        assert_eq!(e.move_next(&list), Err(Error::CollectionModified));
    }

    #[test]
    fn extraction_invalidates() {
        let mut list = list_of(&[1]);
        let mut e = list.enumerator().unwrap();
        let _ = list.to_vec().unwrap();
        assert_eq!(e.move_next(&list), Err(Error::CollectionModified));
        assert_eq!(list.enumerator(), Err(Error::ResultAlreadyObtained));
    }

    #[test]
    fn capacity_changes_keep_enumerators_valid() {
        let mut list = list_of(&[1, 2]);
        let mut e = list.enumerator().unwrap();
        list.ensure_capacity(40).unwrap();
        assert_eq!(e.move_next(&list), Ok(true));
        assert_eq!(e.current(&list), Some(&1));
    }

    #[test]
    fn unmodified_clone_passes_the_check() {
        let list = list_of(&[1, 2]);
        let copy = list.clone();
        let mut e = list.enumerator().unwrap();
        assert_eq!(e.move_next(&copy), Ok(true));
        assert_eq!(e.current(&copy), Some(&1));
    }

    #[test]
    fn reset_rewinds() {
        let list = list_of(&[5, 6]);
        let mut e = list.enumerator().unwrap();
        while e.move_next(&list).unwrap() {}
        e.reset();
        assert_eq!(e.move_next(&list), Ok(true));
        assert_eq!(e.current(&list), Some(&5));
    }
}
