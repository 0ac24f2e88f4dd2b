//! Failure conditions reported by [`LocalList`](crate::LocalList) and [`FixedList`](crate::FixedList).
//!
//! All of them describe programmer errors: they surface immediately and are never retried
//! or masked internally.

/// Errors returned by list operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An index was outside `[0, len)` (or `[0, len]` for insertion).
    #[error("index {index} out of range for list of length {len}")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },
    /// A result has already been extracted from this list, so it can no longer be used.
    #[error("result has been already obtained from this list")]
    ResultAlreadyObtained,
    /// A mutation was attempted through a frozen, read-only view.
    #[error("collection is read-only")]
    CollectionReadOnly,
    /// The list was modified after the enumerator was created.
    #[error("collection has been modified")]
    CollectionModified,
    /// `first`, `last` or `single` was called on an empty list.
    #[error("no items in list")]
    Empty,
    /// `single` was called on a list holding more than one item.
    #[error("more than single item in list")]
    ManyItems,
    /// The requested element count does not fit the packed count field.
    #[error("requested count {requested} exceeds the maximum of {max}")]
    CapacityOverflow {
        /// Count that was requested.
        requested: usize,
        /// Largest representable count.
        max: usize,
    },
}

impl Error {
    #[cold]
    #[inline(never)]
    pub(crate) const fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::out_of_range(5, 2).to_string(),
            "index 5 out of range for list of length 2"
        );
        assert_eq!(
            Error::ResultAlreadyObtained.to_string(),
            "result has been already obtained from this list"
        );
        assert_eq!(
            Error::CapacityOverflow { requested: 10, max: 7 }.to_string(),
            "requested count 10 exceeds the maximum of 7"
        );
    }

    #[test]
    fn variants_are_distinguishable() {
        assert_ne!(Error::CollectionReadOnly, Error::ResultAlreadyObtained);
        assert_ne!(Error::Empty, Error::ManyItems);
        assert_ne!(Error::out_of_range(0, 0), Error::out_of_range(1, 0));
    }
}
