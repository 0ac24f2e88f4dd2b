//! The packed count/version/frozen word carried by every [`FixedStorage`](crate::storage::FixedStorage).
//!
//! One `u64` holds three fields so a storage needs no separate header:
//!
//! ```text
//!  63 | 62 ........... 32 | 31 ............. 0
//! frz |   count (31 bit)  | version / cursor
//! ```
//!
//! Before freezing, the low half is a wrapping modification counter used to detect stale
//! enumerators. After freezing the count can no longer change and the low half is reused as
//! the cursor of the single shared self-enumeration (see [`EnumerationState`]).

use crate::error::Error;

/// Bit that marks a storage as frozen.
pub const FROZEN_BIT: u64 = 1 << 63;

/// Position of the lowest count bit.
pub const COUNT_SHIFT: u32 = 32;

/// Width of the count field.
pub const COUNT_BITS: u32 = 31;

/// Mask of the count field, already shifted into place.
pub const COUNT_MASK: u64 = ((1 << COUNT_BITS) - 1) << COUNT_SHIFT;

/// Mask of the version / cursor field.
pub const LOW_MASK: u64 = (1 << COUNT_SHIFT) - 1;

/// Largest element count the word can represent.
pub const MAX_COUNT: usize = (1 << COUNT_BITS) - 1;

/// Cursor value while no self-enumeration is live.
pub const READY: u32 = u32::MAX - 1;

/// Cursor value right after a self-enumeration was claimed.
pub const BEFORE_FIRST: u32 = u32::MAX;

/// A decoded copy of the packed state word.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct StateWord(u64);

/// Where the shared self-enumeration of a frozen storage currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnumerationState {
    /// Nobody holds the self-enumerator; the next `iter()` call may claim it.
    Ready,
    /// Claimed, but `next` was not called yet.
    BeforeFirst,
    /// Positioned at the given element.
    AtElement(usize),
    /// Claimed and ran past the last element.
    Exhausted,
}

impl StateWord {
    /// A mutable storage holding no elements, at version 0.
    #[inline]
    pub const fn builder() -> Self {
        Self(0)
    }

    /// A frozen storage of `count` elements, ready for enumeration.
    ///
    /// # Errors
    /// [`Error::CapacityOverflow`] if `count > MAX_COUNT`.
    #[inline]
    pub const fn frozen(count: usize) -> Result<Self, Error> {
        match Self::builder().with_count(count) {
            Ok(word) => Ok(word.freeze()),
            Err(e) => Err(e),
        }
    }

    #[inline(always)]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[inline(always)]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline(always)]
    pub const fn is_frozen(self) -> bool {
        self.0 & FROZEN_BIT != 0
    }

    #[inline(always)]
    pub const fn count(self) -> usize {
        ((self.0 & COUNT_MASK) >> COUNT_SHIFT) as usize
    }

    /// Replaces the count field.
    ///
    /// # Errors
    /// [`Error::CapacityOverflow`] if `count > MAX_COUNT`; the word is never truncated.
    #[inline]
    pub const fn with_count(self, count: usize) -> Result<Self, Error> {
        if count > MAX_COUNT {
            return Err(Error::CapacityOverflow {
                requested: count,
                max: MAX_COUNT,
            });
        }
        Ok(Self(
            (self.0 & !COUNT_MASK) | ((count as u64) << COUNT_SHIFT),
        ))
    }

    #[inline(always)]
    const fn low(self) -> u32 {
        (self.0 & LOW_MASK) as u32
    }

    #[inline(always)]
    const fn with_low(self, low: u32) -> Self {
        Self((self.0 & !LOW_MASK) | low as u64)
    }

    /// Modification counter of a mutable storage.
    #[inline(always)]
    pub const fn version(self) -> u32 {
        debug_assert!(!self.is_frozen());
        self.low()
    }

    /// Advances the version, wrapping at 2^32.
    ///
    /// A wrap can hide a concurrent modification from an enumerator that
    /// was created exactly 2^32 modifications earlier.
    #[inline(always)]
    pub const fn bump_version(self) -> Self {
        debug_assert!(!self.is_frozen());
        self.with_low(self.low().wrapping_add(1))
    }

    /// Sets the frozen bit and resets the low half to [`READY`].
    #[inline]
    pub const fn freeze(self) -> Self {
        Self(self.0 | FROZEN_BIT).with_low(READY)
    }

    /// Raw cursor of a frozen storage.
    #[inline(always)]
    pub const fn cursor(self) -> u32 {
        debug_assert!(self.is_frozen());
        self.low()
    }

    #[inline(always)]
    pub const fn with_cursor(self, cursor: u32) -> Self {
        debug_assert!(self.is_frozen());
        self.with_low(cursor)
    }

    /// Decodes the cursor of a frozen storage.
    pub const fn enumeration_state(self) -> EnumerationState {
        match self.cursor() {
            READY => EnumerationState::Ready,
            BEFORE_FIRST => EnumerationState::BeforeFirst,
            at if (at as usize) < self.count() => EnumerationState::AtElement(at as usize),
            _ => EnumerationState::Exhausted,
        }
    }
}

impl core::fmt::Debug for StateWord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut s = f.debug_struct("StateWord");
        s.field("frozen", &self.is_frozen())
            .field("count", &self.count());
        if self.is_frozen() {
            s.field("enumeration", &self.enumeration_state());
        } else {
            s.field("version", &self.version());
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_boundaries() {
        assert_eq!(FROZEN_BIT, 0x8000_0000_0000_0000);
        assert_eq!(COUNT_MASK, 0x7FFF_FFFF_0000_0000);
        assert_eq!(LOW_MASK, 0x0000_0000_FFFF_FFFF);
        assert_eq!(FROZEN_BIT & COUNT_MASK, 0);
        assert_eq!(COUNT_MASK & LOW_MASK, 0);
        assert_eq!(FROZEN_BIT | COUNT_MASK | LOW_MASK, u64::MAX);
        assert_eq!(MAX_COUNT, 0x7FFF_FFFF);
        assert!((MAX_COUNT as u64) < READY as u64);
    }

    #[test]
    fn builder_starts_at_zero() {
        let word = StateWord::builder();
        assert!(!word.is_frozen());
        assert_eq!(word.count(), 0);
        assert_eq!(word.version(), 0);
        assert_eq!(word.bits(), 0);
    }

    #[test]
    fn count_field_is_isolated() {
        let word = StateWord::builder()
            .bump_version()
            .bump_version()
            .with_count(MAX_COUNT)
            .unwrap();
        assert_eq!(word.count(), MAX_COUNT);
        assert_eq!(word.version(), 2);
        assert!(!word.is_frozen());
        assert_eq!(word.bits(), (MAX_COUNT as u64) << 32 | 2);
    }

    #[test]
    fn count_overflow_is_reported() {
        let err = StateWord::builder().with_count(MAX_COUNT + 1).unwrap_err();
        assert_eq!(
            err,
            Error::CapacityOverflow {
                requested: MAX_COUNT + 1,
                max: MAX_COUNT
            }
        );
        assert!(StateWord::frozen(MAX_COUNT + 1).is_err());
    }

    #[test]
    fn version_wraps_without_touching_count() {
        let word = StateWord::from_bits((3 << 32) | u32::MAX as u64).bump_version();
        assert_eq!(word.version(), 0);
        assert_eq!(word.count(), 3);
        assert!(!word.is_frozen());
    }

    #[test]
    fn freeze_repurposes_low_bits() {
        let word = StateWord::builder()
            .bump_version()
            .with_count(3)
            .unwrap()
            .freeze();
        assert!(word.is_frozen());
        assert_eq!(word.count(), 3);
        assert_eq!(word.cursor(), READY);
        assert_eq!(word.enumeration_state(), EnumerationState::Ready);
        assert_eq!(StateWord::frozen(3).unwrap(), word);
    }

    #[test]
    fn cursor_states() {
        let word = StateWord::frozen(2).unwrap();
        assert_eq!(
            word.with_cursor(BEFORE_FIRST).enumeration_state(),
            EnumerationState::BeforeFirst
        );
        assert_eq!(
            word.with_cursor(1).enumeration_state(),
            EnumerationState::AtElement(1)
        );
        assert_eq!(
            word.with_cursor(2).enumeration_state(),
            EnumerationState::Exhausted
        );
        assert_eq!(word.with_cursor(1).count(), 2);
    }
}
