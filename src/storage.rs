//! Fixed-capacity storage shared by [`LocalList`](crate::LocalList) and [`FixedList`](crate::FixedList).
//!
//! A [`FixedStorage`] is one of a closed set of capacity tiers ([`Tier`]) plus the packed
//! [`StateWord`]. Inline tiers keep their slots in a plain array, so lists of up to eight
//! items live entirely inside their owner and never touch the allocator.
//!
//! Every slot holds a real `T`. Slots at index `>= len` hold `T::default()`; moving an element
//! out of a slot leaves the default value behind, which is what keeps that invariant.
//!
//! # Growth
//!
//! Appending to a full storage promotes it to a larger tier:
//!
//! ```text
//! Cap1 ─┐
//! Cap2 ─┴─> Cap4 ─┐
//!           Cap3 ─┴─> Cap8 ──> Array(16) ──> Array(32) ──> ...
//! ```
//!
//! `Cap2` and `Cap3` are only ever produced by [`FixedStorage::trim_excess`] or an explicit
//! capacity request: growth favours large jumps, shrinking favours an exact fit.

use alloc::{boxed::Box, vec::Vec};
use core::{
    cmp::Ordering as CmpOrdering,
    fmt, mem,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::{
    error::Error,
    state::{BEFORE_FIRST, EnumerationState, READY, StateWord},
    utils::{cold_path, split_range_bound, trace},
};

/// Capacity allocated by the first `push` into an empty list.
pub const FIRST_ADD_CAPACITY: usize = 4;

/// Capacities that are stored inline, smallest first.
pub const INLINE_CAPACITIES: [usize; 5] = [1, 2, 3, 4, 8];

/// Capacity of the first heap array created by promotion out of [`Tier::Eight`].
pub const FIRST_ARRAY_CAPACITY: usize = 16;

/// The closed set of storage shapes.
#[derive(Clone)]
pub enum Tier<T> {
    One([T; 1]),
    Two([T; 2]),
    Three([T; 3]),
    Four([T; 4]),
    Eight([T; 8]),
    /// Heap slots; the capacity is the slice length.
    Array(Box<[T]>),
}

impl<T> Tier<T> {
    /// Number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        match self {
            Tier::One(_) => 1,
            Tier::Two(_) => 2,
            Tier::Three(_) => 3,
            Tier::Four(_) => 4,
            Tier::Eight(_) => 8,
            Tier::Array(slots) => slots.len(),
        }
    }

    /// Short name used in diagnostics.
    pub const fn name(&self) -> &'static str {
        match self {
            Tier::One(_) => "Cap1",
            Tier::Two(_) => "Cap2",
            Tier::Three(_) => "Cap3",
            Tier::Four(_) => "Cap4",
            Tier::Eight(_) => "Cap8",
            Tier::Array(_) => "CapArray",
        }
    }

    #[inline]
    pub const fn is_inline(&self) -> bool {
        !matches!(self, Tier::Array(_))
    }

    /// All slots, free ones included.
    #[inline]
    pub fn slots(&self) -> &[T] {
        match self {
            Tier::One(slots) => slots,
            Tier::Two(slots) => slots,
            Tier::Three(slots) => slots,
            Tier::Four(slots) => slots,
            Tier::Eight(slots) => slots,
            Tier::Array(slots) => slots,
        }
    }

    #[inline]
    pub fn slots_mut(&mut self) -> &mut [T] {
        match self {
            Tier::One(slots) => slots,
            Tier::Two(slots) => slots,
            Tier::Three(slots) => slots,
            Tier::Four(slots) => slots,
            Tier::Eight(slots) => slots,
            Tier::Array(slots) => slots,
        }
    }

    /// Capacity of the tier an append to this full tier moves to, never less than `required`.
    #[inline]
    fn promoted_capacity(&self, required: usize) -> usize {
        let next = match self {
            Tier::One(_) | Tier::Two(_) => 4,
            Tier::Three(_) | Tier::Four(_) => 8,
            Tier::Eight(_) => FIRST_ARRAY_CAPACITY,
            Tier::Array(slots) => slots.len().saturating_mul(2),
        };
        if next > required { next } else { required }
    }
}

/// Smallest standard capacity holding `count` items: the exact inline tier up to four,
/// `8` up to eight, and an exact-length array beyond that.
#[inline]
pub const fn fitted_capacity(count: usize) -> usize {
    match count {
        0..=4 => count,
        5..=8 => 8,
        _ => count,
    }
}

impl<T: Default> Tier<T> {
    /// The tier for an explicit capacity request, or `None` for zero.
    ///
    /// Capacities 1, 2, 3, 4 and 8 are stored inline; anything else is an array of exactly
    /// `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Option<Self> {
        Some(match capacity {
            0 => return None,
            1 => Tier::One(Default::default()),
            2 => Tier::Two(Default::default()),
            3 => Tier::Three(Default::default()),
            4 => Tier::Four(Default::default()),
            8 => Tier::Eight(Default::default()),
            _ => Tier::array(capacity),
        })
    }

    /// A heap array of `capacity` default slots.
    pub fn array(capacity: usize) -> Self {
        Tier::Array(core::iter::repeat_with(T::default).take(capacity).collect())
    }

    /// An empty tier of the same shape and capacity as `self`.
    fn empty_like(&self) -> Self {
        match self {
            Tier::One(_) => Tier::One(Default::default()),
            Tier::Two(_) => Tier::Two(Default::default()),
            Tier::Three(_) => Tier::Three(Default::default()),
            Tier::Four(_) => Tier::Four(Default::default()),
            Tier::Eight(_) => Tier::Eight(Default::default()),
            Tier::Array(slots) => Tier::array(slots.len()),
        }
    }
}

/// One storage instance: a [`Tier`] plus its packed [`StateWord`].
///
/// While mutable, a storage is exclusively owned by one [`LocalList`](crate::LocalList) and
/// every mutation goes through `&mut self`. Once frozen it is read-only and may be shared;
/// the only write left is the compare-and-swap that hands out the shared self-enumeration.
pub struct FixedStorage<T> {
    state: AtomicU64,
    tier: Tier<T>,
}

impl<T> FixedStorage<T> {
    #[inline]
    const fn from_parts(state: StateWord, tier: Tier<T>) -> Self {
        Self {
            state: AtomicU64::new(state.bits()),
            tier,
        }
    }

    /// Snapshot of the packed state word.
    #[inline(always)]
    pub fn state(&self) -> StateWord {
        StateWord::from_bits(self.state.load(Ordering::Acquire))
    }

    #[inline(always)]
    fn state_mut(&mut self) -> StateWord {
        StateWord::from_bits(*self.state.get_mut())
    }

    #[inline(always)]
    fn set_state(&mut self, state: StateWord) {
        *self.state.get_mut() = state.bits();
    }

    #[inline(always)]
    pub fn is_frozen(&self) -> bool {
        self.state().is_frozen()
    }

    /// Number of live elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.state().count()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.tier.capacity()
    }

    #[inline(always)]
    pub fn tier(&self) -> &Tier<T> {
        &self.tier
    }

    /// The live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        let len = self.len();
        &self.tier.slots()[..len]
    }

    /// Slot access without checking `index < len`.
    ///
    /// The caller is responsible for `index < len`; an index past the capacity still panics.
    #[inline(always)]
    pub fn item_at(&self, index: usize) -> &T {
        debug_assert!(index < self.len());
        &self.tier.slots()[index]
    }

    #[inline(always)]
    pub(crate) fn item_at_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.state_mut().count());
        &mut self.tier.slots_mut()[index]
    }

    /// Bounds-checked read.
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        self.as_slice()
            .get(index)
            .ok_or_else(|| Error::out_of_range(index, self.len()))
    }

    /// The state word of a storage that may still be written.
    ///
    /// # Errors
    /// [`Error::CollectionReadOnly`] once frozen.
    #[inline(always)]
    fn mutable_state(&mut self) -> Result<StateWord, Error> {
        let state = self.state_mut();
        if state.is_frozen() {
            cold_path();
            return Err(Error::CollectionReadOnly);
        }
        Ok(state)
    }

    /// Bounds-checked write. Frozen storages reject it with [`Error::CollectionReadOnly`].
    pub fn set(&mut self, index: usize, value: T) -> Result<(), Error> {
        let state = self.mutable_state()?;
        if index >= state.count() {
            return Err(Error::out_of_range(index, state.count()));
        }
        self.tier.slots_mut()[index] = value;
        self.set_state(state.bump_version());
        Ok(())
    }

    /// Position of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().position(|current| current == item)
    }

    #[inline]
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    /// Advances the modification version, invalidating detached enumerators.
    #[inline(always)]
    pub(crate) fn modify_version(&mut self) {
        let state = self.state_mut();
        debug_assert!(!state.is_frozen(), "modifying a frozen storage");
        self.set_state(state.bump_version());
    }

    /// Freezes the storage for good. The count is fixed and the low bits become the
    /// self-enumeration cursor. Freezing a frozen storage does nothing.
    pub fn freeze(&mut self) {
        let state = self.state_mut();
        if state.is_frozen() {
            return;
        }
        trace!(tier = self.tier.name(), count = state.count(), "freezing storage");
        self.set_state(state.freeze());
    }

    /// Copies `len` elements starting at `from` into `target[target_index..]`.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if either range does not fit.
    pub fn copy_to_slice(
        &self,
        target: &mut [T],
        target_index: usize,
        from: usize,
        len: usize,
    ) -> Result<(), Error>
    where
        T: Clone,
    {
        let source = self.as_slice();
        let (start, end) = split_range_bound(&(from..from.saturating_add(len)), source.len())?;
        let (target_start, target_end) =
            split_range_bound(&(target_index..target_index.saturating_add(len)), target.len())?;
        target[target_start..target_end].clone_from_slice(&source[start..end]);
        Ok(())
    }

    /// Swaps in `tier` and moves the live elements over with one block swap.
    ///
    /// The new tier's slots are all free, so the old tier is left holding only defaults.
    fn replace_tier(&mut self, mut tier: Tier<T>) {
        let count = self.state_mut().count();
        debug_assert!(tier.capacity() >= count);
        tier.slots_mut()[..count].swap_with_slice(&mut self.tier.slots_mut()[..count]);
        self.tier = tier;
    }

    /// Tries to claim the shared self-enumeration of a frozen storage.
    ///
    /// Exactly one caller wins until the winner calls [`release_cursor`](Self::release_cursor).
    pub(crate) fn try_claim_cursor(&self) -> bool {
        let state = self.state();
        debug_assert!(state.is_frozen());
        let ready = state.with_cursor(READY);
        let claimed = state.with_cursor(BEFORE_FIRST);
        self.state
            .compare_exchange(ready.bits(), claimed.bits(), Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Steps the claimed self-enumeration. Only the claimant may call this.
    pub(crate) fn advance_cursor(&self) -> Option<&T> {
        let state = self.state();
        let count = state.count();
        // BEFORE_FIRST wraps to 0.
        let next = state.cursor().wrapping_add(1) as usize;
        if next >= count {
            self.state
                .store(state.with_cursor(count as u32).bits(), Ordering::Release);
            return None;
        }
        self.state
            .store(state.with_cursor(next as u32).bits(), Ordering::Release);
        Some(&self.tier.slots()[next])
    }

    /// Elements the claimed self-enumeration has not yielded yet.
    pub(crate) fn cursor_remaining(&self) -> usize {
        let state = self.state();
        match state.enumeration_state() {
            EnumerationState::Ready | EnumerationState::BeforeFirst => state.count(),
            EnumerationState::AtElement(at) => state.count() - at - 1,
            EnumerationState::Exhausted => 0,
        }
    }

    pub(crate) fn release_cursor(&self) {
        let state = self.state();
        self.state
            .store(state.with_cursor(READY).bits(), Ordering::Release);
    }

    /// Moves the elements out. When the array tier is exactly full its buffer is returned as is.
    pub(crate) fn into_vec(self) -> Vec<T>
    where
        T: Default,
    {
        let len = self.len();
        match self.tier {
            Tier::Array(slots) if slots.len() == len => slots.into_vec(),
            mut tier => tier.slots_mut()[..len].iter_mut().map(mem::take).collect(),
        }
    }
}

impl<T: Default> FixedStorage<T> {
    /// A mutable storage with the tier for `capacity`, or `None` for zero.
    pub fn with_capacity(capacity: usize) -> Result<Option<Self>, Error> {
        StateWord::builder().with_count(capacity)?;
        Ok(Tier::with_capacity(capacity).map(|tier| Self::from_parts(StateWord::builder(), tier)))
    }

    /// A mutable storage that uses a heap array even for small capacities.
    pub fn with_array_capacity(capacity: usize) -> Result<Self, Error> {
        StateWord::builder().with_count(capacity)?;
        Ok(Self::from_parts(StateWord::builder(), Tier::array(capacity)))
    }

    /// A mutable [`Tier::Four`] holding `item`, the storage created by the first push.
    pub fn first(item: T) -> Self {
        let mut slots: [T; FIRST_ADD_CAPACITY] = Default::default();
        slots[0] = item;
        // one element is always representable
        let state = StateWord::from_bits(1 << crate::state::COUNT_SHIFT);
        Self::from_parts(state, Tier::Four(slots))
    }

    /// A mutable storage adopting `items` as its heap array.
    ///
    /// The buffer is reused when it is exactly sized; spare capacity is released first, which
    /// may reallocate.
    pub fn from_vec(items: Vec<T>) -> Result<Self, Error> {
        let state = StateWord::builder().with_count(items.len())?;
        Ok(Self::from_parts(state, Tier::Array(items.into_boxed_slice())))
    }

    /// A frozen storage adopting `items` as its heap array, of which the first `count` are live.
    ///
    /// As with [`from_vec`](Self::from_vec), spare capacity is released first.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] if `count > items.len()`.
    pub fn frozen_from_vec(mut items: Vec<T>, count: usize) -> Result<Self, Error> {
        if count > items.len() {
            return Err(Error::out_of_range(count, items.len()));
        }
        let state = StateWord::frozen(count)?;
        items[count..].fill_with(T::default);
        Ok(Self::from_parts(state, Tier::Array(items.into_boxed_slice())))
    }

    /// A frozen storage holding `items`, in the smallest tier that fits, or `None` if empty.
    pub fn frozen_from_iter<I>(items: I) -> Result<Option<Self>, Error>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        let count = items.len();
        let state = StateWord::frozen(count)?;
        let Some(mut tier) = Tier::with_capacity(fitted_capacity(count)) else {
            return Ok(None);
        };
        let mut written = 0;
        for (slot, item) in tier.slots_mut().iter_mut().zip(items) {
            *slot = item;
            written += 1;
        }
        debug_assert_eq!(written, count, "ExactSizeIterator::len must be right");
        Ok(Some(Self::from_parts(state, tier)))
    }

    /// Appends `item`, promoting to the next tier when full. Advances the version.
    pub fn append(&mut self, item: T) -> Result<(), Error> {
        self.push_unversioned(item)?;
        self.modify_version();
        Ok(())
    }

    /// Appends without touching the version; used by bulk operations that bump it once.
    pub(crate) fn push_unversioned(&mut self, item: T) -> Result<(), Error> {
        let state = self.mutable_state()?;
        let count = state.count();
        let next = state.with_count(count + 1)?;
        if count == self.tier.capacity() {
            cold_path();
            self.promote(count + 1);
        }
        self.tier.slots_mut()[count] = item;
        self.set_state(next);
        Ok(())
    }

    /// Replaces the tier with the next larger one, moving the live elements across.
    fn promote(&mut self, required: usize) {
        let capacity = self.tier.promoted_capacity(required);
        // arrays stay arrays, even when the doubled size would be an inline capacity
        let grown = match Tier::with_capacity(capacity) {
            Some(tier) if self.tier.is_inline() => tier,
            _ => Tier::array(capacity),
        };
        trace!(
            from = self.tier.name(),
            to = grown.name(),
            count = self.len(),
            "promoting storage"
        );
        self.replace_tier(grown);
    }

    /// Moves the live elements into the tier for `capacity`. The state word is kept, so
    /// detached enumerators stay valid.
    ///
    /// `capacity` must be non-zero and hold the live elements.
    pub(crate) fn reallocate(&mut self, capacity: usize) -> Result<(), Error> {
        StateWord::builder().with_count(capacity)?;
        let count = self.mutable_state()?.count();
        debug_assert!(capacity >= count);
        let Some(tier) = Tier::with_capacity(capacity) else {
            return Ok(());
        };
        trace!(
            from = self.tier.name(),
            to = tier.name(),
            count,
            "reallocating storage"
        );
        self.replace_tier(tier);
        Ok(())
    }

    /// Inserts `item` at `index`, shifting the tail right. Advances the version.
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), Error> {
        let count = self.mutable_state()?.count();
        if index > count {
            return Err(Error::out_of_range(index, count));
        }
        self.push_unversioned(item)?;
        self.tier.slots_mut()[index..=count].rotate_right(1);
        self.modify_version();
        Ok(())
    }

    /// Removes the element at `index`, shifting the tail left and clearing the vacated slot.
    pub fn remove_at(&mut self, index: usize) -> Result<T, Error> {
        let state = self.mutable_state()?;
        let count = state.count();
        if index >= count {
            return Err(Error::out_of_range(index, count));
        }
        let slots = self.tier.slots_mut();
        slots[index..count].rotate_left(1);
        let removed = mem::take(&mut slots[count - 1]);
        // count - 1 always fits
        let next = StateWord::from_bits(state.bits() - (1 << crate::state::COUNT_SHIFT));
        self.set_state(next.bump_version());
        Ok(removed)
    }

    /// Resets every live slot to the default value.
    pub fn clear(&mut self) -> Result<(), Error> {
        let state = self.mutable_state()?;
        let count = state.count();
        self.tier.slots_mut()[..count].fill_with(T::default);
        self.set_state(StateWord::from_bits(state.bits() & !crate::state::COUNT_MASK).bump_version());
        Ok(())
    }

    /// Inserts clones of `items` at `index` with a single rotation. Advances the version once.
    pub fn insert_from_slice(&mut self, index: usize, items: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        let old_count = self.mutable_state()?.count();
        if index > old_count {
            return Err(Error::out_of_range(index, old_count));
        }
        if items.is_empty() {
            return Ok(());
        }
        let new_count = old_count + items.len();
        self.state_mut().with_count(new_count)?;
        if new_count > self.tier.capacity() {
            cold_path();
            self.promote(new_count);
        }
        let slots = self.tier.slots_mut();
        slots[old_count..new_count].clone_from_slice(items);
        slots[index..new_count].rotate_right(items.len());
        let state = self.state_mut().with_count(new_count)?;
        self.set_state(state.bump_version());
        Ok(())
    }

    /// Appends everything `items` yields, then rotates the new run into place at `index`.
    ///
    /// The length of `items` need not be known: the run is appended at the tail and moved with
    /// three in-place reversals, so no auxiliary buffer is needed. Advances the version once.
    pub fn insert_iter<I>(&mut self, index: usize, items: I) -> Result<usize, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let old_count = self.mutable_state()?.count();
        if index > old_count {
            return Err(Error::out_of_range(index, old_count));
        }
        let mut result = Ok(());
        for item in items {
            result = self.push_unversioned(item);
            if result.is_err() {
                break;
            }
        }
        let new_count = self.state_mut().count();
        if new_count != old_count {
            let slots = self.tier.slots_mut();
            slots[index..old_count].reverse();
            slots[old_count..new_count].reverse();
            slots[index..new_count].reverse();
            self.modify_version();
        }
        result.map(|()| new_count - old_count)
    }

    /// Sorts the live elements in `range` with `compare`. Advances the version once.
    pub fn sort_unstable_by<R, F>(&mut self, range: R, compare: F) -> Result<(), Error>
    where
        R: core::ops::RangeBounds<usize>,
        F: FnMut(&T, &T) -> CmpOrdering,
    {
        let count = self.mutable_state()?.count();
        let (start, end) = split_range_bound(&range, count)?;
        self.tier.slots_mut()[start..end].sort_unstable_by(compare);
        self.modify_version();
        Ok(())
    }

    /// Reverses the live elements in `range`. Advances the version once.
    pub fn reverse<R>(&mut self, range: R) -> Result<(), Error>
    where
        R: core::ops::RangeBounds<usize>,
    {
        let count = self.mutable_state()?.count();
        let (start, end) = split_range_bound(&range, count)?;
        self.tier.slots_mut()[start..end].reverse();
        self.modify_version();
        Ok(())
    }

    /// Shrinks to the smallest standard tier that holds the live elements.
    ///
    /// Returns `None` for an empty storage and `self` unchanged when no smaller tier fits.
    pub fn trim_excess(mut self) -> Option<Self> {
        let count = self.state_mut().count();
        if count == 0 {
            return None;
        }
        let capacity = fitted_capacity(count);
        if capacity >= self.tier.capacity() {
            return Some(self);
        }
        trace!(from = self.tier.name(), count, "trimming storage");
        let mut tier = Tier::with_capacity(capacity)?;
        tier.slots_mut()[..count].swap_with_slice(&mut self.tier.slots_mut()[..count]);
        Some(Self::from_parts(self.state_mut(), tier))
    }

    /// Like [`trim_excess`](Self::trim_excess), but leaves `self` alone and returns an
    /// independent copy (a plain clone when no smaller tier fits).
    pub fn trimmed_clone(&self) -> Option<Self>
    where
        T: Clone,
    {
        let state = self.state();
        let count = state.count();
        if count == 0 {
            return None;
        }
        let capacity = fitted_capacity(count);
        if capacity >= self.tier.capacity() {
            return Some(self.clone());
        }
        let mut tier = Tier::with_capacity(capacity)?;
        tier.slots_mut()[..count].clone_from_slice(self.as_slice());
        Some(Self::from_parts(state, tier))
    }

    /// Whether every slot at index `>= len` still holds the default value.
    pub fn all_free_slots_are_clear(&self) -> bool
    where
        T: PartialEq,
    {
        let default = T::default();
        self.tier.slots()[self.len()..]
            .iter()
            .all(|slot| *slot == default)
    }
}

impl<T: Clone + Default> Clone for FixedStorage<T> {
    /// Copies the live elements into a storage of the same tier; free slots of the copy are
    /// defaults. A frozen storage clones into a frozen one with no live self-enumeration.
    fn clone(&self) -> Self {
        let mut state = self.state();
        if state.is_frozen() {
            state = state.with_cursor(READY);
        }
        let mut tier = self.tier.empty_like();
        let len = state.count();
        tier.slots_mut()[..len].clone_from_slice(self.as_slice());
        Self::from_parts(state, tier)
    }
}

impl<T> fmt::Display for FixedStorage<T> {
    /// Diagnostic summary, e.g. `Builder(Count = 2, Version = 0x00000003)` or
    /// `FixedList(Count = 3, Enumeration = <at item 1>)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state();
        if !state.is_frozen() {
            return write!(
                f,
                "Builder(Count = {}, Version = 0x{:08X})",
                state.count(),
                state.version()
            );
        }
        write!(f, "FixedList(Count = {}", state.count())?;
        match state.enumeration_state() {
            EnumerationState::Ready => {}
            EnumerationState::BeforeFirst => f.write_str(", Enumeration = <before item 0>")?,
            EnumerationState::AtElement(at) => write!(f, ", Enumeration = <at item {at}>")?,
            EnumerationState::Exhausted => f.write_str(", Enumeration = <after last item>")?,
        }
        f.write_str(")")
    }
}

impl<T: fmt::Debug> fmt::Debug for FixedStorage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedStorage")
            .field("tier", &self.tier.name())
            .field("state", &self.state())
            .field("items", &self.as_slice())
            .finish()
    }
}
