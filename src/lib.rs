//! ## Intro
//!
//! A growable list for the common case of zero to a handful of items: up to eight items are
//! stored inline, with no heap allocation, and larger lists spill into a heap array.
//!
//! Many call sites build a short list, hand it out, and never touch it again. [`LocalList`]
//! is built for exactly that flow. It grows in place while it is being filled, and when the
//! result is taken the same storage is frozen and moved into a read-only [`FixedList`]
//! without copying.
//!
//! ## Containers
//!
//! ### `LocalList`
//!
//! - **Tiered storage**: inline tiers of 1, 2, 3, 4 and 8 slots, then a heap array
//! - **One-shot result**: [`to_vec`], [`resulting_list`] or [`read_only_list`] freeze the
//!   list; afterwards every operation fails with [`Error::ResultAlreadyObtained`]
//! - **Modification detection**: a detached [`Enumerator`] reports
//!   [`Error::CollectionModified`] once the list changes under it
//!
//! ```
//! # use locallist::{Error, LocalList};
//! let mut list = LocalList::new();
//! list.push(1).unwrap();
//! list.push(2).unwrap();
//! assert_eq!(list.capacity(), 4); // inline
//!
//! list.extend([3, 4, 5]);
//! assert_eq!(list.capacity(), 8); // still inline
//!
//! let result = list.resulting_list().unwrap();
//! assert_eq!(result, [1, 2, 3, 4, 5]);
//! assert_eq!(list.push(6), Err(Error::ResultAlreadyObtained));
//! ```
//!
//! ### `FixedList`
//!
//! - **Frozen**: dereferences to `[T]`; mutation through [`MutableList`] fails with
//!   [`Error::CollectionReadOnly`]
//! - **Allocation-free iteration**: the first live iterator reuses the storage as its cursor
//!
//! ```
//! # use locallist::FixedList;
//! let list = FixedList::of([1, 2, 3]);
//! assert_eq!(list.iter().sum::<i32>(), 6);
//! assert_eq!(list[1], 2);
//! ```
//!
//! ## Growth
//!
//! | pushes | 0 | 1..=4 | 5..=8 | 9..=16 | 17..=32 | ... |
//! |--------|---|-------|-------|--------|---------|-----|
//! | capacity | 0 | 4 | 8 | 16 | 32 | doubling |
//!
//! Tiers 2 and 3 come only from explicit capacities and [`trim_excess`], which picks the
//! smallest tier that fits.
//!
//! ## Element type
//!
//! Free slots hold `T::default()`, so building a list requires `T: Default`.
//!
//! ## `no_std` support
//!
//! This crate requires only `core` and `alloc`.
//!
//! ## Optional features
//!
//! ### `tracing`
//!
//! Emits `trace`-level events from [`tracing`] on storage transitions: promotion, trimming,
//! explicit reallocation and freezing. Reads and in-place writes never log.
//!
//! [`to_vec`]: LocalList::to_vec
//! [`resulting_list`]: LocalList::resulting_list
//! [`read_only_list`]: LocalList::read_only_list
//! [`trim_excess`]: LocalList::trim_excess
//! [`tracing`]: https://docs.rs/tracing
#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod utils;

pub mod error;
pub mod state;
pub mod storage;

pub mod list;
#[doc(inline)]
pub use list::MutableList;

pub mod enumerator;
#[doc(inline)]
pub use enumerator::Enumerator;

pub mod fixed_list;
#[doc(inline)]
pub use fixed_list::{FixedIter, FixedList};

pub mod local_list;
#[doc(inline)]
pub use local_list::LocalList;

#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use state::EnumerationState;
