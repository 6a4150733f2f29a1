//! # `slew` - Sliding-Window Queue for Solver Handles
//!
//! A growable double-ended queue of fixed-width integer handles ([`Id`]),
//! built for the access pattern of a constraint-solving engine: frequent
//! tail append/pop, occasional head prepend/pop, occasional
//! arbitrary-position insert/delete, on typically small-to-medium
//! collections.
//!
//! ## Design
//!
//! All elements live in one contiguous allocation used as a sliding window
//! with slack space on both ends. Head and tail operations consume slack
//! from their end; when an end runs dry, the window slides within the
//! buffer to recycle slack from the other end before any reallocation
//! happens. Growth adds a stepped amount of slack (8/16/32/64 slots by
//! current size) instead of doubling, so wasted memory is hard-capped at 64
//! slots per queue.
//!
//! ### Storage Modes
//!
//! 1. **Empty**: a fresh queue holds no storage at all.
//! 2. **Borrowed** ([`IdQueue::from_buffer`]): the queue works inside a
//!    caller-owned buffer without allocating, until the buffer overflows.
//! 3. **Owned**: heap storage the queue allocates, grows, and frees.
//!
//! Promotion from Borrowed (or Empty) to Owned happens transparently the
//! first time more room is needed than the current buffer provides. A
//! promoted-away borrowed buffer is abandoned: never written again, never
//! freed. [`IdQueue::storage`] exposes the current mode so lenders know
//! when their buffer is done.
//!
//! ### Invariants
//!
//! After every public operation, front slack + live count + tail slack
//! equals the total capacity of the backing buffer (borrowed buffers have
//! no front slack). Debug builds verify this after every growth path.
//!
//! ### Error Model
//!
//! Deliberately thin. Allocation failure aborts the process through
//! `handle_alloc_error`; out-of-range delete positions are silent no-ops;
//! insert positions clamp; pops on an empty queue return `None`. No
//! operation surfaces a recoverable error.
//!
//! ## Example
//!
//! ```rust
//! use slew::{Id, IdQueue};
//!
//! let mut decisions = IdQueue::new();
//! decisions.push_back(Id::new(1));
//! decisions.push_back(Id::new(2));
//! decisions.push_front(Id::new(0));
//! assert_eq!(decisions.len(), 3);
//!
//! decisions.insert(1, Id::new(99));
//! assert_eq!(decisions.remove(1), Some(Id::new(99)));
//! assert_eq!(decisions.pop_front(), Some(Id::new(0)));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod alloc;
pub mod id;
pub mod queue;
pub mod store;

pub use id::Id;
pub use queue::{IdQueue, IntoIter};
pub use store::StorageKind;
