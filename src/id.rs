//! `Id` — the fixed-width solver handle stored by the queue.
//!
//! The surrounding solver assigns meaning to handles; this crate never
//! interprets them. Handles are compared only by equality, so `Id` carries
//! no ordering.

/// An opaque 32-bit solver handle.
///
/// `Id::ZERO` is the all-zeroes handle; bulk insertion of blank slots
/// ([`IdQueue::insert_zeroed`](crate::IdQueue::insert_zeroed)) produces it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[repr(transparent)]
pub struct Id(i32);

impl Id {
    /// The all-zeroes handle.
    pub const ZERO: Id = Id(0);

    /// Creates a handle from its raw value.
    #[inline(always)]
    pub const fn new(raw: i32) -> Self {
        Id(raw)
    }

    /// Returns the raw value of the handle.
    #[inline(always)]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl From<i32> for Id {
    #[inline(always)]
    fn from(raw: i32) -> Self {
        Id(raw)
    }
}

impl From<Id> for i32 {
    #[inline(always)]
    fn from(id: Id) -> Self {
        id.0
    }
}
