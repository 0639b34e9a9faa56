//! Slot handles.
//!
//! A [`SlotHandle`] encodes the physical location of one slot within the
//! chain. Because slots are released strictly last-in-first-out, a live
//! block's position in the chain never changes, so a handle resolves in
//! O(1) for as long as its slot is live.

use std::fmt;

/// Physical location of a slot within a [`ChainAllocator`](crate::ChainAllocator).
///
/// Resolved via [`slot`](crate::ChainAllocator::slot) and
/// [`slot_mut`](crate::ChainAllocator::slot_mut). A handle carries no
/// liveness information; resolving one after its slot was trimmed is a
/// caller contract violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct SlotHandle {
    /// Position of the owning block in the chain, oldest first.
    pub(crate) block: u32,
    /// Byte offset of the slot within the block's payload.
    pub(crate) offset: u32,
}

impl SlotHandle {
    pub(crate) fn new(block: u32, offset: u32) -> Self {
        Self { block, offset }
    }

    /// Position of the owning block in the chain, oldest first.
    pub fn block(&self) -> u32 {
        self.block
    }

    /// Byte offset of the slot within its block's payload.
    pub fn offset(&self) -> u32 {
        self.offset
    }
}

impl fmt::Display for SlotHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotHandle(block={}, off={})", self.block, self.offset)
    }
}
